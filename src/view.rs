//! Zero-copy views.
//!
//! A view presents some of the elements of a source [`Array`] as an array of
//! its own, by translating each logical index into an offset in the source.
//! Nothing is copied: reading a view reads the source, and writing a view
//! (when the source is borrowed mutably) writes the source.
//!
//! ```
//! use array_kernel::view;
//!
//! let mut src = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let mut v = view::slice(&mut src, 3, 3).unwrap();
//! assert_eq!(v.to_vec(), [4, 5, 6]);
//! v[0] = 99;
//! assert_eq!(src[3], 99);
//! ```
//!
//! The source can be anything that implements [`Array`]: `&A` gives a
//! read-only view, `&mut A` a read-write view, and views can be stacked.
//! Views have a fixed length and never implement [`Growable`].
//!
//! Every constructor checks that all the offsets its view can produce lie
//! within the source, so indexing a view with `index < len()` never strays
//! outside it. Indexing past `len()` panics.
//!
//! [`Growable`]: crate::Growable

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::array::{Array, ArrayMut};
use crate::error::{check_range, Invalid, Result};

/// Translates a logical index into an offset in the source.
pub trait Mapping: Copy {
    /// The source offset of logical element `index`.
    fn offset(&self, index: usize) -> usize;
}

/// `base + index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contiguous {
    base: usize,
}

impl Mapping for Contiguous {
    #[inline(always)]
    fn offset(&self, index: usize) -> usize {
        self.base + index
    }
}

/// `base + index * stride`, where `stride` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strided {
    base: usize,
    stride: isize,
}

impl Mapping for Strided {
    #[inline(always)]
    fn offset(&self, index: usize) -> usize {
        (self.base as isize + index as isize * self.stride) as usize
    }
}

/// Runs of `group` consecutive elements, the runs starting `stride`
/// elements apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interleaved {
    base: usize,
    group: usize,
    stride: isize,
}

impl Mapping for Interleaved {
    #[inline(always)]
    fn offset(&self, index: usize) -> usize {
        let (run, within) = (index / self.group, index % self.group);
        (self.base as isize + run as isize * self.stride) as usize + within
    }
}

/// Returns `base + steps * stride + within` if it is a valid offset into a
/// source of `len`.
fn offset_within(base: usize, steps: usize, stride: isize, within: usize, len: usize) -> Result<usize> {
    let offset = isize::try_from(steps)
        .ok()
        .and_then(|steps| steps.checked_mul(stride))
        .and_then(|delta| isize::try_from(within).ok()?.checked_add(delta))
        .and_then(|delta| isize::try_from(base).ok()?.checked_add(delta))
        .ok_or(Invalid::Overflow)?;
    if offset >= 0 && (offset as usize) < len {
        Ok(offset as usize)
    } else {
        Err(Invalid::OffsetOutOfRange { offset, len }.into())
    }
}

// ----------------------------------------------------------------------------

/// An [`Array`] of `len` elements of `source`, located by `M`.
#[derive(Debug, Clone)]
pub struct View<S, M> {
    source: S,
    mapping: M,
    len: usize,
}

/// The return type of [`slice()`].
pub type SliceView<S> = View<S, Contiguous>;

/// The return type of [`stride()`], [`reverse()`] and [`reverse_range()`].
pub type StrideView<S> = View<S, Strided>;

/// The return type of [`interleave()`].
pub type InterleaveView<S> = View<S, Interleaved>;

impl<S: Array, M: Mapping> View<S, M> {
    /// The mapping from logical indices to source offsets.
    pub fn mapping(&self) -> M {
        self.mapping
    }

    /// Returns the source, ending the view.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Iterates over the elements in logical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &S::Elem> + ExactSizeIterator + '_ {
        (0..self.len).map(move |i| self.at(i))
    }

    /// Copies the elements, in logical order, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<S::Elem>
    where
        S::Elem: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<S: Array, M: Mapping> Array for View<S, M> {
    type Elem = S::Elem;
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
    #[inline]
    fn at(&self, index: usize) -> &S::Elem {
        assert!(index < self.len, "index {} out of range {}", index, self.len);
        self.source.at(self.mapping.offset(index))
    }
}

impl<S: ArrayMut, M: Mapping> ArrayMut for View<S, M> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Elem {
        assert!(index < self.len, "index {} out of range {}", index, self.len);
        self.source.at_mut(self.mapping.offset(index))
    }
}

impl<S: Array, M: Mapping> Index<usize> for View<S, M> {
    type Output = S::Elem;
    fn index(&self, index: usize) -> &S::Elem {
        self.at(index)
    }
}

impl<S: ArrayMut, M: Mapping> IndexMut<usize> for View<S, M> {
    fn index_mut(&mut self, index: usize) -> &mut S::Elem {
        self.at_mut(index)
    }
}

// ----------------------------------------------------------------------------

/// A view of `count` consecutive elements of `source` starting at `index`.
///
/// The view reports length `count` whatever the length of `source`.
pub fn slice<S: Array>(source: S, index: usize, count: usize) -> Result<SliceView<S>> {
    check_range(index, count, source.len())?;
    Ok(View {
        source,
        mapping: Contiguous { base: index },
        len: count,
    })
}

/// A view whose element `i` is `source[index + i * stride]`.
///
/// Fails if `stride` is zero or if any of the `count` offsets falls outside
/// `source`, including when computing an offset overflows.
///
/// ```
/// use array_kernel::view;
///
/// let a = [1, 2, 3, 4, 5, 6];
/// assert_eq!(view::stride(&a, 0, 2, 3).unwrap().to_vec(), [1, 3, 5]);
/// assert_eq!(view::stride(&a, 5, -2, 3).unwrap().to_vec(), [6, 4, 2]);
/// assert!(view::stride(&a, 0, 0, 5).is_err());
/// assert!(view::stride(&a, 0, 2, 4).is_err());
/// ```
pub fn stride<S: Array>(source: S, index: usize, stride: isize, count: usize) -> Result<StrideView<S>> {
    if stride == 0 {
        return Err(Invalid::ZeroStride.into());
    }
    if count > 0 {
        offset_within(index, 0, stride, 0, source.len())?;
        offset_within(index, count - 1, stride, 0, source.len())?;
    }
    Ok(View {
        source,
        mapping: Strided { base: index, stride },
        len: count,
    })
}

/// A view of all of `source`, last element first.
///
/// ```
/// use array_kernel::view;
///
/// assert_eq!(view::reverse(&[1, 2, 3]).to_vec(), [3, 2, 1]);
/// ```
pub fn reverse<S: Array>(source: S) -> StrideView<S> {
    let len = source.len();
    View {
        source,
        mapping: Strided {
            base: len.saturating_sub(1),
            stride: -1,
        },
        len,
    }
}

/// A view of `count` elements of `source` read backwards, starting from the
/// element at `index`.
///
/// ```
/// use array_kernel::view;
///
/// let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(view::reverse_range(&a, 2, 3).unwrap().to_vec(), [3, 2, 1]);
/// assert!(view::reverse_range(&a, 2, 4).is_err());
/// ```
pub fn reverse_range<S: Array>(source: S, index: usize, count: usize) -> Result<StrideView<S>> {
    stride(source, index, -1, count)
}

/// A view that concatenates runs of `group_size` consecutive elements of
/// `source`, the first run starting at `index` and each next run starting
/// `stride` elements after the previous one.
///
/// Fails if `group_size` or `stride` is zero, or if any of the `count`
/// offsets falls outside `source`. The last run may be partial.
///
/// ```
/// use array_kernel::view;
///
/// // xyz positions followed by a padding value, keep the xy pairs.
/// let a = [1, 2, 9, 9, 5, 6, 9, 9, 9, 10];
/// let v = view::interleave(&a, 0, 2, 4, 6).unwrap();
/// assert_eq!(v.to_vec(), [1, 2, 5, 6, 9, 10]);
/// ```
pub fn interleave<S: Array>(
    source: S,
    index: usize,
    group_size: usize,
    stride: isize,
    count: usize,
) -> Result<InterleaveView<S>> {
    if group_size == 0 {
        return Err(Invalid::ZeroGroupSize.into());
    }
    if stride == 0 {
        return Err(Invalid::ZeroStride.into());
    }
    let mapping = Interleaved {
        base: index,
        group: group_size,
        stride,
    };
    if count > 0 {
        // The extreme offsets are at the ends of the first run, of the last
        // run, or of the run before it.
        let last = count - 1;
        let last_run = last / group_size * group_size;
        let candidates = [
            0,
            last.min(group_size - 1),
            last_run,
            last,
            last_run.saturating_sub(1),
        ];
        for logical in candidates {
            offset_within(
                index,
                logical / group_size,
                stride,
                logical % group_size,
                source.len(),
            )?;
        }
    }
    Ok(View {
        source,
        mapping,
        len: count,
    })
}

// ----------------------------------------------------------------------------

/// A view of `N` consecutive elements of `source`, where `N` is part of
/// the type.
#[derive(Debug, Clone)]
pub struct FixedSlice<S, const N: usize> {
    source: S,
    base: usize,
}

impl<S: Array, const N: usize> FixedSlice<S, N> {
    /// Returns the source, ending the view.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Copies the elements into an array.
    pub fn to_array(&self) -> [S::Elem; N]
    where
        S::Elem: Clone,
    {
        core::array::from_fn(|i| self.at(i).clone())
    }
}

impl<S: Array, const N: usize> Array for FixedSlice<S, N> {
    type Elem = S::Elem;
    #[inline(always)]
    fn len(&self) -> usize {
        N
    }
    #[inline]
    fn at(&self, index: usize) -> &S::Elem {
        assert!(index < N, "index {} out of range {}", index, N);
        self.source.at(self.base + index)
    }
}

impl<S: ArrayMut, const N: usize> ArrayMut for FixedSlice<S, N> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Elem {
        assert!(index < N, "index {} out of range {}", index, N);
        self.source.at_mut(self.base + index)
    }
}

impl<S: Array, const N: usize> Index<usize> for FixedSlice<S, N> {
    type Output = S::Elem;
    fn index(&self, index: usize) -> &S::Elem {
        self.at(index)
    }
}

impl<S: ArrayMut, const N: usize> IndexMut<usize> for FixedSlice<S, N> {
    fn index_mut(&mut self, index: usize) -> &mut S::Elem {
        self.at_mut(index)
    }
}

/// A view of `N` consecutive elements of `source` starting at `index`.
///
/// # Panics
///
/// Panics if `N` is 0.
///
/// ```
/// use array_kernel::{view, Array};
///
/// let mut xyz = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
/// let mut second = view::fixed_slice::<_, 3>(&mut xyz, 3).unwrap();
/// second[2] = 4.0;
/// assert_eq!(second.len(), 3);
/// assert_eq!(second.to_array(), [1.0, 2.0, 4.0]);
/// ```
pub fn fixed_slice<S: Array, const N: usize>(source: S, index: usize) -> Result<FixedSlice<S, N>> {
    assert!(N != 0, "fixed slice length must be non-zero");
    check_range(index, N, source.len())?;
    Ok(FixedSlice {
        source,
        base: index,
    })
}

macro_rules! fixed_slices {
    ($($name:ident = $n:literal),* $(,)?) => {
        $(
            #[doc = concat!("A [`fixed_slice()`] of length ", stringify!($n), ".")]
            #[inline]
            pub fn $name<S: Array>(source: S, index: usize) -> Result<FixedSlice<S, $n>> {
                fixed_slice(source, index)
            }
        )*
    };
}

fixed_slices!(
    fixed_slice_1 = 1,
    fixed_slice_2 = 2,
    fixed_slice_3 = 3,
    fixed_slice_4 = 4,
    fixed_slice_5 = 5,
    fixed_slice_6 = 6,
    fixed_slice_7 = 7,
    fixed_slice_8 = 8,
    fixed_slice_9 = 9,
    fixed_slice_10 = 10,
    fixed_slice_11 = 11,
    fixed_slice_12 = 12,
    fixed_slice_13 = 13,
    fixed_slice_14 = 14,
    fixed_slice_15 = 15,
    fixed_slice_16 = 16,
);
