//! The capability set every bulk operation, view and helper is written
//! against.

use alloc::vec::Vec;
use core::ops::Index;

use arrayvec::ArrayVec;

use crate::error::{check_range, Error, Result};

/// Something with a length that can be read by index.
///
/// The reported length is whatever [`len`] says, not the size of any
/// allocation: a view over nine elements may well report three.
///
/// # Panics
///
/// [`at`] panics when `index >= self.len()`, the same way slice indexing
/// does. Operations in this crate check their ranges before reading, so
/// they report [`Error::InvalidArgument`] instead.
///
/// [`len`]: Array::len
/// [`at`]: Array::at
/// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
pub trait Array {
    /// The element type.
    type Elem;

    /// The number of addressable elements.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    fn at(&self, index: usize) -> &Self::Elem;

    /// Returns `true` if the array has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`Array`] whose elements can be assigned in place.
pub trait ArrayMut: Array {
    /// Returns a mutable reference to the element at `index`.
    fn at_mut(&mut self, index: usize) -> &mut Self::Elem;
}

/// An [`ArrayMut`] that can be extended with default-valued elements.
///
/// Views never implement this trait: a view has a fixed logical length.
pub trait Growable: ArrayMut {
    /// Extends `self` to `len` elements. Does nothing if it is already
    /// at least that long; never shrinks.
    ///
    /// Fails with [`Error::Unsupported`] if the storage cannot hold `len`
    /// elements, in which case `self` is left untouched.
    fn grow_to(&mut self, len: usize) -> Result<()>;
}

// ----------------------------------------------------------------------------

impl<T> Array for [T] {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> ArrayMut for [T] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T, const N: usize> Array for [T; N] {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        N
    }
    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> ArrayMut for [T; N] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T> Array for Vec<T> {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> ArrayMut for Vec<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T: Default> Growable for Vec<T> {
    fn grow_to(&mut self, len: usize) -> Result<()> {
        if len > self.len() {
            tracing::trace!(from = self.len(), to = len, "growing destination");
            self.resize_with(len, T::default);
        }
        Ok(())
    }
}

impl<T, const CAP: usize> Array for ArrayVec<T, CAP> {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }
    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const CAP: usize> ArrayMut for ArrayVec<T, CAP> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T: Default, const CAP: usize> Growable for ArrayVec<T, CAP> {
    fn grow_to(&mut self, len: usize) -> Result<()> {
        if len > CAP {
            return Err(Error::Unsupported {
                operation: "growing a fixed-capacity array past its capacity",
            });
        }
        if len > self.len() {
            tracing::trace!(from = self.len(), to = len, "growing destination");
        }
        while self.len() < len {
            // SAFETY: `len <= CAP` was checked above, so there is room.
            unsafe { self.push_unchecked(T::default()) };
        }
        Ok(())
    }
}

impl<A: Array + ?Sized> Array for &A {
    type Elem = A::Elem;
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn at(&self, index: usize) -> &A::Elem {
        (**self).at(index)
    }
}

impl<A: Array + ?Sized> Array for &mut A {
    type Elem = A::Elem;
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn at(&self, index: usize) -> &A::Elem {
        (**self).at(index)
    }
}

impl<A: ArrayMut + ?Sized> ArrayMut for &mut A {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut A::Elem {
        (**self).at_mut(index)
    }
}

impl<A: Growable + ?Sized> Growable for &mut A {
    fn grow_to(&mut self, len: usize) -> Result<()> {
        (**self).grow_to(len)
    }
}

// ----------------------------------------------------------------------------

/// A contiguous run of `count` elements of `array`, starting at `start`.
///
/// `Seq` is how operations receive sub-ranges: it is validated once, on
/// construction, and is itself an [`Array`] of length `count`.
///
/// ```
/// use array_kernel::{Array, Seq};
///
/// let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let s = Seq::new(&a, 3, 3).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(*s.at(0), 4);
/// assert!(Seq::new(&a, 7, 3).is_err());
/// ```
#[derive(Debug)]
pub struct Seq<'a, A: ?Sized> {
    array: &'a A,
    start: usize,
    count: usize,
}

impl<A: ?Sized> Clone for Seq<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for Seq<'_, A> {}

impl<'a, A: Array + ?Sized> Seq<'a, A> {
    /// Borrows `count` elements of `array` starting at `start`.
    pub fn new(array: &'a A, start: usize, count: usize) -> Result<Self> {
        check_range(start, count, array.len())?;
        Ok(Self {
            array,
            start,
            count,
        })
    }

    /// Borrows all of `array`.
    pub fn whole(array: &'a A) -> Self {
        Self {
            array,
            start: 0,
            count: array.len(),
        }
    }

    /// The array this sequence borrows from.
    pub fn array(&self) -> &'a A {
        self.array
    }

    /// The offset of the first element within [`array()`](Self::array).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a A::Elem> + ExactSizeIterator + 'a {
        let array = self.array;
        (self.start..self.start + self.count).map(move |i| array.at(i))
    }
}

impl<A: Array + ?Sized> Array for Seq<'_, A> {
    type Elem = A::Elem;
    #[inline]
    fn len(&self) -> usize {
        self.count
    }
    #[inline]
    fn at(&self, index: usize) -> &A::Elem {
        assert!(index < self.count, "index {} out of range {}", index, self.count);
        self.array.at(self.start + index)
    }
}

impl<A: Array + ?Sized> Index<usize> for Seq<'_, A> {
    type Output = A::Elem;
    fn index(&self, index: usize) -> &A::Elem {
        self.at(index)
    }
}

// ----------------------------------------------------------------------------

/// The second argument of the `_constant` operations: either one value
/// used at every position, or an array whose elements are used
/// cyclically.
///
/// ```
/// use array_kernel::{add_constant, Operand};
///
/// let positions = [0, 0, 0, 10, 10, 10];
/// let offset = [1, 2, 3];
/// assert_eq!(add_constant(&positions, Operand::Array(&offset)).unwrap(), [1, 2, 3, 11, 12, 13]);
/// assert_eq!(add_constant(&positions, Operand::Scalar(5)).unwrap(), [5, 5, 5, 15, 15, 15]);
/// ```
pub enum Operand<'a, T> {
    /// Broadcast to every position.
    Scalar(T),
    /// Element `i` is combined with `pattern[i % pattern.len()]`.
    Array(&'a dyn Array<Elem = T>),
}

impl<T> Operand<'_, T> {
    /// Returns `true` for [`Operand::Array`].
    pub fn is_array(&self) -> bool {
        matches!(self, Operand::Array(_))
    }
}

impl<T> From<T> for Operand<'_, T> {
    fn from(value: T) -> Self {
        Operand::Scalar(value)
    }
}

// ----------------------------------------------------------------------------

/// Returns the reported length of `array`.
#[inline]
pub fn length<A: Array + ?Sized>(array: &A) -> usize {
    array.len()
}

/// Allocates `count` default-valued elements.
///
/// ```
/// let a: Vec<f32> = array_kernel::new_array(3);
/// assert_eq!(a, [0.0, 0.0, 0.0]);
/// ```
pub fn new_array<T: Default>(count: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(count);
    out.resize_with(count, T::default);
    out
}

/// Allocates `count` zeros.
pub fn zeros<T: num_traits::Zero + Clone>(count: usize) -> Vec<T> {
    alloc::vec![T::zero(); count]
}

/// Makes `start..start + count` valid indices of `dest`, filling any new
/// slots with default values.
///
/// ```
/// let mut a = vec![1, 2];
/// array_kernel::grow_array(&mut a, 3, 2).unwrap();
/// assert_eq!(a, [1, 2, 0, 0, 0]);
/// array_kernel::grow_array(&mut a, 0, 1).unwrap();
/// assert_eq!(a.len(), 5);
/// ```
pub fn grow_array<D: Growable + ?Sized>(dest: &mut D, start: usize, count: usize) -> Result<()> {
    let end = start.checked_add(count).ok_or(crate::Invalid::OutOfRange {
        start,
        count,
        len: dest.len(),
    })?;
    dest.grow_to(end)
}

/// Copies `count` elements of `src` starting at `start` into a new array.
pub fn copy_array<A>(src: &A, start: usize, count: usize) -> Result<Vec<A::Elem>>
where
    A: Array + ?Sized,
    A::Elem: Clone,
{
    Ok(Seq::new(src, start, count)?.iter().cloned().collect())
}

/// Copies `count` elements of `src` starting at `start` into `dest`
/// starting at `dest_start`, growing `dest` as needed.
pub fn copy_array_into<A, D>(
    src: &A,
    start: usize,
    count: usize,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    A::Elem: Clone,
    D: Growable<Elem = A::Elem> + ?Sized,
{
    let src = Seq::new(src, start, count)?;
    grow_array(dest, dest_start, count)?;
    for (i, t) in src.iter().enumerate() {
        *dest.at_mut(dest_start + i) = t.clone();
    }
    Ok(())
}

// ----------------------------------------------------------------------------

/// A helper extension trait for arrays.
///
/// The methods forward to the free functions of the same name, with an
/// `_ext` suffix to avoid colliding with inherent methods.
pub trait ArrayExt: Array {
    /// Borrows `count` elements starting at `start`. See [`Seq::new`].
    ///
    /// ```
    /// use array_kernel::{Array, ArrayExt};
    ///
    /// let v = vec![1, 2, 3, 4];
    /// assert_eq!(*v.seq_ext(1, 2).unwrap().at(1), 3);
    /// ```
    fn seq_ext(&self, start: usize, count: usize) -> Result<Seq<'_, Self>> {
        Seq::new(self, start, count)
    }

    /// Copies `count` elements starting at `start`. See [`copy_array`].
    fn copy_ext(&self, start: usize, count: usize) -> Result<Vec<Self::Elem>>
    where
        Self::Elem: Clone,
    {
        copy_array(self, start, count)
    }
}

impl<A: Array + ?Sized> ArrayExt for A {}

/// A helper extension trait for growable arrays.
pub trait GrowableExt: Growable {
    /// See [`grow_array`].
    ///
    /// ```
    /// use array_kernel::GrowableExt;
    ///
    /// let mut v = vec![1u8];
    /// v.grow_ext(1, 2).unwrap();
    /// assert_eq!(v, [1, 0, 0]);
    /// ```
    fn grow_ext(&mut self, start: usize, count: usize) -> Result<()> {
        grow_array(self, start, count)
    }
}

impl<D: Growable + ?Sized> GrowableExt for D {}
