//! Conversion between flat and nested arrays.
//!
//! A multi-dimensional array is represented as a [`Nested`] tree whose
//! interior nodes are rows and whose leaves are elements. The shape of a
//! source is discovered by descending through first children; the shape of
//! the result is supplied by the caller. The two need not have the same
//! rank, only the same number of elements. A one-dimensional source can
//! also be any [`Array`], read in place by [`reshape_flat`].
//!
//! Both shapes are walked by mixed-radix counters ("odometers"), least
//! significant dimension fastest, so elements are visited in row-major
//! order on both sides.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::array::{grow_array, Array, Growable};
use crate::error::{Invalid, Result};

/// The most dimensions a shape may have.
pub const MAX_RANK: usize = 32;

/// An element, or a row of nested arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A row, each entry of which is one index further in.
    Node(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A one-dimensional array of `items`.
    pub fn from_flat(items: impl IntoIterator<Item = T>) -> Self {
        Nested::Node(items.into_iter().map(Nested::Leaf).collect())
    }

    /// A two-dimensional array with one entry per row of `rows`.
    ///
    /// ```
    /// use array_kernel::Nested;
    ///
    /// let m = Nested::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.shape(), [2, 3]);
    /// ```
    pub fn from_rows<R: IntoIterator<Item = T>>(rows: impl IntoIterator<Item = R>) -> Self {
        Nested::Node(rows.into_iter().map(Nested::from_flat).collect())
    }

    /// The extents of `self`, found by following first children down to
    /// a leaf or an empty row. A leaf has the empty shape.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Nested::Node(children) = node {
            shape.push(children.len());
            match children.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        shape
    }

    /// Returns the element at `index`, one entry per dimension.
    ///
    /// ```
    /// use array_kernel::Nested;
    ///
    /// let m = Nested::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(&[1, 0]), Some(&3));
    /// assert_eq!(m.get(&[1]), None);
    /// assert_eq!(m.get(&[2, 0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        let mut node = self;
        for &i in index {
            match node {
                Nested::Node(children) => node = children.get(i)?,
                Nested::Leaf(_) => return None,
            }
        }
        match node {
            Nested::Leaf(t) => Some(t),
            Nested::Node(_) => None,
        }
    }

    /// Iterates over the leaves, depth first, which for a rectangular
    /// array is row-major order. Unlike [`flatten`] this never fails.
    ///
    /// ```
    /// use array_kernel::Nested;
    ///
    /// let m = Nested::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.leaves().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// assert_eq!(Nested::Leaf(5).leaves().count(), 1);
    /// ```
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves {
            stack: alloc::vec![core::slice::from_ref(self).iter()],
        }
    }

    /// Checks that every row at depth `d` has `shape[d]` entries and that
    /// leaves appear exactly at depth `shape.len()`.
    fn check_rectangular(&self, shape: &[usize]) -> Result<()> {
        match (self, shape.split_first()) {
            (Nested::Leaf(_), None) => Ok(()),
            (Nested::Node(children), Some((&extent, rest))) if children.len() == extent => {
                children.iter().try_for_each(|child| child.check_rectangular(rest))
            }
            _ => Err(Invalid::Ragged.into()),
        }
    }

    /// The row stored in `self`, replacing a leaf with an empty row.
    fn row_mut(&mut self) -> &mut Vec<Nested<T>> {
        match self {
            Nested::Node(children) => children,
            leaf => {
                *leaf = Nested::Node(Vec::new());
                leaf.row_mut()
            }
        }
    }

    /// The entry at `path`, creating empty rows on the way as needed.
    fn slot_mut(&mut self, path: &[usize]) -> &mut Nested<T> {
        let mut node = self;
        for &i in path {
            let row = node.row_mut();
            if row.len() <= i {
                row.resize_with(i + 1, || Nested::Node(Vec::new()));
            }
            node = &mut row[i];
        }
        node
    }
}

/// An iterator over the leaves of a [`Nested`] array.
///
/// This struct is created by [`Nested::leaves`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Leaves<'a, T> {
    stack: Vec<core::slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            match self.stack.last_mut()?.next() {
                None => {
                    self.stack.pop();
                }
                Some(Nested::Leaf(t)) => return Some(t),
                Some(Nested::Node(children)) => self.stack.push(children.iter()),
            }
        }
    }
}

impl<T> FusedIterator for Leaves<'_, T> {}

// ----------------------------------------------------------------------------

/// A mixed-radix counter over a shape, starting at all zeros.
#[derive(Debug, Clone)]
struct Odometer {
    digits: ArrayVec<usize, MAX_RANK>,
    radices: ArrayVec<usize, MAX_RANK>,
}

impl Odometer {
    fn new(shape: &[usize]) -> Result<Self> {
        check_rank(shape)?;
        Ok(Self {
            digits: shape.iter().map(|_| 0).collect(),
            radices: shape.iter().copied().collect(),
        })
    }

    fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Advances to the next index, least significant digit first. Returns
    /// `true` when every digit has wrapped back to zero.
    fn increment(&mut self) -> bool {
        for (digit, &radix) in self.digits.iter_mut().zip(&self.radices).rev() {
            *digit += 1;
            if *digit < radix {
                return false;
            }
            *digit = 0;
        }
        true
    }
}

fn check_rank(shape: &[usize]) -> Result<()> {
    if shape.len() > MAX_RANK {
        return Err(Invalid::RankTooLarge {
            got: shape.len(),
            max: MAX_RANK,
        }
        .into());
    }
    Ok(())
}

/// The number of elements `shape` describes.
fn element_count(shape: &[usize]) -> Result<usize> {
    if shape.contains(&0) {
        return Ok(0);
    }
    shape
        .iter()
        .try_fold(1usize, |n, &extent| n.checked_mul(extent))
        .ok_or_else(|| Invalid::Overflow.into())
}

/// Validates `dest_shape` as the target of `source_len` elements and
/// returns that count.
fn check_target(source_len: usize, dest_shape: &[usize]) -> Result<usize> {
    if dest_shape.is_empty() {
        return Err(Invalid::EmptyShape.into());
    }
    check_rank(dest_shape)?;
    let shape_len = element_count(dest_shape)?;
    if source_len != shape_len {
        return Err(Invalid::ShapeMismatch {
            source_len,
            shape_len,
        }
        .into());
    }
    Ok(shape_len)
}

/// Validates `source` against `dest_shape` and returns the source shape and
/// the element count.
fn plan<T>(source: &Nested<T>, dest_shape: &[usize]) -> Result<(Vec<usize>, usize)> {
    let source_shape = source.shape();
    check_rank(&source_shape)?;
    source.check_rectangular(&source_shape)?;
    let len = check_target(element_count(&source_shape)?, dest_shape)?;
    tracing::debug!(?source_shape, ?dest_shape, len, "reshape planned");
    Ok((source_shape, len))
}

/// Calls `write` with each destination index and the source element that
/// belongs there, in row-major order. `source` must already have passed
/// [`plan`].
fn walk<'s, T>(
    source: &'s Nested<T>,
    source_shape: &[usize],
    dest_shape: &[usize],
    mut write: impl FnMut(&[usize], &'s T),
) -> Result<()> {
    let mut from = Odometer::new(source_shape)?;
    let mut to = Odometer::new(dest_shape)?;
    loop {
        // Present for every index: the source is rectangular.
        let t = source.get(from.digits()).ok_or(Invalid::Ragged)?;
        write(to.digits(), t);
        if to.increment() {
            return Ok(());
        }
        from.increment();
    }
}

/// Rearranges the elements of `source` into a new nested array of shape
/// `shape`.
///
/// Fails if `shape` is empty, if `source` is not rectangular, or if the two
/// shapes describe different numbers of elements.
///
/// ```
/// use array_kernel::{reshape, Nested};
///
/// let flat = Nested::from_flat([1, 2, 3, 4, 5, 6]);
/// let rows = reshape(&flat, &[3, 2]).unwrap();
/// assert_eq!(rows, Nested::from_rows([[1, 2], [3, 4], [5, 6]]));
/// assert_eq!(reshape(&rows, &[2, 3]).unwrap(), Nested::from_rows([[1, 2, 3], [4, 5, 6]]));
/// assert_eq!(reshape(&rows, &[6]).unwrap(), flat);
/// assert!(reshape(&rows, &[4]).is_err());
/// ```
pub fn reshape<T: Clone>(source: &Nested<T>, shape: &[usize]) -> Result<Nested<T>> {
    let mut out = Nested::Node(Vec::new());
    reshape_into(source, shape, &mut out, 0)?;
    Ok(out)
}

/// Writes the elements of `source`, rearranged to shape `shape`, into `dest`
/// starting at row `dest_start` of `dest`.
///
/// Rows are created in `dest` as needed. Entries of `dest` outside the
/// written region are left as they were.
///
/// ```
/// use array_kernel::{reshape_into, Nested};
///
/// let mut dest = Nested::from_rows([[0, 0]]);
/// reshape_into(&Nested::from_flat([1, 2, 3, 4]), &[2, 2], &mut dest, 1).unwrap();
/// assert_eq!(dest, Nested::from_rows([[0, 0], [1, 2], [3, 4]]));
/// ```
pub fn reshape_into<T: Clone>(
    source: &Nested<T>,
    shape: &[usize],
    dest: &mut Nested<T>,
    dest_start: usize,
) -> Result<()> {
    let (source_shape, len) = plan(source, shape)?;
    if len == 0 {
        return Ok(());
    }
    let mut path: ArrayVec<usize, MAX_RANK> = ArrayVec::new();
    walk(source, &source_shape, shape, |index, t| {
        *slot_at(dest, &mut path, index, dest_start) = Nested::Leaf(t.clone());
    })
}

/// The entry of `dest` at `index`, with the first coordinate shifted by
/// `dest_start`. `path` is scratch space.
fn slot_at<'d, T>(
    dest: &'d mut Nested<T>,
    path: &mut ArrayVec<usize, MAX_RANK>,
    index: &[usize],
    dest_start: usize,
) -> &'d mut Nested<T> {
    path.clear();
    path.extend(index.iter().copied());
    path[0] += dest_start;
    tracing::trace!(?index, "reshape write");
    dest.slot_mut(path)
}

/// Arranges the elements of any flat [`Array`] into a new nested array of
/// shape `shape`, without first copying them into a [`Nested`].
///
/// Fails if `shape` is empty or does not describe `source.len()` elements.
///
/// ```
/// use array_kernel::{reshape_flat, view, Nested};
///
/// let a = [1, 0, 2, 0, 3, 0, 4, 0];
/// let odd = view::stride(&a, 0, 2, 4).unwrap();
/// assert_eq!(reshape_flat(&odd, &[2, 2]).unwrap(), Nested::from_rows([[1, 2], [3, 4]]));
/// ```
pub fn reshape_flat<A>(source: &A, shape: &[usize]) -> Result<Nested<A::Elem>>
where
    A: Array + ?Sized,
    A::Elem: Clone,
{
    let mut out = Nested::Node(Vec::new());
    reshape_flat_into(source, shape, &mut out, 0)?;
    Ok(out)
}

/// Writes the elements of the flat `source`, arranged to shape `shape`,
/// into `dest` starting at row `dest_start`. See [`reshape_into`].
pub fn reshape_flat_into<A>(
    source: &A,
    shape: &[usize],
    dest: &mut Nested<A::Elem>,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    A::Elem: Clone,
{
    let len = check_target(source.len(), shape)?;
    tracing::debug!(dest_shape = ?shape, len, "flat reshape planned");
    if len == 0 {
        return Ok(());
    }
    let mut to = Odometer::new(shape)?;
    let mut path: ArrayVec<usize, MAX_RANK> = ArrayVec::new();
    let mut i = 0;
    loop {
        *slot_at(dest, &mut path, to.digits(), dest_start) = Nested::Leaf(source.at(i).clone());
        i += 1;
        if to.increment() {
            return Ok(());
        }
    }
}

/// [`plan`] for the one-dimensional shape `[len]`.
fn plan_flat<T>(source: &Nested<T>) -> Result<(Vec<usize>, usize)> {
    let len = element_count(&source.shape())?;
    plan(source, &[len])
}

/// Returns the elements of `source` in row-major order.
///
/// This is [`reshape`] to the one-dimensional shape that holds every
/// element, returned as a plain `Vec`.
///
/// ```
/// use array_kernel::{flatten, Nested};
///
/// let m = Nested::from_rows([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(flatten(&m).unwrap(), [1, 2, 3, 4, 5, 6]);
/// assert_eq!(flatten(&Nested::Leaf(7)).unwrap(), [7]);
/// ```
pub fn flatten<T: Clone>(source: &Nested<T>) -> Result<Vec<T>> {
    let (source_shape, len) = plan_flat(source)?;
    let mut out = Vec::with_capacity(len);
    if len > 0 {
        walk(source, &source_shape, &[len], |_, t| out.push(t.clone()))?;
    }
    Ok(out)
}

/// Writes the elements of `source` in row-major order into `dest` starting
/// at `dest_start`, growing `dest` as needed.
///
/// ```
/// use array_kernel::{flatten_into, Nested};
///
/// let mut dest = vec![9];
/// flatten_into(&Nested::from_rows([[1, 2], [3, 4]]), &mut dest, 2).unwrap();
/// assert_eq!(dest, [9, 0, 1, 2, 3, 4]);
/// ```
pub fn flatten_into<T, D>(source: &Nested<T>, dest: &mut D, dest_start: usize) -> Result<()>
where
    T: Clone,
    D: Growable<Elem = T> + ?Sized,
{
    let (source_shape, len) = plan_flat(source)?;
    grow_array(dest, dest_start, len)?;
    if len == 0 {
        return Ok(());
    }
    walk(source, &source_shape, &[len], |index, t| {
        *dest.at_mut(dest_start + index[0]) = t.clone();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_wraps_after_every_index() {
        let mut o = Odometer::new(&[2, 3]).unwrap();
        let mut seen = Vec::new();
        loop {
            seen.push((o.digits()[0], o.digits()[1]));
            if o.increment() {
                break;
            }
        }
        assert_eq!(seen, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(o.digits(), [0, 0]);
    }

    #[test]
    fn ragged_sources_are_rejected_before_writing() {
        let ragged = Nested::Node(alloc::vec![
            Nested::from_flat([1, 2]),
            Nested::from_flat([3]),
            Nested::from_flat([4, 5, 6]),
        ]);
        let mut dest = Nested::Leaf(0);
        assert_eq!(
            reshape_into(&ragged, &[6], &mut dest, 0),
            Err(Invalid::Ragged.into())
        );
        assert_eq!(dest, Nested::Leaf(0));
    }

    #[test]
    fn zero_sized_shapes_produce_empty_results() {
        let empty: Nested<i32> = Nested::from_flat([]);
        assert_eq!(reshape(&empty, &[2, 0]).unwrap(), Nested::Node(Vec::new()));
        assert_eq!(flatten(&empty).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn leaves_follow_ragged_rows_too() {
        let ragged = Nested::Node(alloc::vec![
            Nested::from_flat([1, 2]),
            Nested::Leaf(3),
            Nested::Node(Vec::new()),
            Nested::from_rows([[4], [5]]),
        ]);
        assert_eq!(ragged.leaves().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn element_counts_do_not_wrap() {
        assert_eq!(element_count(&[3, 4]), Ok(12));
        assert_eq!(element_count(&[usize::MAX, 2, 0]), Ok(0));
        assert_eq!(element_count(&[usize::MAX, 2]), Err(Invalid::Overflow.into()));
        let flat = Nested::from_flat([1, 2]);
        assert_eq!(reshape(&flat, &[usize::MAX, 2]), Err(Invalid::Overflow.into()));
        // Wraps to 0 in a machine word; must not match an empty source.
        let empty: Nested<i32> = Nested::from_flat([]);
        let half = 1usize << (usize::BITS / 2);
        assert_eq!(reshape(&empty, &[half, half]), Err(Invalid::Overflow.into()));
    }

    #[test]
    fn malformed_shapes() {
        let flat = Nested::from_flat([1, 2]);
        assert_eq!(reshape(&flat, &[]), Err(Invalid::EmptyShape.into()));
        let deep = [1usize; MAX_RANK + 1];
        assert_eq!(
            reshape(&flat, &deep),
            Err(Invalid::RankTooLarge {
                got: MAX_RANK + 1,
                max: MAX_RANK
            }
            .into())
        );
    }
}
