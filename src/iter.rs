//! Tuple-at-a-time traversal of arrays and sequences.

use core::iter::FusedIterator;

use crate::array::{Array, Seq};

/// Walks a [`Seq`] `N` elements at a time, yielding each group as an array
/// of references into the underlying storage.
///
/// Groups start at the sequence's own offset, not at the start of the
/// array it borrows, and never overlap. A count that `N` does not divide
/// leaves a shorter tail, which is not yielded; [`remainder`] returns it as
/// a `Seq` of its own.
///
/// This struct is created by [`groups`] and [`groups_ex`].
///
/// [`remainder`]: Groups::remainder
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Groups<'a, A: ?Sized, const N: usize> {
    seq: Seq<'a, A>,
    front: usize,
    back: usize,
}

impl<'a, A: Array + ?Sized, const N: usize> Groups<'a, A, N> {
    fn new(seq: Seq<'a, A>) -> Self {
        assert!(N != 0, "group size must be non-zero");
        Self {
            seq,
            front: 0,
            back: seq.len() / N,
        }
    }

    fn group(&self, group: usize) -> [&'a A::Elem; N] {
        let (array, start) = (self.seq.array(), self.seq.start() + group * N);
        core::array::from_fn(|k| array.at(start + k))
    }

    /// The tail of the sequence too short to form a group, between 0 and
    /// `N - 1` elements. It does not change as the iterator advances.
    pub fn remainder(&self) -> Seq<'a, A> {
        let whole = self.seq.len() / N * N;
        Seq::new(self.seq.array(), self.seq.start() + whole, self.seq.len() - whole)
            .unwrap_or(self.seq)
    }
}

impl<A: ?Sized, const N: usize> Clone for Groups<'_, A, N> {
    fn clone(&self) -> Self {
        Groups {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, A: Array + ?Sized, const N: usize> Iterator for Groups<'a, A, N> {
    type Item = [&'a A::Elem; N];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.front += 1;
        Some(self.group(self.front - 1))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    #[inline]
    fn count(self) -> usize {
        self.back - self.front
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<A: Array + ?Sized, const N: usize> DoubleEndedIterator for Groups<'_, A, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.group(self.back))
    }
}

impl<A: Array + ?Sized, const N: usize> ExactSizeIterator for Groups<'_, A, N> {}

impl<A: Array + ?Sized, const N: usize> FusedIterator for Groups<'_, A, N> {}

/// Groups all of `array`, which may be a view, into runs of `N` elements.
///
/// Equivalent to [`groups_ex`] over [`Seq::whole`]. Trailing elements that
/// do not fill a group are available from [`Groups::remainder`].
///
/// # Panics
///
/// Panics if `N` is 0.
///
/// # Examples
///
/// ```
/// let points = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
/// let mut iter = array_kernel::groups::<_, 3>(&points);
/// assert_eq!(iter.next(), Some([&1.0, &2.0, &3.0]));
/// assert_eq!(iter.next_back(), Some([&4.0, &5.0, &6.0]));
/// assert!(iter.next().is_none());
/// assert_eq!(iter.remainder().iter().copied().collect::<Vec<_>>(), [7.0]);
/// ```
#[inline]
pub fn groups<A: Array + ?Sized, const N: usize>(array: &A) -> Groups<'_, A, N> {
    Groups::new(Seq::whole(array))
}

/// Groups the `count` elements of `seq` into runs of `N`, the first run
/// starting at `seq.start()`.
///
/// ```
/// use array_kernel::{groups_ex, Seq};
///
/// let a = [0, 1, 2, 3, 4, 5, 6];
/// let pairs: Vec<_> = groups_ex::<_, 2>(Seq::new(&a, 1, 4).unwrap()).collect();
/// assert_eq!(pairs, [[&1, &2], [&3, &4]]);
/// ```
#[inline]
pub fn groups_ex<A: Array + ?Sized, const N: usize>(seq: Seq<'_, A>) -> Groups<'_, A, N> {
    Groups::new(seq)
}

// ----------------------------------------------------------------------------

/// An iterator over corresponding elements of two sequences.
///
/// This struct is created by [`zip`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<'a, A: ?Sized, B: ?Sized> {
    a: Seq<'a, A>,
    b: Seq<'a, B>,
    front: usize,
    len: usize,
}

impl<'a, A: Array + ?Sized, B: Array + ?Sized> Iterator for Zip<'a, A, B> {
    type Item = (&'a A::Elem, &'a B::Elem);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.len {
            return None;
        }
        let i = self.front;
        self.front += 1;
        let (a, b) = (self.a.array(), self.b.array());
        Some((a.at(self.a.start() + i), b.at(self.b.start() + i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.front;
        (n, Some(n))
    }
}

impl<A: Array + ?Sized, B: Array + ?Sized> ExactSizeIterator for Zip<'_, A, B> {}

impl<A: Array + ?Sized, B: Array + ?Sized> FusedIterator for Zip<'_, A, B> {}

/// Pairs up elements of `a` and `b`, stopping at the end of the shorter.
///
/// ```
/// use array_kernel::{zip, Seq};
///
/// let xs = [1, 2, 3];
/// let ys = vec!['a', 'b'];
/// assert_eq!(zip(Seq::whole(&xs), Seq::whole(&ys)).collect::<Vec<_>>(), [(&1, &'a'), (&2, &'b')]);
/// ```
pub fn zip<'a, A, B>(a: Seq<'a, A>, b: Seq<'a, B>) -> Zip<'a, A, B>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
{
    Zip {
        a,
        b,
        front: 0,
        len: a.len().min(b.len()),
    }
}

/// Triples up elements of `a`, `b` and `c`, stopping at the end of the
/// shortest.
pub fn zip3<'a, A, B, C>(
    a: Seq<'a, A>,
    b: Seq<'a, B>,
    c: Seq<'a, C>,
) -> impl ExactSizeIterator<Item = (&'a A::Elem, &'a B::Elem, &'a C::Elem)>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    C: Array + ?Sized,
{
    zip(a, b).zip(c.iter()).map(|((x, y), z)| (x, y, z))
}
