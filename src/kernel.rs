//! Bulk operations over arrays and [`Seq`]uences.
//!
//! Every operation comes in two shapes:
//!
//! - an allocating form, which returns a new `Vec` holding exactly the
//!   requested number of results, whatever the sizes of its inputs;
//! - a destination form (suffix `_into` or `_ex`), which writes exactly that
//!   many results into an existing [`Growable`] starting at `dest_start`.
//!   The destination is first grown with default values if the written range
//!   extends past its end. It is never shrunk and its existing prefix is
//!   never disturbed.
//!
//! Writing into an empty `Vec` at a non-zero `dest_start` therefore
//! allocates a result of `dest_start + count` elements whose first
//! `dest_start` are default values.
//!
//! All preconditions are checked before the first element is written, so a
//! destination is untouched when an operation fails. Elements are always
//! processed in ascending index order.

use alloc::vec::Vec;
use core::ops::Sub;

use num_traits::{Float, One, Zero};

use crate::array::{grow_array, Array, Growable, Operand, Seq};
use crate::error::{Error, Invalid, Result};
use crate::ops::{self, Binary};

/// The tolerance used by the `all_almost_equals` family when the caller
/// has no better value.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// [`DEFAULT_EPSILON`] converted to `T`.
///
/// ```
/// assert_eq!(array_kernel::default_epsilon::<f64>(), 1e-9);
/// ```
pub fn default_epsilon<T: Float>() -> T {
    T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon)
}

/// Grows `dest` to hold `count` elements at `dest_start`, then stores
/// `f(0)`, `f(1)`, ... into them in order.
fn write_with<D, F>(dest: &mut D, dest_start: usize, count: usize, mut f: F) -> Result<()>
where
    D: Growable + ?Sized,
    F: FnMut(usize) -> D::Elem,
{
    grow_array(dest, dest_start, count)?;
    for i in 0..count {
        *dest.at_mut(dest_start + i) = f(i);
    }
    Ok(())
}

fn same_count(left: usize, right: usize) -> Result<usize> {
    if left == right {
        Ok(left)
    } else {
        Err(Invalid::LengthMismatch { left, right }.into())
    }
}

// ----------------------------------------------------------------------------
// Construction.

/// Returns `count` clones of `value`.
///
/// ```
/// assert_eq!(array_kernel::fill(7, 3), [7, 7, 7]);
/// ```
pub fn fill<T: Clone>(value: T, count: usize) -> Vec<T> {
    alloc::vec![value; count]
}

/// Writes `count` clones of `value` into `dest` at `dest_start`.
pub fn fill_into<D>(value: D::Elem, count: usize, dest: &mut D, dest_start: usize) -> Result<()>
where
    D: Growable + ?Sized,
    D::Elem: Clone,
{
    write_with(dest, dest_start, count, |_| value.clone())
}

/// Calls `f` with each index in `0..count` and collects the results.
///
/// ```
/// assert_eq!(array_kernel::generate(4, |i| i * i), [0, 1, 4, 9]);
/// ```
pub fn generate<T>(count: usize, f: impl FnMut(usize) -> T) -> Vec<T> {
    (0..count).map(f).collect()
}

/// Writes `f(0)..f(count)` into `dest` at `dest_start`.
pub fn generate_into<D, F>(count: usize, f: F, dest: &mut D, dest_start: usize) -> Result<()>
where
    D: Growable + ?Sized,
    F: FnMut(usize) -> D::Elem,
{
    write_with(dest, dest_start, count, f)
}

/// Element types that [`range`], [`range_step`] and [`range_into`] can
/// count with: every primitive integer and float.
///
/// Integer progressions step from value to value with checked arithmetic
/// and end where the next value would overflow. Float progressions compute
/// the `k`th value as `from ± k * step` so that they do not drift.
pub trait RangeValue: Copy + PartialOrd + Zero + One + Sub<Output = Self> {
    /// `false` for NaN and the infinities.
    fn is_finite_value(self) -> bool;

    /// Value number `k` of `from, from + step, ...`, given value number
    /// `k - 1` as `prev`. `None` if it cannot be represented.
    fn advance(from: Self, prev: Self, k: usize, step: Self) -> Option<Self>;

    /// Value number `k` of `from, from - step, ...`.
    fn retreat(from: Self, prev: Self, k: usize, step: Self) -> Option<Self>;

    /// How far a value may overshoot the end bound and still be taken as
    /// the end bound itself.
    fn slack(step: Self) -> Self;
}

macro_rules! integer_range_value {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            #[inline]
            fn is_finite_value(self) -> bool {
                true
            }
            #[inline]
            fn advance(_: Self, prev: Self, _: usize, step: Self) -> Option<Self> {
                prev.checked_add(step)
            }
            #[inline]
            fn retreat(_: Self, prev: Self, _: usize, step: Self) -> Option<Self> {
                prev.checked_sub(step)
            }
            #[inline]
            fn slack(_: Self) -> Self {
                0
            }
        }
    )*};
}

integer_range_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_range_value {
    ($($t:ident),*) => {$(
        impl RangeValue for $t {
            #[inline]
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }
            #[inline]
            fn advance(from: Self, _: Self, k: usize, step: Self) -> Option<Self> {
                Some(from + k as $t * step)
            }
            #[inline]
            fn retreat(from: Self, _: Self, k: usize, step: Self) -> Option<Self> {
                Some(from - k as $t * step)
            }
            #[inline]
            fn slack(step: Self) -> Self {
                Float::abs(step) * DEFAULT_EPSILON as $t
            }
        }
    )*};
}

float_range_value!(f32, f64);

/// The lazy arithmetic progression behind [`range`] and [`range_step`].
#[derive(Debug, Clone)]
struct Progression<T> {
    from: T,
    to: T,
    step: T,
    /// Subtract `step` instead of adding it.
    subtract: bool,
    /// Values decrease towards `to`.
    descending: bool,
    slack: T,
    next: Option<T>,
    k: usize,
}

impl<T: RangeValue> Progression<T> {
    fn new(from: T, to: T, step: T) -> Result<Self> {
        check_finite(from, to)?;
        if !step.is_finite_value() {
            return Err(Invalid::NonFinite.into());
        }
        if step == T::zero() {
            return Err(Invalid::ZeroStep.into());
        }
        let descending = step < T::zero();
        if (!descending && from > to) || (descending && from < to) {
            return Err(Invalid::StepDirection.into());
        }
        Ok(Self::build(from, to, step, false, descending))
    }

    fn unit(from: T, to: T) -> Result<Self> {
        check_finite(from, to)?;
        let descending = to < from;
        Ok(Self::build(from, to, T::one(), descending, descending))
    }

    fn build(from: T, to: T, step: T, subtract: bool, descending: bool) -> Self {
        Self {
            from,
            to,
            step,
            subtract,
            descending,
            slack: T::slack(step),
            next: Some(from),
            k: 0,
        }
    }

    /// `candidate` if it lies on this side of `to`, `to` itself if it
    /// overshoots by no more than the slack.
    fn bounded(&self, candidate: T) -> Option<T> {
        let (inside, overshoot) = if self.descending {
            (candidate >= self.to, self.slack > T::zero() && self.to - candidate <= self.slack)
        } else {
            (candidate <= self.to, self.slack > T::zero() && candidate - self.to <= self.slack)
        };
        if inside {
            Some(candidate)
        } else if overshoot {
            Some(self.to)
        } else {
            None
        }
    }
}

impl<T: RangeValue> Iterator for Progression<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.next?;
        if value == self.to {
            self.next = None;
            return Some(value);
        }
        self.k += 1;
        let following = if self.subtract {
            T::retreat(self.from, value, self.k, self.step)
        } else {
            T::advance(self.from, value, self.k, self.step)
        };
        self.next = following.and_then(|t| self.bounded(t));
        Some(value)
    }
}

fn check_finite<T: RangeValue>(from: T, to: T) -> Result<()> {
    if from.is_finite_value() && to.is_finite_value() {
        Ok(())
    } else {
        Err(Invalid::NonFinite.into())
    }
}

/// Returns `from, from ± 1, ...` up to and including `to`, counting down
/// when `to < from`.
///
/// Fails if either bound is NaN or infinite.
///
/// ```
/// assert_eq!(array_kernel::range(1, 4).unwrap(), [1, 2, 3, 4]);
/// assert_eq!(array_kernel::range(3u8, 1).unwrap(), [3, 2, 1]);
/// assert_eq!(array_kernel::range(-100i8, 100).unwrap().len(), 201);
/// ```
pub fn range<T: RangeValue>(from: T, to: T) -> Result<Vec<T>> {
    Ok(Progression::unit(from, to)?.collect())
}

/// Returns `from, from + step, ...` for as long as the values do not pass
/// `to`.
///
/// Fails if `step` is zero, if it points away from `to`, or if any
/// argument is NaN or infinite. Integer progressions also end where the
/// next value would overflow.
///
/// Float values are computed as `from + k * step`. A value that passes
/// `to` by rounding error alone (no more than `step` times
/// [`DEFAULT_EPSILON`]) is replaced by `to`, so an end bound that the step
/// lands on is always included.
///
/// ```
/// use array_kernel::{range_step, Error, Invalid};
///
/// assert_eq!(range_step(0.0, 1.0, 0.25).unwrap(), [0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(range_step(10, 1, -4).unwrap(), [10, 6, 2]);
/// assert_eq!(range_step(1, 10, 0), Err(Error::InvalidArgument(Invalid::ZeroStep)));
/// assert_eq!(range_step(1, 10, -1), Err(Error::InvalidArgument(Invalid::StepDirection)));
/// assert_eq!(range_step(0.0, 1.0, f64::NAN), Err(Error::InvalidArgument(Invalid::NonFinite)));
/// ```
pub fn range_step<T: RangeValue>(from: T, to: T, step: T) -> Result<Vec<T>> {
    Ok(Progression::new(from, to, step)?.collect())
}

/// Writes the values of [`range_step`] into `dest` at `dest_start`.
pub fn range_into<D, T>(from: T, to: T, step: T, dest: &mut D, dest_start: usize) -> Result<()>
where
    D: Growable<Elem = T> + ?Sized,
    T: RangeValue,
{
    let values = Progression::new(from, to, step)?;
    let count = values.clone().count();
    let mut values = values;
    write_with(dest, dest_start, count, |_| values.next().unwrap_or(to))
}

// ----------------------------------------------------------------------------
// Copies.

/// Copies all of `src` into a new array.
pub fn copy<A>(src: &A) -> Vec<A::Elem>
where
    A: Array + ?Sized,
    A::Elem: Clone,
{
    Seq::whole(src).iter().cloned().collect()
}

/// Copies `src` into `dest` starting at `dest_start`.
///
/// ```
/// use array_kernel::{copy_ex, Seq};
///
/// let src = [1, 2, 3, 4, 5];
/// let mut dest = vec![9, 9];
/// copy_ex(Seq::new(&src, 1, 3).unwrap(), &mut dest, 1).unwrap();
/// assert_eq!(dest, [9, 2, 3, 4]);
/// ```
pub fn copy_ex<A, D>(src: Seq<'_, A>, dest: &mut D, dest_start: usize) -> Result<()>
where
    A: Array + ?Sized,
    A::Elem: Clone,
    D: Growable<Elem = A::Elem> + ?Sized,
{
    write_with(dest, dest_start, src.len(), |i| src.at(i).clone())
}

/// Copies `count` elements of `dest`, starting at `start`, onto `dest`
/// itself starting at `dest_start`.
///
/// Elements are copied one at a time from low to high indices, after any
/// growth. When the target range begins inside the source range the
/// already-overwritten elements are read again, repeating the prefix.
///
/// ```
/// let mut a = vec![1, 2, 3, 0, 0];
/// array_kernel::copy_within(&mut a, 0, 2, 3).unwrap();
/// assert_eq!(a, [1, 2, 3, 1, 2]);
///
/// let mut b = vec![1, 2, 3];
/// array_kernel::copy_within(&mut b, 0, 3, 1).unwrap();
/// assert_eq!(b, [1, 1, 1, 1]);
/// ```
pub fn copy_within<D>(dest: &mut D, start: usize, count: usize, dest_start: usize) -> Result<()>
where
    D: Growable + ?Sized,
    D::Elem: Clone,
{
    crate::error::check_range(start, count, dest.len())?;
    grow_array(dest, dest_start, count)?;
    for i in 0..count {
        let t = dest.at(start + i).clone();
        *dest.at_mut(dest_start + i) = t;
    }
    Ok(())
}

/// Returns the elements of `src` in reverse order.
///
/// ```
/// assert_eq!(array_kernel::reverse(&[1, 2, 3]), [3, 2, 1]);
/// ```
pub fn reverse<A>(src: &A) -> Vec<A::Elem>
where
    A: Array + ?Sized,
    A::Elem: Clone,
{
    Seq::whole(src).iter().rev().cloned().collect()
}

/// Writes the elements of `src` into `dest` at `dest_start`, last first.
pub fn reverse_ex<A, D>(src: Seq<'_, A>, dest: &mut D, dest_start: usize) -> Result<()>
where
    A: Array + ?Sized,
    A::Elem: Clone,
    D: Growable<Elem = A::Elem> + ?Sized,
{
    let last = src.len().wrapping_sub(1);
    write_with(dest, dest_start, src.len(), |i| src.at(last - i).clone())
}

/// Appends all of `src` to the end of `dest`.
pub fn append<A, D>(dest: &mut D, src: &A) -> Result<()>
where
    A: Array + ?Sized,
    A::Elem: Clone,
    D: Growable<Elem = A::Elem> + ?Sized,
{
    let end = dest.len();
    copy_ex(Seq::whole(src), dest, end)
}

/// Appends `count` elements of `dest`, starting at `start`, to the end of
/// `dest` itself.
///
/// ```
/// let mut a = vec![1, 2, 3];
/// array_kernel::append_within(&mut a, 0, 3).unwrap();
/// assert_eq!(a, [1, 2, 3, 1, 2, 3]);
/// ```
pub fn append_within<D>(dest: &mut D, start: usize, count: usize) -> Result<()>
where
    D: Growable + ?Sized,
    D::Elem: Clone,
{
    let end = dest.len();
    copy_within(dest, start, count, end)
}

/// Returns the concatenation of `a` and `b`.
pub fn join<A, B>(a: &A, b: &B) -> Vec<A::Elem>
where
    A: Array + ?Sized,
    B: Array<Elem = A::Elem> + ?Sized,
    A::Elem: Clone,
{
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend(Seq::whole(a).iter().cloned());
    out.extend(Seq::whole(b).iter().cloned());
    out
}

/// Returns the concatenation of every array in `parts`.
///
/// ```
/// use array_kernel::{join_many, Array, Error};
///
/// let parts: [&dyn Array<Elem = i32>; 3] = [&[1, 2], &vec![3], &[4, 5, 6]];
/// assert_eq!(join_many(&parts).unwrap(), [1, 2, 3, 4, 5, 6]);
/// assert!(matches!(join_many::<i32>(&[]), Err(Error::MissingArgument { .. })));
/// ```
pub fn join_many<T: Clone>(parts: &[&dyn Array<Elem = T>]) -> Result<Vec<T>> {
    if parts.is_empty() {
        return Err(Error::MissingArgument { what: "arrays to join" });
    }
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend(Seq::whole(*part).iter().cloned());
    }
    Ok(out)
}

// ----------------------------------------------------------------------------
// Maps.

/// Applies `f` to each element of `src`.
///
/// ```
/// assert_eq!(array_kernel::map(&[1, 2, 3], |x| x * 10), [10, 20, 30]);
/// ```
pub fn map<A, U>(src: &A, f: impl FnMut(&A::Elem) -> U) -> Vec<U>
where
    A: Array + ?Sized,
{
    Seq::whole(src).iter().map(f).collect()
}

/// Writes `f` of each element of `src` into `dest` at `dest_start`.
pub fn map_ex<A, D>(
    src: Seq<'_, A>,
    mut f: impl FnMut(&A::Elem) -> D::Elem,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    D: Growable + ?Sized,
{
    write_with(dest, dest_start, src.len(), |i| f(src.at(i)))
}

/// Applies `f` pairwise to the first `a.len()` elements of `a` and `b`.
///
/// Fails if `b` is shorter than `a`.
pub fn map2<A, B, U>(a: &A, b: &B, mut f: impl FnMut(&A::Elem, &B::Elem) -> U) -> Result<Vec<U>>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
{
    let b = Seq::new(b, 0, a.len())?;
    Ok(generate(a.len(), |i| f(a.at(i), b.at(i))))
}

/// Writes `f` of each pair of `a` and `b` into `dest` at `dest_start`.
///
/// Fails if the sequences differ in length.
pub fn map2_ex<A, B, D>(
    a: Seq<'_, A>,
    b: Seq<'_, B>,
    mut f: impl FnMut(&A::Elem, &B::Elem) -> D::Elem,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    D: Growable + ?Sized,
{
    let count = same_count(a.len(), b.len())?;
    write_with(dest, dest_start, count, |i| f(a.at(i), b.at(i)))
}

/// Applies `f` to the first `a.len()` elements of three arrays.
pub fn map3<A, B, C, U>(
    a: &A,
    b: &B,
    c: &C,
    mut f: impl FnMut(&A::Elem, &B::Elem, &C::Elem) -> U,
) -> Result<Vec<U>>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    C: Array + ?Sized,
{
    let b = Seq::new(b, 0, a.len())?;
    let c = Seq::new(c, 0, a.len())?;
    Ok(generate(a.len(), |i| f(a.at(i), b.at(i), c.at(i))))
}

/// Three-sequence form of [`map2_ex`].
pub fn map3_ex<A, B, C, D>(
    (a, b, c): (Seq<'_, A>, Seq<'_, B>, Seq<'_, C>),
    mut f: impl FnMut(&A::Elem, &B::Elem, &C::Elem) -> D::Elem,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    C: Array + ?Sized,
    D: Growable + ?Sized,
{
    let count = same_count(a.len(), b.len())?;
    let count = same_count(count, c.len())?;
    write_with(dest, dest_start, count, |i| f(a.at(i), b.at(i), c.at(i)))
}

/// Applies `f` to the first `a.len()` elements of four arrays.
///
/// ```
/// let x = [1, 2];
/// let y = [10, 20];
/// let z = [100, 200];
/// let w = [1000, 2000, 3000];
/// let sums = array_kernel::map4(&x, &y, &z, &w, |a, b, c, d| a + b + c + d).unwrap();
/// assert_eq!(sums, [1111, 2222]);
/// ```
pub fn map4<A, B, C, E, U>(
    a: &A,
    b: &B,
    c: &C,
    d: &E,
    mut f: impl FnMut(&A::Elem, &B::Elem, &C::Elem, &E::Elem) -> U,
) -> Result<Vec<U>>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    C: Array + ?Sized,
    E: Array + ?Sized,
{
    let b = Seq::new(b, 0, a.len())?;
    let c = Seq::new(c, 0, a.len())?;
    let d = Seq::new(d, 0, a.len())?;
    Ok(generate(a.len(), |i| f(a.at(i), b.at(i), c.at(i), d.at(i))))
}

/// Four-sequence form of [`map2_ex`].
pub fn map4_ex<A, B, C, E, D>(
    (a, b, c, d): (Seq<'_, A>, Seq<'_, B>, Seq<'_, C>, Seq<'_, E>),
    mut f: impl FnMut(&A::Elem, &B::Elem, &C::Elem, &E::Elem) -> D::Elem,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    C: Array + ?Sized,
    E: Array + ?Sized,
    D: Growable + ?Sized,
{
    let count = same_count(a.len(), b.len())?;
    let count = same_count(count, c.len())?;
    let count = same_count(count, d.len())?;
    write_with(dest, dest_start, count, |i| f(a.at(i), b.at(i), c.at(i), d.at(i)))
}

/// Applies `f` position by position across any number of arrays of one
/// element type. `f` receives the elements at the current position, one
/// per source, in source order.
///
/// The result has the length of the first source; every other source must
/// be at least that long.
///
/// ```
/// use array_kernel::{map_many, Array};
///
/// let sources: [&dyn Array<Elem = u32>; 3] = [&[1, 2], &[3, 4], &[5, 6, 7]];
/// let sums = map_many(&sources, |xs| xs.iter().copied().sum::<u32>()).unwrap();
/// assert_eq!(sums, [9, 12]);
/// ```
pub fn map_many<T, U>(
    sources: &[&dyn Array<Elem = T>],
    mut f: impl FnMut(&[&T]) -> U,
) -> Result<Vec<U>> {
    let first = sources.first().ok_or(Error::MissingArgument {
        what: "arrays to map over",
    })?;
    let count = first.len();
    for source in sources {
        crate::error::check_range(0, count, source.len())?;
    }
    let mut row = Vec::with_capacity(sources.len());
    Ok(generate(count, |i| {
        row.clear();
        row.extend(sources.iter().map(|s| s.at(i)));
        f(&row)
    }))
}

// ----------------------------------------------------------------------------
// Element-wise binary operators.

fn operand_at<'o, U>(operand: &'o Operand<'_, U>, index: usize) -> &'o U {
    match operand {
        Operand::Scalar(u) => u,
        Operand::Array(pattern) => pattern.at(index % pattern.len()),
    }
}

fn check_operand<U>(operand: &Operand<'_, U>) -> Result<()> {
    match operand {
        Operand::Array(pattern) if pattern.is_empty() => Err(Invalid::EmptyPattern.into()),
        _ => Ok(()),
    }
}

/// Combines `a` and `b` element by element with the operator `O`.
///
/// The result has `a.len()` elements; `b` must be at least that long.
///
/// ```
/// use array_kernel::{binary, ops};
///
/// assert_eq!(binary::<ops::Mul, _, _>(&[1, 2, 3], &[4, 5, 6]).unwrap(), [4, 10, 18]);
/// ```
pub fn binary<O, A, B>(a: &A, b: &B) -> Result<Vec<O::Output>>
where
    O: Binary<A::Elem, B::Elem>,
    A: Array + ?Sized,
    B: Array + ?Sized,
    A::Elem: Clone,
    B::Elem: Clone,
{
    map2(a, b, |t, u| O::call(t.clone(), u.clone()))
}

/// Writes `O` of each pair of `a` and `b` into `dest` at `dest_start`.
pub fn binary_ex<O, A, B, D>(a: Seq<'_, A>, b: Seq<'_, B>, dest: &mut D, dest_start: usize) -> Result<()>
where
    O: Binary<A::Elem, B::Elem>,
    A: Array + ?Sized,
    B: Array + ?Sized,
    A::Elem: Clone,
    B::Elem: Clone,
    D: Growable<Elem = O::Output> + ?Sized,
{
    map2_ex(a, b, |t, u| O::call(t.clone(), u.clone()), dest, dest_start)
}

/// Combines each element of `a` with `b` using the operator `O`, where
/// `b` is either a scalar or a repeating pattern (see [`Operand`]).
///
/// A pattern whose length does not divide `a.len()` is used for as many
/// elements as remain, so the final repetition may be partial.
pub fn binary_constant<O, A, U>(a: &A, b: Operand<'_, U>) -> Result<Vec<O::Output>>
where
    O: Binary<A::Elem, U>,
    A: Array + ?Sized,
    A::Elem: Clone,
    U: Clone,
{
    check_operand(&b)?;
    Ok(generate(a.len(), |i| O::call(a.at(i).clone(), operand_at(&b, i).clone())))
}

/// Writes `O` of each element of `a` and `b` into `dest` at `dest_start`.
///
/// Pattern positions count from the start of `a`, not of its backing array.
pub fn binary_constant_ex<O, A, U, D>(
    a: Seq<'_, A>,
    b: Operand<'_, U>,
    dest: &mut D,
    dest_start: usize,
) -> Result<()>
where
    O: Binary<A::Elem, U>,
    A: Array + ?Sized,
    A::Elem: Clone,
    U: Clone,
    D: Growable<Elem = O::Output> + ?Sized,
{
    check_operand(&b)?;
    write_with(dest, dest_start, a.len(), |i| {
        O::call(a.at(i).clone(), operand_at(&b, i).clone())
    })
}

macro_rules! named_binary {
    ($op:ident: $name:ident, $name_ex:ident, $name_constant:ident, $name_constant_ex:ident, $what:literal) => {
        #[doc = concat!("Element-wise ", $what, ". See [`binary`].")]
        pub fn $name<A, B>(a: &A, b: &B) -> Result<Vec<<ops::$op as Binary<A::Elem, B::Elem>>::Output>>
        where
            ops::$op: Binary<A::Elem, B::Elem>,
            A: Array + ?Sized,
            B: Array + ?Sized,
            A::Elem: Clone,
            B::Elem: Clone,
        {
            binary::<ops::$op, A, B>(a, b)
        }

        #[doc = concat!("Element-wise ", $what, " into a destination. See [`binary_ex`].")]
        pub fn $name_ex<A, B, D>(a: Seq<'_, A>, b: Seq<'_, B>, dest: &mut D, dest_start: usize) -> Result<()>
        where
            ops::$op: Binary<A::Elem, B::Elem>,
            A: Array + ?Sized,
            B: Array + ?Sized,
            A::Elem: Clone,
            B::Elem: Clone,
            D: Growable<Elem = <ops::$op as Binary<A::Elem, B::Elem>>::Output> + ?Sized,
        {
            binary_ex::<ops::$op, A, B, D>(a, b, dest, dest_start)
        }

        #[doc = concat!("Element-wise ", $what, " against a scalar or pattern. See [`binary_constant`].")]
        pub fn $name_constant<A, U>(a: &A, b: Operand<'_, U>) -> Result<Vec<<ops::$op as Binary<A::Elem, U>>::Output>>
        where
            ops::$op: Binary<A::Elem, U>,
            A: Array + ?Sized,
            A::Elem: Clone,
            U: Clone,
        {
            binary_constant::<ops::$op, A, U>(a, b)
        }

        #[doc = concat!("Element-wise ", $what, " against a scalar or pattern, into a destination. See [`binary_constant_ex`].")]
        pub fn $name_constant_ex<A, U, D>(a: Seq<'_, A>, b: Operand<'_, U>, dest: &mut D, dest_start: usize) -> Result<()>
        where
            ops::$op: Binary<A::Elem, U>,
            A: Array + ?Sized,
            A::Elem: Clone,
            U: Clone,
            D: Growable<Elem = <ops::$op as Binary<A::Elem, U>>::Output> + ?Sized,
        {
            binary_constant_ex::<ops::$op, A, U, D>(a, b, dest, dest_start)
        }
    };
}

named_binary!(Add: add, add_ex, add_constant, add_constant_ex, "addition");
named_binary!(Sub: sub, sub_ex, sub_constant, sub_constant_ex, "subtraction");
named_binary!(Mul: mul, mul_ex, mul_constant, mul_constant_ex, "multiplication");
named_binary!(Div: div, div_ex, div_constant, div_constant_ex, "division");
named_binary!(Rem: rem, rem_ex, rem_constant, rem_constant_ex, "remainder");
named_binary!(Pow: pow, pow_ex, pow_constant, pow_constant_ex, "exponentiation");
named_binary!(Eq: eq, eq_ex, eq_constant, eq_constant_ex, "`==`");
named_binary!(Ne: ne, ne_ex, ne_constant, ne_constant_ex, "`!=`");
named_binary!(Lt: lt, lt_ex, lt_constant, lt_constant_ex, "`<`");
named_binary!(Le: le, le_ex, le_constant, le_constant_ex, "`<=`");
named_binary!(Gt: gt, gt_ex, gt_constant, gt_constant_ex, "`>`");
named_binary!(Ge: ge, ge_ex, ge_constant, ge_constant_ex, "`>=`");

// ----------------------------------------------------------------------------
// Whole-sequence comparisons. A length mismatch is an answer, not an error.

/// Returns `true` if `a` and `b` have the same length and equal elements.
///
/// ```
/// use array_kernel::all_equals;
///
/// assert!(all_equals(&[1, 2, 3], &vec![1, 2, 3]));
/// assert!(!all_equals(&[1, 2, 3], &[1, 2]));
/// ```
pub fn all_equals<A, B>(a: &A, b: &B) -> bool
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    A::Elem: PartialEq<B::Elem>,
{
    all_equals_ex(Seq::whole(a), Seq::whole(b))
}

/// Returns `true` if the sequences have the same count and equal elements.
pub fn all_equals_ex<A, B>(a: Seq<'_, A>, b: Seq<'_, B>) -> bool
where
    A: Array + ?Sized,
    B: Array + ?Sized,
    A::Elem: PartialEq<B::Elem>,
{
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(t, u)| t == u)
}

/// Returns `true` if every element of `a` equals `value`.
pub fn all_equals_constant<A, U>(a: &A, value: &U) -> bool
where
    A: Array + ?Sized,
    A::Elem: PartialEq<U>,
{
    Seq::whole(a).iter().all(|t| t == value)
}

fn close<T: Float>(t: T, u: T, epsilon: T) -> bool {
    (t - u).abs() <= epsilon
}

/// Returns `true` if `a` and `b` have the same length and every pair of
/// elements differs by at most `epsilon`.
///
/// ```
/// use array_kernel::{all_almost_equals, DEFAULT_EPSILON};
///
/// assert!(all_almost_equals(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], DEFAULT_EPSILON));
/// assert!(!all_almost_equals(&[1.0, 2.0], &[1.0, 2.1], DEFAULT_EPSILON));
/// assert!(!all_almost_equals(&[f64::NAN], &[f64::NAN], DEFAULT_EPSILON));
/// ```
pub fn all_almost_equals<A, B, T>(a: &A, b: &B, epsilon: T) -> bool
where
    A: Array<Elem = T> + ?Sized,
    B: Array<Elem = T> + ?Sized,
    T: Float,
{
    all_almost_equals_ex(Seq::whole(a), Seq::whole(b), epsilon)
}

/// Sequence form of [`all_almost_equals`].
pub fn all_almost_equals_ex<A, B, T>(a: Seq<'_, A>, b: Seq<'_, B>, epsilon: T) -> bool
where
    A: Array<Elem = T> + ?Sized,
    B: Array<Elem = T> + ?Sized,
    T: Float,
{
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&t, &u)| close(t, u, epsilon))
}

/// Like [`all_almost_equals`], except that two NaNs count as equal.
///
/// ```
/// use array_kernel::{all_almost_equals_nan, DEFAULT_EPSILON};
///
/// assert!(all_almost_equals_nan(&[1.0, f64::NAN], &[1.0, f64::NAN], DEFAULT_EPSILON));
/// assert!(!all_almost_equals_nan(&[1.0, f64::NAN], &[1.0, 0.0], DEFAULT_EPSILON));
/// ```
pub fn all_almost_equals_nan<A, B, T>(a: &A, b: &B, epsilon: T) -> bool
where
    A: Array<Elem = T> + ?Sized,
    B: Array<Elem = T> + ?Sized,
    T: Float,
{
    a.len() == b.len()
        && Seq::whole(a)
            .iter()
            .zip(Seq::whole(b).iter())
            .all(|(&t, &u)| (t.is_nan() && u.is_nan()) || close(t, u, epsilon))
}

/// Returns `true` if every element of `a` is within `epsilon` of `value`.
///
/// ```
/// use array_kernel::{all_almost_equals_constant, DEFAULT_EPSILON};
///
/// let a = [1.01, 1.05, 0.95, 1.0, 1.0, 1.001];
/// assert!(all_almost_equals_constant(&a, 1.0, 0.1));
/// assert!(!all_almost_equals_constant(&a, 1.0, DEFAULT_EPSILON));
/// ```
pub fn all_almost_equals_constant<A, T>(a: &A, value: T, epsilon: T) -> bool
where
    A: Array<Elem = T> + ?Sized,
    T: Float,
{
    Seq::whole(a).iter().all(|&t| close(t, value, epsilon))
}
