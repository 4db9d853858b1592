//! Generic programming over element-wise operators.
//!
//! For each supported operator this module contains a type of the same
//! name that cannot be instantiated and that implements [`Binary`]. For
//! example, [`Add`] corresponds to [`core::ops::Add`]. These are passed as
//! type parameters to [`binary()`] and friends.
//!
//! [`binary()`]: crate::binary()

/// A function that combines `T` with `U`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T, U> {
    /// The result type.
    type Output;

    /// Combine `t` with `u`.
    fn call(t: T, u: U) -> Self::Output;
}

macro_rules! arithmetic {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$meta])*
        pub enum $name {}

        impl<T, U> Binary<T, U> for $name where T: $bound<U> {
            type Output = T::Output;
            #[inline(always)]
            fn call(t: T, u: U) -> Self::Output { t.$method(u) }
        }
    };
}

use core::ops::{Add as AddOp, Div as DivOp, Mul as MulOp, Rem as RemOp, Sub as SubOp};
use num_traits::Pow as PowOp;

arithmetic!(
    /// `t + u`.
    Add, AddOp, add
);
arithmetic!(
    /// `t - u`.
    Sub, SubOp, sub
);
arithmetic!(
    /// `t * u`.
    Mul, MulOp, mul
);
arithmetic!(
    /// `t / u`.
    Div, DivOp, div
);
arithmetic!(
    /// `t % u`.
    Rem, RemOp, rem
);
arithmetic!(
    /// `t` raised to the power `u`, as defined by [`num_traits::Pow`].
    Pow, PowOp, pow
);

// ----------------------------------------------------------------------------

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$meta])*
        pub enum $name {}

        impl<T, U> Binary<T, U> for $name where T: $bound<U> {
            type Output = bool;
            #[inline(always)]
            fn call(t: T, u: U) -> bool { t $op u }
        }
    };
}

comparison!(
    /// `t == u`.
    Eq, PartialEq, ==
);
comparison!(
    /// `t != u`.
    Ne, PartialEq, !=
);
comparison!(
    /// `t < u`.
    Lt, PartialOrd, <
);
comparison!(
    /// `t <= u`.
    Le, PartialOrd, <=
);
comparison!(
    /// `t > u`.
    Gt, PartialOrd, >
);
comparison!(
    /// `t >= u`.
    Ge, PartialOrd, >=
);
