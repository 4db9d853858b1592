//! `no_std` flat array kernel: offset-based bulk operations, zero-copy views
//! and reshaping.
//!
//! ## Description
//!
//! Everything in this crate is written against one small capability set,
//! the [`Array`] trait: report a length and hand out elements by index.
//! [`ArrayMut`] adds assignment and [`Growable`] adds extension with default
//! values. Slices, fixed-size arrays, `Vec`, [`arrayvec::ArrayVec`] and every
//! view in [`view`] implement the traits that make sense for them.
//!
//! On top of that sit:
//!
//! - bulk operations (copy, fill, range, generate, map, element-wise
//!   arithmetic and comparison, whole-array equality) that follow one
//!   convention for sub-ranges and destinations, see [`Seq`] and the
//!   `_into`/`_ex` functions;
//! - [`view`]s: slices, strided and reversed views, interleaved views and
//!   fixed-length slices, none of which copy their source;
//! - [`reshape`], [`reshape_flat`] and [`flatten`], which move elements
//!   between flat and [`Nested`] arrays of any shape with the same number
//!   of elements;
//! - [`groups`] and [`zip`], for walking arrays a tuple at a time.
//!
//! ## Usage
//!
//! Users can either import an `Ext` trait (`ArrayExt` or `GrowableExt`) to
//! bring in the desired methods, or use the bare functions. Note that trait
//! methods have the `_ext` suffix to avoid collision with inherent methods.
//!
//! ```
//! use array_kernel::{add_constant, append_within, view, Operand, Seq};
//!
//! // Shift every xyz triple of a flat position buffer by the same offset.
//! let positions = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let moved = add_constant(&positions, Operand::Array(&[10.0, 20.0, 30.0])).unwrap();
//! assert_eq!(moved, [10.0, 20.0, 30.0, 11.0, 21.0, 31.0]);
//!
//! // Look at the y coordinates only, without copying.
//! let ys = view::stride(&moved, 1, 3, 2).unwrap();
//! assert_eq!(ys.to_vec(), [20.0, 21.0]);
//!
//! // Append a buffer to itself.
//! let mut a = vec![1, 2, 3];
//! append_within(&mut a, 0, 3).unwrap();
//! assert_eq!(a, [1, 2, 3, 1, 2, 3]);
//! ```
//!
//! Indices are 0-based. Operations check their ranges before reading or
//! writing anything and report [`Error::InvalidArgument`]; indexing an array
//! or view directly panics when out of range, like slice indexing.
//!
//! ## Limitations
//!
//! Everything is single-threaded and synchronous, and no operation holds
//! state between calls. Views borrow their source for as long as they live,
//! so the borrow checker rules out most aliasing. The one aliasing case that
//! is supported, copying within a single array, goes through
//! [`copy_within`] and [`append_within`], which copy from low to high
//! indices.
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod array;
pub use array::*;

mod error;
pub use error::{Error, Invalid, Result};

pub mod ops;

mod kernel;
pub use kernel::*;

mod reshape;
pub use reshape::{
    flatten, flatten_into, reshape, reshape_flat, reshape_flat_into, reshape_into, Leaves, Nested,
    MAX_RANK,
};

pub mod view;

mod iter;
pub use iter::{groups, groups_ex, zip, zip3, Groups, Zip};
