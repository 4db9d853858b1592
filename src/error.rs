//! The error type shared by every fallible operation in this crate.

/// Why an argument was rejected.
///
/// Carried by [`Error::InvalidArgument`]. All of these are programmer
/// errors: the call was malformed, not unlucky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum Invalid {
    /// A view stride of zero.
    #[error("stride must be non-zero")]
    ZeroStride,

    /// An interleave group size of zero.
    #[error("group size must be non-zero")]
    ZeroGroupSize,

    /// A range step of zero.
    #[error("range step must be non-zero")]
    ZeroStep,

    /// A range step whose sign would never reach the end bound.
    #[error("range step points away from the end bound")]
    StepDirection,

    /// A range bound or step that is NaN or infinite.
    #[error("range bounds and step must be finite")]
    NonFinite,

    /// Index or size arithmetic that does not fit in a machine word.
    #[error("index arithmetic overflows")]
    Overflow,

    /// A reshape target without dimensions.
    #[error("shape must have at least one dimension")]
    EmptyShape,

    /// A shape with more than [`MAX_RANK`](crate::MAX_RANK) dimensions.
    #[error("shape has {got} dimensions, at most {max} are supported")]
    RankTooLarge { got: usize, max: usize },

    /// A reshape whose source and target hold different numbers of elements.
    #[error("source holds {source_len} elements but the shape describes {shape_len}")]
    ShapeMismatch { source_len: usize, shape_len: usize },

    /// A nested source whose rows at some depth differ in length.
    #[error("nested source is not rectangular")]
    Ragged,

    /// A sub-range that does not fit in its array.
    #[error("range {start}..{start}+{count} exceeds length {len}")]
    OutOfRange { start: usize, count: usize, len: usize },

    /// A view that would reach outside its source.
    #[error("offset {offset} falls outside a source of length {len}")]
    OffsetOutOfRange { offset: isize, len: usize },

    /// Sequences that must match in length but do not.
    #[error("sequences have different lengths: {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An [`Operand::Array`](crate::Operand::Array) with no elements.
    #[error("repeating operand is empty")]
    EmptyPattern,
}

/// The type of error for array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum Error {
    /// A malformed call.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] Invalid),

    /// A required array was not supplied.
    #[error("missing argument: {what}")]
    MissingArgument { what: &'static str },

    /// The storage cannot do what was asked of it.
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `start..start + count` lies within `len`.
pub(crate) fn check_range(start: usize, count: usize, len: usize) -> Result<()> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Invalid::OutOfRange { start, count, len }.into()),
    }
}
