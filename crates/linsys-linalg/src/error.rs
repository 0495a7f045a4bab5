use thiserror::Error;

/// Errors produced by vector, hyperplane and linear system operations.
///
/// All of these are precondition violations: they are deterministic and reproduce identically
/// for the same input.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector was constructed from an empty coordinate sequence, or a system from an empty
    /// list of equations.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A numeric literal could not be parsed as an exact decimal.
    #[error("invalid number literal `{literal}`")]
    InvalidNumber {
        literal: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Two operands (or an equation and its system) live in different dimensions.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cannot normalize the zero vector")]
    NormalizeZeroVector,

    #[error("cannot compute an angle with the zero vector")]
    AngleWithZeroVector,

    /// Projection onto the zero vector.
    #[error("no unique parallel component")]
    NoUniqueParallelComponent,

    /// The cross product was requested for vectors that are neither 2- nor 3-dimensional.
    #[error("only defined in 2 and 3 dimensions (got {0})")]
    UnsupportedDimension(usize),

    /// A pivot search found only (near-)zero coefficients.
    #[error("no nonzero elements found")]
    NoNonzeroElements,

    /// An intermediate result does not fit into a [`Decimal`][rust_decimal::Decimal].
    #[error("arithmetic overflow")]
    Overflow,

    #[error("row index {index} out of bounds for a system of {len} equations")]
    RowOutOfBounds { index: usize, len: usize },
}

impl Error {
    /// Creates a [`Error::DimensionMismatch`] error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
