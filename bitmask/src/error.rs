use num_bigint::BigInt;
use thiserror::Error;

/// Errors reported by [`FixedBitVector`](crate::FixedBitVector) operations.
///
/// Every error is returned before the vector is modified, so a failed call leaves the
/// receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitMaskError {
    #[error("capacity {capacity} is not a valid bit count")]
    InvalidCapacity { capacity: usize },

    #[error("value {value} is out of range, expected {expected}")]
    ValueOutOfRange { value: BigInt, expected: Expected },

    #[error("index {index} is out of range for a vector of {capacity} bits")]
    IndexOutOfRange { index: i128, capacity: usize },

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("{text:?} is not a valid base-{radix} string")]
    FormatError { text: String, radix: u32 },
}

/// The range a rejected value was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// `0 <= value < 2^bits`.
    Below { bits: usize },
    /// A single bit.
    Bit,
    /// A slice step other than zero.
    NonZeroStep,
}

impl Expected {
    pub(crate) fn fits_in(capacity: usize) -> Self {
        Expected::Below { bits: capacity }
    }
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Below { bits } => write!(f, "0 <= value < 2^{bits}"),
            Expected::Bit => write!(f, "0 or 1"),
            Expected::NonZeroStep => write!(f, "a non-zero slice step"),
        }
    }
}

pub type Result<T> = std::result::Result<T, BitMaskError>;
