use thiserror::Error;

/// Errors reported by the core algorithms.
///
/// There is exactly one failure kind: the caller handed over input the
/// algorithms cannot work with. Arithmetic overflow is not a failure mode
/// because every intermediate value is arbitrary-precision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// What exactly was wrong with the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("closest pair needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("digit string is empty")]
    EmptyDigits,

    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, Error>;
