use std::error;
use std::fmt;

/// Represents errors that can occur while restoring a checksum accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The serialized state has the wrong size. Contains the expected and the received length.
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { expected, actual } => write!(
                f,
                "invalid state length: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl error::Error for Error {}

/// A specialized `Result` type for checksum operations.
pub type Result<T> = std::result::Result<T, Error>;
