//! Validation error types

use std::fmt;

/// Validation error for a submitted number.
///
/// Display output is the client-facing message, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body carries no `number` field
    MissingNumber,

    /// The `number` field is not an integer
    NotAnInteger,

    /// The value is outside the accepted domain (must be strictly positive)
    OutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNumber => write!(f, "Invalid input: Missing \"number\""),
            Self::NotAnInteger => write!(f, "Invalid input: Number must be an integer."),
            Self::OutOfRange => write!(f, "Number out of range"),
        }
    }
}

impl std::error::Error for ValidationError {}
