//! Request validation errors.

use thiserror::Error;

/// Why a generation request was rejected.
///
/// Every variant is a caller input problem; messages are meant to be shown
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", invalid_length(.input))]
    InvalidLength { input: String },

    #[error("length {length} is too short, should be min of {min} characters")]
    LengthTooShort { length: String, min: usize },

    #[error("length {length} is too long, should be max of {max} characters")]
    LengthTooLong { length: String, max: usize },

    #[error("no character class selected")]
    NoClassSelected,
}

fn invalid_length(input: &str) -> String {
    if input.is_empty() {
        "length is required".to_string()
    } else {
        format!("invalid length '{input}', expected a whole number")
    }
}
