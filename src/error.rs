//! Error types

use std::fmt;

/// Error returned when classifying a string that is not exactly one character
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ClassifyError {
    Empty,
    TooManyChars(usize),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Empty => write!(f, "expected one character, but none found"),
            ClassifyError::TooManyChars(count) => {
                write!(f, "expected one character, but {} chars found", count)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}
