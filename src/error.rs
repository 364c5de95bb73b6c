//! Errors surfaced by password synthesis.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Characters are still needed but no character class is enabled.
    #[error("no character classes enabled but {need} more character(s) needed")]
    EmptyAlphabet { need: usize },

    #[error("password length {length} is outside {min}..={max}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
}
