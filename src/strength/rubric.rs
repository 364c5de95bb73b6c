//! The scoring rubric.

use std::collections::HashSet;

/// One weighted pass/fail rule of the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    MinLength12,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSymbol,
    MinLength16,
    NoRepeats,
    MultipleDigits,
    MultipleSymbols,
}

/// Evaluation order. Weights sum to [`MAX_SCORE`](super::MAX_SCORE).
pub const RUBRIC: [Criterion; 9] = [
    Criterion::MinLength12,
    Criterion::HasUppercase,
    Criterion::HasLowercase,
    Criterion::HasDigit,
    Criterion::HasSymbol,
    Criterion::MinLength16,
    Criterion::NoRepeats,
    Criterion::MultipleDigits,
    Criterion::MultipleSymbols,
];

impl Criterion {
    pub fn label(self) -> &'static str {
        match self {
            Criterion::MinLength12 => "Length \u{2265} 12 characters",
            Criterion::HasUppercase => "Contains uppercase letters",
            Criterion::HasLowercase => "Contains lowercase letters",
            Criterion::HasDigit => "Contains numbers",
            Criterion::HasSymbol => "Contains symbols",
            Criterion::MinLength16 => "Length \u{2265} 16 characters",
            Criterion::NoRepeats => "No repeated characters",
            Criterion::MultipleDigits => "Contains multiple numbers",
            Criterion::MultipleSymbols => "Contains multiple symbols",
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            Criterion::MinLength12 => 2,
            _ => 1,
        }
    }

    pub fn passes(self, password: &str) -> bool {
        match self {
            Criterion::MinLength12 => char_len(password) >= 12,
            Criterion::HasUppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::HasLowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::HasDigit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::HasSymbol => password.chars().any(is_symbol),
            Criterion::MinLength16 => char_len(password) >= 16,
            Criterion::NoRepeats => {
                let mut seen = HashSet::new();
                password.chars().all(|c| seen.insert(c))
            }
            Criterion::MultipleDigits => password.chars().filter(char::is_ascii_digit).count() >= 2,
            Criterion::MultipleSymbols => password.chars().filter(|&c| is_symbol(c)).count() >= 2,
        }
    }
}

fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Anything outside `A-Za-z0-9`, including whitespace and non-ASCII.
fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}
