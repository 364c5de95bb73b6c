//! Per-invocation generation parameters.

use super::charset::{self, ClassSet};

/// Everything needed to synthesize one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Requested length in characters. 8..=32 is the usual range; anything in
    /// [`MIN_LENGTH`](super::MIN_LENGTH)..=[`MAX_LENGTH`](super::MAX_LENGTH) is accepted.
    pub length: usize,
    pub classes: ClassSet,
    /// Literal fragment woven into the password. When it is longer than
    /// `length` the password is the (shuffled) anchor alone and exceeds `length`.
    pub anchor: Option<String>,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length,
            classes,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        let anchor = anchor.into();
        self.anchor = (!anchor.is_empty()).then_some(anchor);
        self
    }

    pub fn anchor_len(&self) -> usize {
        self.anchor.as_deref().map_or(0, |a| a.chars().count())
    }

    /// Number of random characters that still have to be drawn.
    pub fn need(&self) -> usize {
        self.length.saturating_sub(self.anchor_len())
    }

    /// Length of the password this config produces.
    pub fn output_len(&self) -> usize {
        self.length.max(self.anchor_len())
    }

    /// Entropy of the random part in bits (the anchor is assumed known).
    pub fn entropy_bits(&self) -> f64 {
        crate::strength::entropy::calculate(self.need(), charset::size(self.classes))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(12, ClassSet::all())
    }
}
