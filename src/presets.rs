//! Built-in website presets.

use crate::pass::{CharClass, ClassSet, GenerationConfig};

/// A named configuration tuned for a site's password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub length: usize,
    pub classes: ClassSet,
}

impl Preset {
    /// Generation config for this preset. Presets never carry an anchor.
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.length, self.classes)
    }
}

const LETTERS_AND_DIGITS: ClassSet = ClassSet::all_but(CharClass::Symbol);

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "Google",
        description: "8+ chars, mix of letters, numbers & symbols",
        length: 12,
        classes: ClassSet::all(),
    },
    Preset {
        name: "Microsoft",
        description: "8+ chars, uppercase, lowercase, numbers & symbols",
        length: 14,
        classes: ClassSet::all(),
    },
    Preset {
        name: "Amazon",
        description: "6+ chars, includes at least 1 number",
        length: 10,
        classes: LETTERS_AND_DIGITS,
    },
];

/// Look up a preset by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
