//! CLI defaults, optionally read from a settings file.

mod file;

use std::path::Path;

use crate::pass::{ClassSet, GenerationConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub anchor: String,
    pub number_of_candidates: usize,
    pub show_details: bool,
    pub use_urandom: bool,
}

impl Settings {
    /// Load from `$HOME/.config/passmatic/settings`; defaults if it doesn't exist.
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    /// Settings rendered as a settings file line.
    pub fn to_line(&self) -> String {
        file::render(self)
    }

    pub fn path() -> std::path::PathBuf {
        file::get_path()
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.pass_length, self.classes).with_anchor(self.anchor.as_str())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            classes: ClassSet::all(),
            anchor: String::new(),
            number_of_candidates: 3,
            show_details: false,
            use_urandom: false,
        }
    }
}
