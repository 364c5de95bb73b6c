use passmatic::ClassSet;
use passmatic::presets::Preset;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub default: bool,
    pub list_presets: bool,
    pub show_settings: bool,
    pub details: bool,
    pub clipboard: bool,
    pub urandom: bool,
    pub interactive: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub anchor: Option<String>,
    pub classes: Option<ClassSet>,
    pub preset: Option<&'static Preset>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Flags that only print information and exit.
    pub fn is_info_only(&self) -> bool {
        self.help || self.version || self.list_presets || self.show_settings
    }
}
