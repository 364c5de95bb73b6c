//! CLI context - bundles settings, flags, and the resolved generation config.

use std::path::Path;

use zeroize::Zeroize;

use passmatic::rand::{IndexSource, OsSource, SeededSource, UrandomPool, urand};
use passmatic::settings::Settings;
use passmatic::{CharClass, GenerateError, GenerationConfig, evaluate, synthesize, synthesize_many};

use super::help::{print_help, print_presets};
use super::{CliFlags, clipboard, prompts};
use crate::terminal::{View, print_view};
use crate::tui;

/// Why a run stopped before (or instead of) printing passwords.
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Failed(GenerateError),
}

impl From<GenerateError> for Stop {
    fn from(e: GenerateError) -> Self {
        Stop::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub config: GenerationConfig,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        prompts::set_quiet(flags.quiet);

        let settings = load_settings(&flags, &Settings::path());
        let config = resolve_config(&settings, &flags);

        Ok(Self {
            settings,
            config,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        let mut source = self.make_source();

        if self.flags.interactive {
            if prompts::is_interactive() {
                tui::run(
                    &self.config,
                    source.as_mut(),
                    self.candidate_count(),
                    self.show_details(),
                )?;
                return Ok(());
            }
            prompts::interactive_unavailable();
        }

        self.generate_output(source.as_mut())?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if !self.flags.is_info_only() {
            return Ok(());
        }
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("passmatic {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        if self.flags.list_presets {
            print_presets();
            return Err(Stop::Done);
        }
        if self.flags.show_settings {
            println!("# {}", Settings::path().display());
            println!("{}", self.effective_settings().to_line());
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn make_source(&self) -> Box<dyn IndexSource> {
        if let Some(seed) = self.flags.seed {
            prompts::seeded_source();
            return Box::new(SeededSource::new(seed));
        }

        if self.flags.urandom || self.settings.use_urandom {
            if !urand::is_available() {
                prompts::urandom_unavailable("missing device");
                return Box::new(OsSource);
            }
            match UrandomPool::open() {
                Ok(pool) => {
                    if !pool.is_locked() {
                        prompts::mlock_failed();
                    }
                    return Box::new(pool);
                }
                Err(e) => prompts::urandom_unavailable(&e.to_string()),
            }
        }

        Box::new(OsSource)
    }

    fn candidate_count(&self) -> usize {
        match self.flags.number {
            Some(n) => n,
            None if self.flags.quiet => 0,
            None => self.settings.number_of_candidates,
        }
    }

    fn show_details(&self) -> bool {
        self.flags.details || self.settings.show_details
    }

    /// Settings as they would be written to reproduce this invocation.
    fn effective_settings(&self) -> Settings {
        Settings {
            pass_length: self.config.length,
            classes: self.config.classes,
            anchor: self.config.anchor.clone().unwrap_or_default(),
            number_of_candidates: self.candidate_count(),
            show_details: self.show_details(),
            use_urandom: self.flags.urandom || self.settings.use_urandom,
        }
    }

    /// Generate the password and candidates and handle output.
    pub fn generate_output(&self, source: &mut dyn IndexSource) -> Result<(), GenerateError> {
        let mut password = synthesize(&self.config, source)?;
        let mut candidates = synthesize_many(&self.config, self.candidate_count(), source)?;
        if let Some(fault) = source.fault() {
            prompts::urandom_unavailable(fault);
        }

        if self.flags.quiet {
            println!("{password}");
            for candidate in &candidates {
                println!("{candidate}");
            }
        } else {
            let report = evaluate(&password);
            print_view(&View {
                password: &password,
                report: &report,
                candidates: &candidates,
                config: &self.config,
                source: source.name(),
                show_details: self.show_details(),
            });
        }

        if self.flags.clipboard {
            match clipboard::copy(&password) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e),
            }
        }

        password.zeroize();
        candidates.iter_mut().for_each(Zeroize::zeroize);
        Ok(())
    }
}

/// Settings from `path`, or built-in defaults when `-d` is given.
fn load_settings(flags: &CliFlags, path: &Path) -> Settings {
    if flags.default {
        return Settings::default();
    }
    Settings::load_from(path).unwrap_or_else(|e| {
        prompts::settings_load_failed(&e.to_string());
        Settings::default()
    })
}

/// Apply settings, then the preset, then explicit flags.
fn resolve_config(settings: &Settings, flags: &CliFlags) -> GenerationConfig {
    let mut config = match flags.preset {
        Some(preset) => preset.config(),
        None => settings.generation_config(),
    };

    if let Some(length) = flags.length {
        config.length = length;
    }
    if let Some(classes) = flags.classes {
        config.classes = classes;
    }
    for (off, class) in [
        (flags.no_upper, CharClass::Uppercase),
        (flags.no_lower, CharClass::Lowercase),
        (flags.no_digits, CharClass::Digit),
        (flags.no_symbols, CharClass::Symbol),
    ] {
        if off {
            config.classes.remove(class);
        }
    }
    if let Some(anchor) = &flags.anchor {
        config = config.with_anchor(anchor.as_str());
    }

    config
}
