//! Interactive screen: regenerate, copy, and inspect in place.

mod input;

use zeroize::Zeroize;

use passmatic::rand::IndexSource;
use passmatic::{GenerateError, GenerationConfig, StrengthReport, evaluate, synthesize, synthesize_many};

use crate::cli::copy_to_clipboard;
use crate::terminal::{DIM, GREEN, RED, RESET, View, YELLOW, clear, print_view, reset_terminal};

use input::{Action, read_action};

/// One generated password with its score and candidates.
struct Round {
    password: String,
    report: StrengthReport,
    candidates: Vec<String>,
}

impl Round {
    fn generate(
        config: &GenerationConfig,
        source: &mut dyn IndexSource,
        count: usize,
    ) -> Result<Self, GenerateError> {
        let password = synthesize(config, source)?;
        let report = evaluate(&password);
        let candidates = synthesize_many(config, count, source)?;
        Ok(Self {
            password,
            report,
            candidates,
        })
    }
}

impl Drop for Round {
    fn drop(&mut self) {
        self.password.zeroize();
        self.candidates.iter_mut().for_each(Zeroize::zeroize);
    }
}

/// Run the interactive loop until the user quits.
pub fn run(
    config: &GenerationConfig,
    source: &mut dyn IndexSource,
    candidates: usize,
    mut show_details: bool,
) -> Result<(), GenerateError> {
    let mut round = Round::generate(config, source, candidates)?;
    let mut status = String::new();

    loop {
        clear();
        print_view(&View {
            password: &round.password,
            report: &round.report,
            candidates: &round.candidates,
            config,
            source: source.name(),
            show_details,
        });
        println!();
        println!(" {DIM}[Enter] new  [c] copy  [d] details  [q] quit{RESET}");
        if !status.is_empty() {
            println!(" {status}");
        }
        if let Some(fault) = source.fault() {
            println!(" {YELLOW}/dev/urandom read failed ({fault}), using OS CSPRNG{RESET}");
        }

        match read_action() {
            Action::Regenerate => {
                round = Round::generate(config, source, candidates)?;
                status.clear();
            }
            Action::Copy => {
                status = match copy_to_clipboard(&round.password) {
                    Ok(()) => format!("{GREEN}Copied to clipboard{RESET}"),
                    Err(e) => format!("{RED}Clipboard error: {e}{RESET}"),
                };
            }
            Action::ToggleDetails => show_details = !show_details,
            Action::Quit => break,
        }
    }

    clear();
    reset_terminal();
    Ok(())
}
