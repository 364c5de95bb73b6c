//! Centralized warning and status messages for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Global quiet mode flag - suppresses warnings and status lines
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin and stdout are both ttys (interactive mode is possible)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn help_hint() {
    eprintln!("Run with --help for usage.");
}

pub fn settings_load_failed(err: &str) {
    warn(&format!("Failed to load settings: {err}"));
    warn("Using defaults.");
}

/// Print mlock failure warning with fix instructions
pub fn mlock_failed() {
    warn("Warning: mlock failed - entropy pool may be swapped to disk.");
    warn("Fix: ulimit -l unlimited, or setcap cap_ipc_lock=ep on binary");
}

pub fn urandom_unavailable(err: &str) {
    warn(&format!(
        "Warning: /dev/urandom not available ({err}), using OS CSPRNG"
    ));
}

pub fn seeded_source() {
    warn("Warning: --seed output is reproducible; do not use it for real credentials.");
}

pub fn interactive_unavailable() {
    warn("Warning: interactive mode needs a terminal; printing once instead.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}
