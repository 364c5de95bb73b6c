use passmatic::pass::{MAX_LENGTH, MIN_LENGTH};
use passmatic::presets::PRESETS;

use crate::terminal::{box_bottom, box_line, box_opt, box_rule, box_top};

pub fn print_help() {
    box_top(&format!("passmatic {}", env!("CARGO_PKG_VERSION")));
    box_line("Usage: passmatic [OPTIONS]");
    box_rule();
    box_opt("-l, --length <N>", &format!("Password length ({MIN_LENGTH}-{MAX_LENGTH}, default 12)"));
    box_opt("-n, --number <N>", "Number of extra candidate passwords (default 3)");
    box_opt(
        "-a, --anchor <WORD>",
        "Word mixed into the password. A word longer than the length is used alone, so the password is longer than requested.",
    );
    box_opt("-c, --classes <SET>", "Character classes: u=upper l=lower d=digits s=symbols");
    box_opt("--no-upper", "Exclude uppercase letters");
    box_opt("--no-lower", "Exclude lowercase letters");
    box_opt("--no-digits", "Exclude digits");
    box_opt("--no-symbols", "Exclude symbols");
    box_opt("-p, --preset <NAME>", "Use a website preset (see --presets)");
    box_opt("--presets", "List website presets");
    box_rule();
    box_opt("-D, --details", "Show every strength criterion");
    box_opt("-b, --board", "Copy the password to the clipboard");
    box_opt("-i, --interactive", "Regenerate, copy and inspect in a live screen");
    box_opt("-q, --quiet", "Print only the password (and candidates with -n)");
    box_rule();
    box_opt("-u, --urandom", "Draw from a locked /dev/urandom pool");
    box_opt("--seed <N>", "Reproducible output. Not for real credentials.");
    box_opt("-d, --default", "Ignore the settings file");
    box_opt("--show-settings", "Print the effective settings line and its path");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_bottom();
}

pub fn print_presets() {
    box_top("Presets");
    for (i, preset) in PRESETS.iter().enumerate() {
        if i > 0 {
            box_rule();
        }
        box_line(&format!(
            "{} \u{2022} length {} \u{2022} classes {}",
            preset.name,
            preset.length,
            preset.classes.codes()
        ));
        box_line(&format!("  {}", preset.description));
    }
    box_bottom();
}
