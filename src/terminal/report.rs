//! Rendering of a generated password, its score, and the candidate set.

use passmatic::strength::{MAX_SCORE, entropy};
use passmatic::{ClassSet, GenerationConfig, StrengthReport};

use super::output::{
    BOLD, BOX_WIDTH, DIM, GREEN, RESET, YELLOW, box_bottom, box_line, box_rule, box_top, chunk,
    rating_color, strength_meter,
};

/// Everything shown for one generation round.
pub struct View<'a> {
    pub password: &'a str,
    pub report: &'a StrengthReport,
    pub candidates: &'a [String],
    pub config: &'a GenerationConfig,
    pub source: &'a str,
    pub show_details: bool,
}

pub fn print_view(view: &View<'_>) {
    let inner = BOX_WIDTH - 4;

    box_top("Password");
    for line in chunk(view.password, inner) {
        box_line(&format!("{BOLD}{line}{RESET}"));
    }
    box_bottom();

    let rating = view.report.rating();
    strength_meter(
        view.report.total_score,
        MAX_SCORE,
        &format!("{} ({}/{})", rating, view.report.total_score, MAX_SCORE),
        rating_color(rating),
    );

    if view.show_details {
        print_details(view.report);
    }

    let bits = view.config.entropy_bits();
    println!(
        " {DIM}Entropy: {:.1} bits ({}) \u{2022} Source: {}{RESET}",
        bits,
        entropy::describe(bits),
        view.source
    );
    println!(" {DIM}Classes: {}{RESET}", class_list(view.config.classes));
    if view.config.anchor_len() > view.config.length {
        println!(
            " {YELLOW}Anchor is longer than the requested length ({}); password is {} chars{RESET}",
            view.config.length,
            view.config.anchor_len()
        );
    }

    if !view.candidates.is_empty() {
        println!();
        box_top("Candidates");
        for (i, candidate) in view.candidates.iter().enumerate() {
            for (j, line) in chunk(candidate, inner - 4).into_iter().enumerate() {
                if j == 0 {
                    box_line(&format!("{:>2}. {}", i + 1, line));
                } else {
                    box_line(&format!("    {}", line));
                }
            }
        }
        box_bottom();
    }
}

fn print_details(report: &StrengthReport) {
    box_top("Strength Criteria");
    for check in &report.checks {
        let weight = check.criterion.weight();
        let unit = if weight == 1 { "point" } else { "points" };
        let (mark, color) = if check.passed {
            ("\u{2714}", GREEN)
        } else {
            ("\u{26a0}", YELLOW)
        };
        box_line(&format!(
            "{color}{mark} {} ({weight} {unit}){RESET}",
            check.criterion.label()
        ));
    }
    box_rule();
    box_line(&format!(
        "{} of {} criteria met",
        report.passed().count(),
        report.checks.len()
    ));
    box_bottom();
}

fn class_list(classes: ClassSet) -> String {
    if classes.is_empty() {
        return "none (anchor only)".to_string();
    }
    classes.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use passmatic::CharClass;

    #[test]
    fn class_list_names_enabled_classes_in_order() {
        assert_eq!(
            class_list(ClassSet::all()),
            "Uppercase, Lowercase, Numbers, Symbols"
        );
        let set = ClassSet::empty()
            .with(CharClass::Symbol)
            .with(CharClass::Digit);
        assert_eq!(class_list(set), "Numbers, Symbols");
    }

    #[test]
    fn class_list_marks_anchor_only() {
        assert_eq!(class_list(ClassSet::empty()), "none (anchor only)");
    }
}
