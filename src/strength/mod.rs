//! Password strength scoring against a fixed, weighted rubric.

pub mod entropy;
mod rubric;

pub use rubric::{Criterion, RUBRIC};

use std::fmt;

/// Highest attainable score; the rubric weights sum to this.
pub const MAX_SCORE: u8 = 10;

/// Outcome of one rubric criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub criterion: Criterion,
    pub passed: bool,
}

impl Check {
    /// Points this check contributes to the total.
    pub fn points(&self) -> u8 {
        if self.passed { self.criterion.weight() } else { 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// One entry per criterion, in rubric order.
    pub checks: Vec<Check>,
    pub total_score: u8,
}

impl StrengthReport {
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.total_score)
    }

    pub fn passed(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.checks.iter().filter(|c| c.passed).map(|c| c.criterion)
    }

    pub fn failed(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.checks.iter().filter(|c| !c.passed).map(|c| c.criterion)
    }
}

/// Score a password. Pure: same input, same report.
pub fn evaluate(password: &str) -> StrengthReport {
    let checks: Vec<Check> = RUBRIC
        .iter()
        .map(|&criterion| Check {
            criterion,
            passed: criterion.passes(password),
        })
        .collect();
    let total_score = checks.iter().map(Check::points).sum();
    StrengthReport {
        checks,
        total_score,
    }
}

/// Coarse label for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Rating::Weak,
            4..=5 => Rating::Moderate,
            6..=7 => Rating::Strong,
            _ => Rating::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Weak => "Weak",
            Rating::Moderate => "Moderate",
            Rating::Strong => "Strong",
            Rating::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(report: &StrengthReport) -> Vec<bool> {
        report.checks.iter().map(|c| c.passed).collect()
    }

    #[test]
    fn fixture_password_scores_nine() {
        let report = evaluate("Ab3$efG7@hiJ");
        assert_eq!(
            outcome(&report),
            vec![true, true, true, true, true, false, true, true, true]
        );
        assert_eq!(report.total_score, 9);
        assert_eq!(report.rating(), Rating::VeryStrong);
        assert_eq!(report.failed().collect::<Vec<_>>(), vec![Criterion::MinLength16]);
    }

    #[test]
    fn checks_follow_rubric_order() {
        let report = evaluate("anything");
        let order: Vec<Criterion> = report.checks.iter().map(|c| c.criterion).collect();
        assert_eq!(order, RUBRIC.to_vec());
    }

    #[test]
    fn evaluation_is_idempotent() {
        for p in ["", "aaaa", "Ab3$efG7@hiJ", "Tr0ub4dor&3", "ÄÖÜ äöü 123"] {
            assert_eq!(evaluate(p), evaluate(p));
        }
    }

    #[test]
    fn empty_password_only_passes_distinctness() {
        let report = evaluate("");
        assert_eq!(report.passed().collect::<Vec<_>>(), vec![Criterion::NoRepeats]);
        assert_eq!(report.total_score, 1);
        assert_eq!(report.rating(), Rating::Weak);
    }

    #[test]
    fn perfect_password_scores_ten() {
        let report = evaluate("Ab1!Cd2@Ef3#Gh4$");
        assert!(report.checks.iter().all(|c| c.passed));
        assert_eq!(report.total_score, MAX_SCORE);
    }

    #[test]
    fn repeated_character_fails_distinctness() {
        let report = evaluate("abcdefghijka");
        assert!(report.failed().any(|c| c == Criterion::NoRepeats));
    }

    #[test]
    fn score_never_exceeds_max() {
        for p in ["x", "XXXXXXXXXXXXXXXXXXXXXXXX", "!!!!!!!!11111111", "Ab1!Cd2@Ef3#Gh4$Ij5%"] {
            assert!(evaluate(p).total_score <= MAX_SCORE);
        }
    }

    #[test]
    fn rating_thresholds() {
        let labels: Vec<Rating> = (0..=10).map(Rating::from_score).collect();
        assert_eq!(
            labels,
            vec![
                Rating::Weak,
                Rating::Weak,
                Rating::Weak,
                Rating::Weak,
                Rating::Moderate,
                Rating::Moderate,
                Rating::Strong,
                Rating::Strong,
                Rating::VeryStrong,
                Rating::VeryStrong,
                Rating::VeryStrong,
            ]
        );
        assert_eq!(Rating::VeryStrong.to_string(), "Very Strong");
    }
}
