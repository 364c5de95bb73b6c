use passmatic::pass::charset;
use passmatic::rand::{IndexSource, SeededSource};
use passmatic::strength::MAX_SCORE;
use passmatic::{
    CharClass, ClassSet, GenerateError, GenerationConfig, Rating, evaluate, presets, synthesize,
    synthesize_many,
};

/// Replays a fixed index script, wrapping around at the end.
struct Scripted(Vec<usize>, usize);

impl IndexSource for Scripted {
    fn next_index(&mut self, n: usize) -> usize {
        let v = self.0[self.1 % self.0.len()];
        self.1 += 1;
        v % n
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[test]
fn every_preset_generates_and_scores() {
    let mut src = SeededSource::new(2024);
    for preset in presets::PRESETS {
        let config = preset.config();
        let password = synthesize(&config, &mut src).unwrap();
        assert_eq!(password.chars().count(), preset.length);

        let alphabet = charset::build(preset.classes);
        assert!(password.chars().all(|c| alphabet.contains(&c)));

        let report = evaluate(&password);
        assert!(report.total_score <= MAX_SCORE);
        assert_eq!(report.checks.len(), 9);
    }
}

#[test]
fn seeded_runs_are_reproducible_end_to_end() {
    let config = GenerationConfig::new(20, ClassSet::all()).with_anchor("maple");

    let run = |seed| {
        let mut src = SeededSource::new(seed);
        let password = synthesize(&config, &mut src).unwrap();
        let candidates = synthesize_many(&config, 3, &mut src).unwrap();
        (evaluate(&password), password, candidates)
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99).1, run(100).1);
}

#[test]
fn scripted_source_pins_output_and_score() {
    // Lowercase only, length 12: draws a..l, then every swap picks index 0.
    let mut script: Vec<usize> = (0..12).collect();
    script.extend(std::iter::repeat_n(0, 11));
    let mut src = Scripted(script, 0);

    let config = GenerationConfig::new(12, ClassSet::empty().with(CharClass::Lowercase));
    let password = synthesize(&config, &mut src).unwrap();
    assert_eq!(password, "bcdefghijkla");

    let report = evaluate(&password);
    // length >= 12 (2) + lowercase (1) + no repeats (1)
    assert_eq!(report.total_score, 4);
    assert_eq!(report.rating(), Rating::Moderate);
}

#[test]
fn anchor_only_config_with_no_classes() {
    let mut src = SeededSource::new(5);
    let config = GenerationConfig::new(8, ClassSet::empty()).with_anchor("sunflower");
    let password = synthesize(&config, &mut src).unwrap();
    assert_eq!(password.chars().count(), 9);

    let short = GenerationConfig::new(12, ClassSet::empty()).with_anchor("sunflower");
    assert_eq!(
        synthesize(&short, &mut src),
        Err(GenerateError::EmptyAlphabet { need: 3 })
    );
}

#[test]
fn fixture_report_from_public_api() {
    let report = evaluate("Ab3$efG7@hiJ");
    assert_eq!(report.total_score, 9);
    assert_eq!(report.rating(), Rating::VeryStrong);
    assert_eq!(report.rating().to_string(), "Very Strong");
}
