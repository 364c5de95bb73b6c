//! Entropy estimate for the randomly drawn part of a password.

/// Password entropy in bits.
pub fn calculate(random_chars: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 || random_chars == 0 {
        return 0.0;
    }
    random_chars as f64 * (alphabet_size as f64).log2()
}

/// Entropy strength description.
pub fn describe(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
