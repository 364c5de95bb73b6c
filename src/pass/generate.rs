//! Password generation.

use zeroize::Zeroize;

use super::GenerationConfig;
use super::charset;
use crate::error::GenerateError;
use crate::rand::IndexSource;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;

/// Synthesize a single password.
///
/// The anchor (if any) is placed first, the remaining `length - anchor_len`
/// characters are drawn uniformly from the alphabet, and the whole sequence is
/// shuffled, anchor included. An anchor longer than `length` is returned
/// shuffled and untruncated, so the output is longer than requested.
pub fn synthesize<S>(config: &GenerationConfig, source: &mut S) -> Result<String, GenerateError>
where
    S: IndexSource + ?Sized,
{
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
        return Err(GenerateError::InvalidLength {
            length: config.length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }

    let mut alphabet = charset::build(config.classes);
    let need = config.need();
    if need > 0 && alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet { need });
    }

    let mut chars: Vec<char> = Vec::with_capacity(config.output_len());
    if let Some(anchor) = &config.anchor {
        chars.extend(anchor.chars());
    }
    chars.extend((0..need).map(|_| alphabet[source.next_index(alphabet.len())]));

    shuffle(&mut chars, source);

    let password: String = chars.iter().collect();
    chars.zeroize();
    alphabet.zeroize();
    Ok(password)
}

/// Synthesize `count` independent passwords under one configuration.
///
/// Each password is a fresh draw from `source`; nothing ties the results to
/// each other or to an earlier password.
pub fn synthesize_many<S>(
    config: &GenerationConfig,
    count: usize,
    source: &mut S,
) -> Result<Vec<String>, GenerateError>
where
    S: IndexSource + ?Sized,
{
    (0..count).map(|_| synthesize(config, source)).collect()
}

/// Fisher-Yates: uniform over all orderings given a uniform source.
#[inline]
fn shuffle<T, S>(items: &mut [T], source: &mut S)
where
    S: IndexSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1);
        items.swap(i, j);
    }
}
