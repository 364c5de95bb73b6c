//! Settings file format.
//!
//! One line of comma-separated fields:
//! `length,classes,anchor,candidates,details,urandom`, e.g. `16,ulds,,3,false,false`.
//! Inside a field `|` escapes the next character, so `|,` is a literal comma.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::ClassSet;

const FIELDS: usize = 6;

pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(());
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{}: expected {FIELDS} fields, found {}",
                path.display(),
                parts.len()
            ),
        ));
    }

    settings.pass_length = parts[0].trim().parse().unwrap_or(settings.pass_length);
    settings.classes = ClassSet::from_codes(parts[1].trim()).unwrap_or(settings.classes);
    settings.anchor = parts[2].clone();
    settings.number_of_candidates = parts[3]
        .trim()
        .parse()
        .unwrap_or(settings.number_of_candidates);
    settings.show_details = parts[4].trim().parse().unwrap_or(settings.show_details);
    settings.use_urandom = parts[5].trim().parse().unwrap_or(settings.use_urandom);

    Ok(())
}

pub fn render(settings: &Settings) -> String {
    let anchor = settings
        .anchor
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    format!(
        "{},{},{},{},{},{}",
        settings.pass_length,
        settings.classes.codes(),
        anchor,
        settings.number_of_candidates,
        settings.show_details,
        settings.use_urandom
    )
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passmatic/settings", home))
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '|' {
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
