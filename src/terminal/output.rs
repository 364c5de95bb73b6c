//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passmatic::Rating;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const BLUE: &str = "\x1b[38;5;12m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn rating_color(rating: Rating) -> &'static str {
    match rating {
        Rating::Weak => RED,
        Rating::Moderate => YELLOW,
        Rating::Strong => BLUE,
        Rating::VeryStrong => GREEN,
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a horizontal rule (box style).
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.chars().count());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.chars().count());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Greedy word wrap to `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Split a long string into box-width chunks (passwords have no spaces to wrap on).
pub fn chunk(s: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Render the strength meter: a 3-line box filled in proportion to
/// `score / max`, tinted with `color`, with `label` centered inside.
pub fn strength_meter(score: u8, max: u8, label: &str, color: &str) {
    let inner_width = BOX_WIDTH - 2;
    let filled = meter_fill(score, max, inner_width);

    let text_chars: Vec<char> = label.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let filled_str: String = content[..filled].iter().collect();
    let unfilled_str: String = content[filled..].iter().collect();

    println!("┌{}┐", "─".repeat(inner_width));
    println!("│{color}\x1b[7m{filled_str}{RESET}{unfilled_str}│");
    println!("└{}┘", "─".repeat(inner_width));
}

fn meter_fill(score: u8, max: u8, width: usize) -> usize {
    if max == 0 || score >= max {
        return width;
    }
    width * score as usize / max as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escape_codes() {
        assert_eq!(console_width(&format!("{GREEN}ok{RESET}")), 2);
        assert_eq!(console_width("≥ 12"), 4);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("use the operating system random source", 12);
        assert_eq!(lines, vec!["use the", "operating", "system", "random", "source"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn chunk_splits_long_passwords() {
        assert_eq!(chunk("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(chunk("", 3), vec![""]);
    }

    #[test]
    fn meter_fill_is_proportional() {
        assert_eq!(meter_fill(0, 10, 72), 0);
        assert_eq!(meter_fill(5, 10, 72), 36);
        assert_eq!(meter_fill(10, 10, 72), 72);
        assert_eq!(meter_fill(3, 0, 72), 72);
    }
}
