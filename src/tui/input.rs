use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// What the user asked for on the interactive screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    Copy,
    ToggleDetails,
    Quit,
}

/// Raw mode for the duration of a single key read.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until a key that maps to an [`Action`] is pressed.
pub fn read_action() -> Action {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Action::Quit,
    };

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                if let Some(action) = map_key(key.code, ctrl) {
                    return action;
                }
            }
            Ok(_) => {}
            Err(_) => return Action::Quit,
        }
    }
}

fn map_key(code: KeyCode, ctrl: bool) -> Option<Action> {
    match code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char(' ') => Some(Action::Regenerate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('d') => Some(Action::ToggleDetails),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_quits_but_plain_c_copies() {
        assert_eq!(map_key(KeyCode::Char('c'), true), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('c'), false), Some(Action::Copy));
    }

    #[test]
    fn regenerate_keys() {
        for code in [KeyCode::Enter, KeyCode::Char('r'), KeyCode::Char(' ')] {
            assert_eq!(map_key(code, false), Some(Action::Regenerate));
        }
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x'), false), None);
        assert_eq!(map_key(KeyCode::Tab, false), None);
        assert_eq!(map_key(KeyCode::Char('d'), false), Some(Action::ToggleDetails));
        assert_eq!(map_key(KeyCode::Esc, false), Some(Action::Quit));
    }
}
