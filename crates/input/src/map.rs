//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one key press to a command.
///
/// Only the lowercase home-row keys are bound; everything else is `None`.
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode swallows SIGINT, so Ctrl-C has to be a key binding.
        return match key.code {
            KeyCode::Char('c') => Some(Command::Stop),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('h') => Some(Command::MoveLeft),
        KeyCode::Char('l') => Some(Command::MoveRight),
        KeyCode::Char('j') => Some(Command::MoveDown),
        KeyCode::Char('s') => Some(Command::RotateCw),
        KeyCode::Char('a') => Some(Command::RotateCcw),
        KeyCode::Char('q') => Some(Command::Stop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key_event(key('h')), Some(Command::MoveLeft));
        assert_eq!(map_key_event(key('l')), Some(Command::MoveRight));
        assert_eq!(map_key_event(key('j')), Some(Command::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key_event(key('s')), Some(Command::RotateCw));
        assert_eq!(map_key_event(key('a')), Some(Command::RotateCcw));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key_event(key('q')), Some(Command::Stop));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Stop)
        );
    }

    #[test]
    fn test_unbound_keys() {
        for c in ['H', 'Q', 'k', 'x', ' ', 'c'] {
            assert_eq!(map_key_event(key(c)), None, "{:?}", c);
        }
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            None
        );
    }
}
