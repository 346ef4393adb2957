//! Key input: where key presses come from and what they mean on each screen.

use crate::core::{Difficulty, INPUT_POLL_MS};
use crate::players::CursorInput;
use crate::ui::NameInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// A blocking source of key presses.
pub trait KeySource {
    /// Wait for the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent>;

    /// Throw away keys typed while nobody was listening.
    fn drain(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads keys from the real terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports both press and release
                    if key.kind == KeyEventKind::Press {
                        return Ok(key);
                    }
                }
            }
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }
        Ok(())
    }
}

/// Pre-recorded keys. Running out is treated as the input stream closing.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Build from key codes with no modifiers.
    pub fn from_codes(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(codes.into_iter().map(KeyEvent::from))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }
}

/// Ctrl+C. Raw mode swallows SIGINT, so this is how the player kills the game.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted by user")
}

pub fn map_cursor_input(key: &KeyEvent) -> CursorInput {
    match key.code {
        KeyCode::Up => CursorInput::Up,
        KeyCode::Down => CursorInput::Down,
        KeyCode::Enter => CursorInput::Confirm,
        _ => CursorInput::Other,
    }
}

pub fn map_name_input(key: &KeyEvent) -> NameInput {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => NameInput::Char(c),
        KeyCode::Backspace => NameInput::Backspace,
        KeyCode::Left => NameInput::Left,
        KeyCode::Right => NameInput::Right,
        KeyCode::Enter => NameInput::Submit,
        _ => NameInput::Other,
    }
}

/// `1`/`2`/`3` pick a tier; everything else is ignored.
pub fn map_difficulty_input(key: &KeyEvent) -> Option<Difficulty> {
    match key.code {
        KeyCode::Char(c) => Difficulty::from_hotkey(c),
        _ => None,
    }
}

pub fn is_play_again(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(map_cursor_input(&key(KeyCode::Up)), CursorInput::Up);
        assert_eq!(map_cursor_input(&key(KeyCode::Down)), CursorInput::Down);
        assert_eq!(map_cursor_input(&key(KeyCode::Enter)), CursorInput::Confirm);
        assert_eq!(map_cursor_input(&key(KeyCode::Left)), CursorInput::Other);
        assert_eq!(map_cursor_input(&key(KeyCode::Char('x'))), CursorInput::Other);
    }

    #[test]
    fn test_difficulty_mapping() {
        assert_eq!(
            map_difficulty_input(&key(KeyCode::Char('1'))),
            Some(Difficulty::Easy)
        );
        assert_eq!(
            map_difficulty_input(&key(KeyCode::Char('2'))),
            Some(Difficulty::Moderate)
        );
        assert_eq!(
            map_difficulty_input(&key(KeyCode::Char('3'))),
            Some(Difficulty::Hard)
        );
        assert_eq!(map_difficulty_input(&key(KeyCode::Char('4'))), None);
        assert_eq!(map_difficulty_input(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_name_mapping() {
        assert_eq!(map_name_input(&key(KeyCode::Char('a'))), NameInput::Char('a'));
        assert_eq!(map_name_input(&key(KeyCode::Backspace)), NameInput::Backspace);
        assert_eq!(map_name_input(&key(KeyCode::Enter)), NameInput::Submit);
        assert_eq!(map_name_input(&key(KeyCode::Esc)), NameInput::Other);
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&key(KeyCode::Char('c'))));
        assert_eq!(map_name_input(&ctrl_c), NameInput::Other);
    }

    #[test]
    fn test_scripted_keys_run_out() {
        let mut keys = ScriptedKeys::from_codes([KeyCode::Enter]);
        assert_eq!(keys.next_key().unwrap().code, KeyCode::Enter);
        assert_eq!(keys.remaining(), 0);
        let err = keys.next_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_play_again_key() {
        assert!(is_play_again(&key(KeyCode::Char('r'))));
        assert!(is_play_again(&key(KeyCode::Char('R'))));
        assert!(!is_play_again(&key(KeyCode::Char('q'))));
    }
}
