//! Keyboard mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::difficulty::Difficulty;

/// A player intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(u8),
    Start,
    Stop,
    Reset { keep_round: bool },
    SetDifficulty(Difficulty),
    CycleDifficulty,
    Quit,
}

/// Translate a key event; keys with no binding return None
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Tab => Some(Command::CycleDifficulty),
        KeyCode::Char(' ') => Some(Command::Stop),
        KeyCode::Char(c) => match c {
            '0'..='9' => c.to_digit(10).map(|d| Command::Press(d as u8)),
            's' | 'S' => Some(Command::Start),
            'p' | 'P' => Some(Command::Stop),
            'r' | 'R' => Some(Command::Reset { keep_round: false }),
            'k' | 'K' => Some(Command::Reset { keep_round: true }),
            'c' | 'C' => Some(Command::SetDifficulty(Difficulty::Calm)),
            'n' | 'N' => Some(Command::SetDifficulty(Difficulty::Normal)),
            'i' | 'I' => Some(Command::SetDifficulty(Difficulty::Intense)),
            'q' | 'Q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// One-line key legend for the footer
pub const LEGEND: &str =
    "(s)tart / (p)ause / (r)eset / (k)eep-round reset / (c)alm (n)ormal (i)ntense / (esc)ape";
