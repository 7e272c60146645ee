//! Key -> action translation.
//!
//! Stateless: the editor has a single mode plus an optional prompt line, so
//! each key maps on its own. Only printable ASCII and Tab become inserts.

use crate::{Action, EditKind, MotionKind, PromptKey};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

fn printable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

/// Translate a key pressed while editing. `None` means the key is unbound.
pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Save),
            KeyCode::Char('f') => Some(Action::Find),
            KeyCode::Char('h') => Some(Action::Edit(EditKind::Backspace)),
            KeyCode::Char('l') => Some(Action::Noop),
            _ => None,
        };
    }
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(c) if printable(c) => Action::Edit(EditKind::InsertChar(c as u8)),
        KeyCode::Char(_) => return None,
        KeyCode::Tab => Action::Edit(EditKind::InsertChar(b'\t')),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteForward),
        KeyCode::Esc => Action::Noop,
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
    };
    Some(action)
}

/// Translate a key pressed while a prompt line is open.
pub fn translate_prompt_key(key: &KeyEvent) -> PromptKey {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('h') => PromptKey::Backspace,
            _ => PromptKey::Other,
        };
    }
    if key.mods.contains(KeyModifiers::ALT) {
        return PromptKey::Other;
    }
    match key.code {
        KeyCode::Char(c) if printable(c) => PromptKey::Char(c),
        KeyCode::Backspace | KeyCode::Delete => PromptKey::Backspace,
        KeyCode::Enter => PromptKey::Accept,
        KeyCode::Esc => PromptKey::Cancel,
        KeyCode::Right | KeyCode::Down => PromptKey::Next,
        KeyCode::Left | KeyCode::Up => PromptKey::Prev,
        _ => PromptKey::Other,
    }
}
