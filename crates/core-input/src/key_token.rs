use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a crossterm key event into a logical key event.
///
/// Returns `None` for releases and for key codes the editor has no use for
/// (function keys, media keys, bare modifiers).
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    if matches!(event.kind, CKeyEventKind::Release) {
        return None;
    }
    let code = map_key_code(&event.code)?;
    Some(KeyEvent::new(code, map_modifiers(event.modifiers)))
}

pub(crate) fn map_key_code(code: &CKeyCode) -> Option<KeyCode> {
    let mapped = match code {
        CKeyCode::Char(c) => KeyCode::Char(*c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        CKeyCode::Delete => KeyCode::Delete,
        _ => return None,
    };
    Some(mapped)
}

pub(crate) fn map_modifiers(mods: CKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn ct(code: CKeyCode, mods: CKeyModifiers, kind: CKeyEventKind) -> CKeyEvent {
        CKeyEvent {
            code,
            modifiers: mods,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_char_keeps_modifier() {
        let ev = ct(CKeyCode::Char('s'), CKeyModifiers::CONTROL, CKeyEventKind::Press);
        assert_eq!(map_key_event(&ev), Some(KeyEvent::ctrl('s')));
    }

    #[test]
    fn release_is_dropped() {
        let ev = ct(CKeyCode::Char('a'), CKeyModifiers::NONE, CKeyEventKind::Release);
        assert_eq!(map_key_event(&ev), None);
    }

    #[test]
    fn repeat_counts_as_press() {
        let ev = ct(CKeyCode::Down, CKeyModifiers::NONE, CKeyEventKind::Repeat);
        assert_eq!(map_key_event(&ev), Some(KeyEvent::plain(KeyCode::Down)));
    }

    #[test]
    fn unsupported_codes_are_none() {
        assert_eq!(map_key_code(&CKeyCode::F(5)), None);
        assert_eq!(map_key_code(&CKeyCode::Insert), None);
        assert_eq!(map_key_code(&CKeyCode::Delete), Some(KeyCode::Delete));
    }

    #[test]
    fn modifier_bits_combine() {
        let m = map_modifiers(CKeyModifiers::CONTROL | CKeyModifiers::SHIFT);
        assert!(m.contains(KeyModifiers::CTRL));
        assert!(m.contains(KeyModifiers::SHIFT));
        assert!(!m.contains(KeyModifiers::ALT));
    }
}
