//! Terminal input decoding.
//!
//! Wraps crossterm's blocking `poll`/`read` pair and hands back logical
//! `InputEvent`s. A poll that times out yields `Ok(None)` so the caller can
//! run periodic work (message expiry) and redraw.

use std::time::Duration;

use anyhow::Result;
use core_events::InputEvent;
use crossterm::event::{self, Event as CEvent};

mod key_token;

/// Wait up to `timeout` for the next relevant event.
pub fn poll_event(timeout: Duration) -> Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Translate a raw crossterm event. Mouse, focus and paste events are
/// dropped.
pub fn translate(event: CEvent) -> Option<InputEvent> {
    match event {
        CEvent::Key(key) => {
            let mapped = key_token::map_key_event(&key);
            if mapped.is_none() {
                tracing::trace!(target: "input", ?key, "key_ignored");
            }
            mapped.map(InputEvent::Key)
        }
        CEvent::Resize(w, h) => {
            tracing::debug!(target: "input", width = w, height = h, "resize");
            Some(InputEvent::Resize(w, h))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use crossterm::event::{KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers};

    #[test]
    fn resize_passes_through() {
        assert_eq!(translate(CEvent::Resize(80, 24)), Some(InputEvent::Resize(80, 24)));
    }

    #[test]
    fn key_press_is_translated() {
        let ev = CEvent::Key(CKeyEvent::new(CKeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            translate(ev),
            Some(InputEvent::Key(KeyEvent::plain(KeyCode::Enter)))
        );
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(translate(CEvent::FocusGained), None);
    }
}
