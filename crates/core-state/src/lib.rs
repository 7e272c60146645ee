//! Editor session state.
//!
//! One `EditorState` exists per session and is passed explicitly to every
//! operation; nothing here is process-global. It owns the `Document` plus the
//! session metadata around it: bound file name, ephemeral status message,
//! the active prompt line, the search session and the quit confirmation
//! counter. Cursor and scroll state live in `core-model::View`.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use core_text::Document;

/// Extra quit presses demanded while the document has unsaved changes.
pub const DEFAULT_QUIT_TIMES: u32 = 3;
/// Lifetime of an ephemeral status message.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Ephemeral status message container.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Find,
}

/// Single-line input collected on the message bar.
#[derive(Debug, Clone)]
pub struct PromptState {
    kind: PromptKind,
    buf: String,
}

impl PromptState {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            buf: String::new(),
        }
    }
    pub fn kind(&self) -> PromptKind {
        self.kind
    }
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    pub fn backspace(&mut self) {
        self.buf.pop();
    }
    /// Text shown on the message bar while the prompt is open.
    pub fn display(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.buf),
            PromptKind::Find => format!("Search: {} (Use ESC/Arrows/Enter)", self.buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

impl SearchDirection {
    /// Row index one step from `row` in this direction, wrapping over `len`.
    pub fn step(self, row: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            SearchDirection::Forward => (row + 1) % len,
            SearchDirection::Backward => (row + len - 1) % len,
        }
    }
}

/// View-only highlight of the active match, in render coordinates.
///
/// Applied at render time on top of the row's stored classes; the stored
/// highlight array is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOverlay {
    pub row: usize,
    pub start: usize,
    pub len: usize,
}

impl MatchOverlay {
    pub fn covers(&self, row: usize, rx: usize) -> bool {
        row == self.row && rx >= self.start && rx < self.start + self.len
    }
}

/// Cursor and scroll position captured when a search starts, restored on
/// cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedView {
    pub cx: usize,
    pub cy: usize,
    pub row_offset: usize,
    pub col_offset: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    pub last_match: Option<usize>,
    pub direction: SearchDirection,
    pub overlay: Option<MatchOverlay>,
    pub saved: SavedView,
}

impl SearchSession {
    pub fn new(saved: SavedView) -> Self {
        Self {
            saved,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub ephemeral_status: Option<EphemeralMessage>,
    pub prompt: Option<PromptState>,
    pub search: Option<SearchSession>,
    quit_times: u32,
    quit_remaining: u32,
    message_ttl: Duration,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_name: None,
            ephemeral_status: None,
            prompt: None,
            search: None,
            quit_times: DEFAULT_QUIT_TIMES,
            quit_remaining: DEFAULT_QUIT_TIMES,
            message_ttl: DEFAULT_MESSAGE_TTL,
        }
    }

    /// Override the configurable knobs (quit confirmation count and message
    /// lifetime).
    pub fn with_settings(mut self, quit_times: u32, message_ttl: Duration) -> Self {
        self.quit_times = quit_times;
        self.quit_remaining = quit_times;
        self.message_ttl = message_ttl;
        self
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_name
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Set an ephemeral status message using the configured lifetime.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        let ttl = self.message_ttl;
        self.set_ephemeral(msg, ttl);
    }

    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: msg.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    /// Drop the ephemeral message once expired. Returns true if it was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        if let Some(m) = &self.ephemeral_status
            && Instant::now() >= m.expires_at
        {
            self.ephemeral_status = None;
            return true;
        }
        false
    }

    /// Message bar text: the open prompt wins over any status message.
    pub fn message_line(&self) -> Option<String> {
        if let Some(p) = &self.prompt {
            return Some(p.display());
        }
        self.ephemeral_status.as_ref().map(|m| m.text.clone())
    }

    pub fn quit_remaining(&self) -> u32 {
        self.quit_remaining
    }

    /// Consume one refused quit attempt, returning the presses still needed.
    pub fn consume_quit_attempt(&mut self) -> u32 {
        self.quit_remaining = self.quit_remaining.saturating_sub(1);
        self.quit_remaining
    }

    pub fn reset_quit_counter(&mut self) {
        self.quit_remaining = self.quit_times;
    }

    /// Active match overlay, if a search session currently shows one.
    pub fn match_overlay(&self) -> Option<MatchOverlay> {
        self.search.as_ref().and_then(|s| s.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_expires() {
        let mut st = EditorState::new(Document::new());
        st.set_ephemeral("hello", Duration::from_secs(60));
        assert!(!st.tick_ephemeral());
        if let Some(m) = &mut st.ephemeral_status {
            m.expires_at = Instant::now() - Duration::from_millis(1);
        }
        assert!(st.tick_ephemeral());
        assert!(st.ephemeral_status.is_none());
    }

    #[test]
    fn prompt_overrides_message_line() {
        let mut st = EditorState::new(Document::new());
        st.set_status("saved");
        assert_eq!(st.message_line().as_deref(), Some("saved"));
        let mut p = PromptState::new(PromptKind::SaveAs);
        p.push_char('a');
        p.push_char('b');
        p.backspace();
        st.prompt = Some(p);
        assert_eq!(
            st.message_line().as_deref(),
            Some("Save as: a (ESC to cancel)")
        );
    }

    #[test]
    fn quit_counter_counts_down_and_resets() {
        let mut st = EditorState::new(Document::new()).with_settings(2, DEFAULT_MESSAGE_TTL);
        assert_eq!(st.consume_quit_attempt(), 1);
        assert_eq!(st.consume_quit_attempt(), 0);
        assert_eq!(st.consume_quit_attempt(), 0);
        st.reset_quit_counter();
        assert_eq!(st.quit_remaining(), 2);
    }

    #[test]
    fn direction_step_wraps() {
        assert_eq!(SearchDirection::Forward.step(2, 3), 0);
        assert_eq!(SearchDirection::Backward.step(0, 3), 2);
        assert_eq!(SearchDirection::Forward.step(0, 1), 0);
    }

    #[test]
    fn overlay_covers_span_only() {
        let o = MatchOverlay {
            row: 1,
            start: 2,
            len: 3,
        };
        assert!(!o.covers(1, 1));
        assert!(o.covers(1, 2));
        assert!(o.covers(1, 4));
        assert!(!o.covers(1, 5));
        assert!(!o.covers(0, 3));
    }
}
