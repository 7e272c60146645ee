//! Editor actions: key translation, dispatch, search and file I/O.
//!
//! Input flows `KeyEvent -> Action` (or `PromptKey` while a prompt is open)
//! and is applied to an `EditorModel` by the dispatcher. Every call to
//! `handle_key` leaves the model with its view invariants re-established.

mod dispatcher;
mod io_ops;
mod key_translator;
pub mod search;

pub use dispatcher::{DispatchResult, dispatch, handle_key};
pub use io_ops::{FileError, open_file, write_file};
pub use key_translator::{translate_key, translate_prompt_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit(EditKind),
    Motion(MotionKind),
    Save,
    Find,
    Quit,
    /// Recognized key with no effect (Esc, Ctrl-L).
    Noop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(u8),
    InsertNewline,
    Backspace,
    DeleteForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// Keys as seen by an open prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Char(char),
    Backspace,
    Accept,
    Cancel,
    Next,
    Prev,
    /// Any other key; still drives an incremental search step.
    Other,
}
