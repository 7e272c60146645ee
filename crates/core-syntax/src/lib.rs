//! Syntax classification for single-byte text rows.
//!
//! This crate owns three things:
//! * `Highlight`, the closed set of per-byte classes the renderer maps to colours.
//! * The static rule-set table (`SYNTAXES`) and filename based selection.
//! * `highlight_line`, a pure function from (rendered row, carried-in block
//!   comment state, rule set) to (classes, carried-out block comment state).
//!
//! Cascading recomputation across rows is *not* done here; `core-text::Document`
//! drives it with a work queue because only the document knows row order.
//!
//! Invariants:
//! * The class vector produced for a row always has exactly `render.len()`
//!   entries, including the empty row.
//! * Without a rule set every byte is `Highlight::Normal` and no block comment
//!   state is carried out.

mod highlight;
mod rules;

pub use highlight::{LineHighlight, highlight_into, highlight_line, is_separator};
pub use rules::{KEYWORD2_MARKER, SYNTAXES, Syntax, SyntaxFlags, select_for_filename};

/// Highlight class assigned to one rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Active search match. Never produced by the highlighter itself; the
    /// renderer overlays it on top of the stored classes.
    Match,
}
