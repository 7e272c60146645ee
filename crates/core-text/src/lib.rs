//! Line buffer with a derived render projection.
//!
//! A `Document` is an ordered sequence of `Row`s. Each row owns its raw bytes
//! (authoritative, no trailing newline), a tab-expanded `render` copy, and one
//! `Highlight` per rendered byte. Content is treated as single-byte characters;
//! no grapheme or width handling happens here.
//!
//! Invariants (hold after every public call):
//! * `rows[i].index() == i` for every row.
//! * `row.render()` is `expand_tabs(row.raw())`.
//! * `row.highlight().len() == row.render().len()`.
//! * Every row's highlight was computed with the block comment state carried
//!   out of the row above it.
//!
//! Row references handed out by `Document::row` are plain borrows, so any
//! structural mutation (insert/delete/split/join) requires re-fetching them.

mod coords;
mod document;
mod row;

pub use coords::{TAB_STOP, cx_to_rx, expand_tabs, rx_to_cx};
pub use document::Document;
pub use row::Row;

pub use core_syntax::{Highlight, Syntax};
