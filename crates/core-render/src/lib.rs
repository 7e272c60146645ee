//! Frame composition and terminal encoding.
//!
//! Rendering is two steps:
//! 1. `build_frame` snapshots the visible part of the model into a `Frame`:
//!    the viewport's slice of each row's render bytes and highlight classes
//!    (with the search match overlay applied view-only), filler rows, the
//!    status and message bars and the cursor cell.
//! 2. `writer::Writer` encodes the frame into one escape-sequence buffer that
//!    is written to the terminal in a single call.
//!
//! The renderer never mutates the model; `EditorModel::scroll` must already
//! have run so the cursor sits inside the viewport.

use core_model::EditorModel;
use core_syntax::Highlight;

pub mod status;
pub mod style;
pub mod writer;

pub use writer::{Writer, render};

/// One screen row of the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRow {
    /// Visible slice of a document row with one class per byte.
    Text {
        bytes: Vec<u8>,
        classes: Vec<Highlight>,
    },
    /// Past the end of the document (`~`).
    Filler,
    /// Welcome line shown on an empty document, already padded.
    Banner(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<FrameRow>,
    pub status: String,
    pub message: String,
    /// Cursor cell as (column, row).
    pub cursor: (u16, u16),
}

fn banner_line(version: &str, cols: usize) -> String {
    let text = format!("Kiln editor -- version {version}");
    let text: String = text.chars().take(cols).collect();
    let mut padding = (cols - text.chars().count()) / 2;
    let mut out = String::with_capacity(cols);
    if padding > 0 {
        out.push('~');
        padding -= 1;
    }
    out.extend(std::iter::repeat_n(' ', padding));
    out.push_str(&text);
    out
}

/// Snapshot the model into a frame.
pub fn build_frame(model: &EditorModel, version: &str) -> Frame {
    let state = model.state();
    let view = model.view();
    let vp = view.viewport;
    let doc = &state.document;
    let overlay = state.match_overlay();

    let mut rows = Vec::with_capacity(vp.rows);
    for y in 0..vp.rows {
        let file_row = y + vp.row_offset;
        let Some(row) = doc.row(file_row) else {
            if doc.is_empty() && y == vp.rows / 3 {
                rows.push(FrameRow::Banner(banner_line(version, vp.cols)));
            } else {
                rows.push(FrameRow::Filler);
            }
            continue;
        };
        let render = row.render();
        let start = vp.col_offset.min(render.len());
        let end = (vp.col_offset + vp.cols).min(render.len());
        let mut classes = row.highlight()[start..end].to_vec();
        if let Some(o) = overlay {
            for (i, class) in classes.iter_mut().enumerate() {
                if o.covers(file_row, start + i) {
                    *class = Highlight::Match;
                }
            }
        }
        rows.push(FrameRow::Text {
            bytes: render[start..end].to_vec(),
            classes,
        });
    }

    let file_name = state.file_name.as_ref().map(|p| p.to_string_lossy());
    let ctx = status::StatusContext {
        file_name: file_name.as_deref(),
        rows: doc.len(),
        dirty: doc.is_dirty(),
        file_type: doc.syntax().map(|s| s.name),
        line: view.cy,
    };
    let status_line = status::format_status(&status::compose_status(&ctx), vp.cols);
    let message = status::format_message(state.message_line().as_deref(), view.rx, vp.cols);

    let (cx, cy) = view.screen_cursor();
    Frame {
        rows,
        status: status_line,
        message,
        cursor: (
            u16::try_from(cx).unwrap_or(u16::MAX),
            u16::try_from(cy).unwrap_or(u16::MAX),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_centred_with_tilde() {
        let line = banner_line("1.0", 40);
        assert!(line.starts_with('~'));
        assert!(line.ends_with("Kiln editor -- version 1.0"));
        let text_len = "Kiln editor -- version 1.0".len();
        assert_eq!(line.len(), (40 - text_len) / 2 + text_len);
    }

    #[test]
    fn banner_truncates_on_narrow_screen() {
        assert_eq!(banner_line("1.0", 4), "Kiln");
    }
}
