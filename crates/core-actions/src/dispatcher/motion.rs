//! Cursor motion semantics.
//!
//! Horizontal motion wraps across row boundaries; vertical motion may land on
//! the implicit line past EOF. `cx` is clamped to the destination row after
//! every motion.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;
use core_text::Document;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let doc = &state.document;
    let before = (view.cy, view.cx);
    match kind {
        MotionKind::PageUp => {
            view.cy = view.viewport.row_offset;
            for _ in 0..view.viewport.rows {
                step(MotionKind::Up, doc, view);
            }
        }
        MotionKind::PageDown => {
            let bottom = view.viewport.bottom().saturating_sub(1);
            view.cy = bottom.min(doc.len());
            for _ in 0..view.viewport.rows {
                step(MotionKind::Down, doc, view);
            }
        }
        MotionKind::LineStart => view.cx = 0,
        MotionKind::LineEnd => {
            if view.cy < doc.len() {
                view.cx = doc.row_len(view.cy);
            }
        }
        other => step(other, doc, view),
    }
    view.cx = view.cx.min(doc.row_len(view.cy));
    tracing::trace!(target: "actions.dispatch", ?kind, from = ?before, to = ?(view.cy, view.cx), "motion");
    if before == (view.cy, view.cx) {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}

fn step(kind: MotionKind, doc: &Document, view: &mut View) {
    match kind {
        MotionKind::Left => {
            if view.cx > 0 {
                view.cx -= 1;
            } else if view.cy > 0 {
                view.cy -= 1;
                view.cx = doc.row_len(view.cy);
            }
        }
        MotionKind::Right => {
            if view.cy < doc.len() {
                if view.cx < doc.row_len(view.cy) {
                    view.cx += 1;
                } else {
                    view.cy += 1;
                    view.cx = 0;
                }
            }
        }
        MotionKind::Up => view.cy = view.cy.saturating_sub(1),
        MotionKind::Down => {
            if view.cy < doc.len() {
                view.cy += 1;
            }
        }
        _ => {}
    }
}
