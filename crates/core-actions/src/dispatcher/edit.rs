//! Text edit action handling (insert/newline/backspace/delete).
//!
//! The cursor may sit on the implicit empty line past EOF (`cy == len`);
//! inserting there materializes the row first.

use super::{DispatchResult, motion};
use crate::{EditKind, MotionKind};
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let (cy, cx) = (view.cy, view.cx);
    match kind {
        EditKind::InsertChar(c) => insert_char(state, view, c),
        EditKind::InsertNewline => insert_newline(state, view),
        EditKind::Backspace => {
            if !backspace(state, view) {
                return DispatchResult::clean();
            }
        }
        EditKind::DeleteForward => {
            motion::handle_motion(MotionKind::Right, state, view);
            if !backspace(state, view) {
                return DispatchResult::dirty();
            }
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = ?kind,
        line = cy,
        col = cx,
        to_line = view.cy,
        to_col = view.cx,
        "edit"
    );
    DispatchResult::dirty()
}

fn insert_char(state: &mut EditorState, view: &mut View, c: u8) {
    let doc = &mut state.document;
    if view.cy == doc.len() {
        doc.insert_row(doc.len(), b"");
    }
    doc.insert_char(view.cy, view.cx, c);
    view.cx += 1;
}

fn insert_newline(state: &mut EditorState, view: &mut View) {
    let doc = &mut state.document;
    if view.cx == 0 {
        doc.insert_row(view.cy, b"");
    } else {
        doc.split_row(view.cy, view.cx);
    }
    view.cy += 1;
    view.cx = 0;
}

/// Returns false when there was nothing to delete.
fn backspace(state: &mut EditorState, view: &mut View) -> bool {
    let doc = &mut state.document;
    if view.cy >= doc.len() || (view.cx == 0 && view.cy == 0) {
        return false;
    }
    if view.cx > 0 {
        doc.delete_char(view.cy, view.cx - 1);
        view.cx -= 1;
        return true;
    }
    match doc.join_with_previous(view.cy) {
        Some(joint) => {
            view.cy -= 1;
            view.cx = joint;
            true
        }
        None => false,
    }
}
