//! Save, find and quit commands.

use super::DispatchResult;
use crate::io_ops::{FileError, write_file};
use core_model::View;
use core_state::{EditorState, PromptKind, PromptState, SavedView, SearchSession};

/// Quit, unless unsaved changes still demand confirmation presses.
pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    let remaining = state.quit_remaining();
    if state.document.is_dirty() && remaining > 0 {
        state.set_status(format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        ));
        state.consume_quit_attempt();
        tracing::debug!(target: "actions.dispatch", remaining, "quit_refused_dirty");
        return DispatchResult::dirty();
    }
    tracing::info!(target: "actions.dispatch", "quit");
    DispatchResult::quit()
}

/// Save to the bound file, or open the save-as prompt for an unnamed buffer.
pub(crate) fn handle_save(state: &mut EditorState) -> DispatchResult {
    if state.file_name.is_none() {
        state.prompt = Some(PromptState::new(PromptKind::SaveAs));
        return DispatchResult::dirty();
    }
    save_now(state);
    DispatchResult::dirty()
}

/// Write the document and report the outcome on the status line.
pub(crate) fn save_now(state: &mut EditorState) {
    match write_file(state) {
        Ok(n) => state.set_status(format!("{n} bytes written to disk")),
        Err(FileError::NoFilename) => state.set_status("Save aborted"),
        Err(e) => state.set_status(format!("Can't save! I/O error: {e}")),
    }
}

/// Open the search prompt, remembering where the cursor was.
pub(crate) fn start_find(state: &mut EditorState, view: &View) -> DispatchResult {
    state.search = Some(SearchSession::new(SavedView {
        cx: view.cx,
        cy: view.cy,
        row_offset: view.viewport.row_offset,
        col_offset: view.viewport.col_offset,
    }));
    state.prompt = Some(PromptState::new(PromptKind::Find));
    DispatchResult::dirty()
}
