//! Prompt line handling.
//!
//! The save-as prompt collects a file name and saves on accept. The find
//! prompt runs one search step after every key; the match overlay it leaves
//! behind is replaced on the next step and dropped when the session ends.

use super::{DispatchResult, command};
use crate::PromptKey;
use crate::search::find_next;
use core_model::{EditorModel, View};
use core_state::{EditorState, PromptKind, SearchDirection};
use core_syntax::select_for_filename;
use std::path::PathBuf;

pub(crate) fn handle_prompt_key(key: PromptKey, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    let Some(prompt) = state.prompt.as_mut() else {
        return DispatchResult::clean();
    };
    let kind = prompt.kind();
    let mut accepted = None;
    match key {
        PromptKey::Char(c) => prompt.push_char(c),
        PromptKey::Backspace => prompt.backspace(),
        PromptKey::Accept if !prompt.buffer().is_empty() => {
            accepted = Some(prompt.buffer().to_string());
        }
        _ => {}
    }
    let query = prompt.buffer().to_string();
    let closing = accepted.is_some() || key == PromptKey::Cancel;
    if closing {
        state.prompt = None;
    }
    match kind {
        PromptKind::SaveAs => {
            if key == PromptKey::Cancel {
                state.set_status("Save aborted");
            } else if let Some(name) = accepted {
                bind_file_name(state, name);
                command::save_now(state);
            }
        }
        PromptKind::Find => search_step(key, closing, &query, state, view),
    }
    DispatchResult::dirty()
}

fn bind_file_name(state: &mut EditorState, name: String) {
    let syntax = select_for_filename(&name);
    tracing::debug!(target: "actions.dispatch", file = %name, syntax = syntax.map(|s| s.name), "bind_file_name");
    state.file_name = Some(PathBuf::from(name));
    state.document.set_syntax(syntax);
}

fn search_step(key: PromptKey, closing: bool, query: &str, state: &mut EditorState, view: &mut View) {
    let Some(session) = state.search.as_mut() else {
        return;
    };
    session.overlay = None;
    if closing {
        if key == PromptKey::Cancel {
            let saved = session.saved;
            view.cx = saved.cx;
            view.cy = saved.cy;
            view.viewport.row_offset = saved.row_offset;
            view.viewport.col_offset = saved.col_offset;
        }
        state.search = None;
        state.ephemeral_status = None;
        tracing::debug!(target: "search", cancelled = key == PromptKey::Cancel, "session_end");
        return;
    }
    match key {
        PromptKey::Next => session.direction = SearchDirection::Forward,
        PromptKey::Prev => session.direction = SearchDirection::Backward,
        _ => {
            session.last_match = None;
            session.direction = SearchDirection::Forward;
        }
    }
    if session.last_match.is_none() {
        session.direction = SearchDirection::Forward;
    }
    // an accept on an empty query only resets the session
    if key == PromptKey::Accept {
        return;
    }
    let doc = &state.document;
    if let Some(hit) = find_next(doc, query.as_bytes(), session.last_match, session.direction) {
        session.last_match = Some(hit.row);
        session.overlay = Some(hit.overlay);
        view.cy = hit.row;
        view.cx = hit.cx;
        // past the end so the next scroll puts the match row on top
        view.viewport.row_offset = doc.len();
    }
}
