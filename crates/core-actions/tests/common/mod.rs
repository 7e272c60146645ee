#![allow(dead_code)] // Shared across test binaries; each uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, Viewport};
use core_state::EditorState;
use core_text::Document;

pub fn model(text: &[u8]) -> EditorModel {
    model_sized(text, 20, 80)
}

pub fn model_sized(text: &[u8], rows: usize, cols: usize) -> EditorModel {
    EditorModel::new(
        EditorState::new(Document::from_bytes(text)),
        Viewport::new(rows, cols),
    )
}

pub fn press(model: &mut EditorModel, code: KeyCode) -> DispatchResult {
    handle_key(&KeyEvent::plain(code), model)
}

pub fn ctrl(model: &mut EditorModel, c: char) -> DispatchResult {
    handle_key(&KeyEvent::ctrl(c), model)
}

pub fn type_str(model: &mut EditorModel, s: &str) {
    for c in s.chars() {
        press(model, KeyCode::Char(c));
    }
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
        .collect()
}

pub fn cursor(model: &EditorModel) -> (usize, usize) {
    (model.view().cy, model.view().cx)
}
