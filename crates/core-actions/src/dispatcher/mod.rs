//! Dispatcher applying keys and `Action`s to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation (insert/newline/backspace/delete)
//! * `command` - save, find and quit
//! * `prompt`  - prompt line editing, save-as completion, incremental search

use crate::{Action, key_translator};
use core_events::KeyEvent;
use core_model::EditorModel;

mod command;
mod edit;
mod motion;
mod prompt;

/// Result of dispatching a single key or `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Route one key event: to the open prompt if there is one, otherwise through
/// the key translator. The view is re-scrolled before returning.
pub fn handle_key(key: &KeyEvent, model: &mut EditorModel) -> DispatchResult {
    let result = if model.state().prompt.is_some() {
        let pk = key_translator::translate_prompt_key(key);
        prompt::handle_prompt_key(pk, model)
    } else {
        match key_translator::translate_key(key) {
            Some(action) => dispatch(action, model),
            None => {
                tracing::trace!(target: "actions.dispatch", %key, "unbound_key");
                model.state_mut().reset_quit_counter();
                DispatchResult::clean()
            }
        }
    };
    model.scroll();
    result
}

/// Apply an action to editor state.
///
/// Any action other than `Quit` re-arms the quit confirmation counter.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    if action == Action::Quit {
        return command::handle_quit(model.state_mut());
    }
    let (state, view) = model.split_state_and_view();
    let result = match action {
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Save => command::handle_save(state),
        Action::Find => command::start_find(state, view),
        Action::Noop | Action::Quit => DispatchResult::clean(),
    };
    state.reset_quit_counter();
    result
}
