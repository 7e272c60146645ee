//! Kiln entrypoint.
//!
//! Startup order: logging, panic hook, config, terminal (raw mode + alternate
//! screen behind an RAII guard), document load. The event loop is
//! synchronous: render, then block on input for at most the configured poll
//! interval so expired status messages disappear without a key press.

use anyhow::Result;
use clap::Parser;
use core_actions::{FileError, handle_key, open_file};
use core_config::{Config, load_from};
use core_events::InputEvent;
use core_model::{EditorModel, Viewport};
use core_state::EditorState;
use core_syntax::select_for_filename;
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard, text_area};
use core_text::Document;
use std::fmt;
use std::io::{Stdout, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_FILE: &str = "kiln.log";
const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

#[derive(Parser, Debug)]
#[command(name = "kiln", version, about = "Kiln terminal text editor")]
struct Args {
    /// File to open. A missing file starts an empty buffer bound to that name.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `kiln.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    model: EditorModel,
    poll_interval: Duration,
    terminal_guard: TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run(&mut self, args: Args) -> Result<RuntimeContext<'_>> {
        self.configure_logging();
        Self::install_panic_hook();
        info!(target: "runtime", version = VERSION, "startup");

        let config_override = args.config.is_some();
        let config = load_from(args.config.clone())?;

        let mut guard = self.backend.enter_guard()?;
        let (cols, rows) = guard.backend().size()?;
        let (text_rows, text_cols) = text_area(cols, rows);

        let (state, open_failed) = Self::load_editor_state(args.path.as_deref());
        let state = state.with_settings(config.quit_times(), config.message_timeout());
        let title = format!("kiln - {}", state.display_name());
        guard.backend().set_title(&title)?;

        info!(
            target: "runtime.startup",
            path = args.path.as_ref().map(|p| p.display().to_string()),
            rows = state.document.len(),
            syntax = state.document.syntax().map(|s| s.name),
            open_failed,
            config_override,
            config_source = %config_source(&config),
            cols,
            text_rows,
            "bootstrap_complete"
        );

        Ok(RuntimeContext {
            model: EditorModel::new(state, Viewport::new(text_rows, text_cols)),
            poll_interval: config.poll_interval(),
            terminal_guard: guard,
        })
    }

    /// Log to `kiln.log` in the working directory; stdout belongs to the UI.
    fn configure_logging(&mut self) {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Build the session state. Returns the state and whether opening failed.
    fn load_editor_state(path: Option<&Path>) -> (EditorState, bool) {
        let Some(path) = path else {
            let mut state = EditorState::new(Document::new());
            state.set_status(HELP_MESSAGE);
            return (state, false);
        };
        let (document, message, failed) = match open_file(path) {
            Ok(doc) => (doc, HELP_MESSAGE.to_string(), false),
            Err(err @ FileError::Open { .. }) => {
                warn!(target: "io", error = %err, "starting_empty_buffer");
                (Document::new(), format!("Can't open {err}"), true)
            }
            Err(err) => {
                error!(target: "io", error = %err, "unexpected_open_error");
                (Document::new(), err.to_string(), true)
            }
        };
        let mut state = EditorState::new(document);
        state
            .document
            .set_syntax(select_for_filename(&path.to_string_lossy()));
        state.file_name = Some(path.to_path_buf());
        state.set_status(message);
        (state, failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    ActionQuit,
    InputError,
    RenderError,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::ActionQuit => "action_quit",
            ShutdownReason::InputError => "input_error",
            ShutdownReason::RenderError => "render_error",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

enum LoopControl {
    Continue,
    Break { reason: ShutdownReason },
}

struct EditorRuntime<'a> {
    model: EditorModel,
    poll_interval: Duration,
    out: Stdout,
    _terminal_guard: TerminalGuard<'a>,
}

impl<'a> EditorRuntime<'a> {
    fn new(context: RuntimeContext<'a>) -> Self {
        let RuntimeContext {
            model,
            poll_interval,
            terminal_guard,
        } = context;
        Self {
            model,
            poll_interval,
            out: stdout(),
            _terminal_guard: terminal_guard,
        }
    }

    /// Run until quit. Terminal or input failures end the loop with an error.
    fn run(&mut self) -> Result<()> {
        let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter_loop = loop_span.enter();

        loop {
            self.model.state_mut().tick_ephemeral();
            self.model.scroll();
            if let Err(e) = core_render::render(&self.model, VERSION, &mut self.out) {
                error!(target: "runtime", error = %e, "render_failed");
                log_shutdown_stage(ShutdownReason::RenderError, "begin");
                return Err(e);
            }

            let event = match core_input::poll_event(self.poll_interval) {
                Ok(ev) => ev,
                Err(e) => {
                    error!(target: "runtime", error = %e, "input_failed");
                    log_shutdown_stage(ShutdownReason::InputError, "begin");
                    return Err(e);
                }
            };
            let Some(event) = event else {
                continue;
            };
            if let LoopControl::Break { reason } = self.handle_input_event(&event) {
                log_shutdown_stage(reason, "begin");
                break;
            }
        }
        log_shutdown_stage(ShutdownReason::ActionQuit, "complete");
        Ok(())
    }

    fn handle_input_event(&mut self, input: &InputEvent) -> LoopControl {
        match input {
            InputEvent::Key(key) => {
                let result = handle_key(key, &mut self.model);
                if result.quit {
                    LoopControl::Break {
                        reason: ShutdownReason::ActionQuit,
                    }
                } else {
                    LoopControl::Continue
                }
            }
            InputEvent::Resize(w, h) => {
                let (rows, cols) = text_area(*w, *h);
                self.model.view_mut().viewport.resize(rows, cols);
                info!(target: "runtime", cols, rows, "resize");
                LoopControl::Continue
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let context = startup.run(args)?;
    let mut runtime = EditorRuntime::new(context);
    let outcome = runtime.run();
    drop(runtime);
    if let Err(e) = &outcome {
        eprintln!("kiln: {e:#}");
    }
    outcome
}

/// Where the active settings came from, for the startup log line.
fn config_source(config: &Config) -> String {
    config
        .source
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_path_and_config() {
        let args = Args::try_parse_from(["kiln", "main.c", "--config", "alt.toml"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("main.c")));
        assert_eq!(args.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn missing_file_binds_name_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.rs");
        let (state, failed) = AppStartup::load_editor_state(Some(&path));
        assert!(failed);
        assert!(state.document.is_empty());
        assert_eq!(state.file_name.as_deref(), Some(path.as_path()));
        assert_eq!(state.document.syntax().map(|s| s.name), Some("rust"));
        let msg = state.message_line().unwrap_or_default();
        assert!(msg.starts_with("Can't open"), "{msg}");
    }

    #[test]
    fn existing_file_is_loaded_clean() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        std::fs::write(&path, "x = 1\n# note\n").unwrap();
        let (state, failed) = AppStartup::load_editor_state(Some(&path));
        assert!(!failed);
        assert_eq!(state.document.len(), 2);
        assert!(!state.document.is_dirty());
        assert_eq!(state.message_line().as_deref(), Some(HELP_MESSAGE));
    }

    #[test]
    fn config_source_names_loaded_file_or_defaults() {
        assert_eq!(config_source(&Config::default()), "defaults");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kiln.toml");
        std::fs::write(&path, "[editor]\nquit_times = 1\n").unwrap();
        let config = load_from(Some(path.clone())).unwrap();
        assert_eq!(config_source(&config), path.display().to_string());
    }

    #[test]
    fn shutdown_reason_display() {
        assert_eq!(ShutdownReason::ActionQuit.to_string(), "action_quit");
    }
}
