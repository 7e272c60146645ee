//! File I/O helpers.
//!
//! Load splits the file into rows (line endings stripped); save writes every
//! row back with a single `\n`. Errors carry the path so the dispatcher can
//! surface them on the status line.

use std::path::{Path, PathBuf};

use core_state::EditorState;
use core_text::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no file name")]
    NoFilename,
}

/// Read `path` into a fresh, clean `Document` (no rule set applied).
pub fn open_file(path: &Path) -> Result<Document, FileError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let doc = Document::from_bytes(&bytes);
            tracing::info!(target: "io", path = %path.display(), rows = doc.len(), "file_opened");
            Ok(doc)
        }
        Err(source) => {
            tracing::error!(target: "io", path = %path.display(), error = %source, "file_open_error");
            Err(FileError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write the document to its bound file name. Returns the byte count.
///
/// The dirty counter is reset only after the write succeeded.
pub fn write_file(state: &mut EditorState) -> Result<usize, FileError> {
    let Some(path) = state.file_name.clone() else {
        return Err(FileError::NoFilename);
    };
    let bytes = state.document.to_bytes();
    match std::fs::write(&path, &bytes) {
        Ok(()) => {
            state.document.mark_clean();
            tracing::info!(target: "io", path = %path.display(), bytes = bytes.len(), "file_written");
            Ok(bytes.len())
        }
        Err(source) => {
            tracing::error!(target: "io", path = %path.display(), error = %source, "file_write_error");
            Err(FileError::Write { path, source })
        }
    }
}
