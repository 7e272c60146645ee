//! Configuration loading and parsing.
//!
//! Reads `kiln.toml` (or an override path provided by the binary). Every
//! field has a default, so a missing file, a missing table or an unparsable
//! file all yield a usable `Config`. Unknown fields are ignored.
//!
//! ```toml
//! [editor]
//! quit_times = 3
//!
//! [status]
//! message_timeout_ms = 5000
//!
//! [input]
//! poll_interval_ms = 100
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "kiln.toml";

/// Accepted range for the input poll interval.
const POLL_INTERVAL_MIN_MS: u64 = 10;
const POLL_INTERVAL_MAX_MS: u64 = 1000;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_times: Self::default_quit_times(),
        }
    }
}

impl EditorConfig {
    const fn default_quit_times() -> u32 {
        3
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: Self::default_message_timeout_ms(),
        }
    }
}

impl StatusConfig {
    const fn default_message_timeout_ms() -> u64 {
        5000
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: Self::default_poll_interval_ms(),
        }
    }
}

impl InputConfig {
    const fn default_poll_interval_ms() -> u64 {
        100
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source path when a file was read successfully.
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Config path following platform conventions: working directory first,
/// then the user config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kiln").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_not_found_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_error");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn quit_times(&self) -> u32 {
        self.file.editor.quit_times
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.file.status.message_timeout_ms)
    }

    /// Input poll timeout, clamped to a sane range.
    pub fn poll_interval(&self) -> Duration {
        let raw = self.file.input.poll_interval_ms;
        let clamped = raw.clamp(POLL_INTERVAL_MIN_MS, POLL_INTERVAL_MAX_MS);
        if clamped != raw {
            info!(target: "config", raw, clamped, "poll_interval_clamped");
        }
        Duration::from_millis(clamped)
    }
}
