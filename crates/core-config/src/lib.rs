//! Configuration loading and parsing.
//!
//! Parses `textengine.toml` (or an override path supplied by the embedding
//! application):
//!
//! ```toml
//! [text]
//! line_ending = "crlf"      # "lf" (default) | "crlf" | "cr"
//!
//! [motion]
//! extra_word_chars = "-"    # clusters starting with these count as word chars
//! ```
//!
//! Unknown fields are ignored so newer files keep loading on older builds. A
//! missing file yields defaults; an unparsable file also yields defaults and
//! logs a warning under the `config` target.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "textengine.toml";

/// Serialization separator as written in the config file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingSetting {
    #[default]
    Lf,
    Crlf,
    Cr,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextConfig {
    #[serde(default)]
    pub line_ending: LineEndingSetting,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MotionConfig {
    #[serde(default)]
    pub extra_word_chars: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    // Prefer a local `textengine.toml` in the working directory.
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("textengine").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    Config::parse(content)
}

impl Config {
    /// Parse config text, falling back to defaults (with a warning) when it is malformed.
    pub fn parse(content: String) -> Result<Config> {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(
                    target: "config",
                    line_ending = ?file.text.line_ending,
                    extra_word_chars = file.motion.extra_word_chars.chars().count(),
                    "config_loaded"
                );
                Ok(Config {
                    raw: Some(content),
                    file,
                })
            }
            Err(e) => {
                warn!(target: "config", error = %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn line_ending(&self) -> LineEndingSetting {
        self.file.text.line_ending
    }

    pub fn extra_word_chars(&self) -> &str {
        &self.file.motion.extra_word_chars
    }
}
