//! User settings loaded from YAML.
//!
//! ```yaml
//! limit: 50
//! page_size: 100
//! max_width: 0   # 0 = use the terminal width
//! log:
//!   level: debug
//!   format: pretty
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tfc_paging::{clamp_page_size, DEFAULT_LIMIT, DEFAULT_PAGE_SIZE};
use tfc_render::Sink;

use crate::args::ListArgs;
use crate::error::Result;
use crate::iostreams::IoStreams;
use crate::logging::LogConfig;

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default `--limit`.
    pub limit: usize,
    /// Default `--page-size`.
    pub page_size: usize,
    /// Table width; 0 detects it from the terminal.
    pub max_width: usize,
    pub log: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            limit: DEFAULT_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            max_width: 0,
            log: LogConfig::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a YAML document. An empty document yields the
    /// defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_yaml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Listing flags as they are before the command line is applied.
    pub fn list_args(&self) -> ListArgs {
        ListArgs {
            limit: self.limit,
            columns: Vec::new(),
            page_size: clamp_page_size(self.page_size),
        }
    }

    /// Apply the configured table width to `streams`.
    pub fn configure<O: Sink, E: Sink>(&self, streams: &mut IoStreams<O, E>) {
        if self.max_width > 0 {
            streams.override_terminal_width(self.max_width);
        }
    }
}
