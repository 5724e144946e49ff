//! Configuration options for block extraction

use serde::{Deserialize, Serialize};

/// Class prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "ejs";

/// Editor.js version stamped on documents when none is configured
pub const DEFAULT_VERSION: &str = "2.19.0";

/// Options for block extraction and document assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Class prefix marking blocks (`<prefix>-<type>`) and tunes (`<prefix>_<style>`)
    pub prefix: String,

    /// Version string written to the output document
    pub version: String,

    /// Fixed timestamp in epoch milliseconds; `None` means "now"
    pub time: Option<i64>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            version: DEFAULT_VERSION.to_string(),
            time: None,
        }
    }
}

impl ParserOptions {
    /// The configured prefix, falling back to [`DEFAULT_PREFIX`] when empty
    pub fn effective_prefix(&self) -> &str {
        if self.prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }
}
