use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Engine settings.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "key_column": "codigo", "default_top_n": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Column holding the unique row identity used by deletions.
    pub key_column: String,
    /// Text column analysed by the word-frequency ranking.
    pub text_column: String,
    /// How many words the ranking returns when the caller does not say.
    pub default_top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            key_column: "id".to_string(),
            text_column: "descripcion".to_string(),
            default_top_n: 10,
        }
    }
}

impl EngineConfig {
    /// Defaults with a different key column.
    pub fn with_key_column(key_column: impl Into<String>) -> Self {
        EngineConfig {
            key_column: key_column.into(),
            ..Self::default()
        }
    }

    pub fn text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing engine config")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading engine config {}", path.display()))?;
        Self::from_json_str(&text)
    }
}
