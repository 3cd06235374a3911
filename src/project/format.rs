//! Output format selection

use serde::Serialize;
use std::str;

/// How diagnostics and annotations are printed.
#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    Text,

    /// A single JSON document.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "text" => Ok(OutputFormat::Text),
            "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(OutputFormat, "valid output format");
