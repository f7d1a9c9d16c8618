//! Mount-time configuration.
//!
//! Every field has a default, so an empty object (or no config at all)
//! gives the stock page layout.

use serde::Deserialize;

use crate::document::DEFAULT_FILENAME;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlumeConfig {
    /// CSS selector of the element the editor widget is mounted into.
    pub editor_selector: String,
    /// CSS selector of the element the toolbar is rendered into.
    pub toolbar_selector: String,
    /// Filename of the initial, empty document.
    pub default_filename: String,
    /// Console log level override (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: Option<String>,
}

impl Default for PlumeConfig {
    fn default() -> Self {
        Self {
            editor_selector: ".editor".to_string(),
            toolbar_selector: ".toolbar".to_string(),
            default_filename: DEFAULT_FILENAME.to_string(),
            log_level: None,
        }
    }
}

impl PlumeConfig {
    /// Parse a JSON config blob.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(PlumeConfig::from_json("{}").unwrap(), PlumeConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            PlumeConfig::from_json(r##"{"editorSelector": "#pad", "logLevel": "warn"}"##).unwrap();
        assert_eq!(config.editor_selector, "#pad");
        assert_eq!(config.toolbar_selector, ".toolbar");
        assert_eq!(config.default_filename, "Untitled.txt");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PlumeConfig::from_json("{not json").is_err());
        assert!(PlumeConfig::from_json(r#"{"editorSelector": 3}"#).is_err());
    }
}
