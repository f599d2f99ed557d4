//! Export configuration file support
//!
//! Handles parsing of `.archimate-export.toml` configuration files and
//! environment variable overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ExportError;
use super::xml::is_local_name;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".archimate-export.toml";

/// Default directory holding the auxiliary XSD files
pub const DEFAULT_SCHEMAS_DIR: &str = "schemas";

/// Environment variable for the language code
pub const ENV_LANGUAGE: &str = "ARCHIMATE_EXPORT_LANGUAGE";

/// Environment variable enabling the organization section
pub const ENV_SAVE_ORGANIZATION: &str = "ARCHIMATE_EXPORT_SAVE_ORGANIZATION";

/// Environment variable enabling the copy of XSD files
pub const ENV_INCLUDE_XSD: &str = "ARCHIMATE_EXPORT_INCLUDE_XSD";

/// Environment variable for the XSD source directory
pub const ENV_SCHEMAS_DIR: &str = "ARCHIMATE_EXPORT_SCHEMAS_DIR";

/// Options of one export
///
/// Represents the `.archimate-export.toml` configuration file format.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::export::ExportOptions;
///
/// let options = ExportOptions::new()
///     .with_organization(true)
///     .with_language_code("en")
///     .with_metadata("title", "Enterprise Architecture");
/// assert!(options.has_metadata());
/// assert_eq!(options.language_code(), Some("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Write the folder structure as an `organization` section
    pub save_organization: bool,

    /// Copy the exchange-format XSD files next to the output file
    pub include_auxiliary_files: bool,

    /// Language code written as `xml:lang` on every text node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Directory the XSD files are copied from
    pub schemas_dir: PathBuf,

    /// Dublin Core metadata, element name mapped to value, in output order
    pub metadata: IndexMap<String, String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            save_organization: false,
            include_auxiliary_files: false,
            language_code: None,
            schemas_dir: PathBuf::from(DEFAULT_SCHEMAS_DIR),
            metadata: IndexMap::new(),
        }
    }
}

impl ExportOptions {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, save_organization: bool) -> Self {
        self.save_organization = save_organization;
        self
    }

    pub fn with_auxiliary_files(mut self, include: bool, schemas_dir: impl Into<PathBuf>) -> Self {
        self.include_auxiliary_files = include;
        self.schemas_dir = schemas_dir.into();
        self
    }

    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// Add a Dublin Core metadata entry (e.g. `title`, `creator`, `subject`)
    pub fn with_metadata(mut self, element: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(element.into(), value.into());
        self
    }

    /// The configured language code, if it is set and not empty
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref().filter(|code| !code.is_empty())
    }

    /// True if at least one metadata entry would be written
    ///
    /// An entry needs a value with some text and a key usable as an element name.
    pub fn has_metadata(&self) -> bool {
        self.metadata
            .iter()
            .any(|(key, value)| !value.is_empty() && is_local_name(key))
    }

    /// Load configuration from a workspace directory
    ///
    /// Looks for `.archimate-export.toml` in the workspace directory.
    /// Falls back to defaults if not found.
    pub fn load(workspace_path: &Path) -> Result<Self, ExportError> {
        let config_path = workspace_path.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ExportError::IoError(format!("Failed to read config: {}", e)))?;

            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ExportError> {
        toml::from_str(content)
            .map_err(|e| ExportError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a workspace directory
    pub fn save(&self, workspace_path: &Path) -> Result<(), ExportError> {
        let config_path = workspace_path.join(CONFIG_FILENAME);
        let content = self.to_toml()?;

        std::fs::write(&config_path, content)
            .map_err(|e| ExportError::IoError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExportError> {
        toml::to_string_pretty(self).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize config: {}", e))
        })
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(language) = std::env::var(ENV_LANGUAGE) {
            self.language_code = Some(language);
        }

        if let Ok(value) = std::env::var(ENV_SAVE_ORGANIZATION)
            && let Some(flag) = parse_flag(&value)
        {
            self.save_organization = flag;
        }

        if let Ok(value) = std::env::var(ENV_INCLUDE_XSD)
            && let Some(flag) = parse_flag(&value)
        {
            self.include_auxiliary_files = flag;
        }

        if let Ok(dir) = std::env::var(ENV_SCHEMAS_DIR) {
            self.schemas_dir = PathBuf::from(dir);
        }
    }

    /// Check if configuration exists in a workspace
    pub fn exists(workspace_path: &Path) -> bool {
        workspace_path.join(CONFIG_FILENAME).exists()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# ArchiMate Exchange Export Configuration

# Write the folder structure as an <organization> section
save_organization = true

# Copy archimate3_Diagram.xsd (and dc.xsd when metadata is set) next to the output
include_auxiliary_files = false

# Directory the XSD files are copied from
schemas_dir = "schemas"

# Language code added as xml:lang to every name, documentation and value
# language_code = "en"

# Dublin Core metadata, written in the order given here
[metadata]
title = "Enterprise Architecture"
creator = ""
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ExportOptions::new();
        assert!(!config.save_organization);
        assert!(!config.include_auxiliary_files);
        assert_eq!(config.language_code(), None);
        assert!(!config.has_metadata());
        assert_eq!(config.schemas_dir, PathBuf::from(DEFAULT_SCHEMAS_DIR));
    }

    #[test]
    fn test_parse_config_keeps_metadata_order() {
        let toml = r#"
save_organization = true
language_code = "fr"

[metadata]
title = "Architecture"
creator = "Jane"
date = "2024"
"#;
        let config = ExportOptions::parse(toml).unwrap();
        assert!(config.save_organization);
        assert_eq!(config.language_code(), Some("fr"));
        let keys: Vec<&str> = config.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "creator", "date"]);
    }

    #[test]
    fn test_parse_sample_config() {
        let config = ExportOptions::parse(sample_config()).unwrap();
        assert!(config.save_organization);
        assert!(config.has_metadata());
        assert_eq!(config.metadata.get("creator").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = ExportOptions::parse("save_organization = \"maybe\"");
        assert!(matches!(result, Err(ExportError::ConfigError(_))));
    }

    #[test]
    fn test_empty_language_code_counts_as_unset() {
        let config = ExportOptions::new().with_language_code("");
        assert_eq!(config.language_code(), None);
    }

    #[test]
    fn test_metadata_with_only_empty_values() {
        let config = ExportOptions::new().with_metadata("creator", "");
        assert!(!config.has_metadata());
    }

    #[test]
    fn test_save_and_parse_roundtrip() {
        let dir = tempdir().unwrap();
        let config = ExportOptions::new()
            .with_organization(true)
            .with_metadata("title", "Architecture");
        config.save(dir.path()).unwrap();

        assert!(ExportOptions::exists(dir.path()));
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        let reloaded = ExportOptions::parse(&content).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert!(!ExportOptions::exists(dir.path()));
        let config = ExportOptions::load(dir.path()).unwrap();
        assert!(config.metadata.is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("sometimes"), None);
    }
}
