//! Model loading functionality
//!
//! Loads model snapshots saved as YAML or JSON. The snapshot format is the serde
//! representation of [`ArchimateModel`]; this is not an exchange-format importer.

use crate::models::ArchimateModel;
use crate::validation::references::ReferenceValidator;
use std::path::Path;
use tracing::{info, warn};

/// Error while loading a model snapshot
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported model file format: {0}")]
    UnsupportedFormat(String),
}

/// Loader for model snapshots
pub struct ModelLoader;

impl ModelLoader {
    /// Load a model from a `.yaml`, `.yml` or `.json` file
    ///
    /// Relationships whose endpoints are missing from the model are reported as
    /// warnings; the model is returned unchanged.
    pub fn load_from_path(path: &Path) -> Result<ArchimateModel, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

        let model = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
        };

        let result = ReferenceValidator::new().validate(&model);
        for dangling in &result.dangling_endpoints {
            warn!(
                "Relationship {} references missing {} '{}'",
                dangling.relationship_id, dangling.end, dangling.missing_id
            );
        }

        info!(
            "Loaded model '{}' with {} elements from {}",
            model.name.as_deref().unwrap_or_default(),
            model.all_elements().len(),
            path.display()
        );

        Ok(model)
    }

    /// Parse a model snapshot from YAML
    pub fn from_yaml_str(content: &str) -> Result<ArchimateModel, LoadError> {
        serde_yaml::from_str(content)
            .map_err(|e| LoadError::ParseError(format!("Failed to parse YAML model: {}", e)))
    }

    /// Parse a model snapshot from JSON
    pub fn from_json_str(content: &str) -> Result<ArchimateModel, LoadError> {
        serde_json::from_str(content)
            .map_err(|e| LoadError::ParseError(format!("Failed to parse JSON model: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementKind, FolderItem, FolderType};
    use tempfile::tempdir;

    const MODEL_YAML: &str = r#"
id: m1
name: Shop
purpose: Online shop architecture
properties:
  - key: version
    value: "3"
folders:
  - id: f1
    name: Business
    folder_type: business
    items:
      - type: element
        id: e1
        kind: BusinessActor
        name: Customer
        properties:
          - key: owner
            value: Sales
    folders:
      - id: f2
        name: Roles
        folder_type: user
        items:
          - type: element
            id: e2
            kind: BusinessRole
            name: Buyer
  - id: f3
    name: Relations
    folder_type: relations
    items:
      - type: relationship
        id: r1
        kind: Assignment
        source: e1
        target: e2
"#;

    #[test]
    fn test_from_yaml_str() {
        let model = ModelLoader::from_yaml_str(MODEL_YAML).unwrap();
        assert_eq!(model.id, "m1");
        assert_eq!(model.purpose.as_deref(), Some("Online shop architecture"));
        assert_eq!(model.all_elements().len(), 2);

        let business = model.folder(FolderType::Business).unwrap();
        match &business.items[0] {
            FolderItem::Element(element) => {
                assert_eq!(element.kind, ElementKind::BusinessActor);
                assert_eq!(element.properties[0].value.as_deref(), Some("Sales"));
            }
            other => panic!("Expected element, got {:?}", other),
        }
        assert_eq!(business.folders[0].folder_type, FolderType::User);
    }

    #[test]
    fn test_load_from_json_path() {
        let model = ModelLoader::from_yaml_str(MODEL_YAML).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_string_pretty(&model).unwrap()).unwrap();

        let loaded = ModelLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.archimate");
        std::fs::write(&path, "<model/>").unwrap();

        let result = ModelLoader::load_from_path(&path);
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = ModelLoader::load_from_path(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(LoadError::IoError(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = ModelLoader::from_yaml_str("folders: 12");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }
}
