//! ArchiMate Exchange - Exports ArchiMate models to the Open Group Model Exchange File Format
//!
//! Provides unified interfaces for:
//! - The in-memory ArchiMate model (folders, elements, relationships, diagrams)
//! - Model snapshot loading (YAML/JSON)
//! - Exchange-format XML export, with optional organization and schema files
//! - Validation logic (references, output well-formedness)

pub mod export;
pub mod model;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use export::{
    ArchimateTypeMapper, ExportError, ExportOptions, PropertyDefinitions, TypeMapper,
    XmlDocument, XmlElement, XmlModelExporter,
};
pub use model::{LoadError, ModelLoader};
pub use validation::{ReferenceValidationResult, ReferenceValidator, validate_output_well_formed};

// Re-export models
pub use models::enums::*;
pub use models::{
    ArchimateModel, DiagramModel, Element, Folder, FolderItem, Identifiable, Properties,
    Property, Relationship,
};
