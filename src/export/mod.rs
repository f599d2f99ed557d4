//! Export functionality
//!
//! Exports ArchiMate models to the Open Group ArchiMate Model Exchange File
//! Format (XML).

pub mod config;
pub mod exchange;
pub mod folders;
pub mod identifier;
pub mod property_defs;
pub mod schema;
pub mod type_mapper;
pub mod writers;
pub mod xml;

/// Error during export
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Re-export for convenience
pub use config::ExportOptions;
pub use exchange::XmlModelExporter;
pub use property_defs::PropertyDefinitions;
pub use type_mapper::{ArchimateTypeMapper, TypeMapper};
pub use writers::ExportContext;
pub use xml::{XmlDocument, XmlElement};
