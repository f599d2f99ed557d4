//! Model snapshot loading
//!
//! Models are persisted as the serde representation of
//! [`crate::models::ArchimateModel`] in YAML or JSON.

pub mod loader;

pub use loader::{LoadError, ModelLoader};
