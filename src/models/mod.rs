//! Models module for the SDK
//!
//! Defines the in-memory ArchiMate model consumed by the exporters: a tree of
//! folders owning elements, relationships and diagrams.

pub mod archimate_model;
pub mod diagram;
pub mod element;
pub mod enums;
pub mod folder;
pub mod property;
pub mod relationship;
pub mod traits;

pub use archimate_model::{ArchimateModel, default_folder_for};
pub use diagram::DiagramModel;
pub use element::Element;
pub use enums::*;
pub use folder::{Folder, FolderItem};
pub use property::Property;
pub use relationship::Relationship;
pub use traits::{Identifiable, Properties};
