//! Diagram (view) model for the SDK

use super::enums::{DiagramKind, Viewpoint};
use super::property::Property;
use super::traits::{Identifiable, Properties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A diagram in the model
///
/// Diagram contents (nodes, connections, bounds) are not carried here; the
/// exchange export only writes the view's identity, viewpoint and descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramModel {
    /// Unique identifier within the model
    pub id: String,
    /// Diagram kind
    #[serde(default)]
    pub kind: DiagramKind,
    /// Diagram name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Viewpoint of an ArchiMate diagram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewpoint: Option<Viewpoint>,
    /// User properties
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl DiagramModel {
    /// Create a new ArchiMate diagram with a generated UUIDv4 identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Create a new ArchiMate diagram with an explicit identifier
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: DiagramKind::Archimate,
            name: Some(name.into()),
            documentation: None,
            viewpoint: None,
            properties: Vec::new(),
        }
    }

    /// Whether this diagram is part of the ArchiMate exchange format
    pub fn is_archimate(&self) -> bool {
        self.kind == DiagramKind::Archimate
    }
}

impl Identifiable for DiagramModel {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Properties for DiagramModel {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}
