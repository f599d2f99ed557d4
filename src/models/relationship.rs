//! Relationship model for the SDK

use super::enums::RelationshipKind;
use super::property::Property;
use super::traits::{Identifiable, Properties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relationship between two ArchiMate concepts
///
/// Endpoints are held by identifier, never by reference, so the model stays a
/// plain ownership tree. Both endpoints must name objects present in the same model.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::models::{Element, ElementKind, Relationship, RelationshipKind};
///
/// let actor = Element::new(ElementKind::BusinessActor, "Customer");
/// let role = Element::new(ElementKind::BusinessRole, "Buyer");
/// let assignment = Relationship::new(RelationshipKind::Assignment, &actor.id, &role.id);
/// assert_eq!(assignment.source, actor.id);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier within the model
    pub id: String,
    /// Relationship kind
    pub kind: RelationshipKind,
    /// Identifier of the source concept
    pub source: String,
    /// Identifier of the target concept
    pub target: String,
    /// Optional relationship name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// User properties
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Relationship {
    /// Create a new relationship with a generated UUIDv4 identifier
    ///
    /// # Arguments
    ///
    /// * `kind` - The ArchiMate relationship kind
    /// * `source` - Identifier of the source concept
    /// * `target` - Identifier of the target concept
    pub fn new(kind: RelationshipKind, source: &str, target: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), kind, source, target)
    }

    /// Create a new relationship with an explicit identifier
    pub fn with_id(
        id: impl Into<String>,
        kind: RelationshipKind,
        source: &str,
        target: &str,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            source: source.to_string(),
            target: target.to_string(),
            name: None,
            documentation: None,
            properties: Vec::new(),
        }
    }
}

impl Identifiable for Relationship {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Properties for Relationship {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}
