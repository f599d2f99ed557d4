//! Element model for the SDK

use super::enums::ElementKind;
use super::property::Property;
use super::traits::{Identifiable, Properties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ArchiMate element such as a business actor or an application component
///
/// # Example
///
/// ```rust
/// use archimate_exchange::models::{Element, ElementKind, Property};
///
/// let mut customer = Element::new(ElementKind::BusinessActor, "Customer");
/// customer.properties.push(Property::new("owner", "Sales"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier within the model
    pub id: String,
    /// Element kind
    pub kind: ElementKind,
    /// Element name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// User properties
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Element {
    /// Create a new element with a generated UUIDv4 identifier
    ///
    /// # Arguments
    ///
    /// * `kind` - The ArchiMate element kind
    /// * `name` - The element name
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), kind, name)
    }

    /// Create a new element with an explicit identifier
    pub fn with_id(id: impl Into<String>, kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: Some(name.into()),
            documentation: None,
            properties: Vec::new(),
        }
    }
}

impl Identifiable for Element {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Properties for Element {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}
