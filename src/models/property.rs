//! Property model for the SDK

use serde::{Deserialize, Serialize};

/// A user-defined key/value pair attached to a model, element, relationship or diagram
///
/// Both parts are optional: modelling tools allow a property row to exist before
/// its key or value has been typed in.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::models::Property;
///
/// let property = Property::new("owner", "Sales");
/// assert_eq!(property.key.as_deref(), Some("owner"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property key, shared across objects and registered as a property definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Property value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Property {
    /// Create a property with both key and value set
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
