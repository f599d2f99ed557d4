//! Identifiers written to the exchange document
//!
//! XML identifiers must be valid `xs:ID` values, which cannot start with a digit,
//! so every model identifier (typically a UUID) is prefixed.

use crate::models::Identifiable;

pub const IDENTIFIER_PREFIX: &str = "id-";

/// Exchange identifier of a model object
///
/// # Example
///
/// ```rust
/// use archimate_exchange::export::identifier::create_id;
/// use archimate_exchange::models::{Element, ElementKind};
///
/// let element = Element::with_id("1234", ElementKind::BusinessActor, "Customer");
/// assert_eq!(create_id(&element), "id-1234");
/// ```
pub fn create_id(object: &(impl Identifiable + ?Sized)) -> String {
    id_for(object.id())
}

/// Exchange identifier for a raw model identifier, e.g. a relationship endpoint
pub fn id_for(model_id: &str) -> String {
    format!("{}{}", IDENTIFIER_PREFIX, model_id)
}
