//! Capability traits shared by model objects

use super::property::Property;

/// Objects with a stable, model-unique identifier
pub trait Identifiable {
    /// The object's intrinsic identifier, as stored in the model
    fn id(&self) -> &str;
}

/// Objects that carry a list of user properties
pub trait Properties {
    fn properties(&self) -> &[Property];
}
