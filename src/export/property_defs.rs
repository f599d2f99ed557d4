//! Property definition registry
//!
//! The exchange format does not repeat property keys on every object. Each
//! distinct key is declared once in `propertyDefinitions`, and property values
//! refer to it by identifier.

use crate::models::{ArchimateModel, Properties};
use std::collections::{BTreeMap, BTreeSet};

pub const PROPERTY_ID_PREFIX: &str = "propid-";

/// Distinct property keys of a model mapped to their definition identifiers
///
/// Keys are numbered in ascending lexicographic order starting at `propid-1`, so the
/// numbering depends only on the set of keys in the model, never on where they occur.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::export::PropertyDefinitions;
/// use archimate_exchange::models::{ArchimateModel, Element, ElementKind, Property};
///
/// let mut model = ArchimateModel::new("Enterprise");
/// let mut customer = Element::new(ElementKind::BusinessActor, "Customer");
/// customer.properties.push(Property::new("owner", "Sales"));
/// customer.properties.push(Property::new("cost", "10"));
/// model.add_element(customer);
///
/// let definitions = PropertyDefinitions::from_model(&model);
/// assert_eq!(definitions.get("cost"), Some("propid-1"));
/// assert_eq!(definitions.get("owner"), Some("propid-2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDefinitions {
    definitions: BTreeMap<String, String>,
}

impl PropertyDefinitions {
    /// Scan the model and all objects in its folders for property keys
    ///
    /// Properties without a key are not registered. Empty keys are registered
    /// like any other key, although property writers never reference them.
    pub fn from_model(model: &ArchimateModel) -> Self {
        let mut keys = BTreeSet::new();
        collect_keys(model, &mut keys);
        for folder in &model.folders {
            for item in folder.all_items() {
                collect_keys(item, &mut keys);
            }
        }

        let definitions = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key.to_string(), format!("{}{}", PROPERTY_ID_PREFIX, index + 1)))
            .collect();

        Self { definitions }
    }

    /// Definition identifier registered for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// `(key, identifier)` pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(key, id)| (key.as_str(), id.as_str()))
    }
}

fn collect_keys<'a>(object: &'a (impl Properties + ?Sized), keys: &mut BTreeSet<&'a str>) {
    keys.extend(
        object
            .properties()
            .iter()
            .filter_map(|property| property.key.as_deref()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DiagramModel, Element, ElementKind, Folder, FolderType, Property, Relationship,
        RelationshipKind,
    };

    fn model_with_keys_everywhere() -> ArchimateModel {
        let mut model = ArchimateModel::new("Keys");
        model.properties.push(Property::new("version", "1"));

        let mut actor = Element::new(ElementKind::BusinessActor, "Customer");
        actor.properties.push(Property::new("owner", "Sales"));
        actor.properties.push(Property::new("status", "live"));
        let mut nested = Folder::new("Nested", FolderType::User);
        let mut role = Element::new(ElementKind::BusinessRole, "Buyer");
        role.properties.push(Property::new("owner", "Procurement"));
        role.properties.push(Property::new("alias", "Purchaser"));

        let mut relationship =
            Relationship::new(RelationshipKind::Assignment, &actor.id, &role.id);
        relationship
            .properties
            .push(Property::new("confidence", "high"));

        nested.items.push(role.into());
        model.add_element(actor);
        model
            .folder_mut(FolderType::Business)
            .unwrap()
            .folders
            .push(nested);
        model.add_relationship(relationship);

        let mut view = DiagramModel::new("Overview");
        view.properties.push(Property::new("audience", "board"));
        model.add_diagram(view);
        model
    }

    #[test]
    fn test_registers_each_key_once_in_sorted_order() {
        let definitions = PropertyDefinitions::from_model(&model_with_keys_everywhere());

        let entries: Vec<(&str, &str)> = definitions.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("alias", "propid-1"),
                ("audience", "propid-2"),
                ("confidence", "propid-3"),
                ("owner", "propid-4"),
                ("status", "propid-5"),
                ("version", "propid-6"),
            ]
        );
    }

    #[test]
    fn test_properties_without_key_are_ignored() {
        let mut model = ArchimateModel::new("Keys");
        model.properties.push(Property {
            key: None,
            value: Some("orphan".to_string()),
        });
        let definitions = PropertyDefinitions::from_model(&model);
        assert!(definitions.is_empty());
        assert_eq!(definitions.len(), 0);
    }

    #[test]
    fn test_numbering_is_independent_of_traversal_order() {
        let mut first = ArchimateModel::new("A");
        first.properties.push(Property::new("zeta", "1"));
        first.properties.push(Property::new("alpha", "2"));

        let mut second = ArchimateModel::new("B");
        second.properties.push(Property::new("alpha", "2"));
        second.properties.push(Property::new("zeta", "1"));

        assert_eq!(
            PropertyDefinitions::from_model(&first),
            PropertyDefinitions::from_model(&second)
        );
    }
}
