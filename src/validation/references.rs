//! Reference validation functionality
//!
//! The exporter writes relationship endpoints as-is. This module lets callers
//! check a model beforehand for endpoints that do not resolve and for
//! identifiers used more than once.

use crate::models::{ArchimateModel, FolderItem, Identifiable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Relationship end that failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipEnd {
    Source,
    Target,
}

impl std::fmt::Display for RelationshipEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationshipEnd::Source => write!(f, "source"),
            RelationshipEnd::Target => write!(f, "target"),
        }
    }
}

/// Relationship endpoint that names an object missing from the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingEndpoint {
    pub relationship_id: String,
    pub end: RelationshipEnd,
    pub missing_id: String,
}

/// Result of reference validation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[must_use = "validation results should be checked for dangling endpoints and duplicates"]
pub struct ReferenceValidationResult {
    /// Relationship endpoints that do not resolve
    pub dangling_endpoints: Vec<DanglingEndpoint>,
    /// Identifiers used by more than one object, in order of first repetition
    pub duplicate_identifiers: Vec<String>,
}

impl ReferenceValidationResult {
    pub fn is_valid(&self) -> bool {
        self.dangling_endpoints.is_empty() && self.duplicate_identifiers.is_empty()
    }
}

/// Reference validator
#[derive(Default)]
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Create a new reference validator
    ///
    /// # Example
    ///
    /// ```rust
    /// use archimate_exchange::validation::references::ReferenceValidator;
    /// use archimate_exchange::models::{ArchimateModel, Relationship, RelationshipKind};
    ///
    /// let mut model = ArchimateModel::new("Broken");
    /// model.add_relationship(Relationship::new(RelationshipKind::Flow, "a", "b"));
    ///
    /// let result = ReferenceValidator::new().validate(&model);
    /// assert_eq!(result.dangling_endpoints.len(), 2);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Check relationship endpoints and identifier uniqueness across all folders
    ///
    /// Relationship endpoints may name elements or other relationships.
    pub fn validate(&self, model: &ArchimateModel) -> ReferenceValidationResult {
        let items: Vec<&FolderItem> = model
            .folders
            .iter()
            .flat_map(|folder| folder.all_items())
            .collect();

        let mut result = ReferenceValidationResult::default();
        let mut known = HashSet::new();
        let mut reported = HashSet::new();
        for item in &items {
            if !known.insert(item.id()) && reported.insert(item.id()) {
                result.duplicate_identifiers.push(item.id().to_string());
            }
        }

        // Diagrams cannot be relationship endpoints
        let concepts: HashSet<&str> = items
            .iter()
            .filter(|item| !matches!(item, FolderItem::Diagram(_)))
            .map(|item| item.id())
            .collect();

        for relationship in items.iter().filter_map(|item| item.as_relationship()) {
            for (end, id) in [
                (RelationshipEnd::Source, &relationship.source),
                (RelationshipEnd::Target, &relationship.target),
            ] {
                if !concepts.contains(id.as_str()) {
                    result.dangling_endpoints.push(DanglingEndpoint {
                        relationship_id: relationship.id.clone(),
                        end,
                        missing_id: id.clone(),
                    });
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiagramModel, Element, ElementKind, Relationship, RelationshipKind};

    #[test]
    fn test_valid_model() {
        let mut model = ArchimateModel::new("Valid");
        let a = Element::new(ElementKind::ApplicationComponent, "A");
        let b = Element::new(ElementKind::ApplicationService, "B");
        let realization = Relationship::new(RelationshipKind::Realization, &a.id, &b.id);
        // Association from an element to a relationship is allowed
        let note = Element::new(ElementKind::Meaning, "Note");
        let association =
            Relationship::new(RelationshipKind::Association, &note.id, &realization.id);
        model.add_element(a);
        model.add_element(b);
        model.add_element(note);
        model.add_relationship(realization);
        model.add_relationship(association);

        assert!(ReferenceValidator::new().validate(&model).is_valid());
    }

    #[test]
    fn test_dangling_target_and_diagram_endpoint() {
        let mut model = ArchimateModel::new("Dangling");
        let a = Element::new(ElementKind::Node, "A");
        let view = DiagramModel::new("View");
        let relationship = Relationship::with_id("r1", RelationshipKind::Serving, &a.id, &view.id);
        model.add_element(a);
        model.add_diagram(view.clone());
        model.add_relationship(relationship);

        let result = ReferenceValidator::new().validate(&model);
        assert_eq!(
            result.dangling_endpoints,
            vec![DanglingEndpoint {
                relationship_id: "r1".to_string(),
                end: RelationshipEnd::Target,
                missing_id: view.id,
            }]
        );
    }

    #[test]
    fn test_duplicate_identifiers_reported_once() {
        let mut model = ArchimateModel::new("Duplicates");
        for _ in 0..3 {
            model.add_element(Element::with_id("same", ElementKind::Goal, "Goal"));
        }

        let result = ReferenceValidator::new().validate(&model);
        assert_eq!(result.duplicate_identifiers, vec!["same".to_string()]);
        assert!(!result.is_valid());
    }
}
