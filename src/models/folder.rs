//! Folder model for the SDK

use super::diagram::DiagramModel;
use super::element::Element;
use super::enums::FolderType;
use super::property::Property;
use super::relationship::Relationship;
use super::traits::{Identifiable, Properties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An object stored in a folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FolderItem {
    Element(Element),
    Relationship(Relationship),
    Diagram(DiagramModel),
}

impl FolderItem {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            FolderItem::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_relationship(&self) -> Option<&Relationship> {
        match self {
            FolderItem::Relationship(relationship) => Some(relationship),
            _ => None,
        }
    }

    pub fn as_diagram(&self) -> Option<&DiagramModel> {
        match self {
            FolderItem::Diagram(diagram) => Some(diagram),
            _ => None,
        }
    }
}

impl Identifiable for FolderItem {
    fn id(&self) -> &str {
        match self {
            FolderItem::Element(element) => element.id(),
            FolderItem::Relationship(relationship) => relationship.id(),
            FolderItem::Diagram(diagram) => diagram.id(),
        }
    }
}

impl Properties for FolderItem {
    fn properties(&self) -> &[Property] {
        match self {
            FolderItem::Element(element) => element.properties(),
            FolderItem::Relationship(relationship) => relationship.properties(),
            FolderItem::Diagram(diagram) => diagram.properties(),
        }
    }
}

impl From<Element> for FolderItem {
    fn from(element: Element) -> Self {
        FolderItem::Element(element)
    }
}

impl From<Relationship> for FolderItem {
    fn from(relationship: Relationship) -> Self {
        FolderItem::Relationship(relationship)
    }
}

impl From<DiagramModel> for FolderItem {
    fn from(diagram: DiagramModel) -> Self {
        FolderItem::Diagram(diagram)
    }
}

/// A folder in the model tree
///
/// Folders own their sub-folders and items. Both lists keep the order in which the
/// modeller arranged them, and that order is carried through to the export.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::models::{Element, ElementKind, Folder, FolderType};
///
/// let mut business = Folder::new("Business", FolderType::Business);
/// let mut actors = Folder::new("Actors", FolderType::User);
/// actors.items.push(Element::new(ElementKind::BusinessActor, "Customer").into());
/// business.folders.push(actors);
/// assert_eq!(business.all_items().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier within the model
    pub id: String,
    /// Folder name
    #[serde(default)]
    pub name: String,
    /// Free-text documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Folder type
    pub folder_type: FolderType,
    /// Child folders, in stored order
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// Contained objects, in stored order
    #[serde(default)]
    pub items: Vec<FolderItem>,
}

impl Folder {
    /// Create an empty folder with a generated UUIDv4 identifier
    pub fn new(name: impl Into<String>, folder_type: FolderType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            documentation: None,
            folder_type,
            folders: Vec::new(),
            items: Vec::new(),
        }
    }

    /// True if the folder has neither sub-folders nor items
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.items.is_empty()
    }

    /// All items of this folder and its sub-folders
    ///
    /// Items directly in a folder come first in stored order, then each
    /// sub-folder is visited completely before its next sibling.
    pub fn all_items(&self) -> Vec<&FolderItem> {
        let mut items = Vec::new();
        self.collect_items(&mut items);
        items
    }

    fn collect_items<'a>(&'a self, items: &mut Vec<&'a FolderItem>) {
        items.extend(self.items.iter());
        for folder in &self.folders {
            folder.collect_items(items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementKind;

    fn element(id: &str) -> FolderItem {
        Element::with_id(id, ElementKind::BusinessActor, id).into()
    }

    #[test]
    fn test_all_items_visits_own_items_before_sub_folders() {
        let mut root = Folder::new("Business", FolderType::Business);
        let mut first = Folder::new("First", FolderType::User);
        first.items.push(element("b"));
        let mut nested = Folder::new("Nested", FolderType::User);
        nested.items.push(element("c"));
        first.folders.push(nested);
        let mut second = Folder::new("Second", FolderType::User);
        second.items.push(element("d"));
        root.folders.push(first);
        root.folders.push(second);
        root.items.push(element("a"));

        let ids: Vec<&str> = root.all_items().iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_is_empty() {
        let mut folder = Folder::new("Empty", FolderType::User);
        assert!(folder.is_empty());
        folder.folders.push(Folder::new("Child", FolderType::User));
        assert!(!folder.is_empty());
    }
}
