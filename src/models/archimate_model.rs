//! ArchimateModel for the SDK

use super::diagram::DiagramModel;
use super::element::Element;
use super::enums::{ElementKind, FolderType};
use super::folder::{Folder, FolderItem};
use super::property::Property;
use super::relationship::Relationship;
use super::traits::{Identifiable, Properties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ArchiMate model: the root of the folder tree
///
/// A model owns one top-level folder per [`FolderType`] (except `User`), and every
/// element, relationship and diagram lives somewhere below one of those folders.
///
/// # Example
///
/// ```rust
/// use archimate_exchange::models::{ArchimateModel, Element, ElementKind, FolderType};
///
/// let mut model = ArchimateModel::new("Enterprise");
/// model.add_element(Element::new(ElementKind::BusinessActor, "Customer"));
/// assert_eq!(model.folder(FolderType::Business).unwrap().items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchimateModel {
    /// Unique identifier for the model
    pub id: String,
    /// Model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Purpose of the model, written as the model's documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Model-level user properties
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Top-level folders, in stored order
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl ArchimateModel {
    /// Create a new model with a generated UUIDv4 identifier and the default top-level folders
    pub fn new(name: impl Into<String>) -> Self {
        let folders = [
            FolderType::Business,
            FolderType::Application,
            FolderType::Technology,
            FolderType::Motivation,
            FolderType::ImplementationMigration,
            FolderType::Connectors,
            FolderType::Relations,
            FolderType::Diagrams,
        ]
        .into_iter()
        .map(|folder_type| Folder::new(folder_type.to_string(), folder_type))
        .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            name: Some(name.into()),
            purpose: None,
            properties: Vec::new(),
            folders,
        }
    }

    /// Get the top-level folder of the given type
    pub fn folder(&self, folder_type: FolderType) -> Option<&Folder> {
        self.folders.iter().find(|f| f.folder_type == folder_type)
    }

    /// Get a mutable reference to the top-level folder of the given type
    pub fn folder_mut(&mut self, folder_type: FolderType) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.folder_type == folder_type)
    }

    /// Add an element to the top-level folder for its kind
    ///
    /// The folder is created if the model does not have it yet.
    pub fn add_element(&mut self, element: Element) {
        let folder_type = default_folder_for(element.kind);
        self.folder_or_insert(folder_type).items.push(element.into());
    }

    /// Add a relationship to the relations folder
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.folder_or_insert(FolderType::Relations)
            .items
            .push(relationship.into());
    }

    /// Add a diagram to the diagrams folder
    pub fn add_diagram(&mut self, diagram: DiagramModel) {
        self.folder_or_insert(FolderType::Diagrams)
            .items
            .push(diagram.into());
    }

    fn folder_or_insert(&mut self, folder_type: FolderType) -> &mut Folder {
        let index = match self.folders.iter().position(|f| f.folder_type == folder_type) {
            Some(index) => index,
            None => {
                self.folders
                    .push(Folder::new(folder_type.to_string(), folder_type));
                self.folders.len() - 1
            }
        };
        &mut self.folders[index]
    }

    /// All diagrams of the model, in diagrams-folder traversal order
    pub fn diagram_models(&self) -> Vec<&DiagramModel> {
        self.folder(FolderType::Diagrams)
            .map(|folder| {
                folder
                    .all_items()
                    .into_iter()
                    .filter_map(FolderItem::as_diagram)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All elements of the model, in folder traversal order
    pub fn all_elements(&self) -> Vec<&Element> {
        self.folders
            .iter()
            .flat_map(|folder| folder.all_items())
            .filter_map(FolderItem::as_element)
            .collect()
    }

    /// Find an element by its identifier
    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.all_elements().into_iter().find(|e| e.id == id)
    }
}

impl Identifiable for ArchimateModel {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Properties for ArchimateModel {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// Top-level folder that holds elements of the given kind
///
/// Strategy elements are kept with the business layer.
pub fn default_folder_for(kind: ElementKind) -> FolderType {
    use ElementKind::*;
    match kind {
        BusinessActor | BusinessRole | BusinessCollaboration | BusinessInterface
        | BusinessProcess | BusinessFunction | BusinessInteraction | BusinessEvent
        | BusinessService | BusinessObject | Contract | Representation | Product | Resource
        | Capability | CourseOfAction | ValueStream => FolderType::Business,
        ApplicationComponent | ApplicationCollaboration | ApplicationInterface
        | ApplicationFunction | ApplicationInteraction | ApplicationProcess | ApplicationEvent
        | ApplicationService | DataObject => FolderType::Application,
        Node | Device | SystemSoftware | TechnologyCollaboration | TechnologyInterface | Path
        | CommunicationNetwork | TechnologyFunction | TechnologyProcess
        | TechnologyInteraction | TechnologyEvent | TechnologyService | Artifact | Equipment
        | Facility | DistributionNetwork | Material => FolderType::Technology,
        Stakeholder | Driver | Assessment | Goal | Outcome | Principle | Requirement
        | Constraint | Meaning | Value => FolderType::Motivation,
        WorkPackage | Deliverable | ImplementationEvent | Plateau | Gap => {
            FolderType::ImplementationMigration
        }
        Location | Grouping | AndJunction | OrJunction => FolderType::Connectors,
    }
}
