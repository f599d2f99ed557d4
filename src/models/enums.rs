//! Enums for ArchiMate models
//!
//! # Serde Casing Conventions
//!
//! - `PascalCase`: concept kinds (ElementKind, RelationshipKind), matching the ArchiMate
//!   concept names
//! - `snake_case`: folder and diagram kinds, which are internal to the model snapshot
//! - `camelCase`: viewpoints, following the identifiers used by modelling tools
//!
//! The canonical exchange-format names of these values are resolved by
//! [`crate::export::type_mapper`], not by their serde representation.

use serde::{Deserialize, Serialize};

/// Kind of an ArchiMate element
///
/// Grouped by layer in the same order as the ArchiMate specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ElementKind {
    // Business layer
    BusinessActor,
    BusinessRole,
    BusinessCollaboration,
    BusinessInterface,
    BusinessProcess,
    BusinessFunction,
    BusinessInteraction,
    BusinessEvent,
    BusinessService,
    BusinessObject,
    Contract,
    Representation,
    Product,
    // Application layer
    ApplicationComponent,
    ApplicationCollaboration,
    ApplicationInterface,
    ApplicationFunction,
    ApplicationInteraction,
    ApplicationProcess,
    ApplicationEvent,
    ApplicationService,
    DataObject,
    // Technology layer
    Node,
    Device,
    SystemSoftware,
    TechnologyCollaboration,
    TechnologyInterface,
    Path,
    CommunicationNetwork,
    TechnologyFunction,
    TechnologyProcess,
    TechnologyInteraction,
    TechnologyEvent,
    TechnologyService,
    Artifact,
    // Physical
    Equipment,
    Facility,
    DistributionNetwork,
    Material,
    // Motivation
    Stakeholder,
    Driver,
    Assessment,
    Goal,
    Outcome,
    Principle,
    Requirement,
    Constraint,
    Meaning,
    Value,
    // Strategy
    Resource,
    Capability,
    CourseOfAction,
    ValueStream,
    // Implementation & Migration
    WorkPackage,
    Deliverable,
    ImplementationEvent,
    Plateau,
    Gap,
    // Other
    Location,
    Grouping,
    AndJunction,
    OrJunction,
}

/// Kind of an ArchiMate relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RelationshipKind {
    Composition,
    Aggregation,
    Assignment,
    Realization,
    Serving,
    Access,
    Influence,
    Triggering,
    Flow,
    Specialization,
    Association,
}

/// Type of a model folder
///
/// Every model has exactly one top-level folder of each non-`User` type.
/// Folders created by the modeller below those roots are `User` folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderType {
    Business,
    Application,
    Technology,
    Motivation,
    ImplementationMigration,
    /// "Other" folder holding locations, groupings and junctions
    Connectors,
    Relations,
    Diagrams,
    User,
}

impl FolderType {
    /// Top-level folders whose contents are written to the `elements` section, in output order
    pub const ELEMENT_FOLDERS: [FolderType; 6] = [
        FolderType::Business,
        FolderType::Application,
        FolderType::Technology,
        FolderType::Motivation,
        FolderType::ImplementationMigration,
        FolderType::Connectors,
    ];
}

impl std::fmt::Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FolderType::Business => "Business",
            FolderType::Application => "Application",
            FolderType::Technology => "Technology & Physical",
            FolderType::Motivation => "Motivation",
            FolderType::ImplementationMigration => "Implementation & Migration",
            FolderType::Connectors => "Other",
            FolderType::Relations => "Relations",
            FolderType::Diagrams => "Views",
            FolderType::User => "Folder",
        };
        write!(f, "{}", name)
    }
}

/// Kind of a diagram
///
/// Only `Archimate` diagrams are part of the exchange format; sketches and
/// canvases are tool-specific and are skipped on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    #[default]
    Archimate,
    Sketch,
    Canvas,
}

/// ArchiMate viewpoint of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Viewpoint {
    ApplicationCooperation,
    ApplicationUsage,
    BusinessProcessCooperation,
    Capability,
    GoalRealization,
    ImplementationDeployment,
    ImplementationMigration,
    InformationStructure,
    LayeredViewpoint,
    Migration,
    Motivation,
    Organization,
    OutcomeRealization,
    Physical,
    Product,
    Project,
    RequirementsRealization,
    ResourceViewpoint,
    ServiceRealization,
    Stakeholder,
    Strategy,
    Technology,
    TechnologyUsage,
    ValueStream,
}
