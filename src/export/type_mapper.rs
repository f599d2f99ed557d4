//! Mapping of model kinds to exchange-format type names
//!
//! The exchange format names element and relationship types with the values of
//! its `ElementTypeEnum`/`RelationshipTypeEnum` and viewpoints with the display
//! names of the ArchiMate viewpoints.

use crate::models::{ElementKind, RelationshipKind, Viewpoint};

/// Resolves model kinds to the type strings written to the exchange document
pub trait TypeMapper {
    /// Value of the `xsi:type` attribute of an element
    fn element_type_name(&self, kind: ElementKind) -> &str;

    /// Value of the `xsi:type` attribute of a relationship
    fn relationship_type_name(&self, kind: RelationshipKind) -> &str;

    /// Value of the `viewpoint` attribute of a view; an empty string writes no attribute
    fn viewpoint_name(&self, viewpoint: Viewpoint) -> &str;
}

/// Type mapper for the ArchiMate 3.1 exchange format
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchimateTypeMapper;

impl TypeMapper for ArchimateTypeMapper {
    fn element_type_name(&self, kind: ElementKind) -> &str {
        match kind {
            ElementKind::BusinessActor => "BusinessActor",
            ElementKind::BusinessRole => "BusinessRole",
            ElementKind::BusinessCollaboration => "BusinessCollaboration",
            ElementKind::BusinessInterface => "BusinessInterface",
            ElementKind::BusinessProcess => "BusinessProcess",
            ElementKind::BusinessFunction => "BusinessFunction",
            ElementKind::BusinessInteraction => "BusinessInteraction",
            ElementKind::BusinessEvent => "BusinessEvent",
            ElementKind::BusinessService => "BusinessService",
            ElementKind::BusinessObject => "BusinessObject",
            ElementKind::Contract => "Contract",
            ElementKind::Representation => "Representation",
            ElementKind::Product => "Product",
            ElementKind::ApplicationComponent => "ApplicationComponent",
            ElementKind::ApplicationCollaboration => "ApplicationCollaboration",
            ElementKind::ApplicationInterface => "ApplicationInterface",
            ElementKind::ApplicationFunction => "ApplicationFunction",
            ElementKind::ApplicationInteraction => "ApplicationInteraction",
            ElementKind::ApplicationProcess => "ApplicationProcess",
            ElementKind::ApplicationEvent => "ApplicationEvent",
            ElementKind::ApplicationService => "ApplicationService",
            ElementKind::DataObject => "DataObject",
            ElementKind::Node => "Node",
            ElementKind::Device => "Device",
            ElementKind::SystemSoftware => "SystemSoftware",
            ElementKind::TechnologyCollaboration => "TechnologyCollaboration",
            ElementKind::TechnologyInterface => "TechnologyInterface",
            ElementKind::Path => "Path",
            ElementKind::CommunicationNetwork => "CommunicationNetwork",
            ElementKind::TechnologyFunction => "TechnologyFunction",
            ElementKind::TechnologyProcess => "TechnologyProcess",
            ElementKind::TechnologyInteraction => "TechnologyInteraction",
            ElementKind::TechnologyEvent => "TechnologyEvent",
            ElementKind::TechnologyService => "TechnologyService",
            ElementKind::Artifact => "Artifact",
            ElementKind::Equipment => "Equipment",
            ElementKind::Facility => "Facility",
            ElementKind::DistributionNetwork => "DistributionNetwork",
            ElementKind::Material => "Material",
            ElementKind::Stakeholder => "Stakeholder",
            ElementKind::Driver => "Driver",
            ElementKind::Assessment => "Assessment",
            ElementKind::Goal => "Goal",
            ElementKind::Outcome => "Outcome",
            ElementKind::Principle => "Principle",
            ElementKind::Requirement => "Requirement",
            ElementKind::Constraint => "Constraint",
            ElementKind::Meaning => "Meaning",
            ElementKind::Value => "Value",
            ElementKind::Resource => "Resource",
            ElementKind::Capability => "Capability",
            ElementKind::CourseOfAction => "CourseOfAction",
            ElementKind::ValueStream => "ValueStream",
            ElementKind::WorkPackage => "WorkPackage",
            ElementKind::Deliverable => "Deliverable",
            ElementKind::ImplementationEvent => "ImplementationEvent",
            ElementKind::Plateau => "Plateau",
            ElementKind::Gap => "Gap",
            ElementKind::Location => "Location",
            ElementKind::Grouping => "Grouping",
            ElementKind::AndJunction => "AndJunction",
            ElementKind::OrJunction => "OrJunction",
        }
    }

    fn relationship_type_name(&self, kind: RelationshipKind) -> &str {
        match kind {
            RelationshipKind::Composition => "Composition",
            RelationshipKind::Aggregation => "Aggregation",
            RelationshipKind::Assignment => "Assignment",
            RelationshipKind::Realization => "Realization",
            RelationshipKind::Serving => "Serving",
            RelationshipKind::Access => "Access",
            RelationshipKind::Influence => "Influence",
            RelationshipKind::Triggering => "Triggering",
            RelationshipKind::Flow => "Flow",
            RelationshipKind::Specialization => "Specialization",
            RelationshipKind::Association => "Association",
        }
    }

    fn viewpoint_name(&self, viewpoint: Viewpoint) -> &str {
        match viewpoint {
            Viewpoint::ApplicationCooperation => "Application Cooperation",
            Viewpoint::ApplicationUsage => "Application Usage",
            Viewpoint::BusinessProcessCooperation => "Business Process Cooperation",
            Viewpoint::Capability => "Capability",
            Viewpoint::GoalRealization => "Goal Realization",
            Viewpoint::ImplementationDeployment => "Implementation and Deployment",
            Viewpoint::ImplementationMigration => "Implementation and Migration",
            Viewpoint::InformationStructure => "Information Structure",
            Viewpoint::LayeredViewpoint => "Layered",
            Viewpoint::Migration => "Migration",
            Viewpoint::Motivation => "Motivation",
            Viewpoint::Organization => "Organization",
            Viewpoint::OutcomeRealization => "Outcome Realization",
            Viewpoint::Physical => "Physical",
            Viewpoint::Product => "Product",
            Viewpoint::Project => "Project",
            Viewpoint::RequirementsRealization => "Requirements Realization",
            Viewpoint::ResourceViewpoint => "Resource",
            Viewpoint::ServiceRealization => "Service Realization",
            Viewpoint::Stakeholder => "Stakeholder",
            Viewpoint::Strategy => "Strategy",
            Viewpoint::Technology => "Technology",
            Viewpoint::TechnologyUsage => "Technology Usage",
            Viewpoint::ValueStream => "Value Stream",
        }
    }
}
