//! ArchiMate Model Exchange File Format exporter
//!
//! Builds the complete exchange document for a model in one pass:
//!
//! 1. root `model` element with namespaces and `xsi:schemaLocation`
//! 2. `metadata` (Dublin Core, only if any metadata value is set)
//! 3. model `name`, `documentation` (purpose) and `properties`
//! 4. `elements` and `relationships` (always present)
//! 5. `organization` (only if enabled)
//! 6. `propertyDefinitions` (only if the model has property keys)
//! 7. `views` (only if the model has ArchiMate diagrams)

use crate::export::ExportError;
use crate::export::config::ExportOptions;
use crate::export::identifier::create_id;
use crate::export::property_defs::PropertyDefinitions;
use crate::export::schema::*;
use crate::export::type_mapper::{ArchimateTypeMapper, TypeMapper};
use crate::export::writers::{ExportContext, has_some_text};
use crate::export::xml::{XmlDocument, XmlElement, is_local_name};
use crate::models::ArchimateModel;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info, warn};

/// Exporter for the Open Group ArchiMate exchange format
///
/// # Example
///
/// ```rust
/// use archimate_exchange::export::{ExportOptions, XmlModelExporter};
/// use archimate_exchange::models::{ArchimateModel, Element, ElementKind};
///
/// let mut model = ArchimateModel::new("Enterprise");
/// model.add_element(Element::new(ElementKind::BusinessActor, "Customer"));
///
/// let exporter = XmlModelExporter::new(ExportOptions::new().with_organization(true));
/// let xml = exporter.export_to_string(&model).unwrap();
/// assert!(xml.contains("xsi:type=\"BusinessActor\""));
/// assert!(xml.contains("<organization>"));
/// ```
pub struct XmlModelExporter {
    options: ExportOptions,
    type_mapper: Box<dyn TypeMapper>,
}

impl XmlModelExporter {
    /// Create an exporter using the ArchiMate 3.1 type names
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            type_mapper: Box::new(ArchimateTypeMapper),
        }
    }

    /// Replace the type mapper
    pub fn with_type_mapper(mut self, type_mapper: impl TypeMapper + 'static) -> Self {
        self.type_mapper = Box::new(type_mapper);
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Build the exchange document for a model
    pub fn create_document(&self, model: &ArchimateModel) -> XmlDocument {
        // All property keys are gathered up front so property values can reference
        // their definitions before the definitions section is written.
        let property_definitions = PropertyDefinitions::from_model(model);
        let context = ExportContext::new(
            &self.options,
            &property_definitions,
            self.type_mapper.as_ref(),
        );

        let mut root = self.create_root_element();
        self.write_model(&context, model, &mut root);
        XmlDocument::new(root)
    }

    /// Export a model to an XML string
    pub fn export_to_string(&self, model: &ArchimateModel) -> Result<String, ExportError> {
        self.create_document(model).to_xml_string()
    }

    /// Export a model to a file
    ///
    /// When auxiliary files are enabled, the exchange XSD (and the Dublin Core XSD
    /// if metadata is written) are copied from the configured schemas directory
    /// into the directory of `output_file`.
    pub fn export_model(
        &self,
        model: &ArchimateModel,
        output_file: &Path,
    ) -> Result<(), ExportError> {
        let document = self.create_document(model);

        let file = File::create(output_file).map_err(|e| {
            ExportError::IoError(format!(
                "Failed to create {}: {}",
                output_file.display(),
                e
            ))
        })?;
        document.write_to(BufWriter::new(file))?;

        info!(
            "Exported model '{}' to {}",
            model.name.as_deref().unwrap_or_default(),
            output_file.display()
        );

        if self.options.include_auxiliary_files {
            self.copy_auxiliary_files(output_file)?;
        }

        Ok(())
    }

    fn copy_auxiliary_files(&self, output_file: &Path) -> Result<(), ExportError> {
        let target_dir = output_file.parent().unwrap_or_else(|| Path::new("."));

        let mut files = vec![ARCHIMATE_XSD];
        if self.options.has_metadata() {
            files.push(DUBLINCORE_XSD);
        }

        for file_name in files {
            let source = self.options.schemas_dir.join(file_name);
            let target = target_dir.join(file_name);
            std::fs::copy(&source, &target).map_err(|e| {
                ExportError::IoError(format!(
                    "Failed to copy {} to {}: {}",
                    source.display(),
                    target.display(),
                    e
                ))
            })?;
            info!("Copied {} to {}", file_name, target.display());
        }

        Ok(())
    }

    /// Root `model` element with namespace declarations and schema locations
    pub fn create_root_element(&self) -> XmlElement {
        let mut root = XmlElement::new(ELEMENT_MODEL);
        root.set_attribute(namespace_declaration(None), OPEN_GROUP_NAMESPACE_URI);
        root.set_attribute(namespace_declaration(Some(XSI_PREFIX)), XSI_NAMESPACE_URI);

        let has_metadata = self.options.has_metadata();
        if has_metadata {
            root.set_attribute(namespace_declaration(Some(DC_PREFIX)), DC_NAMESPACE_URI);
        }

        let mut schema_location =
            format!("{} {}", OPEN_GROUP_NAMESPACE_URI, OPEN_GROUP_SCHEMA_LOCATION);
        if has_metadata {
            schema_location.push_str(&format!(" {} {}", DC_NAMESPACE_URI, DC_SCHEMA_LOCATION));
        }
        root.set_attribute(ATTRIBUTE_SCHEMA_LOCATION, schema_location);

        root
    }

    fn write_model(
        &self,
        context: &ExportContext<'_>,
        model: &ArchimateModel,
        root: &mut XmlElement,
    ) {
        root.set_attribute(ATTRIBUTE_IDENTIFIER, create_id(model));

        if let Some(metadata) = self.write_metadata(context) {
            root.add_child(metadata);
        }

        if let Some(name) = context.optional_text_element(ELEMENT_NAME, model.name.as_deref()) {
            root.add_child(name);
        }

        if let Some(purpose) =
            context.optional_text_element(ELEMENT_DOCUMENTATION, model.purpose.as_deref())
        {
            root.add_child(purpose);
        }

        if let Some(properties) = context.write_properties(model) {
            root.add_child(properties);
        }

        let elements = context.write_model_elements(model);
        let relationships = context.write_model_relationships(model);
        debug!(
            "Writing {} elements and {} relationships",
            elements.children().len(),
            relationships.children().len()
        );
        root.add_child(elements);
        root.add_child(relationships);

        if self.options.save_organization {
            root.add_child(context.write_organization(model));
        }

        if let Some(definitions) = write_property_definitions(context.property_definitions) {
            root.add_child(definitions);
        }

        if let Some(views) = write_views(context, model) {
            root.add_child(views);
        }
    }

    /// Dublin Core metadata block, `None` when no metadata value is set
    fn write_metadata(&self, context: &ExportContext<'_>) -> Option<XmlElement> {
        if !self.options.has_metadata() {
            return None;
        }

        let mut metadata_element = XmlElement::new(ELEMENT_METADATA);
        metadata_element
            .add_child(XmlElement::new(ELEMENT_SCHEMA))
            .set_text(METADATA_SCHEMA);
        metadata_element
            .add_child(XmlElement::new(ELEMENT_SCHEMAVERSION))
            .set_text(METADATA_SCHEMA_VERSION);

        for (key, value) in &self.options.metadata {
            if !has_some_text(key) || !has_some_text(value) {
                continue;
            }
            if !is_local_name(key) {
                warn!("Metadata key '{}' is not a valid element name, skipping", key);
                continue;
            }
            metadata_element.add_child(context.text_element(&qualified(DC_PREFIX, key), value));
        }

        Some(metadata_element)
    }
}

impl Default for XmlModelExporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

/// `propertyDefinitions` section, `None` when the registry is empty
fn write_property_definitions(definitions: &PropertyDefinitions) -> Option<XmlElement> {
    if definitions.is_empty() {
        return None;
    }

    let mut definitions_element = XmlElement::new(ELEMENT_PROPERTYDEFS);
    for (key, id) in definitions.iter() {
        definitions_element
            .add_child(XmlElement::new(ELEMENT_PROPERTYDEF))
            .set_attribute(ATTRIBUTE_IDENTIFIER, id)
            .set_attribute(ATTRIBUTE_NAME, key)
            .set_attribute(ATTRIBUTE_TYPE, PROPERTY_DATA_TYPE);
    }

    Some(definitions_element)
}

/// `views` section, `None` when there is no ArchiMate diagram
fn write_views(context: &ExportContext<'_>, model: &ArchimateModel) -> Option<XmlElement> {
    let views: Vec<XmlElement> = model
        .diagram_models()
        .into_iter()
        .filter(|diagram| diagram.is_archimate())
        .map(|diagram| context.write_view(diagram))
        .collect();

    if views.is_empty() {
        return None;
    }

    let mut views_element = XmlElement::new(ELEMENT_VIEWS);
    for view in views {
        views_element.add_child(view);
    }
    Some(views_element)
}
