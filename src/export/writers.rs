//! Per-object writers for elements, relationships, views and properties
//!
//! All writers are methods on [`ExportContext`], which carries the state of a
//! single export: options, the property definition registry and the type mapper.
//! Nothing here is shared between exports.

use crate::export::config::ExportOptions;
use crate::export::identifier::{create_id, id_for};
use crate::export::property_defs::PropertyDefinitions;
use crate::export::schema::*;
use crate::export::type_mapper::TypeMapper;
use crate::export::xml::XmlElement;
use crate::models::{DiagramModel, Element, Properties, Relationship};
use tracing::warn;

/// State of one export run
pub struct ExportContext<'a> {
    pub options: &'a ExportOptions,
    pub property_definitions: &'a PropertyDefinitions,
    pub type_mapper: &'a dyn TypeMapper,
}

impl<'a> ExportContext<'a> {
    pub fn new(
        options: &'a ExportOptions,
        property_definitions: &'a PropertyDefinitions,
        type_mapper: &'a dyn TypeMapper,
    ) -> Self {
        Self {
            options,
            property_definitions,
            type_mapper,
        }
    }

    /// Element holding `text`, with `xml:lang` when a language code is configured
    pub fn text_element(&self, name: &str, text: &str) -> XmlElement {
        let mut element = XmlElement::new(name);
        element.set_text(text);
        if let Some(language_code) = self.options.language_code() {
            element.set_attribute(ATTRIBUTE_LANG, language_code);
        }
        element
    }

    /// Like [`Self::text_element`], but `None` when there is no text to write
    pub fn optional_text_element(&self, name: &str, text: Option<&str>) -> Option<XmlElement> {
        text.filter(|t| has_some_text(t))
            .map(|t| self.text_element(name, t))
    }

    /// Write an element
    pub fn write_element(&self, element: &Element) -> XmlElement {
        let mut element_element = XmlElement::new(ELEMENT_ELEMENT);
        element_element.set_attribute(ATTRIBUTE_IDENTIFIER, create_id(element));
        element_element.set_attribute(
            ATTRIBUTE_XSI_TYPE,
            self.type_mapper.element_type_name(element.kind),
        );

        self.write_descriptive_content(
            &mut element_element,
            element.name.as_deref(),
            element.documentation.as_deref(),
            element,
        );
        element_element
    }

    /// Write a relationship
    ///
    /// Source and target are written as exchange identifiers of the endpoint ids;
    /// they are not checked against the model.
    pub fn write_relationship(&self, relationship: &Relationship) -> XmlElement {
        let mut relationship_element = XmlElement::new(ELEMENT_RELATIONSHIP);
        relationship_element.set_attribute(ATTRIBUTE_IDENTIFIER, create_id(relationship));
        relationship_element.set_attribute(ATTRIBUTE_SOURCE, id_for(&relationship.source));
        relationship_element.set_attribute(ATTRIBUTE_TARGET, id_for(&relationship.target));
        relationship_element.set_attribute(
            ATTRIBUTE_XSI_TYPE,
            self.type_mapper.relationship_type_name(relationship.kind),
        );

        self.write_descriptive_content(
            &mut relationship_element,
            relationship.name.as_deref(),
            relationship.documentation.as_deref(),
            relationship,
        );
        relationship_element
    }

    /// Write a view
    pub fn write_view(&self, view: &DiagramModel) -> XmlElement {
        let mut view_element = XmlElement::new(ELEMENT_VIEW);
        view_element.set_attribute(ATTRIBUTE_IDENTIFIER, create_id(view));

        if let Some(viewpoint) = view.viewpoint {
            let viewpoint_name = self.type_mapper.viewpoint_name(viewpoint);
            if has_some_text(viewpoint_name) {
                view_element.set_attribute(ATTRIBUTE_VIEWPOINT, viewpoint_name);
            }
        }

        self.write_descriptive_content(
            &mut view_element,
            view.name.as_deref(),
            view.documentation.as_deref(),
            view,
        );
        view_element
    }

    /// Label, documentation and properties, in that order, each only if present
    fn write_descriptive_content(
        &self,
        parent: &mut XmlElement,
        name: Option<&str>,
        documentation: Option<&str>,
        properties: &dyn Properties,
    ) {
        if let Some(label) = self.optional_text_element(ELEMENT_LABEL, name) {
            parent.add_child(label);
        }
        if let Some(documentation) =
            self.optional_text_element(ELEMENT_DOCUMENTATION, documentation)
        {
            parent.add_child(documentation);
        }
        if let Some(properties) = self.write_properties(properties) {
            parent.add_child(properties);
        }
    }

    /// Write the property values of an object
    ///
    /// Returns `None` only when the object has no properties. A property is
    /// written only when both key and value have text and the key has a
    /// definition, so the returned node may have no children.
    pub fn write_properties(&self, object: &dyn Properties) -> Option<XmlElement> {
        if object.properties().is_empty() {
            return None;
        }

        let mut properties_element = XmlElement::new(ELEMENT_PROPERTIES);

        for property in object.properties() {
            let (Some(key), Some(value)) = (property.key.as_deref(), property.value.as_deref())
            else {
                continue;
            };
            if !has_some_text(key) || !has_some_text(value) {
                continue;
            }

            let Some(property_ref) = self.property_definitions.get(key) else {
                warn!("No property definition registered for key '{}', skipping", key);
                continue;
            };

            let property_element = properties_element.add_child(XmlElement::new(ELEMENT_PROPERTY));
            property_element.set_attribute(ATTRIBUTE_IDENTIFIERREF, property_ref);
            property_element.add_child(self.text_element(ELEMENT_VALUE, value));
        }

        Some(properties_element)
    }
}

/// True if the string has at least one character
pub fn has_some_text(text: &str) -> bool {
    !text.is_empty()
}
