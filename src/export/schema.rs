//! Names fixed by the Open Group ArchiMate Model Exchange File Format
//!
//! Element and attribute names, namespaces and schema locations must match the
//! published XSD exactly; nothing in here is configurable.

/// Target namespace of the exchange format, used as the default namespace
pub const OPEN_GROUP_NAMESPACE_URI: &str = "http://www.opengroup.org/xsd/archimate/3.0/";
/// Location of the exchange-format schema for `xsi:schemaLocation`
pub const OPEN_GROUP_SCHEMA_LOCATION: &str =
    "http://www.opengroup.org/xsd/archimate/3.1/archimate3_Diagram.xsd";

pub const XSI_PREFIX: &str = "xsi";
pub const XSI_NAMESPACE_URI: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub const DC_PREFIX: &str = "dc";
pub const DC_NAMESPACE_URI: &str = "http://purl.org/dc/elements/1.1/";
pub const DC_SCHEMA_LOCATION: &str =
    "http://www.dublincore.org/schemas/xmls/qdc/2008/02/11/dc.xsd";

/// Auxiliary schema files copied next to the exported document
pub const ARCHIMATE_XSD: &str = "archimate3_Diagram.xsd";
pub const DUBLINCORE_XSD: &str = "dc.xsd";

pub const METADATA_SCHEMA: &str = "Dublin Core";
pub const METADATA_SCHEMA_VERSION: &str = "1.1";

pub const ELEMENT_MODEL: &str = "model";
pub const ELEMENT_METADATA: &str = "metadata";
pub const ELEMENT_SCHEMA: &str = "schema";
pub const ELEMENT_SCHEMAVERSION: &str = "schemaversion";
pub const ELEMENT_NAME: &str = "name";
pub const ELEMENT_LABEL: &str = "label";
pub const ELEMENT_DOCUMENTATION: &str = "documentation";
pub const ELEMENT_PROPERTIES: &str = "properties";
pub const ELEMENT_PROPERTY: &str = "property";
pub const ELEMENT_VALUE: &str = "value";
pub const ELEMENT_ELEMENTS: &str = "elements";
pub const ELEMENT_ELEMENT: &str = "element";
pub const ELEMENT_RELATIONSHIPS: &str = "relationships";
pub const ELEMENT_RELATIONSHIP: &str = "relationship";
pub const ELEMENT_ORGANIZATION: &str = "organization";
pub const ELEMENT_ITEM: &str = "item";
pub const ELEMENT_PROPERTYDEFS: &str = "propertyDefinitions";
pub const ELEMENT_PROPERTYDEF: &str = "propertyDefinition";
pub const ELEMENT_VIEWS: &str = "views";
pub const ELEMENT_VIEW: &str = "view";

pub const ATTRIBUTE_IDENTIFIER: &str = "identifier";
pub const ATTRIBUTE_IDENTIFIERREF: &str = "identifierRef";
pub const ATTRIBUTE_NAME: &str = "name";
pub const ATTRIBUTE_TYPE: &str = "type";
pub const ATTRIBUTE_XSI_TYPE: &str = "xsi:type";
pub const ATTRIBUTE_SOURCE: &str = "source";
pub const ATTRIBUTE_TARGET: &str = "target";
pub const ATTRIBUTE_VIEWPOINT: &str = "viewpoint";
pub const ATTRIBUTE_LANG: &str = "xml:lang";
pub const ATTRIBUTE_SCHEMA_LOCATION: &str = "xsi:schemaLocation";

/// Value of the `type` attribute on every property definition
pub const PROPERTY_DATA_TYPE: &str = "string";

/// Qualified name of an element or attribute in a prefixed namespace
pub fn qualified(prefix: &str, local_name: &str) -> String {
    format!("{}:{}", prefix, local_name)
}

/// Name of the attribute declaring a namespace prefix (`xmlns` for the default namespace)
pub fn namespace_declaration(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => qualified("xmlns", prefix),
        None => "xmlns".to_string(),
    }
}
