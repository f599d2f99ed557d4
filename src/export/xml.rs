//! Minimal XML document tree
//!
//! The exporter assembles the whole document in memory first and serializes it
//! in one go with `quick-xml`. Names are stored qualified (`xsi:type`, `dc:title`);
//! namespace declarations are ordinary attributes on the root element.

use crate::export::ExportError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// An XML element with attributes, optional text and child elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing any previous value of the same name
    ///
    /// Attributes keep the order in which they were first set. Characters XML 1.0
    /// does not allow are removed from the value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let value = strip_invalid_chars(value.into());
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Set the text content, without characters XML 1.0 does not allow
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(strip_invalid_chars(text.into()));
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Append a child element and return a reference to it
    pub fn add_child(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// This element and all of its descendants, in document order
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut all = vec![self];
        for child in &self.children {
            all.extend(child.descendants());
        }
        all
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), ExportError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        if self.children.is_empty() && text.is_none() {
            return writer.write_event(Event::Empty(start)).map_err(io_error);
        }

        writer.write_event(Event::Start(start)).map_err(io_error)?;
        if let Some(text) = text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(io_error)?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(io_error)
    }
}

/// True if `c` matches the XML 1.0 `Char` production
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

fn strip_invalid_chars(text: String) -> String {
    if text.chars().all(is_xml_char) {
        return text;
    }
    text.chars().filter(|c| is_xml_char(*c)).collect()
}

/// True if `name` can be used as the local part of an element name
///
/// Accepts an XML `NCName`: a letter or `_` followed by letters, digits, `_`, `-` or `.`.
pub fn is_local_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// A complete XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }

    /// Serialize the document with an XML declaration and two-space indentation
    pub fn write_to<W: Write>(&self, out: W) -> Result<(), ExportError> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(io_error)?;
        self.root.write(&mut writer)?;
        writer.into_inner().flush().map_err(io_error)
    }

    /// Serialize the document to a string
    pub fn to_xml_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            ExportError::SerializationError(format!("Output is not valid UTF-8: {}", e))
        })
    }
}

fn io_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::IoError(format!("Failed to write XML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_existing_value() {
        let mut element = XmlElement::new("element");
        element.set_attribute("identifier", "id-1");
        element.set_attribute("xsi:type", "BusinessActor");
        element.set_attribute("identifier", "id-2");

        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(
            attributes,
            vec![("identifier", "id-2"), ("xsi:type", "BusinessActor")]
        );
    }

    #[test]
    fn test_serializes_nested_elements_with_escaping() {
        let mut root = XmlElement::new("model");
        root.set_attribute("xmlns", "urn:test");
        root.add_child(XmlElement::new("name"))
            .set_text("Sales & Marketing <EMEA>");
        root.add_child(XmlElement::new("elements"));

        let xml = XmlDocument::new(root).to_xml_string().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<model xmlns=\"urn:test\">"));
        assert!(xml.contains("<name>Sales &amp; Marketing &lt;EMEA&gt;</name>"));
        assert!(xml.contains("<elements/>"));
        assert!(xml.trim_end().ends_with("</model>"));
    }

    #[test]
    fn test_empty_text_is_written_as_empty_element() {
        let mut label = XmlElement::new("label");
        label.set_attribute("xml:lang", "en").set_text("");
        let xml = XmlDocument::new(label).to_xml_string().unwrap();
        assert!(xml.contains("<label xml:lang=\"en\"/>"));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut root = XmlElement::new("a");
        let b = root.add_child(XmlElement::new("b"));
        b.add_child(XmlElement::new("c"));
        root.add_child(XmlElement::new("d"));

        let names: Vec<&str> = root.descendants().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(root.children_named("b").count(), 1);
        assert!(root.child("c").is_none());
    }

    #[test]
    fn test_control_characters_are_removed() {
        let mut label = XmlElement::new("label");
        label
            .set_attribute("name", "a\u{1b}b")
            .set_text("bad\u{1}name\tok\u{FFFE}");
        assert_eq!(label.text(), Some("badname\tok"));
        assert_eq!(label.attribute("name"), Some("ab"));

        let xml = XmlDocument::new(label).to_xml_string().unwrap();
        assert!(xml.chars().all(is_xml_char));
    }

    #[test]
    fn test_local_names() {
        assert!(is_local_name("title"));
        assert!(is_local_name("_date.created-2"));
        assert!(!is_local_name("my title"));
        assert!(!is_local_name("1title"));
        assert!(!is_local_name("dc:title"));
        assert!(!is_local_name(""));
    }
}
