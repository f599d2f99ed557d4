//! XML validation utilities
//!
//! Checks that exported documents are well-formed. This is not schema
//! validation; use an external validator against the exchange XSD for that.

use crate::export::xml::is_xml_char;
use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Check that XML content is well-formed
///
/// # Arguments
///
/// * `xml_content` - The XML content to check
///
/// # Returns
///
/// The name of the root element.
pub fn validate_output_well_formed(xml_content: &str) -> Result<String> {
    if !xml_content.trim_start().starts_with("<?xml") {
        bail!("Invalid XML: missing XML declaration");
    }

    if let Some((position, c)) = xml_content.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        bail!(
            "Invalid XML: character U+{:04X} not allowed at position {}",
            u32::from(c),
            position
        );
    }

    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = true;

    let mut root = None;
    let mut depth = 0usize;
    loop {
        let event = reader.read_event().with_context(|| {
            format!("XML parsing error at position {}", reader.buffer_position())
        })?;
        match &event {
            Event::Start(start) | Event::Empty(start) if depth == 0 => {
                if root.is_some() {
                    bail!("Invalid XML: more than one root element");
                }
                root = Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        bail!("Invalid XML: unclosed elements at end of document");
    }
    root.context("Invalid XML: no root element")
}
