//! Folder traversal for the `elements`, `relationships` and `organization` sections

use crate::export::identifier::create_id;
use crate::export::schema::*;
use crate::export::writers::ExportContext;
use crate::export::xml::XmlElement;
use crate::models::{ArchimateModel, Folder, FolderItem, FolderType};

impl ExportContext<'_> {
    /// Write the elements of the layer folders
    ///
    /// Always returns the section, even when the model has no elements.
    pub fn write_model_elements(&self, model: &ArchimateModel) -> XmlElement {
        let mut elements_element = XmlElement::new(ELEMENT_ELEMENTS);

        for folder_type in FolderType::ELEMENT_FOLDERS {
            if let Some(folder) = model.folder(folder_type) {
                for element in folder.all_items().into_iter().filter_map(FolderItem::as_element) {
                    elements_element.add_child(self.write_element(element));
                }
            }
        }

        elements_element
    }

    /// Write the relationships of the relations folder
    ///
    /// Always returns the section, even when the model has no relationships.
    pub fn write_model_relationships(&self, model: &ArchimateModel) -> XmlElement {
        let mut relationships_element = XmlElement::new(ELEMENT_RELATIONSHIPS);

        if let Some(folder) = model.folder(FolderType::Relations) {
            for relationship in folder
                .all_items()
                .into_iter()
                .filter_map(FolderItem::as_relationship)
            {
                relationships_element.add_child(self.write_relationship(relationship));
            }
        }

        relationships_element
    }

    /// Write the folder tree as nested `item` references
    pub fn write_organization(&self, model: &ArchimateModel) -> XmlElement {
        let mut organization_element = XmlElement::new(ELEMENT_ORGANIZATION);

        for folder in &model.folders {
            if let Some(item) = self.write_folder(folder) {
                organization_element.add_child(item);
            }
        }

        organization_element
    }

    /// Write one folder of the organization tree, `None` for an empty folder
    ///
    /// Sub-folders come before the references to the folder's own items.
    pub fn write_folder(&self, folder: &Folder) -> Option<XmlElement> {
        if folder.is_empty() {
            return None;
        }

        let mut item_folder = XmlElement::new(ELEMENT_ITEM);
        item_folder.add_child(self.text_element(ELEMENT_LABEL, &folder.name));
        if let Some(documentation) =
            self.optional_text_element(ELEMENT_DOCUMENTATION, folder.documentation.as_deref())
        {
            item_folder.add_child(documentation);
        }

        for sub_folder in &folder.folders {
            if let Some(item) = self.write_folder(sub_folder) {
                item_folder.add_child(item);
            }
        }

        for object in &folder.items {
            item_folder
                .add_child(XmlElement::new(ELEMENT_ITEM))
                .set_attribute(ATTRIBUTE_IDENTIFIERREF, create_id(object));
        }

        Some(item_folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::config::ExportOptions;
    use crate::export::property_defs::PropertyDefinitions;
    use crate::export::type_mapper::ArchimateTypeMapper;
    use crate::models::{Element, ElementKind, Relationship, RelationshipKind};

    fn element(id: &str, kind: ElementKind) -> FolderItem {
        Element::with_id(id, kind, id).into()
    }

    fn identifiers(section: &XmlElement) -> Vec<&str> {
        section
            .children()
            .iter()
            .filter_map(|c| c.attribute("identifier"))
            .collect()
    }

    #[test]
    fn test_elements_follow_layer_then_folder_order() {
        let mut model = ArchimateModel::new("Order");
        let application = model.folder_mut(FolderType::Application).unwrap();
        application.items.push(element("app1", ElementKind::ApplicationComponent));
        let business = model.folder_mut(FolderType::Business).unwrap();
        let mut sub = Folder::new("Sub", FolderType::User);
        sub.items.push(element("bus2", ElementKind::BusinessRole));
        business.folders.push(sub);
        business.items.push(element("bus1", ElementKind::BusinessActor));
        let other = model.folder_mut(FolderType::Connectors).unwrap();
        other.items.push(element("loc1", ElementKind::Location));

        let options = ExportOptions::new();
        let definitions = PropertyDefinitions::default();
        let context = ExportContext::new(&options, &definitions, &ArchimateTypeMapper);
        let section = context.write_model_elements(&model);

        assert_eq!(identifiers(&section), vec!["id-bus1", "id-bus2", "id-app1", "id-loc1"]);
    }

    #[test]
    fn test_sections_exist_for_empty_model() {
        let model = ArchimateModel::new("Empty");
        let options = ExportOptions::new();
        let definitions = PropertyDefinitions::default();
        let context = ExportContext::new(&options, &definitions, &ArchimateTypeMapper);

        let elements = context.write_model_elements(&model);
        let relationships = context.write_model_relationships(&model);
        assert_eq!(elements.name(), "elements");
        assert!(elements.children().is_empty());
        assert_eq!(relationships.name(), "relationships");
        assert!(relationships.children().is_empty());
        assert!(context.write_organization(&model).children().is_empty());
    }

    #[test]
    fn test_relationships_only_from_relations_folder() {
        let mut model = ArchimateModel::new("Rels");
        model.add_relationship(Relationship::with_id(
            "r1",
            RelationshipKind::Flow,
            "a",
            "b",
        ));
        // A relationship misplaced in a layer folder is not written as an element either
        model
            .folder_mut(FolderType::Business)
            .unwrap()
            .items
            .push(Relationship::with_id("r2", RelationshipKind::Flow, "a", "b").into());

        let options = ExportOptions::new();
        let definitions = PropertyDefinitions::default();
        let context = ExportContext::new(&options, &definitions, &ArchimateTypeMapper);

        assert_eq!(identifiers(&context.write_model_relationships(&model)), vec!["id-r1"]);
        assert!(context.write_model_elements(&model).children().is_empty());
    }

    #[test]
    fn test_organization_item_structure() {
        let mut root = Folder::new("Business", FolderType::Business);
        root.documentation = Some("Business layer".to_string());
        root.items.push(element("a", ElementKind::BusinessActor));
        let mut sub = Folder::new("Actors", FolderType::User);
        sub.items.push(element("b", ElementKind::BusinessActor));
        sub.folders.push(Folder::new("Empty", FolderType::User));
        root.folders.push(sub);

        let options = ExportOptions::new();
        let definitions = PropertyDefinitions::default();
        let context = ExportContext::new(&options, &definitions, &ArchimateTypeMapper);
        let item = context.write_folder(&root).unwrap();

        let names: Vec<&str> = item.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["label", "documentation", "item", "item"]);
        let sub_item = &item.children()[2];
        assert_eq!(sub_item.child("label").and_then(|l| l.text()), Some("Actors"));
        // Empty sub-folder is dropped, only the reference remains
        assert_eq!(sub_item.children().len(), 2);
        assert_eq!(sub_item.children()[1].attribute("identifierRef"), Some("id-b"));
        assert_eq!(item.children()[3].attribute("identifierRef"), Some("id-a"));
        assert!(item.children()[3].children().is_empty());
    }

    #[test]
    fn test_organization_label_written_even_when_empty() {
        let mut folder = Folder::new("", FolderType::User);
        folder.items.push(element("a", ElementKind::Goal));

        let options = ExportOptions::new().with_language_code("en");
        let definitions = PropertyDefinitions::default();
        let context = ExportContext::new(&options, &definitions, &ArchimateTypeMapper);
        let item = context.write_folder(&folder).unwrap();

        let label = item.child("label").unwrap();
        assert_eq!(label.text(), Some(""));
        assert_eq!(label.attribute("xml:lang"), Some("en"));
    }
}
