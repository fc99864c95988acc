use super::StructureSettings;
use super::naming::ComponentRecord;
use crate::constants::{
    COMPONENT_TAG, COMPONENT_TYPE_SET_TAG, COMPONENT_TYPE_TAG, SCHEMA_LOCATION, XSI_NAMESPACE,
};
use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

/// Typed source of an element's attributes, in output order.
pub trait XmlAttributes {
    fn attributes(&self) -> Vec<(&str, &str)>;
}

/// Root `ComponentTypeSet` schema reference.
struct SchemaReference;

impl XmlAttributes for SchemaReference {
    fn attributes(&self) -> Vec<(&str, &str)> {
        vec![
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:noNamespaceSchemaLocation", SCHEMA_LOCATION),
        ]
    }
}

struct ComponentTypeGroup<'a> {
    name: &'a str,
}

impl XmlAttributes for ComponentTypeGroup<'_> {
    fn attributes(&self) -> Vec<(&str, &str)> {
        vec![("Name", self.name), ("Description", "")]
    }
}

impl XmlAttributes for ComponentRecord {
    fn attributes(&self) -> Vec<(&str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Type", self.component_type.as_str()),
            ("Mapping", self.mapping.as_str()),
        ]
    }
}

fn start_tag<'a, T: XmlAttributes>(tag: &'a str, source: &T) -> BytesStart<'a> {
    let mut start = BytesStart::new(tag);
    for (key, value) in source.attributes() {
        start.push_attribute((key, value));
    }
    start
}

/// Render the structure file: one `Component` per record, tab-indented,
/// newline-terminated.
pub fn render_structure(records: &[ComponentRecord], settings: &StructureSettings) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(start_tag(COMPONENT_TYPE_SET_TAG, &SchemaReference)))?;

    let group = start_tag(
        COMPONENT_TYPE_TAG,
        &ComponentTypeGroup {
            name: &settings.component_type_name,
        },
    );
    if records.is_empty() {
        writer.write_event(Event::Empty(group))?;
    } else {
        writer.write_event(Event::Start(group))?;
        for record in records {
            writer.write_event(Event::Empty(start_tag(COMPONENT_TAG, record)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(COMPONENT_TYPE_TAG)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(COMPONENT_TYPE_SET_TAG)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(names: &[&str]) -> String {
        let settings = StructureSettings::default();
        let records: Vec<ComponentRecord> = names
            .iter()
            .map(|n| ComponentRecord::from_strategy(n, &settings))
            .collect();
        String::from_utf8(render_structure(&records, &settings).unwrap()).unwrap()
    }

    #[test]
    fn renders_tab_indented_structure() {
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<ComponentTypeSet xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:noNamespaceSchemaLocation=\"Schemas/ComponentTypeSet.xsd\">\n",
            "\t<ComponentType Name=\"ProductStrategies\" Description=\"\">\n",
            "\t\t<Component Name=\"media\" Type=\"ProductStrategy\" Mapping=\"Identifier:1000,Name:STRATEGY_MEDIA\"/>\n",
            "\t\t<Component Name=\"phone\" Type=\"ProductStrategy\" Mapping=\"Identifier:1000,Name:STRATEGY_PHONE\"/>\n",
            "\t</ComponentType>\n",
            "</ComponentTypeSet>\n",
        );
        assert_eq!(render(&["STRATEGY_MEDIA", "STRATEGY_PHONE"]), expected);
    }

    #[test]
    fn empty_strategy_list_self_closes_group() {
        let out = render(&[]);
        assert!(out.contains("\t<ComponentType Name=\"ProductStrategies\" Description=\"\"/>\n"));
        assert!(!out.contains("<Component "));
        assert!(out.ends_with("</ComponentTypeSet>\n"));
    }

    #[test]
    fn duplicates_and_empty_names_pass_through() {
        let out = render(&["STRATEGY_MEDIA", "STRATEGY_MEDIA", ""]);
        assert_eq!(out.matches("<Component Name=\"media\"").count(), 2);
        assert!(out.contains("<Component Name=\"\" Type=\"ProductStrategy\" Mapping=\"Identifier:1000,Name:\"/>"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let out = render(&["A&\"B"]);
        assert!(out.contains("Name=\"a&amp;&quot;b\""));
        assert!(out.contains("Mapping=\"Identifier:1000,Name:A&amp;&quot;B\""));
    }
}
