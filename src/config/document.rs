//! Owned XML tree for engine configuration files.
//!
//! The tree keeps what include resolution and strategy extraction need:
//! qualified and local names, the resolved namespace of each element,
//! attributes in document order, and child elements interleaved with text.

use crate::error::{Result, StructureError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `xi:include`
    pub name: String,
    pub local_name: String,
    /// Resolved namespace URI, `None` when the element is unqualified
    pub namespace: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            local_name: name.to_string(),
            namespace: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of an unprefixed attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local_name == local_name
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first, document-order walk starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let children: Vec<&Element> = current.child_elements().collect();
        self.stack.extend(children.into_iter().rev());
        Some(current)
    }
}

/// Parse a complete document and return its root element.
///
/// `file` is only used to label errors.
pub fn parse_document(content: &str, file: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|e| parse_error(file, position, e.to_string()))?;

        match event {
            Event::Start(start) => {
                let element = element_from_start(&start, resolved, file, position)?;
                if stack.is_empty() && root.is_some() {
                    return Err(parse_error(file, position, "multiple root elements"));
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start, resolved, file, position)?;
                attach(&mut stack, &mut root, element, file, position)?;
            }
            Event::End(end) => {
                let Some(element) = stack.pop() else {
                    return Err(parse_error(
                        file,
                        position,
                        format!(
                            "unexpected closing tag '{}'",
                            String::from_utf8_lossy(end.name().as_ref())
                        ),
                    ));
                };
                attach(&mut stack, &mut root, element, file, position)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| parse_error(file, position, e.to_string()))?;
                push_text(&mut stack, &text, file, position)?;
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                push_text(&mut stack, &text, file, position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and DOCTYPE
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(parse_error(
            file,
            reader.buffer_position(),
            format!("unclosed element '{}'", open.name),
        ));
    }

    root.ok_or_else(|| parse_error(file, reader.buffer_position(), "no root element"))
}

fn element_from_start(
    start: &BytesStart<'_>,
    resolved: ResolveResult<'_>,
    file: &str,
    position: usize,
) -> Result<Element> {
    let namespace = match resolved {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.0).into_owned()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(parse_error(
                file,
                position,
                format!(
                    "unbound namespace prefix '{}'",
                    String::from_utf8_lossy(&prefix)
                ),
            ));
        }
    };

    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    if !is_xml_name(&name) {
        return Err(parse_error(
            file,
            position,
            format!("invalid element name '{}'", name),
        ));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| parse_error(file, position, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        if !is_xml_name(&key) {
            return Err(parse_error(
                file,
                position,
                format!("invalid attribute name '{}' on '{}'", key, name),
            ));
        }
        if attr.value.contains(&b'<') {
            return Err(parse_error(
                file,
                position,
                format!("'<' not allowed in value of attribute '{}' on '{}'", key, name),
            ));
        }
        let value = attr
            .unescape_value()
            .map_err(|e| parse_error(file, position, e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        local_name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        namespace,
        attributes,
        children: Vec::new(),
    })
}

/// XML 1.0 `Name` production (colons allowed, so qualified names pass).
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    file: &str,
    position: usize,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }

    if root.is_some() {
        return Err(parse_error(file, position, "multiple root elements"));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str, file: &str, position: usize) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(parse_error(
            file,
            position,
            "text content outside of the root element",
        )),
    }
}

fn parse_error(file: &str, position: usize, message: impl Into<String>) -> StructureError {
    StructureError::ParseError {
        file: file.to_string(),
        position,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_order() {
        let root = parse_document(
            r#"<?xml version="1.0"?>
<!-- engine -->
<configuration version="1.0">
    <ProductStrategies>
        <ProductStrategy name="STRATEGY_PHONE"/>
        <ProductStrategy name="STRATEGY_MEDIA"></ProductStrategy>
    </ProductStrategies>
</configuration>"#,
            "engine.xml",
        )
        .expect("document should parse");

        assert_eq!(root.name, "configuration");
        assert_eq!(root.attribute("version"), Some("1.0"));
        let names: Vec<&str> = root
            .descendants()
            .filter_map(|e| e.attribute("name"))
            .collect();
        assert_eq!(names, vec!["STRATEGY_PHONE", "STRATEGY_MEDIA"]);
    }

    #[test]
    fn descendants_start_with_root_and_are_depth_first() {
        let root = parse_document("<a><b><c/></b><d/></a>", "t.xml").unwrap();
        let order: Vec<&str> = root.descendants().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn resolves_xinclude_namespace() {
        let root = parse_document(
            r#"<root xmlns:xi="http://www.w3.org/2001/XInclude"><xi:include href="a.xml"/></root>"#,
            "t.xml",
        )
        .unwrap();
        let include = root.child_elements().next().unwrap();
        assert_eq!(include.name, "xi:include");
        assert!(include.is(Some("http://www.w3.org/2001/XInclude"), "include"));
        assert_eq!(include.attribute("href"), Some("a.xml"));
    }

    #[test]
    fn unescapes_attribute_values() {
        let root = parse_document(r#"<a name="x &amp; y"/>"#, "t.xml").unwrap();
        assert_eq!(root.attribute("name"), Some("x & y"));
    }

    #[test]
    fn rejects_mismatched_end_tag() {
        let err = parse_document("<a><b></a></b>", "bad.xml").expect_err("should fail");
        assert!(matches!(err, StructureError::ParseError { .. }));
        assert!(err.to_string().contains("bad.xml"));
    }

    #[test]
    fn rejects_unclosed_element() {
        let err = parse_document("<a><b/>", "bad.xml").expect_err("should fail");
        assert!(matches!(err, StructureError::ParseError { .. }));
    }

    #[test]
    fn rejects_multiple_roots() {
        let err = parse_document("<a/><b/>", "bad.xml").expect_err("should fail");
        assert!(err.to_string().contains("multiple root elements"));
    }

    #[test]
    fn rejects_empty_document() {
        let err = parse_document("  \n", "empty.xml").expect_err("should fail");
        assert!(err.to_string().contains("no root element"));
    }

    #[test]
    fn rejects_raw_less_than_in_attribute_value() {
        let err = parse_document(
            r#"<configuration><ProductStrategy name="STRATEGY_<MEDIA"/></configuration>"#,
            "bad.xml",
        )
        .expect_err("raw '<' in an attribute value is not well-formed");
        assert!(matches!(err, StructureError::ParseError { .. }));
        assert!(err.to_string().contains("'<' not allowed"));
    }

    #[test]
    fn rejects_element_name_starting_with_digit() {
        let err = parse_document(
            r#"<configuration><1bad/><ProductStrategy name="STRATEGY_MEDIA"/></configuration>"#,
            "bad.xml",
        )
        .expect_err("'1bad' is not an XML name");
        assert!(matches!(err, StructureError::ParseError { .. }));
    }

    #[test]
    fn rejects_invalid_attribute_name() {
        let err = parse_document(r#"<a -x="1"/>"#, "bad.xml").expect_err("should fail");
        assert!(matches!(err, StructureError::ParseError { .. }));
    }

    #[test]
    fn xml_name_rules() {
        assert!(is_xml_name("ProductStrategy"));
        assert!(is_xml_name("xi:include"));
        assert!(is_xml_name("_a-b.c1"));
        assert!(is_xml_name("\u{E9}t\u{E9}"));
        assert!(!is_xml_name("1bad"));
        assert!(!is_xml_name("-x"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("a b"));
    }

    #[test]
    fn rejects_text_outside_root() {
        let err = parse_document("<a/>trailing", "bad.xml").expect_err("should fail");
        assert!(err.to_string().contains("outside of the root"));
    }
}
