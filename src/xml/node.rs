use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::XmlModel;
use super::scalar::XmlScalar;
use crate::core::{InvoicexpressError, Result};

/// A parsed XML element: name, attributes, text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a whole document and return its root element.
    ///
    /// Text is kept as written. Whitespace-only text of an element with
    /// children is indentation and is dropped.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let elem = Self::from_start(e)?;
                    attach(&mut stack, &mut root, elem);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| InvoicexpressError::Xml(format!("XML text error: {e}")))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    let text = std::str::from_utf8(&raw)
                        .map_err(|e| InvoicexpressError::Xml(format!("XML UTF-8 error: {e}")))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(mut elem) = stack.pop() {
                        if !elem.children.is_empty() && elem.text.trim().is_empty() {
                            elem.text.clear();
                        }
                        attach(&mut stack, &mut root, elem);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(InvoicexpressError::Xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(InvoicexpressError::Xml(
                "XML parse error: unexpected end of document".into(),
            ));
        }
        root.ok_or_else(|| InvoicexpressError::Xml("XML parse error: no root element".into()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|e| InvoicexpressError::Xml(format!("XML UTF-8 error: {e}")))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr =
                attr.map_err(|e| InvoicexpressError::Xml(format!("XML attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.local_name().as_ref())
                .unwrap_or("")
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| InvoicexpressError::Xml(format!("XML attribute error: {e}")))?
                .to_string();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Raw text content, or `None` for `nil="true"` elements.
    pub fn value(&self) -> Option<&str> {
        if self.attribute("nil") == Some("true") {
            return None;
        }
        Some(&self.text)
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, elem: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(elem),
        None => {
            if root.is_none() {
                *root = Some(elem);
            }
        }
    }
}

/// Reads the declared fields of one model out of its element.
///
/// Elements that no field asks for are never looked at.
pub struct FieldReader<'a> {
    node: &'a XmlElement,
    model: &'static str,
}

impl<'a> FieldReader<'a> {
    pub fn new(node: &'a XmlElement, model: &'static str) -> Self {
        Self { node, model }
    }

    /// Tag of the element being read.
    pub fn tag(&self) -> &str {
        &self.node.name
    }

    pub fn element(&self) -> &'a XmlElement {
        self.node
    }

    /// Read a scalar field.
    ///
    /// Missing and `nil` elements are `None`. A blank element is `None`
    /// unless the type keeps blank text.
    pub fn field<T: XmlScalar>(&self, name: &str) -> Result<Option<T>> {
        match self.node.child(name).and_then(XmlElement::value) {
            Some(text) if T::KEEPS_BLANK || !text.trim().is_empty() => T::from_xml(text)
                .map(Some)
                .map_err(|msg| {
                    let detail = format!("invalid {} '{}': {msg}", T::KIND, text.trim());
                    InvoicexpressError::mapping(self.model, name, detail)
                }),
            _ => Ok(None),
        }
    }

    /// Read a field through an explicit load transform. Blank elements
    /// are `None`.
    pub fn field_with<T>(
        &self,
        name: &str,
        on_load: fn(&str) -> std::result::Result<T, String>,
    ) -> Result<Option<T>> {
        match self.node.child(name).and_then(XmlElement::value) {
            Some(text) if !text.trim().is_empty() => on_load(text)
                .map(Some)
                .map_err(|msg| InvoicexpressError::mapping(self.model, name, msg)),
            _ => Ok(None),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node.attribute(name).map(str::to_string)
    }

    /// First child element the nested model accepts.
    pub fn has_one<M: XmlModel>(&self) -> Result<Option<M>> {
        self.node
            .children
            .iter()
            .find(|c| M::accepts_tag(&c.name))
            .map(|c| M::read_fields(&FieldReader::new(c, M::NAME)))
            .transpose()
    }

    /// Every child element the nested model accepts, in document order.
    pub fn has_many<M: XmlModel>(&self) -> Result<Vec<M>> {
        self.node
            .children
            .iter()
            .filter(|c| M::accepts_tag(&c.name))
            .map(|c| M::read_fields(&FieldReader::new(c, M::NAME)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let root = XmlElement::parse(
            r#"<?xml version="1.0"?>
            <items type="array">
              <item><name>Box &amp; tape</name></item>
              <item><name><![CDATA[Pallet <EU>]]></name></item>
            </items>"#,
        )
        .unwrap();
        assert_eq!(root.name, "items");
        assert_eq!(root.attribute("type"), Some("array"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].child("name").unwrap().text, "Box & tape");
        assert_eq!(root.children[1].child("name").unwrap().text, "Pallet <EU>");
    }

    #[test]
    fn only_nil_elements_have_no_value() {
        let root =
            XmlElement::parse("<a><b/><c nil=\"true\"></c><d>  </d><e> x\n</e></a>").unwrap();
        assert_eq!(root.child("b").unwrap().value(), Some(""));
        assert_eq!(root.child("c").unwrap().value(), None);
        assert_eq!(root.child("d").unwrap().value(), Some("  "));
        assert_eq!(root.child("e").unwrap().value(), Some(" x\n"));
    }

    #[test]
    fn indentation_between_children_is_dropped() {
        let root = XmlElement::parse("<a>\n  <b>1</b>\n  <c>\n    <d>2</d>\n  </c>\n</a>").unwrap();
        assert_eq!(root.text, "");
        assert_eq!(root.child("c").unwrap().text, "");
        assert_eq!(root.child("c").unwrap().child("d").unwrap().text, "2");
    }

    #[test]
    fn blank_text_keeps_strings_but_not_numbers() {
        let root = XmlElement::parse(
            r#"<tax><name></name><code> A1 </code><value>  </value><nothing nil="true"/></tax>"#,
        )
        .unwrap();
        let reader = FieldReader::new(&root, "tax");
        assert_eq!(reader.field::<String>("name").unwrap(), Some(String::new()));
        assert_eq!(reader.field::<String>("code").unwrap().as_deref(), Some(" A1 "));
        assert_eq!(reader.field::<rust_decimal::Decimal>("value").unwrap(), None);
        assert_eq!(reader.field::<String>("nothing").unwrap(), None);
        assert_eq!(reader.field_with("value", crate::xml::transform::load_date).unwrap(), None);
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let err = XmlElement::parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, InvoicexpressError::Xml(_)));
    }

    #[test]
    fn truncated_document_is_an_error() {
        assert!(XmlElement::parse("<a><b>1</b>").is_err());
        assert!(XmlElement::parse("").is_err());
    }

    #[test]
    fn coercion_error_names_model_and_field() {
        let root = XmlElement::parse("<tax><value>abc</value></tax>").unwrap();
        let reader = FieldReader::new(&root, "tax");
        let err = reader.field::<rust_decimal::Decimal>("value").unwrap_err();
        match err {
            InvoicexpressError::Mapping { model, field, message } => {
                assert_eq!(model, "tax");
                assert_eq!(field, "value");
                assert!(message.starts_with("invalid decimal 'abc'"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
