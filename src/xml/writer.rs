use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::XmlModel;
use super::scalar::XmlScalar;
use crate::core::{InvoicexpressError, Result};

fn xml_io(e: std::io::Error) -> InvoicexpressError {
    InvoicexpressError::Xml(format!("XML write error: {e}"))
}

/// Event writer that model definitions declare their fields against.
///
/// Absent (`None`) fields are skipped, so only what the caller set goes on
/// the wire.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| InvoicexpressError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self> {
        self.start_element_with_attrs(name, &[])?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Emit a scalar field using the type's own coercion.
    pub fn field<T: XmlScalar>(&mut self, name: &str, value: &Option<T>) -> Result<&mut Self> {
        match value {
            Some(v) => self.text_element(name, &v.to_xml()),
            None => Ok(self),
        }
    }

    /// Emit a field through an explicit save transform.
    pub fn field_with<T>(
        &mut self,
        name: &str,
        value: &Option<T>,
        on_save: fn(&T) -> String,
    ) -> Result<&mut Self> {
        match value {
            Some(v) => self.text_element(name, &on_save(v)),
            None => Ok(self),
        }
    }

    /// Emit a nested model (has-one association).
    pub fn has_one<M: XmlModel>(&mut self, value: &Option<M>) -> Result<&mut Self> {
        if let Some(model) = value {
            self.model(model)?;
        }
        Ok(self)
    }

    /// Emit each model of a has-many association in order.
    pub fn has_many<M: XmlModel>(&mut self, values: &[M]) -> Result<&mut Self> {
        for model in values {
            self.model(model)?;
        }
        Ok(self)
    }

    /// Emit a model as an element: its tag, attributes, then its fields.
    pub fn model<M: XmlModel>(&mut self, model: &M) -> Result<&mut Self> {
        let tag = model.tag();
        let attrs = model.attributes();
        let attr_refs: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.start_element_with_attrs(tag, &attr_refs)?;
        model.write_fields(self)?;
        self.end_element(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let mut w = XmlWriter::new().unwrap();
        w.text_element("name", "Tom & Jerry <Lda>").unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.contains("<name>Tom &amp; Jerry &lt;Lda&gt;</name>"));
    }

    #[test]
    fn absent_fields_are_skipped() {
        let mut w = XmlWriter::new().unwrap();
        w.start_element_with_attrs("root", &[]).unwrap();
        w.field::<String>("missing", &None).unwrap();
        w.field("present", &Some(3_i64)).unwrap();
        w.end_element("root").unwrap();
        let xml = w.into_string().unwrap();
        assert!(!xml.contains("missing"));
        assert!(xml.contains("<present>3</present>"));
    }
}
