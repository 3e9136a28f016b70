//! Object/XML mapping.
//!
//! Each model declares its root tag and an ordered field list: scalar
//! fields with their coercion, nested has-one/has-many models, and
//! optional save/load transforms. [`to_xml`] and [`from_xml`] walk those
//! declarations.
//!
//! Models that share most of their shape declare the shared fields once as
//! a [`FieldGroup`] and compose groups in order.
//!
//! ```
//! use invoicexpress::models::Tax;
//! use invoicexpress::xml::{from_xml, to_xml};
//! use rust_decimal::Decimal;
//!
//! let tax = Tax {
//!     name: Some("IVA23".into()),
//!     value: Some(Decimal::new(23, 0)),
//!     ..Tax::default()
//! };
//! let xml = to_xml(&tax).unwrap();
//! assert!(xml.contains("<name>IVA23</name>"));
//! assert_eq!(from_xml::<Tax>(&xml).unwrap(), tax);
//! ```

mod node;
mod scalar;
pub mod transform;
mod writer;

pub use node::{FieldReader, XmlElement};
pub use scalar::XmlScalar;
pub use transform::{DATE_FORMAT, DATE_TIME_FORMAT};
pub use writer::XmlWriter;

use crate::core::{InvoicexpressError, Result};

/// A model with a root tag and a declared field list.
pub trait XmlModel: Sized {
    /// Model name used in mapping errors.
    const NAME: &'static str;

    /// Root tag this instance serializes under.
    fn tag(&self) -> &'static str;

    /// Whether an element with this tag can be read as this model.
    fn accepts_tag(tag: &str) -> bool;

    /// Attributes on the root element.
    fn attributes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Write the declared fields, in declaration order.
    fn write_fields(&self, w: &mut XmlWriter) -> Result<()>;

    /// Read the declared fields from the model's element.
    fn read_fields(r: &FieldReader<'_>) -> Result<Self>;
}

/// A reusable set of fields that models include by composition.
pub trait FieldGroup: Sized {
    fn write_fields(&self, w: &mut XmlWriter) -> Result<()>;

    fn read_fields(r: &FieldReader<'_>) -> Result<Self>;
}

/// Serialize a model into an XML document.
pub fn to_xml<M: XmlModel>(model: &M) -> Result<String> {
    let mut w = XmlWriter::new()?;
    w.model(model)?;
    w.into_string()
}

/// Parse an XML document into a model.
///
/// Fails with a mapping error when the root tag is not one the model
/// accepts.
pub fn from_xml<M: XmlModel>(xml: &str) -> Result<M> {
    let root = XmlElement::parse(xml)?;
    from_element(&root)
}

/// Map an already parsed element onto a model.
pub fn from_element<M: XmlModel>(root: &XmlElement) -> Result<M> {
    if !M::accepts_tag(&root.name) {
        return Err(InvoicexpressError::mapping(
            M::NAME,
            root.name.clone(),
            format!("unexpected root element <{}>", root.name),
        ));
    }
    M::read_fields(&FieldReader::new(root, M::NAME))
}
