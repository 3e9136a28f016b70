use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::xml::{FieldGroup, FieldReader, XmlModel, XmlWriter};

/// Postal address fields shared by both ends of a shipment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Street, number and any extra lines.
    pub detail: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    pub fn new(
        detail: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            detail: Some(detail.into()),
            city: Some(city.into()),
            postal_code: Some(postal_code.into()),
            country: Some(country.into()),
        }
    }
}

impl FieldGroup for Address {
    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("detail", &self.detail)?
            .field("city", &self.city)?
            .field("postal_code", &self.postal_code)?
            .field("country", &self.country)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            detail: r.field("detail")?,
            city: r.field("city")?,
            postal_code: r.field("postal_code")?,
            country: r.field("country")?,
        })
    }
}

/// Where the goods are loaded (`<address_from>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressFrom(pub Address);

/// Where the goods are delivered (`<address_to>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressTo(pub Address);

impl XmlModel for AddressFrom {
    const NAME: &'static str = "address_from";

    fn tag(&self) -> &'static str {
        "address_from"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "address_from"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        self.0.write_fields(w)
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Address::read_fields(r).map(Self)
    }
}

impl XmlModel for AddressTo {
    const NAME: &'static str = "address_to";

    fn tag(&self) -> &'static str {
        "address_to"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "address_to"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        self.0.write_fields(w)
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Address::read_fields(r).map(Self)
    }
}

impl From<Address> for AddressFrom {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<Address> for AddressTo {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{from_xml, to_xml};

    #[test]
    fn same_fields_different_tags() {
        let address = Address::new("Rua das Flores 12", "Porto", "4050-262", "Portugal");
        let from = to_xml(&AddressFrom(address.clone())).unwrap();
        let to = to_xml(&AddressTo(address.clone())).unwrap();
        assert!(from.contains("<address_from>"));
        assert!(to.contains("<address_to>"));
        assert_eq!(
            from.replace("address_from", "x"),
            to.replace("address_to", "x")
        );
    }

    #[test]
    fn tags_are_not_interchangeable() {
        let xml = to_xml(&AddressFrom::default()).unwrap();
        assert!(from_xml::<AddressTo>(&xml).is_err());
        assert!(from_xml::<AddressFrom>(&xml).is_ok());
    }
}
