use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::xml::{FieldReader, XmlModel, XmlWriter};

/// A customer of the account.
///
/// Documents reference clients by name; an unknown name creates a new
/// client on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Account-internal client code.
    pub code: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Tax identification number (NIF).
    pub fiscal_id: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub preferred_contact: Option<PreferredContact>,
    pub observations: Option<String>,
    /// Document delivery preference as defined by the API.
    pub send_options: Option<i32>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn fiscal_id(mut self, fiscal_id: impl Into<String>) -> Self {
        self.fiscal_id = Some(fiscal_id.into());
        self
    }
}

impl XmlModel for Client {
    const NAME: &'static str = "client";

    fn tag(&self) -> &'static str {
        "client"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "client"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("id", &self.id)?
            .field("name", &self.name)?
            .field("code", &self.code)?
            .field("email", &self.email)?
            .field("address", &self.address)?
            .field("postal_code", &self.postal_code)?
            .field("country", &self.country)?
            .field("fiscal_id", &self.fiscal_id)?
            .field("website", &self.website)?
            .field("phone", &self.phone)?
            .field("fax", &self.fax)?
            .has_one(&self.preferred_contact)?
            .field("observations", &self.observations)?
            .field("send_options", &self.send_options)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.field("id")?,
            name: r.field("name")?,
            code: r.field("code")?,
            email: r.field("email")?,
            address: r.field("address")?,
            postal_code: r.field("postal_code")?,
            country: r.field("country")?,
            fiscal_id: r.field("fiscal_id")?,
            website: r.field("website")?,
            phone: r.field("phone")?,
            fax: r.field("fax")?,
            preferred_contact: r.has_one()?,
            observations: r.field("observations")?,
            send_options: r.field("send_options")?,
        })
    }
}

/// Contact person at a client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreferredContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl XmlModel for PreferredContact {
    const NAME: &'static str = "preferred_contact";

    fn tag(&self) -> &'static str {
        "preferred_contact"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "preferred_contact"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("name", &self.name)?
            .field("email", &self.email)?
            .field("phone", &self.phone)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            name: r.field("name")?,
            email: r.field("email")?,
            phone: r.field("phone")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::from_xml;

    #[test]
    fn parses_client_with_contact() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
  <id>4411</id>
  <name>Transportes Lda</name>
  <code>C-001</code>
  <fiscal_id>508025338</fiscal_id>
  <preferred_contact>
    <name>Ana</name>
    <email>ana@example.pt</email>
  </preferred_contact>
  <send_options>1</send_options>
</client>"#;
        let client = from_xml::<Client>(xml).unwrap();
        assert_eq!(client.id, Some(4411));
        assert_eq!(client.fiscal_id.as_deref(), Some("508025338"));
        let contact = client.preferred_contact.unwrap();
        assert_eq!(contact.name.as_deref(), Some("Ana"));
        assert_eq!(contact.phone, None);
        assert_eq!(client.send_options, Some(1));
    }

    #[test]
    fn contact_name_does_not_leak_into_client_name() {
        let xml = "<client><preferred_contact><name>Ana</name></preferred_contact></client>";
        let client = from_xml::<Client>(xml).unwrap();
        assert_eq!(client.name, None);
    }
}
