use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::xml::{FieldReader, XmlModel, XmlWriter, transform};

/// Email sent with a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    pub client: Option<MessageClient>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl Message {
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            client: Some(MessageClient {
                email: Some(email.into()),
                save: None,
            }),
            subject: Some(subject.into()),
            body: Some(body.into()),
        }
    }

    /// Also store the recipient address on the client record.
    pub fn save_email(mut self, save: bool) -> Self {
        if let Some(client) = self.client.as_mut() {
            client.save = Some(save);
        }
        self
    }
}

impl XmlModel for Message {
    const NAME: &'static str = "message";

    fn tag(&self) -> &'static str {
        "message"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "message"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.has_one(&self.client)?
            .field("subject", &self.subject)?
            .field("body", &self.body)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            client: r.has_one()?,
            subject: r.field("subject")?,
            body: r.field("body")?,
        })
    }
}

/// Recipient block of a [`Message`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageClient {
    pub email: Option<String>,
    pub save: Option<bool>,
}

impl XmlModel for MessageClient {
    const NAME: &'static str = "message client";

    fn tag(&self) -> &'static str {
        "client"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "client"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("email", &self.email)?
            .field_with("save", &self.save, transform::save_flag)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            email: r.field("email")?,
            save: r.field_with("save", transform::load_flag)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::to_xml;

    #[test]
    fn message_wire_shape() {
        let message = Message::new("ops@example.pt", "Guia de transporte", "Segue em anexo.")
            .save_email(false);
        let xml = to_xml(&message).unwrap();
        assert!(xml.contains("<message>"));
        assert!(xml.contains("<client>"));
        assert!(xml.contains("<email>ops@example.pt</email>"));
        assert!(xml.contains("<save>0</save>"));
        assert!(xml.find("</client>").unwrap() < xml.find("<subject>").unwrap());
    }
}
