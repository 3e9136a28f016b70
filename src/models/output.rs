use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::xml::{FieldReader, XmlModel, XmlWriter};

/// Location of a generated PDF.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Output {
    pub pdf_url: Option<String>,
}

impl XmlModel for Output {
    const NAME: &'static str = "output";

    fn tag(&self) -> &'static str {
        "output"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "output"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("pdfUrl", &self.pdf_url)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            pdf_url: r.field("pdfUrl")?,
        })
    }
}

/// Validation messages returned with a 422 response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrors {
    pub errors: Vec<String>,
}

impl XmlModel for ApiErrors {
    const NAME: &'static str = "errors";

    fn tag(&self) -> &'static str {
        "errors"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "errors"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        for error in &self.errors {
            w.text_element("error", error)?;
        }
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        let errors = r
            .element()
            .children
            .iter()
            .filter(|c| c.name == "error")
            .map(|c| c.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        Ok(Self { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::from_xml;

    #[test]
    fn reads_pdf_url() {
        let xml = r#"<output><pdfUrl>https://invoicexpress.s3.amazonaws.com/guide.pdf</pdfUrl></output>"#;
        let output = from_xml::<Output>(xml).unwrap();
        assert_eq!(
            output.pdf_url.as_deref(),
            Some("https://invoicexpress.s3.amazonaws.com/guide.pdf")
        );
    }

    #[test]
    fn reads_every_error_in_order() {
        let xml = "<errors><error>Date is invalid</error><error>Client can't be blank</error></errors>";
        let errors = from_xml::<ApiErrors>(xml).unwrap();
        assert_eq!(errors.errors, ["Date is invalid", "Client can't be blank"]);
    }
}
