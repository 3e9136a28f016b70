use rust_decimal::Decimal;
use std::str::FromStr;

/// Scalar types a model field can be coerced to and from.
pub trait XmlScalar: Sized {
    /// Type name used in coercion error messages.
    const KIND: &'static str;

    /// Whether blank element text is a value rather than an absent field.
    const KEEPS_BLANK: bool = false;

    fn to_xml(&self) -> String;

    fn from_xml(text: &str) -> Result<Self, String>;
}

impl XmlScalar for String {
    const KIND: &'static str = "string";
    const KEEPS_BLANK: bool = true;

    fn to_xml(&self) -> String {
        self.clone()
    }

    fn from_xml(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

macro_rules! integer_scalar {
    ($($ty:ty),*) => {$(
        impl XmlScalar for $ty {
            const KIND: &'static str = "integer";

            fn to_xml(&self) -> String {
                self.to_string()
            }

            fn from_xml(text: &str) -> Result<Self, String> {
                text.trim().parse().map_err(|e| format!("{e}"))
            }
        }
    )*};
}

integer_scalar!(i32, i64, u32, u64);

impl XmlScalar for Decimal {
    const KIND: &'static str = "decimal";

    fn to_xml(&self) -> String {
        self.to_string()
    }

    fn from_xml(text: &str) -> Result<Self, String> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|e| e.to_string())
    }
}

impl XmlScalar for bool {
    const KIND: &'static str = "boolean";

    fn to_xml(&self) -> String {
        self.to_string()
    }

    fn from_xml(text: &str) -> Result<Self, String> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err("expected true, false, 1 or 0".to_string()),
        }
    }
}
