use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::xml::{FieldReader, XmlModel, XmlWriter, transform};

/// A tax rate configured on the account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tax {
    pub id: Option<u64>,
    /// Tax name as configured in InvoiceXpress (e.g. "IVA23").
    pub name: Option<String>,
    /// Rate in percent.
    pub value: Option<Decimal>,
    pub region: Option<String>,
    /// Whether this is the account's default tax.
    pub default_tax: Option<bool>,
}

impl XmlModel for Tax {
    const NAME: &'static str = "tax";

    fn tag(&self) -> &'static str {
        "tax"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "tax"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("id", &self.id)?
            .field("name", &self.name)?
            .field("value", &self.value)?
            .field("region", &self.region)?
            .field_with("default_tax", &self.default_tax, transform::save_flag)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.field("id")?,
            name: r.field("name")?,
            value: r.field("value")?,
            region: r.field("region")?,
            default_tax: r.field_with("default_tax", transform::load_flag)?,
        })
    }
}

/// A document line item.
///
/// Items are matched by name on the server: creating a document with an
/// unknown item name creates the item, a known name updates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    /// Unit of measure (e.g. "unit", "hour").
    pub unit: Option<String>,
    /// Tax applied to the line. Unknown tax names apply no tax.
    pub tax: Option<Tax>,
    /// Discount in percent.
    pub discount: Option<Decimal>,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            unit_price: Some(unit_price),
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    /// Apply a tax by name.
    pub fn tax(mut self, name: impl Into<String>) -> Self {
        self.tax = Some(Tax {
            name: Some(name.into()),
            ..Tax::default()
        });
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount = Some(percent);
        self
    }
}

impl XmlModel for Item {
    const NAME: &'static str = "item";

    fn tag(&self) -> &'static str {
        "item"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "item"
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("id", &self.id)?
            .field("name", &self.name)?
            .field("description", &self.description)?
            .field("unit_price", &self.unit_price)?
            .field("quantity", &self.quantity)?
            .field("unit", &self.unit)?
            .has_one(&self.tax)?
            .field("discount", &self.discount)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.field("id")?,
            name: r.field("name")?,
            description: r.field("description")?,
            unit_price: r.field("unit_price")?,
            quantity: r.field("quantity")?,
            unit: r.field("unit")?,
            tax: r.has_one()?,
            discount: r.field("discount")?,
        })
    }
}

/// The `<items type="array">` container around a document's lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Items {
    pub items: Vec<Item>,
}

/// Value of the `type` attribute on every `<items>` element.
pub const ITEMS_TYPE: &str = "array";

impl Items {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl XmlModel for Items {
    const NAME: &'static str = "items";

    fn tag(&self) -> &'static str {
        "items"
    }

    fn accepts_tag(tag: &str) -> bool {
        tag == "items"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![("type", ITEMS_TYPE.to_string())]
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.has_many(&self.items)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            items: r.has_many()?,
        })
    }
}
