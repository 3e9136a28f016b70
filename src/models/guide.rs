use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::{AddressFrom, AddressTo};
use super::client::Client;
use super::item::{Item, Items};
use crate::core::Result;
use crate::xml::{FieldGroup, FieldReader, XmlModel, XmlWriter, transform};

/// Kind of guide. Decides the XML root tag and the API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GuideKind {
    /// Transport guide (`<transport>`, `/transports`).
    #[default]
    Transport,
    /// Shipping guide (`<shipping>`, `/shippings`).
    Shipping,
    /// Return guide (`<devolution>`, `/devolutions`).
    Devolution,
}

impl GuideKind {
    pub const ALL: [GuideKind; 3] = [Self::Transport, Self::Shipping, Self::Devolution];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Shipping => "shipping",
            Self::Devolution => "devolution",
        }
    }

    /// Collection path segment (`transports`, ...).
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Transport => "transports",
            Self::Shipping => "shippings",
            Self::Devolution => "devolutions",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "transport guide",
            Self::Shipping => "shipping guide",
            Self::Devolution => "devolution guide",
        }
    }
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields every guide carries; the only ones sent on create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseGuide {
    pub id: Option<u64>,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// When the goods were loaded.
    pub loaded_at: Option<NaiveDateTime>,
    pub license_plate: Option<String>,
    pub reference: Option<String>,
    pub observations: Option<String>,
    /// Withholding tax in percent.
    pub retention: Option<Decimal>,
    /// VAT exemption reason code, required for exempt lines.
    pub tax_exemption: Option<String>,
    /// Document sequence; the account default when absent.
    pub sequence_id: Option<u64>,
    pub address_from: Option<AddressFrom>,
    pub address_to: Option<AddressTo>,
    pub client: Option<Client>,
    pub items: Vec<Item>,
}

/// Save transform for the item list: wrap it in the `<items>` container.
fn wrap_items(items: &[Item]) -> Items {
    Items::new(items.to_vec())
}

impl FieldGroup for BaseGuide {
    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("id", &self.id)?
            .field_with("date", &self.date, transform::save_date)?
            .field_with("due_date", &self.due_date, transform::save_date)?
            .field_with("loaded_at", &self.loaded_at, transform::save_date_time)?
            .field("license_plate", &self.license_plate)?
            .field("reference", &self.reference)?
            .field("observations", &self.observations)?
            .field("retention", &self.retention)?
            .field("tax_exemption", &self.tax_exemption)?
            .field("sequence_id", &self.sequence_id)?
            .has_one(&self.address_from)?
            .has_one(&self.address_to)?
            .has_one(&self.client)?
            .model(&wrap_items(&self.items))?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        let items = match r.has_one::<Items>()? {
            Some(container) => container.items,
            None => r.has_many()?,
        };
        Ok(Self {
            id: r.field("id")?,
            date: r.field_with("date", transform::load_date)?,
            due_date: r.field_with("due_date", transform::load_date)?,
            loaded_at: r.field_with("loaded_at", transform::load_date_time)?,
            license_plate: r.field("license_plate")?,
            reference: r.field("reference")?,
            observations: r.field("observations")?,
            retention: r.field("retention")?,
            tax_exemption: r.field("tax_exemption")?,
            sequence_id: r.field("sequence_id")?,
            address_from: r.has_one()?,
            address_to: r.has_one()?,
            client: r.has_one()?,
            items,
        })
    }
}

/// Read-only fields the API adds when returning a guide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtraGuide {
    /// Document state: draft, final, settled, canceled, second_copy, deleted.
    pub status: Option<String>,
    pub archived: Option<bool>,
    /// Document type as reported by the API (`<type>`).
    pub document_type: Option<String>,
    pub sequence_number: Option<String>,
    pub permalink: Option<String>,
    pub currency: Option<String>,
    pub sum: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub before_taxes: Option<Decimal>,
    pub taxes: Option<Decimal>,
    pub total: Option<Decimal>,
}

impl FieldGroup for ExtraGuide {
    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("status", &self.status)?
            .field("archived", &self.archived)?
            .field("type", &self.document_type)?
            .field("sequence_number", &self.sequence_number)?
            .field("permalink", &self.permalink)?
            .field("currency", &self.currency)?
            .field("sum", &self.sum)?
            .field("discount", &self.discount)?
            .field("before_taxes", &self.before_taxes)?
            .field("taxes", &self.taxes)?
            .field("total", &self.total)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            status: r.field("status")?,
            archived: r.field("archived")?,
            document_type: r.field("type")?,
            sequence_number: r.field("sequence_number")?,
            permalink: r.field("permalink")?,
            currency: r.field("currency")?,
            sum: r.field("sum")?,
            discount: r.field("discount")?,
            before_taxes: r.field("before_taxes")?,
            taxes: r.field("taxes")?,
            total: r.field("total")?,
        })
    }
}

/// A guide document: [`BaseGuide`] followed by [`ExtraGuide`] on the wire.
///
/// Guides built for create requests should leave `extra` empty; the API
/// fills it in on every read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Guide {
    pub kind: GuideKind,
    pub base: BaseGuide,
    pub extra: ExtraGuide,
}

/// Guide whose kind is [`GuideKind::Transport`].
pub type TransportGuide = Guide;

impl Guide {
    pub fn new(kind: GuideKind, base: BaseGuide) -> Self {
        Self {
            kind,
            base,
            extra: ExtraGuide::default(),
        }
    }

    pub fn transport(base: BaseGuide) -> Self {
        Self::new(GuideKind::Transport, base)
    }

    /// Copy of this guide with the read-only fields cleared.
    pub fn to_request(&self) -> Self {
        Self::new(self.kind, self.base.clone())
    }
}

impl XmlModel for Guide {
    const NAME: &'static str = "guide";

    fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    fn accepts_tag(tag: &str) -> bool {
        GuideKind::from_tag(tag).is_some()
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        self.base.write_fields(w)?;
        self.extra.write_fields(w)
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            kind: GuideKind::from_tag(r.tag()).unwrap_or_default(),
            base: BaseGuide::read_fields(r)?,
            extra: ExtraGuide::read_fields(r)?,
        })
    }
}

/// State-change events the API documents for guides.
///
/// | event         | from                 | to          |
/// |---------------|----------------------|-------------|
/// | `finalized`   | draft                | final       |
/// | `deleted`     | draft                | deleted     |
/// | `unsettled`   | settled              | final       |
/// | `second_copy` | final                | second copy |
/// | `canceled`    | final, second copy   | canceled    |
/// | `settled`     | final, second copy   | settled     |
///
/// The server enforces this table; the client forwards whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideTransition {
    Finalized,
    Deleted,
    Unsettled,
    SecondCopy,
    Canceled,
    Settled,
}

impl GuideTransition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finalized => "finalized",
            Self::Deleted => "deleted",
            Self::Unsettled => "unsettled",
            Self::SecondCopy => "second_copy",
            Self::Canceled => "canceled",
            Self::Settled => "settled",
        }
    }
}

impl fmt::Display for GuideTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a change-state request.
///
/// Serialized under the guide kind's own tag (`<transport>` for transport
/// guides). Canceling requires a `message` giving the reason.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideState {
    pub kind: GuideKind,
    pub state: Option<String>,
    pub message: Option<String>,
}

impl GuideState {
    /// State change to an arbitrary event name, sent as-is.
    pub fn new(kind: GuideKind, state: impl Into<String>) -> Self {
        Self {
            kind,
            state: Some(state.into()),
            message: None,
        }
    }

    pub fn transition(kind: GuideKind, transition: GuideTransition) -> Self {
        Self::new(kind, transition.as_str())
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl XmlModel for GuideState {
    const NAME: &'static str = "guide state";

    fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    fn accepts_tag(tag: &str) -> bool {
        GuideKind::from_tag(tag).is_some()
    }

    fn write_fields(&self, w: &mut XmlWriter) -> Result<()> {
        w.field("state", &self.state)?
            .field("message", &self.message)?;
        Ok(())
    }

    fn read_fields(r: &FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            kind: GuideKind::from_tag(r.tag()).unwrap_or_default(),
            state: r.field("state")?,
            message: r.field("message")?,
        })
    }
}
