use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::address::Address;
use super::client::Client;
use super::guide::{BaseGuide, Guide, GuideKind};
use super::item::Item;

/// Builder for guides sent to the create endpoints.
///
/// Only base fields can be set; the read-only totals and status are left to
/// the server. No local validation is done, the API reports problems with a
/// 422 response.
///
/// ```
/// use chrono::NaiveDate;
/// use invoicexpress::models::*;
/// use rust_decimal_macros::dec;
///
/// let guide = GuideBuilder::transport(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .loaded_at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(8, 30, 0).unwrap())
///     .license_plate("AA-00-BB")
///     .address_from(Address::new("Rua A 1", "Lisboa", "1000-001", "Portugal"))
///     .address_to(Address::new("Rua B 2", "Porto", "4000-002", "Portugal"))
///     .client(Client::new("Transportes Lda").fiscal_id("508025338"))
///     .add_item(Item::new("Pallet", dec!(10), dec!(3)).tax("IVA23"))
///     .build();
///
/// assert_eq!(guide.kind, GuideKind::Transport);
/// assert_eq!(guide.base.items.len(), 1);
/// ```
pub struct GuideBuilder {
    kind: GuideKind,
    base: BaseGuide,
}

impl GuideBuilder {
    pub fn new(kind: GuideKind, date: NaiveDate) -> Self {
        Self {
            kind,
            base: BaseGuide {
                date: Some(date),
                ..BaseGuide::default()
            },
        }
    }

    pub fn transport(date: NaiveDate) -> Self {
        Self::new(GuideKind::Transport, date)
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.base.due_date = Some(date);
        self
    }

    pub fn loaded_at(mut self, at: NaiveDateTime) -> Self {
        self.base.loaded_at = Some(at);
        self
    }

    pub fn license_plate(mut self, plate: impl Into<String>) -> Self {
        self.base.license_plate = Some(plate.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.base.reference = Some(reference.into());
        self
    }

    pub fn observations(mut self, text: impl Into<String>) -> Self {
        self.base.observations = Some(text.into());
        self
    }

    pub fn retention(mut self, percent: Decimal) -> Self {
        self.base.retention = Some(percent);
        self
    }

    pub fn tax_exemption(mut self, code: impl Into<String>) -> Self {
        self.base.tax_exemption = Some(code.into());
        self
    }

    pub fn sequence_id(mut self, id: u64) -> Self {
        self.base.sequence_id = Some(id);
        self
    }

    pub fn address_from(mut self, address: Address) -> Self {
        self.base.address_from = Some(address.into());
        self
    }

    pub fn address_to(mut self, address: Address) -> Self {
        self.base.address_to = Some(address.into());
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.base.client = Some(client);
        self
    }

    pub fn add_item(mut self, item: Item) -> Self {
        self.base.items.push(item);
        self
    }

    pub fn build(self) -> Guide {
        Guide::new(self.kind, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn builder_keeps_item_order() {
        let guide = GuideBuilder::new(GuideKind::Devolution, date())
            .add_item(Item::new("A", dec!(1), dec!(1)))
            .add_item(Item::new("B", dec!(2), dec!(1)))
            .build();
        assert_eq!(guide.kind, GuideKind::Devolution);
        let names: Vec<_> = guide
            .base
            .items
            .iter()
            .filter_map(|i| i.name.as_deref())
            .collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(guide.base.date, Some(date()));
    }

    #[test]
    fn builder_leaves_extra_fields_empty() {
        let guide = GuideBuilder::transport(date()).retention(dec!(25)).build();
        assert_eq!(guide.extra.status, None);
        assert_eq!(guide.base.retention, Some(dec!(25)));
    }
}
