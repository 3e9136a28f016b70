mod common;

use chrono::NaiveDate;
use common::TRANSPORT_GUIDE_XML;
use invoicexpress::InvoicexpressError;
use invoicexpress::models::*;
use invoicexpress::xml::{from_xml, to_xml};
use rust_decimal_macros::dec;

fn full_guide() -> Guide {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut guide = GuideBuilder::transport(date)
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .loaded_at(date.and_hms_opt(8, 30, 0).unwrap())
        .license_plate("AA-00-BB")
        .reference("PO-2024-17")
        .observations("Handle with care & keep dry")
        .retention(dec!(25))
        .tax_exemption("M01")
        .sequence_id(12)
        .address_from(Address::new("Rua A 1", "Lisboa", "1000-001", "Portugal"))
        .address_to(Address::new("Rua B 2", "Porto", "4000-002", "Portugal"))
        .client(
            Client::new("Transportes Lda")
                .code("C-001")
                .email("geral@transportes.pt")
                .fiscal_id("508025338"),
        )
        .add_item(
            Item::new("Pallet", dec!(10.5), dec!(3))
                .description("EUR pallet")
                .unit("unit")
                .tax("IVA23")
                .discount(dec!(5)),
        )
        .add_item(Item::new("Strap", dec!(1.25), dec!(12)))
        .build();
    guide.base.id = Some(1503698);
    guide
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn base_fields_survive_round_trip() {
    let guide = full_guide();
    let xml = to_xml(&guide).unwrap();
    let parsed = from_xml::<Guide>(&xml).unwrap();
    assert_eq!(parsed.kind, GuideKind::Transport);
    assert_eq!(parsed.base, guide.base);
    assert_eq!(parsed.extra, ExtraGuide::default());
}

#[test]
fn request_body_has_no_read_only_fields() {
    let xml = to_xml(&full_guide()).unwrap();
    for tag in ["<status>", "<total>", "<sum>", "<permalink>", "<archived>"] {
        assert!(!xml.contains(tag), "{tag} in request body");
    }
}

#[test]
fn dates_use_fixed_formats() {
    let xml = to_xml(&full_guide()).unwrap();
    assert!(xml.contains("<date>15/06/2024</date>"));
    assert!(xml.contains("<due_date>15/07/2024</due_date>"));
    assert!(xml.contains("<loaded_at>15/06/2024 08:30:00</loaded_at>"));
}

#[test]
fn special_characters_are_escaped() {
    let xml = to_xml(&full_guide()).unwrap();
    assert!(xml.contains("Handle with care &amp; keep dry"));
}

#[test]
fn text_fields_keep_edge_whitespace_and_blank_values() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let guide = GuideBuilder::transport(date)
        .observations("  Line one\nLine two\n")
        .reference("")
        .license_plate("   ")
        .build();

    let parsed = from_xml::<Guide>(&to_xml(&guide).unwrap()).unwrap();
    assert_eq!(parsed.base.observations.as_deref(), Some("  Line one\nLine two\n"));
    assert_eq!(parsed.base.reference.as_deref(), Some(""));
    assert_eq!(parsed.base.license_plate.as_deref(), Some("   "));
    assert_eq!(parsed.base, guide.base);
}

#[test]
fn nil_text_field_reads_as_absent() {
    let xml = r#"<transport><reference nil="true"/><observations></observations></transport>"#;
    let guide = from_xml::<Guide>(xml).unwrap();
    assert_eq!(guide.base.reference, None);
    assert_eq!(guide.base.observations.as_deref(), Some(""));
}

#[test]
fn field_order_follows_declaration() {
    let xml = to_xml(&full_guide()).unwrap();
    let order = [
        "<id>",
        "<date>",
        "<due_date>",
        "<loaded_at>",
        "<license_plate>",
        "<reference>",
        "<observations>",
        "<retention>",
        "<tax_exemption>",
        "<sequence_id>",
        "<address_from>",
        "<address_to>",
        "<client>",
        "<items",
    ];
    let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{xml}");
}

#[test]
fn single_item_list_is_still_an_array() {
    let mut guide = full_guide();
    guide.base.items.truncate(1);
    let xml = to_xml(&guide).unwrap();
    assert!(xml.contains(r#"<items type="array">"#));
    assert_eq!(xml.matches("<item>").count(), 1);
}

#[test]
fn guide_without_items_still_has_container() {
    let guide = Guide::transport(BaseGuide::default());
    let xml = to_xml(&guide).unwrap();
    assert!(xml.contains(r#"<items type="array">"#));
}

// ---------------------------------------------------------------------------
// Server responses
// ---------------------------------------------------------------------------

#[test]
fn parses_full_server_response() {
    let guide = from_xml::<Guide>(TRANSPORT_GUIDE_XML).unwrap();

    assert_eq!(guide.base.id, Some(1503698));
    assert_eq!(guide.base.date, NaiveDate::from_ymd_opt(2024, 6, 15));
    assert_eq!(
        guide.base.loaded_at,
        NaiveDate::from_ymd_opt(2024, 6, 15).and_then(|d| d.and_hms_opt(8, 30, 0))
    );
    assert_eq!(guide.base.retention, None);
    assert_eq!(guide.base.tax_exemption.as_deref(), Some("M01"));

    let from = guide.base.address_from.unwrap();
    assert_eq!(from.0.city.as_deref(), Some("Lisboa"));
    let to = guide.base.address_to.unwrap();
    assert_eq!(to.0.city.as_deref(), Some("Porto"));

    let client = guide.base.client.unwrap();
    assert_eq!(client.id, Some(4411));
    assert_eq!(client.name.as_deref(), Some("Transportes Lda"));

    let item = &guide.base.items[0];
    assert_eq!(item.unit_price, Some(dec!(10)));
    assert_eq!(item.tax.as_ref().and_then(|t| t.value), Some(dec!(23)));

    assert_eq!(guide.extra.status.as_deref(), Some("draft"));
    assert_eq!(guide.extra.archived, Some(false));
    assert_eq!(guide.extra.document_type.as_deref(), Some("Transport"));
    assert_eq!(guide.extra.currency.as_deref(), Some("Euro"));
    assert_eq!(guide.extra.discount, Some(dec!(0)));
    assert_eq!(guide.extra.taxes, Some(dec!(6.9)));
    assert_eq!(guide.extra.total, Some(dec!(36.9)));
}

#[test]
fn minimal_response_leaves_everything_else_empty() {
    let guide = from_xml::<Guide>("<transport><id>1</id></transport>").unwrap();
    assert_eq!(guide.base.id, Some(1));
    assert_eq!(guide.base.client, None);
    assert!(guide.base.items.is_empty());
    assert_eq!(guide.extra, ExtraGuide::default());
}

#[test]
fn wrong_root_tag_is_a_mapping_error() {
    let err = from_xml::<Guide>("<invoice><id>1</id></invoice>").unwrap_err();
    match err {
        InvoicexpressError::Mapping { model, message, .. } => {
            assert_eq!(model, "guide");
            assert!(message.contains("<invoice>"));
        }
        other => panic!("expected Mapping, got {other:?}"),
    }
}

#[test]
fn bad_nested_value_fails_whole_guide() {
    let xml = "<transport><items type=\"array\"><item><quantity>three</quantity></item></items></transport>";
    match from_xml::<Guide>(xml).unwrap_err() {
        InvoicexpressError::Mapping { model, field, .. } => {
            assert_eq!(model, "item");
            assert_eq!(field, "quantity");
        }
        other => panic!("expected Mapping, got {other:?}"),
    }
}

#[test]
fn bad_flag_fails_guide() {
    let xml = "<transport><archived>maybe</archived></transport>";
    let err = from_xml::<Guide>(xml).unwrap_err();
    assert!(err.to_string().contains("guide.archived"));
}
