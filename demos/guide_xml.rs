use chrono::NaiveDate;
use invoicexpress::models::*;
use invoicexpress::xml::{from_xml, to_xml};
use rust_decimal_macros::dec;

fn main() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let guide = GuideBuilder::transport(date)
        .loaded_at(date.and_hms_opt(8, 30, 0).unwrap())
        .license_plate("AA-00-BB")
        .address_from(Address::new("Rua A 1", "Lisboa", "1000-001", "Portugal"))
        .address_to(Address::new("Rua B 2", "Porto", "4000-002", "Portugal"))
        .client(Client::new("Transportes Lda").fiscal_id("508025338"))
        .add_item(Item::new("Pallet", dec!(10), dec!(3)).unit("unit").tax("IVA23"))
        .build();

    // ── 1. Request body ───────────────────────────────────────────────
    let xml = to_xml(&guide).unwrap();
    println!("=== POST /transports.xml ===\n{xml}\n");

    // ── 2. Parse it back ──────────────────────────────────────────────
    let parsed = from_xml::<Guide>(&xml).unwrap();
    println!("Round trip equal: {}", parsed.base == guide.base);

    // ── 3. Change-state body ──────────────────────────────────────────
    let state = GuideState::transition(GuideKind::Transport, GuideTransition::Canceled)
        .message("Wrong destination");
    println!("\n=== PUT /transports/{{id}}/change-state.xml ===\n{}", to_xml(&state).unwrap());
}
