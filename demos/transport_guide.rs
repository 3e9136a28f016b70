//! Create, finalize and email a transport guide against a real account.
//!
//! Needs `INVOICEXPRESS_ACCOUNT_NAME` and `INVOICEXPRESS_API_KEY`.

use chrono::Local;
use invoicexpress::models::*;
use invoicexpress::{ApiClient, InvoicexpressError, RequestOptions};
use rust_decimal_macros::dec;

fn main() {
    let client = match ApiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let options = RequestOptions::default();
    let now = Local::now().naive_local();

    let guide = GuideBuilder::transport(now.date())
        .loaded_at(now)
        .license_plate("AA-00-BB")
        .address_from(Address::new("Rua A 1", "Lisboa", "1000-001", "Portugal"))
        .address_to(Address::new("Rua B 2", "Porto", "4000-002", "Portugal"))
        .client(Client::new("Transportes Lda"))
        .add_item(Item::new("Pallet", dec!(10), dec!(3)).tax("IVA23"))
        .build();

    // ── 1. Create ─────────────────────────────────────────────────────
    let created = match client.create_transport_guide(&guide, &options) {
        Ok(g) => g,
        Err(InvoicexpressError::UnprocessableEntity { errors, .. }) => {
            for e in errors {
                println!("  Rejected: {e}");
            }
            return;
        }
        Err(e) => {
            eprintln!("Create failed: {e}");
            return;
        }
    };
    let id = created.base.id.unwrap_or_default();
    println!("Created guide {id} ({:?})", created.extra.status);

    // ── 2. Finalize ───────────────────────────────────────────────────
    let state = GuideState::transition(GuideKind::Transport, GuideTransition::Finalized);
    match client.update_transport_guide_state(id, &state, &options) {
        Ok(g) => println!("Now {:?}, number {:?}", g.extra.status, g.extra.sequence_number),
        Err(e) => eprintln!("State change failed: {e}"),
    }

    // ── 3. PDF and email ──────────────────────────────────────────────
    match client.transport_guide_pdf_url(id, &options) {
        Ok(output) => println!("PDF: {}", output.pdf_url.unwrap_or_default()),
        Err(e) => eprintln!("PDF failed: {e}"),
    }

    let message = Message::new("ops@example.pt", "Guia de transporte", "Segue em anexo.");
    if let Err(e) = client.transport_guide_mail(id, &message, &options) {
        eprintln!("Email failed: {e}");
    }
}
