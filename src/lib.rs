//! # invoicexpress
//!
//! Client library for the [InvoiceXpress](https://invoicexpress.com) API.
//!
//! Models map to and from the API's XML documents; [`ApiClient`] sends one
//! request per call and turns the response into a typed model or an
//! [`InvoicexpressError`]. Business rules such as tax computation and
//! document state transitions stay on the server.
//!
//! All monetary values use [`rust_decimal::Decimal`]. Dates go over the wire
//! as `dd/mm/yyyy` ([`xml::DATE_FORMAT`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use invoicexpress::models::*;
//! use invoicexpress::{ApiClient, Config, RequestOptions};
//! use rust_decimal_macros::dec;
//!
//! let client = ApiClient::new(Config::new("my-account", "api-key"))?;
//!
//! let guide = GuideBuilder::transport(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .client(Client::new("Transportes Lda"))
//!     .add_item(Item::new("Pallet", dec!(10), dec!(3)).tax("IVA23"))
//!     .build();
//!
//! let created = client.create_transport_guide(&guide, &RequestOptions::default())?;
//! let id = created.base.id.unwrap_or_default();
//! client.update_transport_guide_state(
//!     id,
//!     &GuideState::transition(GuideKind::Transport, GuideTransition::Finalized),
//!     &RequestOptions::default(),
//! )?;
//! # Ok::<(), invoicexpress::InvoicexpressError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `http` (default) | Blocking `reqwest` transport ([`http::ReqwestTransport`]) |
//!
//! Without `http` the models, the XML mapper and [`ApiClient`] are still
//! available over any [`http::Transport`] implementation.

pub mod core;
pub mod http;
pub mod models;
pub mod resources;
pub mod xml;

pub use crate::core::{Config, InvoicexpressError, Result};
pub use crate::http::{ApiClient, RequestOptions};
