//! InvoiceXpress API models and their XML mappings.
//!
//! Every field is optional: `None` is left out of request bodies and is
//! what a missing element parses to.

mod address;
mod builder;
mod client;
mod guide;
mod item;
mod message;
mod output;

pub use address::{Address, AddressFrom, AddressTo};
pub use builder::GuideBuilder;
pub use client::{Client, PreferredContact};
pub use guide::{
    BaseGuide, ExtraGuide, Guide, GuideKind, GuideState, GuideTransition, TransportGuide,
};
pub use item::{ITEMS_TYPE, Item, Items, Tax};
pub use message::{Message, MessageClient};
pub use output::{ApiErrors, Output};
