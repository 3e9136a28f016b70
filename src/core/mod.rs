//! Error taxonomy and client configuration.

mod config;
mod error;

pub use config::*;
pub use error::*;
