//! HTTP dispatch: one blocking round trip per call, responses classified
//! into [`InvoicexpressError`](crate::core::InvoicexpressError) by status.
//!
//! Requests go through the [`Transport`] trait. With the `http` feature
//! (on by default) [`ReqwestTransport`] is the real implementation; tests
//! and alternative stacks plug in their own.

mod client;
#[cfg(feature = "http")]
mod reqwest_transport;
mod transport;

pub use client::{ApiClient, RequestOptions, classify};
#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
