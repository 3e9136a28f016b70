use log::debug;

use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::core::{Config, InvoicexpressError, Result};

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// Must not be used from inside an async runtime; run calls on a blocking
/// thread there instead.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| InvoicexpressError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
        };
        builder = builder.query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let resp = builder
            .send()
            .map_err(|e| InvoicexpressError::Transport(e.without_url().to_string()))?;

        let status = resp.status().as_u16();
        debug!("{} {} answered {status}", request.method, resp.url().path());
        let body = resp
            .text()
            .map_err(|e| InvoicexpressError::Transport(e.without_url().to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
