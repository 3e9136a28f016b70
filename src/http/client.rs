use log::{debug, warn};

use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::core::{Config, InvoicexpressError, Result};
use crate::models::ApiErrors;
use crate::xml::{XmlModel, from_xml, to_xml};

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Extra query parameters and headers for a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header; replaces a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client for one InvoiceXpress account.
///
/// Holds only read-only configuration and the transport, so it can be
/// shared between threads whenever the transport can.
#[derive(Debug)]
pub struct ApiClient<T> {
    config: Config,
    base_url: String,
    transport: T,
}

#[cfg(feature = "http")]
impl ApiClient<super::ReqwestTransport> {
    /// Client using the blocking `reqwest` transport.
    pub fn new(config: Config) -> Result<Self> {
        let transport = super::ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }

    /// Client configured from the `INVOICEXPRESS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        let base_url = config.base_url()?;
        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and parse the response as `R`.
    pub fn get<R: XmlModel>(&self, path: &str, options: &RequestOptions) -> Result<R> {
        let body = self.execute(HttpMethod::Get, path, None, options)?;
        parse_body(&body)
    }

    /// POST `body` to `path` and parse the response as `R`.
    pub fn post<B: XmlModel, R: XmlModel>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<R> {
        let body = self.execute(HttpMethod::Post, path, Some(to_xml(body)?), options)?;
        parse_body(&body)
    }

    /// PUT `body` to `path` and parse the response as `R`.
    pub fn put<B: XmlModel, R: XmlModel>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<R> {
        let body = self.execute(HttpMethod::Put, path, Some(to_xml(body)?), options)?;
        parse_body(&body)
    }

    /// PUT `body` to `path`, ignoring the response body.
    pub fn put_ack<B: XmlModel>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<()> {
        self.execute(HttpMethod::Put, path, Some(to_xml(body)?), options)?;
        Ok(())
    }

    /// Build the request for `path`.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> HttpRequest {
        let mut query = vec![("api_key".to_string(), self.config.api_key.clone())];
        query.extend(options.query.iter().cloned());

        let mut headers: Vec<(String, String)> = [
            ("Accept", XML_CONTENT_TYPE),
            ("Content-Type", XML_CONTENT_TYPE),
            ("User-Agent", self.config.user_agent.as_str()),
        ]
        .into_iter()
        .filter(|(name, _)| {
            !options
                .headers
                .iter()
                .any(|(k, _)| k.eq_ignore_ascii_case(name))
        })
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        headers.extend(options.headers.iter().cloned());

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path.trim_start_matches('/')),
            query,
            headers,
            body,
        }
    }

    fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<String> {
        let request = self.request(method, path, body, options);
        debug!("{method} {path}");
        let response = self.transport.send(&request)?;
        debug!("{method} {path} -> {}", response.status);
        classify(path, response).inspect_err(|e| warn!("{method} {path} failed: {e}"))
    }
}

/// Map a response onto the error taxonomy; success yields the body.
pub fn classify(path: &str, response: HttpResponse) -> Result<String> {
    if response.is_success() {
        return Ok(response.body);
    }
    let HttpResponse { status, body } = response;
    Err(match status {
        401 | 403 => InvoicexpressError::Unauthorized { status, body },
        404 => InvoicexpressError::NotFound {
            path: path.to_string(),
            id: None,
        },
        422 => InvoicexpressError::UnprocessableEntity {
            errors: validation_messages(&body),
            body,
        },
        _ => InvoicexpressError::Http { status, body },
    })
}

/// Messages from an `<errors>` document, or the raw body when it is not one.
fn validation_messages(body: &str) -> Vec<String> {
    match from_xml::<ApiErrors>(body) {
        Ok(parsed) => parsed.errors,
        _ if body.trim().is_empty() => Vec::new(),
        _ => vec![body.trim().to_string()],
    }
}

fn parse_body<R: XmlModel>(body: &str) -> Result<R> {
    if body.trim().is_empty() {
        return Err(InvoicexpressError::mapping(
            R::NAME,
            "<root>",
            "empty response body",
        ));
    }
    from_xml(body)
}
