use thiserror::Error;

/// Errors surfaced by the InvoiceXpress client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoicexpressError {
    /// The API rejected the credentials (HTTP 401 or 403).
    #[error("unauthorized (HTTP {status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {path}")]
    NotFound {
        /// Request path that produced the 404.
        path: String,
        /// Resource id the caller asked for, when the call was by id.
        id: Option<String>,
    },

    /// The API refused the submission (HTTP 422).
    #[error("unprocessable entity: {}", .errors.join("; "))]
    UnprocessableEntity {
        /// Validation messages exactly as sent by the server.
        errors: Vec<String>,
        /// Raw response body.
        body: String,
    },

    /// A local precondition failed before any request was sent.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// XML could not be mapped onto a model.
    #[error("mapping error in {model}.{field}: {message}")]
    Mapping {
        model: &'static str,
        field: String,
        message: String,
    },

    /// Malformed XML, or the XML writer failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// Missing credentials or an unusable endpoint.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InvoicexpressError>;

impl InvoicexpressError {
    /// Create a mapping error for one field of a model.
    pub fn mapping(
        model: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Mapping {
            model,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attach the requested resource id to a `NotFound` error.
    ///
    /// Other variants are returned unchanged.
    pub fn with_resource_id(self, resource_id: impl ToString) -> Self {
        match self {
            Self::NotFound { path, .. } => Self::NotFound {
                path,
                id: Some(resource_id.to_string()),
            },
            other => other,
        }
    }

    /// HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::UnprocessableEntity { .. } => Some(422),
            _ => None,
        }
    }
}
