use thiserror::Error;

/// Structured error context for better error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g. "features[1].description")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g. expected type, actual value)
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Unified error type for the content pipeline.
///
/// Everything a caller can observe falls into one of a few actionable
/// categories: the request never completed (`Transport`), the endpoint
/// answered with something that does not match the declared schema
/// (`Schema`), or an article slug has no document (`NotFound`). Sessions
/// flatten all of them into a displayable `Failed` reason.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("response schema error: {message}{}", format_context(.context))]
    Schema {
        message: String,
        context: ErrorContext,
    },

    #[error("article not found: {slug}")]
    NotFound { slug: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a schema error without context.
    pub fn schema(msg: impl Into<String>) -> Self {
        Error::Schema {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a schema error with structured context.
    pub fn schema_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Schema {
            message: msg.into(),
            context,
        }
    }

    pub fn not_found(slug: impl Into<String>) -> Self {
        Error::NotFound { slug: slug.into() }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// Extract error context if available.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Schema { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// Low-level transport failures, separated so callers can distinguish
/// "the request never completed" from "the response was wrong".
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },
}
