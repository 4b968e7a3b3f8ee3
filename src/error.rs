use thiserror::Error;

/// Structured error context attached to source and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or setting that caused the error (e.g., "message.hound", "BREED_DATA_PATH")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Component that raised the error (e.g., "breed_table", "lookup_config")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for breed lookups.
///
/// `BreedNotFound` is the only condition callers are expected to branch on;
/// everything else is a failure of the underlying source or of the setup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Breed not found: {breed}")]
    BreedNotFound { breed: String },

    #[error("Source error: {message}{}", format_context(.context))]
    Source {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn not_found(breed: impl Into<String>) -> Self {
        Error::BreedNotFound {
            breed: breed.into(),
        }
    }

    /// Create a new source error with structured context
    pub fn source_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Source {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::BreedNotFound { .. })
    }
}
