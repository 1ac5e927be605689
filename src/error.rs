use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_DELIVERY_ERROR, EXIT_TRAVERSAL_ERROR};

#[derive(Error, Debug)]
pub enum ShareGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The listing capability failed somewhere in the tree. The whole audit is void.
    #[error("Failed to list folder {folder_id}")]
    Traversal {
        folder_id: String,
        #[source]
        source: Box<ShareGuardError>,
    },

    /// Violations were computed but the notification could not be delivered.
    #[error("Failed to deliver notification")]
    Delivery {
        #[source]
        source: Box<ShareGuardError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShareGuardError {
    /// Wrap a lower-level failure raised while listing `folder_id`.
    #[must_use]
    pub fn traversal(folder_id: impl Into<String>, source: Self) -> Self {
        Self::Traversal {
            folder_id: folder_id.into(),
            source: Box::new(source),
        }
    }

    #[must_use]
    pub fn delivery(source: Self) -> Self {
        Self::Delivery {
            source: Box::new(source),
        }
    }

    /// Short category label used in log lines.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Http { .. } => "Http",
            Self::Traversal { .. } => "Traversal",
            Self::Delivery { .. } => "Delivery",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
        }
    }

    /// Full message including the chain of sources, one cause per `: ` segment.
    #[must_use]
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Traversal { .. } => EXIT_TRAVERSAL_ERROR,
            Self::Delivery { .. } => EXIT_DELIVERY_ERROR,
            _ => EXIT_CONFIG_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShareGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
