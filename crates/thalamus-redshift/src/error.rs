//! Error types for thalamus-redshift
//!
//! Two failure classes, matching the connector's contract:
//! - Configuration errors fail fast at construction and are never retried
//! - Bridge errors (engine, network, auth, schema) propagate unmodified

use thiserror::Error;

/// Result type for thalamus-redshift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for thalamus-redshift
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (malformed connection URL, missing credential)
    #[error("configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// Failure surfaced by the dataframe bridge during a load or save
    #[error("bridge error: {message}")]
    Bridge {
        /// What the bridge reported
        message: String,
        /// Underlying engine failure, when available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a bridge error
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bridge error with the underlying engine failure attached
    pub fn bridge_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Bridge {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error was raised before any bridge call was issued
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("url must carry exactly five fields");
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("five fields"));

        let err = Error::bridge("save failed");
        assert!(err.to_string().contains("bridge error: save failed"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::config("bad url").is_configuration());
        assert!(!Error::bridge("engine down").is_configuration());
    }

    #[test]
    fn test_bridge_source_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::bridge_with_source("load failed", io);
        let source = std::error::Error::source(&err).expect("source attached");
        assert!(source.to_string().contains("refused"));
    }
}
