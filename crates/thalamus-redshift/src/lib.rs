//! # thalamus-redshift
//!
//! Redshift connectivity for the Thalamus analytics platform.
//!
//! This crate is the configuration seam between a distributed dataframe
//! engine and Amazon Redshift: it resolves connection settings, composes the
//! JDBC connection URL and the S3 staging URI the third-party warehouse
//! connector consumes, and exposes read/write operations against an injected
//! [`DataframeBridge`]. The heavy lifting - distributed query execution, the
//! warehouse storage engine, the columnar staging transfer - lives in the
//! external systems this crate parameterizes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use thalamus_redshift::prelude::*;
//!
//! // Resolve settings (file or environment), build the connector once
//! let settings = RedshiftSettings::from_env()?;
//! let connector = RedshiftConnector::new(&settings, bridge)?;
//!
//! // Lazy read; rows move only when a consumer forces the plan
//! let frame = connector.read("events").await?;
//!
//! // Read preserving the table's physical layout
//! let layout = TableLayout::new("user_id").with_sort_keys(["created_at", "id"]);
//! let ordered = connector.read_with_layout("events", &layout).await?;
//!
//! // Terminal write
//! connector.write(&frame, "events_copy", SaveMode::Append).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod connection;
pub mod connector;
pub mod error;
pub mod layout;
pub mod settings;
pub mod testing;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    // Error types
    pub use crate::error::{Error, Result};

    // Sensitive values
    pub use crate::types::SensitiveString;

    // Settings resolution
    pub use crate::settings::{RedshiftSettings, STORAGE_KEY_ENV_VAR, URL_ENV_VAR};

    // Connection composition
    pub use crate::connection::{
        ConnectionDescriptor, StagingLocation, STAGING_BUCKET_PATH, STAGING_SCHEME,
    };

    // Table layout
    pub use crate::layout::TableLayout;

    // Bridge seam
    pub use crate::bridge::{DataframeBridge, LoadRequest, SaveMode, SaveRequest};

    // The connector itself
    pub use crate::connector::{RedshiftConnector, REDSHIFT_FORMAT};
}

// Re-export commonly used items at crate root
pub use bridge::{DataframeBridge, SaveMode};
pub use connector::RedshiftConnector;
pub use error::{Error, Result};
pub use settings::RedshiftSettings;
pub use types::SensitiveString;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        // Ensure common types are accessible
        let _mode = SaveMode::Append;
        let _layout = TableLayout::new("user_id");
        let _settings = RedshiftSettings::new("redshift://u:p@h:5439/db", "key");
        assert_eq!(REDSHIFT_FORMAT, "com.databricks.spark.redshift");
    }

    #[test]
    fn test_error_types() {
        let err = Error::config("bad url");
        assert!(err.is_configuration());
    }
}
