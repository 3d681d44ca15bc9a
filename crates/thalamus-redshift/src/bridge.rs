//! Dataframe bridge seam
//!
//! The external dataframe engine is reached through [`DataframeBridge`]: a
//! load request returns a lazily-evaluated frame handle (no rows move until
//! a downstream consumer forces the plan), a save request performs a
//! blocking write. The bridge receives a format identifier plus string
//! option pairs - the same surface the third-party warehouse connector
//! exposes - so the connector stays a pure parameterization layer.

use async_trait::async_trait;

use crate::error::Result;

/// Write disposition forwarded to the bridge
///
/// `Append` and `Overwrite` are the modes used in practice; `Custom`
/// forwards any other string unmodified, leaving validation to the
/// connector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Add rows to the existing table
    #[default]
    Append,
    /// Replace the table contents
    Overwrite,
    /// Any other mode string, forwarded verbatim
    Custom(String),
}

impl SaveMode {
    /// The mode string as the bridge expects it
    pub fn as_str(&self) -> &str {
        match self {
            Self::Append => "append",
            Self::Overwrite => "overwrite",
            Self::Custom(mode) => mode,
        }
    }
}

impl std::fmt::Display for SaveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SaveMode {
    fn from(mode: &str) -> Self {
        match mode {
            "append" => Self::Append,
            "overwrite" => Self::Overwrite,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// A load request against the dataframe bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Connector format identifier (e.g., "com.databricks.spark.redshift")
    pub format: String,
    /// Option name/value pairs, in the order they were set
    pub options: Vec<(String, String)>,
}

impl LoadRequest {
    /// Create a request for the given format
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            options: Vec::new(),
        }
    }

    /// Append an option pair
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// Look up an option value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A save request against the dataframe bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Connector format identifier
    pub format: String,
    /// Option name/value pairs, in the order they were set
    pub options: Vec<(String, String)>,
    /// Write disposition
    pub mode: SaveMode,
}

impl SaveRequest {
    /// Create a request for the given format with the default mode
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            options: Vec::new(),
            mode: SaveMode::default(),
        }
    }

    /// Append an option pair
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// Set the write disposition
    pub fn mode(mut self, mode: SaveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Look up an option value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The dataframe engine's read/write interface
///
/// Implementations wrap whatever engine session is in play; the connector
/// never inspects the frame handle, it only threads it between load and
/// save. Engine failures surface unmodified as
/// [`Error::Bridge`](crate::error::Error::Bridge).
#[async_trait]
pub trait DataframeBridge: Send + Sync {
    /// Lazily-evaluated tabular result handle produced by the engine
    type Frame: Send + Sync;

    /// Issue a load request, returning a lazy frame handle
    async fn load(&self, request: LoadRequest) -> Result<Self::Frame>;

    /// Issue a blocking save of the given frame
    async fn save(&self, frame: &Self::Frame, request: SaveRequest) -> Result<()>;
}
