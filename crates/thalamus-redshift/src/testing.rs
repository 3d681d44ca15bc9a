//! Testing utilities
//!
//! A recording [`MockBridge`] standing in for the dataframe engine, so the
//! exact options the connector forwards can be asserted without one.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::bridge::{DataframeBridge, LoadRequest, SaveRequest};
use crate::error::{Error, Result};

/// Frame handle produced by [`MockBridge`]; carries the request it came from
#[derive(Debug, Clone)]
pub struct MockFrame {
    /// The load request that produced this frame
    pub request: LoadRequest,
}

/// A bridge that records every request and returns canned results
#[derive(Debug, Default)]
pub struct MockBridge {
    loads: Mutex<Vec<LoadRequest>>,
    saves: Mutex<Vec<SaveRequest>>,
    load_error: Option<String>,
    save_error: Option<String>,
}

impl MockBridge {
    /// Create a bridge that accepts every request
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every load fail with the given bridge error
    pub fn with_load_error(mut self, message: impl Into<String>) -> Self {
        self.load_error = Some(message.into());
        self
    }

    /// Make every save fail with the given bridge error
    pub fn with_save_error(mut self, message: impl Into<String>) -> Self {
        self.save_error = Some(message.into());
        self
    }

    /// Load requests seen so far
    pub fn loads(&self) -> Vec<LoadRequest> {
        self.loads.lock().expect("mock lock poisoned").clone()
    }

    /// Save requests seen so far
    pub fn saves(&self) -> Vec<SaveRequest> {
        self.saves.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl DataframeBridge for MockBridge {
    type Frame = MockFrame;

    async fn load(&self, request: LoadRequest) -> Result<Self::Frame> {
        self.loads
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());

        match &self.load_error {
            Some(message) => Err(Error::bridge(message.clone())),
            None => Ok(MockFrame { request }),
        }
    }

    async fn save(&self, _frame: &Self::Frame, request: SaveRequest) -> Result<()> {
        self.saves
            .lock()
            .expect("mock lock poisoned")
            .push(request);

        match &self.save_error {
            Some(message) => Err(Error::bridge(message.clone())),
            None => Ok(()),
        }
    }
}
