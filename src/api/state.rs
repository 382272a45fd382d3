//! Application state for the shift engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::calculation::{Clock, SystemClock};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded template catalog and the clock handlers read "now"
/// from when a request does not pin it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded template catalog.
    config: Arc<ConfigLoader>,
    /// Source of the current instant.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state reading the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Reads the current instant from the state's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}
