//! Application state for the wage compliance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::audit::AuditSink;
use crate::calculation::WageEngine;

/// Shared application state.
///
/// Holds the wage engine (registry and multipliers, immutable after load)
/// and the audit sink. Both are behind `Arc` so the state clones cheaply
/// into each handler.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<WageEngine>,
    audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(engine: WageEngine, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            engine: Arc::new(engine),
            audit,
        }
    }

    /// Returns the wage engine.
    pub fn engine(&self) -> &WageEngine {
        &self.engine
    }

    /// Returns a clone of the audit sink handle.
    pub fn audit(&self) -> Arc<dyn AuditSink> {
        Arc::clone(&self.audit)
    }
}
