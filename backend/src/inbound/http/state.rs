//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LinkOperations, RequestBoard};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Vouch-link flow operations.
    pub links: Arc<dyn LinkOperations>,
    /// Request/response flow operations.
    pub requests: Arc<dyn RequestBoard>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    pub fn new(links: Arc<dyn LinkOperations>, requests: Arc<dyn RequestBoard>) -> Self {
        Self { links, requests }
    }
}
