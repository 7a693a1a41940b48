//! Vouch backend library modules.
//!
//! The crate is laid out hexagonally: `domain` holds transport-agnostic
//! entities, ports, and services; `inbound` exposes the HTTP adapter;
//! `outbound` provides persistence adapters implementing the driven ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::trace::Trace;
