//! Domain entities, ports, and services.
//!
//! Purpose: keep the data-access contract of the application transport
//! agnostic. Handlers depend on the driving ports in [`ports`]; storage
//! adapters implement the driven repository ports.

pub mod error;
pub mod ids;
pub mod links;
pub mod ports;
pub mod requests;

mod link_service;
mod request_service;
mod text;

pub use self::error::{Error, ErrorCode};
pub use self::link_service::LinkService;
pub use self::links::{LinkOwner, OwnerCredentials, Recommendation, RecommendationDraft};
pub use self::request_service::RequestService;
pub use self::requests::{
    BusinessRequest, BusinessResponse, RequestDraft, RequestFilter, ResponseDraft,
};
