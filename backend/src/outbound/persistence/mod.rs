//! PostgreSQL persistence via Diesel and diesel-async.

pub mod diesel_link_repository;
pub mod diesel_request_repository;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_link_repository::DieselLinkRepository;
pub use diesel_request_repository::DieselRequestRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
