//! Domain ports: driving operation traits and driven repository traits.

mod link_operations;
mod link_repository;
mod request_operations;
mod request_repository;

pub use link_operations::{IssuedLink, LinkOperations};
pub use link_repository::{LinkRepository, LinkRepositoryError};
pub use request_operations::RequestBoard;
pub use request_repository::{RequestRepository, RequestRepositoryError};

#[cfg(test)]
pub use link_operations::MockLinkOperations;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use request_operations::MockRequestBoard;
#[cfg(test)]
pub use request_repository::MockRequestRepository;
