//! Domain layer containing the URL record entity and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented by the infrastructure layer and consumed by the services in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
