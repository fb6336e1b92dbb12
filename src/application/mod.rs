//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and the code generator, and expose a
//! small API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation
//! - [`services::redirect_service::RedirectService`] - Short code resolution

pub mod services;
