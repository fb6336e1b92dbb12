//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shorten_service;

pub use redirect_service::{RedirectError, RedirectService};
pub use shorten_service::{ShortenError, ShortenService, ShortenedUrl};
