//! HTTP request handlers.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::{health_handler, index_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
