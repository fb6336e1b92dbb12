//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`], mapping a short code to
//! the URL it stands for.

pub mod url_record;

pub use url_record::{RECORD_TTL_DAYS, UrlRecord};
