//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub repository: Arc<dyn UrlRepository>,
}

impl AppState {
    /// Wires both services over one repository.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            repository.clone(),
            generator,
            base_url,
        ));
        let redirect_service = Arc::new(RedirectService::new(repository.clone()));

        Self {
            shorten_service,
            redirect_service,
            repository,
        }
    }
}
