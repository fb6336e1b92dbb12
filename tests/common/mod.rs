#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;
use axum::ServiceExt;
use axum::extract::Request;
use url_shortener::routes::{api_router, app_router};
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::{CodeGenerator, GenerationError, RandomCodeGenerator};

pub const BASE_URL: &str = "http://localhost:5000/";

/// Generator that always hands out the same code.
pub struct FixedCodeGenerator {
    code: String,
    calls: AtomicUsize,
}

impl FixedCodeGenerator {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.code.clone())
    }
}

pub fn create_test_state(repository: Arc<MemoryUrlRepository>) -> AppState {
    AppState::new(repository, Arc::new(RandomCodeGenerator), BASE_URL)
}

pub fn create_test_server(repository: Arc<MemoryUrlRepository>) -> TestServer {
    TestServer::new(api_router(create_test_state(repository))).unwrap()
}

/// Full application, trailing-slash normalization included.
pub fn create_app_server(repository: Arc<MemoryUrlRepository>) -> TestServer {
    let app = app_router(create_test_state(repository));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn create_test_server_with_generator(
    repository: Arc<MemoryUrlRepository>,
    generator: Arc<dyn CodeGenerator>,
) -> TestServer {
    let state = AppState::new(repository, generator, BASE_URL);
    TestServer::new(api_router(state)).unwrap()
}

pub async fn create_test_record(repository: &MemoryUrlRepository, code: &str, url: &str) {
    repository
        .insert(UrlRecord::new(
            code.to_string(),
            url.to_string(),
            BASE_URL,
            Utc::now(),
        ))
        .await
        .unwrap();
}
