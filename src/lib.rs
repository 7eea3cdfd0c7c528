use std::{path::Path, sync::Arc};

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod sdk;

#[derive(Clone)]
pub struct AppState {
    pub sdk_source_path: Arc<Path>,
    pub log_lines: usize,
}

impl AppState {
    pub fn new(sdk_source_path: impl AsRef<Path>, log_lines: usize) -> Self {
        Self {
            sdk_source_path: Arc::from(sdk_source_path.as_ref()),
            log_lines,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/sdk.ts", get(http::handlers::sdk_source))
        .route("/logs", get(http::handlers::logs))
        .route("/{kind}/{id}", get(http::handlers::resource_status))
        .fallback(http::handlers::not_found)
        .method_not_allowed_fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
