pub mod analyzer;
pub mod builder;
pub mod health;
pub mod views;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::state::AppState;

/// Upload ceiling carried over from the original deployment: 16 MB.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// 303 redirect back to a form, carrying the flash message in the query
/// string. The GET handler renders it as a banner.
pub fn flash_redirect(path: &str, category: &str, message: &str) -> Redirect {
    let query = serde_urlencoded::to_string([("flash", message), ("category", category)])
        .unwrap_or_default();
    Redirect::to(&format!("{path}?{query}"))
}

/// GET /
async fn home() -> Response {
    views::home_page().into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_handler))
        .route(
            "/builder",
            get(builder::builder_form).post(builder::submit_builder),
        )
        .route(
            "/analyzer",
            get(analyzer::analyzer_form).post(analyzer::submit_analyzer),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
