use std::path::PathBuf;
use std::sync::Arc;

use crate::llm::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production uses `GeminiClient`; handler
    /// tests inject a double.
    pub llm: Arc<dyn TextGenerator>,
    /// Scratch directory for in-flight uploads.
    pub upload_dir: PathBuf,
}
