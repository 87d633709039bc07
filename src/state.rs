//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the read-only login secret and the optional image generator.
//! There is no per-user or per-session state anywhere on the server.

use std::sync::Arc;

use crate::config::SharedSecret;
use crate::image::ImageGenerator;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub secret: Arc<SharedSecret>,
    /// Optional image generator. `None` if `OPENAI_API_KEY` is not configured.
    pub images: Option<Arc<dyn ImageGenerator>>,
}

impl AppState {
    #[must_use]
    pub fn new(secret: SharedSecret, images: Option<Arc<dyn ImageGenerator>>) -> Self {
        Self { secret: Arc::new(secret), images }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
