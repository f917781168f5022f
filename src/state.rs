//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the content source used by the CMS proxy routes. Handlers take
//! no locks; the source is shared behind an `Arc`.

use std::sync::Arc;

use crate::cms::ContentSource;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    /// Content source. `None` if CMS env vars are not configured.
    pub cms: Option<Arc<dyn ContentSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(cms: Option<Arc<dyn ContentSource>>) -> Self {
        Self { cms }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
