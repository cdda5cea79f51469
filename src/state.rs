//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only immutable site text. The section selection is not part of
//! it: every request carries its own selection, so handlers share nothing
//! mutable and need no locks.

use std::sync::Arc;

use crate::config::SiteInfo;

/// Clone is required by Axum; the site text is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteInfo>,
}

impl AppState {
    #[must_use]
    pub fn new(site: SiteInfo) -> Self {
        Self { site: Arc::new(site) }
    }
}
