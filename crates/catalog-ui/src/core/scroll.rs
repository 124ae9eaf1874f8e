//! Pagination trigger decisions.
//!
//! Any mechanism that wants the next page (sentinel visibility, a button) goes through
//! the same checks; the visibility source only decides whether it "fired".

use crate::core::catalog::{CatalogState, needs_reload};

/// Whether a sentinel reported at `ratio` visibility crosses `threshold`.
#[must_use]
pub fn sentinel_fired(ratio: f64, threshold: f64) -> bool {
    ratio.is_finite() && ratio > 0.0 && ratio >= threshold
}

/// Whether the pagination controls should be rendered at all.
#[must_use]
pub fn sentinel_active(state: &CatalogState) -> bool {
    state.has_more || needs_reload(state)
}

/// Whether a manual "load more" control should be enabled.
#[must_use]
pub fn load_more_enabled(state: &CatalogState) -> bool {
    !state.loading && sentinel_active(state)
}

/// Whether the sentinel may observe visibility.
///
/// A visible error disarms it, so a failure is retried only by the load-more button or
/// a new search, never by the observer re-reporting.
#[must_use]
pub fn sentinel_armed(state: &CatalogState) -> bool {
    load_more_enabled(state) && state.error.is_none()
}
