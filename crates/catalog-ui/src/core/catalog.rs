//! Catalog view state and pure request-lifecycle transitions.
//!
//! # Design
//! - The server returns the full result set; pages are sliced locally.
//! - `begin_fetch` is the single in-flight guard and flips `loading` synchronously.
//! - The page counter only advances when a page is applied, so a failed page can be
//!   requested again by the next trigger.
//! - `listed_term` records which query the visible list belongs to. When it differs from
//!   the search input (a failed or dropped reset), the next trigger reloads page one
//!   instead of appending.

use catalog_api_models::Product;
use std::fmt;

/// Fallback message for failed product requests without a server message.
pub const FETCH_ERROR_FALLBACK: &str = "Error fetching products";

/// Visible catalog state.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    /// Products revealed so far, in request order.
    pub products: Vec<Product>,
    /// Last page applied (1-based).
    pub page: u32,
    /// Whether the server returned more products than are revealed.
    pub has_more: bool,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Display message for the last failure.
    pub error: Option<String>,
    /// Current search input (updated on every keystroke).
    pub search_term: String,
    /// Term whose results are on screen; `None` until a first page lands.
    pub listed_term: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            page: 1,
            has_more: true,
            loading: false,
            error: None,
            search_term: String::new(),
            listed_term: None,
        }
    }
}

/// One request to the catalog fetcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Term to search for; empty lists everything.
    pub search_term: String,
    /// Requested page (1-based).
    pub page: u32,
    /// Replace the list instead of appending.
    pub reset: bool,
}

impl FetchRequest {
    /// First page for `search_term`, replacing the current list.
    #[must_use]
    pub fn reset(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            page: 1,
            reset: true,
        }
    }

    /// `page` for `search_term`, appended to the current list.
    #[must_use]
    pub fn append(search_term: impl Into<String>, page: u32) -> Self {
        Self {
            search_term: search_term.into(),
            page,
            reset: false,
        }
    }

    /// Whether the result replaces the current list.
    #[must_use]
    pub const fn replaces_list(&self) -> bool {
        self.reset || self.page <= 1
    }
}

/// Reason a fetch was not dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Another request is already in flight.
    InFlight,
    /// Appending was requested but every result is already shown.
    Exhausted,
    /// No session is held.
    SignedOut,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InFlight => "in_flight",
            Self::Exhausted => "exhausted",
            Self::SignedOut => "signed_out",
        })
    }
}

/// One locally sliced page of a full result set.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice {
    /// Products in the requested window.
    pub items: Vec<Product>,
    /// Exclusive end index of the window.
    pub end_index: usize,
    /// Size of the full result set.
    pub total: usize,
}

impl PageSlice {
    /// Whether results remain past this window.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.end_index < self.total
    }
}

/// Slice `page` out of the full result set. Windows past the end come back empty.
#[must_use]
pub fn paginate(all: Vec<Product>, page: u32, page_size: usize) -> PageSlice {
    let total = all.len();
    let page_index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    let start_index = page_index.saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size);
    let items = all
        .into_iter()
        .skip(start_index)
        .take(page_size)
        .collect();
    PageSlice {
        items,
        end_index,
        total,
    }
}

/// Accept `request` unless the in-flight or exhaustion guard rejects it.
///
/// Accepting marks the state as loading and clears the previous error.
///
/// # Errors
/// Returns the [`SkipReason`] when the request must be dropped.
pub fn begin_fetch(state: &mut CatalogState, request: &FetchRequest) -> Result<(), SkipReason> {
    if state.loading {
        return Err(SkipReason::InFlight);
    }
    if request.page > 1 && !state.has_more && !request.reset {
        return Err(SkipReason::Exhausted);
    }
    state.loading = true;
    state.error = None;
    Ok(())
}

/// Apply a successfully fetched page and settle the request.
pub fn apply_page(state: &mut CatalogState, request: &FetchRequest, slice: PageSlice) {
    state.has_more = slice.has_more();
    if request.replaces_list() {
        state.products = slice.items;
    } else {
        state.products.extend(slice.items);
    }
    state.page = request.page.max(1);
    state.listed_term = Some(request.search_term.clone());
    state.loading = false;
}

/// Record a failed request and settle it.
///
/// A failed replace leaves nothing valid on screen: the list is cleared and marked
/// unlisted so the next trigger asks for page one again. A failed append keeps the list.
pub fn apply_failure(state: &mut CatalogState, request: &FetchRequest, message: String) {
    if request.replaces_list() {
        state.products.clear();
        state.page = 1;
        state.has_more = true;
        state.listed_term = None;
    }
    state.error = Some(message);
    state.loading = false;
}

/// Update the search input without fetching.
pub fn set_search_term(state: &mut CatalogState, term: String) {
    state.search_term = term;
}

/// Whether the visible list does not belong to the current search input.
#[must_use]
pub fn needs_reload(state: &CatalogState) -> bool {
    state.listed_term.as_deref() != Some(state.search_term.as_str())
}

/// Next request for the current term, when the guards allow one.
///
/// Appends the following page, or restarts at page one when the list is stale.
#[must_use]
pub fn next_page_request(state: &CatalogState) -> Option<FetchRequest> {
    if state.loading {
        return None;
    }
    if needs_reload(state) {
        return Some(FetchRequest::reset(state.search_term.clone()));
    }
    if !state.has_more {
        return None;
    }
    Some(FetchRequest::append(
        state.search_term.clone(),
        state.page.saturating_add(1),
    ))
}

/// Whether the empty-state panel should render.
#[must_use]
pub fn shows_empty_state(state: &CatalogState) -> bool {
    !state.loading && state.products.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_test_support::fixtures::products;

    fn ids(list: &[Product]) -> Vec<i64> {
        list.iter().map(|p| p.id).collect()
    }

    fn fetch(state: &mut CatalogState, all: &[Product], request: &FetchRequest) {
        assert_eq!(begin_fetch(state, request), Ok(()));
        let slice = paginate(all.to_vec(), request.page, 6);
        apply_page(state, request, slice);
    }

    #[test]
    fn paginate_slices_windows_and_clamps() {
        let all = products(14);
        let first = paginate(all.clone(), 1, 6);
        assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5, 6]);
        assert!(first.has_more());
        let last = paginate(all.clone(), 3, 6);
        assert_eq!(ids(&last.items), vec![13, 14]);
        assert!(!last.has_more());
        let beyond = paginate(all, 9, 6);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_more());
    }

    #[test]
    fn exact_multiple_of_page_size_ends_without_more() {
        let slice = paginate(products(12), 2, 6);
        assert_eq!(slice.items.len(), 6);
        assert!(!slice.has_more());
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let slice = paginate(products(3), 0, 6);
        assert_eq!(slice.items.len(), 3);
    }

    #[test]
    fn fourteen_products_page_through_in_three_steps() {
        let all = products(14);
        let mut state = CatalogState::default();

        fetch(&mut state, &all, &FetchRequest::reset(""));
        assert_eq!(ids(&state.products), vec![1, 2, 3, 4, 5, 6]);
        assert!(state.has_more);

        let second = next_page_request(&state).unwrap_or_else(|| FetchRequest::append("", 0));
        assert_eq!(second, FetchRequest::append("", 2));
        fetch(&mut state, &all, &second);
        assert_eq!(ids(&state.products), (1..=12).collect::<Vec<_>>());
        assert!(state.has_more);

        let third = next_page_request(&state).unwrap_or_else(|| FetchRequest::append("", 0));
        fetch(&mut state, &all, &third);
        assert_eq!(ids(&state.products), (1..=14).collect::<Vec<_>>());
        assert!(!state.has_more);
        assert_eq!(state.page, 3);

        assert_eq!(next_page_request(&state), None);
        assert_eq!(
            begin_fetch(&mut state, &FetchRequest::append("", 4)),
            Err(SkipReason::Exhausted)
        );
    }

    #[test]
    fn resets_never_accumulate() {
        let all = products(20);
        let mut state = CatalogState::default();
        fetch(&mut state, &all, &FetchRequest::reset(""));
        fetch(&mut state, &all, &FetchRequest::append("", 2));
        fetch(&mut state, &all, &FetchRequest::reset("x"));
        assert_eq!(ids(&state.products), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.page, 1);
        fetch(&mut state, &all[..2], &FetchRequest::reset("y"));
        assert_eq!(ids(&state.products), vec![1, 2]);
        assert!(!state.has_more);
    }

    #[test]
    fn reset_is_allowed_after_exhaustion() {
        let mut state = CatalogState {
            has_more: false,
            page: 4,
            ..CatalogState::default()
        };
        assert_eq!(begin_fetch(&mut state, &FetchRequest::reset("new")), Ok(()));
        assert!(state.loading);
    }

    #[test]
    fn in_flight_guard_drops_every_trigger() {
        let mut state = CatalogState::default();
        assert_eq!(begin_fetch(&mut state, &FetchRequest::reset("")), Ok(()));
        assert_eq!(
            begin_fetch(&mut state, &FetchRequest::reset("a")),
            Err(SkipReason::InFlight)
        );
        assert_eq!(
            begin_fetch(&mut state, &FetchRequest::append("", 2)),
            Err(SkipReason::InFlight)
        );
        assert_eq!(next_page_request(&state), None);
    }

    #[test]
    fn failure_keeps_products_and_page() {
        let all = products(14);
        let mut state = CatalogState::default();
        fetch(&mut state, &all, &FetchRequest::reset(""));
        let request = FetchRequest::append("", 2);
        assert_eq!(begin_fetch(&mut state, &request), Ok(()));
        apply_failure(&mut state, &request, FETCH_ERROR_FALLBACK.to_string());
        assert!(!state.loading);
        assert_eq!(state.page, 1);
        assert_eq!(state.products.len(), 6);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_FALLBACK));
        assert_eq!(next_page_request(&state), Some(request));
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut state = CatalogState {
            error: Some("old".into()),
            ..CatalogState::default()
        };
        assert_eq!(begin_fetch(&mut state, &FetchRequest::reset("")), Ok(()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn next_page_uses_current_search_term() {
        let all = products(14);
        let mut state = CatalogState::default();
        set_search_term(&mut state, "lamp".into());
        fetch(&mut state, &all, &FetchRequest::reset("lamp"));
        assert_eq!(
            next_page_request(&state),
            Some(FetchRequest::append("lamp", 2))
        );
    }

    #[test]
    fn failed_reset_clears_list_and_restarts_at_page_one() {
        let all = products(14);
        let mut state = CatalogState::default();
        fetch(&mut state, &all, &FetchRequest::reset(""));
        fetch(&mut state, &all, &FetchRequest::append("", 2));

        set_search_term(&mut state, "ap".into());
        let request = FetchRequest::reset("ap");
        assert_eq!(begin_fetch(&mut state, &request), Ok(()));
        apply_failure(&mut state, &request, FETCH_ERROR_FALLBACK.to_string());

        assert!(state.products.is_empty());
        assert!(state.has_more);
        assert_eq!(state.listed_term, None);
        assert_eq!(next_page_request(&state), Some(FetchRequest::reset("ap")));
    }

    #[test]
    fn search_input_ahead_of_list_reloads_instead_of_appending() {
        let all = products(14);
        let mut state = CatalogState::default();
        fetch(&mut state, &all, &FetchRequest::reset(""));
        set_search_term(&mut state, "desk".into());
        assert!(needs_reload(&state));
        assert_eq!(next_page_request(&state), Some(FetchRequest::reset("desk")));
    }

    #[test]
    fn exhausted_stale_list_still_reloads() {
        let mut state = CatalogState::default();
        fetch(&mut state, &products(3), &FetchRequest::reset(""));
        assert_eq!(next_page_request(&state), None);
        set_search_term(&mut state, "mug".into());
        assert_eq!(next_page_request(&state), Some(FetchRequest::reset("mug")));
    }

    #[test]
    fn empty_state_only_when_idle() {
        let mut state = CatalogState::default();
        assert!(shows_empty_state(&state));
        state.loading = true;
        assert!(!shows_empty_state(&state));
    }
}
