//! App-wide yewdux store and session reducers.
//!
//! # Design
//! - Keep session and catalog state in one store so a single reduction updates both.
//! - Every session change bumps `epoch`; in-flight responses from an older epoch are
//!   discarded instead of applied.
//! - Reducers are plain functions over `&mut AppStore` and never touch storage or the
//!   network.

use crate::core::auth::Session;
use crate::core::catalog::CatalogState;
use std::cell::RefCell;
use std::rc::Rc;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub session: SessionSlice,
    /// Product list state.
    pub catalog: CatalogState,
}

/// Session slice of the store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Active session (empty token when signed out).
    pub session: Session,
    /// Incremented on every login, logout, and forced logout.
    pub epoch: u64,
    /// Login request in flight.
    pub login_busy: bool,
}

impl AppStore {
    /// Whether the catalog view (rather than the login form) should render.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.session.is_logged_in()
    }

    /// Bearer token for outbound requests.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.session.token().map(str::to_string)
    }
}

/// Install a freshly issued or restored token.
pub fn apply_login(store: &mut AppStore, token: String) {
    store.session.session = Session::from_token(token);
    store.session.epoch = store.session.epoch.wrapping_add(1);
    store.session.login_busy = false;
    store.catalog.error = None;
}

/// Voluntary logout: drop the session and reset the catalog view.
pub fn apply_logout(store: &mut AppStore) {
    store.session = SessionSlice {
        epoch: store.session.epoch.wrapping_add(1),
        ..SessionSlice::default()
    };
    store.catalog = CatalogState::default();
}

/// Logout forced by an authentication failure; `message` stays visible on the login form.
pub fn apply_forced_logout(store: &mut AppStore, message: String) {
    apply_logout(store);
    store.catalog.error = Some(message);
}

/// Record a failed login attempt without touching the session.
pub fn apply_login_failure(store: &mut AppStore, message: String) {
    store.session.login_busy = false;
    store.catalog.error = Some(message);
}

/// Mark a login request as started.
pub fn begin_login(store: &mut AppStore) {
    store.session.login_busy = true;
    store.catalog.error = None;
}

/// Read/write access to the app store, shared by the browser dispatch and tests.
pub trait StoreHandle {
    /// Current snapshot.
    fn snapshot(&self) -> Rc<AppStore>;
    /// Apply `reducer` as one atomic update.
    fn reduce<F>(&self, reducer: F)
    where
        F: FnOnce(&mut AppStore);
}

/// Store held in a plain `RefCell`, used off the browser.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    inner: Rc<RefCell<Rc<AppStore>>>,
}

impl LocalStore {
    /// Wrap an initial state.
    #[must_use]
    pub fn new(initial: AppStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Rc::new(initial))),
        }
    }
}

impl StoreHandle for LocalStore {
    fn snapshot(&self) -> Rc<AppStore> {
        self.inner.borrow().clone()
    }

    fn reduce<F>(&self, reducer: F)
    where
        F: FnOnce(&mut AppStore),
    {
        let mut slot = self.inner.borrow_mut();
        reducer(Rc::make_mut(&mut slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{FetchRequest, begin_fetch};
    use catalog_test_support::fixtures::products;

    fn logged_in_store() -> AppStore {
        let mut store = AppStore::default();
        apply_login(&mut store, "tok".into());
        store
    }

    #[test]
    fn login_sets_token_and_bumps_epoch() {
        let store = logged_in_store();
        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.session.epoch, 1);
    }

    #[test]
    fn logout_resets_catalog_view() {
        let mut store = logged_in_store();
        store.catalog.products = products(3);
        store.catalog.search_term = "lamp".into();
        store.catalog.page = 2;
        apply_logout(&mut store);
        assert!(!store.is_logged_in());
        assert_eq!(store.catalog, CatalogState::default());
        assert_eq!(store.session.epoch, 2);
    }

    #[test]
    fn forced_logout_keeps_the_error_visible() {
        let mut store = logged_in_store();
        assert_eq!(
            begin_fetch(&mut store.catalog, &FetchRequest::reset("")),
            Ok(())
        );
        apply_forced_logout(&mut store, "Token expired".into());
        assert!(!store.is_logged_in());
        assert!(!store.catalog.loading);
        assert!(store.catalog.products.is_empty());
        assert_eq!(store.catalog.error.as_deref(), Some("Token expired"));
    }

    #[test]
    fn login_failure_leaves_session_untouched() {
        let mut store = AppStore::default();
        begin_login(&mut store);
        assert!(store.session.login_busy);
        apply_login_failure(&mut store, "Login failed".into());
        assert!(!store.session.login_busy);
        assert!(!store.is_logged_in());
        assert_eq!(store.session.epoch, 0);
        assert_eq!(store.catalog.error.as_deref(), Some("Login failed"));
    }

    #[test]
    fn local_store_reductions_are_visible_to_new_snapshots() {
        let handle = LocalStore::default();
        let before = handle.snapshot();
        handle.reduce(|store| apply_login(store, "abc".into()));
        assert!(!before.is_logged_in());
        assert!(handle.snapshot().is_logged_in());
    }
}
