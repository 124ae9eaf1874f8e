//! Catalog request lifecycle: session manager, fetcher, and pagination trigger.
//!
//! # Design
//! - The controller is the only place that talks to the backend and token storage.
//! - Admission (in-flight guard + loading flag) happens inside one store reduction before
//!   the first await, so back-to-back triggers cannot both dispatch.
//! - Responses carry the session epoch they started under; a changed epoch means the
//!   user logged out in the meantime and the response is dropped.
//! - Every failure is converted to a display string in the store; nothing is rethrown to
//!   the view layer.

use crate::core::auth::{Credentials, LoginInputError, TokenStorage, stored_token};
use crate::core::catalog::{
    FETCH_ERROR_FALLBACK, FetchRequest, SkipReason, apply_failure, apply_page, begin_fetch,
    next_page_request, paginate, set_search_term,
};
use crate::core::error::ApiError;
use crate::core::store::{
    StoreHandle, apply_forced_logout, apply_login, apply_login_failure, apply_logout, begin_login,
};
use async_trait::async_trait;
use catalog_api_models::{LoginRequest, LoginResponse, Product};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fallback message for failed logins without a server message.
pub const LOGIN_ERROR_FALLBACK: &str = "Login failed";

/// Remote catalog API as seen by the controller.
#[async_trait(?Send)]
pub trait CatalogBackend {
    /// Full product listing.
    async fn list_products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError>;
    /// Products whose name matches `term`.
    async fn search_products(
        &self,
        term: &str,
        token: Option<&str>,
    ) -> Result<Vec<Product>, ApiError>;
    /// Exchange credentials for a bearer token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// Result of one fetch attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was applied to the store.
    Applied {
        /// Page number applied.
        page: u32,
        /// Products now visible.
        shown: usize,
        /// Size of the server result set.
        total: usize,
        /// Whether more pages remain.
        has_more: bool,
    },
    /// The request was dropped by a guard.
    Skipped(SkipReason),
    /// The session changed while the request was in flight; the response was dropped.
    Stale,
    /// The request failed; the message is already in the store.
    Failed(ApiError),
}

/// Login failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The form was incomplete; no request was sent.
    #[error(transparent)]
    Input(#[from] LoginInputError),
    /// The server or transport rejected the attempt.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Owns the backend, store, and token storage for one app instance.
pub struct CatalogController<B, S, T> {
    backend: B,
    store: S,
    tokens: T,
    page_size: usize,
}

impl<B, S, T> CatalogController<B, S, T>
where
    B: CatalogBackend,
    S: StoreHandle,
    T: TokenStorage,
{
    /// Assemble a controller; `page_size` is clamped to at least one.
    pub fn new(backend: B, store: S, tokens: T, page_size: usize) -> Self {
        Self {
            backend,
            store,
            tokens,
            page_size: page_size.max(1),
        }
    }

    /// Store handle backing this controller.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Adopt a persisted token, returning the initial request when one was found.
    pub fn restore_session(&self) -> Option<FetchRequest> {
        let token = stored_token(self.tokens.load())?;
        self.store.reduce(|store| apply_login(store, token));
        info!("restored persisted session");
        Some(FetchRequest::reset(String::new()))
    }

    /// Exchange credentials for a token, persist it, and load the first page.
    ///
    /// # Errors
    /// Returns [`LoginError`] when the form is incomplete or the server rejects the
    /// attempt; the display message is recorded in the store either way.
    pub async fn login(&self, credentials: Credentials) -> Result<FetchOutcome, LoginError> {
        if let Err(err) = credentials.validate() {
            self.store
                .reduce(|store| apply_login_failure(store, err.to_string()));
            return Err(err.into());
        }

        self.store.reduce(begin_login);
        let request = LoginRequest {
            username: credentials.username,
            password: credentials.password,
        };
        let response = match self.backend.login(&request).await {
            Ok(response) if !response.token.trim().is_empty() => response,
            Ok(_) => {
                let err = ApiError::Validation {
                    detail: "login response carried an empty token".to_string(),
                };
                return Err(self.record_login_failure(err).into());
            }
            Err(err) => return Err(self.record_login_failure(err).into()),
        };

        self.tokens.store(&response.token);
        self.store
            .reduce(|store| apply_login(store, response.token));
        info!(username = %request.username, "login succeeded");

        let search_term = self.store.snapshot().catalog.search_term.clone();
        Ok(self.fetch(FetchRequest::reset(search_term)).await)
    }

    fn record_login_failure(&self, err: ApiError) -> ApiError {
        warn!(error = %err, "login failed");
        let message = err.display_message(LOGIN_ERROR_FALLBACK);
        self.store
            .reduce(|store| apply_login_failure(store, message));
        err
    }

    /// Drop the session and clear the catalog view.
    pub fn logout(&self) {
        self.tokens.clear();
        self.store.reduce(apply_logout);
        info!("logged out");
    }

    /// Record the search input immediately, without fetching.
    pub fn update_search(&self, term: String) {
        self.store
            .reduce(|store| set_search_term(&mut store.catalog, term));
    }

    /// Restart the list at page one for `term`.
    pub async fn search(&self, term: String) -> FetchOutcome {
        self.fetch(FetchRequest::reset(term)).await
    }

    /// Fetch the next page for the current search term, when the guards allow.
    ///
    /// Appends normally; restarts at page one when the visible list does not belong to
    /// the current term (a failed or dropped reset).
    pub async fn load_next_page(&self) -> FetchOutcome {
        let snapshot = self.store.snapshot();
        if !snapshot.is_logged_in() {
            return FetchOutcome::Skipped(SkipReason::SignedOut);
        }
        match next_page_request(&snapshot.catalog) {
            Some(request) => self.fetch(request).await,
            None if snapshot.catalog.loading => FetchOutcome::Skipped(SkipReason::InFlight),
            None => FetchOutcome::Skipped(SkipReason::Exhausted),
        }
    }

    /// Run one request through admission, transport, and settlement.
    pub async fn fetch(&self, request: FetchRequest) -> FetchOutcome {
        let mut admission = Err(SkipReason::SignedOut);
        self.store.reduce(|store| {
            if store.is_logged_in() {
                let epoch = store.session.epoch;
                let token = store.token();
                admission = begin_fetch(&mut store.catalog, &request).map(|()| (epoch, token));
            }
        });
        let (epoch, token) = match admission {
            Ok(admitted) => admitted,
            Err(reason) => {
                debug!(%reason, page = request.page, "fetch skipped");
                return FetchOutcome::Skipped(reason);
            }
        };

        debug!(
            term = %request.search_term,
            page = request.page,
            reset = request.reset,
            "fetching products"
        );
        let result = if request.search_term.is_empty() {
            self.backend.list_products(token.as_deref()).await
        } else {
            self.backend
                .search_products(&request.search_term, token.as_deref())
                .await
        };

        if self.store.snapshot().session.epoch != epoch {
            debug!(page = request.page, "discarding response from a previous session");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(all) => {
                let slice = paginate(all, request.page, self.page_size);
                let total = slice.total;
                let has_more = slice.has_more();
                self.store
                    .reduce(|store| apply_page(&mut store.catalog, &request, slice));
                let shown = self.store.snapshot().catalog.products.len();
                info!(page = request.page, shown, total, has_more, "products loaded");
                FetchOutcome::Applied {
                    page: request.page.max(1),
                    shown,
                    total,
                    has_more,
                }
            }
            Err(err) if err.is_authentication() => {
                warn!(error = %err, "session rejected; logging out");
                let message = err.display_message(FETCH_ERROR_FALLBACK);
                self.tokens.clear();
                self.store
                    .reduce(|store| apply_forced_logout(store, message));
                FetchOutcome::Failed(err)
            }
            Err(err) => {
                warn!(error = %err, page = request.page, "product fetch failed");
                let message = err.display_message(FETCH_ERROR_FALLBACK);
                self.store
                    .reduce(|store| apply_failure(&mut store.catalog, &request, message));
                FetchOutcome::Failed(err)
            }
        }
    }
}
