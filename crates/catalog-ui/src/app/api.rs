//! Controller context shared by every component.
//!
//! # Design
//! - Create exactly one controller per app boot.
//! - Components reach the backend only through the controller.

use crate::app::preferences::LocalTokenStorage;
use crate::core::config::CatalogConfig;
use crate::core::controller::CatalogController;
use crate::core::store::AppStore;
use crate::services::api::ApiClient;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Controller wired to the browser collaborators.
pub(crate) type AppController = CatalogController<ApiClient, Dispatch<AppStore>, LocalTokenStorage>;

/// Shared controller and configuration.
#[derive(Clone)]
pub(crate) struct CatalogCtx {
    /// Singleton controller instance.
    pub controller: Rc<AppController>,
    /// Configuration the controller was built from.
    pub config: Rc<CatalogConfig>,
}

impl CatalogCtx {
    /// Wire the controller from `config`.
    pub(crate) fn new(config: Rc<CatalogConfig>) -> Self {
        let controller = CatalogController::new(
            ApiClient::new(config.api_base_url.clone()),
            Dispatch::<AppStore>::new(),
            LocalTokenStorage::new(config.token_storage_key.clone()),
            config.page_size,
        );
        Self {
            controller: Rc::new(controller),
            config,
        }
    }
}

impl PartialEq for CatalogCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}
