//! Composition root: wires configuration, telemetry, the store, and the view switch.

use crate::components::login_form::LoginForm;
use crate::components::product_grid::ProductGrid;
use crate::core::config::CatalogConfig;
use crate::core::store::{AppStore, StoreHandle};
use crate::telemetry;
use gloo::console;
use std::rc::Rc;
use tracing::{info, warn};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;

pub(crate) use api::CatalogCtx;
use preferences::load_config;

impl StoreHandle for Dispatch<AppStore> {
    fn snapshot(&self) -> Rc<AppStore> {
        self.get()
    }

    fn reduce<F>(&self, reducer: F)
    where
        F: FnOnce(&mut AppStore),
    {
        self.reduce_mut(reducer);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogAppProps {
    pub config: Rc<CatalogConfig>,
}

#[function_component(CatalogApp)]
pub(crate) fn catalog_app(props: &CatalogAppProps) -> Html {
    let ctx = {
        let config = props.config.clone();
        use_memo(move |_| CatalogCtx::new(config), ())
    };
    let logged_in = use_selector(AppStore::is_logged_in);

    {
        let ctx = (*ctx).clone();
        use_effect_with_deps(
            move |_| {
                if let Some(request) = ctx.controller.restore_session() {
                    let controller = ctx.controller.clone();
                    yew::platform::spawn_local(async move {
                        controller.fetch(request).await;
                    });
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<CatalogCtx> context={(*ctx).clone()}>
            <main class="catalog-app">
                {if *logged_in {
                    html! { <ProductGrid /> }
                } else {
                    html! { <LoginForm /> }
                }}
            </main>
        </ContextProvider<CatalogCtx>>
    }
}

/// Boot the catalog UI into `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    let (config, config_error) = load_config();
    if let Err(err) = telemetry::init_logging(&config.log_level) {
        console::error!("failed to initialise logging", err.to_string());
    }
    if let Some(detail) = config_error {
        warn!(%detail, "ignoring invalid build-time configuration");
    }
    info!(
        api_base_url = %config.api_base_url,
        page_size = config.page_size,
        "starting catalog ui"
    );

    let props = CatalogAppProps {
        config: Rc::new(config),
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CatalogApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<CatalogApp>::with_props(props).render();
    }
}
