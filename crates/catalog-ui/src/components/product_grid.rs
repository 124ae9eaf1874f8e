//! Catalog view: header with search and logout, the product grid, and the pagination
//! triggers.
//!
//! # Design
//! - All state comes from the shared store; every action goes through the controller.
//! - The sentinel and the load-more button share one capability and one guard.

use crate::app::CatalogCtx;
use crate::components::empty_state::EmptyState;
use crate::components::product_card::ProductCard;
use crate::components::scroll_sentinel::ScrollSentinel;
use crate::components::search_input::SearchInput;
use crate::core::catalog::shows_empty_state;
use crate::core::scroll::{load_more_enabled, sentinel_active, sentinel_armed};
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ProductGrid)]
pub(crate) fn product_grid() -> Html {
    let ctx = use_context::<CatalogCtx>();
    let catalog = use_selector(|store: &AppStore| store.catalog.clone());

    let Some(ctx) = ctx else {
        return html! {};
    };
    let config = ctx.config.clone();

    let on_input = {
        let controller = ctx.controller.clone();
        Callback::from(move |term: String| controller.update_search(term))
    };

    let on_search = {
        let controller = ctx.controller.clone();
        Callback::from(move |term: String| {
            let controller = controller.clone();
            yew::platform::spawn_local(async move {
                controller.search(term).await;
            });
        })
    };

    let load_more = {
        let controller = ctx.controller.clone();
        Callback::from(move |()| {
            let controller = controller.clone();
            yew::platform::spawn_local(async move {
                controller.load_next_page().await;
            });
        })
    };

    let on_logout = {
        let controller = ctx.controller.clone();
        Callback::from(move |_: MouseEvent| controller.logout())
    };

    let fallback_image = AttrValue::from(config.fallback_image_url.clone());

    html! {
        <section class="product-catalog">
            <header class="catalog-header">
                <h1>{"Product Catalog"}</h1>
                <SearchInput
                    value={catalog.search_term.clone()}
                    placeholder="Search products..."
                    debounce_ms={config.search_debounce_ms}
                    {on_input}
                    {on_search}
                />
                <button class="ghost" onclick={on_logout}>{"Logout"}</button>
            </header>
            {catalog.error.as_ref().map(|message| html! {
                <p class="error-message" role="alert">{message.clone()}</p>
            }).unwrap_or_default()}
            <div class="product-grid">
                {for catalog.products.iter().enumerate().map(|(index, product)| html! {
                    <ProductCard
                        key={format!("{index}-{}", product.id)}
                        product={product.clone()}
                        fallback_image={fallback_image.clone()}
                    />
                })}
            </div>
            {if catalog.loading {
                html! { <p class="loading">{"Loading products..."}</p> }
            } else {
                html! {}
            }}
            {if shows_empty_state(&catalog) {
                html! { <EmptyState title="No products found" /> }
            } else {
                html! {}
            }}
            {if sentinel_active(&catalog) {
                let on_click = load_more.reform(|_: MouseEvent| ());
                html! {
                    <>
                        <ScrollSentinel
                            threshold={config.scroll_threshold}
                            enabled={sentinel_armed(&catalog)}
                            on_visible={load_more.clone()}
                        />
                        <button
                            class="load-more"
                            disabled={!load_more_enabled(&catalog)}
                            onclick={on_click}
                        >
                            {"Load more"}
                        </button>
                    </>
                }
            } else {
                html! {}
            }}
        </section>
    }
}
