//! Single product tile.

use crate::core::logic::{format_price, image_src};
use catalog_api_models::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductCardProps {
    pub product: Product,
    pub fallback_image: AttrValue,
}

#[function_component(ProductCard)]
pub(crate) fn product_card(props: &ProductCardProps) -> Html {
    // Swapped to the placeholder at most once, so a broken placeholder cannot loop.
    let image_failed = use_state(|| false);
    let product = &props.product;
    let src = if *image_failed {
        props.fallback_image.to_string()
    } else {
        image_src(product, &props.fallback_image).to_string()
    };

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            if !*image_failed {
                image_failed.set(true);
            }
        })
    };

    html! {
        <article class="product-card">
            <img class="product-image" {src} alt={product.name.clone()} loading="lazy" {onerror} />
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="product-description">{product.description.clone()}</p>
                <p class="product-price">{format_price(product.price)}</p>
            </div>
        </article>
    }
}
