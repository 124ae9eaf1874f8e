//! Pure UI helpers extracted from components for non-wasm testing.

use catalog_api_models::{PRODUCT_SEARCH_PATH, PRODUCTS_PATH, Product};

/// Path and query for a listing (`term` empty) or a name search.
#[must_use]
pub fn product_query_path(term: &str) -> String {
    if term.is_empty() {
        PRODUCTS_PATH.to_string()
    } else {
        format!("{PRODUCT_SEARCH_PATH}?name={}", urlencoding::encode(term))
    }
}

/// Join a configured base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Price rendered with a dollar sign and two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Image source for a product card, substituting `fallback` for missing URLs.
#[must_use]
pub fn image_src<'a>(product: &'a Product, fallback: &'a str) -> &'a str {
    product
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(fallback)
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_test_support::fixtures::product;

    #[test]
    fn empty_term_lists_everything() {
        assert_eq!(product_query_path(""), "/products");
    }

    #[test]
    fn search_term_is_percent_encoded() {
        assert_eq!(
            product_query_path("desk lamp&co"),
            "/products/search?name=desk%20lamp%26co"
        );
        assert_eq!(product_query_path(" "), "/products/search?name=%20");
    }

    #[test]
    fn endpoint_url_joins_without_double_slashes() {
        assert_eq!(
            endpoint_url("http://localhost:8080/api/", "/products"),
            "http://localhost:8080/api/products"
        );
        assert_eq!(endpoint_url("/api", "auth/login"), "/api/auth/login");
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1299.999), "$1300.00");
    }

    #[test]
    fn missing_or_blank_images_use_fallback() {
        let fallback = "https://via.placeholder.com/150";
        assert_eq!(image_src(&product(1), fallback), fallback);
        assert_eq!(
            image_src(&product(2), fallback),
            "https://images.example/2.png"
        );
        let blank = catalog_api_models::Product {
            image_url: Some("  ".into()),
            ..product(4)
        };
        assert_eq!(image_src(&blank, fallback), fallback);
    }

    #[test]
    fn bearer_prefixes_token() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
