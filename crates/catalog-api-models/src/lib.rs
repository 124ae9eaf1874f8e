#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    dead_code,
    unused,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]
//! Shared HTTP DTOs for the product catalog API.
//!
//! The catalog front-end decodes these shapes verbatim; the server returns the
//! full result set for every listing or search and the client pages locally.

use serde::{Deserialize, Serialize};

/// Path of the full product listing endpoint.
pub const PRODUCTS_PATH: &str = "/products";
/// Path of the search-by-name endpoint (expects a `name` query parameter).
pub const PRODUCT_SEARCH_PATH: &str = "/products/search";
/// Path of the credential exchange endpoint.
pub const LOGIN_PATH: &str = "/auth/login";

/// Catalog entry as served by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description; absent descriptions decode as empty.
    #[serde(default)]
    pub description: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Optional product image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Credential payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

/// Error document returned alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure description, when the server supplies one.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The server message, ignoring blank strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_camel_case_image_url() -> Result<(), serde_json::Error> {
        let product: Product = serde_json::from_str(
            r#"{"id":7,"name":"Lamp","description":"Desk lamp","price":19.5,"imageUrl":"https://img/7.png"}"#,
        )?;
        assert_eq!(product.id, 7);
        assert_eq!(product.image_url.as_deref(), Some("https://img/7.png"));
        Ok(())
    }

    #[test]
    fn product_tolerates_missing_optional_fields() -> Result<(), serde_json::Error> {
        let product: Product = serde_json::from_str(r#"{"id":1,"name":"Mug","price":4}"#)?;
        assert!(product.description.is_empty());
        assert!(product.image_url.is_none());
        assert!((product.price - 4.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn error_body_ignores_blank_messages() -> Result<(), serde_json::Error> {
        let blank: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#)?;
        assert_eq!(blank.message(), None);
        let empty: ErrorBody = serde_json::from_str("{}")?;
        assert_eq!(empty.message(), None);
        let real: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#)?;
        assert_eq!(real.message(), Some("Invalid credentials"));
        Ok(())
    }

    #[test]
    fn login_request_serializes_flat_credentials() -> Result<(), serde_json::Error> {
        let body = serde_json::to_value(LoginRequest {
            username: "demouser".into(),
            password: "password".into(),
        })?;
        assert_eq!(body["username"], "demouser");
        assert_eq!(body["password"], "password");
        Ok(())
    }
}
