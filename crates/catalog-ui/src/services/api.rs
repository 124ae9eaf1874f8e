//! HTTP client helpers (REST).

use crate::core::controller::CatalogBackend;
use crate::core::error::ApiError;
use crate::core::logic::{bearer, endpoint_url, product_query_path};
use async_trait::async_trait;
use catalog_api_models::{ErrorBody, LOGIN_PATH, LoginRequest, LoginResponse, Product};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    async fn get_products(&self, path: &str, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let mut req = Request::get(&self.url(path)).header("Content-Type", JSON_CONTENT_TYPE);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let response = req.send().await.map_err(network_error)?;
        decode(response).await
    }
}

#[async_trait(?Send)]
impl CatalogBackend for ApiClient {
    async fn list_products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        self.get_products(&product_query_path(""), token).await
    }

    async fn search_products(
        &self,
        term: &str,
        token: Option<&str>,
    ) -> Result<Vec<Product>, ApiError> {
        self.get_products(&product_query_path(term), token).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url(LOGIN_PATH))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .json(request)
            .map_err(|err| ApiError::Validation {
                detail: err.to_string(),
            })?
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        return Err(ApiError::from_status(status, body.as_ref()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Validation {
            detail: err.to_string(),
        })
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network {
        detail: err.to_string(),
    }
}
