//! HTTP client for the store API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::CatalogError;
use super::model::Product;

/// The three remote listings the screen consumes.
///
/// `StoreClient` is the production implementation; tests substitute their own.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /products`
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// `GET /products/categories`
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;

    /// `GET /products/category/{category}`
    async fn products_in(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

pub struct StoreClient {
    client: Client,
    base_url: Url,
}

impl StoreClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let base_url = parse_base(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| CatalogError::Transport {
                endpoint: base_url.to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    /// Resolves `segments` below the base path. Each segment is
    /// percent-encoded on its own, so a category such as `men's clothing`
    /// never splits into extra path components.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let endpoint = url.path().to_string();
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %endpoint, status = status.as_u16(), "Store API returned error status");
            return Err(CatalogError::RequestFailed {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Transport { endpoint, source })
    }
}

#[async_trait]
impl CatalogApi for StoreClient {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(self.endpoint(&["products"])).await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(self.endpoint(&["products", "categories"])).await
    }

    async fn products_in(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.get_json(self.endpoint(&["products", "category", category]))
            .await
    }
}

fn parse_base(raw: &str) -> Result<Url, CatalogError> {
    match Url::parse(raw) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(CatalogError::InvalidBaseUrl {
            url: raw.to_string(),
        }),
    }
}
