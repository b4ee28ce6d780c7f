//! Client for the public product catalog API.
//!
//! Catalog failures are recoverable-and-reportable: callers surface a
//! message and leave cart state unchanged. Nothing in this module touches
//! the cart.

pub mod types;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{instrument, warn};

use greenbasket_core::{CurrencyCode, MoneyError};

use crate::config::CatalogConfig;
use self::types::{Product, ProductRecord};

/// Errors returned by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or a response body that does not decode into the
    /// expected shape.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned status {status}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
    },

    /// A record decoded but carried a price no product can have.
    #[error("catalog product {id} rejected: {source}")]
    InvalidPrice {
        /// Catalog id of the offending record.
        id: i64,
        #[source]
        source: MoneyError,
    },
}

/// Async client for the product catalog REST API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    currency_code: CurrencyCode,
}

impl CatalogClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            currency_code: config.currency_code,
        })
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// or a record that fails boundary validation.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products("products").await
    }

    /// Fetch the products in one category.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CatalogClient::products`].
    #[instrument(skip(self))]
    pub async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products(&format!("products/category/{category}"))
            .await
    }

    /// Fetch the list of category names.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on transport failure or non-success status.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("products/categories").await
    }

    async fn fetch_products(&self, path: &str) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<ProductRecord> = self.get_json(path).await?;
        records
            .into_iter()
            .map(|record| {
                let id = record.id;
                Product::from_record(record, self.currency_code)
                    .map_err(|source| CatalogError::InvalidPrice { id, source })
            })
            .collect()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, path, "catalog request failed");
            return Err(CatalogError::Status { status });
        }
        Ok(response.json::<T>().await?)
    }
}
