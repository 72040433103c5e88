//! Driving port for reading the product catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, UserId};

/// Domain use-case port for product lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Products owned by `customer`, in insertion order.
    async fn products_for_customer(&self, customer: UserId) -> Result<Vec<Product>, Error>;

    /// Look up a single product.
    async fn find_product(&self, product: ProductId) -> Result<Option<Product>, Error>;
}
