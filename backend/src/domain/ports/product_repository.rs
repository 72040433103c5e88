//! Port abstraction for the product catalogue store.

use async_trait::async_trait;

use crate::domain::{NewProduct, Product, ProductId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Backing storage failed.
        Storage { message: String } => "product repository storage failed: {message}",
    }
}

/// Port for product ownership records.
///
/// Products are only created by seeding; no use case mutates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Assign the next id and store the product.
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductRepositoryError>;

    /// Fetch a product by identifier.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Products owned by `owner`, in insertion order.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Product>, ProductRepositoryError>;
}
