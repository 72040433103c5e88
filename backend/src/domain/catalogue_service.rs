//! Product catalogue domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CatalogueQuery, ProductRepository, ProductRepositoryError};
use crate::domain::{Error, Product, ProductId, UserId};

fn map_repository_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Storage { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

/// Catalogue service implementing [`CatalogueQuery`].
#[derive(Clone)]
pub struct CatalogueService<P> {
    product_repo: Arc<P>,
}

impl<P> CatalogueService<P> {
    /// Create a new service over the catalogue store.
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl<P> CatalogueQuery for CatalogueService<P>
where
    P: ProductRepository,
{
    async fn products_for_customer(&self, customer: UserId) -> Result<Vec<Product>, Error> {
        self.product_repo
            .list_for_owner(customer)
            .await
            .map_err(map_repository_error)
    }

    async fn find_product(&self, product: ProductId) -> Result<Option<Product>, Error> {
        self.product_repo
            .find_by_id(product)
            .await
            .map_err(map_repository_error)
    }
}
