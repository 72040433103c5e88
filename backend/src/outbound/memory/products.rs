//! In-memory product catalogue.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{Table, poisoned};
use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{NewProduct, Product, ProductId, UserId};

/// Catalogue store keeping products in insertion order.
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    table: RwLock<Table<Product>>,
}

impl MemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage<T>(err: std::sync::PoisonError<T>) -> ProductRepositoryError {
    ProductRepositoryError::storage(poisoned("product store", err))
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductRepositoryError> {
        let mut table = self.table.write().map_err(storage)?;
        Ok(table.push_with(|id| Product::new(ProductId::new(id), product)))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table.rows.iter().find(|product| product.id() == id).cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Product>, ProductRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table
            .rows
            .iter()
            .filter(|product| product.is_owned_by(owner))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn product(name: &str, owner: u64) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            owner: UserId::new(owner),
            purchase_date: NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn owner_listing_keeps_insertion_order() {
        let store = MemoryProductRepository::new();
        for (name, owner) in [("Laptop Pro X1", 1), ("Kettle", 2), ("Smartphone Z10", 1)] {
            store.insert(product(name, owner)).await.expect("insert");
        }

        let listed = store.list_for_owner(UserId::new(1)).await.expect("list");
        let names: Vec<&str> = listed.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Laptop Pro X1", "Smartphone Z10"]);
        assert_eq!(listed[1].id(), ProductId::new(3));
    }

    #[rstest]
    #[tokio::test]
    async fn customers_without_products_get_empty_lists() {
        let store = MemoryProductRepository::new();
        let listed = store.list_for_owner(UserId::new(5)).await.expect("list");
        assert!(listed.is_empty());
    }
}
