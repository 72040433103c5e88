//! Product ownership records held by the catalogue.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Stable product identifier assigned by the catalogue store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product fields before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub owner: UserId,
    pub purchase_date: NaiveDate,
}

/// A product purchased by one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    owner: UserId,
    purchase_date: NaiveDate,
}

impl Product {
    /// Build a stored product from an assigned id.
    pub fn new(id: ProductId, fields: NewProduct) -> Self {
        let NewProduct {
            name,
            owner,
            purchase_date,
        } = fields;
        Self {
            id,
            name,
            owner,
            purchase_date,
        }
    }

    /// Stable product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Owning customer.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Date of purchase.
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Whether `customer` owns this product.
    pub fn is_owned_by(&self, customer: UserId) -> bool {
        self.owner == customer
    }
}
