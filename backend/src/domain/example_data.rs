//! Example data seeding orchestration.
//!
//! Converts a validated dataset from the `example-data` registry into domain
//! users, products and complaints, then stores them through the driven
//! ports. Registry keys and product positions are resolved to the ids the
//! stores assign.

use std::collections::HashMap;
use std::sync::Arc;

use example_data::{
    ComplaintSeed, Dataset, ProductSeed, RegistryError, RoleSeed, SeedRegistry, StatusSeed,
    UserSeed,
};
use thiserror::Error;

use crate::domain::ports::{
    ComplaintRepository, ComplaintRepositoryError, ProductRepository, ProductRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    ComplaintDescription, ComplaintState, ComplaintStatus, ComplaintValidationError, DisplayName,
    Email, NewComplaint, NewProduct, NewUser, Password, Product, Role, UserId,
    UserValidationError,
};

/// Result of applying a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// Dataset name that was applied.
    pub dataset: String,
    /// Number of accounts stored.
    pub user_count: usize,
    /// Number of products stored.
    pub product_count: usize,
    /// Number of complaints stored.
    pub complaint_count: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// A seeded account failed backend validation.
    #[error("seeded user '{key}' failed validation: {source}")]
    InvalidUser {
        key: String,
        #[source]
        source: UserValidationError,
    },
    /// A seeded complaint failed backend validation.
    #[error("seeded complaint #{position} failed validation: {source}")]
    InvalidComplaint {
        position: usize,
        #[source]
        source: ComplaintValidationError,
    },
    /// A reference did not resolve once records were stored.
    #[error("seeded dataset has a dangling reference: {message}")]
    DanglingReference { message: String },
    /// Identity store rejected an account.
    #[error("example data user persistence error: {0}")]
    Users(#[from] UserRepositoryError),
    /// Catalogue store rejected a product.
    #[error("example data product persistence error: {0}")]
    Products(#[from] ProductRepositoryError),
    /// Ledger store rejected a complaint.
    #[error("example data complaint persistence error: {0}")]
    Complaints(#[from] ComplaintRepositoryError),
}

/// Service that stores a seed dataset through the driven ports.
#[derive(Clone)]
pub struct ExampleDataSeeder<U, P, C> {
    user_repo: Arc<U>,
    product_repo: Arc<P>,
    complaint_repo: Arc<C>,
}

impl<U, P, C> ExampleDataSeeder<U, P, C> {
    /// Create a new seeder over the three stores.
    pub fn new(user_repo: Arc<U>, product_repo: Arc<P>, complaint_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            product_repo,
            complaint_repo,
        }
    }
}

impl<U, P, C> ExampleDataSeeder<U, P, C>
where
    U: UserRepository,
    P: ProductRepository,
    C: ComplaintRepository,
{
    /// Apply the named dataset from `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if the dataset is unknown, a record
    /// fails domain validation, or a store rejects it. Records stored before
    /// the failure are kept.
    pub async fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        dataset_name: &str,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let dataset = registry.find_dataset(dataset_name)?;
        self.seed_dataset(dataset).await
    }

    /// Apply a single, already validated dataset.
    pub async fn seed_dataset(
        &self,
        dataset: &Dataset,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let mut user_ids = HashMap::with_capacity(dataset.users.len());
        for seed in &dataset.users {
            let user = self.user_repo.insert(convert_user(seed)?).await?;
            user_ids.insert(seed.key.as_str(), user.id());
        }

        let mut products = Vec::with_capacity(dataset.products.len());
        for seed in &dataset.products {
            let product = convert_product(seed, &user_ids)?;
            products.push(self.product_repo.insert(product).await?);
        }

        for (position, seed) in dataset.complaints.iter().enumerate() {
            let complaint = convert_complaint(position, seed, &user_ids, &products)?;
            self.complaint_repo.insert(complaint).await?;
        }

        Ok(ExampleDataSeedOutcome {
            dataset: dataset.name.clone(),
            user_count: dataset.users.len(),
            product_count: products.len(),
            complaint_count: dataset.complaints.len(),
        })
    }
}

fn resolve(user_ids: &HashMap<&str, UserId>, key: &str) -> Result<UserId, ExampleDataSeedingError> {
    user_ids
        .get(key)
        .copied()
        .ok_or_else(|| ExampleDataSeedingError::DanglingReference {
            message: format!("user key '{key}' was not stored"),
        })
}

fn convert_user(seed: &UserSeed) -> Result<NewUser, ExampleDataSeedingError> {
    let invalid = |source| ExampleDataSeedingError::InvalidUser {
        key: seed.key.clone(),
        source,
    };
    Ok(NewUser {
        email: Email::new(&seed.email).map_err(invalid)?,
        password: Password::new(&seed.password).map_err(invalid)?,
        role: map_role(seed.role),
        display_name: DisplayName::new(seed.display_name.as_str()).map_err(invalid)?,
    })
}

fn convert_product(
    seed: &ProductSeed,
    user_ids: &HashMap<&str, UserId>,
) -> Result<NewProduct, ExampleDataSeedingError> {
    Ok(NewProduct {
        name: seed.name.clone(),
        owner: resolve(user_ids, &seed.owner)?,
        purchase_date: seed.purchase_date,
    })
}

fn convert_complaint(
    position: usize,
    seed: &ComplaintSeed,
    user_ids: &HashMap<&str, UserId>,
    products: &[Product],
) -> Result<NewComplaint, ExampleDataSeedingError> {
    let customer = resolve(user_ids, &seed.customer)?;
    let product = products.get(seed.product).ok_or_else(|| {
        ExampleDataSeedingError::DanglingReference {
            message: format!("product position {} was not stored", seed.product),
        }
    })?;
    let assignee = seed
        .assignee
        .as_deref()
        .map(|key| resolve(user_ids, key))
        .transpose()?;
    let status = map_status(seed.status);
    let state = ComplaintState::from_parts(status, assignee).ok_or_else(|| {
        ExampleDataSeedingError::DanglingReference {
            message: format!("complaint #{position} has status {status} but assignee {assignee:?}"),
        }
    })?;
    let description = ComplaintDescription::new(&seed.description)
        .map_err(|source| ExampleDataSeedingError::InvalidComplaint { position, source })?;

    Ok(NewComplaint {
        customer,
        product: product.id(),
        product_name: product.name().to_owned(),
        description,
        state,
        reported_on: seed.reported_date,
    })
}

fn map_role(role: RoleSeed) -> Role {
    match role {
        RoleSeed::Customer => Role::Customer,
        RoleSeed::Employee => Role::Employee,
    }
}

fn map_status(status: StatusSeed) -> ComplaintStatus {
    match status {
        StatusSeed::New => ComplaintStatus::New,
        StatusSeed::Assigned => ComplaintStatus::Assigned,
        StatusSeed::InProgress => ComplaintStatus::InProgress,
        StatusSeed::Closed => ComplaintStatus::Closed,
    }
}
