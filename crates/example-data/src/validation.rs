//! Cross-reference checks applied to every dataset in a registry.

use std::collections::HashSet;

use crate::dataset::{Dataset, RoleSeed};
use crate::error::RegistryError;

/// Validate user keys, product owners, and complaint references.
///
/// # Errors
///
/// Returns the first [`RegistryError`] found while walking users, products,
/// and complaints in order.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), RegistryError> {
    let mut keys = HashSet::with_capacity(dataset.users.len());
    for user in &dataset.users {
        if !keys.insert(user.key.as_str()) {
            return Err(RegistryError::DuplicateUserKey {
                dataset: dataset.name.clone(),
                key: user.key.clone(),
            });
        }
    }

    for product in &dataset.products {
        expect_role(dataset, &product.owner, RoleSeed::Customer)?;
    }

    for (index, complaint) in dataset.complaints.iter().enumerate() {
        expect_role(dataset, &complaint.customer, RoleSeed::Customer)?;

        let product =
            dataset
                .products
                .get(complaint.product)
                .ok_or_else(|| RegistryError::UnknownProduct {
                    dataset: dataset.name.clone(),
                    complaint: index,
                    product: complaint.product,
                })?;
        if product.owner != complaint.customer {
            return Err(RegistryError::ForeignProduct {
                dataset: dataset.name.clone(),
                complaint: index,
            });
        }

        if complaint.status.requires_assignee() != complaint.assignee.is_some() {
            return Err(RegistryError::AssigneeMismatch {
                dataset: dataset.name.clone(),
                complaint: index,
            });
        }
        if let Some(assignee) = &complaint.assignee {
            expect_role(dataset, assignee, RoleSeed::Employee)?;
        }
    }

    Ok(())
}

fn expect_role(dataset: &Dataset, key: &str, role: RoleSeed) -> Result<(), RegistryError> {
    let user = dataset
        .user(key)
        .ok_or_else(|| RegistryError::UnknownUserKey {
            dataset: dataset.name.clone(),
            key: key.to_owned(),
        })?;
    if user.role == role {
        Ok(())
    } else {
        Err(RegistryError::RoleMismatch {
            dataset: dataset.name.clone(),
            key: key.to_owned(),
            expected: role.as_str(),
        })
    }
}
