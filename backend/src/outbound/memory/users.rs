//! In-memory identity store.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{Table, poisoned};
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Email, NewUser, Role, User, UserId};

/// Identity store keeping accounts in registration order.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl MemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage<T>(err: std::sync::PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::storage(poisoned("user store", err))
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut table = self.table.write().map_err(storage)?;
        let taken = table
            .rows
            .iter()
            .any(|existing| existing.email() == &user.email && existing.role() == user.role);
        if taken {
            return Err(UserRepositoryError::duplicate(user.email.as_ref(), user.role));
        }
        Ok(table.push_with(|id| User::new(UserId::new(id), user)))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table.rows.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_login(
        &self,
        email: &Email,
        role: Role,
    ) -> Result<Option<User>, UserRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table
            .rows
            .iter()
            .find(|user| user.email() == email && user.has_role(role))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{DisplayName, Password};

    fn account(email: &str, role: Role) -> NewUser {
        NewUser {
            email: Email::new(email).expect("valid email"),
            password: Password::new("123456").expect("valid password"),
            role,
            display_name: DisplayName::new("Terish Babu").expect("valid name"),
        }
    }

    #[fixture]
    fn store() -> MemoryUserRepository {
        MemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn ids_increase_in_registration_order(store: MemoryUserRepository) {
        let first = store
            .insert(account("a@test.com", Role::Customer))
            .await
            .expect("insert");
        let second = store
            .insert(account("b@test.com", Role::Customer))
            .await
            .expect("insert");
        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn same_email_may_hold_each_role_once(store: MemoryUserRepository) {
        store
            .insert(account("dual@test.com", Role::Customer))
            .await
            .expect("customer account");
        store
            .insert(account("dual@test.com", Role::Employee))
            .await
            .expect("employee account");

        let err = store
            .insert(account("Dual@Test.com", Role::Employee))
            .await
            .expect_err("duplicate identity");
        assert_eq!(
            err,
            UserRepositoryError::Duplicate {
                email: "dual@test.com".to_owned(),
                role: Role::Employee,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn login_lookup_matches_role(store: MemoryUserRepository) {
        store
            .insert(account("customer@test.com", Role::Customer))
            .await
            .expect("insert");
        let email = Email::new("customer@test.com").expect("valid email");

        let customer = store
            .find_by_login(&email, Role::Customer)
            .await
            .expect("lookup");
        let employee = store
            .find_by_login(&email, Role::Employee)
            .await
            .expect("lookup");
        assert!(customer.is_some());
        assert!(employee.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_ids_are_absent(store: MemoryUserRepository) {
        let found = store.find_by_id(UserId::new(9)).await.expect("lookup");
        assert!(found.is_none());
    }
}
