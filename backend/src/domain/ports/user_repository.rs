//! Port abstraction for account storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Email, NewUser, Role, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// An account with this `(email, role)` pair already exists.
        Duplicate { email: String, role: Role } =>
            "an account for {email} with role {role} already exists",
        /// Backing storage failed.
        Storage { message: String } => "user repository storage failed: {message}",
    }
}

/// Port for the identity store.
///
/// The uniqueness check and the insert in [`UserRepository::insert`] happen
/// atomically, so two concurrent registrations for the same identity cannot
/// both succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign the next id and store the account.
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the account registered for `email` under `role`.
    async fn find_by_login(
        &self,
        email: &Email,
        role: Role,
    ) -> Result<Option<User>, UserRepositoryError>;
}
