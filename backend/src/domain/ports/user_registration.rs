//! Driving port for creating accounts.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationForm, UserId};

/// Domain use-case port for self-service sign-up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate the form and create the account.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidInput`] for form problems
    /// and [`crate::domain::ErrorCode::DuplicateIdentity`] when the
    /// `(email, role)` pair is taken.
    async fn register(&self, form: RegistrationForm) -> Result<UserId, Error>;
}
