//! Identity domain service.
//!
//! Implements registration, login and profile lookups over the
//! [`UserRepository`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    LoginService, UserProfileQuery, UserRegistration, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, NewUser, RegistrationForm, User, UserId};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Duplicate { .. } => {
            Error::duplicate_identity("an account with this email already exists")
        }
        UserRepositoryError::Storage { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Identity service implementing the account driving ports.
#[derive(Clone)]
pub struct IdentityService<U> {
    user_repo: Arc<U>,
}

impl<U> IdentityService<U> {
    /// Create a new service over the identity store.
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserRegistration for IdentityService<U>
where
    U: UserRepository,
{
    async fn register(&self, form: RegistrationForm) -> Result<UserId, Error> {
        let new_user = NewUser::try_from(form).map_err(|err| Error::invalid_input(err.to_string()))?;
        let user = self
            .user_repo
            .insert(new_user)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user.id(), role = %user.role(), "account registered");
        Ok(user.id())
    }
}

#[async_trait]
impl<U> LoginService for IdentityService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let role = credentials.role();
        let found = self
            .user_repo
            .find_by_login(credentials.email(), role)
            .await
            .map_err(map_repository_error)?;

        match found {
            Some(user) if user.password().matches(credentials.password()) => {
                debug!(user_id = %user.id(), role = %role, "login accepted");
                Ok(user.id())
            }
            _ => Err(Error::invalid_credentials(format!(
                "invalid credentials; check your email, password and the correct user type \
                 ({role})"
            ))),
        }
    }
}

#[async_trait]
impl<U> UserProfileQuery for IdentityService<U>
where
    U: UserRepository,
{
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))
    }
}
