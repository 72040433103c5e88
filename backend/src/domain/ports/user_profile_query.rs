//! Driving port for user profile queries.
//!
//! Inbound adapters use this port to show who is logged in without importing
//! the identity store.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading an account profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile for `user_id`, or a not-found error.
    async fn fetch_profile(&self, user_id: UserId) -> Result<User, Error>;
}
