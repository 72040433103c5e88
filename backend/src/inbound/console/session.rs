//! Login state for one console.
//!
//! The console remembers who is logged in between lines; there is no token
//! and nothing outlives the process.

use crate::domain::{Error, Role, UserId};

/// The logged-in account, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSession {
    current: Option<(UserId, Role)>,
}

impl ConsoleSession {
    /// Remember a successful login, replacing any previous one.
    pub fn persist_user(&mut self, user_id: UserId, role: Role) {
        self.current = Some((user_id, role));
    }

    /// Forget the current login. Returns whether someone was logged in.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Current login, if any.
    pub fn current(&self) -> Option<(UserId, Role)> {
        self.current
    }

    /// Require any login.
    pub fn require_user(&self) -> Result<(UserId, Role), Error> {
        self.current
            .ok_or_else(|| Error::invalid_credentials("login required"))
    }

    /// Require a login holding `role`.
    pub fn require_role(&self, role: Role) -> Result<UserId, Error> {
        let (user_id, current) = self.require_user()?;
        if current == role {
            Ok(user_id)
        } else {
            Err(Error::forbidden(format!("this command requires a {role} login")))
        }
    }
}
