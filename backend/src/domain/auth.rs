//! Authentication primitives: login credentials and registration forms.
//!
//! Keep inbound payload parsing outside the identity service by exposing
//! constructors that validate string inputs before a port is called.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{DisplayName, Email, NewUser, Password, Role, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email or password was blank once trimmed.
    MissingCredentials,
    /// Email failed format validation.
    InvalidEmail,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "please enter both email and password"),
            Self::InvalidEmail => write!(f, "please enter a valid email address"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the identity service.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased, and well formed.
/// - `password` is trimmed and non-empty. Length is not checked here; a
///   password that is too short simply matches no account.
///
/// # Examples
/// ```
/// use complaint_desk::domain::{LoginCredentials, Role};
///
/// let creds = LoginCredentials::try_from_parts(" Customer@Test.com", "123456", Role::Customer).unwrap();
/// assert_eq!(creds.email().as_ref(), "customer@test.com");
/// assert_eq!(creds.password(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self, LoginValidationError> {
        let password = password.trim();
        if email.trim().is_empty() || password.is_empty() {
            return Err(LoginValidationError::MissingCredentials);
        }
        let email = Email::new(email).map_err(|_| LoginValidationError::InvalidEmail)?;

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Normalised email suitable for account lookups.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller, trimmed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Role the caller is logging in as.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Domain error returned when a registration form is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Name, email, or password was blank.
    MissingFields,
    /// A field failed its own validation.
    Field(UserValidationError),
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "please fill in all required fields"),
            Self::Field(err) => err.fmt(f),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

impl From<UserValidationError> for RegistrationValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Field(value)
    }
}

/// Raw registration form as entered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl TryFrom<RegistrationForm> for NewUser {
    type Error = RegistrationValidationError;

    /// Validate in the order the sign-up form reports problems: required
    /// fields, name, email, password length, then confirmation.
    fn try_from(form: RegistrationForm) -> Result<Self, Self::Error> {
        let RegistrationForm {
            display_name,
            email,
            password,
            confirm_password,
            role,
        } = form;

        if display_name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty()
        {
            return Err(RegistrationValidationError::MissingFields);
        }

        let display_name = DisplayName::new(display_name)?;
        let email = Email::new(email)?;
        let password_value = Password::new(&password)?;
        if password.trim() != confirm_password.trim() {
            return Err(RegistrationValidationError::PasswordMismatch);
        }

        Ok(Self {
            email,
            password: password_value,
            role,
            display_name,
        })
    }
}
