//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the strongly typed entities of the complaint desk and the
//! services that enforce its rules. Adapters reach the domain only through
//! [`ports`]; the services here are generic over the driven ports so tests
//! can substitute mocks or the in-memory stores.
//!
//! Public surface:
//! - Error / ErrorCode: the single error payload every use case returns.
//! - User, Product, Complaint: the three owned record types.
//! - IdentityService, CatalogueService, ComplaintLedger,
//!   ComplaintQueryService: driving port implementations.
//! - ExampleDataSeeder: loads a seed dataset through the driven ports.

pub mod auth;
pub mod complaint;
pub mod error;
pub mod ports;
pub mod product;
pub mod user;

mod catalogue_service;
mod complaint_ledger;
mod complaint_query_service;
mod example_data;
mod identity_service;

pub use self::auth::{
    LoginCredentials, LoginValidationError, RegistrationForm, RegistrationValidationError,
};
pub use self::catalogue_service::CatalogueService;
pub use self::complaint::{
    Complaint, ComplaintDescription, ComplaintId, ComplaintState, ComplaintStatus,
    ComplaintValidationError, LifecycleError, NewComplaint, StatusUpdate, display_order,
};
pub use self::complaint_ledger::{ComplaintLedger, MAX_TRANSITION_ATTEMPTS};
pub use self::complaint_query_service::ComplaintQueryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
pub use self::identity_service::IdentityService;
pub use self::product::{NewProduct, Product, ProductId};
pub use self::user::{
    DISPLAY_NAME_MIN, DisplayName, Email, NewUser, PASSWORD_MIN, Password, Role, User, UserId,
    UserValidationError,
};

/// Convenient use-case result alias.
///
/// # Examples
/// ```
/// use complaint_desk::domain::{DomainResult, Error};
///
/// fn claim() -> DomainResult<()> {
///     Err(Error::already_claimed("complaint is already Assigned"))
/// }
/// assert!(claim().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
