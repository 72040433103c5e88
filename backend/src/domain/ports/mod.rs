//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by storage adapters and
//! expose strongly typed errors generated by `define_port_error!`. Driving
//! ports are the use cases inbound adapters call; they return the domain
//! [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod complaint_command;
mod complaint_query;
mod complaint_repository;
mod login_service;
mod product_repository;
mod user_profile_query;
mod user_registration;
mod user_repository;

pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
#[cfg(test)]
pub use complaint_command::MockComplaintCommand;
pub use complaint_command::{
    AdvanceComplaintRequest, ClaimComplaintRequest, ComplaintCommand, FileComplaintRequest,
};
#[cfg(test)]
pub use complaint_query::MockComplaintQuery;
pub use complaint_query::{ComplaintQuery, CustomerDashboard, EmployeeQueues};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{ComplaintFilter, ComplaintRepository, ComplaintRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
