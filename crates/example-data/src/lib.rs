//! Demo datasets for the complaint desk.
//!
//! This crate loads named datasets (accounts, product ownership records, and
//! complaints) from a JSON seed registry and validates their cross
//! references. It is independent of backend domain types to avoid circular
//! dependencies; the backend converts the seed records into its own entities.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON strings or files
//! - A bundled registry whose `demo` dataset holds the walkthrough accounts
//! - Reference validation (owners, assignees, product positions, roles)
//!
//! # Example
//!
//! ```
//! use example_data::{DEFAULT_DATASET, SeedRegistry};
//!
//! let registry = SeedRegistry::builtin().expect("bundled registry");
//! let demo = registry.find_dataset(DEFAULT_DATASET).expect("demo dataset");
//!
//! assert_eq!(demo.products[0].name, "Laptop Pro X1");
//! ```

mod dataset;
mod error;
mod registry;
mod validation;

pub use dataset::{ComplaintSeed, Dataset, ProductSeed, RoleSeed, StatusSeed, UserSeed};
pub use error::RegistryError;
pub use registry::{DEFAULT_DATASET, SeedRegistry};
pub use validation::validate_dataset;
