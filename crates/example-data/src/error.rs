//! Error types for the example-data crate.
//!
//! Registry parsing, dataset lookup, and cross-reference validation all report
//! through [`RegistryError`], following the project's `thiserror` conventions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no datasets.
    #[error("registry contains no datasets")]
    EmptyDatasets,

    /// Two datasets share a name.
    #[error("dataset '{name}' is defined more than once")]
    DuplicateDataset {
        /// The repeated dataset name.
        name: String,
    },

    /// Two users in one dataset share a key.
    #[error("dataset '{dataset}' defines user key '{key}' more than once")]
    DuplicateUserKey {
        /// Dataset containing the duplicate.
        dataset: String,
        /// The repeated user key.
        key: String,
    },

    /// A product or complaint references a user key that does not exist.
    #[error("dataset '{dataset}' references unknown user key '{key}'")]
    UnknownUserKey {
        /// Dataset containing the dangling reference.
        dataset: String,
        /// The unresolved user key.
        key: String,
    },

    /// A user key resolved to an account with the wrong role.
    #[error("dataset '{dataset}' expects user '{key}' to have role {expected}")]
    RoleMismatch {
        /// Dataset containing the reference.
        dataset: String,
        /// The user key that was referenced.
        key: String,
        /// Role required at the reference site.
        expected: &'static str,
    },

    /// A complaint points past the end of the product list.
    #[error("dataset '{dataset}' complaint {complaint} references missing product {product}")]
    UnknownProduct {
        /// Dataset containing the complaint.
        dataset: String,
        /// Zero-based complaint position.
        complaint: usize,
        /// Zero-based product position that was requested.
        product: usize,
    },

    /// A complaint is filed against a product owned by someone else.
    #[error("dataset '{dataset}' complaint {complaint} is filed against another customer's product")]
    ForeignProduct {
        /// Dataset containing the complaint.
        dataset: String,
        /// Zero-based complaint position.
        complaint: usize,
    },

    /// Assignee presence does not agree with the complaint status.
    #[error("dataset '{dataset}' complaint {complaint} must have an assignee iff its status is not New")]
    AssigneeMismatch {
        /// Dataset containing the complaint.
        dataset: String,
        /// Zero-based complaint position.
        complaint: usize,
    },

    /// The requested dataset name was not found in the registry.
    #[error("dataset '{name}' not found in registry")]
    DatasetNotFound {
        /// The dataset name that was not found.
        name: String,
    },
}
