//! Seed registry types and JSON parsing.
//!
//! The registry holds named datasets. It is loaded from JSON, validated as a
//! whole, and then provides dataset lookups by name.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dataset::Dataset;
use crate::error::RegistryError;
use crate::validation::validate_dataset;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Name of the bundled dataset holding the demo accounts.
pub const DEFAULT_DATASET: &str = "demo";

const BUILTIN_REGISTRY: &str = include_str!("../fixtures/registry.json");

/// A registry of named demo datasets.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "datasets": [{
///         "name": "tiny",
///         "users": [{
///             "key": "ann",
///             "email": "ann@example.com",
///             "password": "secret1",
///             "role": "customer",
///             "displayName": "Ann"
///         }]
///     }]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.datasets().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    datasets: Vec<Dataset>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or a date is not `YYYY-MM-DD`
    /// - The version is unsupported
    /// - The datasets array is empty or names repeat
    /// - Any dataset has dangling or inconsistent references
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the registry compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] only if the bundled fixture is corrupt.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.datasets.is_empty() {
            return Err(RegistryError::EmptyDatasets);
        }

        let mut names = HashSet::with_capacity(raw.datasets.len());
        for dataset in &raw.datasets {
            if !names.insert(dataset.name.as_str()) {
                return Err(RegistryError::DuplicateDataset {
                    name: dataset.name.clone(),
                });
            }
            validate_dataset(dataset)?;
        }

        Ok(Self {
            version: raw.version,
            datasets: raw.datasets,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all datasets in file order.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Finds a dataset by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DatasetNotFound`] if no dataset with the given
    /// name exists.
    pub fn find_dataset(&self, name: &str) -> Result<&Dataset, RegistryError> {
        self.datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| RegistryError::DatasetNotFound {
                name: name.to_owned(),
            })
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    datasets: Vec<Dataset>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn builtin_registry_contains_demo_dataset() {
        let registry = SeedRegistry::builtin().expect("bundled registry is valid");
        let demo = registry
            .find_dataset(DEFAULT_DATASET)
            .expect("demo dataset exists");

        assert_eq!(demo.users.len(), 2);
        assert_eq!(demo.products.len(), 3);
        assert_eq!(demo.complaints.len(), 2);
    }

    #[rstest]
    #[case(r#"{"version": 2, "datasets": []}"#)]
    #[case(r#"{"version": 7, "datasets": [{"name": "x"}]}"#)]
    fn rejects_unsupported_versions(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(
            result,
            Err(RegistryError::UnsupportedVersion { expected: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_dataset_names() {
        let json = r#"{"version": 1, "datasets": [{"name": "a"}, {"name": "a"}]}"#;
        assert_eq!(
            SeedRegistry::from_json(json),
            Err(RegistryError::DuplicateDataset {
                name: "a".to_owned()
            })
        );
    }
}
