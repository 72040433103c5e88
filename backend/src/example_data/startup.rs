//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::info;

use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeedingError};
use crate::example_data::config::ExampleDataSettings;
use crate::server::MemoryStores;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or validation failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Conversion or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Apply example data to `stores` when enabled.
///
/// # Examples
///
/// ```rust
/// use complaint_desk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use complaint_desk::server::MemoryStores;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: Some(false),
///     seed_name: Some("demo".to_owned()),
///     registry_path: None,
/// };
/// let outcome = seed_example_data_on_startup(&settings, &MemoryStores::new()).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    stores: &MemoryStores,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = match settings.registry_path() {
        Some(path) => load_registry(path)?,
        None => SeedRegistry::builtin()?,
    };
    let outcome = stores
        .seeder()
        .seed_from_registry(&registry, seed_name)
        .await?;

    info!(
        dataset = %outcome.dataset,
        users = outcome.user_count,
        products = outcome.product_count,
        complaints = outcome.complaint_count,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

/// Read and validate a registry file through a capability-scoped directory
/// handle.
///
/// # Errors
///
/// Returns [`StartupSeedingError::RegistryRead`] when the file cannot be
/// read and [`StartupSeedingError::Registry`] when its content is invalid.
pub fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}
