//! Example data configuration loaded via OrthoConfig.

use std::path::PathBuf;

use example_data::DEFAULT_DATASET;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling example data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the stores on startup; seeding runs unless this is `false`.
    pub enabled: Option<bool>,
    /// Dataset name to load from the registry.
    pub seed_name: Option<String>,
    /// Registry file; the bundled registry is used when absent.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Whether seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Return the configured dataset name, falling back to the default.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_DATASET)
    }

    /// Registry file override, if one was configured.
    pub fn registry_path(&self) -> Option<&PathBuf> {
        self.registry_path.as_ref()
    }
}

impl Default for ExampleDataSettings {
    fn default() -> Self {
        Self {
            enabled: None,
            seed_name: None,
            registry_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ExampleDataSettings {
        ExampleDataSettings::load_from_iter([OsString::from("complaint-desk")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", None::<String>),
            ("EXAMPLE_DATA_SEED_NAME", None::<String>),
            ("EXAMPLE_DATA_REGISTRY_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.is_enabled());
        assert_eq!(settings.seed_name(), DEFAULT_DATASET);
        assert!(settings.registry_path().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", Some("false".to_owned())),
            ("EXAMPLE_DATA_SEED_NAME", Some("support-rush".to_owned())),
            (
                "EXAMPLE_DATA_REGISTRY_PATH",
                Some("/tmp/complaint_registry.json".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.is_enabled());
        assert_eq!(settings.seed_name(), "support-rush");
        assert_eq!(
            settings.registry_path(),
            Some(&PathBuf::from("/tmp/complaint_registry.json"))
        );
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    fn enabled_flag_follows_environment(#[case] value: Option<&str>, #[case] expected: bool) {
        let _guard = lock_env([("EXAMPLE_DATA_ENABLED", value.map(str::to_owned))]);

        let settings = load_from_empty_args();
        assert_eq!(settings.is_enabled(), expected);
    }

    #[rstest]
    fn default_impl_matches_loaded_defaults() {
        let settings = ExampleDataSettings::default();
        assert!(settings.is_enabled());
        assert_eq!(settings.seed_name(), DEFAULT_DATASET);
    }
}
