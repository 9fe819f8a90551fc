//! Configuration for access-ticket
//!
//! Settings are layered: built-in defaults, then a TOML file (either the one
//! given on the command line or `config.toml` in the user's config directory),
//! then `ACCESS_TICKET__<SECTION>__<KEY>` environment variables.

use crate::core::ReferenceCode;
use crate::error::Result;
use crate::lifecycle::DEFAULT_REFERENCE_PREFIX;
use crate::storage::{DEFAULT_SNAPSHOT_KEY, StoreOptions};
use config::{Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ACCESS_TICKET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub tickets: TicketConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot; defaults to the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    pub snapshot_key: String,
    pub seed_on_first_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketConfig {
    pub reference_prefix: String,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("ps", "Jawwal", "access-ticket")
}

/// `config.toml` in the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Loads configuration from `path` (or the default location) and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], but reads variables from `env` instead of the process
    /// environment when it is given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("storage.snapshot_key", DEFAULT_SNAPSHOT_KEY)?
            .set_default("storage.seed_on_first_run", true)?
            .set_default("tickets.reference_prefix", DEFAULT_REFERENCE_PREFIX)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        } else if let Some(path) = default_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        ReferenceCode::validate_prefix(&config.tickets.reference_prefix)?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Directory the snapshot lives in
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(".access-ticket"))
    }

    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            snapshot_key: self.storage.snapshot_key.clone(),
            seed_on_first_run: self.storage.seed_on_first_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = Config::load_with_env(Some(&path), Some(config::Map::new())).unwrap();
        assert_eq!(config.storage.snapshot_key, "jawwal_tickets");
        assert!(config.storage.seed_on_first_run);
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.tickets.reference_prefix, "JW");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[storage]
data_dir = "/srv/access"
seed_on_first_run = false

[tickets]
reference_prefix = "DC"
"#,
        );

        let config = Config::load_with_env(Some(&path), Some(config::Map::new())).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/srv/access"));
        assert!(!config.storage.seed_on_first_run);
        assert_eq!(config.tickets.reference_prefix, "DC");
        assert_eq!(config.storage.snapshot_key, "jawwal_tickets");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[tickets]\nreference_prefix = \"DC\"\n");

        let mut env = config::Map::new();
        env.insert(
            "ACCESS_TICKET__TICKETS__REFERENCE_PREFIX".to_string(),
            "HQ".to_string(),
        );
        env.insert(
            "ACCESS_TICKET__STORAGE__SEED_ON_FIRST_RUN".to_string(),
            "false".to_string(),
        );

        let config = Config::load_with_env(Some(&path), Some(env)).unwrap();
        assert_eq!(config.tickets.reference_prefix, "HQ");
        assert!(!config.storage.seed_on_first_run);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[tickets]\nreference_prefix = \"jw-\"\n");
        assert!(Config::load_with_env(Some(&path), Some(config::Map::new())).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::load_with_env(Some(&path), Some(config::Map::new())).is_err());
    }

    #[test]
    fn test_store_options() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[storage]\nsnapshot_key = \"site_a\"\n");
        let config = Config::load_with_env(Some(&path), Some(config::Map::new())).unwrap();

        let options = config.store_options();
        assert_eq!(options.snapshot_key, "site_a");
        assert!(options.seed_on_first_run);
    }
}
