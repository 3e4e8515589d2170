//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe where the collection is persisted and how search debounces.
//! - Load configuration from a JSON file with defaults for missing keys.
//!
//! # Invariants
//! - `slot_name` is never blank after loading.
//! - Unknown keys are rejected so typos do not silently fall back to defaults.

use crate::logging::default_log_level;
use crate::search::DEFAULT_DEBOUNCE;
use crate::store::{
    EmployeePersistence, FileSlotPersistence, MemorySlotPersistence, SqliteSlotPersistence,
    StorageResult, DEFAULT_SLOT_NAME,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Storage medium for the employee slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local; nothing survives restart.
    Memory,
    /// `<dir>/<slot_name>.json`.
    File { dir: PathBuf },
    /// Row in `storage_slots` of the SQLite file at `path`.
    Sqlite { path: PathBuf },
}

/// Core configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub slot_name: String,
    pub storage: StorageBackend,
    pub debounce_ms: u64,
    /// Falls back to [`default_log_level`] when unset.
    pub log_level: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            slot_name: DEFAULT_SLOT_NAME.to_string(),
            storage: StorageBackend::Memory,
            debounce_ms: millis(DEFAULT_DEBOUNCE),
            log_level: None,
        }
    }
}

impl CoreConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Opens the configured persistence adapter.
    ///
    /// # Errors
    /// - Returns storage errors from opening/migrating a SQLite file.
    pub fn open_persistence(&self) -> StorageResult<Box<dyn EmployeePersistence>> {
        let persistence: Box<dyn EmployeePersistence> = match &self.storage {
            StorageBackend::Memory => Box::new(MemorySlotPersistence::new()),
            StorageBackend::File { dir } => {
                Box::new(FileSlotPersistence::new(dir, self.slot_name.as_str()))
            }
            StorageBackend::Sqlite { path } => {
                Box::new(SqliteSlotPersistence::open(path, self.slot_name.as_str())?)
            }
        };
        Ok(persistence)
    }

    fn check(self) -> Result<Self, ConfigError> {
        if self.slot_name.trim().is_empty() {
            return Err(ConfigError::Invalid("slot_name cannot be blank".to_string()));
        }
        Ok(self)
    }
}

/// Configuration loading failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Reads a JSON config file; missing keys take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<CoreConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text).map_err(|err| match err {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses config JSON text.
pub fn parse_config(text: &str) -> Result<CoreConfig, ConfigError> {
    serde_json::from_str::<CoreConfig>(text)
        .map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?
        .check()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::{parse_config, ConfigError, CoreConfig, StorageBackend};
    use crate::logging::default_log_level;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn empty_object_yields_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.slot_name, "employees");
        assert_eq!(config.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn storage_backend_is_tagged_by_kind() {
        let config = parse_config(
            r#"{"storage": {"kind": "sqlite", "path": "/tmp/hrnet.db"}, "debounce_ms": 250}"#,
        )
        .unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::Sqlite {
                path: PathBuf::from("/tmp/hrnet.db")
            }
        );
        assert_eq!(config.debounce_ms, 250);
    }

    #[test]
    fn unknown_keys_and_blank_slot_are_rejected() {
        assert!(matches!(
            parse_config(r#"{"slotName": "x"}"#).unwrap_err(),
            ConfigError::Parse { .. }
        ));
        assert!(matches!(
            parse_config(r#"{"slot_name": "  "}"#).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn log_level_falls_back_to_build_default() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.log_level(), default_log_level());

        let config = parse_config(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(config.log_level(), "warn");
    }
}
