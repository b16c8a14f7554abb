//! Configuration loading and management

use crate::core::{DEFAULT_CURRENCY_SYMBOL, KeyValueStore};
use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Slot key the browser form used for its list
pub const DEFAULT_STORAGE_KEY: &str = "invoices";

/// Which backend holds the slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local map, lost on exit
    #[default]
    Memory,

    /// One file per slot under `path`
    File { path: PathBuf },

    /// LMDB environment at `path` (needs the `lmdb` feature)
    Lmdb { path: PathBuf },
}

impl StorageConfig {
    /// Open the configured backend
    pub fn open(&self) -> Result<Box<dyn KeyValueStore>> {
        match self {
            StorageConfig::Memory => Ok(Box::new(InMemoryKeyValueStore::new())),
            StorageConfig::File { path } => Ok(Box::new(FileKeyValueStore::open(path)?)),
            #[cfg(feature = "lmdb")]
            StorageConfig::Lmdb { path } => Ok(Box::new(
                crate::storage::LmdbKeyValueStore::open(path)?,
            )),
            #[cfg(not(feature = "lmdb"))]
            StorageConfig::Lmdb { path } => bail!(
                "LMDB storage at '{}' requires the `lmdb` feature",
                path.display()
            ),
        }
    }
}

/// Complete configuration for an invoice desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Key of the slot holding the serialized invoice list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Prefix for every displayed amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency_symbol: default_currency_symbol(),
            storage: StorageConfig::default(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the editor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            bail!("storage_key must not be empty");
        }
        Ok(())
    }
}
