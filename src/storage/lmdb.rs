//! LMDB storage backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store, no external server required. The
//! editor is synchronous, and so is heed, so calls go straight through
//! without any blocking-pool hop.
//!
//! # Databases (named LMDB sub-databases)
//!
//! - `kv` — slot key → slot value, both UTF-8 strings
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::core::{KeyValueStore, StorageError};
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

const BACKEND: &str = "lmdb";

fn lmdb_err(e: heed::Error) -> StorageError {
    StorageError::backend(BACKEND, e)
}

/// LMDB-backed implementation of `KeyValueStore`.
///
/// The `Env` is wrapped in an `Arc` for cheap cloning.
///
/// # Example
///
/// ```rust,ignore
/// use invoice_desk::storage::LmdbKeyValueStore;
///
/// let store = LmdbKeyValueStore::open("/tmp/invoice-desk")?;
/// let editor = InvoiceEditor::load(store, "invoices");
/// ```
pub struct LmdbKeyValueStore {
    env: Arc<Env>,
    db: Database<Str, Str>,
}

impl LmdbKeyValueStore {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// `kv` named database.
    ///
    /// The map size is 64 MB, a virtual address space reservation that LMDB
    /// does not allocate up front.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path.as_ref()).map_err(|source| StorageError::Io {
            key: path.as_ref().display().to_string(),
            source,
        })?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(4)
                .open(path.as_ref())
                .map_err(lmdb_err)?
        };

        let mut wtxn = env.write_txn().map_err(lmdb_err)?;
        let db: Database<Str, Str> = env
            .create_database(&mut wtxn, Some("kv"))
            .map_err(lmdb_err)?;
        wtxn.commit().map_err(lmdb_err)?;

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

impl Clone for LmdbKeyValueStore {
    fn clone(&self) -> Self {
        Self {
            env: Arc::clone(&self.env),
            db: self.db,
        }
    }
}

impl KeyValueStore for LmdbKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let rtxn = self.env.read_txn().map_err(lmdb_err)?;
        let value = self.db.get(&rtxn, key).map_err(lmdb_err)?;
        Ok(value.map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(lmdb_err)?;
        self.db.put(&mut wtxn, key, value).map_err(lmdb_err)?;
        wtxn.commit().map_err(lmdb_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(lmdb_err)?;
        self.db.delete(&mut wtxn, key).map_err(lmdb_err)?;
        wtxn.commit().map_err(lmdb_err)
    }
}
