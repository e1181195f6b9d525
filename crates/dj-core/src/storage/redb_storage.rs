use crate::error::{DjError, Result};
use crate::storage::traits::KvStore;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Application keys ("feedback:list", "briefing:latest", ...)
const KV: TableDefinition<&str, &str> = TableDefinition::new("kv");

// Metadata table
const META: TableDefinition<&str, &[u8]> = TableDefinition::new("meta");

/// Current schema version.
/// v1 = single string-keyed `kv` table
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Redb-backed key-value store
pub struct RedbKvStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl RedbKvStore {
    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DjError::Validation(format!("Failed to create directory: {}", e))
            })?;
        }

        let is_new = !path.exists();
        let db = Database::create(&path)?;

        if is_new {
            let write_txn = db.begin_write()?;
            {
                let _ = write_txn.open_table(KV)?;
                let mut meta = write_txn.open_table(META)?;
                meta.insert(SCHEMA_VERSION_KEY, CURRENT_SCHEMA_VERSION.to_string().as_bytes())?;
            }
            write_txn.commit()?;
        } else {
            Self::check_schema_version(&db)?;
            let write_txn = db.begin_write()?;
            {
                let _ = write_txn.open_table(KV)?;
                let _ = write_txn.open_table(META)?;
            }
            write_txn.commit()?;
        }

        log::debug!("Opened key-value store at {:?}", path);

        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    /// Refuse to open files written by a different schema.
    fn check_schema_version(db: &Database) -> Result<()> {
        let read_txn = db.begin_read()?;
        let version = {
            let table = read_txn.open_table(META).ok();
            table
                .and_then(|t| {
                    t.get(SCHEMA_VERSION_KEY).ok().flatten().and_then(|v| {
                        std::str::from_utf8(v.value())
                            .ok()
                            .and_then(|s| s.parse::<u32>().ok())
                    })
                })
                .unwrap_or(CURRENT_SCHEMA_VERSION)
        };

        if version == CURRENT_SCHEMA_VERSION {
            Ok(())
        } else {
            Err(DjError::Validation(format!(
                "Database schema v{} does not match this binary (v{}).",
                version, CURRENT_SCHEMA_VERSION
            )))
        }
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of application keys currently stored.
    pub fn key_count(&self) -> Result<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV)?;
        Ok(table.iter()?.count() as u64)
    }
}

impl KvStore for RedbKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV)?;

        match table.get(key)? {
            Some(value) => Ok(Some(value.value().to_string())),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
