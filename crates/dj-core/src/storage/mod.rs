mod memory;
mod redb_storage;
mod traits;

pub use memory::MemoryKvStore;
pub use redb_storage::{RedbKvStore, CURRENT_SCHEMA_VERSION};
pub use traits::KvStore;
