use crate::error::Result;

/// String-keyed, string-valued store holding all durable state.
///
/// Deliberately narrow: one read and one write, no transactions and no
/// compare-and-swap. Callers doing read-modify-write can lose updates when
/// requests race; nothing here prevents that.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}
