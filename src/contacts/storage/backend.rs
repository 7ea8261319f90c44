use crate::error::Result;

/// Raw key-value I/O underneath the [`PersistenceAdapter`](super::adapter::PersistenceAdapter).
///
/// This trait handles the "where" of storage (filesystem vs memory). The
/// adapter handles the "what" (encoding, decoding, trusting the payload).
/// All methods take `&self`; implementations needing mutation use interior
/// mutability since the store is single-threaded.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored under the key.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key` in full.
    /// MUST be atomic so a reader never sees a partial value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
