//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! 1. [`backend::StorageBackend`]: raw key-value I/O. Knows nothing about
//!    contacts.
//! 2. [`adapter::PersistenceAdapter`]: turns the contact collection into a
//!    single JSON value under one fixed key, and back.
//!
//! ## Durability Contract
//!
//! - **Full overwrite**: every save writes the whole collection.
//! - **No partial trust**: a value that fails to decode, or decodes to
//!   records with missing or duplicate ids, is discarded as a whole.
//! - **Best effort**: save failures are returned to the store, which logs them
//!   and keeps its in-memory state.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key, atomic tmp+rename writes.
//! - [`mem_backend::MemBackend`]: in-process map for tests and memory-only
//!   sessions.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── lorem_contacts.json   # Contact collection (JSON array)
//! ├── config.json           # Configuration
//! └── logs/                 # Rolling log files
//! ```

pub mod adapter;
pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use crate::error::{ContactsError, Result};

/// Check that `key` names a slot every backend can hold: ASCII letters,
/// digits, `-`, `_` and `.`, not starting with `.`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if key.is_empty() || key.starts_with('.') || !valid_chars {
        return Err(ContactsError::Store(format!(
            "Invalid storage key: '{}'",
            key
        )));
    }
    Ok(())
}
