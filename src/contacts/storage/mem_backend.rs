use super::backend::StorageBackend;
use crate::error::{ContactsError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend.
///
/// Backs tests and `persist = false` sessions. Uses `RefCell` for interior
/// mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant a raw value, bypassing encoding.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ContactsError::Store("Simulated write error".to_string()));
        }
        self.put_raw(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "v1").unwrap();
        backend.write("k", "v2").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn simulated_write_error_leaves_previous_value() {
        let backend = MemBackend::new();
        backend.write("k", "v1").unwrap();
        backend.set_simulate_write_error(true);
        assert!(backend.write("k", "v2").is_err());
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v1"));
    }
}
