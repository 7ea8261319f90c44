use super::backend::StorageBackend;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use log::{debug, warn};
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "lorem_contacts";

/// Mirrors the contact collection into a single key-value slot.
///
/// The slot holds the JSON array of contacts, field for field, with no
/// envelope or version marker. Every `save` overwrites the slot in full.
pub struct PersistenceAdapter<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> PersistenceAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read back the persisted collection.
    ///
    /// Returns `None` when the slot is empty, unreadable, or holds anything
    /// other than a well-formed sequence with unique, non-empty ids. The
    /// reason is logged but not returned.
    pub fn load(&self) -> Option<Vec<Contact>> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=load module=storage status=absent key={}", self.key);
                return None;
            }
            Err(e) => {
                warn!(
                    "event=load module=storage status=read_error key={} error={}",
                    self.key, e
                );
                return None;
            }
        };

        match decode(&raw) {
            Ok(contacts) => {
                debug!(
                    "event=load module=storage status=ok key={} count={}",
                    self.key,
                    contacts.len()
                );
                Some(contacts)
            }
            Err(e) => {
                warn!(
                    "event=load module=storage status=discarded key={} error={}",
                    self.key, e
                );
                None
            }
        }
    }

    /// Overwrite the slot with `contacts`.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        let encoded = serde_json::to_string(contacts).map_err(ContactsError::Serialization)?;
        self.backend.write(&self.key, &encoded)?;
        debug!(
            "event=save module=storage status=ok key={} count={}",
            self.key,
            contacts.len()
        );
        Ok(())
    }
}

fn decode(raw: &str) -> Result<Vec<Contact>> {
    let contacts: Vec<Contact> = serde_json::from_str(raw).map_err(ContactsError::Serialization)?;

    let mut seen = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if contact.id.is_empty() {
            return Err(ContactsError::Store("record with empty id".to_string()));
        }
        if !seen.insert(contact.id.as_str()) {
            return Err(ContactsError::Store(format!(
                "duplicate id '{}'",
                contact.id
            )));
        }
    }
    Ok(contacts)
}
