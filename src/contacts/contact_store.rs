//! # Contact Store
//!
//! [`ContactStore`] owns the canonical, ordered collection of contacts and is
//! its only mutator. Readers get a shared slice from [`ContactStore::list`].
//!
//! ## Invariants
//!
//! - Ids are unique within the collection at all times.
//! - Creates append. Updates keep position. Deletes remove one element and
//!   leave the rest in order.
//! - Every create, update and delete saves the full collection after the
//!   in-memory change. A failed save never undoes the change; it is logged
//!   and exposed through [`ContactStore::last_save_error`].

use crate::error::{ContactsError, Result};
use crate::ids::IdGenerator;
use crate::model::{Contact, ContactPatch, ContactStats, NewContact, Status};
use crate::storage::adapter::PersistenceAdapter;
use crate::storage::backend::StorageBackend;
use log::{info, warn};

/// Sample records used when nothing valid has been persisted yet.
pub fn default_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "Tech Corp".to_string(),
            status: Status::Active,
        },
        Contact {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            company: "Startup Inc".to_string(),
            status: Status::Active,
        },
    ]
}

pub struct ContactStore<B: StorageBackend> {
    contacts: Vec<Contact>,
    adapter: PersistenceAdapter<B>,
    ids: IdGenerator,
    last_save_error: Option<String>,
}

impl<B: StorageBackend> ContactStore<B> {
    /// Build the store from whatever the adapter has persisted.
    pub fn open(adapter: PersistenceAdapter<B>) -> Self {
        let initial = adapter.load();
        Self::seeded(adapter, initial)
    }

    /// Build the store from an explicit initial collection.
    pub fn seeded(adapter: PersistenceAdapter<B>, initial: Option<Vec<Contact>>) -> Self {
        let mut store = Self {
            contacts: Vec::new(),
            adapter,
            ids: IdGenerator::new(),
            last_save_error: None,
        };
        store.seed(initial);
        store
    }

    fn seed(&mut self, initial: Option<Vec<Contact>>) {
        self.contacts = match initial {
            Some(contacts) if !contacts.is_empty() => {
                info!(
                    "event=seed module=contact_store source=persisted count={}",
                    contacts.len()
                );
                contacts
            }
            _ => {
                info!("event=seed module=contact_store source=default");
                default_contacts()
            }
        };
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn stats(&self) -> ContactStats {
        ContactStats::from_contacts(&self.contacts)
    }

    /// Error message from the most recent save, if it failed.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    pub fn adapter(&self) -> &PersistenceAdapter<B> {
        &self.adapter
    }

    pub fn create(&mut self, fields: NewContact) -> Result<Contact> {
        require_non_empty("name", &fields.name)?;
        require_non_empty("email", &fields.email)?;

        let id = self.fresh_id();
        let contact = fields.into_contact(id);
        self.contacts.push(contact.clone());
        info!(
            "event=create module=contact_store status=ok id={}",
            contact.id
        );

        self.persist();
        Ok(contact)
    }

    pub fn update(&mut self, id: &str, patch: ContactPatch) -> Result<Contact> {
        let pos = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ContactsError::NotFound(id.to_string()))?;
        if let Some(name) = &patch.name {
            require_non_empty("name", name)?;
        }
        if let Some(email) = &patch.email {
            require_non_empty("email", email)?;
        }

        let contact = &mut self.contacts[pos];
        patch.apply_to(contact);
        let updated = contact.clone();
        info!("event=update module=contact_store status=ok id={}", id);

        self.persist();
        Ok(updated)
    }

    /// Remove the contact with `id`. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Contact> {
        let removed = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .map(|pos| self.contacts.remove(pos));
        info!(
            "event=delete module=contact_store status={} id={}",
            if removed.is_some() { "ok" } else { "absent" },
            id
        );

        self.persist();
        removed
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        match self.adapter.save(&self.contacts) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(
                    "event=save module=contact_store status=failed key={} error={}",
                    self.adapter.key(),
                    e
                );
                self.last_save_error = Some(e.to_string());
            }
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactsError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
