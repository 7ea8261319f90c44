//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for contact operations, whatever UI sits on top.
//!
//! The API:
//! - **Owns** the one [`ContactStore`] for the session
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! `ContactsApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ContactsApi<FsBackend>`
//! - Testing and memory-only sessions: `ContactsApi<MemBackend>`

use crate::commands;
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::model::{Contact, ContactPatch, NewContact};
use crate::storage::adapter::PersistenceAdapter;
use crate::storage::backend::StorageBackend;

pub struct ContactsApi<B: StorageBackend> {
    store: ContactStore<B>,
    paths: commands::ContactsPaths,
}

impl<B: StorageBackend> ContactsApi<B> {
    /// Open the store persisted under `key` in `backend`.
    pub fn open(backend: B, key: &str, paths: commands::ContactsPaths) -> Self {
        let store = ContactStore::open(PersistenceAdapter::with_key(backend, key));
        Self { store, paths }
    }

    pub fn list_contacts(&self, filter: StatusFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.store.get(id)
    }

    pub fn create_contact(&mut self, fields: NewContact) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_contact(&mut self, id: &str, patch: ContactPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_contact(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &ContactStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::StatusFilter;
pub use commands::{CmdMessage, CmdResult, ContactsPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::storage::mem_backend::MemBackend;
    use std::path::PathBuf;

    fn api() -> ContactsApi<MemBackend> {
        ContactsApi::open(
            MemBackend::new(),
            "lorem_contacts",
            ContactsPaths::new(PathBuf::from("/nonexistent")),
        )
    }

    #[test]
    fn create_dispatches_to_store() {
        let mut api = api();
        let result = api
            .create_contact(NewContact::new("Ann Lee", "ann@x.com"))
            .unwrap();
        let id = &result.affected_contacts[0].id;
        assert_eq!(api.get_contact(id).unwrap().name, "Ann Lee");
    }

    #[test]
    fn update_and_list_dispatch() {
        let mut api = api();
        api.update_contact("1", ContactPatch::status(Status::Inactive))
            .unwrap();
        let listed = api
            .list_contacts(StatusFilter::Only(Status::Inactive))
            .unwrap()
            .listed_contacts;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "1");
    }

    #[test]
    fn delete_and_stats_dispatch() {
        let mut api = api();
        api.delete_contact("2").unwrap();
        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn open_uses_the_given_key() {
        let backend = MemBackend::new();
        backend.put_raw(
            "crm",
            r#"[{"id":"7","name":"Kim","email":"kim@x.com","company":"","status":"inactive"}]"#,
        );
        let api = ContactsApi::open(backend, "crm", ContactsPaths::new(PathBuf::from("/x")));
        assert_eq!(api.store().list().len(), 1);
        assert_eq!(api.store().list()[0].id, "7");
    }
}
