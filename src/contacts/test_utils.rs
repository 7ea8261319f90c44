use crate::contact_store::ContactStore;
use crate::storage::adapter::PersistenceAdapter;
use crate::storage::mem_backend::MemBackend;

/// A store seeded with the default contacts over an empty memory backend.
pub fn mem_store() -> ContactStore<MemBackend> {
    ContactStore::open(PersistenceAdapter::new(MemBackend::new()))
}
