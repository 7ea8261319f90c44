use crate::commands::{note_durability, CmdMessage, CmdResult};
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::model::NewContact;
use crate::storage::backend::StorageBackend;

pub fn run<B: StorageBackend>(store: &mut ContactStore<B>, fields: NewContact) -> Result<CmdResult> {
    let contact = store.create(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added successfully! ({}: {})",
        contact.id, contact.name
    )));
    note_durability(store, &mut result);
    Ok(result.with_affected_contacts(vec![contact]))
}
