use crate::commands::{note_durability, CmdMessage, CmdResult};
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::model::ContactPatch;
use crate::storage::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &mut ContactStore<B>,
    id: &str,
    patch: ContactPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let contact = store.update(id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated successfully! ({}: {})",
        contact.id, contact.name
    )));
    note_durability(store, &mut result);
    Ok(result.with_affected_contacts(vec![contact]))
}
