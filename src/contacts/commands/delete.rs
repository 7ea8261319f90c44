use crate::commands::{note_durability, CmdMessage, CmdResult};
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::storage::backend::StorageBackend;

pub fn run<B: StorageBackend>(store: &mut ContactStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.delete(id) {
        Some(contact) => {
            result.add_message(CmdMessage::success(format!(
                "Contact deleted successfully! ({}: {})",
                contact.id, contact.name
            )));
            result.affected_contacts.push(contact);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No contact with id {}", id)));
        }
    }
    note_durability(store, &mut result);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::mem_store;

    #[test]
    fn deletes_existing_contact() {
        let mut store = mem_store();
        let result = run(&mut store, "1").unwrap();
        assert_eq!(result.affected_contacts[0].name, "John Doe");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_contact_is_not_an_error() {
        let mut store = mem_store();
        let result = run(&mut store, "missing").unwrap();
        assert!(result.affected_contacts.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.len(), 2);
    }
}
