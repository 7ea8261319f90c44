use crate::commands::CmdResult;
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::model::{Contact, Status};
use crate::storage::backend::StorageBackend;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    fn matches(&self, contact: &Contact) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => contact.status == *status,
        }
    }
}

pub fn run<B: StorageBackend>(store: &ContactStore<B>, filter: StatusFilter) -> Result<CmdResult> {
    let listed: Vec<Contact> = store
        .list()
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    Ok(CmdResult::default().with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactPatch;
    use crate::test_utils::mem_store;

    #[test]
    fn lists_in_store_order() {
        let store = mem_store();
        let result = run(&store, StatusFilter::All).unwrap();
        let ids: Vec<_> = result.listed_contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn filters_by_status() {
        let mut store = mem_store();
        store
            .update("2", ContactPatch::status(Status::Inactive))
            .unwrap();

        let inactive = run(&store, StatusFilter::Only(Status::Inactive)).unwrap();
        assert_eq!(inactive.listed_contacts.len(), 1);
        assert_eq!(inactive.listed_contacts[0].id, "2");

        let active = run(&store, StatusFilter::Only(Status::Active)).unwrap();
        assert_eq!(active.listed_contacts[0].id, "1");
    }
}
