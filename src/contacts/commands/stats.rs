use crate::commands::CmdResult;
use crate::contact_store::ContactStore;
use crate::error::Result;
use crate::storage::backend::StorageBackend;

pub fn run<B: StorageBackend>(store: &ContactStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.stats()))
}
