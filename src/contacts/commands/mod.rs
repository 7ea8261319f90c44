use crate::config::ContactsConfig;
use crate::contact_store::ContactStore;
use crate::model::{Contact, ContactStats};
use crate::storage::backend::StorageBackend;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub struct ContactsPaths {
    pub data_dir: PathBuf,
}

impl ContactsPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub stats: Option<ContactStats>,
    pub config: Option<ContactsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_stats(mut self, stats: ContactStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ContactsConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Adds a warning when the last save did not reach storage.
pub(crate) fn note_durability<B: StorageBackend>(store: &ContactStore<B>, result: &mut CmdResult) {
    if let Some(err) = store.last_save_error() {
        result.add_message(CmdMessage::warning(format!(
            "Changes are kept for this session but could not be saved: {}",
            err
        )));
    }
}
