use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
