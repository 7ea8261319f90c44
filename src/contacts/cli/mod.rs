//! # CLI Layer
//!
//! This module is **one possible UI client** for contacts. It is the only place
//! that parses arguments, prints to the terminal and picks exit codes.
//!
//! ## Structure
//!
//! - `run()`: Builds the context and dispatches (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print the result
//! - `print::*`: Output formatting

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use contacts::api::{ConfigAction, ContactsApi, ContactsPaths, StatusFilter};
use contacts::config::ContactsConfig;
use contacts::error::{ContactsError, Result};
use contacts::logging::init_logging;
use contacts::model::{ContactPatch, NewContact, Status};
use contacts::storage::backend::StorageBackend;
use contacts::storage::fs_backend::FsBackend;
use contacts::storage::mem_backend::MemBackend;
use directories::ProjectDirs;
use log::debug;
use print::{print_config, print_contacts, print_messages, print_stats};
use std::path::PathBuf;

const HOME_ENV: &str = "CONTACTS_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = ContactsPaths::new(data_dir()?);
    let config = ContactsConfig::load(&paths.data_dir).unwrap_or_default();

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level, &paths.log_dir()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    debug!(
        "event=cli_start module=cli persist={} data_dir={}",
        config.persist,
        paths.data_dir.display()
    );

    if config.persist {
        let backend = FsBackend::new(paths.data_dir.clone());
        let mut api = ContactsApi::open(backend, &config.storage_key, paths);
        dispatch(&mut api, cli.command)
    } else {
        let mut api = ContactsApi::open(MemBackend::new(), &config.storage_key, paths);
        dispatch(&mut api, cli.command)
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "contacts", "contacts")
        .ok_or_else(|| ContactsError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn dispatch<B: StorageBackend>(api: &mut ContactsApi<B>, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::List { status }) => handle_list(api, status),
        Some(Commands::Add {
            name,
            email,
            company,
            status,
        }) => handle_add(api, name, email, company, status),
        Some(Commands::Edit {
            id,
            name,
            email,
            company,
            status,
        }) => {
            let patch = ContactPatch {
                name,
                email,
                company,
                status,
            };
            handle_edit(api, &id, patch)
        }
        Some(Commands::Delete { id }) => handle_delete(api, &id),
        Some(Commands::Stats) => handle_stats(api),
        Some(Commands::Config { key, value }) => handle_config(api, key, value),
        None => handle_list(api, None),
    }
}

fn handle_list<B: StorageBackend>(api: &ContactsApi<B>, status: Option<Status>) -> Result<()> {
    let filter = status.map(StatusFilter::Only).unwrap_or_default();
    let result = api.list_contacts(filter)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add<B: StorageBackend>(
    api: &mut ContactsApi<B>,
    name: String,
    email: String,
    company: Option<String>,
    status: Option<Status>,
) -> Result<()> {
    let fields = NewContact {
        name,
        email,
        company,
        status,
    };
    let result = api.create_contact(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit<B: StorageBackend>(
    api: &mut ContactsApi<B>,
    id: &str,
    patch: ContactPatch,
) -> Result<()> {
    let result = api.update_contact(id, patch)?;
    print_contacts(&result.affected_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<B: StorageBackend>(api: &mut ContactsApi<B>, id: &str) -> Result<()> {
    let result = api.delete_contact(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats<B: StorageBackend>(api: &ContactsApi<B>) -> Result<()> {
    let result = api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config<B: StorageBackend>(
    api: &ContactsApi<B>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    // Set confirms through its message
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
