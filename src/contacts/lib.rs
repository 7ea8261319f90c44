//! # Contacts Architecture
//!
//! Contacts is a **UI-agnostic record manager library** for contact records. The
//! `contacts` binary is one client of it; a GUI or web front end would sit in
//! the same place.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Dispatch, user-facing messages, structured results       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Contact Store (contact_store.rs)                           │
//! │  - The ordered collection, id assignment, invariants        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - PersistenceAdapter over a StorageBackend (fs, memory)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through the `log` facade; [`logging`] wires it
//! to files for the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-operation logic and `CmdResult`
//! - [`contact_store`]: The entity store
//! - [`storage`]: Persistence adapter and key-value backends
//! - [`model`]: `Contact`, `Status`, input types
//! - [`ids`]: Id generation
//! - [`config`]: Configuration management
//! - [`logging`]: File logging bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod contact_store;
pub mod error;
pub mod ids;
pub mod logging;
pub mod model;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;
