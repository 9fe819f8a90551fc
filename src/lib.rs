//! access-ticket - data-center physical access request tracker
//!
//! Requesters submit an access form; each submission becomes a ticket with a
//! status and an append-only audit history. Staff review, edit, lock, unlock
//! or delete tickets.
//!
//! The crate is built around two pieces:
//! - [`storage::TicketStore`] owns the ticket collection and rewrites its
//!   snapshot after every change
//! - [`lifecycle::LifecycleEngine`] is the only way to change a ticket, and
//!   records every change in the ticket's history
//!
//! # Example
//!
//! ```rust,no_run
//! use access_ticket::core::AccessRequestBuilder;
//! use access_ticket::lifecycle::LifecycleEngine;
//! use access_ticket::storage::{FileStorage, StoreOptions, TicketStore};
//!
//! # fn main() -> access_ticket::Result<()> {
//! let mut store = TicketStore::open(FileStorage::new("/var/lib/access-ticket"), StoreOptions::default())?;
//! let mut engine = LifecycleEngine::new(&mut store);
//!
//! let ticket = engine.create(
//!     AccessRequestBuilder::new()
//!         .primary_name("Ahmed")
//!         .company("Jawwal")
//!         .purpose("maint")
//!         .rack("Rack 1")
//!         .build(),
//! )?;
//! engine.toggle_lock(ticket.id())?;
//! # Ok(())
//! # }
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod lifecycle;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{AccessTicketError, Result};
