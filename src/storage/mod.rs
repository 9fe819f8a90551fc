//! Ticket persistence
//!
//! The ticket collection is stored as one snapshot value under a single key of
//! a [`KeyValueStore`]. [`TicketStore`] owns the in-memory collection and
//! rewrites the whole snapshot after every change.

mod file;
mod memory;
mod repository;
pub mod seed;
pub mod snapshot;
mod store;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use repository::KeyValueStore;
#[cfg(test)]
pub use repository::MockKeyValueStore;
pub use store::{DEFAULT_SNAPSHOT_KEY, StoreOptions, TicketStore};
