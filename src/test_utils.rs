//! Test utilities for access-ticket
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{AccessRequest, AccessRequestBuilder, ReferenceCode, Ticket, TicketId};
use crate::storage::{FileStorage, MemoryStorage, StoreOptions, TicketStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// The request from the reference scenario: Ahmed from Jawwal, maintenance on Rack 1
pub fn sample_request() -> AccessRequest {
    AccessRequestBuilder::new()
        .primary_name("Ahmed")
        .company("Jawwal")
        .purpose("maint")
        .rack("Rack 1")
        .build()
}

/// An empty in-memory store with seeding disabled
pub fn empty_store() -> TicketStore<MemoryStorage> {
    TicketStore::open(
        MemoryStorage::new(),
        StoreOptions {
            seed_on_first_run: false,
            ..StoreOptions::default()
        },
    )
    .expect("Failed to open memory store")
}

/// Test fixture for a file-backed store in a temporary directory
pub struct TestDataDir {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
}

impl TestDataDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        Self { temp_dir, data_dir }
    }

    /// Open a store over the data directory
    pub fn open(&self, seed_on_first_run: bool) -> TicketStore<FileStorage> {
        TicketStore::open(
            FileStorage::new(&self.data_dir),
            StoreOptions {
                seed_on_first_run,
                ..StoreOptions::default()
            },
        )
        .expect("Failed to open file store")
    }
}

/// Test data builder for ticket collections
pub struct TestTickets {
    tickets: Vec<Ticket>,
    clock: i64,
}

impl TestTickets {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            clock: 1_700_000_000_000,
        }
    }

    fn next_ticket(&mut self) -> Ticket {
        self.clock += 60_000;
        let reference = ReferenceCode::generate("JW").expect("Failed to generate reference");
        Ticket::open(TicketId::new(), reference, sample_request(), self.clock)
    }

    /// Add open tickets
    pub fn open(mut self, count: usize) -> Self {
        for _ in 0..count {
            let ticket = self.next_ticket();
            self.tickets.insert(0, ticket);
        }
        self
    }

    /// Add locked tickets
    pub fn locked(mut self, count: usize) -> Self {
        for _ in 0..count {
            let mut ticket = self.next_ticket();
            ticket.toggle_lock(self.clock + 1_000);
            self.tickets.insert(0, ticket);
        }
        self
    }

    /// Build and return the tickets, newest first
    pub fn build(self) -> Vec<Ticket> {
        self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_request_is_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_data_dir_store_starts_empty() {
        let dir = TestDataDir::new();
        assert!(dir.open(false).is_empty());
        assert_eq!(dir.open(true).len(), 3);
    }

    #[test]
    fn test_ticket_builder() {
        let tickets = TestTickets::new().open(2).locked(1).build();

        assert_eq!(tickets.len(), 3);
        assert!(tickets[0].is_locked());
        assert!(!tickets[1].is_locked());
        assert!(tickets[0].created_at() > tickets[1].created_at());
    }
}
