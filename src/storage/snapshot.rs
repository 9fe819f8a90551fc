//! Snapshot format for the persisted ticket collection
//!
//! A snapshot is a JSON envelope `{"schemaVersion": 1, "tickets": [...]}`.
//! Older builds wrote a bare array of tickets with no version; such a value
//! is read as schema version 0 and migrated on the fly.

use crate::core::Ticket;
use crate::error::{AccessTicketError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Schema version written by this build
pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    schema_version: u64,
    tickets: &'a [Ticket],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotIn {
    #[allow(dead_code)]
    schema_version: u64,
    tickets: Vec<Ticket>,
}

/// Serializes the whole collection at the current schema version
pub fn encode(tickets: &[Ticket]) -> Result<String> {
    let snapshot = SnapshotOut {
        schema_version: SCHEMA_VERSION,
        tickets,
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parses a stored snapshot
///
/// Anything that does not decode, a ticket without history, and repeated ids or
/// reference codes are reported as `PersistenceCorrupt`. History entries stamped
/// earlier than the entry before them are raised to that entry's time. A snapshot from a newer schema is reported as
/// `UnsupportedSnapshotVersion` so it is never mistaken for garbage.
pub fn decode(key: &str, raw: &str) -> Result<Vec<Ticket>> {
    let corrupt = |reason: String| AccessTicketError::PersistenceCorrupt {
        key: key.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;

    let legacy = value.is_array();
    if !legacy {
        let version = value
            .get("schemaVersion")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                corrupt("expected a ticket array or an object with schemaVersion".to_string())
            })?;
        if version > SCHEMA_VERSION {
            return Err(AccessTicketError::UnsupportedSnapshotVersion {
                key: key.to_string(),
                found: version,
                supported: SCHEMA_VERSION,
            });
        }
    }

    let mut tickets = if legacy {
        let tickets: Vec<Ticket> =
            serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
        tracing::info!(
            "Migrating unversioned snapshot '{}' ({} tickets) to schema version {}",
            key,
            tickets.len(),
            SCHEMA_VERSION
        );
        tickets
    } else {
        let snapshot: SnapshotIn =
            serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
        snapshot.tickets
    };

    check_collection(&tickets).map_err(corrupt)?;

    for ticket in &mut tickets {
        let adjusted = ticket.clamp_history();
        if adjusted > 0 {
            tracing::warn!(
                "Ticket {} in '{}' had {} history entries stamped before their predecessor; raised to keep the history chronological",
                ticket.reference_code(),
                key,
                adjusted
            );
        }
    }
    Ok(tickets)
}

fn check_collection(tickets: &[Ticket]) -> std::result::Result<(), String> {
    let mut ids = HashSet::new();
    let mut references = HashSet::new();
    for ticket in tickets {
        ticket.check_integrity()?;
        if !ids.insert(ticket.id()) {
            return Err(format!("duplicate ticket id {}", ticket.id()));
        }
        if !references.insert(ticket.reference_code()) {
            return Err(format!(
                "duplicate reference code {}",
                ticket.reference_code()
            ));
        }
    }
    Ok(())
}
