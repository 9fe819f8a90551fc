use super::id::{ReferenceCode, TicketId};
use super::request::AccessRequest;
use crate::error::{AccessTicketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lock status of a ticket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Open,
    Locked,
}

impl TicketStatus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Locked,
            Self::Locked => Self::Open,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Locked => f.write_str("locked"),
        }
    }
}

/// What happened to a ticket, as recorded in its history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HistoryAction {
    Created,
    Edited,
    Locked,
    Unlocked,
    /// A label this build does not produce, kept verbatim
    Other(String),
}

impl HistoryAction {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Created => "Ticket Created",
            Self::Edited => "Information Edited",
            Self::Locked => "Security Lock Applied",
            Self::Unlocked => "Ticket Unlocked",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for HistoryAction {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Ticket Created" => Self::Created,
            "Information Edited" => Self::Edited,
            "Security Lock Applied" => Self::Locked,
            "Ticket Unlocked" => Self::Unlocked,
            _ => Self::Other(label),
        }
    }
}

impl From<HistoryAction> for String {
    fn from(action: HistoryAction) -> Self {
        match action {
            HistoryAction::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One audit record; timestamps are epoch milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub action: HistoryAction,
}

impl HistoryEntry {
    #[must_use]
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// An access request with its lifecycle status and audit history
///
/// A ticket can only be mutated by the lifecycle engine. Its history is
/// never empty and is kept in the order entries were appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    #[serde(alias = "refId")]
    reference_code: ReferenceCode,
    #[serde(alias = "timestamp")]
    created_at: i64,
    status: TicketStatus,
    #[serde(flatten)]
    request: AccessRequest,
    history: Vec<HistoryEntry>,
}

impl Ticket {
    /// A new open ticket whose history holds the creation record
    pub(crate) fn open(
        id: TicketId,
        reference_code: ReferenceCode,
        request: AccessRequest,
        now: i64,
    ) -> Self {
        Self {
            id,
            reference_code,
            created_at: now,
            status: TicketStatus::Open,
            request,
            history: vec![HistoryEntry {
                timestamp: now,
                action: HistoryAction::Created,
            }],
        }
    }

    /// Rebuilds a ticket from known parts, used for the seed set
    pub(crate) fn restore(
        id: TicketId,
        reference_code: ReferenceCode,
        created_at: i64,
        status: TicketStatus,
        request: AccessRequest,
        history: Vec<HistoryEntry>,
    ) -> Result<Self> {
        let ticket = Self {
            id,
            reference_code,
            created_at,
            status,
            request,
            history,
        };
        ticket
            .check_integrity()
            .map_err(AccessTicketError::Custom)?;
        Ok(ticket)
    }

    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    #[must_use]
    pub const fn reference_code(&self) -> &ReferenceCode {
        &self.reference_code
    }

    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.created_at
    }

    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status == TicketStatus::Locked
    }

    #[must_use]
    pub const fn request(&self) -> &AccessRequest {
        &self.request
    }

    /// History in the order it was recorded, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History for display, newest first
    pub fn history_newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    /// Timestamp of the latest history entry
    #[must_use]
    pub fn last_activity(&self) -> i64 {
        self.history
            .last()
            .map_or(self.created_at, |entry| entry.timestamp)
    }

    /// Fails with `TicketLocked` unless the form fields may be changed
    pub fn ensure_editable(&self) -> Result<()> {
        if self.is_locked() {
            return Err(AccessTicketError::TicketLocked {
                reference: self.reference_code.to_string(),
            });
        }
        Ok(())
    }

    /// Replaces the form fields of an open ticket
    pub(crate) fn replace_request(&mut self, request: AccessRequest, now: i64) -> Result<()> {
        self.ensure_editable()?;
        self.request = request;
        self.append(HistoryAction::Edited, now);
        Ok(())
    }

    /// Flips the lock and records which way it went
    pub(crate) fn toggle_lock(&mut self, now: i64) -> TicketStatus {
        self.status = self.status.toggled();
        let action = match self.status {
            TicketStatus::Locked => HistoryAction::Locked,
            TicketStatus::Open => HistoryAction::Unlocked,
        };
        self.append(action, now);
        self.status
    }

    // Clamped to the last entry so a clock stepping backwards cannot reorder history.
    fn append(&mut self, action: HistoryAction, now: i64) {
        let timestamp = now.max(self.last_activity());
        self.history.push(HistoryEntry { timestamp, action });
    }

    /// Checks the history invariants of a ticket read from outside
    pub(crate) fn check_integrity(&self) -> std::result::Result<(), String> {
        if self.history.is_empty() {
            return Err(format!("ticket {} has no history", self.id));
        }
        Ok(())
    }

    /// Raises entries stamped earlier than their predecessor to the predecessor's time
    ///
    /// Returns how many entries were adjusted. Order and actions are kept.
    pub(crate) fn clamp_history(&mut self) -> usize {
        let mut adjusted = 0;
        let mut latest = i64::MIN;
        for entry in &mut self.history {
            if entry.timestamp < latest {
                entry.timestamp = latest;
                adjusted += 1;
            }
            latest = entry.timestamp;
        }
        adjusted
    }
}
