//! Ticket lifecycle
//!
//! [`LifecycleEngine`] is the only way to change tickets. Each operation
//! validates its input, applies the change together with its history entry,
//! and persists the snapshot before returning. A failed operation leaves the
//! store untouched.
//!
//! ```text
//!            create
//!              │
//!              ▼        toggle_lock
//!   edit ──► OPEN ◄──────────────────► LOCKED
//!              │                          │
//!              └───────── delete ─────────┘
//! ```

use crate::core::{
    AccessRequest, Clock, ReferenceCode, SystemClock, Ticket, TicketId, TicketStatus,
};
use crate::error::{AccessTicketError, Result};
use crate::storage::{KeyValueStore, TicketStore};

/// Reference code prefix used when none is configured
pub const DEFAULT_REFERENCE_PREFIX: &str = "JW";

const MAX_ID_ATTEMPTS: usize = 8;

/// Applies lifecycle operations to a [`TicketStore`]
pub struct LifecycleEngine<'s, S: KeyValueStore, C: Clock = SystemClock> {
    store: &'s mut TicketStore<S>,
    clock: C,
    reference_prefix: String,
}

impl<'s, S: KeyValueStore> LifecycleEngine<'s, S, SystemClock> {
    /// Creates an engine stamping history with the system clock
    pub fn new(store: &'s mut TicketStore<S>) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<'s, S: KeyValueStore, C: Clock> LifecycleEngine<'s, S, C> {
    pub fn with_clock(store: &'s mut TicketStore<S>, clock: C) -> Self {
        Self {
            store,
            clock,
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
        }
    }

    /// Sets the prefix of generated reference codes
    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        ReferenceCode::validate_prefix(&prefix)?;
        self.reference_prefix = prefix;
        Ok(self)
    }

    /// Submits a new access request as an open ticket
    ///
    /// The ticket is placed first in the collection and carries a single
    /// "Ticket Created" history entry.
    pub fn create(&mut self, mut request: AccessRequest) -> Result<Ticket> {
        request.normalize();
        request.validate()?;

        let id = self.fresh_id()?;
        let reference = self.fresh_reference()?;
        let ticket = Ticket::open(id, reference, request, self.clock.now_millis());

        let created = ticket.clone();
        self.store.commit(move |tickets| {
            tickets.insert(0, created);
            Ok(())
        })?;

        tracing::info!(
            "Ticket created - {} ({})",
            ticket.reference_code(),
            ticket.id().short()
        );
        Ok(ticket)
    }

    /// Replaces the form fields of an open ticket
    ///
    /// Locked tickets are rejected with `TicketLocked` before anything else is
    /// looked at; identity, status and earlier history are never touched.
    pub fn edit(&mut self, id: &TicketId, mut request: AccessRequest) -> Result<Ticket> {
        request.normalize();
        let now = self.clock.now_millis();

        let ticket = self.store.commit(|tickets| {
            let ticket = find_mut(tickets, id)?;
            ticket.ensure_editable()?;
            request.validate()?;
            ticket.replace_request(request, now)?;
            Ok(ticket.clone())
        })?;

        tracing::info!("Ticket edited - {}", ticket.reference_code());
        Ok(ticket)
    }

    /// Locks an open ticket or unlocks a locked one
    pub fn toggle_lock(&mut self, id: &TicketId) -> Result<Ticket> {
        let now = self.clock.now_millis();

        let ticket = self.store.commit(|tickets| {
            let ticket = find_mut(tickets, id)?;
            ticket.toggle_lock(now);
            Ok(ticket.clone())
        })?;

        match ticket.status() {
            TicketStatus::Locked => {
                tracing::info!("Security lock applied - {}", ticket.reference_code());
            },
            TicketStatus::Open => tracing::info!("Ticket unlocked - {}", ticket.reference_code()),
        }
        Ok(ticket)
    }

    /// Removes a ticket and its history for good
    pub fn delete(&mut self, id: &TicketId) -> Result<()> {
        let removed = self.store.commit(|tickets| {
            let position = tickets
                .iter()
                .position(|ticket| ticket.id() == id)
                .ok_or_else(|| not_found(id))?;
            Ok(tickets.remove(position))
        })?;

        tracing::info!(
            "Ticket deleted - {} ({} history entries discarded)",
            removed.reference_code(),
            removed.history().len()
        );
        Ok(())
    }

    /// All tickets, most recently created first
    #[must_use]
    pub fn list_all(&self) -> &[Ticket] {
        self.store.tickets()
    }

    pub fn get(&self, id: &TicketId) -> Result<&Ticket> {
        self.store.get(id).ok_or_else(|| not_found(id))
    }

    fn fresh_id(&self) -> Result<TicketId> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| TicketId::new())
            .find(|id| !self.store.contains(id))
            .ok_or(AccessTicketError::IdExhausted {
                kind: "ticket id",
                attempts: MAX_ID_ATTEMPTS,
            })
    }

    fn fresh_reference(&self) -> Result<ReferenceCode> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let reference = ReferenceCode::generate(&self.reference_prefix)?;
            if self.store.find_by_reference(&reference).is_none() {
                return Ok(reference);
            }
            tracing::debug!("Reference code {} already taken, retrying", reference);
        }
        Err(AccessTicketError::IdExhausted {
            kind: "reference code",
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

fn find_mut<'a>(tickets: &'a mut [Ticket], id: &TicketId) -> Result<&'a mut Ticket> {
    tickets
        .iter_mut()
        .find(|ticket| ticket.id() == id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: &TicketId) -> AccessTicketError {
    AccessTicketError::TicketNotFound { id: id.to_string() }
}
