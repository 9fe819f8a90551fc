use super::repository::KeyValueStore;
use super::{seed, snapshot};
use crate::core::{Clock, ReferenceCode, SystemClock, Ticket, TicketId};
use crate::error::{AccessTicketError, Result};

/// Snapshot key used when none is configured
pub const DEFAULT_SNAPSHOT_KEY: &str = "jawwal_tickets";

/// How a `TicketStore` finds and initializes its snapshot
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub snapshot_key: String,
    /// Start from the demonstration tickets when no usable snapshot exists
    pub seed_on_first_run: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            seed_on_first_run: true,
        }
    }
}

/// The authoritative in-memory ticket collection and its snapshot
///
/// New tickets are inserted at the front, so the collection reads newest first
/// once the seed set has been replaced. Every change goes through [`TicketStore::commit`],
/// which writes the full snapshot before the in-memory collection is replaced.
#[derive(Debug)]
pub struct TicketStore<S: KeyValueStore> {
    backend: S,
    options: StoreOptions,
    tickets: Vec<Ticket>,
}

impl<S: KeyValueStore> TicketStore<S> {
    /// Opens the store and restores the last snapshot
    pub fn open(backend: S, options: StoreOptions) -> Result<Self> {
        let mut store = Self {
            backend,
            options,
            tickets: Vec::new(),
        };
        store.tickets = store.load()?;
        tracing::debug!(
            "Opened ticket store '{}' with {} tickets",
            store.options.snapshot_key,
            store.tickets.len()
        );
        Ok(store)
    }

    /// Reads the persisted collection
    ///
    /// A missing or corrupt snapshot yields the seed set (or nothing, if seeding
    /// is disabled). A corrupt value is logged and copied aside to
    /// `<key>.corrupt` before it can be overwritten by the next mutation.
    pub fn load(&self) -> Result<Vec<Ticket>> {
        let key = &self.options.snapshot_key;
        let Some(raw) = self.backend.get(key)? else {
            tracing::info!("No snapshot '{}' found, starting fresh", key);
            return self.initial_tickets();
        };

        match snapshot::decode(key, &raw) {
            Ok(tickets) => Ok(tickets),
            Err(err @ AccessTicketError::PersistenceCorrupt { .. }) => {
                tracing::warn!("{err}; falling back to the initial ticket set");
                self.quarantine(&raw);
                self.initial_tickets()
            },
            Err(err) => Err(err),
        }
    }

    /// Overwrites the snapshot with `tickets`
    pub fn persist(&self, tickets: &[Ticket]) -> Result<()> {
        let raw = snapshot::encode(tickets)?;
        self.backend.set(&self.options.snapshot_key, &raw)?;
        tracing::debug!(
            "Persisted {} tickets to '{}'",
            tickets.len(),
            self.options.snapshot_key
        );
        Ok(())
    }

    /// All tickets in store order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id() == id)
    }

    #[must_use]
    pub fn find_by_reference(&self, reference: &ReferenceCode) -> Option<&Ticket> {
        self.tickets
            .iter()
            .find(|ticket| ticket.reference_code() == reference)
    }

    #[must_use]
    pub fn contains(&self, id: &TicketId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Applies a change to a copy of the collection, persists it, then swaps it in
    ///
    /// If `apply` or the write fails the store is left exactly as it was.
    pub(crate) fn commit<T>(
        &mut self,
        apply: impl FnOnce(&mut Vec<Ticket>) -> Result<T>,
    ) -> Result<T> {
        let mut staged = self.tickets.clone();
        let outcome = apply(&mut staged)?;
        self.persist(&staged)?;
        self.tickets = staged;
        Ok(outcome)
    }

    fn initial_tickets(&self) -> Result<Vec<Ticket>> {
        if self.options.seed_on_first_run {
            seed::seed_tickets(SystemClock.now_millis())
        } else {
            Ok(Vec::new())
        }
    }

    fn quarantine(&self, raw: &str) {
        let key = format!("{}.corrupt", self.options.snapshot_key);
        match self.backend.set(&key, raw) {
            Ok(()) => tracing::warn!("Kept the unreadable snapshot under '{}'", key),
            Err(e) => tracing::warn!("Could not keep the unreadable snapshot: {e}"),
        }
    }
}
