use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::core::{ReferenceCode, Ticket, TicketId};
use crate::error::{AccessTicketError, Result};
use crate::lifecycle::LifecycleEngine;
use crate::storage::{FileStorage, TicketStore};
use std::path::{Path, PathBuf};

/// Shortest id prefix accepted as a ticket reference
const MIN_ID_PREFIX: usize = 4;

/// Context for handler operations
///
/// Encapsulates configuration, the opened ticket store and the output formatter.
pub struct HandlerContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub store: TicketStore<FileStorage>,
    pub formatter: OutputFormatter,
}

impl HandlerContext {
    /// Create a new handler context
    ///
    /// `data_dir` overrides the configured storage directory.
    pub fn new(
        data_dir: Option<&Path>,
        config_path: Option<&Path>,
        formatter: OutputFormatter,
    ) -> Result<Self> {
        let config = Config::load(config_path)?;
        let data_dir = data_dir.map_or_else(|| config.data_dir(), Path::to_path_buf);
        let store = TicketStore::open(FileStorage::new(&data_dir), config.store_options())?;

        Ok(Self {
            config,
            data_dir,
            store,
            formatter,
        })
    }

    /// Lifecycle engine over this context's store
    pub fn engine(&mut self) -> Result<LifecycleEngine<'_, FileStorage>> {
        LifecycleEngine::new(&mut self.store)
            .with_reference_prefix(self.config.tickets.reference_prefix.clone())
    }

    /// Resolve a ticket reference (full id, reference code, or id prefix)
    pub fn resolve_ticket_ref(&self, ticket_ref: &str) -> Result<TicketId> {
        resolve_ticket_ref(self.store.tickets(), ticket_ref)
    }

    /// Load a ticket by reference
    pub fn load_ticket_by_ref(&self, ticket_ref: &str) -> Result<&Ticket> {
        let id = self.resolve_ticket_ref(ticket_ref)?;
        self.store
            .get(&id)
            .ok_or(AccessTicketError::TicketNotFound { id: id.to_string() })
    }
}

/// Finds the ticket a user-supplied reference points at
pub fn resolve_ticket_ref(tickets: &[Ticket], ticket_ref: &str) -> Result<TicketId> {
    let needle = ticket_ref.trim();

    if let Some(ticket) = tickets.iter().find(|t| t.id().as_str() == needle) {
        return Ok(ticket.id().clone());
    }

    if let Ok(reference) = ReferenceCode::parse(needle) {
        if let Some(ticket) = tickets.iter().find(|t| t.reference_code() == &reference) {
            return Ok(ticket.id().clone());
        }
    }

    if needle.len() >= MIN_ID_PREFIX {
        let matches: Vec<_> = tickets
            .iter()
            .filter(|t| t.id().as_str().starts_with(needle))
            .collect();
        match matches.as_slice() {
            [ticket] => return Ok(ticket.id().clone()),
            [] => {},
            _ => {
                return Err(AccessTicketError::AmbiguousReference {
                    reference: needle.to_string(),
                    matches: matches.len(),
                });
            },
        }
    }

    Err(AccessTicketError::TicketNotFound {
        id: needle.to_string(),
    })
}
