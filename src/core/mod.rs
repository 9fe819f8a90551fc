//! Core data model: tickets, access requests, identifiers and time

mod builders;
mod clock;
mod id;
mod request;
mod ticket;

pub use builders::AccessRequestBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use id::{REFERENCE_SUFFIX_LEN, ReferenceCode, StaffId, TicketId};
pub use request::{AccessRequest, AdditionalStaff, StaffRole};
pub use ticket::{HistoryAction, HistoryEntry, Ticket, TicketStatus};
