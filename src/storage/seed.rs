//! Demonstration tickets shown on a first run

use crate::core::{
    AccessRequestBuilder, AdditionalStaff, HistoryAction, HistoryEntry, ReferenceCode, StaffId,
    StaffRole, Ticket, TicketId, TicketStatus,
};
use crate::error::Result;

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

fn entry(timestamp: i64, action: HistoryAction) -> HistoryEntry {
    HistoryEntry { timestamp, action }
}

fn staff(id: &str, role: StaffRole, name: &str, id_number: Option<&str>) -> AdditionalStaff {
    AdditionalStaff {
        id: StaffId::from(id),
        role,
        name: name.to_string(),
        id_number: id_number.map(str::to_string),
    }
}

/// The seed collection in dashboard order, with timestamps relative to `now`
pub fn seed_tickets(now: i64) -> Result<Vec<Ticket>> {
    let beta = Ticket::restore(
        TicketId::from_raw("mock-2"),
        ReferenceCode::parse("JW-BETA")?,
        now - HOUR_MS,
        TicketStatus::Open,
        AccessRequestBuilder::new()
            .primary_name("John Smith")
            .company("Cisco Systems")
            .department("Support Services")
            .purpose("Warranty replacement for failed supervisor module in Nexus chassis.")
            .rack("Rack 04 / Row B")
            .equipment("Replacement Module, Antistatic wrist strap")
            .notes("Vendor ticket #9928341")
            .staff(staff(
                "s1",
                StaffRole::External,
                "Sarah Connor",
                Some("P-98827361"),
            ))
            .build(),
        vec![
            entry(now - 2 * HOUR_MS, HistoryAction::Created),
            entry(
                now - HOUR_MS,
                HistoryAction::Other("Details Updated".to_string()),
            ),
        ],
    )?;

    let alpha = Ticket::restore(
        TicketId::from_raw("mock-1"),
        ReferenceCode::parse("JW-ALPHA")?,
        now - DAY_MS,
        TicketStatus::Open,
        AccessRequestBuilder::new()
            .primary_name("Ahmed Mansour")
            .company("Jawwal")
            .department("IT Infrastructure")
            .purpose("Routine maintenance on core distribution switches and patch panel cleanup.")
            .rack("Rack 12-A / Core Room")
            .equipment("Fluke Network Tester, Console Cable, Toolkit")
            .notes("Scheduled window is 2:00 AM to 4:00 AM.")
            .build(),
        vec![entry(now - DAY_MS, HistoryAction::Created)],
    )?;

    let gamma = Ticket::restore(
        TicketId::from_raw("mock-3"),
        ReferenceCode::parse("JW-GAMMA")?,
        now - 2 * DAY_MS,
        TicketStatus::Locked,
        AccessRequestBuilder::new()
            .primary_name("Samira Khalid")
            .company("Jawwal")
            .department("Security Operations")
            .purpose("Quarterly physical security audit and sensor calibration.")
            .rack("All Data Halls")
            .notes("Annual compliance review. Ticket locked after completion.")
            .staff(staff("s2", StaffRole::Internal, "Omar Rayyan", None))
            .build(),
        vec![
            entry(now - 2 * DAY_MS, HistoryAction::Created),
            entry(now - 2 * DAY_MS + 800_000, HistoryAction::Locked),
        ],
    )?;

    Ok(vec![alpha, beta, gamma])
}
