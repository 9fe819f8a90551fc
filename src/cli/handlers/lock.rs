//! Handler for the `toggle-lock` command

use super::common::HandlerContext;
use crate::core::TicketStatus;
use crate::error::Result;

/// Handle the `toggle-lock` command
pub fn handle_toggle_lock_command(ticket_ref: &str, ctx: &mut HandlerContext) -> Result<()> {
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let ticket = ctx.engine()?.toggle_lock(&id)?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        let message = match ticket.status() {
            TicketStatus::Locked => format!("🔒 Locked ticket {}", ticket.reference_code()),
            TicketStatus::Open => format!("🔓 Unlocked ticket {}", ticket.reference_code()),
        };
        ctx.formatter.success(&message);
    }
    Ok(())
}
