//! Handlers for the read-only `list` and `show` commands

use super::common::HandlerContext;
use crate::core::TicketStatus;
use crate::error::Result;

/// Handle the `list` command
pub fn handle_list_command(locked: bool, open: bool, ctx: &HandlerContext) -> Result<()> {
    let wanted = match (locked, open) {
        (true, _) => Some(TicketStatus::Locked),
        (_, true) => Some(TicketStatus::Open),
        _ => None,
    };
    let tickets: Vec<_> = ctx
        .store
        .tickets()
        .iter()
        .filter(|ticket| wanted.is_none_or(|status| ticket.status() == status))
        .collect();

    if ctx.formatter.is_json() {
        return ctx.formatter.print_json(&tickets);
    }

    if tickets.is_empty() {
        ctx.formatter.info("No tickets found");
        return Ok(());
    }

    for ticket in &tickets {
        ctx.formatter.info(&ctx.formatter.ticket_row(ticket));
    }
    ctx.formatter.info(&format!("\n{} ticket(s)", tickets.len()));
    Ok(())
}

/// Handle the `show` command
pub fn handle_show_command(ticket_ref: &str, ctx: &HandlerContext) -> Result<()> {
    let ticket = ctx.load_ticket_by_ref(ticket_ref)?;

    if ctx.formatter.is_json() {
        return ctx.formatter.print_json(ticket);
    }

    for line in ctx.formatter.ticket_details(ticket) {
        ctx.formatter.info(&line);
    }
    Ok(())
}
