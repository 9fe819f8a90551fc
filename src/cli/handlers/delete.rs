//! Handler for the `delete` command

use super::common::HandlerContext;
use crate::error::Result;
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Handle the `delete` command
///
/// Asks for confirmation unless `yes` is set. Deletion cannot be undone.
pub fn handle_delete_command(ticket_ref: &str, yes: bool, ctx: &mut HandlerContext) -> Result<()> {
    let ticket = ctx.load_ticket_by_ref(ticket_ref)?.clone();

    if !yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete ticket {} and its {} history entries?",
                ticket.reference_code(),
                ticket.history().len()
            ))
            .default(false)
            .interact()?
    {
        ctx.formatter.info("Deletion cancelled");
        return Ok(());
    }

    ctx.engine()?.delete(ticket.id())?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&serde_json::json!({
            "status": "success",
            "deleted": ticket.id(),
            "reference_code": ticket.reference_code(),
        }))?;
    } else {
        ctx.formatter
            .success(&format!("Deleted ticket {}", ticket.reference_code()));
    }
    Ok(())
}
