//! Handler for the `edit` command

use super::common::HandlerContext;
use super::form::apply_args;
use crate::cli::commands::RequestArgs;
use crate::core::AccessRequestBuilder;
use crate::error::Result;
use crate::interactive::InteractiveForm;

/// Parameters for editing a ticket
pub struct EditParams {
    pub ticket: String,
    pub form: RequestArgs,
    pub no_equipment: bool,
    pub clear_staff: bool,
    pub interactive: bool,
}

/// Handle the `edit` command
///
/// Starts from the ticket's current details and overrides what was given.
/// A locked ticket is refused before any prompt is shown.
pub fn handle_edit_command(params: EditParams, ctx: &mut HandlerContext) -> Result<()> {
    let current = ctx.load_ticket_by_ref(&params.ticket)?.clone();
    current.ensure_editable()?;

    let request = if params.interactive {
        InteractiveForm::new().fill(Some(current.request()))?
    } else {
        let mut builder = AccessRequestBuilder::from_request(current.request());
        if params.no_equipment {
            builder = builder.no_equipment();
        }
        if params.clear_staff {
            builder = builder.additional_staff(Vec::new());
        }
        apply_args(builder, params.form)?.build()
    };

    let ticket = ctx.engine()?.edit(current.id(), request)?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        ctx.formatter
            .success(&format!("Updated ticket {}", ticket.reference_code()));
    }
    Ok(())
}
