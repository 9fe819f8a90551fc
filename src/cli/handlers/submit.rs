//! Handler for the `submit` command

use super::common::HandlerContext;
use super::form::request_from_args;
use crate::cli::commands::RequestArgs;
use crate::error::Result;
use crate::interactive::InteractiveForm;

/// Handle the `submit` command
///
/// Builds the access request from flags, or from prompts with `--interactive`,
/// and files it as a new open ticket.
pub fn handle_submit_command(
    form: RequestArgs,
    interactive: bool,
    ctx: &mut HandlerContext,
) -> Result<()> {
    let request = if interactive {
        InteractiveForm::new().fill(None)?
    } else {
        request_from_args(form)?
    };

    let ticket = ctx.engine()?.create(request)?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&serde_json::json!({
            "status": "success",
            "reference_code": ticket.reference_code(),
            "ticket": ticket,
        }))?;
    } else {
        ctx.formatter.success(&format!(
            "Request submitted. Reference code: {}",
            ticket.reference_code()
        ));
        ctx.formatter.info(&format!("Ticket ID: {}", ticket.id()));
    }

    Ok(())
}
