//! access-ticket - data-center physical access request tracker
//!
//! This is the main entry point for the access-ticket CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use access_ticket::cli::handlers::{
    EditParams, HandlerContext, handle_delete_command, handle_edit_command, handle_list_command,
    handle_show_command, handle_submit_command, handle_toggle_lock_command,
};
use access_ticket::cli::{Cli, Commands, OutputFormatter};
use access_ticket::error::{AccessTicketError, Result};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the access-ticket CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Set up logging on stderr so JSON output on stdout stays clean
///
/// `--verbose` selects debug logging; otherwise `RUST_LOG` applies, defaulting
/// to warnings so a discarded corrupt snapshot is always reported.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    init_logging(cli.verbose);

    let mut ctx = HandlerContext::new(cli.data_dir.as_deref(), cli.config.as_deref(), formatter)?;
    tracing::debug!("Using data directory {}", ctx.data_dir.display());

    dispatch_command(cli.command, &mut ctx)
}

fn dispatch_command(command: Commands, ctx: &mut HandlerContext) -> Result<()> {
    match command {
        Commands::Submit { form, interactive } => handle_submit_command(form, interactive, ctx),
        Commands::List { locked, open } => handle_list_command(locked, open, ctx),
        Commands::Show { ticket } => handle_show_command(&ticket, ctx),
        Commands::Edit {
            ticket,
            form,
            no_equipment,
            clear_staff,
            interactive,
        } => handle_edit_command(
            EditParams {
                ticket,
                form,
                no_equipment,
                clear_staff,
                interactive,
            },
            ctx,
        ),
        Commands::ToggleLock { ticket } => handle_toggle_lock_command(&ticket, ctx),
        Commands::Delete { ticket, yes } => handle_delete_command(&ticket, yes, ctx),
    }
}

/// Print an error with its hint, as JSON when requested
fn handle_error(error: &AccessTicketError, formatter: &OutputFormatter) {
    if formatter.is_json() {
        let body = serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "recoverable": error.is_recoverable(),
        });
        eprintln!("{body}");
        return;
    }

    formatter.error(&error.to_string());
    if let Some(hint) = error.suggestion() {
        eprintln!("{hint}");
    }
}
