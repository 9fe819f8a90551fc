use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Data-center physical access request tracker
#[derive(Parser, Debug)]
#[command(name = "access-ticket", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the ticket snapshot
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new access request
    Submit {
        #[command(flatten)]
        form: RequestArgs,

        /// Fill in the form with prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show the dashboard, newest ticket first
    List {
        /// Only locked tickets
        #[arg(long, conflicts_with = "open")]
        locked: bool,

        /// Only open tickets
        #[arg(long)]
        open: bool,
    },

    /// Show a ticket with its history
    Show {
        /// Ticket id, reference code, or id prefix
        ticket: String,
    },

    /// Change the details of an open ticket
    Edit {
        /// Ticket id, reference code, or id prefix
        ticket: String,

        #[command(flatten)]
        form: RequestArgs,

        /// The requester is no longer bringing equipment
        #[arg(long, conflicts_with = "equipment")]
        no_equipment: bool,

        /// Remove all accompanying staff before adding any given with --staff
        #[arg(long)]
        clear_staff: bool,

        /// Edit the form with prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Lock an open ticket or unlock a locked one
    #[command(visible_alias = "lock")]
    ToggleLock {
        /// Ticket id, reference code, or id prefix
        ticket: String,
    },

    /// Delete a ticket and its history
    Delete {
        /// Ticket id, reference code, or id prefix
        ticket: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Access form fields accepted on the command line
#[derive(Args, Debug, Default, Clone)]
pub struct RequestArgs {
    /// Primary applicant's full name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    /// Planned work
    #[arg(long)]
    pub purpose: Option<String>,

    /// Target rack or devices
    #[arg(long)]
    pub rack: Option<String>,

    /// Equipment being brought in
    #[arg(long)]
    pub equipment: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Accompanying person, `internal:NAME` or `external:NAME:ID` (repeatable)
    #[arg(long = "staff", value_name = "ROLE:NAME[:ID]")]
    pub staff: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let cli = Cli::try_parse_from([
            "access-ticket",
            "submit",
            "--name",
            "Ahmed",
            "--staff",
            "internal:Omar",
            "--staff",
            "external:Sarah:P-1",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Submit { form, interactive } => {
                assert!(!interactive);
                assert_eq!(form.name.as_deref(), Some("Ahmed"));
                assert_eq!(form.staff.len(), 2);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_lock_alias() {
        let cli = Cli::try_parse_from(["access-ticket", "lock", "JW-ALPHA"]).unwrap();
        assert!(matches!(cli.command, Commands::ToggleLock { .. }));
    }
}
