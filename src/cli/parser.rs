use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to log daily working hours and project monthly earnings
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily start/end times, see the month as a calendar, and project your earnings",
    long_about = None
)]
pub struct Cli {
    /// Override the storage location (SQLite file, or directory for the local backend)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage backend from the configuration file
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Save (or overwrite) the work entry for a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM); defaults to the saved value, else 09:00
        #[arg(long = "in")]
        start: Option<String>,

        /// End time (HH:MM); defaults to the saved value, else 17:00
        #[arg(long = "out")]
        end: Option<String>,

        /// Show the duration and month running total without saving
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Delete the work entry for a date
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List entries with their earnings
    List {
        /// Month to list (YYYY-MM) or "all"; defaults to the current month
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Show a month as a calendar grid
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Move the shown month by N months (negative goes back)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,

        /// Day to highlight as selected (YYYY-MM-DD); defaults to today
        #[arg(long)]
        select: Option<String>,
    },

    /// Show monthly totals and projected earnings
    Summary {
        /// Month to summarize (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Show or set the hourly wage
    Wage {
        /// New hourly wage
        #[arg(long)]
        set: Option<f64>,
    },

    /// Ask the text-generation service for feedback on recent entries
    Insight,

    /// Export entries to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Month to export (YYYY-MM); all entries when omitted
        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
