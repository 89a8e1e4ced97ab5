use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fastlife
/// CLI application to track fasting sessions and weight with SQLite
#[derive(Parser)]
#[command(
    name = "fastlife",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fasting tracker CLI: log fasts, weight and goal streaks using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (email); defaults to default_user from the config
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Start a fast (now, or at --at)
    Start {
        #[arg(long = "at", help = "Start time (YYYY-MM-DD HH:MM), default: now")]
        at: Option<String>,

        #[arg(
            long = "type",
            help = "Fasting type: intermittent, extended or other"
        )]
        fasting_type: Option<String>,
    },

    /// End the active fast (now, or at --at)
    End {
        #[arg(long = "at", help = "End time (YYYY-MM-DD HH:MM), default: now")]
        at: Option<String>,

        #[arg(long, help = "Energy level: 1=low, 2=medium, 3=high")]
        energy: Option<i32>,

        #[arg(long, help = "Focus level: 1=low, 2=medium, 3=high")]
        focus: Option<i32>,

        #[arg(long, help = "Mood level: 1=low, 2=medium, 3=high")]
        mood: Option<i32>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
    },

    /// Add a completed fast (backfill)
    Add {
        /// Start time (YYYY-MM-DD HH:MM)
        start: String,

        /// End time (YYYY-MM-DD HH:MM)
        end: String,

        #[arg(
            long = "type",
            help = "Fasting type: intermittent, extended or other"
        )]
        fasting_type: Option<String>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
    },

    /// Edit an existing fasting record
    Edit {
        /// Record id to edit
        id: i64,

        #[arg(long, help = "New start time (YYYY-MM-DD HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "New end time (YYYY-MM-DD HH:MM)")]
        end: Option<String>,

        #[arg(
            long = "type",
            help = "Fasting type: intermittent, extended or other"
        )]
        fasting_type: Option<String>,

        #[arg(long, help = "Energy level: 1=low, 2=medium, 3=high")]
        energy: Option<i32>,

        #[arg(long, help = "Focus level: 1=low, 2=medium, 3=high")]
        focus: Option<i32>,

        #[arg(long, help = "Mood level: 1=low, 2=medium, 3=high")]
        mood: Option<i32>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
    },

    /// Delete a fasting record by id
    Del {
        /// Record id to delete
        id: i64,
    },

    /// List fasting history
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "open", help = "Show only the active fast")]
        open: bool,
    },

    /// Record or list monthly weight
    Weight {
        #[command(subcommand)]
        action: WeightCommands,
    },

    /// Show streak, averages and the last 7 days
    Dashboard,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export fasting or weight data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'w', help = "Export weight records instead of fasts")]
        weights: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user account
    Add {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long, help = "Daily fasting goal in hours (default 16)")]
        goal: Option<f64>,
    },

    /// List user accounts
    List,

    /// Set the daily fasting goal (hours) for the selected user
    Goal {
        /// New goal in hours
        hours: f64,
    },
}

#[derive(Subcommand)]
pub enum WeightCommands {
    /// Record weight for a month (default: current month)
    Add {
        /// Weight in kg
        weight: f64,

        #[arg(long, help = "Reference month (YYYY-MM), default: current")]
        month: Option<String>,
    },

    /// List recorded weights
    List,
}
