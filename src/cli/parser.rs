use crate::export::ExportFormat;
use crate::models::query_shape::QueryShape;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSchedule
/// Personal appointment scheduler backed by SQLite
#[derive(Parser)]
#[command(
    name = "rschedule",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal appointment scheduler: book appointments per site and catch overlaps, using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
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
        #[arg(long = "last", help = "Show only the most recent N entries")]
        last: Option<usize>,
    },

    /// List the known sites and their codes
    Locations,

    /// Book a new appointment
    Add {
        /// Title of the appointment
        title: String,

        #[arg(
            long = "at",
            help = "Start: 'YYYY-MM-DD HH:MM[:SS]', 'now' or 'today|tomorrow|yesterday HH:MM'"
        )]
        at: String,

        #[arg(long = "loc", help = "Site name (e.g. DALLAS, park-city) or site code")]
        loc: Option<String>,

        #[arg(long = "dur", help = "Duration: 45m, 2h, 1h30m, 01:30 or minutes")]
        dur: Option<String>,

        #[arg(long = "desc", help = "Free-form description")]
        desc: Option<String>,

        #[arg(long, short = 'f', help = "Save even if the slot overlaps another appointment")]
        force: bool,
    },

    /// Change an existing appointment
    Edit {
        /// Appointment id
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "at")]
        at: Option<String>,

        #[arg(long = "loc")]
        loc: Option<String>,

        #[arg(long = "dur")]
        dur: Option<String>,

        #[arg(long = "desc")]
        desc: Option<String>,

        #[arg(long, short = 'f', help = "Save even if the slot overlaps another appointment")]
        force: bool,
    },

    /// Delete one appointment by id, or all of them
    Del {
        #[arg(required_unless_present = "all", help = "Appointment id")]
        id: Option<i64>,

        #[arg(long = "all", conflicts_with = "id", help = "Delete every appointment")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List appointments
    List {
        #[arg(long, value_enum, default_value = "all", help = "Time window")]
        when: QueryShape,

        #[arg(long = "loc", help = "Only this site")]
        loc: Option<String>,
    },

    /// Show appointments overlapping a slot
    Conflicts {
        #[arg(long = "at")]
        at: String,

        #[arg(long = "dur")]
        dur: Option<String>,

        #[arg(long = "loc")]
        loc: Option<String>,

        #[arg(long = "exclude", default_value_t = 0, help = "Ignore this appointment id")]
        exclude: i64,
    },

    /// Export appointments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "all")]
        when: QueryShape,

        #[arg(long = "loc")]
        loc: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
