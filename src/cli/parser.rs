use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for tutorledger
#[derive(Parser)]
#[command(
    name = "tutorledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track tutoring students and lessons, and compute what each student owes, using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second ledger)
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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Record, list and delete lessons
    Lesson {
        #[command(subcommand)]
        action: LessonAction,
    },

    /// Show billing statistics
    Stats {
        /// Restrict to one student (by name)
        #[arg(long)]
        student: Option<String>,

        /// Per-day totals for a month (YYYY-MM)
        #[arg(long, conflicts_with = "student")]
        month: Option<String>,
    },

    /// Export lessons to a file
    Export {
        /// Restrict to one student (by name)
        #[arg(long)]
        student: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file; defaults to class_stats_<timestamp>.<ext> in the export directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        /// Hourly rate
        #[arg(long)]
        rate: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        level: Option<String>,

        /// Multiplier applied to the rate, e.g. 0.9 for 10% off
        #[arg(long)]
        discount: Option<String>,
    },

    /// List all students
    List,

    /// Show a student with their totals
    Show { id: i64 },

    /// Change a student's details (rate changes do not affect recorded lessons)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        rate: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        level: Option<String>,

        #[arg(long)]
        discount: Option<String>,
    },

    /// Delete a student and all of their lessons
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum LessonAction {
    /// Record a lesson
    #[command(group(ArgGroup::new("who").required(true).args(["student", "student_id"])))]
    Add {
        /// Student name
        #[arg(long)]
        student: Option<String>,

        #[arg(long = "student-id")]
        student_id: Option<i64>,

        /// Start time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        start: String,

        /// End time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List lessons, most recent first
    List {
        /// Restrict to one student (by name)
        #[arg(long)]
        student: Option<String>,
    },

    /// Delete a lesson
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
