use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Working-day countdowns, shifts, and spans over your own holiday list.
#[derive(Parser)]
#[command(
    name = "workdays",
    version,
    about = "Holiday-aware working-day calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: workdays.toml, optional].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the holiday file from config.
    #[arg(long, global = true)]
    pub holidays: Option<PathBuf>,

    /// Override the reference date (YYYY-MM-DD) used as "today".
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Working days remaining until (or elapsed since) a date.
    Until {
        /// Target date (YYYY-MM-DD).
        target: String,
    },
    /// Date reached after a signed number of working days.
    Shift {
        /// Working-day offset, e.g. 5 or -3.
        #[arg(allow_hyphen_values = true)]
        offset: String,
        /// Start date (YYYY-MM-DD); the reference date if omitted.
        #[arg(long)]
        from: Option<String>,
    },
    /// Working-day span between two dates, both included.
    Span {
        /// Start date (YYYY-MM-DD).
        start: String,
        /// End date (YYYY-MM-DD).
        end: String,
    },
    /// Manage the holiday list.
    #[command(subcommand)]
    Holiday(HolidayCommand),
}

/// Holiday list subcommands.
#[derive(Subcommand)]
pub enum HolidayCommand {
    /// Mark a date as a holiday (overwrites an existing label).
    Add {
        /// Date (YYYY-MM-DD).
        date: String,
        /// Label stored with the date.
        #[arg(short, long, default_value = "holiday")]
        label: String,
    },
    /// Unmark a date.
    Remove {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// List holidays.
    List {
        /// Only list holidays of this year.
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Mark every Saturday and Sunday in a range.
    Weekends {
        /// First day (YYYY-MM-DD).
        from: String,
        /// Last day (YYYY-MM-DD).
        to: String,
        /// Label stored with each day.
        #[arg(short, long, default_value = "weekend")]
        label: String,
    },
}
