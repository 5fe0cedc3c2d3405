use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fichador
/// Presence tracking CLI: geofenced punches, sessions and balances over SQLite
#[derive(Parser)]
#[command(
    name = "fichador",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee presence tracker: geofenced clock events, session reconstruction and monthly balances using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage companies (geofence center, radius, office NFC tag)
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Manage employees (schedule, NFC tag, push token)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage weekly schedules and their time slots
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Manage leave/absence incidents
    Incident {
        #[command(subcommand)]
        action: IncidentAction,
    },

    /// Record a clock event for an employee (geofence + NFC gated)
    Punch {
        /// Employee id
        employee: i64,

        #[arg(long, help = "Device latitude in degrees", allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, help = "Device longitude in degrees", allow_hyphen_values = true)]
        lon: f64,

        #[arg(long = "nfc", help = "Scanned NFC tag, if any")]
        nfc: Option<String>,

        #[arg(long = "at", help = "Timestamp override (YYYY-MM-DD HH:MM[:SS]), defaults to now")]
        at: Option<String>,
    },

    /// Show reconstructed work sessions, most recent first
    Sessions {
        /// Employee id (omit with --all)
        employee: Option<i64>,

        #[arg(long, help = "Reconstruct sessions for every employee")]
        all: bool,

        #[arg(long, help = "Range start date (YYYY-MM-DD), defaults to 30 days ago")]
        from: Option<String>,

        #[arg(long, help = "Range end date (YYYY-MM-DD), defaults to today")]
        to: Option<String>,
    },

    /// Monthly theoretical vs. worked hour balance
    Balance {
        /// Employee id
        employee: i64,

        #[arg(long, help = "Month 1-12, defaults to the current month")]
        month: Option<u32>,

        #[arg(long, help = "Year, defaults to the current year")]
        year: Option<i32>,
    },

    /// Evaluate the punch reminder for one employee
    Remind {
        /// Employee id
        employee: i64,

        #[arg(long = "at", help = "Evaluation instant override, defaults to now")]
        at: Option<String>,
    },

    /// Batch absence sweep over all employees
    Sweep {
        #[arg(long = "at", help = "Evaluation instant override, defaults to now")]
        at: Option<String>,
    },

    /// Export reconstructed sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Employee id
        employee: i64,

        #[arg(long, help = "Range start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Range end date (YYYY-MM-DD)")]
        to: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Create a company
    Add {
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(long, help = "Allowed punch radius in meters")]
        radius: Option<i64>,

        #[arg(long = "office-tag", help = "Mandatory office NFC tag (office mode)")]
        office_tag: Option<String>,
    },

    /// Update geofence or office tag of a company
    Set {
        id: i64,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(long)]
        radius: Option<i64>,

        #[arg(long = "office-tag")]
        office_tag: Option<String>,

        #[arg(long = "clear-office-tag", conflicts_with = "office_tag")]
        clear_office_tag: bool,
    },

    /// List companies
    List,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create an employee
    Add {
        name: String,

        #[arg(long, help = "Company id")]
        company: i64,

        #[arg(long, help = "Schedule id")]
        schedule: Option<i64>,

        #[arg(long, help = "Registered personal NFC tag")]
        nfc: Option<String>,

        #[arg(long, help = "Push notification token")]
        token: Option<String>,
    },

    /// Update schedule, NFC tag or push token
    Set {
        id: i64,

        #[arg(long)]
        schedule: Option<i64>,

        #[arg(long)]
        nfc: Option<String>,

        #[arg(long)]
        token: Option<String>,
    },

    /// List employees
    List,
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Create a weekly schedule
    Add {
        name: String,

        #[arg(long, help = "Owning company id")]
        company: i64,
    },

    /// Add a time slot to a schedule
    Slot {
        /// Schedule id
        schedule: i64,

        #[arg(long, help = "Weekday: 0-6 or mon..sun")]
        weekday: String,

        #[arg(long, help = "Entry time (HH:MM)")]
        entry: String,

        #[arg(long, help = "Exit time (HH:MM); earlier than entry crosses midnight")]
        exit: String,
    },

    /// List the slots of a schedule
    List {
        /// Schedule id
        schedule: i64,
    },
}

#[derive(Subcommand)]
pub enum IncidentAction {
    /// File a leave/absence incident (created PENDING)
    Add {
        /// Employee id
        employee: i64,

        #[arg(long, help = "VACACIONES, BAJA, ASUNTOS_PROPIOS, OLVIDO or HORAS_EXTRA")]
        kind: String,

        #[arg(long, help = "First day (YYYY-MM-DD)")]
        from: String,

        #[arg(long, help = "Last day (YYYY-MM-DD)")]
        to: String,

        #[arg(long, help = "Employee comment")]
        note: Option<String>,
    },

    /// Approve or reject an incident
    Resolve {
        id: i64,

        #[arg(long, conflicts_with = "reject")]
        approve: bool,

        #[arg(long)]
        reject: bool,

        #[arg(long, help = "Resolution comment")]
        note: Option<String>,
    },

    /// List incidents
    List {
        #[arg(long, help = "Filter by employee id")]
        employee: Option<i64>,
    },
}
