use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "frontdesk")]
#[command(version, about = "A reception-desk client tracker with department dashboards")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new frontdesk project in the current directory
    Init,

    /// Register a newly arrived client
    Add {
        /// Client name
        name: String,

        /// Visit purpose (Consultation, Billing, Meeting, Delivery, Complaint, Other)
        #[arg(long, short = 'p', default_value = "Other")]
        purpose: String,

        /// Department code the client is visiting (e.g. HR, IT, FIN)
        #[arg(long, short = 'd')]
        department: String,

        /// Arrival time as HH:MM (defaults to now)
        #[arg(long)]
        time: Option<String>,

        /// Free-text comment
        #[arg(long, short = 'c', default_value = "")]
        comment: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the active queue, most recent arrivals first
    List {
        /// Only show clients for this department code
        #[arg(long, short = 'd')]
        department: Option<String>,

        /// Only show clients with this status (waiting, in-progress, completed)
        #[arg(long, short = 's')]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start serving a waiting client
    Start {
        /// Client ID (full UUID or prefix)
        id: String,
    },

    /// Mark an in-progress client as completed and file it away
    Complete {
        /// Client ID (full UUID or prefix)
        id: String,
    },

    /// Remove a client from the queue, whatever its status
    Remove {
        /// Client ID (full UUID or prefix)
        id: String,
    },

    /// Empty the active queue (completed clients are kept)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Reports over the whole queue
    Report(ReportCommand),

    /// Export the queue as CSV
    Export {
        /// Only export clients that arrived on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Output file (defaults to client_report_<date>.csv)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Department dashboard operations
    Dashboard(DashboardCommand),
}

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub action: ReportAction,
}

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// Current-queue totals by department and status
    Daily {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// One calendar day's arrivals and completions, with wait/service averages
    EndOfDay {
        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct DashboardCommand {
    #[command(subcommand)]
    pub action: DashboardAction,
}

#[derive(Subcommand, Debug)]
pub enum DashboardAction {
    /// Choose the department this dashboard follows
    Select {
        /// Department code (e.g. HR, IT, FIN)
        code: String,
    },

    /// Show the department's current slice of the queue
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Poll the store and re-render on a fixed interval
    Watch {
        /// Refresh period in seconds
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },

    /// Start serving a waiting client
    Start {
        /// Client ID (full UUID or prefix)
        id: String,
    },

    /// Mark an in-progress client as completed (it stays in the shared queue)
    Complete {
        /// Client ID (full UUID or prefix)
        id: String,
    },

    /// Department-scoped reports
    Report(ReportCommand),

    /// Export the department's clients as CSV
    Export {
        /// Output file (defaults to clients_<CODE>.csv)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}
