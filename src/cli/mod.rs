mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, DashboardAction, DashboardCommand, ReportAction, ReportCommand,
};
pub use handlers::{
    handle_add, handle_clear, handle_complete, handle_dashboard, handle_export, handle_init,
    handle_list, handle_remove, handle_report, handle_start,
};
