use clap::Parser;
use frontdesk::cli::{
    handle_add, handle_clear, handle_complete, handle_dashboard, handle_export, handle_init,
    handle_list, handle_remove, handle_report, handle_start, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            name,
            purpose,
            department,
            time,
            comment,
            json,
        } => handle_add(name, purpose, department, time, comment, json),
        Commands::List {
            department,
            status,
            json,
        } => handle_list(department, status, json),
        Commands::Start { id } => handle_start(id),
        Commands::Complete { id } => handle_complete(id),
        Commands::Remove { id } => handle_remove(id),
        Commands::Clear { force } => handle_clear(force),
        Commands::Report(report) => handle_report(report.action),
        Commands::Export { date, out } => handle_export(date, out),
        Commands::Dashboard(dashboard) => handle_dashboard(dashboard.action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
