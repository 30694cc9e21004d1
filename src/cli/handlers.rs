use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::client::{canonical_code, ClientRecord, ClientStatus};
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::{FrontdeskError, Result};
use crate::reception::Reception;
use crate::report::{
    clients_on_date, daily_summary, dashboard_csv, dashboard_export_filename, end_of_day_report,
    format_daily, format_end_of_day, reception_csv, reception_export_filename,
};
use crate::storage::{JsonStore, RecordStore};

use super::{DashboardAction, ReportAction};

/// Find the project root by looking for .frontdesk/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".frontdesk").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> Result<JsonStore> {
    JsonStore::open(&find_project_root())
}

fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            FrontdeskError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
        }),
    }
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let _store = JsonStore::init(&root)?;

    println!("Initialized frontdesk project in {}", root.display());
    Ok(())
}

pub fn handle_add(
    name: String,
    purpose: String,
    department: String,
    time: Option<String>,
    comment: String,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    let reception = Reception::new(&store);

    let record = reception.submit(&name, &purpose, time, &department, &comment)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!(
            "Added {} ({}) - {} for {} at {}",
            record.name,
            record.short_id(),
            record.purpose,
            record.department_display(),
            record.time
        );
    }

    Ok(())
}

pub fn handle_list(
    department: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    let reception = Reception::new(&store);
    let mut queue = reception.queue()?;

    if let Some(code) = department {
        let code = canonical_code(&code);
        queue.retain(|c| c.department == code);
    }
    if let Some(raw) = status {
        let status: ClientStatus = raw.parse().map_err(FrontdeskError::Validation)?;
        queue.retain(|c| c.status == status);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&queue)?);
        return Ok(());
    }

    if queue.is_empty() {
        println!("No clients in the queue.");
        return Ok(());
    }

    println!("Clients:\n");
    for (i, c) in queue.iter().enumerate() {
        println!(
            "  {:>3}. ({}) {} - {} at {} [{}]",
            i + 1,
            c.short_id(),
            c.name,
            c.purpose,
            c.time,
            c.status.label()
        );
        if c.comment.is_empty() {
            println!("       Department: {}", c.department_display());
        } else {
            println!(
                "       Department: {}  Comments: {}",
                c.department_display(),
                c.comment
            );
        }
    }

    Ok(())
}

fn advance_reception(id_prefix: &str, target: ClientStatus) -> Result<()> {
    let store = open_store()?;
    let reception = Reception::new(&store);

    // Unknown ids are silently ignored, matching the tracker pages.
    let Some(id) = reception.resolve_id(id_prefix)? else {
        return Ok(());
    };

    if let Some(record) = reception.advance(id, target)? {
        match record.status {
            ClientStatus::InProgress => {
                println!("Started serving {} ({})", record.name, record.short_id())
            }
            ClientStatus::Completed => println!(
                "Completed {} ({}) - moved to the completed list",
                record.name,
                record.short_id()
            ),
            ClientStatus::Waiting => {}
        }
    }

    Ok(())
}

pub fn handle_start(id: String) -> Result<()> {
    advance_reception(&id, ClientStatus::InProgress)
}

pub fn handle_complete(id: String) -> Result<()> {
    advance_reception(&id, ClientStatus::Completed)
}

pub fn handle_remove(id: String) -> Result<()> {
    let store = open_store()?;
    let reception = Reception::new(&store);

    if let Some(id) = reception.resolve_id(&id)? {
        if reception.remove(id)? {
            println!("Removed client {}", &id.to_string()[..7]);
        }
    }

    Ok(())
}

pub fn handle_clear(force: bool) -> Result<()> {
    let store = open_store()?;
    let reception = Reception::new(&store);

    // Confirm unless --force is used
    if !force {
        eprintln!("Clear all client entries from the queue? [y/N] ");

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(FrontdeskError::Validation(
                "Use --force to clear in non-interactive mode".to_string(),
            ));
        }
    }

    let dropped = reception.clear()?;
    println!("Cleared {} client entries.", dropped);
    Ok(())
}

pub fn handle_report(action: ReportAction) -> Result<()> {
    let store = open_store()?;
    let state = store.load()?;

    match action {
        ReportAction::Daily { json } => {
            let summary = daily_summary(&state.queue, Local::now().date_naive());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_daily(&summary, None));
            }
        }
        ReportAction::EndOfDay { date, json } => {
            let date = parse_date(date)?;
            let report = end_of_day_report(&state.queue, &state.completed, date);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_end_of_day(&report, true));
            }
        }
    }

    Ok(())
}

pub fn handle_export(date: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let store = open_store()?;
    let state = store.load()?;

    let records = if date.is_some() {
        let day = parse_date(date)?;
        clients_on_date(&state.queue, day)
    } else {
        state.queue.clone()
    };

    let path = out.unwrap_or_else(|| {
        PathBuf::from(reception_export_filename(Local::now().date_naive()))
    });
    fs::write(&path, reception_csv(&records))?;

    println!("Exported {} clients to {}", records.len(), path.display());
    Ok(())
}

pub fn handle_dashboard(action: DashboardAction) -> Result<()> {
    let store = open_store()?;
    let dashboard = Dashboard::new(&store);

    match action {
        DashboardAction::Select { code } => {
            let code = dashboard.select(&code)?;
            println!("Dashboard now following department {}", code);
        }

        DashboardAction::Show { json } => {
            let view = dashboard.refresh()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view.records)?);
            } else {
                render_view(&view, None);
            }
        }

        DashboardAction::Watch { interval } => {
            // First render shows the current state; NEW markers only
            // appear for arrivals after the previous refresh.
            let mut last_checked = Local::now().timestamp_millis();
            loop {
                let view = dashboard.refresh()?;
                render_view(&view, Some(last_checked));
                last_checked = Local::now().timestamp_millis();

                debug!(interval, "sleeping until next refresh");
                thread::sleep(Duration::from_secs(interval));
            }
        }

        DashboardAction::Start { id } => {
            advance_dashboard(&dashboard, &id, ClientStatus::InProgress)?;
        }

        DashboardAction::Complete { id } => {
            advance_dashboard(&dashboard, &id, ClientStatus::Completed)?;
        }

        DashboardAction::Report(report) => {
            let department = dashboard.selected()?;
            let state = store.load()?;
            let scoped: Vec<ClientRecord> = state
                .queue
                .iter()
                .filter(|c| c.department == department)
                .cloned()
                .collect();

            match report.action {
                ReportAction::Daily { json } => {
                    let summary = daily_summary(&scoped, Local::now().date_naive());
                    if json {
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    } else {
                        print!("{}", format_daily(&summary, Some(&department)));
                    }
                }
                ReportAction::EndOfDay { date, json } => {
                    let date = parse_date(date)?;
                    // The dashboard never sees the completed list; its
                    // end-of-day view covers the shared queue only.
                    let report = end_of_day_report(&scoped, &[], date);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        print!("{}", format_end_of_day(&report, false));
                    }
                }
            }
        }

        DashboardAction::Export { out } => {
            let view = dashboard.refresh()?;
            let path = out
                .unwrap_or_else(|| PathBuf::from(dashboard_export_filename(&view.department)));
            fs::write(&path, dashboard_csv(&view.records))?;
            println!(
                "Exported {} clients to {}",
                view.records.len(),
                path.display()
            );
        }
    }

    Ok(())
}

fn advance_dashboard<S: RecordStore>(
    dashboard: &Dashboard<'_, S>,
    id_prefix: &str,
    target: ClientStatus,
) -> Result<()> {
    let Some(id) = dashboard.resolve_id(id_prefix)? else {
        return Ok(());
    };

    if let Some(record) = dashboard.advance(id, target)? {
        match record.status {
            ClientStatus::InProgress => {
                println!("Started serving {} ({})", record.name, record.short_id())
            }
            ClientStatus::Completed => {
                println!("Completed {} ({})", record.name, record.short_id())
            }
            ClientStatus::Waiting => {}
        }
    }

    Ok(())
}

fn render_view(view: &DashboardView, new_since: Option<i64>) {
    println!(
        "Department {} - {} client(s) - last checked {}",
        view.department,
        view.records.len(),
        Local::now().format("%H:%M:%S")
    );

    if view.records.is_empty() {
        println!("No clients waiting for this department.");
        return;
    }

    for c in &view.records {
        let marker = match c.status {
            ClientStatus::Waiting => "[ ]",
            ClientStatus::InProgress => "[~]",
            ClientStatus::Completed => "[x]",
        };
        let comment = if c.comment.is_empty() {
            "No comments"
        } else {
            c.comment.as_str()
        };
        let is_new = new_since
            .map_or(false, |t| c.status == ClientStatus::Waiting && c.timestamp > t);

        println!(
            "  {} ({}) {} - {} at {} - {}{}",
            marker,
            c.short_id(),
            c.name,
            c.purpose,
            c.time,
            comment,
            if is_new { "  NEW" } else { "" }
        );
    }
}
