//! CSV exports. Free-text fields (name, purpose, department label,
//! comment) are double-quoted; everything else is written bare, matching
//! the files the original tracker downloaded.

use chrono::{DateTime, Local, NaiveDate};

use super::{round1, service_minutes, wait_minutes};
use crate::client::ClientRecord;

pub const RECEPTION_HEADER: &str =
    "ID,Name,Purpose,Time,Department,Status,Arrival Time,Start Time,Completion Time,Wait Time,Service Time";

pub const DASHBOARD_HEADER: &str = "ID,Name,Purpose,Time,Department,Status,Comments";

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

fn instant(t: Option<DateTime<Local>>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn duration(minutes: Option<f64>) -> String {
    minutes
        .map(|m| round1(m).to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Whole-queue (or date-filtered) export used by the intake desk.
pub fn reception_csv(records: &[ClientRecord]) -> String {
    let mut out = String::from(RECEPTION_HEADER);
    out.push('\n');

    for c in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            c.id,
            quoted(&c.name),
            quoted(&c.purpose),
            c.time,
            quoted(c.department_display()),
            c.status.label(),
            instant(Some(c.arrival_time)),
            instant(c.start_time),
            instant(c.completion_time),
            duration(wait_minutes(c)),
            duration(service_minutes(c)),
        ));
    }
    out
}

/// Department-scoped export used by the dashboards.
pub fn dashboard_csv(records: &[ClientRecord]) -> String {
    let mut out = String::from(DASHBOARD_HEADER);
    out.push('\n');

    for c in records {
        let comment = if c.comment.is_empty() {
            "No comments"
        } else {
            c.comment.as_str()
        };
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            c.id,
            quoted(&c.name),
            quoted(&c.purpose),
            c.time,
            quoted(c.department_display()),
            c.status.label(),
            quoted(comment),
        ));
    }
    out
}

pub fn reception_export_filename(date: NaiveDate) -> String {
    format!("client_report_{}.csv", date.format("%Y-%m-%d"))
}

pub fn dashboard_export_filename(code: &str) -> String {
    format!("clients_{}.csv", code)
}
