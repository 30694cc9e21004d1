//! Daily and end-of-day reporting over the client queue.
//!
//! Wait time is minutes between arrival and start of service; service
//! time is minutes between start and completion. Averages only cover
//! records holding the needed timestamps and round to one decimal.

mod csv;

pub use csv::{
    dashboard_csv, dashboard_export_filename, reception_csv, reception_export_filename,
    DASHBOARD_HEADER, RECEPTION_HEADER,
};

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::client::{ClientRecord, ClientStatus};

/// Round to one decimal, the precision every report and export uses.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn minutes_between(a: DateTime<Local>, b: DateTime<Local>) -> f64 {
    (b - a).num_milliseconds() as f64 / 60_000.0
}

/// Wait minutes for one record, or None before service starts.
pub fn wait_minutes(c: &ClientRecord) -> Option<f64> {
    c.start_time.map(|start| minutes_between(c.arrival_time, start))
}

/// Service minutes for one record, or None before completion.
pub fn service_minutes(c: &ClientRecord) -> Option<f64> {
    match (c.start_time, c.completion_time) {
        (Some(start), Some(done)) => Some(minutes_between(start, done)),
        _ => None,
    }
}

/// Average wait over records that reached service; 0 when none did.
pub fn average_wait(records: &[ClientRecord]) -> f64 {
    let waits: Vec<f64> = records.iter().filter_map(wait_minutes).collect();
    if waits.is_empty() {
        return 0.0;
    }
    round1(waits.iter().sum::<f64>() / waits.len() as f64)
}

/// Average service over completed records; 0 when none completed.
pub fn average_service(records: &[ClientRecord]) -> f64 {
    let times: Vec<f64> = records.iter().filter_map(service_minutes).collect();
    if times.is_empty() {
        return 0.0;
    }
    round1(times.iter().sum::<f64>() / times.len() as f64)
}

/// Queue records that arrived on the given local calendar day.
pub fn clients_on_date(queue: &[ClientRecord], date: NaiveDate) -> Vec<ClientRecord> {
    queue
        .iter()
        .filter(|c| c.arrival_time.date_naive() == date)
        .cloned()
        .collect()
}

fn department_counts(records: &[ClientRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for c in records {
        *counts.entry(c.department_display().to_string()).or_insert(0) += 1;
    }
    counts
}

fn status_count(records: &[ClientRecord], status: ClientStatus) -> usize {
    records.iter().filter(|c| c.status == status).count()
}

/// Snapshot totals over the current queue (or a department's slice).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_clients: usize,
    pub clients_by_department: BTreeMap<String, usize>,
    pub waiting: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn daily_summary(records: &[ClientRecord], date: NaiveDate) -> DailySummary {
    DailySummary {
        date,
        total_clients: records.len(),
        clients_by_department: department_counts(records),
        waiting: status_count(records, ClientStatus::Waiting),
        in_progress: status_count(records, ClientStatus::InProgress),
        completed: status_count(records, ClientStatus::Completed),
    }
}

/// Plain-text rendering of the daily summary.
pub fn format_daily(summary: &DailySummary, scope: Option<&str>) -> String {
    let mut out = match scope {
        Some(dept) => format!("Daily Client Report ({}) - {}\n\n", dept, summary.date),
        None => format!("Daily Client Report - {}\n\n", summary.date),
    };
    out.push_str(&format!("Total Clients: {}\n\n", summary.total_clients));

    out.push_str("Clients by Department:\n");
    for (dept, n) in &summary.clients_by_department {
        out.push_str(&format!("{}: {}\n", dept, n));
    }

    out.push_str("\nStatus Breakdown:\n");
    out.push_str(&format!("Waiting: {}\n", summary.waiting));
    out.push_str(&format!("In Progress: {}\n", summary.in_progress));
    out.push_str(&format!("Completed: {}\n", summary.completed));
    out
}

/// End-of-day rollup: the date's arrivals still in the queue plus the
/// records completed that day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfDayReport {
    pub date: NaiveDate,
    pub total_clients: usize,
    pub waiting: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub average_wait_minutes: f64,
    pub average_service_minutes: f64,
    pub clients_by_department: BTreeMap<String, usize>,
    pub clients: Vec<ClientRecord>,
}

pub fn end_of_day_report(
    queue: &[ClientRecord],
    completed: &[ClientRecord],
    date: NaiveDate,
) -> EndOfDayReport {
    let day_queue = clients_on_date(queue, date);
    let day_completed: Vec<ClientRecord> = completed
        .iter()
        .filter(|c| c.completion_time.map(|t| t.date_naive()) == Some(date))
        .cloned()
        .collect();

    let mut all = day_queue.clone();
    all.extend(day_completed.iter().cloned());

    EndOfDayReport {
        date,
        total_clients: all.len(),
        waiting: status_count(&day_queue, ClientStatus::Waiting),
        in_progress: status_count(&day_queue, ClientStatus::InProgress),
        // Dashboard-side completions stay in the queue, so both lists
        // contribute here.
        completed: status_count(&day_queue, ClientStatus::Completed) + day_completed.len(),
        average_wait_minutes: average_wait(&all),
        average_service_minutes: average_service(&all),
        clients_by_department: department_counts(&all),
        clients: all,
    }
}

/// Plain-text rendering of the end-of-day report. The dashboard variant
/// skips the performance metrics section.
pub fn format_end_of_day(report: &EndOfDayReport, with_metrics: bool) -> String {
    let mut out = format!("END OF DAY REPORT - {}\n", report.date);
    out.push_str("===================================\n\n");

    out.push_str("SUMMARY:\n");
    out.push_str(&format!("Total Clients: {}\n", report.total_clients));
    out.push_str(&format!("Completed: {}\n", report.completed));
    out.push_str(&format!("In Progress: {}\n", report.in_progress));
    out.push_str(&format!("Still Waiting: {}\n\n", report.waiting));

    if with_metrics {
        out.push_str("PERFORMANCE METRICS:\n");
        out.push_str(&format!(
            "Average Wait Time: {} minutes\n",
            report.average_wait_minutes
        ));
        out.push_str(&format!(
            "Average Service Time: {} minutes\n\n",
            report.average_service_minutes
        ));
    }

    out.push_str("CLIENTS BY DEPARTMENT:\n");
    for (dept, n) in &report.clients_by_department {
        out.push_str(&format!("{}: {}\n", dept, n));
    }

    out.push_str("\nFULL CLIENT LIST:\n");
    for (i, c) in report.clients.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {} ({})\n",
            i + 1,
            c.name,
            c.purpose,
            c.status.label()
        ));
    }
    out
}
