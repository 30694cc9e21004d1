// src/client/record.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{canonical_code, department_label, ClientStatus};

/// One client visit, the only domain entity. Serialized field names match
/// the storage format the reception pages wrote, so an existing store
/// reads back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: Uuid,
    pub name: String,
    pub purpose: String,
    /// User-facing HH:MM arrival text, editable at intake.
    pub time: String,
    /// Canonical uppercase code used for dashboard filtering.
    pub department: String,
    /// Human-readable department label, display only.
    #[serde(default)]
    pub department_text: String,
    #[serde(default)]
    pub comment: String,
    /// Creation instant in epoch millis; sort key and "new" marker.
    pub timestamp: i64,
    pub arrival_time: DateTime<Local>,
    #[serde(default)]
    pub start_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub completion_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub status: ClientStatus,
}

impl ClientRecord {
    pub fn new(
        name: String,
        purpose: String,
        time: String,
        department: &str,
        comment: String,
        now: DateTime<Local>,
    ) -> Self {
        let code = canonical_code(department);
        Self {
            id: Uuid::new_v4(),
            name,
            purpose,
            time,
            department_text: department_label(&code),
            department: code,
            comment,
            timestamp: now.timestamp_millis(),
            arrival_time: now,
            start_time: None,
            completion_time: None,
            status: ClientStatus::Waiting,
        }
    }

    /// Apply a status transition, stamping the matching instant. Illegal
    /// transitions (skips, reversals, repeats) leave the record untouched.
    pub fn advance_to(&mut self, target: ClientStatus, now: DateTime<Local>) -> bool {
        if !self.status.can_advance_to(target) {
            return false;
        }
        self.status = target;
        match target {
            ClientStatus::InProgress => self.start_time = Some(now),
            ClientStatus::Completed => self.completion_time = Some(now),
            ClientStatus::Waiting => {}
        }
        true
    }

    /// Label used wherever the department is shown to a person.
    pub fn department_display(&self) -> &str {
        if self.department_text.is_empty() {
            &self.department
        } else {
            &self.department_text
        }
    }

    /// First characters of the id, enough to reference a record from the
    /// command line.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..7].to_string()
    }
}

/// Match a full UUID or a prefix against a record list; first hit wins.
pub fn find_by_prefix(records: &[ClientRecord], prefix: &str) -> Option<Uuid> {
    records
        .iter()
        .find(|c| c.id.to_string().starts_with(prefix))
        .map(|c| c.id)
}
