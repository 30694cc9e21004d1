//! Department dashboard: a read-mostly view over the shared queue,
//! filtered to one department, refreshed by polling the store.

use chrono::Local;
use tracing::debug;
use uuid::Uuid;

use crate::client::{canonical_code, find_by_prefix, ClientRecord, ClientStatus};
use crate::error::{FrontdeskError, Result};
use crate::storage::RecordStore;

/// One refresh: the selected department's slice of the shared queue.
#[derive(Debug)]
pub struct DashboardView {
    pub department: String,
    pub records: Vec<ClientRecord>,
}

pub struct Dashboard<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> Dashboard<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist the chosen department code for subsequent refreshes.
    pub fn select(&self, code: &str) -> Result<String> {
        let code = canonical_code(code);
        if code.is_empty() {
            return Err(FrontdeskError::Validation(
                "Please select a department".to_string(),
            ));
        }

        let mut state = self.store.load()?;
        state.selected_department = Some(code.clone());
        self.store.save(&state)?;

        Ok(code)
    }

    /// The persisted department code; every dashboard operation needs one.
    pub fn selected(&self) -> Result<String> {
        self.store.load()?.selected_department.ok_or_else(|| {
            FrontdeskError::Validation("Please select a department first".to_string())
        })
    }

    /// Reload the shared queue and filter it to the selected department.
    pub fn refresh(&self) -> Result<DashboardView> {
        let department = self.selected()?;
        let state = self.store.load()?;

        let records: Vec<ClientRecord> = state
            .queue
            .into_iter()
            .filter(|c| c.department == department)
            .collect();

        debug!(department = %department, count = records.len(), "dashboard refreshed");
        Ok(DashboardView {
            department,
            records,
        })
    }

    /// Same state machine as the intake desk, but the record stays in the
    /// shared queue even once completed; only Reception files records away.
    pub fn advance(&self, id: Uuid, target: ClientStatus) -> Result<Option<ClientRecord>> {
        let mut state = self.store.load()?;

        let Some(record) = state.queue.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if !record.advance_to(target, Local::now()) {
            return Ok(None);
        }

        let updated = record.clone();
        self.store.save(&state)?;
        Ok(Some(updated))
    }

    /// Resolve a full or prefix id within the department's slice.
    pub fn resolve_id(&self, prefix: &str) -> Result<Option<Uuid>> {
        let view = self.refresh()?;
        Ok(find_by_prefix(&view.records, prefix))
    }
}
