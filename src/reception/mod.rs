//! The intake desk: submissions, status advances, removals and the
//! whole-queue view.

use chrono::Local;
use uuid::Uuid;

use crate::client::{find_by_prefix, ClientRecord, ClientStatus};
use crate::error::{FrontdeskError, Result};
use crate::storage::{RecordStore, TrackerState};

/// Every operation is a full load-mutate-save cycle against the injected
/// store, so changes from other processes are picked up before each
/// mutation.
pub struct Reception<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> Reception<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a newly arrived client. A blank name is rejected before
    /// anything is persisted.
    pub fn submit(
        &self,
        name: &str,
        purpose: &str,
        time: Option<String>,
        department: &str,
        comment: &str,
    ) -> Result<ClientRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FrontdeskError::Validation(
                "Please enter client name".to_string(),
            ));
        }

        let now = Local::now();
        let time = time.unwrap_or_else(|| now.format("%H:%M").to_string());
        let record = ClientRecord::new(
            name.to_string(),
            purpose.to_string(),
            time,
            department,
            comment.trim().to_string(),
            now,
        );

        let mut state = self.store.load()?;
        state.queue.push(record.clone());
        self.store.save(&state)?;

        Ok(record)
    }

    /// Advance a queued client one step. Reaching completed files the
    /// record into the completed list. An unknown id or an illegal
    /// transition is a no-op, not an error.
    pub fn advance(&self, id: Uuid, target: ClientStatus) -> Result<Option<ClientRecord>> {
        let mut state = self.store.load()?;

        let Some(idx) = state.queue.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        if !state.queue[idx].advance_to(target, Local::now()) {
            return Ok(None);
        }

        let record = if state.queue[idx].status == ClientStatus::Completed {
            let record = state.queue.remove(idx);
            state.completed.push(record.clone());
            record
        } else {
            state.queue[idx].clone()
        };

        self.store.save(&state)?;
        Ok(Some(record))
    }

    /// Drop a client from the queue regardless of status. Returns whether
    /// anything was removed.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let mut state = self.store.load()?;

        let before = state.queue.len();
        state.queue.retain(|c| c.id != id);
        if state.queue.len() == before {
            return Ok(false);
        }

        self.store.save(&state)?;
        Ok(true)
    }

    /// Empty the active queue. The completed list is left alone.
    pub fn clear(&self) -> Result<usize> {
        let mut state = self.store.load()?;
        let dropped = state.queue.len();
        state.queue.clear();
        self.store.save(&state)?;
        Ok(dropped)
    }

    /// The operator-facing view: most recent arrivals first.
    pub fn queue(&self) -> Result<Vec<ClientRecord>> {
        let state = self.store.load()?;
        let mut queue = state.queue;
        queue.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(queue)
    }

    pub fn state(&self) -> Result<TrackerState> {
        self.store.load()
    }

    /// Resolve a full or prefix id against the active queue.
    pub fn resolve_id(&self, prefix: &str) -> Result<Option<Uuid>> {
        let state = self.store.load()?;
        Ok(find_by_prefix(&state.queue, prefix))
    }
}
