mod json_store;

pub use json_store::JsonStore;

use serde::{Deserialize, Serialize};

use crate::client::ClientRecord;
use crate::error::Result;

/// Everything the tracker persists, as one document. Key names match the
/// storage keys the original pages used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(rename = "clientQueue", default)]
    pub queue: Vec<ClientRecord>,
    #[serde(rename = "completedClients", default)]
    pub completed: Vec<ClientRecord>,
    /// Legacy counter superseded by per-record UUIDs; still persisted.
    #[serde(rename = "clientCounter", default = "default_counter")]
    pub counter: u64,
    #[serde(rename = "selectedDepartment", default)]
    pub selected_department: Option<String>,
}

fn default_counter() -> u64 {
    1
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            completed: Vec::new(),
            counter: 1,
            selected_department: None,
        }
    }
}

/// The durable store the intake desk and every dashboard share. Reads and
/// writes always cover the full state; concurrent writers are last-write-
/// wins, exactly like the browser storage this replaces.
pub trait RecordStore {
    fn load(&self) -> Result<TrackerState>;
    fn save(&self, state: &TrackerState) -> Result<()>;
}
