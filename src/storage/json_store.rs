use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{RecordStore, TrackerState};
use crate::error::{FrontdeskError, Result};

const FRONTDESK_DIR: &str = ".frontdesk";
const STORE_FILE: &str = "store.json";

/// File-backed store holding the serialized tracker state.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Initialize a new frontdesk project
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(FRONTDESK_DIR);

        if dir.exists() {
            return Err(FrontdeskError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let store = Self {
            path: dir.join(STORE_FILE),
        };
        store.save(&TrackerState::default())?;

        Ok(store)
    }

    /// Open an existing frontdesk project
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(FRONTDESK_DIR);

        if !dir.exists() {
            return Err(FrontdeskError::NotInitialized);
        }

        Ok(Self {
            path: dir.join(STORE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonStore {
    /// A missing or unreadable store file loads as the empty state; a
    /// broken store never takes the tracker down.
    fn load(&self) -> Result<TrackerState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(TrackerState::default());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(error = %e, "store file unreadable, starting empty");
                Ok(TrackerState::default())
            }
        }
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        debug!(
            queue = state.queue.len(),
            completed = state.completed.len(),
            "state persisted"
        );
        Ok(())
    }
}
