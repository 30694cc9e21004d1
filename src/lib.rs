pub mod cli;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod reception;
pub mod report;
pub mod storage;

pub use error::{FrontdeskError, Result};
pub use storage::{JsonStore, RecordStore, TrackerState};
