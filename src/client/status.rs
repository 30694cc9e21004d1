// src/client/status.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Three-step service workflow for a client visit. The wire codes match
/// what the reception pages always stored: `new`, `in-progress`,
/// `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ClientStatus {
    #[default]
    #[serde(rename = "new")]
    Waiting,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl ClientStatus {
    /// Human-readable label shown in tables, reports and CSV exports.
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Waiting => "Waiting",
            ClientStatus::InProgress => "In Progress",
            ClientStatus::Completed => "Completed",
        }
    }

    /// The status this one may legally advance to, if any.
    pub fn next(self) -> Option<ClientStatus> {
        match self {
            ClientStatus::Waiting => Some(ClientStatus::InProgress),
            ClientStatus::InProgress => Some(ClientStatus::Completed),
            ClientStatus::Completed => None,
        }
    }

    /// Transitions never skip a step and never reverse.
    pub fn can_advance_to(self, target: ClientStatus) -> bool {
        self.next() == Some(target)
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "new" | "waiting" => Ok(ClientStatus::Waiting),
            "in-progress" | "inprogress" => Ok(ClientStatus::InProgress),
            "completed" | "complete" | "done" => Ok(ClientStatus::Completed),
            _ => Err(format!("Invalid client status: {}", s)),
        }
    }
}

// Stored records may carry a status code this build does not know;
// anything unrecognized reads back as waiting.
impl<'de> Deserialize<'de> for ClientStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}
