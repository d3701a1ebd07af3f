use std::fmt;

use serde::{Deserialize, Serialize};

/// A source table discovered by an earlier pipeline step.
///
/// Read-only to the activities step. `num_records` is the record-count hint:
/// an approximate row count used only to pick the polling retry interval,
/// with zero meaning the count is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub name: String,
    pub num_records: u64,
}

/// Identifier assigned to an activity by the remote orchestration backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub String);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single execution of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRunId(pub String);

impl fmt::Display for ActivityRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, persisted data-movement task on the remote orchestration backend.
///
/// Activity names are treated as unique per source table, matched
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
}

/// Status string reported by the remote system for an activity run.
///
/// The set of values is owned by the remote system; this crate only ever
/// interprets it through the client's finished/running predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRunStatus(String);

impl ActivityRunStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One execution instance of an activity, identified separately from the
/// activity and carrying its own status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRun {
    pub id: ActivityRunId,
    pub status: ActivityRunStatus,
}
