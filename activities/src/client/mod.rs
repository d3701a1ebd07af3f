//! Client interface for the remote job-orchestration API.
//!
//! The orchestration step consumes this interface only; the wire protocol
//! behind it belongs to concrete implementations.

use std::future::Future;

use crate::error::ActivitiesResult;
use crate::types::{Activity, ActivityId, ActivityRun, ActivityRunId, ActivityRunStatus};

/// A single table entry inside a [`ConnectionDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
}

/// Descriptor for one side of a data-movement activity.
///
/// Built by the orchestration step and consumed opaquely by the client when
/// creating an activity. Target descriptors reference their upstream source
/// descriptor via [`ConnectionDescriptor::set_source_connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    kind: String,
    database: Option<String>,
    tables: Vec<TableEntry>,
    source_connection: Option<Box<ConnectionDescriptor>>,
}

impl ConnectionDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            database: None,
            tables: Vec::new(),
            source_connection: None,
        }
    }

    pub fn set_database(&mut self, name: impl Into<String>) {
        self.database = Some(name.into());
    }

    pub fn add_table(&mut self, name: impl Into<String>) {
        self.tables.push(TableEntry { name: name.into() });
    }

    pub fn set_source_connection(&mut self, source: ConnectionDescriptor) {
        self.source_connection = Some(Box::new(source));
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn tables(&self) -> &[TableEntry] {
        &self.tables
    }

    pub fn source_connection(&self) -> Option<&ConnectionDescriptor> {
        self.source_connection.as_deref()
    }
}

/// Request payload for creating a new activity on the remote backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateActivityRequest {
    pub name: String,
    pub description: String,
    pub source_connection: ConnectionDescriptor,
    pub target_connection: ConnectionDescriptor,
}

/// Client for the remote job-orchestration API.
///
/// All operations are single-shot: the orchestration step never retries a
/// failed call, it propagates the error and aborts.
pub trait ActivityClient {
    /// Returns the complete list of activities currently known to the remote
    /// system.
    fn list_activities(&self) -> impl Future<Output = ActivitiesResult<Vec<Activity>>> + Send;

    /// Creates a new activity and returns it with its remote-assigned id.
    fn create_activity(
        &self,
        request: CreateActivityRequest,
    ) -> impl Future<Output = ActivitiesResult<Activity>> + Send;

    /// Submits a new run for the given activity.
    fn submit_run(
        &self,
        activity_id: &ActivityId,
    ) -> impl Future<Output = ActivitiesResult<ActivityRun>> + Send;

    /// Queries the current state of a previously submitted run.
    fn query_run(
        &self,
        activity_id: &ActivityId,
        run_id: &ActivityRunId,
    ) -> impl Future<Output = ActivitiesResult<ActivityRun>> + Send;

    /// Returns `true` if the status denotes a run that has completed.
    fn is_finished(&self, status: &ActivityRunStatus) -> bool;

    /// Returns `true` if the status denotes a run that is actively executing.
    fn is_running(&self, status: &ActivityRunStatus) -> bool;

    /// Builds a fresh connection descriptor for the given connector kind.
    fn new_connection(&self, kind: &str) -> ConnectionDescriptor {
        ConnectionDescriptor::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_collects_database_and_tables() {
        let mut descriptor = ConnectionDescriptor::new("cloudant");
        descriptor.set_database("orders");
        descriptor.add_table("ORDERS");

        assert_eq!(descriptor.kind(), "cloudant");
        assert_eq!(descriptor.database(), Some("orders"));
        assert_eq!(descriptor.tables().len(), 1);
        assert_eq!(descriptor.tables()[0].name, "ORDERS");
        assert!(descriptor.source_connection().is_none());
    }

    #[test]
    fn target_descriptor_references_its_source() {
        let mut source = ConnectionDescriptor::new("cloudant");
        source.set_database("orders");

        let mut target = ConnectionDescriptor::new("dashdb");
        target.set_source_connection(source.clone());

        assert_eq!(target.source_connection(), Some(&source));
        assert!(target.database().is_none());
    }
}
