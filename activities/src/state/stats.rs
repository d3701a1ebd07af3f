use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::{ActivityId, ActivityRunId};

/// Per-table record in the shared run stats container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Approximate record count, used to pick the polling retry interval.
    pub num_records: u64,

    /// Id of the activity resolved for this table. Resolved at most once per
    /// step execution, by reuse or creation.
    pub activity_id: Option<ActivityId>,

    /// Id of the submitted run, set only after a successful submission.
    pub run_id: Option<ActivityRunId>,
}

/// Counters owned by the activities step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Activities whose id has been resolved, by reuse or creation.
    pub num_resolved: u64,

    /// Activities with a successfully submitted run. Feeds the progress
    /// percentage.
    pub num_running_activities: u64,
}

#[derive(Debug)]
struct Inner<C> {
    tables: HashMap<String, TableStats>,
    activity_client: Option<Arc<C>>,
}

/// Stats container shared across pipeline steps.
///
/// The activities step is the single writer while it executes. Downstream
/// steps read the recorded activity and run ids afterwards, and reuse the
/// client handle the step attaches via
/// [`PipelineRunStats::attach_activity_client`].
#[derive(Debug)]
pub struct PipelineRunStats<C> {
    inner: Arc<Mutex<Inner<C>>>,
}

impl<C> Clone for PipelineRunStats<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> PipelineRunStats<C> {
    pub fn new() -> Self {
        let inner = Inner {
            tables: HashMap::new(),
            activity_client: None,
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Seeds the record for a table if it is not present yet.
    pub async fn ensure_table(&self, name: &str, num_records: u64) {
        let mut inner = self.inner.lock().await;

        inner.tables.entry(name.to_owned()).or_insert(TableStats {
            num_records,
            activity_id: None,
            run_id: None,
        });
    }

    /// Returns a snapshot of the stats recorded for a table.
    pub async fn table_stats(&self, name: &str) -> Option<TableStats> {
        let inner = self.inner.lock().await;

        inner.tables.get(name).cloned()
    }

    /// Records the activity id resolved for a table.
    pub async fn record_activity(&self, name: &str, activity_id: ActivityId) {
        let mut inner = self.inner.lock().await;

        inner.tables.entry(name.to_owned()).or_default().activity_id = Some(activity_id);
    }

    /// Records the run id returned by a successful run submission.
    pub async fn record_run(&self, name: &str, run_id: ActivityRunId) {
        let mut inner = self.inner.lock().await;

        inner.tables.entry(name.to_owned()).or_default().run_id = Some(run_id);
    }

    /// Hands the activity client over for reuse by later pipeline steps.
    pub async fn attach_activity_client(&self, client: Arc<C>) {
        let mut inner = self.inner.lock().await;

        inner.activity_client = Some(client);
    }

    /// Returns the client handle attached by the activities step, if any.
    pub async fn activity_client(&self) -> Option<Arc<C>> {
        let inner = self.inner.lock().await;

        inner.activity_client.clone()
    }
}

impl<C> Default for PipelineRunStats<C> {
    fn default() -> Self {
        Self::new()
    }
}
