#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use activities::client::{ActivityClient, CreateActivityRequest};
use activities::error::{ActivitiesError, ActivitiesResult, ErrorKind};
use activities::progress::ProgressReporter;
use activities::types::{Activity, ActivityId, ActivityRun, ActivityRunId, ActivityRunStatus};
use tokio::sync::Mutex;

pub const FINISHED: &str = "FINISHED";
pub const RUNNING: &str = "RUNNING";
pub const QUEUED: &str = "QUEUED";

#[derive(Debug, Default)]
struct Inner {
    activities: Vec<Activity>,
    /// Scripted status sequences, keyed by activity name. The last status
    /// repeats once the sequence is exhausted.
    statuses: HashMap<String, VecDeque<String>>,
    query_failures: HashMap<String, ActivitiesError>,
    list_failure: Option<ActivitiesError>,
    create_failure: Option<ActivitiesError>,
    submit_failure: Option<ActivitiesError>,
    created: Vec<CreateActivityRequest>,
    submitted: Vec<ActivityId>,
    queries: Vec<(ActivityId, ActivityRunId)>,
    next_activity: u64,
    next_run: u64,
}

/// Scripted in-memory stand-in for the remote job-orchestration API.
#[derive(Debug, Clone, Default)]
pub struct ScriptedActivityClient {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedActivityClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an activity that already exists on the remote system.
    pub async fn add_existing(&self, name: &str) -> ActivityId {
        let mut inner = self.inner.lock().await;

        inner.next_activity += 1;
        let id = ActivityId(format!("activity-{}", inner.next_activity));
        inner.activities.push(Activity {
            id: id.clone(),
            name: name.to_owned(),
        });

        id
    }

    /// Scripts the statuses returned by successive run queries for the
    /// activity with the given name.
    pub async fn script_statuses(&self, name: &str, statuses: &[&str]) {
        let mut inner = self.inner.lock().await;

        inner.statuses.insert(
            name.to_owned(),
            statuses.iter().map(|status| (*status).to_owned()).collect(),
        );
    }

    /// Makes the next run query for the named activity fail.
    pub async fn fail_next_query(&self, name: &str, error: ActivitiesError) {
        let mut inner = self.inner.lock().await;
        inner.query_failures.insert(name.to_owned(), error);
    }

    pub async fn fail_listing(&self, error: ActivitiesError) {
        let mut inner = self.inner.lock().await;
        inner.list_failure = Some(error);
    }

    pub async fn fail_creation(&self, error: ActivitiesError) {
        let mut inner = self.inner.lock().await;
        inner.create_failure = Some(error);
    }

    pub async fn fail_submission(&self, error: ActivitiesError) {
        let mut inner = self.inner.lock().await;
        inner.submit_failure = Some(error);
    }

    pub async fn created_requests(&self) -> Vec<CreateActivityRequest> {
        let inner = self.inner.lock().await;
        inner.created.clone()
    }

    pub async fn submitted_activities(&self) -> Vec<ActivityId> {
        let inner = self.inner.lock().await;
        inner.submitted.clone()
    }

    /// Number of run-status queries issued for the named activity.
    pub async fn query_count(&self, name: &str) -> usize {
        let inner = self.inner.lock().await;

        let Some(id) = inner
            .activities
            .iter()
            .find(|activity| activity.name == name)
            .map(|activity| activity.id.clone())
        else {
            return 0;
        };

        inner
            .queries
            .iter()
            .filter(|(activity_id, _)| *activity_id == id)
            .count()
    }
}

impl ActivityClient for ScriptedActivityClient {
    async fn list_activities(&self) -> ActivitiesResult<Vec<Activity>> {
        let mut inner = self.inner.lock().await;

        if let Some(err) = inner.list_failure.take() {
            return Err(err);
        }

        Ok(inner.activities.clone())
    }

    async fn create_activity(&self, request: CreateActivityRequest) -> ActivitiesResult<Activity> {
        let mut inner = self.inner.lock().await;

        if let Some(err) = inner.create_failure.take() {
            return Err(err);
        }

        inner.next_activity += 1;
        let activity = Activity {
            id: ActivityId(format!("activity-{}", inner.next_activity)),
            name: request.name.clone(),
        };

        inner.created.push(request);
        inner.activities.push(activity.clone());

        Ok(activity)
    }

    async fn submit_run(&self, activity_id: &ActivityId) -> ActivitiesResult<ActivityRun> {
        let mut inner = self.inner.lock().await;

        if let Some(err) = inner.submit_failure.take() {
            return Err(err);
        }

        inner.next_run += 1;
        let run_id = ActivityRunId(format!("run-{}", inner.next_run));
        inner.submitted.push(activity_id.clone());

        Ok(ActivityRun {
            id: run_id,
            status: ActivityRunStatus::new(QUEUED),
        })
    }

    async fn query_run(
        &self,
        activity_id: &ActivityId,
        run_id: &ActivityRunId,
    ) -> ActivitiesResult<ActivityRun> {
        let mut inner = self.inner.lock().await;

        inner.queries.push((activity_id.clone(), run_id.clone()));

        let Some(name) = inner
            .activities
            .iter()
            .find(|activity| &activity.id == activity_id)
            .map(|activity| activity.name.clone())
        else {
            return Err(ActivitiesError::from((
                ErrorKind::RunQueryFailed,
                "Unknown activity",
            )));
        };

        if let Some(err) = inner.query_failures.remove(&name) {
            return Err(err);
        }

        let status = match inner.statuses.get_mut(&name) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| RUNNING.to_owned()),
            None => RUNNING.to_owned(),
        };

        Ok(ActivityRun {
            id: run_id.clone(),
            status: ActivityRunStatus::new(status),
        })
    }

    fn is_finished(&self, status: &ActivityRunStatus) -> bool {
        status.as_str() == FINISHED
    }

    fn is_running(&self, status: &ActivityRunStatus) -> bool {
        status.as_str() == RUNNING
    }
}

#[derive(Debug, Default)]
struct ProgressLog {
    percents: Vec<f64>,
    messages: Vec<String>,
}

/// Progress reporter that records every emission for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    inner: Arc<std::sync::Mutex<ProgressLog>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percents(&self) -> Vec<f64> {
        self.inner.lock().unwrap().percents.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.inner.lock().unwrap().messages.clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn set_percent_complete(&self, percent: f64) {
        self.inner.lock().unwrap().percents.push(percent);
    }

    fn set_message(&self, message: String) {
        self.inner.lock().unwrap().messages.push(message);
    }
}
