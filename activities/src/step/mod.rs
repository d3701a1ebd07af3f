//! Activity lifecycle orchestration.
//!
//! For each source table the step resolves an activity on the remote backend
//! (reusing an existing one when the name matches case-insensitively),
//! submits a run, and polls the run until it settles, reporting aggregate
//! progress along the way. Tables are processed strictly in sequence: the
//! next table starts only after the previous run has settled, which also
//! avoids name-collision races against the remote system. The first remote
//! failure aborts the remaining tables.

mod poll;

pub use poll::{PollOutcome, RunPoll};

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::client::{ActivityClient, CreateActivityRequest};
use crate::concurrency::{ShutdownTx, create_shutdown_channel};
use crate::config::StepConfig;
use crate::error::ActivitiesResult;
use crate::progress::ProgressReporter;
use crate::state::stats::{PipelineRunStats, StepStats};
use crate::types::{Activity, ActivityId, SourceTable};

/// Orchestration step that ensures one started activity run per source table.
///
/// [`ActivitiesStep::run`] is invoked once per pipeline execution. On success
/// every table has a resolved activity id and a submitted run recorded in the
/// shared stats; on failure the first error is returned and the remaining
/// tables are left untouched. Tables settled before the failure keep their
/// recorded ids.
pub struct ActivitiesStep<C, P> {
    config: StepConfig,
    client: Arc<C>,
    run_stats: PipelineRunStats<C>,
    progress: P,
    tables: Vec<SourceTable>,
    stats: StepStats,
    shutdown_tx: ShutdownTx,
}

impl<C, P> ActivitiesStep<C, P>
where
    C: ActivityClient + Send + Sync + 'static,
    P: ProgressReporter,
{
    pub fn new(
        config: StepConfig,
        client: Arc<C>,
        run_stats: PipelineRunStats<C>,
        progress: P,
        tables: Vec<SourceTable>,
    ) -> Self {
        let (shutdown_tx, _) = create_shutdown_channel();

        Self {
            config,
            client,
            run_stats,
            progress,
            tables,
            stats: StepStats::default(),
            shutdown_tx,
        }
    }

    /// Returns a handle for interrupting the step while it is polling.
    pub fn shutdown_tx(&self) -> ShutdownTx {
        self.shutdown_tx.clone()
    }

    /// Returns the counters accumulated by the step so far.
    pub fn stats(&self) -> StepStats {
        self.stats
    }

    /// Processes all source tables and drives each submitted run to
    /// settlement.
    pub async fn run(&mut self) -> ActivitiesResult<()> {
        info!(
            "creating and running activities for {} source tables",
            self.tables.len()
        );

        // The client instance is handed over to the shared stats so the
        // downstream monitoring step can reuse it.
        self.run_stats
            .attach_activity_client(Arc::clone(&self.client))
            .await;

        self.stats = StepStats::default();
        self.emit_progress();

        // Single batched lookup instead of one listing per table.
        let existing = match self.client.list_activities().await {
            Ok(existing) => existing,
            Err(err) => {
                error!("unable to list activities on the remote system: {err}");
                return Err(err);
            }
        };

        info!(
            "the remote system currently has {} activities",
            existing.len()
        );

        let tables = self.tables.clone();
        for table in &tables {
            self.run_stats
                .ensure_table(&table.name, table.num_records)
                .await;

            let activity_id = self.resolve_activity(table, &existing).await?;

            if !self.submit_and_settle(table, &activity_id).await? {
                info!("shutdown requested, stopping before the remaining tables");
                break;
            }
        }

        self.emit_progress();

        Ok(())
    }

    /// Resolves the activity id for a table, reusing a remote activity whose
    /// name matches case-insensitively or creating a new one.
    async fn resolve_activity(
        &mut self,
        table: &SourceTable,
        existing: &[Activity],
    ) -> ActivitiesResult<ActivityId> {
        let matched = existing
            .iter()
            .find(|activity| activity.name.to_lowercase() == table.name.to_lowercase());

        let (activity_id, created) = match matched {
            Some(activity) => {
                debug!(
                    "activity {} already exists for table '{}'",
                    activity.id, table.name
                );

                (activity.id.clone(), false)
            }
            None => {
                let request = self.build_create_request(table);
                let activity = match self.client.create_activity(request).await {
                    Ok(activity) => activity,
                    Err(err) => {
                        error!(
                            "unable to create an activity for table '{}': {err}",
                            table.name
                        );
                        return Err(err);
                    }
                };

                info!(
                    "created a new activity {} for table '{}'",
                    activity.id, table.name
                );

                (activity.id, true)
            }
        };

        self.stats.num_resolved += 1;
        self.run_stats
            .record_activity(&table.name, activity_id.clone())
            .await;

        if created {
            self.emit_progress();
        }

        Ok(activity_id)
    }

    /// Builds the creation request for a table with no matching remote
    /// activity: a source descriptor naming the database (lowercased) and a
    /// single table entry (uppercased), and a target descriptor referencing
    /// the source connection.
    fn build_create_request(&self, table: &SourceTable) -> CreateActivityRequest {
        let mut source_connection = self.client.new_connection(&self.config.source_kind);
        source_connection.set_database(table.name.to_lowercase());
        source_connection.add_table(table.name.to_uppercase());

        let mut target_connection = self.client.new_connection(&self.config.target_kind);
        target_connection.set_source_connection(source_connection.clone());

        CreateActivityRequest {
            name: table.name.clone(),
            description: format!(
                "Generated by the pipeline tool - {} to {}",
                self.config.source_kind, self.config.target_kind
            ),
            source_connection,
            target_connection,
        }
    }

    /// Submits a run for the resolved activity and polls it to settlement.
    ///
    /// Returns `Ok(false)` when a shutdown was requested while polling.
    async fn submit_and_settle(
        &mut self,
        table: &SourceTable,
        activity_id: &ActivityId,
    ) -> ActivitiesResult<bool> {
        let run = match self.client.submit_run(activity_id).await {
            Ok(run) => run,
            Err(err) => {
                error!("unable to submit a run for activity {activity_id}: {err}");
                return Err(err);
            }
        };

        info!("submitted run {} for activity {}", run.id, activity_id);

        self.run_stats.record_run(&table.name, run.id.clone()).await;
        self.stats.num_running_activities += 1;
        self.emit_progress();

        let mut poll = RunPoll::new(
            activity_id.clone(),
            run.id,
            self.config.polling.interval_for(table.num_records),
        );

        let outcome = poll
            .wait_until_settled(
                self.client.as_ref(),
                self.config.polling.settle_grace(),
                self.shutdown_tx.subscribe(),
            )
            .await?;

        Ok(matches!(outcome, PollOutcome::Settled))
    }

    /// Recomputes and reports the aggregate progress of the step.
    fn emit_progress(&self) {
        let percent = completion_percent(self.stats.num_running_activities, self.tables.len());

        self.progress.set_percent_complete(percent);
        self.progress.set_message(format!(
            "{} activities resolved, {} successfully started ({percent:.1}%)",
            self.stats.num_resolved, self.stats.num_running_activities
        ));
    }
}

/// Percentage of tables with a successfully started run, rounded to one
/// decimal place. An empty table set reports as fully complete.
fn completion_percent(num_running: u64, total_tables: usize) -> f64 {
    if total_tables == 0 {
        return 100.0;
    }

    let percent = (num_running as f64 / total_tables as f64) * 100.0;
    (percent * 10.0).round() / 10.0
}
