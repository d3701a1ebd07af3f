use std::time::Duration;

use tracing::{debug, info};

use crate::client::ActivityClient;
use crate::concurrency::ShutdownRx;
use crate::error::ActivitiesResult;
use crate::types::{ActivityId, ActivityRunId};

/// Outcome of polling one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The run reported a finished or running status.
    Settled,
    /// A shutdown signal arrived before the run settled.
    ShutDown,
}

/// Poll state for a single submitted run.
///
/// Holds everything needed to resume polling between attempts: the ids, the
/// retry count and the retry interval chosen from the table's record-count
/// hint. The loop suspends on a timer rather than busy-waiting, and the
/// shutdown signal can interrupt it at any suspension point.
#[derive(Debug)]
pub struct RunPoll {
    activity_id: ActivityId,
    run_id: ActivityRunId,
    retry_interval: Duration,
    attempts: u64,
}

impl RunPoll {
    pub fn new(activity_id: ActivityId, run_id: ActivityRunId, retry_interval: Duration) -> Self {
        Self {
            activity_id,
            run_id,
            retry_interval,
            attempts: 0,
        }
    }

    /// Number of retries issued so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Polls the run until its status is finished or running.
    ///
    /// A run that reports neither keeps being polled at the retry interval,
    /// with no upper bound on attempts; the shutdown signal is the only way
    /// out of a run that never settles. A failed status query aborts
    /// immediately with that error.
    ///
    /// Note that a running status counts as settled: the step waits for
    /// confirmed startup, not for completion.
    pub async fn wait_until_settled<C>(
        &mut self,
        client: &C,
        settle_grace: Duration,
        mut shutdown_rx: ShutdownRx,
    ) -> ActivitiesResult<PollOutcome>
    where
        C: ActivityClient,
    {
        loop {
            let run = client.query_run(&self.activity_id, &self.run_id).await?;

            if client.is_finished(&run.status) || client.is_running(&run.status) {
                info!(
                    "run {} of activity {} settled with status '{}' after {} retries",
                    self.run_id, self.activity_id, run.status, self.attempts
                );

                // Short pause to let the remote system's state propagate.
                tokio::time::sleep(settle_grace).await;

                return Ok(PollOutcome::Settled);
            }

            self.attempts += 1;

            debug!(
                "run {} of activity {} is not settled yet (status '{}'), retrying in {:?}",
                self.run_id, self.activity_id, run.status, self.retry_interval
            );

            tokio::select! {
                biased;

                _ = shutdown_rx.changed() => {
                    info!(
                        "shutdown signal received, abandoning the poll for run {}",
                        self.run_id
                    );

                    return Ok(PollOutcome::ShutDown);
                }

                _ = tokio::time::sleep(self.retry_interval) => {}
            }
        }
    }
}
