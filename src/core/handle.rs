//! The handle returned when a countup is started.
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::signals::Halted;

/// A running job: the task updating one target and the channel to halt it.
#[derive(Debug)]
pub struct Job {
    tx_halt: oneshot::Sender<Halted>,
    task: JoinHandle<()>,
}

impl Job {
    #[must_use]
    pub fn new(tx_halt: oneshot::Sender<Halted>, task: JoinHandle<()>) -> Self {
        Self { tx_halt, task }
    }
}

/// The jobs of a started countup, one per matched target.
///
/// Dropping the handle detaches the jobs: they keep updating their targets
/// until the process receives the global shutdown signal.
#[derive(Debug, Default)]
pub struct Handle {
    jobs: Vec<Job>,
}

impl Handle {
    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// The number of targets being updated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Halts every job and waits for them to finish.
    pub async fn stop(self) {
        let tasks: Vec<JoinHandle<()>> = self
            .jobs
            .into_iter()
            .map(|job| {
                // The task may have already finished on the global shutdown signal.
                drop(job.tx_halt.send(Halted::Normal));
                job.task
            })
            .collect();

        join(tasks).await;
    }

    /// Waits for every job to finish without halting them.
    pub async fn join(self) {
        join(self.jobs.into_iter().map(|job| job.task).collect()).await;
    }
}

async fn join(tasks: Vec<JoinHandle<()>>) {
    for result in futures::future::join_all(tasks).await {
        if let Err(err) = result {
            debug!("Countup job ended abnormally: {err}");
        }
    }
}
