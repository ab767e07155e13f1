//! Background jobs for network I/O.
//!
//! Jobs never touch widget state: each one reports its outcome back to the UI
//! loop as an [`Action`] over an unbounded channel, and the loop applies it.

use super::actions::Action;
use crate::api::ApiError;
use crate::fetch::{Generation, RemoteResource};
use crate::store::Mutation;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<Fut>(&mut self, description: String, job: Fut) -> JobId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = job.await;
            // The shell may already be gone; its late results are dropped here
            let _ = action_sender.send(action);
        });

        self.jobs.insert(
            job_id,
            BackgroundJob {
                id: job_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        job_id
    }

    /// Start `resource` and run `fetch` for it.
    ///
    /// Nothing is spawned when the resource refuses to start (a fetch is
    /// already in flight, or it is unmounted).
    pub fn spawn_fetch<T, F, Fut>(
        &mut self,
        resource: &mut RemoteResource<T>,
        fetch: F,
        into_action: fn(Generation, Result<T, ApiError>) -> Action,
    ) -> Option<JobId>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let generation = resource.start()?;
        let description = format!("Fetch {} (generation {})", resource.endpoint(), generation);
        let request = fetch();

        Some(self.spawn(description, async move { into_action(generation, request.await) }))
    }

    /// Send the network half of an optimistic mutation
    pub fn spawn_mutation<Fut>(&mut self, mutation: Mutation, request: Fut) -> JobId
    where
        Fut: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let description = format!("{:?} task {}", mutation.kind, mutation.task_id);
        self.spawn(description, async move {
            let result = request.await;
            Action::MutationFinished { mutation, result }
        })
    }

    /// Run a one-off request whose result is mapped to an action
    pub fn spawn_request<Fut>(
        &mut self,
        description: String,
        request: Fut,
        into_action: fn(Result<(), ApiError>) -> Action,
    ) -> JobId
    where
        Fut: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        self.spawn(description, async move { into_action(request.await) })
    }

    /// Forget finished jobs, returning their descriptions
    pub fn cleanup_finished_jobs(&mut self) -> Vec<String> {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.jobs.remove(&id))
            .map(|job| job.description)
            .collect()
    }

    /// Cancel all running jobs
    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    /// Get the number of tracked jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_jobs();
    }
}
