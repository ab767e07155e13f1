//! Task list state and its optimistic mutations.
//!
//! Mutations are applied locally first and confirmed by the backend later.
//! Every task with changes in flight keeps a chain: the state it had before
//! the first of those changes (its baseline) plus the ids still waiting for
//! an answer. Nothing is rolled back while the chain still has pending
//! changes. Once the last one settles, the task is restored to the state
//! left by the newest confirmed change, or to the baseline when none was
//! confirmed. A reload in between makes the server list authoritative and
//! cancels any rollback.

use crate::api::{ApiError, Task, TaskId};
use crate::constants::TASKS_PATH;
use crate::fetch::{FetchState, Generation, RemoteResource};
use std::collections::HashMap;

pub type MutationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Complete,
    Delete,
}

/// Handle for one optimistic change awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub id: MutationId,
    pub kind: MutationKind,
    pub task_id: TaskId,
}

/// What happened to the local state once the backend answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Confirmed,
    /// The task was restored; `reverted` is the newest change that was undone.
    RolledBack { reverted: MutationKind },
    /// Failed while other changes to the task are still in flight; the
    /// rollback decision waits for them.
    Deferred,
    /// Failed, but the local state already matches what the backend holds
    /// (a newer change was confirmed, or the list was reloaded).
    Superseded,
    /// Not a pending mutation of this store.
    Unknown,
}

/// A task's place in the list, or its absence.
#[derive(Debug, Clone, PartialEq)]
enum Snapshot {
    Present { index: usize, task: Task },
    Absent,
}

impl Snapshot {
    fn of(tasks: &[Task], id: &TaskId) -> Self {
        match tasks.iter().position(|task| &task.id == id) {
            Some(index) => Self::Present {
                index,
                task: tasks[index].clone(),
            },
            None => Self::Absent,
        }
    }

    /// Same content, regardless of position.
    fn matches(&self, other: &Snapshot) -> bool {
        match (self, other) {
            (Self::Present { task: a, .. }, Self::Present { task: b, .. }) => a == b,
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }

    fn restore(self, tasks: &mut Vec<Task>, id: &TaskId) {
        let current = tasks.iter().position(|task| &task.id == id);
        match (self, current) {
            (Self::Present { task, .. }, Some(position)) => tasks[position] = task,
            (Self::Present { index, task }, None) => {
                let index = index.min(tasks.len());
                tasks.insert(index, task);
            }
            (Self::Absent, Some(position)) => {
                tasks.remove(position);
            }
            (Self::Absent, None) => {}
        }
    }
}

#[derive(Debug)]
struct PendingMutation {
    mutation: Mutation,
    /// Local state of the task right after this change was applied.
    after: Snapshot,
}

/// Changes to one task that have not all been answered yet.
#[derive(Debug)]
struct MutationChain {
    baseline: Snapshot,
    list_generation: Generation,
    /// Ids in issue order.
    pending: Vec<MutationId>,
    /// Newest confirmed change and the state it left.
    confirmed: Option<(MutationId, Snapshot)>,
    /// Newest change issued on this task.
    latest: (MutationId, MutationKind),
}

/// Source of truth for the task list.
#[derive(Debug)]
pub struct TaskStore {
    resource: RemoteResource<Vec<Task>>,
    pending: HashMap<MutationId, PendingMutation>,
    chains: HashMap<TaskId, MutationChain>,
    next_mutation_id: MutationId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            resource: RemoteResource::new(TASKS_PATH),
            pending: HashMap::new(),
            chains: HashMap::new(),
            next_mutation_id: 1,
        }
    }

    pub fn state(&self) -> &FetchState<Vec<Task>> {
        self.resource.state()
    }

    pub fn resource(&self) -> &RemoteResource<Vec<Task>> {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut RemoteResource<Vec<Task>> {
        &mut self.resource
    }

    /// Current list, empty unless `Ready`.
    pub fn tasks(&self) -> &[Task] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().iter().find(|task| &task.id == id)
    }

    pub fn load(&mut self) -> Option<Generation> {
        self.resource.start()
    }

    pub fn refresh(&mut self) -> Option<Generation> {
        self.resource.refresh()
    }

    /// Apply a list fetch. A fresh list replaces the old one entirely.
    pub fn resolve_load(&mut self, generation: Generation, result: Result<Vec<Task>, ApiError>) -> bool {
        self.resource.resolve(generation, result)
    }

    /// Mark `id` completed right away.
    ///
    /// Returns `None` (and nothing must be sent) when the list is not loaded
    /// or has no such task. Completing an already completed task still yields
    /// a mutation so the request is re-sent.
    pub fn complete(&mut self, id: &TaskId) -> Option<Mutation> {
        let tasks = self.resource.data_mut()?;
        let before = Snapshot::of(tasks, id);
        let task = tasks.iter_mut().find(|task| &task.id == id)?;
        task.completed = true;
        let after = Snapshot::of(tasks, id);
        Some(self.record(MutationKind::Complete, id.clone(), before, after))
    }

    /// Remove `id` from the list right away, keeping the order of the rest.
    pub fn delete(&mut self, id: &TaskId) -> Option<Mutation> {
        let tasks = self.resource.data_mut()?;
        let before = Snapshot::of(tasks, id);
        let index = tasks.iter().position(|task| &task.id == id)?;
        tasks.remove(index);
        Some(self.record(MutationKind::Delete, id.clone(), before, Snapshot::Absent))
    }

    fn record(&mut self, kind: MutationKind, task_id: TaskId, before: Snapshot, after: Snapshot) -> Mutation {
        let id = self.next_mutation_id;
        self.next_mutation_id += 1;
        let list_generation = self.resource.generation();

        let chain = self.chains.entry(task_id.clone()).or_insert_with(|| MutationChain {
            baseline: before.clone(),
            list_generation,
            pending: Vec::new(),
            confirmed: None,
            latest: (id, kind),
        });
        if chain.list_generation != list_generation {
            // The list was reloaded under older changes; they no longer own the task
            chain.baseline = before;
            chain.list_generation = list_generation;
            chain.confirmed = None;
        }
        chain.pending.push(id);
        chain.latest = (id, kind);

        let mutation = Mutation { id, kind, task_id };
        self.pending.insert(
            id,
            PendingMutation {
                mutation: mutation.clone(),
                after,
            },
        );
        mutation
    }

    /// Settle a mutation with the backend's answer.
    pub fn resolve_mutation(&mut self, id: MutationId, result: Result<(), ApiError>) -> MutationOutcome {
        let Some(pending) = self.pending.remove(&id) else {
            return MutationOutcome::Unknown;
        };
        let task_id = pending.mutation.task_id.clone();
        let Some(chain) = self.chains.get_mut(&task_id) else {
            return MutationOutcome::Unknown;
        };
        chain.pending.retain(|pending_id| *pending_id != id);

        let failed = match result {
            Ok(()) => {
                if chain.confirmed.as_ref().map_or(true, |(newest, _)| *newest < id) {
                    chain.confirmed = Some((id, pending.after));
                }
                false
            }
            Err(err) => {
                log::warn!("{:?} of task {} failed: {}", pending.mutation.kind, task_id, err);
                true
            }
        };

        if !chain.pending.is_empty() {
            return if failed {
                MutationOutcome::Deferred
            } else {
                MutationOutcome::Confirmed
            };
        }

        let Some(chain) = self.chains.remove(&task_id) else {
            return MutationOutcome::Unknown;
        };
        let settled = if failed {
            MutationOutcome::Superseded
        } else {
            MutationOutcome::Confirmed
        };

        if chain.list_generation != self.resource.generation() {
            return settled;
        }
        let Some(tasks) = self.resource.data_mut() else {
            return settled;
        };

        let target = match chain.confirmed {
            Some((_, state)) => state,
            None => chain.baseline,
        };
        if target.matches(&Snapshot::of(tasks, &task_id)) {
            return settled;
        }

        target.restore(tasks, &task_id);
        MutationOutcome::RolledBack {
            reverted: chain.latest.1,
        }
    }

    /// Whether any change to `id` is still waiting for the backend.
    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.chains.get(id).is_some_and(|chain| !chain.pending.is_empty())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn unmount(&mut self) {
        self.resource.unmount();
    }
}
