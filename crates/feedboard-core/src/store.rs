//! Authoritative task collection and its three mutations.
//!
//! Lookups by id that miss are silent no-ops: mutators return `None` and log
//! at `debug`, never an error. Ids handed to the store normally come from its
//! own rendered list, so a miss means a stale id.

use crate::clock::{Clock, SystemClock};
use crate::model::{NewTask, Status, Task};
use tracing::{debug, warn};

/// Owns the feedback items of one session, in insertion order.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    clock: Box<dyn Clock>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Empty store on the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Store pre-populated with `tasks`, on the wall clock.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.extend(tasks);
        store
    }

    /// Append initial tasks after the existing ones.
    ///
    /// Fresh ids handed out afterwards start above the largest numeric id seen.
    pub fn extend(&mut self, tasks: impl IntoIterator<Item = Task>) {
        for task in tasks {
            if let Ok(numeric) = task.id.parse::<u64>() {
                self.next_id = self.next_id.max(numeric.saturating_add(1));
            }
            self.tasks.push(task);
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task with zeroed counters and `created_at = now`.
    pub fn create_task(&mut self, input: NewTask) -> &Task {
        let id = self.fresh_id();
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            status: input.status,
            votes: 0,
            comments: 0,
            created_at: self.clock.now(),
            has_user_voted: false,
        };
        debug!(id = %task.id, category = %task.category, status = %task.status, "task created");
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &self.tasks[last]
    }

    /// Cast or retract this session's vote on `task_id`.
    ///
    /// `votes` and `has_user_voted` always move together. Returns `None` when
    /// no task has this id.
    pub fn toggle_vote(&mut self, task_id: &str) -> Option<&Task> {
        let Some(task) = self.find_mut(task_id) else {
            debug!(id = task_id, "vote toggle ignored: unknown task");
            return None;
        };

        if task.has_user_voted {
            if task.votes == 0 {
                warn!(id = %task.id, "task marked as voted with zero votes; clamping at zero");
            }
            task.votes = task.votes.saturating_sub(1);
            task.has_user_voted = false;
        } else {
            task.votes = task.votes.saturating_add(1);
            task.has_user_voted = true;
        }
        debug!(id = %task.id, votes = task.votes, voted = task.has_user_voted, "vote toggled");
        Some(&*task)
    }

    /// Move `task_id` to `new_status`. Any status may follow any other,
    /// including itself. Returns `None` when no task has this id.
    pub fn change_status(&mut self, task_id: &str, new_status: Status) -> Option<&Task> {
        let Some(task) = self.find_mut(task_id) else {
            debug!(id = task_id, "status change ignored: unknown task");
            return None;
        };
        let previous = task.status;
        task.status = new_status;
        debug!(id = %task.id, from = %previous, to = %new_status, "status changed");
        Some(&*task)
    }

    fn find_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    fn fresh_id(&mut self) -> String {
        while let Some(after) = self.next_id.checked_add(1) {
            let candidate = self.next_id.to_string();
            self.next_id = after;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }

        // Counter exhausted: hand out the lowest free number instead.
        let mut n: u64 = 1;
        loop {
            let candidate = n.to_string();
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}
