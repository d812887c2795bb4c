//! One board session: the task store plus the filter context, and the
//! actions a presentation layer can send to them.
//!
//! The view is re-derived on demand from the latest store and preferences;
//! nothing is cached between calls.

use crate::clock::Clock;
use crate::error::BoardError;
use crate::model::{CategoryFilter, SortBy, Status, Task};
use crate::prefs::{FilterContext, FilterPrefs};
use crate::seed::demo_tasks;
use crate::store::TaskStore;
use crate::submit::{FeedbackInput, ValidationError, submit_feedback};
use crate::view::{BoardView, derive_view};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A user action, in the tagged form scripts use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase", deny_unknown_fields)]
pub enum BoardAction {
    Submit(FeedbackInput),
    Vote { id: String },
    Status { id: String, status: Status },
    Category { value: CategoryFilter },
    Sort { value: SortBy },
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Created { task: Task },
    Voted { id: String, votes: u32 },
    Unvoted { id: String, votes: u32 },
    StatusChanged { id: String, status: Status },
    /// The action named a task id the store does not hold.
    Ignored { id: String },
    PrefsChanged { prefs: FilterPrefs },
}

/// Session holder for one board.
#[derive(Debug)]
pub struct Board {
    store: TaskStore,
    context: FilterContext,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board around an existing store, with default preferences provided.
    #[must_use]
    pub const fn new(store: TaskStore) -> Self {
        Self {
            store,
            context: FilterContext::provided(FilterPrefs {
                selected_category: CategoryFilter::All,
                sort_by: SortBy::MostUpvoted,
            }),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(TaskStore::new())
    }

    /// Board pre-loaded with the demo tasks.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(TaskStore::with_tasks(demo_tasks()))
    }

    /// Board on a custom clock, optionally pre-loaded with the demo tasks.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>, seed: bool) -> Self {
        let mut store = TaskStore::with_clock(clock);
        if seed {
            store.extend(demo_tasks());
        }
        Self::new(store)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if the context was never provided.
    pub fn prefs(&self) -> Result<&FilterPrefs, BoardError> {
        self.context.prefs()
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the title or description is blank;
    /// the store is left unchanged.
    pub fn submit(&mut self, input: FeedbackInput) -> Result<&Task, ValidationError> {
        let task = submit_feedback(&mut self.store, input)?;
        info!(id = %task.id, title = %task.title, "feedback submitted");
        Ok(task)
    }

    pub fn toggle_vote(&mut self, task_id: &str) -> Option<&Task> {
        self.store.toggle_vote(task_id)
    }

    pub fn change_status(&mut self, task_id: &str, status: Status) -> Option<&Task> {
        self.store.change_status(task_id, status)
    }

    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if the context was never provided.
    pub fn set_selected_category(&mut self, value: CategoryFilter) -> Result<(), BoardError> {
        self.context.prefs_mut()?.set_selected_category(value);
        debug!(category = %value, "category filter changed");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if the context was never provided.
    pub fn set_sort_by(&mut self, value: SortBy) -> Result<(), BoardError> {
        self.context.prefs_mut()?.set_sort_by(value);
        debug!(sort = %value, "sort order changed");
        Ok(())
    }

    /// Derive the current view from the latest tasks and preferences.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if the context was never provided.
    pub fn view(&self) -> Result<BoardView, BoardError> {
        let prefs = self.context.prefs()?;
        Ok(derive_view(
            self.store.tasks(),
            prefs.selected_category,
            prefs.sort_by,
        ))
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a rejected submission and
    /// [`BoardError::UninitializedContext`] for preference changes without a
    /// context. Unknown task ids are not errors; they yield
    /// [`ActionOutcome::Ignored`].
    pub fn apply(&mut self, action: BoardAction) -> Result<ActionOutcome, BoardError> {
        let outcome = match action {
            BoardAction::Submit(input) => ActionOutcome::Created {
                task: self.submit(input)?.clone(),
            },
            BoardAction::Vote { id } => match self.toggle_vote(&id) {
                Some(task) if task.has_user_voted => ActionOutcome::Voted {
                    id,
                    votes: task.votes,
                },
                Some(task) => ActionOutcome::Unvoted {
                    id,
                    votes: task.votes,
                },
                None => ActionOutcome::Ignored { id },
            },
            BoardAction::Status { id, status } => match self.change_status(&id, status) {
                Some(_) => ActionOutcome::StatusChanged { id, status },
                None => ActionOutcome::Ignored { id },
            },
            BoardAction::Category { value } => {
                self.set_selected_category(value)?;
                ActionOutcome::PrefsChanged {
                    prefs: *self.prefs()?,
                }
            }
            BoardAction::Sort { value } => {
                self.set_sort_by(value)?;
                ActionOutcome::PrefsChanged {
                    prefs: *self.prefs()?,
                }
            }
        };
        Ok(outcome)
    }
}
