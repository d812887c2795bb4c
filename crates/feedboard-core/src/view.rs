//! Derived board view: filter by category, order, then split into status
//! columns.
//!
//! Everything here is a pure function of its inputs. The input slice is only
//! borrowed; every call allocates a fresh result, so repeated calls with the
//! same inputs produce identical output, tie order included.

use crate::model::{CategoryFilter, SortBy, Status, Task};
use serde::Serialize;

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: Status,
    pub tasks: Vec<Task>,
}

impl Column {
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The three columns in board order (Open, In Progress, Complete) plus the
/// preferences they were derived under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub selected_category: CategoryFilter,
    pub sort_by: SortBy,
    pub columns: [Column; 3],
}

impl BoardView {
    #[must_use]
    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.column_index()]
    }

    /// Number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }

    /// Every visible task, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks.iter())
    }

    #[must_use]
    pub fn contains(&self, task_id: &str) -> bool {
        self.iter().any(|task| task.id == task_id)
    }
}

/// Filter and order `tasks` without partitioning.
///
/// `slice::sort_by` is stable, so tasks with equal keys keep their input order.
#[must_use]
pub fn order_tasks(tasks: &[Task], selected_category: CategoryFilter, sort_by: SortBy) -> Vec<Task> {
    let mut ordered: Vec<Task> = tasks
        .iter()
        .filter(|task| selected_category.matches(task.category))
        .cloned()
        .collect();

    match sort_by {
        SortBy::MostUpvoted => ordered.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortBy::Newest => ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    ordered
}

/// Filter, order, and partition `tasks` into status columns.
#[must_use]
pub fn derive_view(tasks: &[Task], selected_category: CategoryFilter, sort_by: SortBy) -> BoardView {
    let mut columns = Status::ALL.map(|status| Column {
        status,
        tasks: Vec::new(),
    });

    for task in order_tasks(tasks, selected_category, sort_by) {
        columns[task.status.column_index()].tasks.push(task);
    }

    BoardView {
        selected_category,
        sort_by,
        columns,
    }
}
