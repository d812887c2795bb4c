//! Demo tasks a fresh board starts with.

use crate::model::{Category, Status, Task};
use chrono::{DateTime, TimeZone, Utc};

fn day(month_day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, month_day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    status: Status,
    votes: u32,
    comments: u32,
    created_day: u32,
    has_user_voted: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        status,
        votes,
        comments,
        created_at: day(created_day),
        has_user_voted,
    }
}

/// Six demo tasks with ids `"1"` through `"6"`. Every task marked as voted
/// carries at least one vote.
#[must_use]
pub fn demo_tasks() -> Vec<Task> {
    vec![
        demo(
            "1",
            "Improve navigation design",
            "The current navigation is confusing for new users. We need to redesign it to be more intuitive and user-friendly.",
            Category::Ui,
            Status::Open,
            12,
            5,
            15,
            false,
        ),
        demo(
            "2",
            "Add dark mode support",
            "Users have been requesting a dark mode option. This would improve user experience during night time usage.",
            Category::Feature,
            Status::InProgress,
            24,
            8,
            10,
            true,
        ),
        demo(
            "3",
            "Fix login button bug",
            "Login button sometimes becomes unresponsive after clicking. This affects user experience significantly.",
            Category::Bug,
            Status::Open,
            18,
            3,
            20,
            false,
        ),
        demo(
            "4",
            "Optimize page load speed",
            "Homepage takes too long to load. We should optimize images and reduce JavaScript bundle size.",
            Category::Performance,
            Status::Complete,
            15,
            12,
            5,
            true,
        ),
        demo(
            "5",
            "Improve user onboarding flow",
            "New users are struggling with the current onboarding process. We need to make it more intuitive and engaging.",
            Category::Ux,
            Status::InProgress,
            9,
            6,
            18,
            false,
        ),
        demo(
            "6",
            "Add search functionality",
            "Users need a way to search through content quickly and efficiently.",
            Category::Feature,
            Status::Open,
            21,
            4,
            22,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::demo_tasks;
    use crate::model::{Category, Status};
    use chrono::{Datelike, TimeZone, Utc};

    #[test]
    fn demo_tasks_are_consistent() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 6);
        for task in &tasks {
            assert!(!task.has_user_voted || task.votes > 0, "task {}", task.id);
            assert!(!task.title.trim().is_empty());
            assert!(!task.description.trim().is_empty());
            assert_eq!(task.created_at.year(), 2024);
        }
    }

    #[test]
    fn bug_task_matches_known_values() {
        let tasks = demo_tasks();
        let bug = tasks.iter().find(|t| t.id == "3").expect("task 3");
        assert_eq!(bug.category, Category::Bug);
        assert_eq!(bug.status, Status::Open);
        assert_eq!(bug.votes, 18);
        assert!(!bug.has_user_voted);
        assert_eq!(
            bug.created_at,
            Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap()
        );
    }
}
