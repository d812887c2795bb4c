//! Feedback submission: validate raw form input, fill defaults, hand off to
//! the task store.

use crate::model::{Category, NewTask, Status, Task};
use crate::store::TaskStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw input from the submission form. `category` and `status` fall back to
/// `UI` and `Open` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl FeedbackInput {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: None,
            status: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Check required fields and resolve defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first of `title`, `description`
    /// that is empty after trimming.
    pub fn validate(self) -> Result<NewTask, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty("description"));
        }
        Ok(NewTask {
            title: self.title,
            description: self.description,
            category: self.category.unwrap_or(Category::Ui),
            status: self.status.unwrap_or(Status::Open),
        })
    }
}

/// Rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self {
            field,
            reason: "must not be empty or whitespace",
        }
    }
}

/// Validate `input` and append the resulting task to `store`.
///
/// # Errors
///
/// Returns a [`ValidationError`] without touching the store when the title or
/// description is blank.
pub fn submit_feedback<'a>(
    store: &'a mut TaskStore,
    input: FeedbackInput,
) -> Result<&'a Task, ValidationError> {
    let new_task = input.validate().inspect_err(|err| {
        debug!(field = err.field, "feedback submission rejected");
    })?;
    Ok(store.create_task(new_task))
}

#[cfg(test)]
mod tests {
    use super::{FeedbackInput, ValidationError, submit_feedback};
    use crate::model::{Category, Status};
    use crate::store::TaskStore;

    #[test]
    fn defaults_fill_category_and_status() {
        let new_task = FeedbackInput::new("Title", "Body").validate().expect("valid");
        assert_eq!(new_task.category, Category::Ui);
        assert_eq!(new_task.status, Status::Open);
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let new_task = FeedbackInput::new("Title", "Body")
            .with_category(Category::Performance)
            .with_status(Status::Complete)
            .validate()
            .expect("valid");
        assert_eq!(new_task.category, Category::Performance);
        assert_eq!(new_task.status, Status::Complete);
    }

    #[test]
    fn whitespace_title_is_rejected_first() {
        let err = FeedbackInput::new("  ", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::empty("title"));
    }

    #[test]
    fn whitespace_description_is_rejected() {
        let err = FeedbackInput::new("Title", "\n\t ").validate().unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn text_is_stored_as_given() {
        let mut store = TaskStore::new();
        let task = submit_feedback(&mut store, FeedbackInput::new("  Padded ", "body "))
            .expect("valid");
        assert_eq!(task.title, "  Padded ");
        assert_eq!(task.description, "body ");
    }

    #[test]
    fn rejected_submission_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        submit_feedback(&mut store, FeedbackInput::new("ok", "ok")).expect("valid");
        let result = submit_feedback(&mut store, FeedbackInput::new("  ", "x"));
        assert!(result.is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn input_deserializes_without_optional_fields() {
        let input: FeedbackInput =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).expect("parse");
        assert!(input.category.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn misspelled_field_is_rejected() {
        let result = serde_json::from_str::<FeedbackInput>(
            r#"{"title":"t","description":"d","catgory":"Bug"}"#,
        );
        assert!(result.is_err());
    }
}
