//! Session-scoped category filter and sort order.

use crate::error::BoardError;
use crate::model::{CategoryFilter, SortBy};
use serde::{Deserialize, Serialize};

/// The board's current filter and ordering. Starts at
/// (`All Categories`, `Most Upvoted`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterPrefs {
    pub selected_category: CategoryFilter,
    pub sort_by: SortBy,
}

impl FilterPrefs {
    pub fn set_selected_category(&mut self, value: CategoryFilter) {
        self.selected_category = value;
    }

    pub fn set_sort_by(&mut self, value: SortBy) {
        self.sort_by = value;
    }
}

/// Holder that consumers go through to reach the preferences.
///
/// A context that was never provided refuses every read with
/// [`BoardError::UninitializedContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterContext {
    prefs: Option<FilterPrefs>,
}

impl FilterContext {
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self { prefs: None }
    }

    #[must_use]
    pub const fn provided(prefs: FilterPrefs) -> Self {
        Self { prefs: Some(prefs) }
    }

    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if nothing provided the preferences.
    pub fn prefs(&self) -> Result<&FilterPrefs, BoardError> {
        self.prefs.as_ref().ok_or(BoardError::UninitializedContext)
    }

    /// # Errors
    ///
    /// Returns [`BoardError::UninitializedContext`] if nothing provided the preferences.
    pub fn prefs_mut(&mut self) -> Result<&mut FilterPrefs, BoardError> {
        self.prefs.as_mut().ok_or(BoardError::UninitializedContext)
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterContext, FilterPrefs};
    use crate::error::BoardError;
    use crate::model::{Category, CategoryFilter, SortBy};

    #[test]
    fn defaults_are_all_categories_most_upvoted() {
        let prefs = FilterPrefs::default();
        assert_eq!(prefs.selected_category, CategoryFilter::All);
        assert_eq!(prefs.sort_by, SortBy::MostUpvoted);
    }

    #[test]
    fn setters_only_touch_their_field() {
        let mut prefs = FilterPrefs::default();
        prefs.set_selected_category(CategoryFilter::Only(Category::Ux));
        assert_eq!(prefs.sort_by, SortBy::MostUpvoted);
        prefs.set_sort_by(SortBy::Newest);
        assert_eq!(prefs.selected_category, CategoryFilter::Only(Category::Ux));
    }

    #[test]
    fn unprovided_context_rejects_reads() {
        let mut ctx = FilterContext::uninitialized();
        assert_eq!(ctx.prefs(), Err(BoardError::UninitializedContext));
        assert!(matches!(
            ctx.prefs_mut(),
            Err(BoardError::UninitializedContext)
        ));
    }

    #[test]
    fn provided_context_exposes_prefs() {
        let mut ctx = FilterContext::provided(FilterPrefs::default());
        ctx.prefs_mut()
            .expect("provided")
            .set_sort_by(SortBy::Newest);
        assert_eq!(ctx.prefs().expect("provided").sort_by, SortBy::Newest);
    }
}
