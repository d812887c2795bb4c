use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The five feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Ui,
    Ux,
    Feature,
    Bug,
    Performance,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 5] = [Self::Ui, Self::Ux, Self::Feature, Self::Bug, Self::Performance];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Ux => "UX",
            Self::Feature => "Feature",
            Self::Bug => "Bug",
            Self::Performance => "Performance",
        }
    }

    /// Long label shown in the submission form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ui => "UI - User Interface",
            Self::Ux => "UX - User Experience",
            Self::Feature => "Feature - New Functionality",
            Self::Bug => "Bug - Issue Report",
            Self::Performance => "Performance - Speed & Optimization",
        }
    }

    /// Badge colour for this category.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Ui => Tone::Blue,
            Self::Ux => Tone::Purple,
            Self::Feature => Tone::Green,
            Self::Bug => Tone::Red,
            Self::Performance => Tone::Yellow,
        }
    }
}

/// The three board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    Open,
    InProgress,
    Complete,
}

impl Status {
    /// Column order on the board.
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Complete];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    /// Long label shown in the submission form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open - Ready to be reviewed",
            Self::InProgress => "In Progress - Currently being worked on",
            Self::Complete => "Complete - Implementation finished",
        }
    }

    /// Column header icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Open => "📋",
            Self::InProgress => "▶️",
            Self::Complete => "✅",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Open => Tone::Orange,
            Self::InProgress => Tone::Blue,
            Self::Complete => Tone::Green,
        }
    }

    /// Position of this status in [`Status::ALL`].
    #[must_use]
    pub const fn column_index(self) -> usize {
        match self {
            Self::Open => 0,
            Self::InProgress => 1,
            Self::Complete => 2,
        }
    }
}

/// Board ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortBy {
    /// `votes` descending.
    #[default]
    MostUpvoted,
    /// `created_at` descending.
    Newest,
}

impl SortBy {
    pub const ALL: [Self; 2] = [Self::MostUpvoted, Self::Newest];

    const fn as_str(self) -> &'static str {
        match self {
            Self::MostUpvoted => "Most Upvoted",
            Self::Newest => "Newest",
        }
    }
}

/// Category selection: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Menu entries: the sentinel first, then each category.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Only(Category::Ui),
        Self::Only(Category::Ux),
        Self::Only(Category::Feature),
        Self::Only(Category::Bug),
        Self::Only(Category::Performance),
    ];

    /// Returns true if a task in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Serde goes through the display string on the way out and `FromStr` on the
/// way in, so JSON accepts the same aliases the CLI does.
macro_rules! string_serde {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.to_string()
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ParseEnumError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )+
    };
}

string_serde!(Category, Status, SortBy, CategoryFilter);

/// Badge colour shared by categories and statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
    Orange,
}

/// A single feedback item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: Status,
    pub votes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub has_user_voted: bool,
}

impl Task {
    /// Description shortened to at most `max_chars` characters plus an ellipsis.
    #[must_use]
    pub fn description_preview(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let mut preview: String = self.description.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}

/// Caller-supplied fields for a new task; everything else is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: Status,
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Categories"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        })
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ui" => Ok(Self::Ui),
            "ux" => Ok(Self::Ux),
            "feature" => Ok(Self::Feature),
            "bug" => Ok(Self::Bug),
            "performance" | "perf" => Ok(Self::Performance),
            _ => Err(ParseEnumError {
                expected: "category",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" | "doing" => {
                Ok(Self::InProgress)
            }
            "complete" | "done" => Ok(Self::Complete),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortBy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "most upvoted" | "most-upvoted" | "most_upvoted" | "votes" | "top" => {
                Ok(Self::MostUpvoted)
            }
            "newest" | "new" | "recent" => Ok(Self::Newest),
            _ => Err(ParseEnumError {
                expected: "sort order",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all categories" | "all-categories" | "all" => Ok(Self::All),
            _ => s.parse::<Category>().map(Self::Only).map_err(|_| ParseEnumError {
                expected: "category filter",
                got: s.to_string(),
            }),
        }
    }
}
