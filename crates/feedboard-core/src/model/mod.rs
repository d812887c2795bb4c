pub mod task;

pub use task::{Category, CategoryFilter, NewTask, ParseEnumError, SortBy, Status, Task, Tone};
