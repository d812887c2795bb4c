//! feedboard-core library.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums for typed failures ([`error::BoardError`],
//!   [`submit::ValidationError`]); `anyhow::Result` where I/O is involved.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod prefs;
pub mod seed;
pub mod store;
pub mod submit;
pub mod view;

pub use board::{ActionOutcome, Board, BoardAction};
pub use error::{BoardError, ErrorCode};
pub use view::{BoardView, Column, derive_view, order_tasks};
