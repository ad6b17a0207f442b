//! # DueWise Core Library
//!
//! This library provides the core business logic for DueWise, a single-user
//! task-prioritization tool. It implements a CLI-first philosophy where the
//! full engine is available to any thin front end (CLI, desktop shell, web
//! view) as a pure library with no I/O of its own.
//!
//! ## Architecture
//!
//! - **Urgency Calculator**: pure function from a task plus an explicit clock
//!   to a scored urgency view
//! - **Ranker**: pure function from a task snapshot to an ordered sequence of
//!   scored views, with the next-task recommendation derived from it
//! - **Countdown**: human-readable countdown formatting for renderers
//!
//! The engine holds no state between calls: the caller owns the task records
//! and supplies one consistent reference instant per invocation.
//!
//! ## Key Components
//!
//! - [`UrgencyCalculator`]: scoring engine with configurable weights
//! - [`Evaluation`]: ranked snapshot with exclusion reporting
//! - [`Task`]: task record as handed over by the upstream store

pub mod countdown;
pub mod error;
pub mod task;
pub mod urgency;

pub use countdown::format_countdown;
pub use error::UrgencyError;
pub use task::{Importance, Task};
pub use urgency::{
    Evaluation, TaskUrgency, UrgencyCalculator, UrgencyConfig, UrgencyLevel, UrgencyWeights,
};
