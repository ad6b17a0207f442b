//! Core error types for duewise-core.
//!
//! The engine has exactly one failure mode: a task whose stored due date does
//! not represent a valid instant. It never produces a score derived from an
//! unparseable date.

use thiserror::Error;

/// Errors surfaced by the urgency engine.
#[derive(Error, Debug, Clone)]
pub enum UrgencyError {
    /// The task's due date failed to parse to a valid instant.
    ///
    /// The input is structurally invalid; the caller must repair or exclude
    /// the task before re-invoking. Nothing is retried.
    #[error("malformed task '{id}': due date '{value}' is not a valid instant")]
    MalformedTask {
        /// Id of the offending task.
        id: String,
        /// The raw due-date value as stored.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl UrgencyError {
    /// Id of the task this error refers to.
    pub fn task_id(&self) -> &str {
        match self {
            UrgencyError::MalformedTask { id, .. } => id,
        }
    }
}
