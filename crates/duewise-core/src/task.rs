//! Task records as handed over by the upstream store.
//!
//! The store owns the data invariants: unique ids, `estimated_minutes >= 5`,
//! importance constrained to the three defined levels, and a due date that
//! parses to a valid instant. The engine treats every [`Task`] as immutable
//! input and derives ephemeral urgency views from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-assigned importance level.
///
/// Stored snapshots represent importance as the numeric levels 1/2/3, so the
/// enum serializes through its discriminant rather than a string name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "u8", try_from = "u8")]
pub enum Importance {
    /// Nice to have, no real consequence if it slips.
    Low = 1,
    /// Default weight for unannotated tasks.
    Medium = 2,
    /// Must happen; dominates equal-deadline peers.
    High = 3,
}

impl Importance {
    /// Numeric level (1-3) used by the scoring boost.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Badge label used by renderers.
    pub fn label(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Medium
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Importance> for u8 {
    fn from(importance: Importance) -> Self {
        importance as u8
    }
}

impl TryFrom<u8> for Importance {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Importance::Low),
            2 => Ok(Importance::Medium),
            3 => Ok(Importance::High),
            other => Err(format!("importance must be 1, 2 or 3, got {other}")),
        }
    }
}

/// A task record.
///
/// Field names serialize in camelCase to stay compatible with snapshots
/// written by earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, stable for the task's lifetime.
    pub id: String,
    /// Non-empty display title.
    pub title: String,
    /// Absolute due instant, RFC 3339, exactly as the store recorded it.
    /// Parsed at scoring time so a corrupt value is detectable per task.
    pub due_date: String,
    /// Effort estimate in minutes; the store enforces a floor of 5.
    pub estimated_minutes: u32,
    /// Optional importance level; scoring defaults an absent value to Medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Whether the task is completed.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new task with a generated id.
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>, estimated_minutes: u32) -> Self {
        let now = Utc::now();
        Task {
            id: format!("task-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            due_date: due_date.to_rfc3339(),
            estimated_minutes: estimated_minutes.max(5),
            importance: None,
            completed: false,
        }
    }

    /// Set the importance level.
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Parse the stored due date into an instant.
    pub fn due_instant(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.due_date).map(|dt| dt.with_timezone(&Utc))
    }

    /// Importance applied at scoring time (absent defaults to Medium).
    pub fn effective_importance(&self) -> Importance {
        self.importance.unwrap_or_default()
    }
}
