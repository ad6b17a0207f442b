//! Task urgency scoring and ranking.
//!
//! Derives a normalized urgency score and a discrete urgency tier for each
//! task from three weighted factors:
//! - Lateness pressure (how far behind schedule the task already is)
//! - Time pressure (how soon the deadline lands, saturating at 24 hours out)
//! - Importance boost (user-assigned weight)
//!
//! Completed tasks take a flat penalty that forces them below every
//! incomplete task regardless of the other factors. The whole module is
//! side-effect free: the caller supplies the task snapshot and one reference
//! instant, and the same inputs always yield the same ordered output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UrgencyError;
use crate::task::Task;

/// Discrete urgency tier derived from buffer minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Negative buffer: the task cannot be finished in time if started now.
    Critical,
    /// Buffer within the urgent threshold; start soon.
    Urgent,
    /// Comfortable buffer.
    Safe,
}

impl UrgencyLevel {
    /// Badge label used by renderers.
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "Do now",
            UrgencyLevel::Urgent => "Tight",
            UrgencyLevel::Safe => "On track",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLevel::Critical => write!(f, "critical"),
            UrgencyLevel::Urgent => write!(f, "urgent"),
            UrgencyLevel::Safe => write!(f, "safe"),
        }
    }
}

/// Scoring weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyWeights {
    /// Weight for lateness pressure (default 0.55)
    pub lateness_weight: f64,
    /// Weight for time pressure (default 0.35)
    pub time_weight: f64,
    /// Additive boost per importance level (default 8.0, so levels 1-3 add 8-24)
    pub importance_boost_per_level: f64,
    /// Flat penalty applied to completed tasks (default -100.0)
    pub completion_penalty: f64,
}

impl Default for UrgencyWeights {
    fn default() -> Self {
        Self {
            lateness_weight: 0.55,
            time_weight: 0.35,
            importance_boost_per_level: 8.0,
            completion_penalty: -100.0,
        }
    }
}

/// Scoring configuration: tier thresholds plus weights.
///
/// The tier/weight policy lives here as named values so it can be swapped
/// without touching the algorithm.
#[derive(Debug, Clone)]
pub struct UrgencyConfig {
    /// Weights for each score component
    pub weights: UrgencyWeights,
    /// Upper buffer bound in minutes for the urgent tier (default 120);
    /// anything above it classifies as safe, anything below zero as critical
    pub urgent_buffer: i64,
    /// Horizon in minutes at which time pressure bottoms out (default 1440,
    /// i.e. deadlines a full day away exert no pressure yet)
    pub pressure_horizon: i64,
    /// Effort floor in minutes normalizing lateness pressure (default 30);
    /// prevents tiny tasks from saturating the moment they slip
    pub effort_floor: u32,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            weights: UrgencyWeights::default(),
            urgent_buffer: 120,
            pressure_horizon: 24 * 60,
            effort_floor: 30,
        }
    }
}

/// Scored view of a single task.
///
/// Recomputed on every evaluation and never stored; it has no identity of its
/// own beyond the task it borrows.
#[derive(Debug, Clone, Serialize)]
pub struct TaskUrgency<'a> {
    /// The task this view was derived from.
    pub task: &'a Task,
    /// Minutes from the reference instant until the due date; negative means
    /// overdue.
    pub time_left_minutes: i64,
    /// Time left minus the estimated effort. Negative means the task cannot
    /// be finished in time if started now.
    pub buffer_minutes: i64,
    /// Discrete tier derived from the buffer.
    pub urgency_level: UrgencyLevel,
    /// Ranking value, higher is more urgent. Practical range is roughly
    /// -100..=200; used only for ordering, never displayed as a unit.
    pub urgency_score: i64,
}

impl TaskUrgency<'_> {
    /// Score clamped into 0..=100 for progress-ring display.
    pub fn ring_percent(&self) -> u8 {
        self.urgency_score.clamp(0, 100) as u8
    }
}

/// Result of ranking a task snapshot.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    /// Scored views ordered by the ranking policy, one per well-formed input
    /// task, none dropped or duplicated.
    pub ranked: Vec<TaskUrgency<'a>>,
    /// Malformed tasks excluded from the ranking, so one corrupt record
    /// never blanks the whole view. The caller decides how to surface these.
    pub excluded: Vec<UrgencyError>,
}

impl<'a> Evaluation<'a> {
    /// The recommended next task: the first ranked entry that is not
    /// completed. `None` for an empty or all-completed snapshot.
    pub fn next_task(&self) -> Option<&TaskUrgency<'a>> {
        self.ranked.iter().find(|view| !view.task.completed)
    }
}

/// Urgency calculator for tasks.
pub struct UrgencyCalculator {
    config: UrgencyConfig,
}

impl UrgencyCalculator {
    /// Create a calculator with the default config.
    pub fn new() -> Self {
        Self {
            config: UrgencyConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: UrgencyConfig) -> Self {
        Self { config }
    }

    /// Score a single task against the reference instant `now`.
    ///
    /// Deterministic and total for well-formed tasks; fails only when the
    /// stored due date does not parse to a valid instant.
    pub fn evaluate_one<'a>(
        &self,
        task: &'a Task,
        now: DateTime<Utc>,
    ) -> Result<TaskUrgency<'a>, UrgencyError> {
        let due = task
            .due_instant()
            .map_err(|source| UrgencyError::MalformedTask {
                id: task.id.clone(),
                value: task.due_date.clone(),
                source,
            })?;

        // Nearest minute, ties away from zero.
        let time_left_minutes = ((due - now).num_seconds() as f64 / 60.0).round() as i64;
        let buffer_minutes = time_left_minutes - i64::from(task.estimated_minutes);

        let urgency_level = self.classify(buffer_minutes);

        let weights = &self.config.weights;
        let lateness_pressure = self.lateness_pressure(buffer_minutes, task.estimated_minutes);
        let time_pressure = self.time_pressure(time_left_minutes);
        let importance_boost =
            f64::from(task.effective_importance().level()) * weights.importance_boost_per_level;
        let completion_penalty = if task.completed {
            weights.completion_penalty
        } else {
            0.0
        };

        let urgency_score = (lateness_pressure * weights.lateness_weight
            + time_pressure * weights.time_weight
            + importance_boost
            + completion_penalty)
            .round() as i64;

        Ok(TaskUrgency {
            task,
            time_left_minutes,
            buffer_minutes,
            urgency_level,
            urgency_score,
        })
    }

    /// Score and rank a whole snapshot against one reference instant.
    ///
    /// Every task is scored against the same `now`, so relative order can
    /// never drift mid-computation. Malformed tasks are filtered out and
    /// reported in [`Evaluation::excluded`]; the rest are still ranked.
    pub fn evaluate<'a>(&self, tasks: &'a [Task], now: DateTime<Utc>) -> Evaluation<'a> {
        let mut ranked = Vec::with_capacity(tasks.len());
        let mut excluded = Vec::new();

        for task in tasks {
            match self.evaluate_one(task, now) {
                Ok(view) => ranked.push(view),
                Err(err) => excluded.push(err),
            }
        }

        // Incomplete first, then descending score. The sort is stable, so
        // equal-score tasks keep their input order.
        ranked.sort_by(|a, b| {
            a.task
                .completed
                .cmp(&b.task.completed)
                .then_with(|| b.urgency_score.cmp(&a.urgency_score))
        });

        Evaluation { ranked, excluded }
    }

    /// Tier classification by buffer minutes.
    fn classify(&self, buffer_minutes: i64) -> UrgencyLevel {
        if buffer_minutes < 0 {
            UrgencyLevel::Critical
        } else if buffer_minutes <= self.config.urgent_buffer {
            UrgencyLevel::Urgent
        } else {
            UrgencyLevel::Safe
        }
    }

    /// How far behind schedule the task is, normalized by effort size (0-100).
    fn lateness_pressure(&self, buffer_minutes: i64, estimated_minutes: u32) -> f64 {
        let divisor = f64::from(estimated_minutes.max(self.config.effort_floor));
        ((-buffer_minutes as f64) / divisor * 100.0).clamp(0.0, 100.0)
    }

    /// How soon the deadline lands, saturating at the pressure horizon (0-100).
    fn time_pressure(&self, time_left_minutes: i64) -> f64 {
        ((1.0 - time_left_minutes as f64 / self.config.pressure_horizon as f64) * 100.0)
            .clamp(0.0, 100.0)
    }
}

impl Default for UrgencyCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to score a single task with the default config.
pub fn evaluate_one(task: &Task, now: DateTime<Utc>) -> Result<TaskUrgency<'_>, UrgencyError> {
    UrgencyCalculator::new().evaluate_one(task, now)
}

/// Convenience function to rank a snapshot with the default config.
pub fn evaluate(tasks: &[Task], now: DateTime<Utc>) -> Evaluation<'_> {
    UrgencyCalculator::new().evaluate(tasks, now)
}
