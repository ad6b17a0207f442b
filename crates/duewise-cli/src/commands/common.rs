//! Shared helpers for loading snapshots and resolving the reference clock.

use chrono::{DateTime, Utc};
use duewise_core::Task;
use std::fs;
use std::path::Path;

/// Load a task snapshot from a JSON file holding an array of tasks.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {e}", path.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&raw)
        .map_err(|e| format!("could not parse {}: {e}", path.display()))?;
    Ok(tasks)
}

/// Resolve the reference instant: an explicit RFC 3339 value, or the current
/// time. One instant per invocation, shared by every task.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match now {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| format!("invalid --now value '{raw}': {e}"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
