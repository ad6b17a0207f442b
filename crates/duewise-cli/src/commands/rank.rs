//! Ranked board output.

use duewise_core::{format_countdown, urgency};
use std::path::Path;

/// Print the ranked board, marking the recommended next task with `>`.
pub fn run(file: &Path, now: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = super::common::load_tasks(file)?;
    let now = super::common::resolve_now(now)?;
    let evaluation = urgency::evaluate(&tasks, now);

    if evaluation.ranked.is_empty() && evaluation.excluded.is_empty() {
        println!("No tasks yet.");
        return Ok(());
    }

    let next_id = evaluation.next_task().map(|view| view.task.id.clone());
    for view in &evaluation.ranked {
        let marker = if next_id.as_deref() == Some(view.task.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let done = if view.task.completed { 'x' } else { ' ' };
        println!(
            "{marker} [{done}] {:<8} {:>4}  {:<16} {}",
            view.urgency_level.label(),
            view.urgency_score,
            format_countdown(view.time_left_minutes),
            view.task.title,
        );
    }

    for err in &evaluation.excluded {
        eprintln!("warning: skipped {err}");
    }

    Ok(())
}
