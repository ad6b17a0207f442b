//! Next-task recommendation output.

use duewise_core::{format_countdown, urgency};
use std::path::Path;

/// Print the single recommended next task, or a friendly empty-state line.
pub fn run(file: &Path, now: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = super::common::load_tasks(file)?;
    let now = super::common::resolve_now(now)?;
    let evaluation = urgency::evaluate(&tasks, now);

    match evaluation.next_task() {
        Some(view) => {
            println!(
                "{} ({}, {})",
                view.task.title,
                view.urgency_level.label(),
                format_countdown(view.time_left_minutes),
            );
        }
        None => println!("No pending task."),
    }

    for err in &evaluation.excluded {
        eprintln!("warning: skipped {err}");
    }

    Ok(())
}
