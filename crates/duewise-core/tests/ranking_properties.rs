//! Property tests locking in the ranking policy.

use chrono::{DateTime, Duration, Utc};
use duewise_core::{urgency, Importance, Task};
use proptest::prelude::*;

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-02-16T12:00:00+00:00")
        .unwrap()
        .with_timezone(&Utc)
}

fn arb_importance() -> impl Strategy<Value = Option<Importance>> {
    prop_oneof![
        Just(None),
        Just(Some(Importance::Low)),
        Just(Some(Importance::Medium)),
        Just(Some(Importance::High)),
    ]
}

prop_compose! {
    fn arb_task_fields()(
        due_offset_minutes in -10_000i64..20_000,
        estimated_minutes in 5u32..600,
        importance in arb_importance(),
        completed in any::<bool>(),
    ) -> (i64, u32, Option<Importance>, bool) {
        (due_offset_minutes, estimated_minutes, importance, completed)
    }
}

fn build_tasks(fields: &[(i64, u32, Option<Importance>, bool)]) -> Vec<Task> {
    let now = fixed_now();
    fields
        .iter()
        .enumerate()
        .map(|(i, &(offset, estimated, importance, completed))| Task {
            id: format!("task-{i}"),
            title: format!("generated {i}"),
            due_date: (now + Duration::minutes(offset)).to_rfc3339(),
            estimated_minutes: estimated,
            importance,
            completed,
        })
        .collect()
}

proptest! {
    #[test]
    fn ranking_is_a_permutation(fields in prop::collection::vec(arb_task_fields(), 0..32)) {
        let tasks = build_tasks(&fields);
        let evaluation = urgency::evaluate(&tasks, fixed_now());

        prop_assert!(evaluation.excluded.is_empty());
        let mut ranked_ids: Vec<&str> =
            evaluation.ranked.iter().map(|v| v.task.id.as_str()).collect();
        let mut input_ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ranked_ids.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(ranked_ids, input_ids);
    }

    #[test]
    fn completed_always_after_incomplete(fields in prop::collection::vec(arb_task_fields(), 0..32)) {
        let tasks = build_tasks(&fields);
        let evaluation = urgency::evaluate(&tasks, fixed_now());

        let mut seen_completed = false;
        for view in &evaluation.ranked {
            if view.task.completed {
                seen_completed = true;
            } else {
                prop_assert!(!seen_completed, "incomplete task ranked after a completed one");
            }
        }
    }

    #[test]
    fn scores_descend_within_completion_group(fields in prop::collection::vec(arb_task_fields(), 0..32)) {
        let tasks = build_tasks(&fields);
        let evaluation = urgency::evaluate(&tasks, fixed_now());

        for pair in evaluation.ranked.windows(2) {
            if pair[0].task.completed == pair[1].task.completed {
                prop_assert!(pair[0].urgency_score >= pair[1].urgency_score);
            }
        }
    }

    #[test]
    fn evaluate_is_idempotent(fields in prop::collection::vec(arb_task_fields(), 0..32)) {
        let tasks = build_tasks(&fields);
        let now = fixed_now();

        let first: Vec<&str> = urgency::evaluate(&tasks, now)
            .ranked.iter().map(|v| v.task.id.as_str()).collect();
        let second: Vec<&str> = urgency::evaluate(&tasks, now)
            .ranked.iter().map(|v| v.task.id.as_str()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn more_buffer_never_raises_the_score(
        time_left in -5_000i64..5_000,
        estimated_low in 5u32..300,
        extra in 1u32..300,
        importance in arb_importance(),
    ) {
        // Same deadline, more effort: less buffer, so the score may only
        // rise or stay.
        let fields = [
            (time_left, estimated_low, importance, false),
            (time_left, estimated_low + extra, importance, false),
        ];
        let tasks = build_tasks(&fields);
        let now = fixed_now();

        let less_buffer = urgency::evaluate_one(&tasks[1], now).unwrap().urgency_score;
        let more_buffer = urgency::evaluate_one(&tasks[0], now).unwrap().urgency_score;
        prop_assert!(less_buffer >= more_buffer);
    }

    #[test]
    fn equal_scores_tie_break_by_input_order(
        field in arb_task_fields(),
        copies in 2usize..8,
    ) {
        // Identical tasks score identically; stability must keep their
        // input order rather than falling back to any other key.
        let fields: Vec<_> = std::iter::repeat(field).take(copies).collect();
        let tasks = build_tasks(&fields);
        let evaluation = urgency::evaluate(&tasks, fixed_now());

        let ranked_ids: Vec<&str> =
            evaluation.ranked.iter().map(|v| v.task.id.as_str()).collect();
        let input_ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(ranked_ids, input_ids);
    }
}
