//! Human-readable countdown strings.
//!
//! Renderers feed the signed `time_left_minutes` from a scored view straight
//! into [`format_countdown`] to get a compact "time left" or "overdue" label.

const DAY_MINUTES: i64 = 24 * 60;

/// Format a signed minutes-left value as a compact countdown.
///
/// Zero counts as overdue: a task due this minute can no longer be started
/// on time.
///
/// ```
/// use duewise_core::format_countdown;
///
/// assert_eq!(format_countdown(45), "45m left");
/// assert_eq!(format_countdown(200), "3h 20m left");
/// assert_eq!(format_countdown(-90), "1h 30m overdue");
/// ```
pub fn format_countdown(time_left_minutes: i64) -> String {
    if time_left_minutes <= 0 {
        let late = time_left_minutes.unsigned_abs();
        if late < 60 {
            return format!("{late}m overdue");
        }
        let hours = late / 60;
        let minutes = late % 60;
        return format!("{hours}h {minutes}m overdue");
    }

    let days = time_left_minutes / DAY_MINUTES;
    let hours = (time_left_minutes % DAY_MINUTES) / 60;
    let minutes = time_left_minutes % 60;

    if days > 0 {
        format!("{days}d {hours}h left")
    } else if hours > 0 {
        format!("{hours}h {minutes}m left")
    } else {
        format!("{minutes}m left")
    }
}
