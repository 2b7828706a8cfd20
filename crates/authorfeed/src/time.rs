use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// 投稿からの経過時間を "42s" / "5m" / "3h" / "12d" の形にする
pub fn relative_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed(elapsed_seconds(created_at, now))
}

/// Whole seconds between the two instants, rounded to the nearest second.
fn elapsed_seconds(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - created_at).num_milliseconds();
    (millis as f64 / 1000.0).round() as i64
}

pub fn format_elapsed(secs: i64) -> String {
    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m", rounded_quotient(secs, MINUTE))
    } else if secs < DAY {
        format!("{}h", rounded_quotient(secs, HOUR))
    } else {
        format!("{}d", rounded_quotient(secs, DAY))
    }
}

// f64::round rounds half away from zero
fn rounded_quotient(secs: i64, unit: i64) -> i64 {
    (secs as f64 / unit as f64).round() as i64
}
