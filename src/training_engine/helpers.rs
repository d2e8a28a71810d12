//! Small shared formatting and arithmetic helpers used by the session
//! summary and the progress screens.

use crate::training_engine::models::Grade;

/// `part / whole` as a rounded percentage; 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Letter grade for a test percentage.
pub fn grade_for(percentage: u32) -> Grade {
    match percentage {
        90.. => Grade::A,
        80.. => Grade::B,
        70.. => Grade::C,
        60.. => Grade::D,
        _    => Grade::F,
    }
}

/// Render a countdown as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
