//! Progress derivation over the static lesson list.
//!
//! Completion is derived, never stored: the percentage is recomputed from
//! the `completed` flags on each request. Enrollment is inferred from any
//! nonzero progress, mirroring the demo's behavior.

use crate::catalog::Lesson;

/// Completion percentage, rounded to the nearest whole percent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn progress_percent(lessons: &[&Lesson]) -> u32 {
    if lessons.is_empty() {
        return 0;
    }
    let completed = lessons.iter().filter(|l| l.completed).count();
    let pct = (completed as f64 / lessons.len() as f64) * 100.0;
    pct.round() as u32
}

/// A user counts as enrolled once any lesson is complete.
#[must_use]
pub fn is_enrolled(lessons: &[&Lesson]) -> bool {
    progress_percent(lessons) > 0
}

#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;
