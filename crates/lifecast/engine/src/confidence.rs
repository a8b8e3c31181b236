//! Confidence estimation.

use lifecast_types::{Confidence, LifeEvent};

/// Estimate a categorical confidence level across a scenario's events.
///
/// Each event's confidence label maps to a numeric score (high 3, medium
/// 2, low 1); the average buckets back to a label: >= 2.5 high, >= 1.5
/// medium, otherwise low. An empty event list is high confidence.
pub fn estimate_confidence(events: &[LifeEvent]) -> Confidence {
    if events.is_empty() {
        return Confidence::High;
    }

    let total: u32 = events.iter().map(|e| e.confidence.score()).sum();
    let average = f64::from(total) / events.len() as f64;

    if average >= 2.5 {
        Confidence::High
    } else if average >= 1.5 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
