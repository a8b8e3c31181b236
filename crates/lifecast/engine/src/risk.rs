//! Risk scoring.
//!
//! Rule-based and deterministic: the same event list always yields the
//! same score, with no probabilistic side effects.

use lifecast_types::LifeEvent;

/// Weight added when an event reduces income.
const INCOME_DROP_WEIGHT: f64 = 30.0;
/// Weight added when an event raises expenses.
const EXPENSE_RISE_WEIGHT: f64 = 25.0;
/// Weight added when an event reduces assets.
const ASSET_DROP_WEIGHT: f64 = 20.0;
/// Weight added when an event raises liabilities.
const LIABILITY_RISE_WEIGHT: f64 = 35.0;

/// Derive a 0-100 risk score from a scenario's events.
///
/// Each event contributes a fixed weight per adverse impact direction; a
/// single event can contribute several weights at once. The score is the
/// total weight averaged over the event count, capped at 100. An empty
/// event list scores 0.
pub fn risk_score(events: &[LifeEvent]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for event in events {
        if event.impact.income < 0.0 {
            total += INCOME_DROP_WEIGHT;
        }
        if event.impact.expenses > 0.0 {
            total += EXPENSE_RISE_WEIGHT;
        }
        if event.impact.assets < 0.0 {
            total += ASSET_DROP_WEIGHT;
        }
        if event.impact.liabilities > 0.0 {
            total += LIABILITY_RISE_WEIGHT;
        }
    }

    (total / events.len() as f64).min(100.0)
}
