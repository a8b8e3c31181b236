//! Scenario types.
//!
//! A scenario is a named timeline: a financial baseline, an ordered list of
//! life events, and free-form assumptions. Scenarios are owned by the
//! registry and mutated only through it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::LifeEvent;

/// Unique identifier for a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create a scenario ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random scenario ID.
    pub fn generate() -> Self {
        Self(format!("scenario-{}", Uuid::new_v4()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The baseline financial state a scenario starts from.
///
/// All amounts are annual-rate (income/expenses) or point-in-time
/// (assets/liabilities) figures; the simulation holds them constant until
/// an event changes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub assets: f64,
    #[serde(default)]
    pub liabilities: f64,
}

impl Baseline {
    pub fn new(income: f64, expenses: f64, assets: f64, liabilities: f64) -> Self {
        Self {
            income,
            expenses,
            assets,
            liabilities,
        }
    }

    /// Net worth implied by the baseline alone.
    pub fn net_worth(&self) -> f64 {
        self.assets - self.liabilities
    }
}

/// A named timeline with a baseline and a set of dated events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier, generated on creation
    pub id: ScenarioId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Start of the simulated window
    pub start_date: DateTime<Utc>,
    /// End of the simulated window. Expected to be >= start_date; an
    /// inverted range degrades to an empty simulation rather than an error.
    pub end_date: DateTime<Utc>,
    /// Attached events, in attachment order. Re-sorted by date before
    /// simulation, so insertion order is not semantically significant.
    pub events: Vec<LifeEvent>,
    /// Free-form informational assumptions (e.g. "inflation" -> "3%")
    pub assumptions: HashMap<String, String>,
    /// Baseline financial state
    pub baseline: Baseline,
    /// When the scenario was created
    pub created_at: DateTime<Utc>,
    /// Last mutation through the registry
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied configuration for creating a scenario.
///
/// Every field is optional; the registry fills defaults: name
/// "Untitled Scenario", empty description, start = now, end = start plus
/// 30 years, empty assumptions, zeroed baseline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assumptions: Option<HashMap<String, String>>,
    #[serde(default)]
    pub baseline: Option<Baseline>,
}

impl ScenarioConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_assumptions(mut self, assumptions: HashMap<String, String>) -> Self {
        self.assumptions = Some(assumptions);
        self
    }
}
