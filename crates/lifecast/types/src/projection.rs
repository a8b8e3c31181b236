//! Simulation output types.
//!
//! A simulation is transient: it is recomputed on demand from the scenario
//! and never persisted by this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{Confidence, EventId, LifeEvent};
use crate::scenario::ScenarioId;

/// One simulated month's financial snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// 1-based month index within the simulation
    pub month: u32,
    /// First representative instant of the month (start date plus
    /// `month - 1` calendar months)
    pub date: DateTime<Utc>,
    /// Running income after this month's events
    pub income: f64,
    /// Running expenses after this month's events
    pub expenses: f64,
    /// income - expenses
    pub net_income: f64,
    /// Running assets after this month's events
    pub assets: f64,
    /// Running liabilities after this month's events
    pub liabilities: f64,
    /// assets - liabilities
    pub net_worth: f64,
    /// Events that fired during this month, in date order
    pub events: Vec<EventId>,
}

/// Aggregate metrics for a whole simulation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Cumulative income across all simulated months
    pub total_income: f64,
    /// Cumulative expenses across all simulated months
    pub total_expenses: f64,
    /// Net worth after the final month
    pub final_net_worth: f64,
    /// Heuristic risk score in [0, 100]
    pub risk_score: f64,
    /// Categorical confidence across the scenario's events
    pub confidence: Confidence,
}

/// The full output of simulating one scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Simulation {
    pub scenario_id: ScenarioId,
    pub scenario_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// One projection per simulated calendar month
    pub projections: Vec<MonthlyProjection>,
    /// Every event that fell within the simulated window. Events that fired
    /// in a projection appear exactly once; in the degenerate zero-month
    /// case, in-window events are still reported here.
    pub events: Vec<LifeEvent>,
    pub summary: SimulationSummary,
    /// Wall-clock time the simulation took
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Simulation {
    /// Convenience accessor for the last projection, if any month was
    /// simulated.
    pub fn final_projection(&self) -> Option<&MonthlyProjection> {
        self.projections.last()
    }
}
