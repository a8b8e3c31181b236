//! Multi-scenario comparison output.

use serde::{Deserialize, Serialize};

use crate::projection::Simulation;
use crate::scenario::ScenarioId;

/// Output of comparing N simulated scenarios.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comparison {
    /// The scenario identifiers that were compared, in input order
    pub scenario_ids: Vec<ScenarioId>,
    /// The resulting simulations, in the same order
    pub simulations: Vec<Simulation>,
    /// Highest final net worth across the simulations
    pub best_net_worth: f64,
    /// Lowest final net worth across the simulations
    pub worst_net_worth: f64,
    /// Mean final net worth across the simulations
    pub average_net_worth: f64,
    /// Scenario with the highest risk score (first occurrence wins ties)
    pub riskiest: ScenarioId,
    /// Scenario with the lowest risk score (first occurrence wins ties)
    pub safest: ScenarioId,
}

impl Comparison {
    /// The simulation identified as riskiest.
    pub fn riskiest_simulation(&self) -> Option<&Simulation> {
        self.simulations
            .iter()
            .find(|s| s.scenario_id == self.riskiest)
    }

    /// The simulation identified as safest.
    pub fn safest_simulation(&self) -> Option<&Simulation> {
        self.simulations
            .iter()
            .find(|s| s.scenario_id == self.safest)
    }
}
