//! Facade over one scenario registry and the simulation components.

use std::sync::Arc;
use std::time::Instant;

use lifecast_audit::AuditLogger;
use lifecast_registry::{RegistryError, ScenarioRegistry};
use lifecast_types::{
    Comparison, EventDraft, EventId, Scenario, ScenarioConfig, ScenarioId, Simulation,
};
use serde_json::json;

use crate::branch::{self, BranchConfig};
use crate::compare;
use crate::errors::{EngineError, EngineResult};
use crate::simulator::SimulationEngine;

/// The planner coordinates; the registry owns the scenarios and the
/// simulation engine does the arithmetic.
///
/// One planner wraps one registry, so embedders that need isolation
/// (tests, concurrent sessions) construct separate planners.
pub struct LifecastPlanner {
    registry: ScenarioRegistry,
    simulator: SimulationEngine,
    logger: Arc<dyn AuditLogger>,
}

impl LifecastPlanner {
    /// Planner over a fresh in-memory registry.
    pub fn new(logger: Arc<dyn AuditLogger>) -> Self {
        Self::with_registry(ScenarioRegistry::new(logger.clone()), logger)
    }

    /// Planner over a caller-supplied registry (e.g. one with a custom
    /// store).
    pub fn with_registry(registry: ScenarioRegistry, logger: Arc<dyn AuditLogger>) -> Self {
        Self {
            registry,
            simulator: SimulationEngine::new(logger.clone()),
            logger,
        }
    }

    pub fn registry(&self) -> &ScenarioRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ScenarioRegistry {
        &mut self.registry
    }

    /// Create a scenario; see [`ScenarioRegistry::create_scenario`].
    pub fn create_scenario(&mut self, config: ScenarioConfig) -> EngineResult<ScenarioId> {
        Ok(self.registry.create_scenario(config)?)
    }

    /// Attach an event; see [`ScenarioRegistry::add_event`].
    pub fn add_event(&mut self, id: &ScenarioId, draft: EventDraft) -> EngineResult<EventId> {
        Ok(self.registry.add_event(id, draft)?)
    }

    pub fn get_scenario(&self, id: &ScenarioId) -> Option<Scenario> {
        self.registry.get_scenario(id)
    }

    pub fn all_scenarios(&self) -> Vec<Scenario> {
        self.registry.all_scenarios()
    }

    /// Delete a scenario; unknown ids are a silent no-op.
    pub fn delete_scenario(&mut self, id: &ScenarioId) -> EngineResult<()> {
        Ok(self.registry.delete_scenario(id)?)
    }

    /// Simulate one scenario into monthly projections and summary metrics.
    pub fn simulate_scenario(&self, id: &ScenarioId) -> EngineResult<Simulation> {
        let scenario = self
            .registry
            .get_scenario(id)
            .ok_or_else(|| RegistryError::ScenarioNotFound(id.clone()))?;
        self.simulator.simulate(&scenario)
    }

    /// Simulate each scenario in input order and aggregate the outcomes.
    ///
    /// All-or-nothing: an unknown id anywhere in the list fails the whole
    /// comparison and partial results are discarded.
    pub fn compare_scenarios(&self, ids: &[ScenarioId]) -> EngineResult<Comparison> {
        if ids.is_empty() {
            return Err(EngineError::EmptyComparison);
        }

        let started = Instant::now();
        let mut simulations = Vec::with_capacity(ids.len());
        for id in ids {
            simulations.push(self.simulate_scenario(id)?);
        }

        let comparison = compare::aggregate(ids.to_vec(), simulations)?;
        let duration_ms = started.elapsed().as_millis() as u64;

        let payload = json!({
            "scenario_count": ids.len(),
            "duration_ms": duration_ms,
            "best_net_worth": comparison.best_net_worth,
            "worst_net_worth": comparison.worst_net_worth,
        });
        if let Err(err) = self.logger.log("comparison.completed", payload.clone()) {
            self.logger.log_error("comparison.completed", &err, payload);
            return Err(err.into());
        }

        Ok(comparison)
    }

    /// Fork a base scenario into an independent branch; see
    /// [`branch::create_branch`].
    pub fn create_branch(
        &mut self,
        base_id: &ScenarioId,
        config: BranchConfig,
    ) -> EngineResult<ScenarioId> {
        branch::create_branch(&mut self.registry, self.logger.as_ref(), base_id, config)
    }
}
