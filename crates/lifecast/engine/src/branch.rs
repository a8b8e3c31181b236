//! Scenario branching.
//!
//! A branch forks a base scenario to explore an alternate future: it
//! copies the base's events and baseline, layers branch-specific overrides
//! and events on top, and never mutates the base.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use lifecast_audit::AuditLogger;
use lifecast_registry::{RegistryError, ScenarioRegistry};
use lifecast_types::{Baseline, EventDraft, ScenarioConfig, ScenarioId};
use serde_json::json;
use tracing::debug;

use crate::errors::EngineResult;

/// Per-field baseline overrides for a branch. Unset fields inherit the
/// base scenario's values.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineOverride {
    pub income: Option<f64>,
    pub expenses: Option<f64>,
    pub assets: Option<f64>,
    pub liabilities: Option<f64>,
}

impl BaselineOverride {
    /// Merge these overrides over a base baseline, field by field.
    pub fn merge_over(&self, base: &Baseline) -> Baseline {
        Baseline {
            income: self.income.unwrap_or(base.income),
            expenses: self.expenses.unwrap_or(base.expenses),
            assets: self.assets.unwrap_or(base.assets),
            liabilities: self.liabilities.unwrap_or(base.liabilities),
        }
    }
}

/// Configuration for forking a scenario.
#[derive(Clone, Debug, Default)]
pub struct BranchConfig {
    /// Branch name; defaults to "<base name> - Branch"
    pub name: Option<String>,
    /// Branch description; defaults to the base's
    pub description: Option<String>,
    /// Simulated window start; defaults to the base's
    pub start_date: Option<DateTime<Utc>>,
    /// Simulated window end; defaults to the base's
    pub end_date: Option<DateTime<Utc>>,
    /// Merged over the base's assumptions, branch values winning per key
    pub assumptions: HashMap<String, String>,
    /// Per-field baseline overrides
    pub baseline: BaselineOverride,
    /// Branch-specific events, attached through the normal add-event path
    /// (fresh identifiers, normalization)
    pub events: Vec<EventDraft>,
}

impl BranchConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_events(mut self, events: Vec<EventDraft>) -> Self {
        self.events = events;
        self
    }

    pub fn with_baseline(mut self, baseline: BaselineOverride) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Fork a base scenario into a new, independent scenario.
///
/// The branch is created through the registry (stored, made current,
/// audited like any scenario), base events are copied by value, and
/// branch-specific events are attached afterwards. The base scenario is
/// never touched.
pub fn create_branch(
    registry: &mut ScenarioRegistry,
    logger: &dyn AuditLogger,
    base_id: &ScenarioId,
    config: BranchConfig,
) -> EngineResult<ScenarioId> {
    let started = Instant::now();

    let base = registry
        .get_scenario(base_id)
        .ok_or_else(|| RegistryError::ScenarioNotFound(base_id.clone()))?;

    let mut assumptions = base.assumptions.clone();
    assumptions.extend(config.assumptions);

    let scenario_config = ScenarioConfig {
        name: Some(
            config
                .name
                .unwrap_or_else(|| format!("{} - Branch", base.name)),
        ),
        description: Some(config.description.unwrap_or_else(|| base.description.clone())),
        start_date: Some(config.start_date.unwrap_or(base.start_date)),
        end_date: Some(config.end_date.unwrap_or(base.end_date)),
        assumptions: Some(assumptions),
        baseline: Some(config.baseline.merge_over(&base.baseline)),
    };

    let branch_id = registry.create_scenario(scenario_config)?;
    registry.adopt_events(&branch_id, base.events.clone())?;
    for draft in config.events {
        registry.add_event(&branch_id, draft)?;
    }

    let event_count = registry
        .get_scenario(&branch_id)
        .map(|s| s.events.len())
        .unwrap_or(0);
    let duration_ms = started.elapsed().as_millis() as u64;

    debug!(
        base = %base_id,
        branch = %branch_id,
        event_count,
        "created branch"
    );

    let payload = json!({
        "base_scenario_id": base_id.as_str(),
        "branch_scenario_id": branch_id.as_str(),
        "event_count": event_count,
        "duration_ms": duration_ms,
    });
    if let Err(err) = logger.log("branch.created", payload.clone()) {
        logger.log_error("branch.created", &err, payload);
        return Err(err.into());
    }

    Ok(branch_id)
}
