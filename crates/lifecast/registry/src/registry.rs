//! Scenario registry.

use std::sync::Arc;

use chrono::{Months, Utc};
use lifecast_audit::AuditLogger;
use lifecast_types::{EventDraft, EventId, LifeEvent, Scenario, ScenarioConfig, ScenarioId};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{RegistryError, RegistryResult};
use crate::store::{InMemoryStore, ScenarioStore};

/// Default scenario window length when no end date is supplied.
const DEFAULT_WINDOW_MONTHS: u32 = 360;

/// Registry of scenarios.
///
/// Owns every scenario record; all mutation goes through `create_scenario`,
/// `add_event`, and `delete_scenario`. Each mutating operation emits one
/// audit record; an audit failure is reported through
/// [`AuditLogger::log_error`] and then fails the operation itself.
pub struct ScenarioRegistry {
    store: Box<dyn ScenarioStore>,
    logger: Arc<dyn AuditLogger>,
    /// Convenience pointer to the most recently created scenario. No
    /// operation depends on it for correctness.
    current: Option<ScenarioId>,
}

impl ScenarioRegistry {
    /// Create a registry over the in-memory store.
    pub fn new(logger: Arc<dyn AuditLogger>) -> Self {
        Self::with_store(Box::new(InMemoryStore::new()), logger)
    }

    /// Create a registry over a caller-supplied store.
    pub fn with_store(store: Box<dyn ScenarioStore>, logger: Arc<dyn AuditLogger>) -> Self {
        Self {
            store,
            logger,
            current: None,
        }
    }

    /// Create a scenario, filling defaults for every omitted field, store
    /// it, and mark it as the current scenario.
    pub fn create_scenario(&mut self, config: ScenarioConfig) -> RegistryResult<ScenarioId> {
        let now = Utc::now();
        let start_date = config.start_date.unwrap_or(now);
        let end_date = config.end_date.unwrap_or_else(|| {
            start_date
                .checked_add_months(Months::new(DEFAULT_WINDOW_MONTHS))
                .unwrap_or(start_date)
        });

        let scenario = Scenario {
            id: ScenarioId::generate(),
            name: config
                .name
                .unwrap_or_else(|| "Untitled Scenario".to_string()),
            description: config.description.unwrap_or_default(),
            start_date,
            end_date,
            events: Vec::new(),
            assumptions: config.assumptions.unwrap_or_default(),
            baseline: config.baseline.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let id = scenario.id.clone();
        debug!(scenario = %id, name = %scenario.name, "creating scenario");

        let payload = json!({
            "scenario_id": id.as_str(),
            "name": scenario.name,
            "start_date": scenario.start_date,
            "end_date": scenario.end_date,
        });

        self.store.put(scenario);
        self.current = Some(id.clone());
        self.emit("scenario.created", payload)?;

        Ok(id)
    }

    /// Attach an event to a scenario, normalizing omitted draft fields
    /// (probability 1.0, confidence medium, no tags, zeroed impact).
    pub fn add_event(&mut self, id: &ScenarioId, draft: EventDraft) -> RegistryResult<EventId> {
        let mut scenario = self
            .store
            .get(id)
            .ok_or_else(|| RegistryError::ScenarioNotFound(id.clone()))?;

        let now = Utc::now();
        let event = LifeEvent::from_draft(draft, EventId::generate(), now);
        let event_id = event.id.clone();

        debug!(
            scenario = %id,
            event = %event_id,
            event_type = %event.event_type,
            date = %event.date,
            "attaching event"
        );

        let payload = json!({
            "scenario_id": id.as_str(),
            "event_id": event_id.as_str(),
            "event_type": event.event_type,
            "category": event.category,
            "date": event.date,
        });

        scenario.events.push(event);
        scenario.updated_at = now;
        self.store.put(scenario);
        self.emit("scenario.event_added", payload)?;

        Ok(event_id)
    }

    /// Append already-built events verbatim, preserving their identifiers.
    ///
    /// Used by branching to copy a base scenario's events into a fork as
    /// independent values. The enclosing branch operation is what gets
    /// audited, not each copied event.
    pub fn adopt_events(
        &mut self,
        id: &ScenarioId,
        events: Vec<LifeEvent>,
    ) -> RegistryResult<()> {
        let mut scenario = self
            .store
            .get(id)
            .ok_or_else(|| RegistryError::ScenarioNotFound(id.clone()))?;

        scenario.events.extend(events);
        scenario.updated_at = Utc::now();
        self.store.put(scenario);
        Ok(())
    }

    /// Fetch a scenario by id.
    pub fn get_scenario(&self, id: &ScenarioId) -> Option<Scenario> {
        self.store.get(id)
    }

    /// All stored scenarios.
    pub fn all_scenarios(&self) -> Vec<Scenario> {
        self.store.list()
    }

    /// The most recently created scenario, if it still exists.
    pub fn current_scenario_id(&self) -> Option<&ScenarioId> {
        self.current.as_ref()
    }

    /// Delete a scenario. Deleting an unknown id is a silent no-op so the
    /// operation stays idempotent; only an actual removal is audited.
    pub fn delete_scenario(&mut self, id: &ScenarioId) -> RegistryResult<()> {
        if !self.store.delete(id) {
            return Ok(());
        }

        if self.current.as_ref() == Some(id) {
            self.current = None;
        }

        debug!(scenario = %id, "deleted scenario");
        self.emit("scenario.deleted", json!({ "scenario_id": id.as_str() }))
    }

    fn emit(&self, event_type: &str, payload: Value) -> RegistryResult<()> {
        if let Err(err) = self.logger.log(event_type, payload.clone()) {
            self.logger.log_error(event_type, &err, payload);
            return Err(RegistryError::Audit(err));
        }
        Ok(())
    }
}
