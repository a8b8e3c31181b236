//! Scenario storage behind a narrow trait.
//!
//! The registry never assumes an in-memory map: any backend that can
//! `get`/`put`/`delete`/`list` whole scenario records can sit here.

use std::collections::HashMap;

use lifecast_types::{Scenario, ScenarioId};

/// Storage contract for scenario records.
///
/// Values move in and out whole: `get` returns an owned copy and `put`
/// replaces the stored record, which keeps the contract workable for
/// backends that serialize.
pub trait ScenarioStore: Send {
    /// Fetch a scenario by id.
    fn get(&self, id: &ScenarioId) -> Option<Scenario>;

    /// Insert or replace a scenario, keyed by its own id.
    fn put(&mut self, scenario: Scenario);

    /// Remove a scenario. Returns whether it existed.
    fn delete(&mut self, id: &ScenarioId) -> bool;

    /// All stored scenarios, in no particular order.
    fn list(&self) -> Vec<Scenario>;
}

/// Identifier-keyed in-memory store with no eviction.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    scenarios: HashMap<ScenarioId, Scenario>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl ScenarioStore for InMemoryStore {
    fn get(&self, id: &ScenarioId) -> Option<Scenario> {
        self.scenarios.get(id).cloned()
    }

    fn put(&mut self, scenario: Scenario) {
        self.scenarios.insert(scenario.id.clone(), scenario);
    }

    fn delete(&mut self, id: &ScenarioId) -> bool {
        self.scenarios.remove(id).is_some()
    }

    fn list(&self) -> Vec<Scenario> {
        self.scenarios.values().cloned().collect()
    }
}
