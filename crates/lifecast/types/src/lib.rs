//! # lifecast-types
//!
//! Data model for the Lifecast timeline simulation engine:
//!
//! - **Scenario** — a named timeline with a financial baseline, dated life
//!   events, and free-form assumptions
//! - **LifeEvent** — a discrete occurrence with a four-field impact on
//!   income/expenses/assets/liabilities
//! - **Event Catalog** — static taxonomy of event categories and types with
//!   default classifications
//! - **Simulation output** — monthly projections, summary metrics, and
//!   multi-scenario comparisons
//!
//! These types are plain data: all behavior (registration, simulation,
//! scoring, branching) lives in `lifecast-registry` and `lifecast-engine`.

#![deny(unsafe_code)]

pub mod catalog;
pub mod comparison;
pub mod event;
pub mod projection;
pub mod scenario;

pub use catalog::{CatalogEntry, EventCatalog, ImpactClass};
pub use comparison::Comparison;
pub use event::{Confidence, EventDraft, EventId, Impact, LifeEvent};
pub use projection::{MonthlyProjection, Simulation, SimulationSummary};
pub use scenario::{Baseline, Scenario, ScenarioConfig, ScenarioId};
