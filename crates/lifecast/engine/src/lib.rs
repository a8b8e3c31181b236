//! # lifecast-engine
//!
//! The timeline simulation engine. Given a scenario from
//! `lifecast-registry`, it produces month-by-month projections with
//! aggregate summary metrics, derives risk and confidence scores from the
//! event list, compares simulations across scenarios, and forks scenarios
//! into branches.
//!
//! # Architecture
//!
//! [`LifecastPlanner`] is the facade over one registry; it composes the
//! specialized components:
//!
//! - [`SimulationEngine`] — monthly stepping and aggregation
//! - [`risk_score`] / [`estimate_confidence`] — derived metrics
//! - [`compare`] — multi-scenario aggregation
//! - [`branch`] — scenario forking without mutating the base
//!
//! Simulation is deterministic and side-effect-free apart from audit
//! logging; the same scenario always yields the same projections.

#![deny(unsafe_code)]

pub mod branch;
pub mod compare;
pub mod confidence;
pub mod errors;
pub mod months;
pub mod planner;
pub mod risk;
pub mod simulator;

pub use branch::{BaselineOverride, BranchConfig};
pub use confidence::estimate_confidence;
pub use errors::{EngineError, EngineResult};
pub use planner::LifecastPlanner;
pub use risk::risk_score;
pub use simulator::SimulationEngine;
