//! # lifecast-registry
//!
//! Owns scenario records: creation with defaults, event attachment with
//! normalization, lookup, and idempotent deletion. Storage sits behind the
//! [`ScenarioStore`] trait so a persistent backend can substitute for the
//! in-memory map without touching the simulation engine.
//!
//! The registry is an explicit, constructible object: callers that need
//! isolation (tests, multiple sessions) create their own instance. It
//! assumes a single logical writer and does not lock.

#![deny(unsafe_code)]

pub mod errors;
pub mod registry;
pub mod store;

pub use errors::{RegistryError, RegistryResult};
pub use registry::ScenarioRegistry;
pub use store::{InMemoryStore, ScenarioStore};
