//! Simulation engine and population management.
//!
//! This module provides the core generation loop and the population it
//! operates on.
//!
//! - `Simulation`: the engine that runs generations and orchestrates
//!   selection, capacity enforcement, mating and reproduction.
//! - `Population`: in-memory container for the genotypes of living organisms.
//! - `GenerationRecord`: the survivors of one completed generation.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation` instances
//!   with defaults and validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod record;

pub use builder::SimulationBuilder;
pub use configs::SimulationConfig;
pub use engine::{Phase, Simulation};
pub use population::Population;
pub use record::GenerationRecord;
