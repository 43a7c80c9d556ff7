//! Shared default values for the command-line interface.
//! Simulation parameters default to the library constants so `init` and
//! `run` agree with `SimulationConfig::default()`.

pub use allevo_sim::simulation::configs::{
    DEFAULT_CARRYING_CAPACITY as CARRYING_CAPACITY, DEFAULT_GENERATIONS as GENERATIONS,
    DEFAULT_INITIAL_POPULATION as INITIAL_POPULATION, DEFAULT_OFFSPRING_MEAN as OFFSPRING_MEAN,
    DEFAULT_OFFSPRING_STD as OFFSPRING_STD, DEFAULT_SURVIVAL as SURVIVAL,
};

pub const CONFIG_FILE: &str = "allevo.json";

// Logging
pub const LOG_LEVEL: &str = "warn";
