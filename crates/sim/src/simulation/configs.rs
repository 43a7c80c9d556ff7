//! Simulation parameters and configuration.
//!
//! `SimulationConfig` is the flat set of scalar parameters the engine
//! consumes. It can be serialized to and from JSON so a run can be fully
//! reproduced from a file.

use crate::errors::ConfigError;
use crate::evolution::{ReproductionPolicy, SurvivalPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default survival probability for every genotype class.
pub const DEFAULT_SURVIVAL: f64 = 0.99;
/// Default number of founders.
pub const DEFAULT_INITIAL_POPULATION: usize = 100;
/// Default number of generations.
pub const DEFAULT_GENERATIONS: usize = 20;
/// Default brood size mean.
pub const DEFAULT_OFFSPRING_MEAN: f64 = 2.5;
/// Default brood size standard deviation.
pub const DEFAULT_OFFSPRING_STD: f64 = 0.5;
/// Default carrying capacity.
pub const DEFAULT_CARRYING_CAPACITY: usize = 1000;
/// Default limit on extra survival passes while above capacity.
pub const DEFAULT_MAX_CAPACITY_PASSES: usize = 10_000;

/// High-level simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Survival probability of `AA` organisms, in (0, 1]
    pub hom_dom_survival: f64,
    /// Survival probability of `Aa` organisms, in (0, 1]
    pub het_survival: f64,
    /// Survival probability of `aa` organisms, in (0, 1]
    pub hom_rec_survival: f64,
    /// Number of heterozygous founders
    pub initial_population: usize,
    /// Total number of generations to simulate
    pub generations: usize,
    /// Mean of the Normal brood size distribution
    pub offspring_mean: f64,
    /// Standard deviation of the Normal brood size distribution
    pub offspring_std: f64,
    /// Population size that triggers repeated culling
    pub carrying_capacity: usize,
    /// Maximum extra survival passes per generation while above capacity.
    /// `None` retries without bound.
    pub max_capacity_passes: Option<usize>,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hom_dom_survival: DEFAULT_SURVIVAL,
            het_survival: DEFAULT_SURVIVAL,
            hom_rec_survival: DEFAULT_SURVIVAL,
            initial_population: DEFAULT_INITIAL_POPULATION,
            generations: DEFAULT_GENERATIONS,
            offspring_mean: DEFAULT_OFFSPRING_MEAN,
            offspring_std: DEFAULT_OFFSPRING_STD,
            carrying_capacity: DEFAULT_CARRYING_CAPACITY,
            max_capacity_passes: Some(DEFAULT_MAX_CAPACITY_PASSES),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Survival policy described by this configuration.
    pub fn survival_policy(&self) -> Result<SurvivalPolicy, ConfigError> {
        SurvivalPolicy::new(
            self.hom_dom_survival,
            self.het_survival,
            self.hom_rec_survival,
        )
    }

    /// Reproduction policy described by this configuration.
    pub fn reproduction_policy(&self) -> Result<ReproductionPolicy, ConfigError> {
        ReproductionPolicy::new(self.offspring_mean, self.offspring_std)
    }

    /// Check every parameter, failing on the first invalid one.
    ///
    /// Legal but hazardous settings (a survival probability of exactly 1.0,
    /// a negative brood mean, a zero carrying capacity, unbounded capacity
    /// retries) are reported with `tracing::warn!` instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let survival = self.survival_policy()?;
        self.reproduction_policy()?;

        if self.max_capacity_passes == Some(0) {
            return Err(ConfigError::invalid(
                "max_capacity_passes",
                "must be at least 1 (use null for unbounded retries)",
            ));
        }

        if survival.has_certain_survival() {
            tracing::warn!(
                "a survival probability of 1.0 can stall capacity enforcement \
                 once the population exceeds {}",
                self.carrying_capacity
            );
        }
        if self.offspring_mean < 0.0 {
            tracing::warn!(
                mean = self.offspring_mean,
                "negative offspring mean: most pairs will produce no offspring"
            );
        }
        if self.carrying_capacity == 0 {
            tracing::warn!("carrying capacity of 0: population dies out in the first generation");
        }
        if self.max_capacity_passes.is_none() {
            tracing::warn!("capacity enforcement is unbounded and may never terminate");
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write this configuration to a JSON file.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// One-line parameter summary, e.g.
    /// `AA = 0.99, Aa = 0.99, aa = 0.99, 20 Generations`.
    pub fn title(&self) -> String {
        format!(
            "AA = {}, Aa = {}, aa = {}, {} Generations",
            self.hom_dom_survival, self.het_survival, self.hom_rec_survival, self.generations
        )
    }
}
