//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations. Unset
//! parameters keep the defaults of [`SimulationConfig`].

use crate::errors::SimulationError;
use crate::simulation::{Simulation, SimulationConfig};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use allevo_sim::simulation::SimulationBuilder;
///
/// // Simple simulation with defaults
/// let sim = SimulationBuilder::new().build().unwrap();
/// assert_eq!(sim.population().size(), 100);
///
/// // Selection against the recessive homozygote
/// let mut sim = SimulationBuilder::new()
///     .survival(0.99, 0.99, 0.5)
///     .generations(10)
///     .seed(42)
///     .build()
///     .unwrap();
/// sim.run().unwrap();
/// assert_eq!(sim.history().len(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Set the survival probabilities of `AA`, `Aa` and `aa`.
    pub fn survival(mut self, hom_dom: f64, het: f64, hom_rec: f64) -> Self {
        self.config.hom_dom_survival = hom_dom;
        self.config.het_survival = het;
        self.config.hom_rec_survival = hom_rec;
        self
    }

    /// Set the number of heterozygous founders.
    pub fn initial_population(mut self, size: usize) -> Self {
        self.config.initial_population = size;
        self
    }

    /// Set the number of generations to run.
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the mean and standard deviation of the brood size distribution.
    pub fn offspring(mut self, mean: f64, std_dev: f64) -> Self {
        self.config.offspring_mean = mean;
        self.config.offspring_std = std_dev;
        self
    }

    pub fn carrying_capacity(mut self, capacity: usize) -> Self {
        self.config.carrying_capacity = capacity;
        self
    }

    /// Limit the survival passes capacity enforcement may take per
    /// generation. `None` means unbounded.
    pub fn max_capacity_passes(mut self, passes: Option<usize>) -> Self {
        self.config.max_capacity_passes = passes;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The configuration assembled so far.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validate the configuration without building a simulation.
    pub fn build_config(self) -> Result<SimulationConfig, SimulationError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the simulation.
    ///
    /// # Errors
    /// Returns [`SimulationError::Config`] if any parameter is invalid.
    pub fn build(self) -> Result<Simulation, SimulationError> {
        Simulation::new(self.config)
    }
}
