//! Simulation engine for the generation loop.
//!
//! This module provides the main simulation loop that orchestrates
//! selection, carrying-capacity enforcement, mating and reproduction across
//! generations, and records the survivors of every generation.

use crate::errors::SimulationError;
use crate::evolution::{ReproductionPolicy, SurvivalPolicy};
use crate::simulation::{GenerationRecord, Population, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;

/// Position of the simulation within the generation pipeline.
///
/// After construction the simulation is `Initializing` (or `Finished` if no
/// generations were requested). Each call to [`Simulation::step`] moves
/// through `Selecting`, `EnforcingCapacity`, `Recorded`, `Mating` and
/// `Reproducing`, and the last step ends in `Finished`. A step that fails
/// capacity enforcement ends in `Failed`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initializing,
    Selecting,
    EnforcingCapacity,
    Recorded,
    Mating,
    Reproducing,
    Finished,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initializing => "initializing",
            Self::Selecting => "selecting",
            Self::EnforcingCapacity => "enforcing-capacity",
            Self::Recorded => "recorded",
            Self::Mating => "mating",
            Self::Reproducing => "reproducing",
            Self::Finished => "finished",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Main simulation engine.
///
/// The engine exclusively owns the current population, the append-only
/// generation history and the random source. All random draws come from the
/// single `rng`, in a fixed order, so a seeded run is fully reproducible.
#[derive(Debug)]
pub struct Simulation<R = Xoshiro256PlusPlus> {
    /// Current (breeding) population
    population: Population,
    /// Survivors of every completed generation
    history: Vec<GenerationRecord>,
    /// Genotype-dependent survival
    survival: SurvivalPolicy,
    /// Brood sizes and offspring genotypes
    reproduction: ReproductionPolicy,
    /// Simulation configuration
    config: SimulationConfig,
    /// Seed the RNG was created from, if known
    seed: Option<u64>,
    phase: Phase,
    rng: R,
}

impl Simulation<Xoshiro256PlusPlus> {
    /// Create a new simulation from a configuration.
    ///
    /// Uses Xoshiro256++ seeded from `config.seed`. Without a configured seed
    /// a fresh one is drawn from the thread RNG; it is available through
    /// [`Simulation::seed`] so the run can be repeated.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut sim = Self::with_rng(config, rng)?;
        sim.seed = Some(seed);
        Ok(sim)
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a new simulation drawing from an explicitly provided random
    /// source. `config.seed` is ignored.
    ///
    /// # Errors
    /// Fails with [`SimulationError::Config`] if the configuration is invalid.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, SimulationError> {
        config.validate()?;
        let survival = config.survival_policy()?;
        let reproduction = config.reproduction_policy()?;

        let population = Population::heterozygous(config.initial_population);
        let phase = if config.generations == 0 {
            Phase::Finished
        } else {
            Phase::Initializing
        };

        Ok(Self {
            population,
            history: Vec::with_capacity(config.generations),
            survival,
            reproduction,
            config,
            seed: None,
            phase,
            rng,
        })
    }

    /// Get the current breeding population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the current generation number (number of completed steps).
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Get the recorded survivors of every completed generation.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Consume the simulation, returning its history.
    pub fn into_history(self) -> Vec<GenerationRecord> {
        self.history
    }

    /// Get reference to simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn survival_policy(&self) -> &SurvivalPolicy {
        &self.survival
    }

    pub fn reproduction_policy(&self) -> &ReproductionPolicy {
        &self.reproduction
    }

    /// Seed the RNG was created from. `None` when the RNG was injected.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once all configured generations have been simulated.
    pub fn is_finished(&self) -> bool {
        self.generation() >= self.config.generations
    }

    fn enter(&mut self, phase: Phase) {
        tracing::trace!(from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }

    /// Advance simulation by one generation and return the record of its
    /// survivors.
    ///
    /// # Errors
    /// - [`SimulationError::AlreadyFinished`] if every generation has run.
    /// - [`SimulationError::CapacityNotConverged`] if capacity enforcement
    ///   exceeds `max_capacity_passes`. The simulation moves to
    ///   [`Phase::Failed`] and the partially culled population is never bred.
    /// - [`SimulationError::Halted`] on any call after such a failure.
    pub fn step(&mut self) -> Result<&GenerationRecord, SimulationError> {
        let total = self.config.generations;
        let generation = self.generation();
        if self.phase == Phase::Failed {
            return Err(SimulationError::Halted { generation });
        }
        if generation >= total {
            return Err(SimulationError::AlreadyFinished { generations: total });
        }

        let span = tracing::debug_span!("generation", generation);
        let _guard = span.enter();

        // 1. Survival trials
        self.enter(Phase::Selecting);
        let born = self.population.size();
        self.population.select(&self.survival, &mut self.rng);
        let selected = self.population.size();

        // 2. Repeated culling above the carrying capacity
        self.enter(Phase::EnforcingCapacity);
        let passes = match self.population.enforce_capacity(
            &self.survival,
            self.config.carrying_capacity,
            self.config.max_capacity_passes,
            &mut self.rng,
        ) {
            Ok(passes) => passes,
            Err(err) => {
                tracing::warn!(%err, "halting simulation");
                self.enter(Phase::Failed);
                return Err(err);
            }
        };

        // 3. Record the survivors of this generation
        self.enter(Phase::Recorded);
        let survivors = self.population.size();
        self.history.push(GenerationRecord::new(
            generation,
            self.population.genotypes().to_vec(),
        ));

        // 4. Random pairing
        self.enter(Phase::Mating);
        let pairs = self.population.mating_pairs(&mut self.rng);

        // 5. Offspring into a fresh buffer, which becomes the next population
        self.enter(Phase::Reproducing);
        let offspring = self
            .population
            .reproduce(&pairs, &self.reproduction, &mut self.rng);

        tracing::debug!(
            born,
            selected,
            capacity_passes = passes,
            survivors,
            pairs = pairs.len(),
            offspring = offspring.len(),
            "generation complete"
        );
        if survivors == 0 && born > 0 {
            tracing::info!(generation, "population died out");
        }

        self.population.set_genotypes(offspring);
        self.population.increment_generation();

        if self.is_finished() {
            self.enter(Phase::Finished);
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// Run simulation for the configured number of generations.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        self.run_with(|_| {})
    }

    /// Run the remaining generations, calling `on_generation` after each one
    /// is recorded.
    pub fn run_with<F>(&mut self, mut on_generation: F) -> Result<(), SimulationError>
    where
        F: FnMut(&GenerationRecord),
    {
        tracing::info!(
            generations = self.config.generations,
            initial_population = self.config.initial_population,
            carrying_capacity = self.config.carrying_capacity,
            seed = ?self.seed,
            "starting simulation"
        );

        while !self.is_finished() {
            let record = self.step()?;
            on_generation(record);
        }

        tracing::info!(
            generations = self.history.len(),
            final_survivors = self.history.last().map_or(0, GenerationRecord::len),
            "simulation finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::GenotypeClass;
    use crate::simulation::SimulationBuilder;
    use rand::rngs::StdRng;

    /// Helper function to create a test simulation with standard configuration.
    ///
    /// Creates a simulation with:
    /// - Initial population: 50
    /// - Generations: 5
    /// - Survival: 0.9 for every genotype
    /// - Brood size: Normal(2.5, 0.5)
    /// - Carrying capacity: 200
    /// - Seed: 42 (reproducible)
    fn create_test_simulation() -> Simulation {
        SimulationBuilder::new()
            .initial_population(50)
            .generations(5)
            .survival(0.9, 0.9, 0.9)
            .offspring(2.5, 0.5)
            .carrying_capacity(200)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_simulation_new() {
        let sim = create_test_simulation();

        assert_eq!(sim.population().size(), 50);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.phase(), Phase::Initializing);
        assert_eq!(sim.seed(), Some(42));
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_simulation_initial_population_is_heterozygous() {
        let sim = create_test_simulation();
        assert_eq!(sim.population().count(GenotypeClass::Heterozygous), 50);
    }

    #[test]
    fn test_simulation_step() {
        let mut sim = create_test_simulation();

        let record = sim.step().unwrap();
        assert_eq!(record.generation(), 0);
        assert!(record.len() <= 50);
        assert!(record.survivors().iter().all(|g| g.is_heterozygous()));

        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.phase(), Phase::Reproducing);
    }

    #[test]
    fn test_simulation_run() {
        let mut sim = create_test_simulation();
        sim.run().unwrap();

        assert_eq!(sim.generation(), 5);
        assert_eq!(sim.history().len(), 5);
        assert_eq!(sim.phase(), Phase::Finished);
        assert!(sim.is_finished());

        for (i, record) in sim.history().iter().enumerate() {
            assert_eq!(record.generation(), i);
            assert!(record.len() <= 200);
        }
    }

    #[test]
    fn test_step_after_finish_fails() {
        let mut sim = create_test_simulation();
        sim.run().unwrap();

        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimulationError::AlreadyFinished { generations: 5 }));
        assert_eq!(sim.history().len(), 5);
    }

    #[test]
    fn test_run_with_callback_sees_every_generation() {
        let mut sim = create_test_simulation();
        let mut seen = Vec::new();
        sim.run_with(|record| seen.push(record.generation())).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_generations() {
        let mut sim = SimulationBuilder::new().generations(0).seed(1).build().unwrap();

        assert_eq!(sim.phase(), Phase::Finished);
        sim.run().unwrap();
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut sim1 = create_test_simulation();
        let mut sim2 = create_test_simulation();
        sim1.run().unwrap();
        sim2.run().unwrap();
        assert_eq!(sim1.history(), sim2.history());
    }

    #[test]
    fn test_injected_rng() {
        let config = SimulationConfig {
            initial_population: 20,
            generations: 3,
            ..Default::default()
        };
        let mut sim1 = Simulation::with_rng(config.clone(), StdRng::seed_from_u64(7)).unwrap();
        let mut sim2 = Simulation::with_rng(config, StdRng::seed_from_u64(7)).unwrap();
        sim1.run().unwrap();
        sim2.run().unwrap();

        assert_eq!(sim1.seed(), None);
        assert_eq!(sim1.into_history(), sim2.into_history());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SimulationConfig {
            hom_dom_survival: 1.5,
            ..Default::default()
        };
        let err = Simulation::new(config).unwrap_err();
        assert!(matches!(err, SimulationError::Config(_)));
    }

    #[test]
    fn test_capacity_failure_is_terminal() {
        let mut sim = SimulationBuilder::new()
            .initial_population(50)
            .generations(3)
            .survival(1.0, 1.0, 1.0)
            .carrying_capacity(10)
            .max_capacity_passes(Some(5))
            .seed(3)
            .build()
            .unwrap();

        let err = sim.run().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::CapacityNotConverged {
                generation: 0,
                passes: 5,
                size: 50,
                capacity: 10,
            }
        ));
        assert_eq!(sim.phase(), Phase::Failed);
        assert!(sim.history().is_empty());
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_step_after_capacity_failure_keeps_failing() {
        let mut sim = SimulationBuilder::new()
            .initial_population(4000)
            .generations(3)
            .survival(0.5, 0.5, 0.5)
            .carrying_capacity(10)
            .max_capacity_passes(Some(1))
            .seed(1)
            .build()
            .unwrap();

        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimulationError::CapacityNotConverged { passes: 1, .. }));
        let culled = sim.population().size();

        for _ in 0..5 {
            let err = sim.step().unwrap_err();
            assert!(matches!(err, SimulationError::Halted { generation: 0 }));
        }
        assert_eq!(sim.population().size(), culled);
        assert_eq!(sim.phase(), Phase::Failed);
        assert!(sim.history().is_empty());
        assert!(sim.run().is_err());
    }
}
