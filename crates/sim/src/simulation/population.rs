//! Population management and per-generation operations.
//!
//! This module provides the in-memory population container together with
//! the selection, capacity-enforcement, pairing and reproduction steps the
//! engine applies to it every generation.

use crate::errors::SimulationError;
use crate::evolution::{ReproductionPolicy, SurvivalPolicy};
use crate::genome::{Genotype, GenotypeClass};
use rand::Rng;
use rand::seq::SliceRandom;

/// A population of organisms at the simulated locus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    /// Genotypes of the living organisms
    genotypes: Vec<Genotype>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a new population from genotypes.
    pub fn new(genotypes: Vec<Genotype>) -> Self {
        Self {
            genotypes,
            generation: 0,
        }
    }

    /// `size` heterozygous (`Aa`) founders.
    pub fn heterozygous(size: usize) -> Self {
        Self::new(vec![Genotype::heterozygote(); size])
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of organisms in the population.
    pub fn size(&self) -> usize {
        self.genotypes.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }

    /// Get all genotypes as a slice.
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    /// Replace the entire population with new genotypes.
    pub fn set_genotypes(&mut self, genotypes: Vec<Genotype>) {
        self.genotypes = genotypes;
    }

    /// Number of organisms in `class`.
    pub fn count(&self, class: GenotypeClass) -> usize {
        self.genotypes
            .iter()
            .filter(|g| g.classify() == class)
            .count()
    }

    /// Apply one survival pass, removing the organisms that die.
    pub fn select<R: Rng + ?Sized>(&mut self, policy: &SurvivalPolicy, rng: &mut R) {
        self.genotypes = policy.select(&self.genotypes, rng);
    }

    /// Cull the population with repeated full survival passes until its size
    /// is at or below `capacity`.
    ///
    /// Every pass re-trials every remaining organism. Returns the number of
    /// passes performed (0 if the population was already within capacity).
    ///
    /// With `max_passes = Some(n)` the loop gives up after `n` passes and
    /// returns [`SimulationError::CapacityNotConverged`]. With `None` it
    /// retries without bound, which never terminates if every remaining
    /// organism has a survival probability of 1.0.
    pub fn enforce_capacity<R: Rng + ?Sized>(
        &mut self,
        policy: &SurvivalPolicy,
        capacity: usize,
        max_passes: Option<usize>,
        rng: &mut R,
    ) -> Result<usize, SimulationError> {
        let mut passes = 0;
        while self.genotypes.len() > capacity {
            if max_passes.is_some_and(|max| passes >= max) {
                return Err(SimulationError::CapacityNotConverged {
                    generation: self.generation,
                    passes,
                    size: self.genotypes.len(),
                    capacity,
                });
            }
            self.select(policy, rng);
            passes += 1;
        }
        Ok(passes)
    }

    /// Form mating pairs from a fresh random permutation of the population.
    ///
    /// The shuffled indices are split by position: even positions pair with
    /// the following odd position. If the population size is odd, the
    /// organism at the last shuffled position has no partner this generation.
    pub fn mating_pairs<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.genotypes.len()).collect();
        order.shuffle(rng);

        let group_a = order.iter().step_by(2);
        let group_b = order.iter().skip(1).step_by(2);
        group_a.zip(group_b).map(|(&a, &b)| (a, b)).collect()
    }

    /// Produce the offspring of `pairs` into a new buffer.
    ///
    /// For each pair, the brood size is drawn first, then each offspring is
    /// synthesized in turn.
    pub fn reproduce<R: Rng + ?Sized>(
        &self,
        pairs: &[(usize, usize)],
        policy: &ReproductionPolicy,
        rng: &mut R,
    ) -> Vec<Genotype> {
        let mut offspring = Vec::new();
        for &(i, j) in pairs {
            let parent1 = &self.genotypes[i];
            let parent2 = &self.genotypes[j];
            let brood = policy.offspring_count(rng);
            offspring.extend((0..brood).map(|_| policy.reproduce(parent1, parent2, rng)));
        }
        offspring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Allele;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_population_heterozygous() {
        let pop = Population::heterozygous(10);
        assert_eq!(pop.size(), 10);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.count(GenotypeClass::Heterozygous), 10);
        assert_eq!(pop.count(GenotypeClass::HomozygousDominant), 0);
    }

    #[test]
    fn test_population_empty() {
        let pop = Population::heterozygous(0);
        assert_eq!(pop.size(), 0);
        assert!(pop.is_empty());
    }

    #[test]
    fn test_population_increment_generation() {
        let mut pop = Population::heterozygous(1);
        pop.increment_generation();
        pop.increment_generation();
        assert_eq!(pop.generation(), 2);
    }

    #[test]
    fn test_population_set_genotypes() {
        let mut pop = Population::heterozygous(1);
        assert_eq!(pop.genotypes(), &[Genotype::heterozygote()]);

        pop.set_genotypes(vec![Genotype::homozygote(Allele::Recessive); 3]);
        assert_eq!(pop.size(), 3);
        assert_eq!(pop.count(GenotypeClass::HomozygousRecessive), 3);
    }

    #[test]
    fn test_enforce_capacity_terminates_below_capacity() {
        let policy = SurvivalPolicy::new(0.9, 0.9, 0.9).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::heterozygous(5000);

        let passes = pop.enforce_capacity(&policy, 1000, None, &mut rng).unwrap();

        assert!(pop.size() <= 1000);
        assert!(passes > 0);
    }

    #[test]
    fn test_enforce_capacity_noop_within_capacity() {
        let policy = SurvivalPolicy::new(0.5, 0.5, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pop = Population::heterozygous(10);

        let passes = pop.enforce_capacity(&policy, 10, Some(1), &mut rng).unwrap();

        assert_eq!(passes, 0);
        assert_eq!(pop.size(), 10);
    }

    #[test]
    fn test_enforce_capacity_zero_capacity_empties_population() {
        let policy = SurvivalPolicy::new(0.5, 0.5, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut pop = Population::heterozygous(50);

        pop.enforce_capacity(&policy, 0, None, &mut rng).unwrap();
        assert!(pop.is_empty());
    }

    #[test]
    fn test_enforce_capacity_reports_non_convergence() {
        let policy = SurvivalPolicy::new(1.0, 1.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pop = Population::heterozygous(20);

        let err = pop.enforce_capacity(&policy, 10, Some(25), &mut rng).unwrap_err();

        match err {
            SimulationError::CapacityNotConverged {
                passes,
                size,
                capacity,
                ..
            } => {
                assert_eq!(passes, 25);
                assert_eq!(size, 20);
                assert_eq!(capacity, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mating_pairs_even_population() {
        let pop = Population::heterozygous(10);
        let mut rng = StdRng::seed_from_u64(42);
        let pairs = pop.mating_pairs(&mut rng);

        assert_eq!(pairs.len(), 5);
        let used: HashSet<usize> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        assert_eq!(used.len(), 10);
    }

    #[test]
    fn test_mating_pairs_odd_population_leaves_one_out() {
        let pop = Population::heterozygous(7);
        let mut rng = StdRng::seed_from_u64(42);
        let pairs = pop.mating_pairs(&mut rng);

        assert_eq!(pairs.len(), 3);
        let used: HashSet<usize> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        assert_eq!(used.len(), 6);
        assert!(pairs.iter().all(|&(a, b)| a != b && a < 7 && b < 7));
    }

    #[test]
    fn test_mating_pairs_tiny_populations() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Population::heterozygous(0).mating_pairs(&mut rng).is_empty());
        assert!(Population::heterozygous(1).mating_pairs(&mut rng).is_empty());
        assert_eq!(Population::heterozygous(2).mating_pairs(&mut rng).len(), 1);
    }

    #[test]
    fn test_reproduce_brood_sizes() {
        let pop = Population::heterozygous(6);
        let policy = ReproductionPolicy::new(3.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let pairs = pop.mating_pairs(&mut rng);

        let offspring = pop.reproduce(&pairs, &policy, &mut rng);
        assert_eq!(offspring.len(), 9);
    }

    #[test]
    fn test_reproduce_without_pairs() {
        let pop = Population::heterozygous(1);
        let policy = ReproductionPolicy::new(3.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        assert!(pop.reproduce(&[], &policy, &mut rng).is_empty());
    }
}
