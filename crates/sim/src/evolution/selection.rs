//! Genotype-dependent survival.
//!
//! Each organism survives a generation with a probability that depends only
//! on its genotype class. Survival is decided by a single uniform draw per
//! organism, so a population filtered by [`SurvivalPolicy::select`] shrinks in
//! expectation by the weighted mean of the three probabilities.

use crate::errors::ConfigError;
use crate::genome::{Genotype, GenotypeClass};
use rand::Rng;

/// Per-class survival probabilities.
///
/// Probabilities must lie in `(0, 1]`. A value of exactly `1.0` is accepted,
/// but a population made up only of such genotypes can never be culled below
/// the carrying capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalPolicy {
    hom_dom: f64,
    het: f64,
    hom_rec: f64,
}

impl SurvivalPolicy {
    /// Create a new survival policy.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidProbability`] if any probability is not
    /// finite or lies outside `(0, 1]`.
    pub fn new(hom_dom: f64, het: f64, hom_rec: f64) -> Result<Self, ConfigError> {
        check_probability("hom_dom_survival", hom_dom)?;
        check_probability("het_survival", het)?;
        check_probability("hom_rec_survival", hom_rec)?;

        Ok(Self {
            hom_dom,
            het,
            hom_rec,
        })
    }

    /// Survival probability for a genotype class.
    #[inline]
    pub fn survival_probability(&self, class: GenotypeClass) -> f64 {
        match class {
            GenotypeClass::HomozygousDominant => self.hom_dom,
            GenotypeClass::Heterozygous => self.het,
            GenotypeClass::HomozygousRecessive => self.hom_rec,
        }
    }

    /// True if any class is guaranteed to survive every trial.
    pub fn has_certain_survival(&self) -> bool {
        GenotypeClass::ALL
            .iter()
            .any(|&c| self.survival_probability(c) >= 1.0)
    }

    /// Run one survival trial: draw `u` in `[0, 1)` and survive iff `u < p`.
    #[inline]
    pub fn trial<R: Rng + ?Sized>(&self, genotype: &Genotype, rng: &mut R) -> bool {
        rng.random::<f64>() < self.survival_probability(genotype.classify())
    }

    /// Apply one survival pass to `population`, keeping survivors in order.
    ///
    /// Exactly one random draw is consumed per organism, in population order.
    pub fn select<R: Rng + ?Sized>(&self, population: &[Genotype], rng: &mut R) -> Vec<Genotype> {
        population
            .iter()
            .filter(|g| self.trial(g, rng))
            .copied()
            .collect()
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
