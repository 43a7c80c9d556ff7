//! Offspring number and offspring genotype.
//!
//! Every mating pair draws its brood size from a Normal distribution rounded
//! to the nearest integer, then produces each offspring by taking one allele
//! at random from each parent (Mendelian segregation).

use crate::errors::ConfigError;
use crate::genome::Genotype;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Brood size distribution and Mendelian offspring synthesis.
#[derive(Debug, Clone, Copy)]
pub struct ReproductionPolicy {
    mean: f64,
    std_dev: f64,
    brood: Normal<f64>,
}

impl ReproductionPolicy {
    /// Create a new reproduction policy from the brood size mean and standard
    /// deviation.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] if the mean is not finite or
    /// the standard deviation is negative or not finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ConfigError> {
        if !mean.is_finite() {
            return Err(ConfigError::invalid("offspring_mean", format!("{mean} is not finite")));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ConfigError::invalid(
                "offspring_std",
                format!("{std_dev} must be finite and >= 0.0"),
            ));
        }
        let brood = Normal::new(mean, std_dev)
            .map_err(|e| ConfigError::invalid("offspring_std", e.to_string()))?;

        Ok(Self {
            mean,
            std_dev,
            brood,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Draw the number of offspring for one mating pair.
    ///
    /// The Normal draw is rounded half-to-even (2.5 → 2, 3.5 → 4) without any
    /// clamping beforehand. Rounded values at or below zero mean no offspring.
    pub fn offspring_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        brood_size(self.brood.sample(rng))
    }

    /// Produce one offspring genotype from two parents.
    ///
    /// One allele is picked uniformly from each parent; the first allele of
    /// the result comes from `parent1`. Repeated calls are independent.
    pub fn reproduce<R: Rng + ?Sized>(
        &self,
        parent1: &Genotype,
        parent2: &Genotype,
        rng: &mut R,
    ) -> Genotype {
        let a1 = gamete(parent1, rng);
        let a2 = gamete(parent2, rng);
        Genotype::new(a1, a2)
    }
}

#[inline]
fn gamete<R: Rng + ?Sized>(parent: &Genotype, rng: &mut R) -> crate::base::Allele {
    if rng.random::<f64>() < 0.5 {
        parent.first()
    } else {
        parent.second()
    }
}

/// Round a raw brood-size draw half-to-even; non-positive results become 0.
#[inline]
pub(crate) fn brood_size(raw: f64) -> usize {
    let rounded = raw.round_ties_even();
    if rounded > 0.0 { rounded as usize } else { 0 }
}
