//! Temporal analysis
//!
//! Functions for tracking changes over time in a statistics series.

use crate::statistics::{GenotypeStatistics, StatisticsSeries};
use allevo_sim::base::Allele;
use serde::Serialize;

/// Track the frequency of `allele` over time, in percent.
pub fn allele_trajectory(series: &StatisticsSeries, allele: Allele) -> Vec<f64> {
    series.iter().map(|s| s.allele_pct(allele)).collect()
}

/// First generation in which no organism survived.
pub fn extinction_generation(series: &StatisticsSeries) -> Option<usize> {
    series.iter().find(|s| s.is_extinct()).map(|s| s.generation)
}

/// First non-extinct generation in which one allele makes up every allele
/// in the population, together with the fixed allele.
pub fn fixation_generation(series: &StatisticsSeries) -> Option<(usize, Allele)> {
    series.iter().filter(|s| !s.is_extinct()).find_map(|s| {
        Allele::ALL
            .into_iter()
            .find(|&a| s.allele_count(a) == 2 * s.total)
            .map(|a| (s.generation, a))
    })
}

/// Genotype shares expected under Hardy-Weinberg equilibrium, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HardyWeinbergExpectation {
    /// p²
    pub hom_dom_pct: f64,
    /// 2pq
    pub het_pct: f64,
    /// q²
    pub hom_rec_pct: f64,
}

impl HardyWeinbergExpectation {
    /// Largest absolute difference, in percentage points, between the
    /// expected and observed genotype shares.
    pub fn max_deviation(&self, observed: &GenotypeStatistics) -> f64 {
        [
            self.hom_dom_pct - observed.hom_dom_pct,
            self.het_pct - observed.het_pct,
            self.hom_rec_pct - observed.hom_rec_pct,
        ]
        .into_iter()
        .map(f64::abs)
        .fold(0.0, f64::max)
    }
}

/// Expected genotype shares given the observed allele frequencies of one
/// generation. An extinct generation yields all zeros.
pub fn hardy_weinberg_expected(stats: &GenotypeStatistics) -> HardyWeinbergExpectation {
    if stats.is_extinct() {
        return HardyWeinbergExpectation::default();
    }
    let p = stats.dominant_pct / 100.0;
    let q = stats.recessive_pct / 100.0;
    HardyWeinbergExpectation {
        hom_dom_pct: 100.0 * p * p,
        het_pct: 100.0 * 2.0 * p * q,
        hom_rec_pct: 100.0 * q * q,
    }
}
