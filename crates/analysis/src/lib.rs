//! Genotype and allele statistics for allevo
//!
//! This crate turns the generation history recorded by `allevo-sim` into
//! per-generation percentage series:
//! - Genotype shares (`AA`, `Aa`, `aa`)
//! - Allele shares (p and q)
//! - Total surviving population
//! - Temporal summaries (extinction, fixation, Hardy-Weinberg comparison)

pub mod statistics;
pub mod temporal;
pub mod utils;

// Re-export commonly used items
pub use statistics::{GenotypeStatistics, StatisticsSeries, aggregate, genotype_statistics};
pub use temporal::{
    HardyWeinbergExpectation, allele_trajectory, extinction_generation, fixation_generation,
    hardy_weinberg_expected,
};
pub use utils::{percentage, safe_denominator};
