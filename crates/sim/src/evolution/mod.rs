//! Evolution module providing survival and reproduction.
//!
//! This module implements the per-generation evolutionary processes:
//! - **Selection**: genotype-dependent survival trials
//! - **Reproduction**: Normal brood sizes and Mendelian segregation

pub mod reproduction;
pub mod selection;

pub use reproduction::ReproductionPolicy;
pub use selection::SurvivalPolicy;
