//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for a single-locus, two-allele
//! population simulation. It includes modules for defining alleles and
//! genotypes, genotype-dependent survival, Mendelian reproduction, and the
//! engine that runs generations under a carrying capacity.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::Allele;
pub use genome::{Genotype, GenotypeClass};
