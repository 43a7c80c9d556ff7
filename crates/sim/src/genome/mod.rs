//! Genotype representation for a single diallelic locus.

mod genotype;

pub use genotype::{Genotype, GenotypeClass, random_genotype};
