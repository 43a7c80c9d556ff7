//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use allevo_sim::prelude::*;
//!
//! let g = Genotype::new(Allele::Dominant, Allele::Recessive);
//! assert_eq!(g.classify(), GenotypeClass::Heterozygous);
//! ```

pub use crate::base::Allele;
pub use crate::errors::{self, ConfigError, SimulationError};
pub use crate::evolution::{ReproductionPolicy, SurvivalPolicy};
pub use crate::genome::{Genotype, GenotypeClass};
pub use crate::simulation::{
    GenerationRecord, Phase, Population, Simulation, SimulationBuilder, SimulationConfig,
};
