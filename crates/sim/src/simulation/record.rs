use crate::genome::{Genotype, GenotypeClass};
use serde::{Deserialize, Serialize};

/// The population that survived selection and capacity enforcement in one
/// generation.
///
/// Records are appended once per completed generation and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    generation: usize,
    survivors: Vec<Genotype>,
}

impl GenerationRecord {
    pub fn new(generation: usize, survivors: Vec<Genotype>) -> Self {
        Self {
            generation,
            survivors,
        }
    }

    /// Zero-based generation index.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Surviving genotypes.
    pub fn survivors(&self) -> &[Genotype] {
        &self.survivors
    }

    /// Number of survivors.
    pub fn len(&self) -> usize {
        self.survivors.len()
    }

    /// True if the population had died out by this generation.
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }

    /// Number of survivors in `class`.
    pub fn count(&self, class: GenotypeClass) -> usize {
        self.survivors
            .iter()
            .filter(|g| g.classify() == class)
            .count()
    }
}
