use core::fmt;

use crate::base::{Allele, random_allele};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The three mutually exclusive genotype categories at a diallelic locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GenotypeClass {
    HomozygousDominant,
    Heterozygous,
    HomozygousRecessive,
}

impl GenotypeClass {
    /// All classes in reporting order.
    pub const ALL: [GenotypeClass; 3] = [
        GenotypeClass::HomozygousDominant,
        GenotypeClass::Heterozygous,
        GenotypeClass::HomozygousRecessive,
    ];

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomozygousDominant => "Homozygous Dominant",
            Self::Heterozygous => "Heterozygous",
            Self::HomozygousRecessive => "Homozygous Recessive",
        }
    }

    /// Canonical two-symbol notation (`AA`, `Aa`, `aa`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::HomozygousDominant => "AA",
            Self::Heterozygous => "Aa",
            Self::HomozygousRecessive => "aa",
        }
    }

    /// Number of dominant alleles carried by a genotype of this class.
    pub const fn dominant_alleles(self) -> usize {
        match self {
            Self::HomozygousDominant => 2,
            Self::Heterozygous => 1,
            Self::HomozygousRecessive => 0,
        }
    }

    /// Number of recessive alleles carried by a genotype of this class.
    pub const fn recessive_alleles(self) -> usize {
        2 - self.dominant_alleles()
    }
}

impl fmt::Display for GenotypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pair of alleles an organism carries at the locus.
///
/// The pair is stored in the order it was produced (the first allele comes
/// from the first parent), but classification ignores the order: `Aa` and
/// `aA` are both heterozygous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genotype(pub Allele, pub Allele);

impl Genotype {
    /// Create a genotype from two alleles.
    #[inline]
    pub const fn new(first: Allele, second: Allele) -> Self {
        Self(first, second)
    }

    /// The founder genotype `Aa`.
    #[inline]
    pub const fn heterozygote() -> Self {
        Self(Allele::Dominant, Allele::Recessive)
    }

    /// Homozygous genotype carrying two copies of `allele`.
    #[inline]
    pub const fn homozygote(allele: Allele) -> Self {
        Self(allele, allele)
    }

    #[inline]
    pub const fn first(&self) -> Allele {
        self.0
    }

    #[inline]
    pub const fn second(&self) -> Allele {
        self.1
    }

    /// Both alleles as an array.
    #[inline]
    pub const fn alleles(&self) -> [Allele; 2] {
        [self.0, self.1]
    }

    /// Classify this genotype. Total over the allele domain.
    #[inline]
    pub const fn classify(&self) -> GenotypeClass {
        match (self.0, self.1) {
            (Allele::Dominant, Allele::Dominant) => GenotypeClass::HomozygousDominant,
            (Allele::Recessive, Allele::Recessive) => GenotypeClass::HomozygousRecessive,
            _ => GenotypeClass::Heterozygous,
        }
    }

    #[inline]
    pub const fn is_homozygous_dominant(&self) -> bool {
        matches!(self.classify(), GenotypeClass::HomozygousDominant)
    }

    #[inline]
    pub const fn is_heterozygous(&self) -> bool {
        matches!(self.classify(), GenotypeClass::Heterozygous)
    }

    #[inline]
    pub const fn is_homozygous_recessive(&self) -> bool {
        matches!(self.classify(), GenotypeClass::HomozygousRecessive)
    }

    /// Number of dominant alleles (0, 1 or 2).
    #[inline]
    pub const fn dominant_count(&self) -> usize {
        self.classify().dominant_alleles()
    }

    /// Number of recessive alleles (0, 1 or 2).
    #[inline]
    pub const fn recessive_count(&self) -> usize {
        self.classify().recessive_alleles()
    }
}

impl From<(Allele, Allele)> for Genotype {
    fn from((first, second): (Allele, Allele)) -> Self {
        Self(first, second)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Draw a genotype from two independent uniform allele draws.
pub fn random_genotype<R: Rng + ?Sized>(rng: &mut R) -> Genotype {
    let first = random_allele(rng);
    let second = random_allele(rng);
    Genotype(first, second)
}
