use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the two variant forms of the simulated gene.
///
/// `Allele` is a compact, `Copy` two-valued enumeration. The display symbols
/// follow the usual Mendelian convention: an uppercase `A` for the dominant
/// allele and a lowercase `a` for the recessive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Allele {
    Dominant = 0,
    Recessive = 1,
}

impl Allele {
    /// Both alleles, dominant first.
    pub const ALL: [Allele; 2] = [Allele::Dominant, Allele::Recessive];

    /// Symbol used when printing genotypes (`A` or `a`).
    #[inline(always)]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dominant => 'A',
            Self::Recessive => 'a',
        }
    }

    /// Return true for the dominant allele.
    #[inline(always)]
    pub const fn is_dominant(self) -> bool {
        matches!(self, Self::Dominant)
    }

    /// Return true for the recessive allele.
    #[inline(always)]
    pub const fn is_recessive(self) -> bool {
        matches!(self, Self::Recessive)
    }
}

impl From<Allele> for char {
    #[inline(always)]
    fn from(allele: Allele) -> char {
        allele.symbol()
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Draw an allele uniformly at random.
#[inline]
pub fn random_allele<R: Rng + ?Sized>(rng: &mut R) -> Allele {
    if rng.random::<f64>() < 0.5 {
        Allele::Dominant
    } else {
        Allele::Recessive
    }
}
