//! Per-generation genotype and allele statistics.
//!
//! Each [`GenerationRecord`] is reduced to counts and percentages of the
//! three genotype classes and the two alleles. Genotype percentages are taken
//! over the number of survivors, allele percentages over the number of
//! alleles (twice the survivors).

use crate::utils::percentage;
use allevo_sim::base::Allele;
use allevo_sim::genome::GenotypeClass;
use allevo_sim::simulation::GenerationRecord;
use rayon::prelude::*;
use serde::Serialize;

/// Statistics of one recorded generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GenotypeStatistics {
    pub generation: usize,
    /// Number of survivors. Stays 0 for an extinct generation.
    pub total: usize,
    pub hom_dom: usize,
    pub het: usize,
    pub hom_rec: usize,
    pub dominant_alleles: usize,
    pub recessive_alleles: usize,
    pub hom_dom_pct: f64,
    pub het_pct: f64,
    pub hom_rec_pct: f64,
    pub dominant_pct: f64,
    pub recessive_pct: f64,
}

impl GenotypeStatistics {
    /// Build statistics from the three class counts.
    pub fn from_counts(generation: usize, hom_dom: usize, het: usize, hom_rec: usize) -> Self {
        let total = hom_dom + het + hom_rec;
        let dominant_alleles = 2 * hom_dom + het;
        let recessive_alleles = 2 * hom_rec + het;
        let allele_total = dominant_alleles + recessive_alleles;

        Self {
            generation,
            total,
            hom_dom,
            het,
            hom_rec,
            dominant_alleles,
            recessive_alleles,
            hom_dom_pct: percentage(hom_dom, total),
            het_pct: percentage(het, total),
            hom_rec_pct: percentage(hom_rec, total),
            dominant_pct: percentage(dominant_alleles, allele_total),
            recessive_pct: percentage(recessive_alleles, allele_total),
        }
    }

    /// Number of survivors in `class`.
    pub fn count(&self, class: GenotypeClass) -> usize {
        match class {
            GenotypeClass::HomozygousDominant => self.hom_dom,
            GenotypeClass::Heterozygous => self.het,
            GenotypeClass::HomozygousRecessive => self.hom_rec,
        }
    }

    /// Share of survivors in `class`, in percent.
    pub fn class_pct(&self, class: GenotypeClass) -> f64 {
        match class {
            GenotypeClass::HomozygousDominant => self.hom_dom_pct,
            GenotypeClass::Heterozygous => self.het_pct,
            GenotypeClass::HomozygousRecessive => self.hom_rec_pct,
        }
    }

    pub fn allele_count(&self, allele: Allele) -> usize {
        match allele {
            Allele::Dominant => self.dominant_alleles,
            Allele::Recessive => self.recessive_alleles,
        }
    }

    /// Share of `allele` among all alleles, in percent.
    pub fn allele_pct(&self, allele: Allele) -> f64 {
        match allele {
            Allele::Dominant => self.dominant_pct,
            Allele::Recessive => self.recessive_pct,
        }
    }

    /// True if no organism survived this generation.
    pub fn is_extinct(&self) -> bool {
        self.total == 0
    }
}

/// Compute the statistics of a single generation.
pub fn genotype_statistics(record: &GenerationRecord) -> GenotypeStatistics {
    let (mut hom_dom, mut het, mut hom_rec) = (0, 0, 0);
    for genotype in record.survivors() {
        match genotype.classify() {
            GenotypeClass::HomozygousDominant => hom_dom += 1,
            GenotypeClass::Heterozygous => het += 1,
            GenotypeClass::HomozygousRecessive => hom_rec += 1,
        }
    }
    GenotypeStatistics::from_counts(record.generation(), hom_dom, het, hom_rec)
}

/// Aligned per-generation statistic series.
///
/// Index `i` of every series describes the `i`-th recorded generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatisticsSeries {
    rows: Vec<GenotypeStatistics>,
}

impl StatisticsSeries {
    pub fn new(rows: Vec<GenotypeStatistics>) -> Self {
        Self { rows }
    }

    /// Number of generations covered.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-generation rows.
    pub fn rows(&self) -> &[GenotypeStatistics] {
        &self.rows
    }

    pub fn get(&self, generation: usize) -> Option<&GenotypeStatistics> {
        self.rows.get(generation)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenotypeStatistics> {
        self.rows.iter()
    }

    fn column<T>(&self, f: impl Fn(&GenotypeStatistics) -> T) -> Vec<T> {
        self.rows.iter().map(f).collect()
    }

    /// Percentage of `AA` survivors per generation.
    pub fn hom_dom_pct(&self) -> Vec<f64> {
        self.column(|s| s.hom_dom_pct)
    }

    /// Percentage of `Aa` survivors per generation.
    pub fn het_pct(&self) -> Vec<f64> {
        self.column(|s| s.het_pct)
    }

    /// Percentage of `aa` survivors per generation.
    pub fn hom_rec_pct(&self) -> Vec<f64> {
        self.column(|s| s.hom_rec_pct)
    }

    /// Dominant allele frequency (p) per generation, in percent.
    pub fn dominant_pct(&self) -> Vec<f64> {
        self.column(|s| s.dominant_pct)
    }

    /// Recessive allele frequency (q) per generation, in percent.
    pub fn recessive_pct(&self) -> Vec<f64> {
        self.column(|s| s.recessive_pct)
    }

    /// Number of survivors per generation.
    pub fn total(&self) -> Vec<usize> {
        self.column(|s| s.total)
    }
}

impl<'a> IntoIterator for &'a StatisticsSeries {
    type Item = &'a GenotypeStatistics;
    type IntoIter = std::slice::Iter<'a, GenotypeStatistics>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Compute the statistics of every recorded generation.
///
/// Generations are processed in parallel; the output keeps history order.
pub fn aggregate(history: &[GenerationRecord]) -> StatisticsSeries {
    let rows = history.par_iter().map(genotype_statistics).collect();
    StatisticsSeries::new(rows)
}
