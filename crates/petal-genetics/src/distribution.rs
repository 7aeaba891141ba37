// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Genetic distributions and breeding
//!
//! A distribution is a dense vector of unnormalized integer weights indexed
//! by packed genotype: 64 entries for three genes, 256 for four. Only indices
//! of valid genotypes ever carry weight.

use tracing::trace;

use crate::cross::cross;
use crate::gene::GeneCount;
use crate::genotype::Genotype;
use crate::rational::{gcd, Odds};

/// Cross row standing in for the absent fourth gene of a 3-gene species:
/// always state 0, weight 1, so indices stay below 64.
const ABSENT_GENE: [u64; 3] = [1, 0, 0];

/// Integer-weighted distribution over the genotypes of one gene count
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneticDistribution {
    genes: GeneCount,
    weights: Vec<u64>,
}

impl GeneticDistribution {
    /// Distribution with no weight anywhere
    pub fn empty(genes: GeneCount) -> Self {
        Self {
            genes,
            weights: vec![0; genes.index_space()],
        }
    }

    /// Point mass: weight 1 at `genotype`, 0 elsewhere
    pub fn from_genotype(genotype: Genotype) -> Self {
        let mut dist = Self::empty(genotype.gene_count());
        dist.weights[genotype.index()] = 1;
        dist
    }

    #[inline]
    pub fn gene_count(&self) -> GeneCount {
        self.genes
    }

    /// Weight at `genotype`
    ///
    /// # Panics
    /// If the genotype's gene count differs from the distribution's.
    pub fn weight(&self, genotype: Genotype) -> u64 {
        assert_eq!(genotype.gene_count(), self.genes, "gene count mismatch");
        self.weights[genotype.index()]
    }

    /// Raw weights indexed by packed genotype
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Add `weight` at `genotype`, returning `None` on overflow
    pub fn add_weight(&mut self, genotype: Genotype, weight: u64) -> Option<()> {
        assert_eq!(genotype.gene_count(), self.genes, "gene count mismatch");
        let slot = &mut self.weights[genotype.index()];
        *slot = slot.checked_add(weight)?;
        Some(())
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// True when no genotype carries weight
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    /// Number of genotypes with nonzero weight
    pub fn support_size(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    /// Genotypes with nonzero weight, in packed-index order
    pub fn iter(&self) -> impl Iterator<Item = (Genotype, u64)> + '_ {
        let genes = self.genes;
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, &w)| w != 0)
            .map(move |(index, &w)| (Genotype::from_index_unchecked(index, genes), w))
    }

    /// Nonzero outcomes with their exact share of the total weight
    pub fn odds(&self) -> Vec<(Genotype, Odds)> {
        let total = self.total_weight();
        self.iter()
            .map(|(genotype, weight)| (genotype, Odds::new(weight, total)))
            .collect()
    }

    /// Divide every weight by the GCD of the nonzero weights.
    ///
    /// An all-zero distribution is left untouched.
    pub fn reduce(&mut self) {
        let divisor = self
            .weights
            .iter()
            .filter(|&&w| w != 0)
            .fold(0, |acc, &w| gcd(acc, w));
        if divisor > 1 {
            for w in &mut self.weights {
                *w /= divisor;
            }
        }
    }

    /// Reduced copy
    pub fn reduced(mut self) -> Self {
        self.reduce();
        self
    }

    /// Offspring distribution of crossing `self` with `other`.
    ///
    /// Every pair of parent genotypes with nonzero weight contributes
    /// `wa * wb * w0 * w1 * w2 [* w3]` at each combination of per-gene
    /// offspring states, where `wi` comes from the cross table for gene `i`.
    /// The result is reduced to lowest integer terms.
    ///
    /// Weights are `u64`; a parent total weight up to 2^24 on each side keeps
    /// the accumulation in range.
    ///
    /// # Panics
    /// If the two distributions have different gene counts.
    pub fn breed(&self, other: &GeneticDistribution) -> GeneticDistribution {
        assert_eq!(
            self.genes, other.genes,
            "cannot breed distributions with different gene counts"
        );

        let four_genes = self.genes == GeneCount::Four;
        let mut result = Self::empty(self.genes);

        for (a, wa) in self.iter() {
            for (b, wb) in other.iter() {
                let w = wa * wb;
                let c0 = cross(a.gene(0), b.gene(0));
                let c1 = cross(a.gene(1), b.gene(1));
                let c2 = cross(a.gene(2), b.gene(2));
                let c3 = if four_genes {
                    cross(a.gene(3), b.gene(3))
                } else {
                    &ABSENT_GENE
                };

                for (s0, &w0) in c0.iter().enumerate().filter(|(_, &x)| x != 0) {
                    let w0 = w * w0;
                    for (s1, &w1) in c1.iter().enumerate().filter(|(_, &x)| x != 0) {
                        let w1 = w0 * w1;
                        for (s2, &w2) in c2.iter().enumerate().filter(|(_, &x)| x != 0) {
                            let w2 = w1 * w2;
                            for (s3, &w3) in c3.iter().enumerate().filter(|(_, &x)| x != 0) {
                                let index = s0 | (s1 << 2) | (s2 << 4) | (s3 << 6);
                                result.weights[index] += w2 * w3;
                            }
                        }
                    }
                }
            }
        }

        result.reduce();
        trace!(
            genes = self.genes.get(),
            parents = self.support_size() * other.support_size(),
            outcomes = result.support_size(),
            total = result.total_weight(),
            "bred distributions"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::GeneState;

    fn point(genes: GeneCount, text: &str) -> GeneticDistribution {
        GeneticDistribution::from_genotype(Genotype::parse(genes, text).unwrap())
    }

    #[test]
    fn test_point_mass() {
        let g = Genotype::parse(GeneCount::Three, "RrYyWw").unwrap();
        let d = GeneticDistribution::from_genotype(g);
        assert_eq!(d.weights().len(), 64);
        assert_eq!(d.weight(g), 1);
        assert_eq!(d.total_weight(), 1);
        assert_eq!(d.support_size(), 1);

        let four = point(GeneCount::Four, "RrYyWwSs");
        assert_eq!(four.weights().len(), 256);
    }

    #[test]
    fn test_homozygous_self_cross_is_stable() {
        for text in ["rryyww", "RRYYWW", "RRyyWW"] {
            let d = point(GeneCount::Three, text);
            let g = Genotype::parse(GeneCount::Three, text).unwrap();
            let child = d.breed(&d);
            assert_eq!(child.weight(g), 1, "{}", text);
            assert_eq!(child.total_weight(), 1, "{}", text);
        }
    }

    #[test]
    fn test_dominant_by_recessive_is_heterozygous() {
        let child = point(GeneCount::Three, "RRYYWW").breed(&point(GeneCount::Three, "rryyww"));
        let het = Genotype::parse(GeneCount::Three, "RrYyWw").unwrap();
        assert_eq!(child.support_size(), 1);
        assert_eq!(child.weight(het), 1);
    }

    #[test]
    fn test_trihybrid_cross() {
        let d = point(GeneCount::Three, "RrYyWw");
        let child = d.breed(&d);

        assert_eq!(child.support_size(), 27);
        assert_eq!(child.total_weight(), 64);

        for (g, w) in child.iter() {
            let expected: u64 = g
                .states()
                .map(|s| if s == GeneState::Heterozygous { 2 } else { 1 })
                .product();
            assert_eq!(w, expected, "{}", g);
        }

        let dominant = Genotype::parse(GeneCount::Three, "RRYYWW").unwrap();
        assert_eq!(
            Odds::new(child.weight(dominant), child.total_weight()),
            Odds {
                numerator: 1,
                denominator: 64
            }
        );
    }

    #[test]
    fn test_tetrahybrid_cross() {
        let d = point(GeneCount::Four, "RrYyWwSs");
        let child = d.breed(&d);
        assert_eq!(child.support_size(), 81);
        assert_eq!(child.total_weight(), 256);
    }

    #[test]
    fn test_odds_follow_packed_order() {
        let child = point(GeneCount::Three, "Rryyww").breed(&point(GeneCount::Three, "rryyww"));
        let odds = child.odds();
        let half = Odds {
            numerator: 1,
            denominator: 2,
        };

        assert_eq!(odds.len(), 2);
        assert_eq!(odds[0].0.to_string(), "rryyww");
        assert_eq!(odds[1].0.to_string(), "Rryyww");
        assert!(odds.iter().all(|(_, o)| *o == half));
    }

    #[test]
    fn test_breed_reduces_result() {
        // Rr x rr on one gene gives 1:1, not 2:2
        let child = point(GeneCount::Three, "Rryyww").breed(&point(GeneCount::Three, "rryyww"));
        assert_eq!(child.weights().iter().copied().max(), Some(1));
        assert_eq!(child.total_weight(), 2);
    }

    #[test]
    fn test_breed_mixed_parents() {
        let mut parent = GeneticDistribution::empty(GeneCount::Three);
        parent
            .add_weight(Genotype::parse(GeneCount::Three, "RRyyww").unwrap(), 1)
            .unwrap();
        parent
            .add_weight(Genotype::parse(GeneCount::Three, "rryyww").unwrap(), 1)
            .unwrap();
        let child = parent.breed(&point(GeneCount::Three, "rryyww"));

        // half RR x rr -> Rr, half rr x rr -> rr
        assert_eq!(child.support_size(), 2);
        assert_eq!(child.total_weight(), 2);
    }

    #[test]
    fn test_reduce_divides_by_common_factor() {
        let mut d = GeneticDistribution::empty(GeneCount::Three);
        let a = Genotype::parse(GeneCount::Three, "rryyww").unwrap();
        let b = Genotype::parse(GeneCount::Three, "RRyyww").unwrap();
        d.add_weight(a, 6).unwrap();
        d.add_weight(b, 9).unwrap();
        d.reduce();
        assert_eq!(d.weight(a), 2);
        assert_eq!(d.weight(b), 3);
    }

    #[test]
    fn test_reduce_leaves_empty_alone() {
        let mut d = GeneticDistribution::empty(GeneCount::Four);
        d.reduce();
        assert!(d.is_empty());
    }

    #[test]
    #[should_panic(expected = "different gene counts")]
    fn test_breed_gene_count_mismatch_panics() {
        let three = point(GeneCount::Three, "rryyww");
        let four = point(GeneCount::Four, "rryywwss");
        let _ = three.breed(&four);
    }
}
