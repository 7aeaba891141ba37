// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Data Transfer Objects for the service layer.

Plain data; adapters serialize them to JSON or render them as text.
*/

use petal_genetics::Odds;
use serde::{Deserialize, Serialize};

// ============================================================================
// BREEDING
// ============================================================================

/// Cross two parents of one species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRequest {
    /// Species key, e.g. `"roses"`
    pub species: String,
    /// First parent: a genotype or a weighted list (`RrYyWwSs` or `RRyyWWSs:1 RryyWWSs:2`)
    pub first: String,
    /// Second parent, same notation
    pub second: String,
}

impl BreedRequest {
    pub fn new(
        species: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            species: species.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Offspring distribution of one cross
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedingReport {
    /// Species key
    pub species: String,
    /// Species display name
    pub species_name: String,
    /// First parent in canonical notation
    pub first: String,
    /// Second parent in canonical notation
    pub second: String,
    /// Offspring distribution in canonical notation
    pub distribution: String,
    /// Sum of reduced offspring weights
    pub total_weight: u64,
    pub outcomes: Vec<OffspringOutcome>,
}

impl BreedingReport {
    /// Summed weight of every outcome with the given plain phenotype name;
    /// divide by `total_weight` for the probability
    pub fn phenotype_weight(&self, color: &str) -> u64 {
        self.outcomes
            .iter()
            .filter(|o| o.color == color)
            .map(|o| o.weight)
            .sum()
    }
}

/// One possible offspring genotype
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffspringOutcome {
    pub genotype: String,
    /// Phenotype for display, with the seed annotation when enabled
    pub phenotype: String,
    /// Plain phenotype name
    pub color: String,
    pub seed_grown: bool,
    pub weight: u64,
    pub odds: Odds,
    /// Percentage text, e.g. `"6.25%"`
    pub percentage: String,
}

impl OffspringOutcome {
    /// `6.25% (1/16)` style odds text
    pub fn odds_text(&self) -> String {
        format!("{} ({})", self.percentage, self.odds)
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Species summary for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub key: String,
    pub name: String,
    /// Allele letter per gene, e.g. `"RYWS"`
    pub genes: String,
    pub gene_count: usize,
    /// Seed-grown genotypes in canonical notation
    pub seed: Vec<String>,
}
