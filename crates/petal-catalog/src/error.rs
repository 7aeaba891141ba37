// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog error types.

Every variant names the species it concerns so a bad configuration file can
be fixed without guessing.
*/

use petal_genetics::GeneticsError;
use thiserror::Error;

/// Species and catalog construction errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Gene count other than 3 or 4
    #[error("Species {species:?}: unsupported gene count {count} (expected 3 or 4)")]
    InvalidGeneCount { species: String, count: usize },

    /// Allele letters cannot form a genotype format
    #[error("Species {species:?}: {source}")]
    InvalidGeneLetters {
        species: String,
        source: GeneticsError,
    },

    /// Phenotype table does not have exactly 3^n entries
    #[error("Species {species:?}: phenotype table has {actual} entries, expected {expected}")]
    TableSize {
        species: String,
        expected: usize,
        actual: usize,
    },

    /// Phenotype table key is not a genotype of this species
    #[error("Species {species:?}: phenotype key {key:?} is not a valid genotype: {source}")]
    InvalidGenotypeKey {
        species: String,
        key: String,
        source: GeneticsError,
    },

    /// Two table keys name the same genotype
    #[error("Species {species:?}: genotype {genotype} appears more than once")]
    DuplicateGenotype { species: String, genotype: String },

    /// Seed list entry is not a genotype of this species
    #[error("Species {species:?}: seed genotype {genotype:?} is not valid: {source}")]
    InvalidSeedGenotype {
        species: String,
        genotype: String,
        source: GeneticsError,
    },

    /// Two catalog entries share a key
    #[error("Duplicate species key {0:?}")]
    DuplicateSpecies(String),

    /// Lookup of a key the catalog does not have
    #[error("Unknown species {0:?}")]
    UnknownSpecies(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog TOML: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
