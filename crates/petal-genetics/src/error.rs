// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Error types for genotype and distribution parsing

use thiserror::Error;

/// Validation errors raised while reading genotype or distribution text.
///
/// All of these are recoverable and describe bad input. Breeding two
/// distributions with different gene counts is not represented here: that is
/// a caller bug and aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticsError {
    /// Gene count other than 3 or 4
    #[error("Unsupported gene count {0} (expected 3 or 4)")]
    InvalidGeneCount(usize),

    /// Genotype text length does not match `2 * gene_count`
    #[error("Genotype has wrong length {actual} (expected {expected})")]
    WrongLength { expected: usize, actual: usize },

    /// The two characters of a gene slice use different letters
    #[error("Gene {slice:?} mixes different letters")]
    MixedLetters { slice: String },

    /// Gene slice does not match any of `xx`, `Xx`, `XX`
    #[error("Gene {slice:?} is not a valid gene (expected forms like rr, Rr, RR)")]
    InvalidGeneSlice { slice: String },

    /// Gene slice uses a letter the species does not define for that gene
    #[error("Gene {slice:?} uses the wrong letter (expected {expected})")]
    UnexpectedLetter { slice: String, expected: char },

    /// Packed index has a field value of 3 or lies outside the index space
    #[error("Packed index {index:#b} is not a valid genotype")]
    InvalidPackedGenotype { index: usize },

    /// Allele letters for a genotype format are unusable
    #[error("Invalid gene letters {letters:?}: {reason}")]
    InvalidGeneLetters { letters: String, reason: String },

    /// Distribution text has no entries
    #[error("Distribution is empty")]
    EmptyDistribution,

    /// Distribution entry weight is missing, zero, or not a number
    #[error("Invalid weight in distribution entry {entry:?}")]
    InvalidWeight { entry: String },

    /// Distribution total weight exceeds what a single breed can hold
    #[error("Distribution total weight exceeds {limit}")]
    WeightOverflow { limit: u64 },
}

/// Result type for genetics operations
pub type Result<T> = core::result::Result<T, GeneticsError>;
