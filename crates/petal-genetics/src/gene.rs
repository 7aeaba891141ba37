// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Single-gene zygosity states and the supported gene counts

use crate::error::{GeneticsError, Result};

/// Zygosity of one gene.
///
/// The discriminant is the value stored in the gene's 2-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GeneState {
    /// Two recessive alleles (`rr`)
    Recessive = 0,
    /// One dominant and one recessive allele (`Rr`)
    Heterozygous = 1,
    /// Two dominant alleles (`RR`)
    Dominant = 2,
}

impl GeneState {
    /// All states in field-value order
    pub const ALL: [GeneState; 3] = [
        GeneState::Recessive,
        GeneState::Heterozygous,
        GeneState::Dominant,
    ];

    /// Field value of this state
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a 2-bit field value; 3 is not a state
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(GeneState::Recessive),
            1 => Some(GeneState::Heterozygous),
            2 => Some(GeneState::Dominant),
            _ => None,
        }
    }

    /// Number of dominant alleles carried (0, 1 or 2)
    #[inline]
    pub const fn dominant_alleles(self) -> u8 {
        self as u8
    }

    /// True for `rr` and `RR`
    #[inline]
    pub const fn is_homozygous(self) -> bool {
        !matches!(self, GeneState::Heterozygous)
    }
}

/// Number of genes a species carries.
///
/// Only three and four are supported, which keeps every genotype inside one
/// byte and every distribution at 64 or 256 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneCount {
    Three,
    Four,
}

impl GeneCount {
    /// Validate a raw gene count
    pub fn new(count: usize) -> Result<Self> {
        match count {
            3 => Ok(GeneCount::Three),
            4 => Ok(GeneCount::Four),
            other => Err(GeneticsError::InvalidGeneCount(other)),
        }
    }

    /// Number of genes
    #[inline]
    pub const fn get(self) -> usize {
        match self {
            GeneCount::Three => 3,
            GeneCount::Four => 4,
        }
    }

    /// Length of the packed index space (4^n): 64 or 256
    #[inline]
    pub const fn index_space(self) -> usize {
        1 << (2 * self.get())
    }

    /// Number of valid genotypes (3^n): 27 or 81
    #[inline]
    pub const fn genotype_count(self) -> usize {
        match self {
            GeneCount::Three => 27,
            GeneCount::Four => 81,
        }
    }

    /// Length of a genotype string (two characters per gene)
    #[inline]
    pub const fn text_len(self) -> usize {
        2 * self.get()
    }
}

impl TryFrom<usize> for GeneCount {
    type Error = GeneticsError;

    fn try_from(count: usize) -> Result<Self> {
        GeneCount::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_bits_round_trip() {
        for state in GeneState::ALL {
            assert_eq!(GeneState::from_bits(state.bits()), Some(state));
        }
        assert_eq!(GeneState::from_bits(3), None);
    }

    #[test]
    fn test_gene_count_sizes() {
        assert_eq!(GeneCount::Three.index_space(), 64);
        assert_eq!(GeneCount::Four.index_space(), 256);
        assert_eq!(GeneCount::Three.genotype_count(), 27);
        assert_eq!(GeneCount::Four.genotype_count(), 81);
        assert_eq!(GeneCount::Four.text_len(), 8);
    }

    #[test]
    fn test_gene_count_rejects_others() {
        assert_eq!(GeneCount::new(2), Err(GeneticsError::InvalidGeneCount(2)));
        assert_eq!(GeneCount::new(5), Err(GeneticsError::InvalidGeneCount(5)));
        assert_eq!(GeneCount::try_from(4), Ok(GeneCount::Four));
    }
}
