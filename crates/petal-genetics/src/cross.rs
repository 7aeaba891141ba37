// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Single-gene cross table
//!
//! `CROSS_TABLE[a][b][c]` is the number of the four equally likely allele
//! pairings (Punnett square cells) that give offspring state `c` when parents
//! in states `a` and `b` are crossed. States are indexed by field value:
//! 0 recessive, 1 heterozygous, 2 dominant.

use crate::gene::GeneState;

/// Offspring counts out of 4 for every pair of parent states
pub const CROSS_TABLE: [[[u64; 3]; 3]; 3] = [
    // rr x {rr, Rr, RR}
    [[4, 0, 0], [2, 2, 0], [0, 4, 0]],
    // Rr x {rr, Rr, RR}
    [[2, 2, 0], [1, 2, 1], [0, 2, 2]],
    // RR x {rr, Rr, RR}
    [[0, 4, 0], [0, 2, 2], [0, 0, 4]],
];

/// Total weight of every cross table row
pub const CROSS_WEIGHT: u64 = 4;

/// Offspring counts for one gene
#[inline]
pub fn cross(a: GeneState, b: GeneState) -> &'static [u64; 3] {
    &CROSS_TABLE[a.bits() as usize][b.bits() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Enumerate the Punnett square directly: each parent passes on one of its
    /// two alleles with equal chance.
    fn punnett(a: GeneState, b: GeneState) -> [u64; 3] {
        let alleles = |s: GeneState| match s {
            GeneState::Recessive => [0u8, 0],
            GeneState::Heterozygous => [1, 0],
            GeneState::Dominant => [1, 1],
        };
        let mut counts = [0u64; 3];
        for x in alleles(a) {
            for y in alleles(b) {
                counts[(x + y) as usize] += 1;
            }
        }
        counts
    }

    #[test]
    fn test_table_matches_punnett_squares() {
        for a in GeneState::ALL {
            for b in GeneState::ALL {
                assert_eq!(*cross(a, b), punnett(a, b), "{:?} x {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_rows_sum_to_four() {
        for row in CROSS_TABLE.iter().flatten() {
            assert_eq!(row.iter().sum::<u64>(), CROSS_WEIGHT);
        }
    }

    #[test]
    fn test_table_is_symmetric() {
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(CROSS_TABLE[a][b], CROSS_TABLE[b][a]);
            }
        }
    }

    #[test]
    fn test_classical_ratios() {
        use GeneState::*;
        assert_eq!(*cross(Recessive, Recessive), [4, 0, 0]);
        assert_eq!(*cross(Heterozygous, Heterozygous), [1, 2, 1]);
        assert_eq!(*cross(Dominant, Dominant), [0, 0, 4]);
        assert_eq!(*cross(Dominant, Recessive), [0, 4, 0]);
    }
}
