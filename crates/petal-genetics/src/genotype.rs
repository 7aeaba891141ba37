// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Genotype codec
//!
//! A genotype is packed into one byte: gene `i` occupies the 2-bit field at
//! offset `2 * i` and holds its [`GeneState`] value. Field value 3 is never
//! produced. The packed value doubles as the index into a
//! [`GeneticDistribution`](crate::GeneticDistribution).
//!
//! The text form is two characters per gene in gene order: `rr` recessive,
//! `Rr` heterozygous, `RR` dominant.

use core::fmt;

use crate::error::{GeneticsError, Result};
use crate::gene::{GeneCount, GeneState};

const GENE_BITS: usize = 2;
const GENE_MASK: u8 = 0b11;

/// Letters used when no species-specific letters are known
pub const STANDARD_LETTERS: [char; 4] = ['R', 'Y', 'W', 'S'];

/// Bit-packed genotype of a 3- or 4-gene flower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Genotype {
    packed: u8,
    genes: GeneCount,
}

impl Genotype {
    /// Build a genotype from per-gene states (3 or 4 of them)
    pub fn from_states(states: &[GeneState]) -> Result<Self> {
        let genes = GeneCount::new(states.len())?;
        let packed = states
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, state)| acc | (state.bits() << (GENE_BITS * i)));
        Ok(Self { packed, genes })
    }

    /// Decode a packed index, rejecting field value 3 and out-of-range indices
    pub fn from_index(index: usize, genes: GeneCount) -> Result<Self> {
        if !is_valid_index(index, genes) {
            return Err(GeneticsError::InvalidPackedGenotype { index });
        }
        Ok(Self::from_index_unchecked(index, genes))
    }

    /// Caller guarantees `is_valid_index(index, genes)`
    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize, genes: GeneCount) -> Self {
        Self {
            packed: index as u8,
            genes,
        }
    }

    /// Packed byte
    #[inline]
    pub const fn packed(self) -> u8 {
        self.packed
    }

    /// Packed byte as a distribution index
    #[inline]
    pub const fn index(self) -> usize {
        self.packed as usize
    }

    #[inline]
    pub const fn gene_count(self) -> GeneCount {
        self.genes
    }

    /// State of gene `i`
    ///
    /// # Panics
    /// If `i` is not below the gene count.
    #[inline]
    pub fn gene(self, i: usize) -> GeneState {
        assert!(
            i < self.genes.get(),
            "gene index {} out of range for {} genes",
            i,
            self.genes.get()
        );
        match (self.packed >> (GENE_BITS * i)) & GENE_MASK {
            0 => GeneState::Recessive,
            1 => GeneState::Heterozygous,
            _ => GeneState::Dominant,
        }
    }

    /// Per-gene states in gene order
    pub fn states(self) -> impl Iterator<Item = GeneState> {
        (0..self.genes.get()).map(move |i| self.gene(i))
    }

    /// Copy with gene `i` replaced
    pub fn with_gene(self, i: usize, state: GeneState) -> Self {
        assert!(i < self.genes.get(), "gene index {} out of range", i);
        let shift = GENE_BITS * i;
        let packed = (self.packed & !(GENE_MASK << shift)) | (state.bits() << shift);
        Self {
            packed,
            genes: self.genes,
        }
    }

    /// True when every gene is `rr` or `RR`
    pub fn is_homozygous(self) -> bool {
        self.states().all(GeneState::is_homozygous)
    }

    /// Parse genotype text for a gene count, accepting any letter per gene.
    ///
    /// Each two-character slice must use one letter in both positions
    /// (case-insensitively); case decides the state.
    pub fn parse(genes: GeneCount, text: &str) -> Result<Self> {
        parse_slices(genes, text, None)
    }

    /// Every valid genotype for a gene count, in packed-index order
    pub fn all(genes: GeneCount) -> impl Iterator<Item = Genotype> {
        (0..genes.index_space())
            .filter(move |&index| is_valid_index(index, genes))
            .map(move |index| Genotype::from_index_unchecked(index, genes))
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_genotype(f, *self, &STANDARD_LETTERS)
    }
}

/// True when `index` fits the gene count and no field holds 3
pub fn is_valid_index(index: usize, genes: GeneCount) -> bool {
    if index >= genes.index_space() {
        return false;
    }
    (0..genes.get()).all(|i| (index >> (GENE_BITS * i)) & GENE_MASK as usize != 3)
}

/// Per-species allele letters, one per gene.
///
/// Parsing through a format additionally requires each slice to use that
/// gene's letter, so `"RrYySs"` and `"RrYyWw"` are different inputs for a
/// species whose genes are `RYS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenotypeFormat {
    letters: Vec<char>,
    genes: GeneCount,
}

impl GenotypeFormat {
    /// Letters given as one character per gene, e.g. `"RYWS"`
    pub fn new(letters: &str) -> Result<Self> {
        let invalid = |reason: &str| GeneticsError::InvalidGeneLetters {
            letters: letters.to_string(),
            reason: reason.to_string(),
        };

        let chars: Vec<char> = letters.chars().collect();
        let genes = GeneCount::new(chars.len()).map_err(|_| invalid("expected 3 or 4 letters"))?;
        if !chars.iter().all(char::is_ascii_alphabetic) {
            return Err(invalid("letters must be ASCII alphabetic"));
        }

        let upper: Vec<char> = chars.iter().map(char::to_ascii_uppercase).collect();
        for (i, letter) in upper.iter().enumerate() {
            if upper[..i].contains(letter) {
                return Err(invalid("letters must be distinct"));
            }
        }

        Ok(Self {
            letters: upper,
            genes,
        })
    }

    /// `RYW` for three genes, `RYWS` for four
    pub fn standard(genes: GeneCount) -> Self {
        Self {
            letters: STANDARD_LETTERS[..genes.get()].to_vec(),
            genes,
        }
    }

    #[inline]
    pub fn gene_count(&self) -> GeneCount {
        self.genes
    }

    /// Uppercase letter per gene
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Parse genotype text, requiring each gene to use its own letter
    pub fn parse(&self, text: &str) -> Result<Genotype> {
        parse_slices(self.genes, text, Some(&self.letters))
    }

    /// Canonical text for a genotype
    ///
    /// # Panics
    /// If the genotype's gene count differs from the format's.
    pub fn render(&self, genotype: Genotype) -> String {
        assert_eq!(
            genotype.gene_count(),
            self.genes,
            "genotype gene count does not match format"
        );
        let mut out = String::with_capacity(self.genes.text_len());
        for (state, letter) in genotype.states().zip(&self.letters) {
            push_gene(&mut out, state, *letter);
        }
        out
    }

    /// Parse and re-render, normalizing nothing but validating everything
    pub fn canonicalize(&self, text: &str) -> Result<String> {
        self.parse(text).map(|g| self.render(g))
    }
}

impl fmt::Display for GenotypeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

fn parse_slices(genes: GeneCount, text: &str, letters: Option<&[char]>) -> Result<Genotype> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != genes.text_len() {
        return Err(GeneticsError::WrongLength {
            expected: genes.text_len(),
            actual: chars.len(),
        });
    }

    let mut packed = 0u8;
    for (i, pair) in chars.chunks(2).enumerate() {
        let (letter, state) = parse_gene(pair[0], pair[1])?;
        if let Some(expected) = letters.map(|l| l[i]) {
            if letter != expected {
                return Err(GeneticsError::UnexpectedLetter {
                    slice: pair.iter().collect(),
                    expected,
                });
            }
        }
        packed |= state.bits() << (GENE_BITS * i);
    }

    Ok(Genotype { packed, genes })
}

/// Returns the gene's uppercase letter and its state
fn parse_gene(first: char, second: char) -> Result<(char, GeneState)> {
    let slice = || [first, second].iter().collect::<String>();

    if !first.is_ascii_alphabetic() || !second.is_ascii_alphabetic() {
        return Err(GeneticsError::InvalidGeneSlice { slice: slice() });
    }
    if !first.eq_ignore_ascii_case(&second) {
        return Err(GeneticsError::MixedLetters { slice: slice() });
    }

    let state = match (first.is_ascii_uppercase(), second.is_ascii_uppercase()) {
        (false, false) => GeneState::Recessive,
        (true, false) => GeneState::Heterozygous,
        (true, true) => GeneState::Dominant,
        (false, true) => return Err(GeneticsError::InvalidGeneSlice { slice: slice() }),
    };
    Ok((first.to_ascii_uppercase(), state))
}

fn push_gene(out: &mut String, state: GeneState, letter: char) {
    let upper = letter.to_ascii_uppercase();
    let lower = letter.to_ascii_lowercase();
    match state {
        GeneState::Recessive => {
            out.push(lower);
            out.push(lower);
        }
        GeneState::Heterozygous => {
            out.push(upper);
            out.push(lower);
        }
        GeneState::Dominant => {
            out.push(upper);
            out.push(upper);
        }
    }
}

fn write_genotype(f: &mut fmt::Formatter<'_>, genotype: Genotype, letters: &[char]) -> fmt::Result {
    let mut out = String::with_capacity(genotype.gene_count().text_len());
    for (state, letter) in genotype.states().zip(letters) {
        push_gene(&mut out, state, *letter);
    }
    f.write_str(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_packs_gene_fields_in_order() {
        let g = Genotype::parse(GeneCount::Three, "RrYYww").unwrap();
        assert_eq!(g.gene(0), GeneState::Heterozygous);
        assert_eq!(g.gene(1), GeneState::Dominant);
        assert_eq!(g.gene(2), GeneState::Recessive);
        assert_eq!(g.packed(), 0b00_10_01);
    }

    #[test]
    fn test_parse_accepts_any_letter() {
        let g = Genotype::parse(GeneCount::Three, "AaBBcc").unwrap();
        assert_eq!(g, Genotype::parse(GeneCount::Three, "RrYYww").unwrap());
    }

    #[test]
    fn test_wrong_length_is_rejected_both_ways() {
        assert_eq!(
            Genotype::parse(GeneCount::Three, "RrYyWwSs"),
            Err(GeneticsError::WrongLength {
                expected: 6,
                actual: 8
            })
        );
        assert_eq!(
            Genotype::parse(GeneCount::Four, "RrYyWw"),
            Err(GeneticsError::WrongLength {
                expected: 8,
                actual: 6
            })
        );
    }

    #[test]
    fn test_mixed_letters_names_slice() {
        let err = Genotype::parse(GeneCount::Three, "RrYwWw").unwrap_err();
        assert_eq!(
            err,
            GeneticsError::MixedLetters {
                slice: "Yw".to_string()
            }
        );
        assert!(err.to_string().contains("Yw"));
    }

    #[test]
    fn test_lower_then_upper_is_invalid() {
        assert_eq!(
            Genotype::parse(GeneCount::Three, "rRyyww"),
            Err(GeneticsError::InvalidGeneSlice {
                slice: "rR".to_string()
            })
        );
    }

    #[test]
    fn test_non_letters_are_invalid() {
        assert!(matches!(
            Genotype::parse(GeneCount::Three, "R1yyww"),
            Err(GeneticsError::InvalidGeneSlice { .. })
        ));
    }

    #[test]
    fn test_format_enforces_letters() {
        let format = GenotypeFormat::new("RYS").unwrap();
        assert!(format.parse("RrYySs").is_ok());
        assert_eq!(
            format.parse("RrYyWw"),
            Err(GeneticsError::UnexpectedLetter {
                slice: "Ww".to_string(),
                expected: 'S'
            })
        );
    }

    #[test]
    fn test_format_rejects_bad_letters() {
        assert!(GenotypeFormat::new("RY").is_err());
        assert!(GenotypeFormat::new("RYWSX").is_err());
        assert!(GenotypeFormat::new("RYr").is_err());
        assert!(GenotypeFormat::new("R1W").is_err());
        assert_eq!(GenotypeFormat::new("ryws").unwrap().to_string(), "RYWS");
    }

    #[test]
    fn test_render_uses_format_letters() {
        let format = GenotypeFormat::new("ROW").unwrap();
        let g = Genotype::from_states(&[
            GeneState::Dominant,
            GeneState::Heterozygous,
            GeneState::Recessive,
        ])
        .unwrap();
        assert_eq!(format.render(g), "RROoww");
        assert_eq!(g.to_string(), "RRYyww");
    }

    #[test]
    fn test_from_index_rejects_field_three() {
        assert!(Genotype::from_index(0b00_11_00, GeneCount::Three).is_err());
        assert!(Genotype::from_index(64, GeneCount::Three).is_err());
        assert!(Genotype::from_index(0b10_10_10_10, GeneCount::Four).is_ok());
    }

    #[test]
    fn test_all_enumerates_valid_genotypes() {
        assert_eq!(Genotype::all(GeneCount::Three).count(), 27);
        assert_eq!(Genotype::all(GeneCount::Four).count(), 81);
        for g in Genotype::all(GeneCount::Four) {
            assert!(g.states().all(|s| s.bits() < 3));
        }
    }

    #[test]
    fn test_with_gene_replaces_one_field() {
        let g = Genotype::parse(GeneCount::Four, "rryywwss").unwrap();
        let g = g.with_gene(3, GeneState::Dominant);
        assert_eq!(g.to_string(), "rryywwSS");
        assert!(g.is_homozygous());
        assert!(!g.with_gene(0, GeneState::Heterozygous).is_homozygous());
    }
}
