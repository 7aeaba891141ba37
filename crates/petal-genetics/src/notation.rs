// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Text notation for distributions
//!
//! A distribution is written as `genotype:weight` entries separated by
//! whitespace or commas, e.g. `RRyyss:1 Rryyss:2`. A bare genotype (weight
//! omitted) counts as weight 1, so a single genotype string is a point mass.

use crate::distribution::GeneticDistribution;
use crate::error::{GeneticsError, Result};
use crate::genotype::GenotypeFormat;

/// Largest total weight accepted for a parsed distribution.
///
/// Breeding two distributions multiplies their totals together with the
/// 4^n cross weights, so 2^24 per side keeps every sum inside `u64`.
pub const MAX_INPUT_WEIGHT: u64 = 1 << 24;

/// Parse a genotype or weighted genotype list into a reduced distribution
pub fn parse_distribution(format: &GenotypeFormat, text: &str) -> Result<GeneticDistribution> {
    let mut dist = GeneticDistribution::empty(format.gene_count());
    let mut total: u64 = 0;

    let entries = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|entry| !entry.is_empty());

    for entry in entries {
        let (genotype_text, weight) = match entry.split_once(':') {
            Some((genotype_text, weight_text)) => {
                let weight = weight_text
                    .parse::<u64>()
                    .ok()
                    .filter(|&w| w > 0)
                    .ok_or_else(|| GeneticsError::InvalidWeight {
                        entry: entry.to_string(),
                    })?;
                (genotype_text, weight)
            }
            None => (entry, 1),
        };

        let genotype = format.parse(genotype_text)?;
        total = total
            .checked_add(weight)
            .filter(|&t| t <= MAX_INPUT_WEIGHT)
            .ok_or(GeneticsError::WeightOverflow {
                limit: MAX_INPUT_WEIGHT,
            })?;
        dist.add_weight(genotype, weight)
            .ok_or(GeneticsError::WeightOverflow {
                limit: MAX_INPUT_WEIGHT,
            })?;
    }

    if dist.is_empty() {
        return Err(GeneticsError::EmptyDistribution);
    }
    dist.reduce();
    Ok(dist)
}

/// Render nonzero entries in packed-index order as `genotype:weight`
pub fn render_distribution(format: &GenotypeFormat, dist: &GeneticDistribution) -> String {
    dist.iter()
        .map(|(genotype, weight)| format!("{}:{}", format.render(genotype), weight))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::GeneCount;

    fn roses() -> GenotypeFormat {
        GenotypeFormat::new("RYWS").unwrap()
    }

    #[test]
    fn test_bare_genotype_is_point_mass() {
        let format = roses();
        let d = parse_distribution(&format, "RrYyWwSs").unwrap();
        let g = format.parse("RrYyWwSs").unwrap();
        assert_eq!(d.weight(g), 1);
        assert_eq!(d.total_weight(), 1);
    }

    #[test]
    fn test_weighted_list() {
        let format = GenotypeFormat::new("RYS").unwrap();
        let d = parse_distribution(&format, "RRyyss:1, Rryyss:2\tRRyyss").unwrap();
        // 2:2 reduced to 1:1
        assert_eq!(d.weight(format.parse("RRyyss").unwrap()), 1);
        assert_eq!(d.weight(format.parse("Rryyss").unwrap()), 1);
        assert_eq!(d.total_weight(), 2);
    }

    #[test]
    fn test_render_round_trip() {
        let format = GenotypeFormat::new("ROW").unwrap();
        let d = parse_distribution(&format, "RrOoWw:3 rroowW:1").unwrap_err();
        assert!(matches!(d, GeneticsError::InvalidGeneSlice { .. }));

        let d = parse_distribution(&format, "RrOoWw:3 rrooww:1").unwrap();
        let text = render_distribution(&format, &d);
        assert_eq!(text, "rrooww:1 RrOoWw:3");
        assert_eq!(parse_distribution(&format, &text).unwrap(), d);
    }

    #[test]
    fn test_empty_and_bad_weights() {
        let format = GenotypeFormat::standard(GeneCount::Three);
        assert_eq!(
            parse_distribution(&format, "  , "),
            Err(GeneticsError::EmptyDistribution)
        );
        assert!(matches!(
            parse_distribution(&format, "RRYYWW:0"),
            Err(GeneticsError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_distribution(&format, "RRYYWW:x"),
            Err(GeneticsError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_weight_limit() {
        let format = GenotypeFormat::standard(GeneCount::Three);
        let at_limit = format!("RRYYWW:{}", MAX_INPUT_WEIGHT);
        assert!(parse_distribution(&format, &at_limit).is_ok());

        let over = format!("RRYYWW:{} rryyww:1", MAX_INPUT_WEIGHT);
        assert_eq!(
            parse_distribution(&format, &over),
            Err(GeneticsError::WeightOverflow {
                limit: MAX_INPUT_WEIGHT
            })
        );
    }
}
