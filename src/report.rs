// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of service results for terminals

use std::fmt::Write;

use crate::services::{BreedingReport, SpeciesInfo};

/// Header line, offspring notation, then one row per outcome:
/// odds, genotype, phenotype
pub fn render_table(report: &BreedingReport) -> String {
    let rows: Vec<[String; 3]> = report
        .outcomes
        .iter()
        .map(|o| [o.odds_text(), o.genotype.clone(), o.phenotype.clone()])
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} x {}",
        report.species_name, report.first, report.second
    );
    let _ = writeln!(out, "Offspring: {}", report.distribution);
    out.push('\n');
    write_columns(&mut out, ["Odds", "Genotype", "Phenotype"], &rows);
    out
}

/// One row per species: key, name, gene letters, seed genotypes
pub fn render_species_list(species: &[SpeciesInfo]) -> String {
    let rows: Vec<[String; 3]> = species
        .iter()
        .map(|s| [s.key.clone(), s.genes.clone(), s.seed.join(" ")])
        .collect();

    let mut out = String::new();
    write_columns(&mut out, ["Species", "Genes", "Seeds"], &rows);
    out
}

fn write_columns(out: &mut String, header: [&str; 3], rows: &[[String; 3]]) {
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut write_row = |cells: [&str; 3]| {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1]
        );
    };

    write_row(header);
    for row in rows {
        write_row([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }
}
