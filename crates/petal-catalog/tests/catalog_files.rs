// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Loading catalogs from disk

use std::fs;

use petal_catalog::{Catalog, CatalogError, BUILTIN_CATALOG};
use petal_genetics::{GenotypeFormat, Genotype};
use tempfile::TempDir;

/// Three-gene species whose phenotype is the count of dominant R alleles
fn species_toml(key: &str, letters: &str, skip: usize) -> String {
    let format = GenotypeFormat::new(letters).unwrap();
    let mut text = format!(
        "[[species]]\nkey = \"{key}\"\nname = \"{key}\"\ngenes = \"{letters}\"\n\n[species.phenotypes]\n"
    );
    for g in Genotype::all(format.gene_count()).skip(skip) {
        text.push_str(&format!(
            "{} = \"R{}\"\n",
            format.render(g),
            g.gene(0).dominant_alleles()
        ));
    }
    text
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garden.toml");
    fs::write(&path, species_toml("marigolds", "RYW", 0)).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    let marigolds = catalog.species("marigolds").unwrap();
    let g = marigolds.parse_genotype("RRyyww").unwrap();
    assert_eq!(marigolds.phenotype(g), "R2");
    assert!(!marigolds.is_seed_grown(g));
}

#[test]
fn test_incomplete_table_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.toml");
    fs::write(&path, species_toml("marigolds", "RYW", 1)).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TableSize {
            expected: 27,
            actual: 26,
            ..
        }
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_unknown_field_rejected() {
    let text = species_toml("marigolds", "RYW", 0).replace("genes =", "colour = \"x\"\ngenes =");
    let err = Catalog::from_toml_str(&text).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_builtin_tables_complete() {
    let catalog = Catalog::from_toml_str(BUILTIN_CATALOG).unwrap();
    for (key, species) in catalog.iter() {
        let genes = species.gene_count();
        let named = species.phenotypes().filter(|(_, p)| !p.is_empty()).count();
        assert_eq!(named, genes.genotype_count(), "species {key}");
    }
}

#[test]
fn test_builtin_seeds_only_on_cosmos() {
    let catalog = Catalog::builtin().unwrap();
    for (key, species) in catalog.iter() {
        let seeds: Vec<String> = species
            .seed_genotypes()
            .map(|g| species.render_genotype(g))
            .collect();
        if key == "cosmos" {
            assert_eq!(seeds.len(), 3);
            for seed in ["rryySs", "rrYYSs", "RRyyss"] {
                assert!(seeds.iter().any(|s| s == seed), "{seed}");
            }
        } else {
            assert!(seeds.is_empty(), "species {key}: {seeds:?}");
        }
    }
}
