// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Species: gene letters plus an exhaustive genotype → phenotype table

use petal_genetics::{GeneCount, Genotype, GenotypeFormat};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// Suffix appended to seed-grown phenotypes in display text
pub const SEED_SUFFIX: &str = " (seed)";

/// Immutable flower species.
///
/// Every valid genotype has a phenotype; this is checked once at
/// construction so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    name: String,
    format: GenotypeFormat,
    /// Whether genotype text must use `format`'s letters
    strict_letters: bool,
    /// Indexed by packed genotype; empty at unused indices
    phenotypes: Vec<String>,
    seed_grown: Vec<bool>,
}

impl Species {
    /// Build a species from a gene count and a phenotype table whose keys may
    /// use any letter per gene.
    pub fn new<I, K, V>(name: impl Into<String>, gene_count: usize, table: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let name = name.into();
        let genes = GeneCount::new(gene_count).map_err(|_| CatalogError::InvalidGeneCount {
            species: name.clone(),
            count: gene_count,
        })?;
        Self::build(name, GenotypeFormat::standard(genes), false, table)
    }

    /// Build a species whose genotypes must use the given per-gene letters
    pub fn with_format<I, K, V>(
        name: impl Into<String>,
        format: GenotypeFormat,
        table: I,
    ) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::build(name.into(), format, true, table)
    }

    fn build<I, K, V>(
        name: String,
        format: GenotypeFormat,
        strict_letters: bool,
        table: I,
    ) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let genes = format.gene_count();
        let entries: Vec<(K, V)> = table.into_iter().collect();
        if entries.len() != genes.genotype_count() {
            return Err(CatalogError::TableSize {
                species: name,
                expected: genes.genotype_count(),
                actual: entries.len(),
            });
        }

        let mut slots: Vec<Option<String>> = vec![None; genes.index_space()];
        for (key, phenotype) in entries {
            let key = key.as_ref();
            let parsed = if strict_letters {
                format.parse(key)
            } else {
                Genotype::parse(genes, key)
            };
            let genotype = parsed.map_err(|source| CatalogError::InvalidGenotypeKey {
                species: name.clone(),
                key: key.to_string(),
                source,
            })?;

            let slot = &mut slots[genotype.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateGenotype {
                    species: name,
                    genotype: format.render(genotype),
                });
            }
            *slot = Some(phenotype.into());
        }

        debug!(species = %name, genes = genes.get(), letters = %format, "built species");
        Ok(Self {
            name,
            format,
            strict_letters,
            phenotypes: slots.into_iter().map(Option::unwrap_or_default).collect(),
            seed_grown: vec![false; genes.index_space()],
        })
    }

    /// Mark genotypes as seed-grown (display annotation only)
    pub fn with_seed_genotypes<I, S>(mut self, seeds: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for seed in seeds {
            let seed = seed.as_ref();
            let genotype =
                self.parse_genotype(seed)
                    .map_err(|source| CatalogError::InvalidSeedGenotype {
                        species: self.name.clone(),
                        genotype: seed.to_string(),
                        source,
                    })?;
            self.seed_grown[genotype.index()] = true;
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gene_count(&self) -> GeneCount {
        self.format.gene_count()
    }

    pub fn format(&self) -> &GenotypeFormat {
        &self.format
    }

    /// Parse genotype text for this species
    pub fn parse_genotype(&self, text: &str) -> petal_genetics::Result<Genotype> {
        if self.strict_letters {
            self.format.parse(text)
        } else {
            Genotype::parse(self.gene_count(), text)
        }
    }

    /// Canonical genotype text using this species' letters
    pub fn render_genotype(&self, genotype: Genotype) -> String {
        self.format.render(genotype)
    }

    /// Phenotype name of a genotype
    ///
    /// # Panics
    /// If the genotype belongs to a different gene count.
    pub fn phenotype(&self, genotype: Genotype) -> &str {
        self.check_gene_count(genotype);
        &self.phenotypes[genotype.index()]
    }

    pub fn is_seed_grown(&self, genotype: Genotype) -> bool {
        self.check_gene_count(genotype);
        self.seed_grown[genotype.index()]
    }

    /// Phenotype name, with `" (seed)"` appended for seed-grown genotypes
    /// when `annotate` is set
    pub fn display_phenotype(&self, genotype: Genotype, annotate: bool) -> String {
        let phenotype = self.phenotype(genotype);
        if annotate && self.is_seed_grown(genotype) {
            format!("{}{}", phenotype, SEED_SUFFIX)
        } else {
            phenotype.to_string()
        }
    }

    /// Seed-grown genotypes in packed-index order
    pub fn seed_genotypes(&self) -> impl Iterator<Item = Genotype> + '_ {
        Genotype::all(self.gene_count()).filter(move |g| self.seed_grown[g.index()])
    }

    /// Every genotype with its phenotype, in packed-index order
    pub fn phenotypes(&self) -> impl Iterator<Item = (Genotype, &str)> + '_ {
        Genotype::all(self.gene_count()).map(move |g| (g, self.phenotypes[g.index()].as_str()))
    }

    fn check_gene_count(&self, genotype: Genotype) {
        assert_eq!(
            genotype.gene_count(),
            self.gene_count(),
            "genotype does not belong to species {}",
            self.name
        );
    }
}
