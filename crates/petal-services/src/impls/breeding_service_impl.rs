// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Breeding service implementation backed by a species catalog.
*/

use std::sync::Arc;

use petal_catalog::{Catalog, Species};
use petal_config::{OutcomeOrder, OutputConfig};
use petal_genetics::{parse_distribution, render_distribution, GeneticDistribution};
use tracing::{debug, warn};

use crate::traits::BreedingService;
use crate::types::*;

/// Default implementation of BreedingService
pub struct CatalogBreedingService {
    catalog: Arc<Catalog>,
    output: OutputConfig,
}

#[derive(Debug, Clone, Copy)]
enum Parent {
    First,
    Second,
}

impl Parent {
    fn label(self) -> &'static str {
        match self {
            Parent::First => "first",
            Parent::Second => "second",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Parent::First => "First",
            Parent::Second => "Second",
        }
    }
}

impl CatalogBreedingService {
    pub fn new(catalog: Arc<Catalog>, output: OutputConfig) -> Self {
        Self { catalog, output }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    fn parse_parent(
        species: &Species,
        parent: Parent,
        text: &str,
    ) -> ServiceResult<GeneticDistribution> {
        let wanted = species.gene_count().get();
        if let Some(genes) = leading_gene_count(text).filter(|&genes| genes != wanted) {
            warn!(parent = parent.label(), text, genes, wanted, "parent has wrong gene count");
            return Err(ServiceError::InvalidInput(format!(
                "{} genotype has wrong number of genes ({}, wanted {})",
                parent.title(),
                genes,
                wanted
            )));
        }

        parse_distribution(species.format(), text).map_err(|err| {
            warn!(parent = parent.label(), text, error = %err, "rejected parent");
            ServiceError::InvalidInput(format!(
                "Couldn't parse {} genotype: {}",
                parent.label(),
                err
            ))
        })
    }

    fn outcomes(&self, species: &Species, child: &GeneticDistribution) -> Vec<OffspringOutcome> {
        let mut outcomes: Vec<OffspringOutcome> = child
            .odds()
            .into_iter()
            .map(|(genotype, odds)| {
                let weight = child.weight(genotype);
                OffspringOutcome {
                    genotype: species.render_genotype(genotype),
                    phenotype: species.display_phenotype(genotype, self.output.annotate_seed),
                    color: species.phenotype(genotype).to_string(),
                    seed_grown: species.is_seed_grown(genotype),
                    weight,
                    odds,
                    percentage: odds.percentage(self.output.percent_precision),
                }
            })
            .collect();

        if self.output.order == OutcomeOrder::Probability {
            // stable, so ties keep genotype order
            outcomes.sort_by(|a, b| b.weight.cmp(&a.weight));
        }
        outcomes
    }
}

impl BreedingService for CatalogBreedingService {
    fn breed(&self, request: &BreedRequest) -> ServiceResult<BreedingReport> {
        let key = request.species.trim().to_ascii_lowercase();
        debug!(species = %key, first = %request.first, second = %request.second, "breeding");

        let species = self.catalog.species(&key)?;
        let first = Self::parse_parent(species, Parent::First, &request.first)?;
        let second = Self::parse_parent(species, Parent::Second, &request.second)?;

        let child = first.breed(&second);
        let format = species.format();

        debug!(
            species = %key,
            outcomes = child.support_size(),
            total_weight = child.total_weight(),
            "bred offspring distribution"
        );

        Ok(BreedingReport {
            species: key,
            species_name: species.name().to_string(),
            first: render_distribution(format, &first),
            second: render_distribution(format, &second),
            distribution: render_distribution(format, &child),
            total_weight: child.total_weight(),
            outcomes: self.outcomes(species, &child),
        })
    }

    fn species(&self) -> Vec<SpeciesInfo> {
        self.catalog
            .iter()
            .map(|(key, species)| SpeciesInfo {
                key: key.to_string(),
                name: species.name().to_string(),
                genes: species.format().to_string(),
                gene_count: species.gene_count().get(),
                seed: species
                    .seed_genotypes()
                    .map(|g| species.render_genotype(g))
                    .collect(),
            })
            .collect()
    }
}

/// Gene count implied by the first genotype in parent text, when its length is even
fn leading_gene_count(text: &str) -> Option<usize> {
    let entry = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .find(|entry| !entry.is_empty())?;
    let genotype = entry.split_once(':').map_or(entry, |(genotype, _)| genotype);
    let len = genotype.chars().count();
    (len % 2 == 0).then_some(len / 2)
}
