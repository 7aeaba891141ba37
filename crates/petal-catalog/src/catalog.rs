// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Species catalog and its TOML file format.

```toml
[[species]]
key = "tulips"
name = "Tulips"
genes = "RYS"
seed = ["rryySs", "rrYYss", "RRyySs"]

[species.phenotypes]
rryyss = "White"
# ... one entry per genotype (27 or 81)
```
*/

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use petal_genetics::GenotypeFormat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::species::Species;

/// TOML source of the built-in catalog
pub const BUILTIN_CATALOG: &str = include_str!("../data/flowers.toml");

/// Top-level catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub species: Vec<SpeciesDefinition>,
}

/// One `[[species]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesDefinition {
    /// Lookup key, e.g. `"roses"`
    pub key: String,
    /// Display name
    pub name: String,
    /// Allele letter per gene, e.g. `"RYWS"`
    pub genes: String,
    #[serde(default)]
    pub seed: Vec<String>,
    pub phenotypes: BTreeMap<String, String>,
}

impl SpeciesDefinition {
    pub fn build(&self) -> CatalogResult<Species> {
        let format =
            GenotypeFormat::new(&self.genes).map_err(|source| CatalogError::InvalidGeneLetters {
                species: self.key.clone(),
                source,
            })?;
        Species::with_format(&self.name, format, &self.phenotypes)?.with_seed_genotypes(&self.seed)
    }
}

/// Read-only registry of species keyed by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: BTreeMap<String, Species>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(text: &str) -> CatalogResult<Self> {
        let definition: CatalogDefinition = toml::from_str(text)?;
        Self::from_definition(&definition)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> CatalogResult<Self> {
        debug!(path = %path.display(), "reading species catalog");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_definition(definition: &CatalogDefinition) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for entry in &definition.species {
            catalog.insert(entry.key.clone(), entry.build()?)?;
        }
        info!(species = catalog.len(), "loaded species catalog");
        Ok(catalog)
    }

    /// Add a species; keys must be unique
    pub fn insert(&mut self, key: impl Into<String>, species: Species) -> CatalogResult<()> {
        let key = key.into();
        if self.species.contains_key(&key) {
            return Err(CatalogError::DuplicateSpecies(key));
        }
        self.species.insert(key, species);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Species> {
        self.species.get(key)
    }

    /// Like [`Catalog::get`] but unknown keys are an error
    pub fn species(&self, key: &str) -> CatalogResult<&Species> {
        self.get(key)
            .ok_or_else(|| CatalogError::UnknownSpecies(key.to_string()))
    }

    /// Species keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Species)> {
        self.species.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
