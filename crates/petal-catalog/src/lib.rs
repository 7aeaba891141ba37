// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
# Petal Catalog

Flower species definitions: per-gene allele letters, an exhaustive
genotype → phenotype table, and the genotypes available from seed.

A catalog is loaded from TOML, either the built-in one or a user file:

```
use petal_catalog::Catalog;

let catalog = Catalog::builtin().unwrap();
let cosmos = catalog.species("cosmos").unwrap();
let g = cosmos.parse_genotype("RRyyss").unwrap();
assert_eq!(cosmos.display_phenotype(g, true), "Red (seed)");

let roses = catalog.species("roses").unwrap();
let g = roses.parse_genotype("RRyyWWSs").unwrap();
assert_eq!(roses.display_phenotype(g, true), "Red");
```
*/

pub mod catalog;
pub mod error;
pub mod species;

pub use catalog::{Catalog, CatalogDefinition, SpeciesDefinition, BUILTIN_CATALOG};
pub use error::{CatalogError, CatalogResult};
pub use species::{Species, SEED_SUFFIX};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
