// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! # Petal - exact breeding odds for garden flowers
//!
//! Petal computes the offspring genotype distribution of a cross between two
//! flowers whose colour is controlled by three or four genes with simple
//! Mendelian inheritance. Results are exact fractions, never floating-point
//! estimates.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! petal = "0.1"
//! ```
//!
//! ```rust
//! use petal::prelude::*;
//!
//! let catalog = Catalog::builtin()?;
//! let roses = catalog.species("roses")?;
//! let parent = parse_distribution(roses.format(), "RrYyWwSs")?;
//! let offspring = parent.breed(&parent);
//!
//! assert_eq!(offspring.support_size(), 81);
//! assert_eq!(offspring.total_weight(), 256);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`services`** (default): breeding service layer and the `breed` tool
//! - **`file-logging`**: per-run log files for the `breed` tool
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Algorithms: petal-genetics                             │
//! │  (genotype codec, cross table, distributions, GCD)      │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Data: petal-catalog                                    │
//! │  (species phenotype tables loaded from TOML)            │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Services: petal-services                               │
//! │  (BreedingService, request/report DTOs)                 │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Tools: breed CLI (petal-config, petal-observability)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub use petal_catalog as catalog;
pub use petal_genetics as genetics;

#[cfg(feature = "services")]
pub use petal_services as services;

pub use petal_config as config;
pub use petal_observability as observability;

#[cfg(feature = "services")]
pub mod report;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::genetics::{
        gcd, parse_distribution, render_distribution, GeneCount, GeneState, GeneticDistribution,
        GeneticsError, Genotype, GenotypeFormat, Odds,
    };

    pub use crate::catalog::{Catalog, CatalogError, Species};

    #[cfg(feature = "services")]
    pub use crate::services::{
        BreedRequest, BreedingReport, BreedingService, CatalogBreedingService, OffspringOutcome,
        ServiceError, ServiceResult, SpeciesInfo,
    };
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
