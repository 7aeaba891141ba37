// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! # Petal Genetics
//!
//! Exact Mendelian breeding math for flowers with three or four independently
//! assorting genes, each gene in one of three zygosity states:
//! - **Genotype codec**: bit-packed genotypes and the two-letter-per-gene notation
//! - **Cross table**: single-gene Punnett ratios (out of 4)
//! - **Genetic distribution**: integer-weighted distributions over the genotype
//!   space and the breeding convolution between them
//! - **Rational reduction**: binary GCD and exact odds
//!
//! ## Usage
//!
//! ```rust
//! use petal_genetics::{GeneCount, GeneticDistribution, Genotype};
//!
//! let parent = Genotype::parse(GeneCount::Three, "RrYyWw")?;
//! let point = GeneticDistribution::from_genotype(parent);
//! let offspring = point.breed(&point);
//!
//! assert_eq!(offspring.support_size(), 27);
//! assert_eq!(offspring.total_weight(), 64);
//! # Ok::<(), petal_genetics::GeneticsError>(())
//! ```
//!
//! Everything here is pure computation; the crate performs no I/O.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cross;
pub mod distribution;
pub mod error;
pub mod gene;
pub mod genotype;
pub mod notation;
pub mod rational;

// Re-export commonly used types
pub use cross::{cross, CROSS_TABLE};
pub use distribution::GeneticDistribution;
pub use error::{GeneticsError, Result};
pub use gene::{GeneCount, GeneState};
pub use genotype::{Genotype, GenotypeFormat};
pub use notation::{parse_distribution, render_distribution, MAX_INPUT_WEIGHT};
pub use rational::{gcd, Odds};
