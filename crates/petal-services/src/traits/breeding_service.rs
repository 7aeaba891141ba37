// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Breeding service trait.
*/

use crate::types::*;

/// Breeding service (transport-agnostic)
pub trait BreedingService: Send + Sync {
    /// Cross two parents and report every offspring genotype with its odds
    ///
    /// # Errors
    /// * `NotFound` - unknown species key
    /// * `InvalidInput` - a parent does not parse for the species
    fn breed(&self, request: &BreedRequest) -> ServiceResult<BreedingReport>;

    /// Every species available for breeding, sorted by key
    fn species(&self) -> Vec<SpeciesInfo>;
}
