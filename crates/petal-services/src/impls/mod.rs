// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Service implementations

pub mod breeding_service_impl;

pub use breeding_service_impl::CatalogBreedingService;
