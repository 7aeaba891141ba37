// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Service trait definitions

pub mod breeding_service;

pub use breeding_service::BreedingService;
