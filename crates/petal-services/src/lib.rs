// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
# Petal Service Layer

The application boundary for petal: transport-agnostic service traits, plain
request/response DTOs, and a catalog-backed implementation.

```text
┌────────────────────────────────────────────┐
│  ADAPTERS: breed CLI, HTTP handlers, ...   │
└─────────────────────┬──────────────────────┘
                      ↓
┌────────────────────────────────────────────┐
│  SERVICE LAYER (this crate)                │
│  • BreedingService - crosses and listings  │
└─────────────────────┬──────────────────────┘
                      ↓
┌────────────────────────────────────────────┐
│  DOMAIN: petal-genetics, petal-catalog     │
└────────────────────────────────────────────┘
```

Adapters depend on the trait, not the implementation:

```
use std::sync::Arc;
use petal_catalog::Catalog;
use petal_config::OutputConfig;
use petal_services::{BreedRequest, BreedingService, CatalogBreedingService};

let service = CatalogBreedingService::new(Arc::new(Catalog::builtin().unwrap()), OutputConfig::default());
let report = service.breed(&BreedRequest::new("cosmos", "RrYySs", "rryyss")).unwrap();
assert_eq!(report.total_weight, 8);
```
*/

pub mod impls;
pub mod traits;
pub mod types;

pub use impls::*;
pub use traits::*;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
