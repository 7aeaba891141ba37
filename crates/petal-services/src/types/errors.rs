// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that adapters (CLI, HTTP) map to their own codes.
*/

use petal_catalog::CatalogError;
use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Resource not found (404 in HTTP)
    #[error("Unknown {resource} {id:?}")]
    NotFound { resource: String, id: String },

    /// Invalid input parameters (400 in HTTP)
    #[error("{0}")]
    InvalidInput(String),

    /// Internal service error (500 in HTTP)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownSpecies(key) => ServiceError::NotFound {
                resource: "species".to_string(),
                id: key,
            },
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_species_message() {
        let err: ServiceError = CatalogError::UnknownSpecies("orchids".to_string()).into();
        assert_eq!(err.to_string(), "Unknown species \"orchids\"");
    }

    #[test]
    fn test_other_catalog_errors_are_internal() {
        let err: ServiceError = CatalogError::DuplicateSpecies("roses".to_string()).into();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
