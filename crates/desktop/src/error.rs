//! Error surface of the workflows.

use stocktrack_core::DomainError;
use stocktrack_infra::StoreError;
use thiserror::Error;

/// Why a workflow did not complete.
///
/// Domain failures are expected misuse and leave all state untouched. Store
/// failures are I/O or decoding problems with a backing file.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(domain) => WorkflowError::Domain(domain),
            other => WorkflowError::Store(other),
        }
    }
}

impl WorkflowError {
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            WorkflowError::Domain(err) => Some(err),
            WorkflowError::Store(_) => None,
        }
    }

    /// Short machine-readable category.
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::Domain(err) => err.code(),
            WorkflowError::Store(_) => "storage_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::OrderId;

    #[test]
    fn store_wrapped_domain_errors_are_unwrapped() {
        let err: WorkflowError = StoreError::Domain(DomainError::DuplicateOrderId(OrderId::new(3))).into();
        assert_eq!(
            err.as_domain(),
            Some(&DomainError::DuplicateOrderId(OrderId::new(3)))
        );
        assert_eq!(err.code(), "duplicate_order_id");
    }

    #[test]
    fn io_failures_stay_storage_errors() {
        let err: WorkflowError = StoreError::LockPoisoned.into();
        assert!(err.as_domain().is_none());
        assert_eq!(err.code(), "storage_error");
    }
}
