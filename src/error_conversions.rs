//! Error conversion glue between the domain, form, repository and service
//! layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls live here instead.

use crate::calendar::CalendarError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Deserialization(message) => ServiceError::InvalidPlan(message),
            RepositoryError::ValidationError(message) => ServiceError::TypeConstraint(message),
            RepositoryError::Io(message) => ServiceError::Internal(message),
        }
    }
}

impl From<CalendarError> for ServiceError {
    fn from(val: CalendarError) -> Self {
        ServiceError::InvalidPlan(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_repository_entity_maps_to_not_found() {
        let err: ServiceError = RepositoryError::NotFound.into();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn calendar_errors_map_to_invalid_plan() {
        let err: ServiceError = CalendarError::InvalidStartDate("bad".to_string()).into();
        assert!(matches!(err, ServiceError::InvalidPlan(message) if message.contains("bad")));
    }

    #[test]
    fn type_constraints_map_through_both_layers() {
        let service: ServiceError = TypeConstraintError::NonPositiveId.into();
        assert!(matches!(service, ServiceError::TypeConstraint(_)));

        let repository: RepositoryError = TypeConstraintError::ZeroItemsPerPage.into();
        assert!(matches!(repository, RepositoryError::ValidationError(_)));
    }
}
