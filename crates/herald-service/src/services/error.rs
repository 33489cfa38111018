//! Service layer error types
//!
//! Provides a unified error type for all service operations. The three
//! caller-facing kinds (`unauthenticated`, `permission-denied`,
//! `invalid-argument`) are terminal for a single invocation; there is no
//! retry anywhere in this layer.

use herald_common::AppError;
use herald_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, config, etc.)
    App(AppError),

    /// Missing caller identity
    Unauthenticated,

    /// Authenticated but insufficient role
    PermissionDenied(String),

    /// Missing or malformed required field
    InvalidArgument(String),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Unauthenticated => write!(f, "Missing caller identity"),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if matches!(e, DomainError::Unauthenticated) {
                    401
                } else if e.is_authorization() {
                    403
                } else if e.is_invalid_argument() {
                    400
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::Unauthenticated => 401,
            Self::PermissionDenied(_) => 403,
            Self::InvalidArgument(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthenticated => Self::Unauthenticated,
            DomainError::PermissionDenied(msg) => Self::PermissionDenied(msg),
            DomainError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            other => Self::Domain(other),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidArgument(errors.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Unauthenticated => AppError::Unauthenticated,
            ServiceError::PermissionDenied(msg) => AppError::PermissionDenied(msg),
            ServiceError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_error() {
        let err = ServiceError::Unauthenticated;
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "UNAUTHENTICATED");
    }

    #[test]
    fn test_permission_denied_error() {
        let err = ServiceError::permission_denied("admin role required");
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "PERMISSION_DENIED");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = ServiceError::invalid_argument("userId is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_domain_caller_errors_are_normalized() {
        let err = ServiceError::from(DomainError::PermissionDenied("x".to_string()));
        assert!(matches!(err, ServiceError::PermissionDenied(_)));

        let err = ServiceError::from(DomainError::Unauthenticated);
        assert!(matches!(err, ServiceError::Unauthenticated));
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::not_found("Report", "rep1");
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 404);
    }
}
