use thiserror::Error;

use crate::domain::movement::MovementError;
use crate::domain::profile::Profile;

pub mod clients;
pub mod dashboard;
pub mod delivery_persons;
pub mod movements;

/// Errors surfaced to the dashboards. Every variant is recoverable: the
/// operation did not change the registry and the user can be re-prompted.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Lifecycle(#[from] MovementError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rejects non-admin profiles.
pub(crate) fn ensure_admin(profile: &Profile) -> ServiceResult<()> {
    if profile.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
