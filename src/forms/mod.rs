//! Form definitions collected by the dashboards.

use thiserror::Error;
use validator::ValidationErrors;

pub mod clients;
pub mod delivery_persons;
pub mod movements;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid code")]
    InvalidCode,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid client id")]
    InvalidClientId,

    #[error("invalid delivery person id")]
    InvalidDeliveryPersonId,

    #[error("invalid movement id")]
    InvalidMovementId,

    #[error("invalid movement type")]
    InvalidMovementType,

    #[error("invalid status")]
    InvalidStatus,

    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("justification is required")]
    MissingJustification,

    #[error("invalid password")]
    InvalidPassword,
}

/// Treats blank optional inputs as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
