//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! emails, trimmed non-empty text) so that once a value reaches the registry
//! it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Password could not be hashed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Trims the value and rejects it when nothing is left.
fn trimmed_non_empty<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed)
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(DeliveryPersonId, "Unique identifier for a delivery person.");
id_newtype!(MovementId, "Unique identifier for a movement.");

/// Shared accessors and conversions for string-backed newtypes.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(trimmed_non_empty(value)?))
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! email_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates and normalizes an email string.
            pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(normalize_email(email)?))
            }
        }

        string_newtype_impls!($name);
    };
}

non_empty_string_newtype!(ClientCode, "User-assigned short client code, e.g. `CLI001`.");
non_empty_string_newtype!(ClientName, "Client name wrapper enforcing non-empty values.");
non_empty_string_newtype!(
    DeliveryPersonCode,
    "User-assigned short delivery person code, e.g. `ENT001`."
);
non_empty_string_newtype!(
    DeliveryPersonName,
    "Delivery person name wrapper enforcing non-empty values."
);
non_empty_string_newtype!(
    Quantity,
    "Free-text quantity such as `2 boxes` or `5 kg`."
);

non_empty_string_newtype!(
    MovementDescription,
    "Description of the goods being delivered or collected."
);
non_empty_string_newtype!(
    Justification,
    "Reason recorded when a movement leaves the pending state."
);

email_newtype!(ClientEmail, "Contact email of a client.");
email_newtype!(DeliveryPersonEmail, "Sign-in email of a delivery person.");

/// Bcrypt hash of a delivery person's password.
///
/// Plaintext passwords only exist in forms; the registry stores this hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes a non-empty plaintext password with the given bcrypt cost.
    pub fn from_plain(plain: &str, cost: u32) -> Result<Self, TypeConstraintError> {
        if plain.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let hashed = bcrypt::hash(plain, cost)
            .map_err(|e| TypeConstraintError::PasswordHash(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Returns `true` when `plain` matches the stored hash.
    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0).unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = TypeConstraintError;

    /// Accepts only strings in bcrypt's modular crypt format.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        bcrypt::HashParts::from_str(&value)
            .map_err(|e| TypeConstraintError::PasswordHash(e.to_string()))?;
        Ok(Self(value))
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
