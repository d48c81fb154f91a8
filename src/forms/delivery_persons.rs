use serde::Deserialize;
use validator::Validate;

use crate::domain::delivery_person::NewDeliveryPerson;
use crate::domain::types::{
    DeliveryPersonCode, DeliveryPersonEmail, DeliveryPersonName, PasswordHash, TypeConstraintError,
};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for creating or editing a delivery person.
pub struct DeliveryPersonForm {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Plaintext password; hashed before it leaves this module.
    #[validate(length(min = 1))]
    pub password: String,
}

impl std::fmt::Debug for DeliveryPersonForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryPersonForm")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Validated fields, password not yet hashed.
pub struct DeliveryPersonPayload {
    pub code: DeliveryPersonCode,
    pub name: DeliveryPersonName,
    pub email: DeliveryPersonEmail,
    password: String,
}

impl TryFrom<DeliveryPersonForm> for DeliveryPersonPayload {
    type Error = FormError;

    fn try_from(form: DeliveryPersonForm) -> Result<Self, Self::Error> {
        form.validate()?;

        if form.password.trim().is_empty() {
            return Err(FormError::InvalidPassword);
        }

        Ok(Self {
            code: DeliveryPersonCode::new(form.code).map_err(|_| FormError::InvalidCode)?,
            name: DeliveryPersonName::new(form.name).map_err(|_| FormError::InvalidName)?,
            email: DeliveryPersonEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?,
            password: form.password,
        })
    }
}

impl DeliveryPersonPayload {
    /// Hashes the password with bcrypt at `hash_cost`.
    pub fn into_domain(self, hash_cost: u32) -> Result<NewDeliveryPerson, TypeConstraintError> {
        Ok(NewDeliveryPerson {
            code: self.code,
            name: self.name,
            email: self.email,
            password_hash: PasswordHash::from_plain(&self.password, hash_cost)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str) -> DeliveryPersonForm {
        DeliveryPersonForm {
            code: "ENT001".to_string(),
            name: "Joe".to_string(),
            email: "Joe@Example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn payload_hashes_password() {
        let payload = DeliveryPersonPayload::try_from(form("hunter2")).unwrap();
        let person = payload.into_domain(4).unwrap();

        assert_eq!(person.email.as_str(), "joe@example.com");
        assert!(person.password_hash.verify("hunter2"));
    }

    #[test]
    fn blank_password_is_rejected() {
        assert!(matches!(
            DeliveryPersonPayload::try_from(form("   ")),
            Err(FormError::InvalidPassword)
        ));
        assert!(matches!(
            DeliveryPersonPayload::try_from(form("")),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", form("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
