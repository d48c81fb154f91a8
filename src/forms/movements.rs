//! Forms for creating, assigning and closing movements.

use serde::Deserialize;
use validator::Validate;

use crate::domain::client::Client;
use crate::domain::movement::{MovementStatus, MovementType, StatusTransition, UpdateMovement};
use crate::domain::types::{
    ClientId, DeliveryPersonId, Justification, MovementDescription, MovementId, Quantity,
};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a movement.
pub struct MovementForm {
    /// `delivery` or `pickup`.
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub movement_type: String,
    pub client_id: i32,
    #[validate(length(min = 1))]
    pub description: String,
    /// Free text such as `2 boxes`.
    #[validate(length(min = 1))]
    pub quantity: String,
}

pub struct MovementPayload {
    pub movement_type: MovementType,
    pub client_id: ClientId,
    pub description: MovementDescription,
    pub quantity: Quantity,
}

impl TryFrom<MovementForm> for MovementPayload {
    type Error = FormError;

    fn try_from(form: MovementForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            movement_type: form
                .movement_type
                .parse()
                .map_err(|_| FormError::InvalidMovementType)?,
            client_id: ClientId::new(form.client_id).map_err(|_| FormError::InvalidClientId)?,
            description: MovementDescription::new(form.description)
                .map_err(|_| FormError::InvalidDescription)?,
            quantity: Quantity::new(form.quantity).map_err(|_| FormError::InvalidQuantity)?,
        })
    }
}

impl MovementPayload {
    /// Resolves the payload against the referenced client, copying its name.
    pub fn into_domain(self, client: &Client) -> UpdateMovement {
        UpdateMovement::new(self.movement_type, client, self.description, self.quantity)
    }
}

#[derive(Debug, Deserialize)]
/// Form data for handing a pending movement to a delivery person.
pub struct AssignMovementForm {
    pub movement_id: i32,
    pub delivery_person_id: i32,
}

pub struct AssignMovementPayload {
    pub movement_id: MovementId,
    pub delivery_person_id: DeliveryPersonId,
}

impl TryFrom<AssignMovementForm> for AssignMovementPayload {
    type Error = FormError;

    fn try_from(form: AssignMovementForm) -> Result<Self, Self::Error> {
        Ok(Self {
            movement_id: MovementId::new(form.movement_id)
                .map_err(|_| FormError::InvalidMovementId)?,
            delivery_person_id: DeliveryPersonId::new(form.delivery_person_id)
                .map_err(|_| FormError::InvalidDeliveryPersonId)?,
        })
    }
}

#[derive(Debug, Deserialize)]
/// Form data submitted by the delivery person when closing a movement.
pub struct TransitionStatusForm {
    pub movement_id: i32,
    /// `delivered`, `not_delivered` or `damaged`.
    pub status: String,
    #[serde(default)]
    pub justification: String,
}

pub struct TransitionStatusPayload {
    pub movement_id: MovementId,
    pub transition: StatusTransition,
}

impl TryFrom<TransitionStatusForm> for TransitionStatusPayload {
    type Error = FormError;

    fn try_from(form: TransitionStatusForm) -> Result<Self, Self::Error> {
        let movement_id =
            MovementId::new(form.movement_id).map_err(|_| FormError::InvalidMovementId)?;
        let status: MovementStatus = form.status.parse().map_err(|_| FormError::InvalidStatus)?;
        let justification =
            Justification::new(form.justification).map_err(|_| FormError::MissingJustification)?;
        let transition =
            StatusTransition::new(status, justification).map_err(|_| FormError::InvalidStatus)?;

        Ok(Self {
            movement_id,
            transition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_form_requires_every_field() {
        let form = MovementForm {
            movement_type: "delivery".to_string(),
            client_id: 1,
            description: "box".to_string(),
            quantity: String::new(),
        };
        assert!(matches!(
            MovementPayload::try_from(form),
            Err(FormError::Validation(_))
        ));

        let form = MovementForm {
            movement_type: "teleport".to_string(),
            client_id: 1,
            description: "box".to_string(),
            quantity: "1".to_string(),
        };
        assert!(matches!(
            MovementPayload::try_from(form),
            Err(FormError::InvalidMovementType)
        ));

        let form = MovementForm {
            movement_type: "pickup".to_string(),
            client_id: 0,
            description: "box".to_string(),
            quantity: "1".to_string(),
        };
        assert!(matches!(
            MovementPayload::try_from(form),
            Err(FormError::InvalidClientId)
        ));
    }

    #[test]
    fn movement_form_deserializes_type_key() {
        let form: MovementForm = serde_json::from_str(
            r#"{"type":"pickup","client_id":2,"description":"laptops","quantity":"3 items"}"#,
        )
        .unwrap();

        let payload = MovementPayload::try_from(form).unwrap();

        assert_eq!(payload.movement_type, MovementType::Pickup);
        assert_eq!(payload.quantity.as_str(), "3 items");
    }

    #[test]
    fn transition_requires_justification() {
        let form = TransitionStatusForm {
            movement_id: 1,
            status: "delivered".to_string(),
            justification: "   ".to_string(),
        };

        assert!(matches!(
            TransitionStatusPayload::try_from(form),
            Err(FormError::MissingJustification)
        ));
    }

    #[test]
    fn transition_back_to_pending_is_invalid() {
        let form = TransitionStatusForm {
            movement_id: 1,
            status: "pending".to_string(),
            justification: "undo".to_string(),
        };

        assert!(matches!(
            TransitionStatusPayload::try_from(form),
            Err(FormError::InvalidStatus)
        ));
    }

    #[test]
    fn transition_payload_keeps_reason() {
        let form = TransitionStatusForm {
            movement_id: 4,
            status: "damaged".to_string(),
            justification: " box was wet ".to_string(),
        };

        let payload = TransitionStatusPayload::try_from(form).unwrap();

        assert_eq!(payload.transition.status, MovementStatus::Damaged);
        assert_eq!(payload.transition.justification.as_str(), "box was wet");
    }
}
