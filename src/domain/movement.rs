//! Movement aggregate and its lifecycle rules.
//!
//! A movement starts out pending and unassigned. It can be assigned once while
//! pending, and it leaves the pending state exactly once, carrying a
//! justification. Client and delivery person names are copied onto the
//! movement when it is saved or assigned and are not refreshed afterwards.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::client::Client;
use crate::domain::delivery_person::DeliveryPerson;
use crate::domain::types::{
    ClientId, ClientName, DeliveryPersonId, DeliveryPersonName, Justification,
    MovementDescription, MovementId, Quantity, TypeConstraintError,
};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Delivery,
    Pickup,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Delivery => "delivery",
            MovementType::Pickup => "pickup",
        }
    }
}

impl Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "delivery" => Ok(MovementType::Delivery),
            "pickup" => Ok(MovementType::Pickup),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown movement type `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementStatus {
    #[default]
    Pending,
    Delivered,
    NotDelivered,
    Damaged,
}

impl MovementStatus {
    pub const ALL: [MovementStatus; 4] = [
        MovementStatus::Pending,
        MovementStatus::Delivered,
        MovementStatus::NotDelivered,
        MovementStatus::Damaged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStatus::Pending => "pending",
            MovementStatus::Delivered => "delivered",
            MovementStatus::NotDelivered => "not_delivered",
            MovementStatus::Damaged => "damaged",
        }
    }

    /// Human readable label used by dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            MovementStatus::Pending => "Pending",
            MovementStatus::Delivered => "Delivered",
            MovementStatus::NotDelivered => "Not delivered",
            MovementStatus::Damaged => "Damaged",
        }
    }

    /// Every status other than pending is final.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MovementStatus::Pending)
    }
}

impl Display for MovementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovementStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown status `{s}`")))
    }
}

/// Lifecycle violations raised by [`Movement`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovementError {
    #[error("movement is {0}; only pending movements can change")]
    NotPending(MovementStatus),
    #[error("movement is already assigned to delivery person {0}")]
    AlreadyAssigned(DeliveryPersonId),
    #[error("`{0}` is not a valid target status")]
    InvalidTarget(MovementStatus),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: MovementId,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub client_id: ClientId,
    /// Client name at the time the movement was last saved.
    pub client_name: ClientName,
    pub description: MovementDescription,
    pub quantity: Quantity,
    pub status: MovementStatus,
    pub delivery_person_id: Option<DeliveryPersonId>,
    /// Delivery person name at the time of assignment.
    pub delivery_person_name: Option<DeliveryPersonName>,
    pub assigned_at: Option<NaiveDateTime>,
    pub created_at: NaiveDate,
    pub justification: Option<Justification>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Movement {
    /// Pending movements without an assignee can be handed to a delivery person.
    pub fn is_assignable(&self) -> bool {
        self.status == MovementStatus::Pending && self.delivery_person_id.is_none()
    }

    pub fn is_assigned_to(&self, delivery_person_id: DeliveryPersonId) -> bool {
        self.delivery_person_id == Some(delivery_person_id)
    }

    pub fn assign(
        &mut self,
        assignment: &Assignment,
        now: NaiveDateTime,
    ) -> Result<(), MovementError> {
        if self.status.is_terminal() {
            return Err(MovementError::NotPending(self.status));
        }
        if let Some(current) = self.delivery_person_id {
            return Err(MovementError::AlreadyAssigned(current));
        }

        self.delivery_person_id = Some(assignment.delivery_person_id);
        self.delivery_person_name = Some(assignment.delivery_person_name.clone());
        self.assigned_at = Some(now);
        Ok(())
    }

    pub fn transition(
        &mut self,
        transition: &StatusTransition,
        now: NaiveDateTime,
    ) -> Result<(), MovementError> {
        if self.status.is_terminal() {
            return Err(MovementError::NotPending(self.status));
        }

        self.status = transition.status;
        self.justification = Some(transition.justification.clone());
        self.updated_at = Some(now);
        Ok(())
    }

    /// Overwrites the editable fields, keeping lifecycle state intact.
    pub(crate) fn apply_update(&mut self, update: &UpdateMovement) {
        self.movement_type = update.movement_type;
        self.client_id = update.client_id;
        self.client_name = update.client_name.clone();
        self.description = update.description.clone();
        self.quantity = update.quantity.clone();
    }
}

/// Editable movement fields with the client name resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMovement {
    pub movement_type: MovementType,
    pub client_id: ClientId,
    pub client_name: ClientName,
    pub description: MovementDescription,
    pub quantity: Quantity,
}

impl UpdateMovement {
    #[must_use]
    pub fn new(
        movement_type: MovementType,
        client: &Client,
        description: MovementDescription,
        quantity: Quantity,
    ) -> Self {
        Self {
            movement_type,
            client_id: client.id,
            client_name: client.name.clone(),
            description,
            quantity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewMovement {
    pub fields: UpdateMovement,
    pub created_at: NaiveDate,
}

impl NewMovement {
    /// Stamps the movement with today's date.
    #[must_use]
    pub fn new(fields: UpdateMovement) -> Self {
        Self {
            fields,
            created_at: Utc::now().date_naive(),
        }
    }

    pub(crate) fn into_movement(self, id: MovementId) -> Movement {
        let UpdateMovement {
            movement_type,
            client_id,
            client_name,
            description,
            quantity,
        } = self.fields;

        Movement {
            id,
            movement_type,
            client_id,
            client_name,
            description,
            quantity,
            status: MovementStatus::Pending,
            delivery_person_id: None,
            delivery_person_name: None,
            assigned_at: None,
            created_at: self.created_at,
            justification: None,
            updated_at: None,
        }
    }
}

/// Delivery person snapshot copied onto a movement.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub delivery_person_id: DeliveryPersonId,
    pub delivery_person_name: DeliveryPersonName,
}

impl From<&DeliveryPerson> for Assignment {
    fn from(person: &DeliveryPerson) -> Self {
        Self {
            delivery_person_id: person.id,
            delivery_person_name: person.name.clone(),
        }
    }
}

/// Validated request to move a pending movement into a final status.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusTransition {
    pub status: MovementStatus,
    pub justification: Justification,
}

impl StatusTransition {
    pub fn new(
        status: MovementStatus,
        justification: Justification,
    ) -> Result<Self, MovementError> {
        if !status.is_terminal() {
            return Err(MovementError::InvalidTarget(status));
        }
        Ok(Self {
            status,
            justification,
        })
    }
}
