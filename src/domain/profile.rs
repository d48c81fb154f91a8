//! Dashboard profile chosen at sign-in.

use serde::{Deserialize, Serialize};

use crate::domain::types::DeliveryPersonId;

/// Who is operating the registry. No credentials are checked.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "profile", content = "delivery_person_id", rename_all = "snake_case")]
pub enum Profile {
    Admin,
    DeliveryPerson(DeliveryPersonId),
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        matches!(self, Profile::Admin)
    }

    pub fn delivery_person_id(&self) -> Option<DeliveryPersonId> {
        match self {
            Profile::Admin => None,
            Profile::DeliveryPerson(id) => Some(*id),
        }
    }
}
