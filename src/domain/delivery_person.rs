use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DeliveryPersonCode, DeliveryPersonEmail, DeliveryPersonId, DeliveryPersonName, PasswordHash,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeliveryPerson {
    pub id: DeliveryPersonId,
    pub code: DeliveryPersonCode,
    pub name: DeliveryPersonName,
    pub email: DeliveryPersonEmail,
    pub password_hash: PasswordHash,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDeliveryPerson {
    pub code: DeliveryPersonCode,
    pub name: DeliveryPersonName,
    pub email: DeliveryPersonEmail,
    pub password_hash: PasswordHash,
}

impl NewDeliveryPerson {
    pub(crate) fn into_delivery_person(self, id: DeliveryPersonId) -> DeliveryPerson {
        DeliveryPerson {
            id,
            code: self.code,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

pub type UpdateDeliveryPerson = NewDeliveryPerson;
