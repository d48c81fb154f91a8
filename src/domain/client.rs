use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientCode, ClientEmail, ClientId, ClientName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub code: ClientCode,
    pub name: ClientName,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<ClientEmail>,
}

/// Fields accepted when creating or editing a client.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub code: ClientCode,
    pub name: ClientName,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<ClientEmail>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        code: ClientCode,
        name: ClientName,
        address: Option<String>,
        phone: Option<String>,
        email: Option<ClientEmail>,
    ) -> Self {
        Self {
            code,
            name,
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email,
        }
    }

    pub(crate) fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            code: self.code,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Editing replaces every user-editable field.
pub type UpdateClient = NewClient;
