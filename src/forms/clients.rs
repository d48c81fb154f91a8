use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientCode, ClientEmail, ClientName};
use crate::forms::{FormError, non_blank};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a client.
pub struct ClientForm {
    /// Short client code, e.g. `CLI001`.
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Validated client payload.
pub struct ClientPayload {
    pub client: NewClient,
}

impl TryFrom<ClientForm> for ClientPayload {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let code = ClientCode::new(form.code).map_err(|_| FormError::InvalidCode)?;
        let name = ClientName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let email = non_blank(&form.email)
            .map(ClientEmail::new)
            .transpose()
            .map_err(|_| FormError::InvalidEmail)?;

        Ok(Self {
            client: NewClient::new(code, name, form.address, form.phone, email),
        })
    }
}
