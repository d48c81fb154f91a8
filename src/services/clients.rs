//! Services handling client administration.

use crate::domain::client::Client;
use crate::domain::profile::Profile;
use crate::domain::types::ClientId;
use crate::forms::clients::{ClientForm, ClientPayload};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceResult, ensure_admin};

/// Lists every client in the registry.
pub fn list_clients<R>(repo: &R, profile: &Profile) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    ensure_admin(profile)?;

    Ok(repo.list_clients()?)
}

/// Validates the form and registers a new client.
pub fn create_client<R>(repo: &R, profile: &Profile, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    ensure_admin(profile)?;

    let payload = ClientPayload::try_from(form)?;

    let client = repo.create_client(&payload.client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;

    log::info!("Created client {} ({})", client.id, client.code);
    Ok(client)
}

/// Replaces the editable fields of an existing client.
///
/// Movements keep the client name they were saved with.
pub fn update_client<R>(
    repo: &R,
    profile: &Profile,
    client_id: i32,
    form: ClientForm,
) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    ensure_admin(profile)?;

    let client_id = ClientId::new(client_id)?;
    let payload = ClientPayload::try_from(form)?;

    let client = repo
        .update_client(client_id, &payload.client)
        .map_err(|err| {
            log::error!("Failed to update client {client_id}: {err}");
            err
        })?;

    log::info!("Updated client {client_id}");
    Ok(client)
}

/// Removes a client. Movements referencing it are left in place.
pub fn delete_client<R>(repo: &R, profile: &Profile, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    ensure_admin(profile)?;

    let client_id = ClientId::new(client_id)?;

    repo.delete_client(client_id).map_err(|err| {
        log::error!("Failed to delete client {client_id}: {err}");
        err
    })?;

    log::info!("Deleted client {client_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DeliveryPersonId;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn acme_form() -> ClientForm {
        ClientForm {
            code: "CLI001".to_string(),
            name: "Acme".to_string(),
            ..ClientForm::default()
        }
    }

    fn courier() -> Profile {
        Profile::DeliveryPerson(DeliveryPersonId::new(1).unwrap())
    }

    #[test]
    fn create_requires_admin() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);

        let result = create_client(&repo, &courier(), acme_form());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_persists_validated_client() {
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .withf(|new_client| {
                new_client.code.as_str() == "CLI001" && new_client.name.as_str() == "Acme"
            })
            .times(1)
            .returning(|new_client| Ok(new_client.clone().into_client(ClientId::new(1).unwrap())));

        let client = create_client(&repo, &Profile::Admin, acme_form()).unwrap();

        assert_eq!(client.id.get(), 1);
    }

    #[test]
    fn invalid_form_never_reaches_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);
        let form = ClientForm {
            name: String::new(),
            ..acme_form()
        };

        let result = create_client(&repo, &Profile::Admin, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "client code CLI001".to_string(),
            ))
        });

        let result = create_client(&repo, &Profile::Admin, acme_form());

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn delete_rejects_invalid_id() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client().times(0);

        let result = delete_client(&repo, &Profile::Admin, 0);

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn update_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_client()
            .withf(|id, _| id.get() == 9)
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = update_client(&repo, &Profile::Admin, 9, acme_form());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
