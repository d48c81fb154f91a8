//! Registry implementation for clients.

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::{ClientCode, ClientId},
    },
    repository::{
        ClientReader, ClientWriter, InMemoryRepository, RegistryState,
        errors::{RepositoryError, RepositoryResult},
        next_id,
    },
};

/// Fails when another client (other than `except`) already uses `code`.
fn ensure_unique_code(
    state: &RegistryState,
    code: &ClientCode,
    except: Option<ClientId>,
) -> RepositoryResult<()> {
    let taken = state
        .clients
        .values()
        .any(|client| &client.code == code && Some(client.id) != except);

    if taken {
        return Err(RepositoryError::ConstraintViolation(format!(
            "Unique constraint violation: client code {code}"
        )));
    }
    Ok(())
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut state = self.state()?;

        ensure_unique_code(&state, &new_client.code, None)?;

        let id = ClientId::new(next_id(&mut state.last_client_id)?)
            .map_err(|e| RepositoryError::Unexpected(e.to_string()))?;
        let client = new_client.clone().into_client(id);
        state.clients.insert(id.get(), client.clone());

        Ok(client)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut state = self.state()?;

        if !state.clients.contains_key(&client_id.get()) {
            return Err(RepositoryError::NotFound);
        }
        ensure_unique_code(&state, &updates.code, Some(client_id))?;

        let client = updates.clone().into_client(client_id);
        state.clients.insert(client_id.get(), client.clone());

        Ok(client)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut state = self.state()?;

        // Movements keep their client snapshot; nothing cascades.
        state
            .clients
            .remove(&client_id.get())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let state = self.state()?;
        Ok(state.clients.get(&id.get()).cloned())
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let state = self.state()?;
        Ok(state.clients.values().cloned().collect())
    }
}
