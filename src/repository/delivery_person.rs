//! Registry implementation for delivery persons.

use crate::{
    domain::{
        delivery_person::{DeliveryPerson, NewDeliveryPerson, UpdateDeliveryPerson},
        types::{DeliveryPersonCode, DeliveryPersonId},
    },
    repository::{
        DeliveryPersonReader, DeliveryPersonWriter, InMemoryRepository, RegistryState,
        errors::{RepositoryError, RepositoryResult},
        next_id,
    },
};

fn ensure_unique_code(
    state: &RegistryState,
    code: &DeliveryPersonCode,
    except: Option<DeliveryPersonId>,
) -> RepositoryResult<()> {
    let taken = state
        .delivery_persons
        .values()
        .any(|person| &person.code == code && Some(person.id) != except);

    if taken {
        return Err(RepositoryError::ConstraintViolation(format!(
            "Unique constraint violation: delivery person code {code}"
        )));
    }
    Ok(())
}

impl DeliveryPersonWriter for InMemoryRepository {
    fn create_delivery_person(
        &self,
        new_person: &NewDeliveryPerson,
    ) -> RepositoryResult<DeliveryPerson> {
        let mut state = self.state()?;

        ensure_unique_code(&state, &new_person.code, None)?;

        let id = DeliveryPersonId::new(next_id(&mut state.last_delivery_person_id)?)
            .map_err(|e| RepositoryError::Unexpected(e.to_string()))?;
        let person = new_person.clone().into_delivery_person(id);
        state.delivery_persons.insert(id.get(), person.clone());

        Ok(person)
    }

    fn update_delivery_person(
        &self,
        id: DeliveryPersonId,
        updates: &UpdateDeliveryPerson,
    ) -> RepositoryResult<DeliveryPerson> {
        let mut state = self.state()?;

        if !state.delivery_persons.contains_key(&id.get()) {
            return Err(RepositoryError::NotFound);
        }
        ensure_unique_code(&state, &updates.code, Some(id))?;

        let person = updates.clone().into_delivery_person(id);
        state.delivery_persons.insert(id.get(), person.clone());

        Ok(person)
    }

    fn delete_delivery_person(&self, id: DeliveryPersonId) -> RepositoryResult<()> {
        let mut state = self.state()?;

        state
            .delivery_persons
            .remove(&id.get())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

impl DeliveryPersonReader for InMemoryRepository {
    fn get_delivery_person_by_id(
        &self,
        id: DeliveryPersonId,
    ) -> RepositoryResult<Option<DeliveryPerson>> {
        let state = self.state()?;
        Ok(state.delivery_persons.get(&id.get()).cloned())
    }

    fn list_delivery_persons(&self) -> RepositoryResult<Vec<DeliveryPerson>> {
        let state = self.state()?;
        Ok(state.delivery_persons.values().cloned().collect())
    }
}
