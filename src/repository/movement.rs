//! Registry implementation for movements.

use chrono::Utc;

use crate::{
    domain::{
        movement::{Assignment, Movement, NewMovement, StatusTransition, UpdateMovement},
        types::MovementId,
    },
    repository::{
        InMemoryRepository, MovementListQuery, MovementReader, MovementWriter,
        errors::{RepositoryError, RepositoryResult},
        next_id,
    },
};

impl InMemoryRepository {
    /// Applies `change` to the stored movement under a single lock.
    fn modify_movement<F>(&self, id: MovementId, change: F) -> RepositoryResult<Movement>
    where
        F: FnOnce(&mut Movement) -> RepositoryResult<()>,
    {
        let mut state = self.state()?;

        let movement = state
            .movements
            .get_mut(&id.get())
            .ok_or(RepositoryError::NotFound)?;

        // Work on a copy so a rejected change leaves the stored record untouched.
        let mut updated = movement.clone();
        change(&mut updated)?;
        *movement = updated.clone();

        Ok(updated)
    }
}

impl MovementWriter for InMemoryRepository {
    fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement> {
        let mut state = self.state()?;

        let id = MovementId::new(next_id(&mut state.last_movement_id)?)
            .map_err(|e| RepositoryError::Unexpected(e.to_string()))?;
        let movement = new_movement.clone().into_movement(id);
        state.movements.insert(id.get(), movement.clone());

        Ok(movement)
    }

    fn update_movement(
        &self,
        id: MovementId,
        updates: &UpdateMovement,
    ) -> RepositoryResult<Movement> {
        self.modify_movement(id, |movement| {
            movement.apply_update(updates);
            Ok(())
        })
    }

    fn delete_movement(&self, id: MovementId) -> RepositoryResult<()> {
        let mut state = self.state()?;

        state
            .movements
            .remove(&id.get())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn assign_movement(
        &self,
        id: MovementId,
        assignment: &Assignment,
    ) -> RepositoryResult<Movement> {
        let now = Utc::now().naive_utc();
        self.modify_movement(id, |movement| Ok(movement.assign(assignment, now)?))
    }

    fn transition_movement(
        &self,
        id: MovementId,
        transition: &StatusTransition,
    ) -> RepositoryResult<Movement> {
        let now = Utc::now().naive_utc();
        self.modify_movement(id, |movement| Ok(movement.transition(transition, now)?))
    }
}

impl MovementReader for InMemoryRepository {
    fn get_movement_by_id(&self, id: MovementId) -> RepositoryResult<Option<Movement>> {
        let state = self.state()?;
        Ok(state.movements.get(&id.get()).cloned())
    }

    fn list_movements(&self, query: &MovementListQuery) -> RepositoryResult<Vec<Movement>> {
        let state = self.state()?;
        Ok(state
            .movements
            .values()
            .filter(|movement| query.matches(movement))
            .cloned()
            .collect())
    }
}
