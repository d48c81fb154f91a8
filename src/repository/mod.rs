use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        delivery_person::{DeliveryPerson, NewDeliveryPerson, UpdateDeliveryPerson},
        movement::{
            Assignment, Movement, MovementStatus, NewMovement, StatusTransition, UpdateMovement,
        },
        types::{ClientId, DeliveryPersonId, MovementId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod delivery_person;
pub mod errors;
pub mod movement;
pub mod snapshot;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use snapshot::RegistrySnapshot;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Filters applied when listing movements. All filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementListQuery {
    /// Case-insensitive substring matched against client and delivery person names.
    pub search: Option<String>,
    pub status: Option<MovementStatus>,
    pub delivery_person_id: Option<DeliveryPersonId>,
    /// Only pending movements without an assignee.
    pub assignable_only: bool,
}

impl MovementListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: MovementStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn delivery_person(mut self, id: DeliveryPersonId) -> Self {
        self.delivery_person_id = Some(id);
        self
    }

    pub fn assignable(mut self) -> Self {
        self.assignable_only = true;
        self
    }

    /// Returns `true` when `movement` passes every filter.
    pub fn matches(&self, movement: &Movement) -> bool {
        if self.assignable_only && !movement.is_assignable() {
            return false;
        }
        if self.status.is_some_and(|status| movement.status != status) {
            return false;
        }
        if self
            .delivery_person_id
            .is_some_and(|id| !movement.is_assigned_to(id))
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                movement.client_name.to_lowercase().contains(&term)
                    || movement
                        .delivery_person_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&term))
            }
            _ => true,
        }
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}

pub trait DeliveryPersonReader {
    fn get_delivery_person_by_id(
        &self,
        id: DeliveryPersonId,
    ) -> RepositoryResult<Option<DeliveryPerson>>;
    fn list_delivery_persons(&self) -> RepositoryResult<Vec<DeliveryPerson>>;
}

pub trait DeliveryPersonWriter {
    fn create_delivery_person(
        &self,
        new_person: &NewDeliveryPerson,
    ) -> RepositoryResult<DeliveryPerson>;
    fn update_delivery_person(
        &self,
        id: DeliveryPersonId,
        updates: &UpdateDeliveryPerson,
    ) -> RepositoryResult<DeliveryPerson>;
    fn delete_delivery_person(&self, id: DeliveryPersonId) -> RepositoryResult<()>;
}

pub trait MovementReader {
    fn get_movement_by_id(&self, id: MovementId) -> RepositoryResult<Option<Movement>>;
    fn list_movements(&self, query: &MovementListQuery) -> RepositoryResult<Vec<Movement>>;
}

pub trait MovementWriter {
    fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement>;
    fn update_movement(
        &self,
        id: MovementId,
        updates: &UpdateMovement,
    ) -> RepositoryResult<Movement>;
    fn delete_movement(&self, id: MovementId) -> RepositoryResult<()>;
    /// Assigns atomically; fails when the movement is not assignable.
    fn assign_movement(&self, id: MovementId, assignment: &Assignment)
    -> RepositoryResult<Movement>;
    /// Transitions atomically; fails when the movement already left pending.
    fn transition_movement(
        &self,
        id: MovementId,
        transition: &StatusTransition,
    ) -> RepositoryResult<Movement>;
}

/// Collections owned by the registry, keyed by raw id.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub(crate) clients: BTreeMap<i32, Client>,
    pub(crate) delivery_persons: BTreeMap<i32, DeliveryPerson>,
    pub(crate) movements: BTreeMap<i32, Movement>,
    pub(crate) last_client_id: i32,
    pub(crate) last_delivery_person_id: i32,
    pub(crate) last_movement_id: i32,
}

/// In-memory movement registry.
///
/// Clones share the same state, so the admin and delivery dashboards observe
/// each other's changes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<RegistryState>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: RegistryState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn state(&self) -> RepositoryResult<MutexGuard<'_, RegistryState>> {
        Ok(self.state.lock()?)
    }
}

/// Allocates the next identifier after `last`.
fn next_id(last: &mut i32) -> RepositoryResult<i32> {
    *last = last
        .checked_add(1)
        .ok_or_else(|| errors::RepositoryError::Unexpected("identifier overflow".to_string()))?;
    Ok(*last)
}
