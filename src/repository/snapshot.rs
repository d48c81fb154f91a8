//! Whole-registry export and import.
//!
//! A snapshot is the unit a storage backend would save and load. The registry
//! itself never touches the filesystem.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::delivery_person::DeliveryPerson;
use crate::domain::movement::{Movement, MovementStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{InMemoryRepository, RegistryState};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub delivery_persons: Vec<DeliveryPerson>,
    #[serde(default)]
    pub movements: Vec<Movement>,
    /// Highest id ever issued per collection, including deleted records.
    #[serde(default)]
    pub last_client_id: i32,
    #[serde(default)]
    pub last_delivery_person_id: i32,
    #[serde(default)]
    pub last_movement_id: i32,
}

/// Indexes `items` by id, rejecting duplicate ids.
fn index_by_id<T, K>(
    items: Vec<T>,
    entity: &str,
    id_of: impl Fn(&T) -> i32,
    code_of: impl Fn(&T) -> Option<K>,
) -> RepositoryResult<BTreeMap<i32, T>>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    let mut indexed = BTreeMap::new();
    let mut codes = HashSet::new();

    for item in items {
        if let Some(code) = code_of(&item) {
            let message = format!("Unique constraint violation: {entity} code {code}");
            if !codes.insert(code) {
                return Err(RepositoryError::ConstraintViolation(message));
            }
        }
        let id = id_of(&item);
        if indexed.insert(id, item).is_some() {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Unique constraint violation: {entity} id {id}"
            )));
        }
    }

    Ok(indexed)
}

fn last_key<T>(map: &BTreeMap<i32, T>) -> i32 {
    map.keys().next_back().copied().unwrap_or(0)
}

/// Rejects movements whose lifecycle fields contradict each other.
fn check_movement(movement: &Movement) -> RepositoryResult<()> {
    let problem = if movement.status.is_terminal() && movement.justification.is_none() {
        Some("is closed without a justification")
    } else if movement.status == MovementStatus::Pending && movement.justification.is_some() {
        Some("is pending but carries a justification")
    } else if movement.delivery_person_id.is_some() != movement.delivery_person_name.is_some() {
        Some("has a partially recorded delivery person")
    } else {
        None
    };

    match problem {
        Some(problem) => Err(RepositoryError::ValidationError(format!(
            "movement {} {problem}",
            movement.id
        ))),
        None => Ok(()),
    }
}

impl InMemoryRepository {
    /// Builds a registry from a snapshot.
    ///
    /// Identifier allocation continues after the highest id the snapshot knows
    /// of: its recorded counters, the ids present, and the client and delivery
    /// person ids still referenced by movements.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> RepositoryResult<Self> {
        for movement in &snapshot.movements {
            check_movement(movement)?;
        }

        let clients = index_by_id(
            snapshot.clients,
            "client",
            |c| c.id.get(),
            |c| Some(c.code.clone()),
        )?;
        let delivery_persons = index_by_id(
            snapshot.delivery_persons,
            "delivery person",
            |p| p.id.get(),
            |p| Some(p.code.clone()),
        )?;
        let movements = index_by_id(
            snapshot.movements,
            "movement",
            |m| m.id.get(),
            |_| None::<String>,
        )?;

        let referenced_client = movements
            .values()
            .map(|m| m.client_id.get())
            .max()
            .unwrap_or(0);
        let referenced_delivery_person = movements
            .values()
            .filter_map(|m| m.delivery_person_id.map(|id| id.get()))
            .max()
            .unwrap_or(0);

        let state = RegistryState {
            last_client_id: snapshot
                .last_client_id
                .max(last_key(&clients))
                .max(referenced_client),
            last_delivery_person_id: snapshot
                .last_delivery_person_id
                .max(last_key(&delivery_persons))
                .max(referenced_delivery_person),
            last_movement_id: snapshot.last_movement_id.max(last_key(&movements)),
            clients,
            delivery_persons,
            movements,
        };

        Ok(Self::from_state(state))
    }

    /// Copies the current contents of every collection.
    pub fn snapshot(&self) -> RepositoryResult<RegistrySnapshot> {
        let state = self.state()?;
        Ok(RegistrySnapshot {
            clients: state.clients.values().cloned().collect(),
            delivery_persons: state.delivery_persons.values().cloned().collect(),
            movements: state.movements.values().cloned().collect(),
            last_client_id: state.last_client_id,
            last_delivery_person_id: state.last_delivery_person_id,
            last_movement_id: state.last_movement_id,
        })
    }
}
