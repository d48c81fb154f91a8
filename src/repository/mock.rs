//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::delivery_person::{DeliveryPerson, NewDeliveryPerson, UpdateDeliveryPerson};
use crate::domain::movement::{
    Assignment, Movement, NewMovement, StatusTransition, UpdateMovement,
};
use crate::domain::types::{ClientId, DeliveryPersonId, MovementId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, DeliveryPersonReader, DeliveryPersonWriter, MovementListQuery,
    MovementReader, MovementWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(
            &self,
            client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    }

    impl DeliveryPersonReader for Repository {
        fn get_delivery_person_by_id(
            &self,
            id: DeliveryPersonId,
        ) -> RepositoryResult<Option<DeliveryPerson>>;
        fn list_delivery_persons(&self) -> RepositoryResult<Vec<DeliveryPerson>>;
    }

    impl DeliveryPersonWriter for Repository {
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

    impl MovementReader for Repository {
        fn get_movement_by_id(&self, id: MovementId) -> RepositoryResult<Option<Movement>>;
        fn list_movements(&self, query: &MovementListQuery) -> RepositoryResult<Vec<Movement>>;
    }

    impl MovementWriter for Repository {
        fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement>;
        fn update_movement(
            &self,
            id: MovementId,
            updates: &UpdateMovement,
        ) -> RepositoryResult<Movement>;
        fn delete_movement(&self, id: MovementId) -> RepositoryResult<()>;
        fn assign_movement(
            &self,
            id: MovementId,
            assignment: &Assignment,
        ) -> RepositoryResult<Movement>;
        fn transition_movement(
            &self,
            id: MovementId,
            transition: &StatusTransition,
        ) -> RepositoryResult<Movement>;
    }
}
