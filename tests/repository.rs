use pushkind_delivery::domain::client::{Client, NewClient};
use pushkind_delivery::domain::delivery_person::NewDeliveryPerson;
use pushkind_delivery::domain::movement::{
    Assignment, MovementError, MovementStatus, MovementType, NewMovement, StatusTransition,
    UpdateMovement,
};
use pushkind_delivery::domain::types::{
    ClientCode, ClientName, DeliveryPersonCode, DeliveryPersonEmail, DeliveryPersonName,
    Justification, MovementDescription, MovementId, PasswordHash, Quantity,
};
use pushkind_delivery::repository::errors::RepositoryError;
use pushkind_delivery::repository::{
    ClientReader, ClientWriter, DeliveryPersonReader, DeliveryPersonWriter, InMemoryRepository,
    MovementListQuery, MovementReader, MovementWriter,
};

fn new_client(code: &str, name: &str) -> NewClient {
    NewClient::new(
        ClientCode::new(code).unwrap(),
        ClientName::new(name).unwrap(),
        None,
        None,
        None,
    )
}

fn new_delivery_person(code: &str, name: &str) -> NewDeliveryPerson {
    NewDeliveryPerson {
        code: DeliveryPersonCode::new(code).unwrap(),
        name: DeliveryPersonName::new(name).unwrap(),
        email: DeliveryPersonEmail::new(format!("{}@example.com", code.to_lowercase())).unwrap(),
        password_hash: PasswordHash::from_plain("changeme", 4).unwrap(),
    }
}

fn transition(status: MovementStatus, reason: &str) -> StatusTransition {
    StatusTransition::new(status, Justification::new(reason).unwrap()).unwrap()
}

#[test]
fn test_client_repository_crud() {
    let repo = InMemoryRepository::new();

    let alice = repo.create_client(&new_client("CLI001", "Alice")).unwrap();
    let bob = repo.create_client(&new_client("CLI002", "Bob")).unwrap();
    assert_ne!(alice.id, bob.id);
    assert_eq!(repo.list_clients().unwrap().len(), 2);

    let updated = repo
        .update_client(bob.id, &new_client("CLI002", "Bobby"))
        .unwrap();
    assert_eq!(updated.name.as_str(), "Bobby");

    repo.delete_client(alice.id).unwrap();
    assert!(repo.get_client_by_id(alice.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_client(alice.id),
        Err(RepositoryError::NotFound)
    ));

    let remaining = repo.list_clients().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name.as_str(), "Bobby");
}

#[test]
fn test_client_codes_are_unique() {
    let repo = InMemoryRepository::new();
    repo.create_client(&new_client("CLI001", "Alice")).unwrap();
    let bob = repo.create_client(&new_client("CLI002", "Bob")).unwrap();

    assert!(matches!(
        repo.create_client(&new_client("CLI001", "Other")),
        Err(RepositoryError::ConstraintViolation(_))
    ));
    assert!(matches!(
        repo.update_client(bob.id, &new_client("CLI001", "Bob")),
        Err(RepositoryError::ConstraintViolation(_))
    ));
    // Keeping one's own code is fine.
    repo.update_client(bob.id, &new_client("CLI002", "Robert"))
        .unwrap();
}

#[test]
fn test_ids_are_not_reused() {
    let repo = InMemoryRepository::new();
    let first = repo.create_client(&new_client("CLI001", "Alice")).unwrap();
    repo.delete_client(first.id).unwrap();

    let second = repo.create_client(&new_client("CLI001", "Alice")).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_delivery_person_repository_crud() {
    let repo = InMemoryRepository::new();

    let joe = repo
        .create_delivery_person(&new_delivery_person("ENT001", "Joe"))
        .unwrap();
    assert_eq!(joe.email.as_str(), "ent001@example.com");
    assert!(joe.password_hash.verify("changeme"));

    let renamed = repo
        .update_delivery_person(joe.id, &new_delivery_person("ENT001", "Joseph"))
        .unwrap();
    assert_eq!(renamed.name.as_str(), "Joseph");

    assert!(matches!(
        repo.create_delivery_person(&new_delivery_person("ENT001", "Clone")),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    repo.delete_delivery_person(joe.id).unwrap();
    assert!(repo.list_delivery_persons().unwrap().is_empty());
}

#[test]
fn test_movement_lifecycle() {
    let repo = InMemoryRepository::new();
    let acme = repo.create_client(&new_client("CLI001", "Acme")).unwrap();
    let joe = repo
        .create_delivery_person(&new_delivery_person("ENT001", "Joe"))
        .unwrap();

    let fields = UpdateMovement::new(
        MovementType::Delivery,
        &acme,
        MovementDescription::new("box").unwrap(),
        Quantity::new("1").unwrap(),
    );
    let movement = repo.create_movement(&NewMovement::new(fields)).unwrap();
    assert_eq!(movement.status, MovementStatus::Pending);
    assert!(movement.delivery_person_id.is_none());

    let assigned = repo
        .assign_movement(movement.id, &Assignment::from(&joe))
        .unwrap();
    assert_eq!(assigned.delivery_person_id, Some(joe.id));
    assert!(assigned.assigned_at.is_some());

    let closed = repo
        .transition_movement(movement.id, &transition(MovementStatus::Delivered, "ok"))
        .unwrap();
    assert_eq!(closed.status, MovementStatus::Delivered);
    assert_eq!(closed.justification.unwrap().as_str(), "ok");
    assert!(closed.updated_at.is_some());

    let again = repo.transition_movement(movement.id, &transition(MovementStatus::Damaged, "wet"));
    assert!(matches!(
        again,
        Err(RepositoryError::Lifecycle(MovementError::NotPending(
            MovementStatus::Delivered
        )))
    ));

    let stored = repo.get_movement_by_id(movement.id).unwrap().unwrap();
    assert_eq!(stored.status, MovementStatus::Delivered);
    assert_eq!(stored.justification.unwrap().as_str(), "ok");
}

#[test]
fn test_rejected_assignment_leaves_movement_untouched() {
    let repo = InMemoryRepository::new();
    let acme = repo.create_client(&new_client("CLI001", "Acme")).unwrap();
    let joe = repo
        .create_delivery_person(&new_delivery_person("ENT001", "Joe"))
        .unwrap();
    let ann = repo
        .create_delivery_person(&new_delivery_person("ENT002", "Ann"))
        .unwrap();

    let fields = UpdateMovement::new(
        MovementType::Pickup,
        &acme,
        MovementDescription::new("laptops").unwrap(),
        Quantity::new("3 items").unwrap(),
    );
    let movement = repo.create_movement(&NewMovement::new(fields)).unwrap();
    repo.assign_movement(movement.id, &Assignment::from(&joe))
        .unwrap();

    let result = repo.assign_movement(movement.id, &Assignment::from(&ann));

    assert!(matches!(
        result,
        Err(RepositoryError::Lifecycle(MovementError::AlreadyAssigned(id))) if id == joe.id
    ));
    let stored = repo.get_movement_by_id(movement.id).unwrap().unwrap();
    assert_eq!(stored.delivery_person_name.unwrap().as_str(), "Joe");
}

#[test]
fn test_missing_movement_is_not_found() {
    let repo = InMemoryRepository::new();
    let id = MovementId::new(42).unwrap();

    assert!(matches!(
        repo.transition_movement(id, &transition(MovementStatus::Delivered, "ok")),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_movement(id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_movement_list_filters() {
    let repo = InMemoryRepository::new();
    let acme = repo.create_client(&new_client("CLI001", "Acme")).unwrap();
    let globex = repo.create_client(&new_client("CLI002", "Globex")).unwrap();
    let joe = repo
        .create_delivery_person(&new_delivery_person("ENT001", "Joe"))
        .unwrap();

    let create = |client: &Client| {
        let fields = UpdateMovement::new(
            MovementType::Delivery,
            client,
            MovementDescription::new("box").unwrap(),
            Quantity::new("1").unwrap(),
        );
        repo.create_movement(&NewMovement::new(fields)).unwrap()
    };
    let first = create(&acme);
    let second = create(&globex);
    let third = create(&acme);

    repo.assign_movement(second.id, &Assignment::from(&joe))
        .unwrap();
    repo.assign_movement(third.id, &Assignment::from(&joe))
        .unwrap();
    repo.transition_movement(third.id, &transition(MovementStatus::Damaged, "wet"))
        .unwrap();

    let ids = |query: MovementListQuery| -> Vec<MovementId> {
        repo.list_movements(&query)
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect()
    };

    assert_eq!(ids(MovementListQuery::new()), vec![first.id, second.id, third.id]);
    assert_eq!(ids(MovementListQuery::new().assignable()), vec![first.id]);
    assert_eq!(
        ids(MovementListQuery::new().delivery_person(joe.id)),
        vec![second.id, third.id]
    );
    assert_eq!(
        ids(MovementListQuery::new().status(MovementStatus::Damaged)),
        vec![third.id]
    );
    assert_eq!(ids(MovementListQuery::new().search("GLOB")), vec![second.id]);
    assert_eq!(
        ids(MovementListQuery::new().search("joe")),
        vec![second.id, third.id]
    );
    assert_eq!(
        ids(MovementListQuery::new()
            .search("acme")
            .status(MovementStatus::Pending)),
        vec![first.id]
    );
}

#[test]
fn test_clones_share_state() {
    let admin_view = InMemoryRepository::new();
    let delivery_view = admin_view.clone();

    admin_view
        .create_client(&new_client("CLI001", "Acme"))
        .unwrap();

    assert_eq!(delivery_view.list_clients().unwrap().len(), 1);
}
