#![allow(dead_code)]

use pushkind_delivery::domain::client::Client;
use pushkind_delivery::domain::delivery_person::DeliveryPerson;
use pushkind_delivery::domain::profile::Profile;
use pushkind_delivery::forms::clients::ClientForm;
use pushkind_delivery::forms::delivery_persons::DeliveryPersonForm;
use pushkind_delivery::forms::movements::MovementForm;
use pushkind_delivery::repository::InMemoryRepository;
use pushkind_delivery::services::{clients, delivery_persons};

/// Cheapest bcrypt cost, keeps tests fast.
pub const TEST_HASH_COST: u32 = 4;

pub fn client_form(code: &str, name: &str) -> ClientForm {
    ClientForm {
        code: code.to_string(),
        name: name.to_string(),
        ..ClientForm::default()
    }
}

pub fn delivery_person_form(code: &str, name: &str) -> DeliveryPersonForm {
    DeliveryPersonForm {
        code: code.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", code.to_lowercase()),
        password: "changeme".to_string(),
    }
}

pub fn movement_form(movement_type: &str, client: &Client, description: &str) -> MovementForm {
    MovementForm {
        movement_type: movement_type.to_string(),
        client_id: client.id.get(),
        description: description.to_string(),
        quantity: "1".to_string(),
    }
}

pub fn add_client(repo: &InMemoryRepository, code: &str, name: &str) -> Client {
    clients::create_client(repo, &Profile::Admin, client_form(code, name))
        .expect("client should be created")
}

pub fn add_delivery_person(repo: &InMemoryRepository, code: &str, name: &str) -> DeliveryPerson {
    delivery_persons::create_delivery_person(
        repo,
        &Profile::Admin,
        delivery_person_form(code, name),
        TEST_HASH_COST,
    )
    .expect("delivery person should be created")
}
