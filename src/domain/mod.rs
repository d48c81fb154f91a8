//! Domain aggregates exposed by the delivery service layer.

pub mod client;
pub mod delivery_person;
pub mod movement;
pub mod profile;
pub mod types;
