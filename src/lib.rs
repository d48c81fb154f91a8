//! Delivery and pickup tracking registry.
//!
//! Administrators register clients and delivery persons, create movements
//! (deliveries or pickups) and assign them. Delivery persons close their
//! movements as delivered, not delivered or damaged with a justification.
//! All state lives in [`repository::InMemoryRepository`]; the `services`
//! module is the entry point used by the dashboards.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
