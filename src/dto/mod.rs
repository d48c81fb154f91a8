//! DTO modules that bridge services with the dashboards.

pub mod dashboard;
