//! DTOs shaped for the admin and delivery dashboards.

use serde::{Deserialize, Serialize};

use crate::domain::delivery_person::DeliveryPerson;
use crate::domain::movement::{Movement, MovementStatus};

/// Query parameters accepted by the admin dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Free-form search over client and delivery person names.
    pub search: Option<String>,
    /// Status filter; `all` or absent disables it.
    pub status: Option<String>,
}

/// Per-status movement counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementStats {
    pub total: usize,
    pub pending: usize,
    pub delivered: usize,
    pub not_delivered: usize,
    pub damaged: usize,
}

impl MovementStats {
    pub fn from_movements<'a, I>(movements: I) -> Self
    where
        I: IntoIterator<Item = &'a Movement>,
    {
        movements
            .into_iter()
            .fold(Self::default(), |mut stats, movement| {
                stats.total += 1;
                match movement.status {
                    MovementStatus::Pending => stats.pending += 1,
                    MovementStatus::Delivered => stats.delivered += 1,
                    MovementStatus::NotDelivered => stats.not_delivered += 1,
                    MovementStatus::Damaged => stats.damaged += 1,
                }
                stats
            })
    }
}

/// Data required to render the admin dashboard.
#[derive(Debug)]
pub struct AdminDashboardData {
    /// Counters over every movement, unaffected by filters.
    pub stats: MovementStats,
    pub movements: Vec<Movement>,
    pub search_query: Option<String>,
    pub status_filter: Option<MovementStatus>,
}

/// Movement enriched with the client's current contact details.
#[derive(Debug)]
pub struct AssignedMovement {
    pub movement: Movement,
    /// `None` when the client has since been deleted.
    pub client_address: Option<String>,
    pub client_phone: Option<String>,
}

/// Data required to render the delivery person's dashboard.
#[derive(Debug)]
pub struct DeliveryDashboardData {
    pub delivery_person: DeliveryPerson,
    pub movements: Vec<AssignedMovement>,
    pub stats: MovementStats,
}
