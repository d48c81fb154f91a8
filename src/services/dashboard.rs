//! Read models for the admin and delivery dashboards.

use crate::domain::movement::MovementStatus;
use crate::domain::profile::Profile;
use crate::domain::types::DeliveryPersonId;
use crate::dto::dashboard::{
    AdminDashboardData, AssignedMovement, DashboardQuery, DeliveryDashboardData, MovementStats,
};
use crate::repository::{ClientReader, DeliveryPersonReader, MovementListQuery, MovementReader};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Status filter value that disables filtering.
pub const ALL_STATUSES: &str = "all";

fn parse_status_filter(raw: Option<&str>) -> ServiceResult<Option<MovementStatus>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None | Some(ALL_STATUSES) => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ServiceError::Form(format!("unknown status filter `{value}`"))),
    }
}

/// Loads counters over all movements and the list narrowed by `query`.
pub fn load_admin_dashboard<R>(
    repo: &R,
    profile: &Profile,
    query: DashboardQuery,
) -> ServiceResult<AdminDashboardData>
where
    R: MovementReader + ?Sized,
{
    ensure_admin(profile)?;

    let status_filter = parse_status_filter(query.status.as_deref())?;
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let all = repo
        .list_movements(&MovementListQuery::new())
        .map_err(|err| {
            log::error!("Failed to load movements: {err}");
            err
        })?;

    let stats = MovementStats::from_movements(&all);

    let mut filter = MovementListQuery::new();
    if let Some(term) = &search_query {
        filter = filter.search(term.clone());
    }
    if let Some(status) = status_filter {
        filter = filter.status(status);
    }

    let movements = all
        .into_iter()
        .filter(|movement| filter.matches(movement))
        .collect();

    Ok(AdminDashboardData {
        stats,
        movements,
        search_query,
        status_filter,
    })
}

/// Loads the movements assigned to one delivery person.
///
/// Admins may open any delivery person's dashboard; a delivery person only
/// their own.
pub fn load_delivery_dashboard<R>(
    repo: &R,
    profile: &Profile,
    delivery_person_id: i32,
) -> ServiceResult<DeliveryDashboardData>
where
    R: ClientReader + DeliveryPersonReader + MovementReader + ?Sized,
{
    let id = DeliveryPersonId::new(delivery_person_id)?;

    if !profile.is_admin() && profile.delivery_person_id() != Some(id) {
        return Err(ServiceError::Unauthorized);
    }

    let delivery_person = repo
        .get_delivery_person_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    let assigned = repo.list_movements(&MovementListQuery::new().delivery_person(id))?;
    let stats = MovementStats::from_movements(&assigned);

    let movements = assigned
        .into_iter()
        .map(|movement| -> ServiceResult<AssignedMovement> {
            let client = repo.get_client_by_id(movement.client_id)?;
            let (client_address, client_phone) = client
                .map(|c| (c.address, c.phone))
                .unwrap_or_default();
            Ok(AssignedMovement {
                movement,
                client_address,
                client_phone,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    Ok(DeliveryDashboardData {
        delivery_person,
        movements,
        stats,
    })
}
