//! Services driving the movement lifecycle: CRUD, assignment and status
//! transitions.

use crate::domain::movement::{Assignment, Movement, NewMovement, UpdateMovement};
use crate::domain::profile::Profile;
use crate::domain::types::MovementId;
use crate::forms::movements::{
    AssignMovementForm, AssignMovementPayload, MovementForm, MovementPayload,
    TransitionStatusForm, TransitionStatusPayload,
};
use crate::repository::{
    ClientReader, DeliveryPersonReader, MovementListQuery, MovementReader, MovementWriter,
};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Lists movements matching `query`.
pub fn list_movements<R>(
    repo: &R,
    profile: &Profile,
    query: &MovementListQuery,
) -> ServiceResult<Vec<Movement>>
where
    R: MovementReader + ?Sized,
{
    ensure_admin(profile)?;

    Ok(repo.list_movements(query)?)
}

/// Candidates offered in the assignment dialog: pending and unassigned.
pub fn assignable_movements<R>(repo: &R, profile: &Profile) -> ServiceResult<Vec<Movement>>
where
    R: MovementReader + ?Sized,
{
    list_movements(repo, profile, &MovementListQuery::new().assignable())
}

/// Resolves the referenced client and snapshots its current name.
fn resolve_form<R>(repo: &R, form: MovementForm) -> ServiceResult<UpdateMovement>
where
    R: ClientReader + ?Sized,
{
    let payload = MovementPayload::try_from(form)?;

    let client = repo
        .get_client_by_id(payload.client_id)?
        .ok_or_else(|| ServiceError::Form(format!("unknown client {}", payload.client_id)))?;

    Ok(payload.into_domain(&client))
}

/// Creates a pending, unassigned movement dated today.
pub fn create_movement<R>(
    repo: &R,
    profile: &Profile,
    form: MovementForm,
) -> ServiceResult<Movement>
where
    R: ClientReader + MovementWriter + ?Sized,
{
    ensure_admin(profile)?;

    let new_movement = NewMovement::new(resolve_form(repo, form)?);

    let movement = repo.create_movement(&new_movement).map_err(|err| {
        log::error!("Failed to add a movement: {err}");
        err
    })?;

    log::info!(
        "Created {} movement {} for client {}",
        movement.movement_type,
        movement.id,
        movement.client_id
    );
    Ok(movement)
}

/// Edits type, client, description and quantity. Status, creation date,
/// assignment and justification are untouched.
pub fn update_movement<R>(
    repo: &R,
    profile: &Profile,
    movement_id: i32,
    form: MovementForm,
) -> ServiceResult<Movement>
where
    R: ClientReader + MovementWriter + ?Sized,
{
    ensure_admin(profile)?;

    let movement_id = MovementId::new(movement_id)?;
    let updates = resolve_form(repo, form)?;

    let movement = repo.update_movement(movement_id, &updates).map_err(|err| {
        log::error!("Failed to update movement {movement_id}: {err}");
        err
    })?;

    log::info!("Updated movement {movement_id}");
    Ok(movement)
}

pub fn delete_movement<R>(repo: &R, profile: &Profile, movement_id: i32) -> ServiceResult<()>
where
    R: MovementWriter + ?Sized,
{
    ensure_admin(profile)?;

    let movement_id = MovementId::new(movement_id)?;

    repo.delete_movement(movement_id).map_err(|err| {
        log::error!("Failed to delete movement {movement_id}: {err}");
        err
    })?;

    log::info!("Deleted movement {movement_id}");
    Ok(())
}

/// Hands a pending, unassigned movement to a delivery person.
pub fn assign_movement<R>(
    repo: &R,
    profile: &Profile,
    form: AssignMovementForm,
) -> ServiceResult<Movement>
where
    R: DeliveryPersonReader + MovementWriter + ?Sized,
{
    ensure_admin(profile)?;

    let payload = AssignMovementPayload::try_from(form)?;

    let person = repo
        .get_delivery_person_by_id(payload.delivery_person_id)?
        .ok_or(ServiceError::NotFound)?;

    let movement = repo
        .assign_movement(payload.movement_id, &Assignment::from(&person))
        .map_err(|err| {
            log::warn!(
                "Rejected assignment of movement {} to {}: {err}",
                payload.movement_id,
                person.id
            );
            err
        })?;

    log::info!(
        "Assigned {} movement {} for {} to {}",
        movement.movement_type,
        movement.id,
        movement.client_name,
        person.name
    );
    Ok(movement)
}

/// Moves a pending movement into delivered, not delivered or damaged.
///
/// A delivery person may only close movements assigned to them.
pub fn transition_status<R>(
    repo: &R,
    profile: &Profile,
    form: TransitionStatusForm,
) -> ServiceResult<Movement>
where
    R: MovementReader + MovementWriter + ?Sized,
{
    let payload = TransitionStatusPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected status update: {err}");
        err
    })?;

    if let Some(courier) = profile.delivery_person_id() {
        let movement = repo
            .get_movement_by_id(payload.movement_id)?
            .ok_or(ServiceError::NotFound)?;
        if !movement.is_assigned_to(courier) {
            return Err(ServiceError::Unauthorized);
        }
    }

    let movement = repo
        .transition_movement(payload.movement_id, &payload.transition)
        .map_err(|err| {
            log::warn!(
                "Rejected status update of movement {}: {err}",
                payload.movement_id
            );
            err
        })?;

    log::info!(
        "Movement {} marked as {}",
        movement.id,
        movement.status.label()
    );
    Ok(movement)
}
