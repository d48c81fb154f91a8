//! Services handling delivery person administration.

use crate::domain::delivery_person::DeliveryPerson;
use crate::domain::profile::Profile;
use crate::domain::types::DeliveryPersonId;
use crate::forms::delivery_persons::{DeliveryPersonForm, DeliveryPersonPayload};
use crate::repository::{DeliveryPersonReader, DeliveryPersonWriter};
use crate::services::{ServiceResult, ensure_admin};

/// Lists every delivery person in the registry.
pub fn list_delivery_persons<R>(repo: &R, profile: &Profile) -> ServiceResult<Vec<DeliveryPerson>>
where
    R: DeliveryPersonReader + ?Sized,
{
    ensure_admin(profile)?;

    Ok(repo.list_delivery_persons()?)
}

/// Validates the form, hashes the password and registers the delivery person.
pub fn create_delivery_person<R>(
    repo: &R,
    profile: &Profile,
    form: DeliveryPersonForm,
    hash_cost: u32,
) -> ServiceResult<DeliveryPerson>
where
    R: DeliveryPersonWriter + ?Sized,
{
    ensure_admin(profile)?;

    let new_person = DeliveryPersonPayload::try_from(form)?.into_domain(hash_cost)?;

    let person = repo.create_delivery_person(&new_person).map_err(|err| {
        log::error!("Failed to add a delivery person: {err}");
        err
    })?;

    log::info!("Created delivery person {} ({})", person.id, person.code);
    Ok(person)
}

/// Replaces every field of an existing delivery person, password included.
///
/// Movements already assigned keep the previous name.
pub fn update_delivery_person<R>(
    repo: &R,
    profile: &Profile,
    delivery_person_id: i32,
    form: DeliveryPersonForm,
    hash_cost: u32,
) -> ServiceResult<DeliveryPerson>
where
    R: DeliveryPersonWriter + ?Sized,
{
    ensure_admin(profile)?;

    let id = DeliveryPersonId::new(delivery_person_id)?;
    let updates = DeliveryPersonPayload::try_from(form)?.into_domain(hash_cost)?;

    let person = repo.update_delivery_person(id, &updates).map_err(|err| {
        log::error!("Failed to update delivery person {id}: {err}");
        err
    })?;

    log::info!("Updated delivery person {id}");
    Ok(person)
}

pub fn delete_delivery_person<R>(
    repo: &R,
    profile: &Profile,
    delivery_person_id: i32,
) -> ServiceResult<()>
where
    R: DeliveryPersonWriter + ?Sized,
{
    ensure_admin(profile)?;

    let id = DeliveryPersonId::new(delivery_person_id)?;

    repo.delete_delivery_person(id).map_err(|err| {
        log::error!("Failed to delete delivery person {id}: {err}");
        err
    })?;

    log::info!("Deleted delivery person {id}");
    Ok(())
}
