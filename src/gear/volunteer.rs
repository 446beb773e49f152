//! Volunteer commitment protocol
//!
//! In-memory rules applied to a loaded campsite. Nothing here touches the
//! store: the caller loads the aggregate, runs one of these functions on
//! it and saves the result only when the outcome is `Applied`.
//!
//! Error reporting is asymmetric. Volunteering twice is a
//! fault (`AlreadyCommitted`); asking for more than is still needed is a
//! field error on `volunteerAmount` and comes back as `Rejected`.

use crate::gear::aggregate::{Campsite, GearRecord};
use crate::gear::ledger::Commitment;
use crate::gear::validation::{validate_volunteer_amount, FieldError};
use crate::types::{GearCategoryId, GearId, Resource, Result, TrailheadError, UserId};

pub const OVER_COMMIT_MESSAGE: &str = "Cannot volunteer more than needed";
pub const DUPLICATE_GEAR_NAME_MESSAGE: &str = "Name is already in use for this category";

/// Result of a mutation that can fail on user input without faulting
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Applied(T),
    Rejected(Vec<FieldError>),
}

impl<T> MutationOutcome<T> {
    pub fn rejected(error: FieldError) -> Self {
        Self::Rejected(vec![error])
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Address of a gear record inside a campsite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearTarget {
    pub gear_category_id: GearCategoryId,
    pub gear_id: GearId,
}

impl GearTarget {
    pub fn new(gear_category_id: GearCategoryId, gear_id: GearId) -> Self {
        Self {
            gear_category_id,
            gear_id,
        }
    }
}

/// Record that `user` brings `amount` of the target gear
pub fn commit(
    campsite: &mut Campsite,
    target: &GearTarget,
    user: &UserId,
    amount: u32,
) -> Result<MutationOutcome<GearRecord>> {
    let gear = campsite.locate_gear_mut(&target.gear_category_id, &target.gear_id)?;

    if gear.volunteers.find_commitment(user).is_some() {
        return Err(TrailheadError::AlreadyCommitted);
    }

    if let Some(error) = validate_volunteer_amount(i64::from(amount)) {
        return Ok(MutationOutcome::rejected(error));
    }

    if gear.remaining() < amount {
        return Ok(MutationOutcome::rejected(FieldError::new(
            "volunteerAmount",
            OVER_COMMIT_MESSAGE,
        )));
    }

    gear.volunteers.add(Commitment::new(user.clone(), amount));
    Ok(MutationOutcome::Applied(gear.clone()))
}

/// Drop the commitment `user` holds on the target gear
pub fn withdraw(campsite: &mut Campsite, target: &GearTarget, user: &UserId) -> Result<GearRecord> {
    let gear = campsite.locate_gear_mut(&target.gear_category_id, &target.gear_id)?;

    gear.volunteers
        .remove(user)
        .ok_or(TrailheadError::NotFound(Resource::Commitment))?;

    Ok(gear.clone())
}

/// Add a gear record with an empty ledger to a category
///
/// Names are unique per category, compared case-insensitively.
pub fn add_gear(
    campsite: &mut Campsite,
    category_id: &GearCategoryId,
    name: &str,
    quantity: u32,
) -> Result<MutationOutcome<GearRecord>> {
    let category = campsite.gear_category_mut(category_id)?;

    let wanted = name.to_lowercase();
    if category.gear.iter().any(|g| g.name.to_lowercase() == wanted) {
        return Ok(MutationOutcome::rejected(FieldError::new(
            "name",
            DUPLICATE_GEAR_NAME_MESSAGE,
        )));
    }

    let gear = GearRecord::new(name, quantity);
    category.gear.push(gear.clone());
    Ok(MutationOutcome::Applied(gear))
}

/// Remove a gear record and its ledger
pub fn delete_gear(campsite: &mut Campsite, target: &GearTarget) -> Result<GearRecord> {
    let category = campsite.gear_category_mut(&target.gear_category_id)?;
    let idx = category
        .gear
        .iter()
        .position(|g| g.id == target.gear_id)
        .ok_or(TrailheadError::NotFound(Resource::Gear))?;

    Ok(category.gear.remove(idx))
}
