//! Caller-relative views of the aggregate
//!
//! What the API hands back. `userHasVolunteered` depends on who is asking,
//! so every view is built for a specific caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gear::aggregate::{Campsite, GearCategory, GearRecord};
use crate::gear::ledger::Commitment;
use crate::types::{CampsiteId, GearCategoryId, GearId, UserId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GearView {
    pub id: GearId,
    pub name: String,
    pub quantity: u32,
    pub remaining: u32,
    pub volunteers: Vec<Commitment>,
    pub user_has_volunteered: bool,
}

impl GearView {
    pub fn for_caller(gear: &GearRecord, caller: &UserId) -> Self {
        Self {
            id: gear.id.clone(),
            name: gear.name.clone(),
            quantity: gear.quantity,
            remaining: gear.remaining(),
            volunteers: gear.volunteers.iter().cloned().collect(),
            user_has_volunteered: gear.user_has_volunteered(caller),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GearCategoryView {
    pub id: GearCategoryId,
    pub category: String,
    pub gear: Vec<GearView>,
}

impl GearCategoryView {
    pub fn for_caller(category: &GearCategory, caller: &UserId) -> Self {
        Self {
            id: category.id.clone(),
            category: category.category.clone(),
            gear: category
                .gear
                .iter()
                .map(|g| GearView::for_caller(g, caller))
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampsiteView {
    pub id: CampsiteId,
    pub name: String,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub manager_id: UserId,
    pub counselor_ids: Vec<UserId>,
    pub camper_ids: Vec<UserId>,
    pub gear_categories: Vec<GearCategoryView>,
}

impl CampsiteView {
    pub fn for_caller(campsite: &Campsite, caller: &UserId) -> Self {
        Self {
            id: campsite.id.clone(),
            name: campsite.name.clone(),
            starting_date: campsite.starting_date,
            ending_date: campsite.ending_date,
            manager_id: campsite.manager_id.clone(),
            counselor_ids: campsite.counselor_ids.clone(),
            camper_ids: campsite.camper_ids.clone(),
            gear_categories: campsite
                .gear_categories
                .iter()
                .map(|c| GearCategoryView::for_caller(c, caller))
                .collect(),
        }
    }
}
