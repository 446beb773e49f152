//! Campsite aggregate
//!
//! Campsite → gear categories → gear → volunteer ledger, loaded and saved
//! as one unit. Lookups here are the resolution chain every gear mutation
//! walks before touching a ledger.

use chrono::{DateTime, Utc};

use crate::gear::ledger::VolunteerLedger;
use crate::types::{
    CampsiteId, GearCategoryId, GearId, Resource, Result, TrailheadError, UserId,
};

/// A campsite and everything nested inside it
#[derive(Clone, Debug, PartialEq)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub manager_id: UserId,
    pub counselor_ids: Vec<UserId>,
    pub camper_ids: Vec<UserId>,
    pub gear_categories: Vec<GearCategory>,
    /// Optimistic concurrency token, bumped by the store on every save
    pub version: u64,
}

impl Campsite {
    pub fn new(
        name: impl Into<String>,
        starting_date: DateTime<Utc>,
        ending_date: DateTime<Utc>,
        manager_id: UserId,
    ) -> Self {
        Self {
            id: CampsiteId::generate(),
            name: name.into(),
            starting_date,
            ending_date,
            manager_id,
            counselor_ids: Vec::new(),
            camper_ids: Vec::new(),
            gear_categories: Vec::new(),
            version: 0,
        }
    }

    pub fn gear_category(&self, id: &GearCategoryId) -> Result<&GearCategory> {
        self.gear_categories
            .iter()
            .find(|gc| &gc.id == id)
            .ok_or(TrailheadError::NotFound(Resource::GearCategory))
    }

    pub fn gear_category_mut(&mut self, id: &GearCategoryId) -> Result<&mut GearCategory> {
        self.gear_categories
            .iter_mut()
            .find(|gc| &gc.id == id)
            .ok_or(TrailheadError::NotFound(Resource::GearCategory))
    }

    /// Resolve category then gear, failing on whichever is missing first
    pub fn locate_gear_mut(
        &mut self,
        category_id: &GearCategoryId,
        gear_id: &GearId,
    ) -> Result<&mut GearRecord> {
        self.gear_category_mut(category_id)?.gear_mut(gear_id)
    }
}

/// A named group of gear within a campsite
#[derive(Clone, Debug, PartialEq)]
pub struct GearCategory {
    pub id: GearCategoryId,
    pub category: String,
    pub gear: Vec<GearRecord>,
}

impl GearCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            id: GearCategoryId::generate(),
            category: category.into(),
            gear: Vec::new(),
        }
    }

    pub fn gear(&self, id: &GearId) -> Result<&GearRecord> {
        self.gear
            .iter()
            .find(|g| &g.id == id)
            .ok_or(TrailheadError::NotFound(Resource::Gear))
    }

    pub fn gear_mut(&mut self, id: &GearId) -> Result<&mut GearRecord> {
        self.gear
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or(TrailheadError::NotFound(Resource::Gear))
    }
}

/// An item and the quantity the campsite needs of it
#[derive(Clone, Debug, PartialEq)]
pub struct GearRecord {
    pub id: GearId,
    pub name: String,
    pub quantity: u32,
    pub volunteers: VolunteerLedger,
}

impl GearRecord {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: GearId::generate(),
            name: name.into(),
            quantity,
            volunteers: VolunteerLedger::new(),
        }
    }

    /// Amount still needed after all current commitments
    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.volunteers.total_committed())
    }

    pub fn user_has_volunteered(&self, user: &UserId) -> bool {
        self.volunteers.find_commitment(user).is_some()
    }
}
