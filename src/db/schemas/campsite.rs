//! Campsite document schema
//!
//! One document per campsite with gear categories, gear and volunteers
//! embedded as nested arrays. Field names follow the camelCase layout the
//! campsite collection already uses. User references in that collection
//! are ObjectIds; string ids are accepted too and written back as strings.
//! Documents written before versioning have no `version` field and count
//! as version 0.

use bson::{doc, oid::ObjectId, Bson, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::IntoIndexes;
use crate::db::schemas::Metadata;
use crate::gear::{Campsite, Commitment, GearCategory, GearRecord, VolunteerLedger};
use crate::store::StoreError;
use crate::types::{CampsiteId, GearCategoryId, GearId, UserId};

/// Collection name for campsites
pub const CAMPSITE_COLLECTION: &str = "campsites";

/// Campsite document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampsiteDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at, is_deleted)
    #[serde(default)]
    pub metadata: Metadata,

    /// Optimistic concurrency token, absent on pre-versioning documents
    #[serde(default)]
    pub version: i64,

    pub name: String,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub starting_date: DateTime<Utc>,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub ending_date: DateTime<Utc>,

    pub manager: MemberRef,

    #[serde(default)]
    pub counselors: Vec<MemberRef>,

    #[serde(default)]
    pub campers: Vec<MemberRef>,

    #[serde(default)]
    pub gear_categories: Vec<GearCategoryDoc>,
}

/// Reference to a user document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MemberRef {
    /// ObjectId or string
    pub id: Bson,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GearCategoryDoc {
    pub _id: ObjectId,
    pub category: String,
    #[serde(default)]
    pub gear: Vec<GearDoc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GearDoc {
    pub _id: ObjectId,
    pub name: String,
    pub quantity: i32,
    #[serde(default)]
    pub volunteers: Vec<GearVolunteerDoc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GearVolunteerDoc {
    /// ObjectId or string
    pub user_id: Bson,
    pub volunteer_amount: i32,
}

impl IntoIndexes for CampsiteDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "manager.id": 1 },
            Some(
                IndexOptions::builder()
                    .name("manager_index".to_string())
                    .build(),
            ),
        )]
    }
}

fn parse_oid(raw: &str, what: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(raw)
        .map_err(|e| StoreError::Backend(format!("invalid {} id '{}': {}", what, raw, e)))
}

/// Stored form of a user reference
pub(crate) fn user_ref(id: &UserId) -> Bson {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.to_string()),
    }
}

fn user_id_from(raw: Bson) -> Result<UserId, StoreError> {
    match raw {
        Bson::ObjectId(oid) => Ok(UserId::new(oid.to_hex())),
        Bson::String(id) => Ok(UserId::new(id)),
        other => Err(StoreError::Backend(format!(
            "unsupported user reference {:?}",
            other
        ))),
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_u32(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

impl TryFrom<&GearCategory> for GearCategoryDoc {
    type Error = StoreError;

    fn try_from(category: &GearCategory) -> Result<Self, Self::Error> {
        let gear = category
            .gear
            .iter()
            .map(|g| {
                Ok(GearDoc {
                    _id: parse_oid(g.id.as_str(), "gear")?,
                    name: g.name.clone(),
                    quantity: to_i32(g.quantity),
                    volunteers: g
                        .volunteers
                        .iter()
                        .map(|c| GearVolunteerDoc {
                            user_id: user_ref(&c.user_id),
                            volunteer_amount: to_i32(c.volunteer_amount),
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Self {
            _id: parse_oid(category.id.as_str(), "gear category")?,
            category: category.category.clone(),
            gear,
        })
    }
}

impl TryFrom<GearCategoryDoc> for GearCategory {
    type Error = StoreError;

    fn try_from(doc: GearCategoryDoc) -> Result<Self, Self::Error> {
        let gear = doc
            .gear
            .into_iter()
            .map(|g| {
                let volunteers = g
                    .volunteers
                    .into_iter()
                    .map(|v| {
                        Ok(Commitment::new(
                            user_id_from(v.user_id)?,
                            to_u32(v.volunteer_amount),
                        ))
                    })
                    .collect::<Result<Vec<_>, StoreError>>()?;

                Ok(GearRecord {
                    id: GearId::new(g._id.to_hex()),
                    name: g.name,
                    quantity: to_u32(g.quantity),
                    volunteers: VolunteerLedger::from(volunteers),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Self {
            id: GearCategoryId::new(doc._id.to_hex()),
            category: doc.category,
            gear,
        })
    }
}

impl TryFrom<CampsiteDoc> for Campsite {
    type Error = StoreError;

    fn try_from(doc: CampsiteDoc) -> Result<Self, Self::Error> {
        let id = doc
            ._id
            .ok_or_else(|| StoreError::Backend("campsite document without _id".into()))?;

        Ok(Self {
            id: CampsiteId::new(id.to_hex()),
            name: doc.name,
            starting_date: doc.starting_date,
            ending_date: doc.ending_date,
            manager_id: user_id_from(doc.manager.id)?,
            counselor_ids: doc
                .counselors
                .into_iter()
                .map(|m| user_id_from(m.id))
                .collect::<Result<_, _>>()?,
            camper_ids: doc
                .campers
                .into_iter()
                .map(|m| user_id_from(m.id))
                .collect::<Result<_, _>>()?,
            gear_categories: doc
                .gear_categories
                .into_iter()
                .map(GearCategory::try_from)
                .collect::<Result<_, _>>()?,
            version: u64::try_from(doc.version).unwrap_or(0),
        })
    }
}

impl TryFrom<&Campsite> for CampsiteDoc {
    type Error = StoreError;

    fn try_from(campsite: &Campsite) -> Result<Self, Self::Error> {
        let gear_categories = campsite
            .gear_categories
            .iter()
            .map(GearCategoryDoc::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let member = |id: &UserId| MemberRef { id: user_ref(id) };

        Ok(Self {
            _id: Some(parse_oid(campsite.id.as_str(), "campsite")?),
            metadata: Metadata::new(),
            version: campsite.version as i64,
            name: campsite.name.clone(),
            starting_date: campsite.starting_date,
            ending_date: campsite.ending_date,
            manager: member(&campsite.manager_id),
            counselors: campsite.counselor_ids.iter().map(member).collect(),
            campers: campsite.camper_ids.iter().map(member).collect(),
            gear_categories,
        })
    }
}

impl CampsiteDoc {
    /// Filter matching a live campsite at exactly `version`
    ///
    /// Version 0 also matches documents that have no `version` field yet.
    pub fn versioned_filter(id: ObjectId, version: u64) -> Document {
        if version == 0 {
            doc! {
                "_id": id,
                "$or": [
                    { "version": 0_i64 },
                    { "version": { "$exists": false } },
                ],
            }
        } else {
            doc! { "_id": id, "version": version as i64 }
        }
    }

    /// `$set` update writing the mutable parts of `campsite` at `version + 1`
    ///
    /// Metadata timestamps other than `updated_at` are left alone, as are
    /// manager fields other than `id`.
    pub fn update_from(campsite: &Campsite) -> Result<Document, StoreError> {
        let categories = campsite
            .gear_categories
            .iter()
            .map(GearCategoryDoc::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = bson::to_bson(&categories)
            .map_err(|e| StoreError::Backend(format!("failed to encode gear categories: {}", e)))?;

        let members = |ids: &[UserId]| -> Bson {
            Bson::Array(
                ids.iter()
                    .map(|id| Bson::Document(doc! { "id": user_ref(id) }))
                    .collect(),
            )
        };

        Ok(doc! {
            "$set": {
                "name": campsite.name.as_str(),
                "startingDate": bson::DateTime::from_chrono(campsite.starting_date),
                "endingDate": bson::DateTime::from_chrono(campsite.ending_date),
                "manager.id": user_ref(&campsite.manager_id),
                "counselors": members(&campsite.counselor_ids),
                "campers": members(&campsite.camper_ids),
                "gearCategories": categories,
                "version": (campsite.version + 1) as i64,
                "metadata.updated_at": bson::DateTime::now(),
            }
        })
    }
}
