//! Gear service - the entry point for gear and volunteer operations
//!
//! Every mutation runs load → mutate → save against the campsite store.
//! Saves are version-checked, so a concurrent writer turns into a
//! `StoreError::Conflict` and the whole cycle is replayed from a fresh
//! load. Each store call is bounded by `store_timeout`.
//!
//! Field validation (gear name, quantity, volunteer amount) happens before
//! the store is touched at all.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::gear::validation::{validate_new_gear, validate_volunteer_amount, FieldError};
use crate::gear::volunteer::{self, GearTarget, MutationOutcome};
use crate::gear::{Campsite, CampsiteView, GearRecord, GearView};
use crate::store::{CampsiteStore, StoreError};
use crate::types::{CampsiteId, GearCategoryId, GearId, Resource, Result, TrailheadError, UserId};

// ============================================================================
// Inputs and responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerGearInput {
    pub campsite_id: CampsiteId,
    pub gear_category_id: GearCategoryId,
    pub gear_id: GearId,
    pub volunteer_amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoVolunteerGearInput {
    pub campsite_id: CampsiteId,
    pub gear_category_id: GearCategoryId,
    pub gear_id: GearId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGearInput {
    pub campsite_id: CampsiteId,
    pub gear_category_id: GearCategoryId,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGearInput {
    pub campsite_id: CampsiteId,
    pub gear_category_id: GearCategoryId,
    pub gear_id: GearId,
}

/// `{gear, errors}` payload returned by gear mutations
///
/// Exactly one side is populated: `gear` on success, `errors` when the
/// input was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearResponse {
    pub gear: Option<GearView>,
    pub errors: Option<Vec<FieldError>>,
}

impl GearResponse {
    pub fn success(gear: GearView) -> Self {
        Self {
            gear: Some(gear),
            errors: None,
        }
    }

    pub fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            gear: None,
            errors: Some(errors),
        }
    }

    fn from_outcome(outcome: MutationOutcome<GearRecord>, caller: &UserId) -> Self {
        match outcome {
            MutationOutcome::Applied(gear) => Self::success(GearView::for_caller(&gear, caller)),
            MutationOutcome::Rejected(errors) => Self::rejected(errors),
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// Gear service configuration
#[derive(Debug, Clone)]
pub struct GearServiceConfig {
    /// Extra load/mutate/save cycles allowed after a version conflict
    pub max_conflict_retries: u32,
    /// Upper bound on any single store call
    pub store_timeout: Duration,
}

impl Default for GearServiceConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: 8,
            store_timeout: Duration::from_secs(5),
        }
    }
}

/// What a mutation is acting on, for logging
struct Subject<'a> {
    op: &'static str,
    campsite_id: &'a CampsiteId,
    gear_id: Option<&'a GearId>,
    user_id: &'a UserId,
}

/// Gear and volunteer operations over a campsite store
pub struct GearService {
    store: Arc<dyn CampsiteStore>,
    config: GearServiceConfig,
}

impl GearService {
    pub fn new(store: Arc<dyn CampsiteStore>, config: GearServiceConfig) -> Self {
        Self { store, config }
    }

    /// Commit the caller to bringing `volunteerAmount` of a gear item
    pub async fn volunteer_gear(
        &self,
        input: VolunteerGearInput,
        caller: &UserId,
    ) -> Result<GearResponse> {
        if let Some(error) = validate_volunteer_amount(input.volunteer_amount) {
            return Ok(GearResponse::rejected(vec![error]));
        }
        let amount = u32::try_from(input.volunteer_amount).unwrap_or(u32::MAX);

        let target = GearTarget::new(input.gear_category_id, input.gear_id);
        let subject = Subject {
            op: "volunteer_gear",
            campsite_id: &input.campsite_id,
            gear_id: Some(&target.gear_id),
            user_id: caller,
        };

        let outcome = self
            .mutate(&subject, |campsite| {
                volunteer::commit(campsite, &target, caller, amount)
            })
            .await?;

        Ok(GearResponse::from_outcome(outcome, caller))
    }

    /// Withdraw the caller's commitment on a gear item
    pub async fn undo_volunteer_gear(
        &self,
        input: UndoVolunteerGearInput,
        caller: &UserId,
    ) -> Result<GearResponse> {
        let target = GearTarget::new(input.gear_category_id, input.gear_id);
        let subject = Subject {
            op: "undo_volunteer_gear",
            campsite_id: &input.campsite_id,
            gear_id: Some(&target.gear_id),
            user_id: caller,
        };

        let outcome = self
            .mutate(&subject, |campsite| {
                volunteer::withdraw(campsite, &target, caller).map(MutationOutcome::Applied)
            })
            .await?;

        Ok(GearResponse::from_outcome(outcome, caller))
    }

    /// Add a gear item to a category
    pub async fn add_gear(&self, input: AddGearInput, caller: &UserId) -> Result<GearResponse> {
        let errors = validate_new_gear(&input.name, input.quantity);
        if !errors.is_empty() {
            return Ok(GearResponse::rejected(errors));
        }
        let quantity = u32::try_from(input.quantity).unwrap_or(u32::MAX);

        let subject = Subject {
            op: "add_gear",
            campsite_id: &input.campsite_id,
            gear_id: None,
            user_id: caller,
        };

        let outcome = self
            .mutate(&subject, |campsite| {
                volunteer::add_gear(campsite, &input.gear_category_id, &input.name, quantity)
            })
            .await?;

        Ok(GearResponse::from_outcome(outcome, caller))
    }

    /// Delete a gear item along with its volunteers
    ///
    /// Returns the campsite as it stands after the delete.
    pub async fn delete_gear(&self, input: DeleteGearInput, caller: &UserId) -> Result<CampsiteView> {
        let target = GearTarget::new(input.gear_category_id, input.gear_id);
        let subject = Subject {
            op: "delete_gear",
            campsite_id: &input.campsite_id,
            gear_id: Some(&target.gear_id),
            user_id: caller,
        };

        let outcome = self
            .mutate(&subject, |campsite| {
                volunteer::delete_gear(campsite, &target)?;
                Ok(MutationOutcome::Applied(CampsiteView::for_caller(campsite, caller)))
            })
            .await?;

        match outcome {
            MutationOutcome::Applied(view) => Ok(view),
            MutationOutcome::Rejected(errors) => Err(TrailheadError::Internal(format!(
                "delete_gear rejected with {} field errors",
                errors.len()
            ))),
        }
    }

    /// Campsite with gear, as seen by `caller`
    pub async fn get_campsite(&self, campsite_id: &CampsiteId, caller: &UserId) -> Result<CampsiteView> {
        let campsite = self.load(campsite_id).await?;
        Ok(CampsiteView::for_caller(&campsite, caller))
    }

    async fn load(&self, campsite_id: &CampsiteId) -> Result<Campsite> {
        let loaded = tokio::time::timeout(self.config.store_timeout, self.store.load(campsite_id))
            .await
            .map_err(|_| {
                error!(campsite_id = %campsite_id, "Campsite load timed out");
                TrailheadError::Timeout(format!("loading campsite {}", campsite_id))
            })?;

        match loaded {
            Ok(Some(campsite)) => Ok(campsite),
            Ok(None) => Err(TrailheadError::NotFound(Resource::Campsite)),
            Err(e) => {
                error!(campsite_id = %campsite_id, error = %e, "Campsite load failed");
                Err(e.into())
            }
        }
    }

    /// Run `apply` against a freshly loaded campsite and save the result
    ///
    /// `apply` may run several times. Rejected outcomes and faults return
    /// without saving; the mutated copy is dropped.
    async fn mutate<T, F>(&self, subject: &Subject<'_>, mut apply: F) -> Result<MutationOutcome<T>>
    where
        F: FnMut(&mut Campsite) -> Result<MutationOutcome<T>>,
    {
        let campsite_id = subject.campsite_id;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let mut campsite = self.load(campsite_id).await?;
            let value = match apply(&mut campsite)? {
                MutationOutcome::Applied(value) => value,
                rejected => {
                    debug!(
                        op = subject.op,
                        campsite_id = %campsite_id,
                        gear_id = ?subject.gear_id,
                        user_id = %subject.user_id,
                        "Mutation rejected by field validation"
                    );
                    return Ok(rejected);
                }
            };

            let saved =
                tokio::time::timeout(self.config.store_timeout, self.store.save(&campsite)).await;

            match saved {
                Ok(Ok(version)) => {
                    info!(
                        op = subject.op,
                        campsite_id = %campsite_id,
                        gear_id = ?subject.gear_id,
                        user_id = %subject.user_id,
                        version,
                        attempt,
                        "Campsite updated"
                    );
                    return Ok(MutationOutcome::Applied(value));
                }
                Ok(Err(StoreError::Conflict { expected_version, .. })) => {
                    warn!(
                        op = subject.op,
                        campsite_id = %campsite_id,
                        gear_id = ?subject.gear_id,
                        user_id = %subject.user_id,
                        expected_version,
                        attempt,
                        "Version conflict saving campsite"
                    );
                    if attempt > self.config.max_conflict_retries {
                        return Err(TrailheadError::Conflict(format!(
                            "campsite {} still contended after {} attempts",
                            campsite_id, attempt
                        )));
                    }
                    tokio::task::yield_now().await;
                }
                Ok(Err(StoreError::Missing(_))) => {
                    return Err(TrailheadError::NotFound(Resource::Campsite));
                }
                Ok(Err(StoreError::Backend(e))) => {
                    error!(
                        op = subject.op,
                        campsite_id = %campsite_id,
                        attempt,
                        error = %e,
                        "Failed to save campsite"
                    );
                    return Err(TrailheadError::Persistence(format!(
                        "Failed to save campsite: {}",
                        e
                    )));
                }
                Err(_) => {
                    error!(
                        op = subject.op,
                        campsite_id = %campsite_id,
                        attempt,
                        "Campsite save timed out"
                    );
                    return Err(TrailheadError::Timeout(format!(
                        "saving campsite {}",
                        campsite_id
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::validation::GEAR_NAME_MAX_CHARS;
    use crate::gear::volunteer::{DUPLICATE_GEAR_NAME_MESSAGE, OVER_COMMIT_MESSAGE};
    use crate::gear::{Commitment, GearCategory};
    use crate::store::MemoryCampsiteStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Fixture {
        campsite_id: CampsiteId,
        category_id: GearCategoryId,
        gear_id: GearId,
    }

    fn seed(store: &MemoryCampsiteStore, quantity: u32, ledger: &[(&str, u32)]) -> Fixture {
        let now = chrono::Utc::now();
        let mut campsite = Campsite::new("Lake Trip", now, now, UserId::new("manager"));
        let mut category = GearCategory::new("Shelter");
        let mut gear = GearRecord::new("Tent", quantity);
        for (user, amount) in ledger {
            gear.volunteers.add(Commitment::new(UserId::new(*user), *amount));
        }
        let fixture = Fixture {
            campsite_id: campsite.id.clone(),
            category_id: category.id.clone(),
            gear_id: gear.id.clone(),
        };
        category.gear.push(gear);
        campsite.gear_categories.push(category);
        store.insert(campsite);
        fixture
    }

    fn volunteer_input(f: &Fixture, amount: i64) -> VolunteerGearInput {
        VolunteerGearInput {
            campsite_id: f.campsite_id.clone(),
            gear_category_id: f.category_id.clone(),
            gear_id: f.gear_id.clone(),
            volunteer_amount: amount,
        }
    }

    fn undo_input(f: &Fixture) -> UndoVolunteerGearInput {
        UndoVolunteerGearInput {
            campsite_id: f.campsite_id.clone(),
            gear_category_id: f.category_id.clone(),
            gear_id: f.gear_id.clone(),
        }
    }

    fn service_over(store: Arc<dyn CampsiteStore>) -> GearService {
        GearService::new(store, GearServiceConfig::default())
    }

    /// Store that fails every save with a backend error
    struct FailingSaveStore {
        inner: MemoryCampsiteStore,
    }

    #[async_trait::async_trait]
    impl CampsiteStore for FailingSaveStore {
        async fn load(&self, id: &CampsiteId) -> std::result::Result<Option<Campsite>, StoreError> {
            self.inner.load(id).await
        }

        async fn save(&self, _campsite: &Campsite) -> std::result::Result<u64, StoreError> {
            Err(StoreError::Backend("disk on fire".into()))
        }
    }

    /// Store whose first `conflicts` saves report a version conflict
    struct ContendedStore {
        inner: MemoryCampsiteStore,
        conflicts: AtomicU32,
        saves: AtomicU32,
    }

    #[async_trait::async_trait]
    impl CampsiteStore for ContendedStore {
        async fn load(&self, id: &CampsiteId) -> std::result::Result<Option<Campsite>, StoreError> {
            self.inner.load(id).await
        }

        async fn save(&self, campsite: &Campsite) -> std::result::Result<u64, StoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let left = self.conflicts.load(Ordering::SeqCst);
            if left > 0 {
                self.conflicts.store(left - 1, Ordering::SeqCst);
                return Err(StoreError::Conflict {
                    campsite_id: campsite.id.clone(),
                    expected_version: campsite.version,
                });
            }
            self.inner.save(campsite).await
        }
    }

    /// Store that never answers within the service timeout
    struct SlowStore;

    #[async_trait::async_trait]
    impl CampsiteStore for SlowStore {
        async fn load(&self, _id: &CampsiteId) -> std::result::Result<Option<Campsite>, StoreError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(None)
        }

        async fn save(&self, campsite: &Campsite) -> std::result::Result<u64, StoreError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(campsite.version + 1)
        }
    }

    /// Store that loads promptly but never finishes a save in time
    struct StalledSaveStore {
        inner: MemoryCampsiteStore,
    }

    #[async_trait::async_trait]
    impl CampsiteStore for StalledSaveStore {
        async fn load(&self, id: &CampsiteId) -> std::result::Result<Option<Campsite>, StoreError> {
            self.inner.load(id).await
        }

        async fn save(&self, campsite: &Campsite) -> std::result::Result<u64, StoreError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            self.inner.save(campsite).await
        }
    }

    #[tokio::test]
    async fn test_volunteer_returns_gear_view_for_caller() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[]);
        let service = service_over(store);
        let alice = UserId::new("alice");

        let response = service.volunteer_gear(volunteer_input(&f, 10), &alice).await.unwrap();

        assert!(response.errors.is_none());
        let gear = response.gear.unwrap();
        assert!(gear.user_has_volunteered);
        assert_eq!(gear.remaining, 0);
        assert_eq!(gear.volunteers, vec![Commitment::new(alice, 10)]);
    }

    #[tokio::test]
    async fn test_over_commit_is_field_error_and_not_saved() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 10)]);
        let service = service_over(store.clone());

        let response = service
            .volunteer_gear(volunteer_input(&f, 1), &UserId::new("bob"))
            .await
            .unwrap();

        assert!(response.gear.is_none());
        assert_eq!(
            response.errors,
            Some(vec![FieldError::new("volunteerAmount", OVER_COMMIT_MESSAGE)])
        );

        let campsite = store.load(&f.campsite_id).await.unwrap().unwrap();
        assert_eq!(campsite.version, 0);
    }

    #[tokio::test]
    async fn test_zero_amount_rejected_before_store() {
        // No campsite seeded: validation must answer first
        let service = service_over(Arc::new(MemoryCampsiteStore::new()));
        let f = Fixture {
            campsite_id: CampsiteId::generate(),
            category_id: GearCategoryId::generate(),
            gear_id: GearId::generate(),
        };

        let response = service
            .volunteer_gear(volunteer_input(&f, 0), &UserId::new("bob"))
            .await
            .unwrap();

        assert_eq!(response.errors.unwrap()[0].field, "volunteerAmount");
    }

    #[tokio::test]
    async fn test_volunteer_twice_is_fault() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 3)]);
        let service = service_over(store);

        let err = service
            .volunteer_gear(volunteer_input(&f, 1), &UserId::new("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, TrailheadError::AlreadyCommitted));
    }

    #[tokio::test]
    async fn test_undo_then_recommit() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 10)]);
        let service = service_over(store);
        let alice = UserId::new("alice");

        let undone = service.undo_volunteer_gear(undo_input(&f), &alice).await.unwrap();
        let gear = undone.gear.unwrap();
        assert!(gear.volunteers.is_empty());
        assert!(!gear.user_has_volunteered);

        let again = service.volunteer_gear(volunteer_input(&f, 10), &alice).await.unwrap();
        assert_eq!(again.gear.unwrap().remaining, 0);
    }

    #[tokio::test]
    async fn test_undo_without_commitment() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 4)]);
        let service = service_over(store.clone());

        let err = service
            .undo_volunteer_gear(undo_input(&f), &UserId::new("bob"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not locate volunteer to remove");
        let campsite = store.load(&f.campsite_id).await.unwrap().unwrap();
        assert_eq!(campsite.gear_categories[0].gear[0].volunteers.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_campsite() {
        let service = service_over(Arc::new(MemoryCampsiteStore::new()));
        let f = Fixture {
            campsite_id: CampsiteId::generate(),
            category_id: GearCategoryId::generate(),
            gear_id: GearId::generate(),
        };

        let err = service
            .volunteer_gear(volunteer_input(&f, 1), &UserId::new("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, TrailheadError::NotFound(Resource::Campsite)));
    }

    #[tokio::test]
    async fn test_failed_save_is_persistence_fault() {
        let inner = MemoryCampsiteStore::new();
        let f = seed(&inner, 10, &[]);
        let store = Arc::new(FailingSaveStore { inner });
        let service = service_over(store.clone());

        let err = service
            .volunteer_gear(volunteer_input(&f, 2), &UserId::new("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, TrailheadError::Persistence(_)));
        let campsite = store.load(&f.campsite_id).await.unwrap().unwrap();
        assert!(campsite.gear_categories[0].gear[0].volunteers.is_empty());
    }

    #[tokio::test]
    async fn test_conflict_is_retried_from_fresh_load() {
        let inner = MemoryCampsiteStore::new();
        let f = seed(&inner, 10, &[]);
        let store = Arc::new(ContendedStore {
            inner,
            conflicts: AtomicU32::new(2),
            saves: AtomicU32::new(0),
        });
        let service = service_over(store.clone());

        let response = service
            .volunteer_gear(volunteer_input(&f, 4), &UserId::new("alice"))
            .await
            .unwrap();

        assert_eq!(response.gear.unwrap().remaining, 6);
        assert_eq!(store.saves.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_conflict_retries_are_bounded() {
        let inner = MemoryCampsiteStore::new();
        let f = seed(&inner, 10, &[]);
        let store = Arc::new(ContendedStore {
            inner,
            conflicts: AtomicU32::new(u32::MAX),
            saves: AtomicU32::new(0),
        });
        let service = GearService::new(
            store.clone(),
            GearServiceConfig {
                max_conflict_retries: 2,
                ..Default::default()
            },
        );

        let err = service
            .volunteer_gear(volunteer_input(&f, 4), &UserId::new("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, TrailheadError::Conflict(_)));
        assert_eq!(store.saves.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_store_timeout() {
        let service = GearService::new(
            Arc::new(SlowStore),
            GearServiceConfig {
                store_timeout: Duration::from_millis(20),
                ..Default::default()
            },
        );

        let err = service
            .get_campsite(&CampsiteId::generate(), &UserId::new("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, TrailheadError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_save_timeout_is_fault_and_ledger_unchanged() {
        let inner = MemoryCampsiteStore::new();
        let f = seed(&inner, 10, &[("bob", 1)]);
        let store = Arc::new(StalledSaveStore { inner });
        let service = GearService::new(
            store.clone(),
            GearServiceConfig {
                store_timeout: Duration::from_millis(20),
                ..Default::default()
            },
        );

        let err = service
            .volunteer_gear(volunteer_input(&f, 3), &UserId::new("alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, TrailheadError::Timeout(_)));

        let campsite = store.load(&f.campsite_id).await.unwrap().unwrap();
        assert_eq!(campsite.version, 0);
        let ledger: Vec<_> = campsite.gear_categories[0].gear[0]
            .volunteers
            .iter()
            .map(|c| (c.user_id.to_string(), c.volunteer_amount))
            .collect();
        assert_eq!(ledger, vec![("bob".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_add_gear_collects_field_errors() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[]);
        let service = service_over(store);

        let response = service
            .add_gear(
                AddGearInput {
                    campsite_id: f.campsite_id.clone(),
                    gear_category_id: f.category_id.clone(),
                    name: "x".repeat(GEAR_NAME_MAX_CHARS + 1),
                    quantity: 0,
                },
                &UserId::new("manager"),
            )
            .await
            .unwrap();

        let fields: Vec<_> = response.errors.unwrap().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name".to_string(), "quantity".to_string()]);
    }

    #[tokio::test]
    async fn test_add_gear_rejects_duplicate_name() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[]);
        let service = service_over(store);

        let response = service
            .add_gear(
                AddGearInput {
                    campsite_id: f.campsite_id.clone(),
                    gear_category_id: f.category_id.clone(),
                    name: "TENT".into(),
                    quantity: 2,
                },
                &UserId::new("manager"),
            )
            .await
            .unwrap();

        assert_eq!(
            response.errors,
            Some(vec![FieldError::new("name", DUPLICATE_GEAR_NAME_MESSAGE)])
        );
    }

    #[tokio::test]
    async fn test_add_then_delete_gear() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 2)]);
        let service = service_over(store);
        let manager = UserId::new("manager");

        let added = service
            .add_gear(
                AddGearInput {
                    campsite_id: f.campsite_id.clone(),
                    gear_category_id: f.category_id.clone(),
                    name: "Lantern".into(),
                    quantity: 3,
                },
                &manager,
            )
            .await
            .unwrap()
            .gear
            .unwrap();
        assert_eq!(added.remaining, 3);

        let view = service
            .delete_gear(
                DeleteGearInput {
                    campsite_id: f.campsite_id.clone(),
                    gear_category_id: f.category_id.clone(),
                    gear_id: f.gear_id.clone(),
                },
                &manager,
            )
            .await
            .unwrap();

        let names: Vec<_> = view.gear_categories[0].gear.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Lantern"]);
    }

    #[tokio::test]
    async fn test_get_campsite_marks_caller_commitments() {
        let store = Arc::new(MemoryCampsiteStore::new());
        let f = seed(&store, 10, &[("alice", 2)]);
        let service = service_over(store);

        let for_alice = service.get_campsite(&f.campsite_id, &UserId::new("alice")).await.unwrap();
        let for_bob = service.get_campsite(&f.campsite_id, &UserId::new("bob")).await.unwrap();

        assert!(for_alice.gear_categories[0].gear[0].user_has_volunteered);
        assert!(!for_bob.gear_categories[0].gear[0].user_has_volunteered);
    }
}
