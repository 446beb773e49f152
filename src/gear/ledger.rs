//! Volunteer ledger
//!
//! The commitments attached to one gear record. The ledger itself only
//! stores and answers queries; uniqueness per user and the capacity bound
//! are checked by the protocol in `gear::volunteer` before `add` is called.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A user's pledge to bring some amount of a gear record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub user_id: UserId,
    pub volunteer_amount: u32,
}

impl Commitment {
    pub fn new(user_id: UserId, volunteer_amount: u32) -> Self {
        Self {
            user_id,
            volunteer_amount,
        }
    }
}

/// Insertion-ordered set of commitments for one gear record
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct VolunteerLedger {
    entries: Vec<Commitment>,
}

impl VolunteerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commitment held by `user_id`, if any
    pub fn find_commitment(&self, user_id: &UserId) -> Option<&Commitment> {
        self.entries.iter().find(|c| &c.user_id == user_id)
    }

    /// Sum of all volunteered amounts
    pub fn total_committed(&self) -> u32 {
        self.entries.iter().map(|c| c.volunteer_amount).sum()
    }

    /// Append a commitment. Caller has already checked uniqueness and capacity.
    pub fn add(&mut self, commitment: Commitment) {
        self.entries.push(commitment);
    }

    /// Remove the commitment held by `user_id`, returning it
    pub fn remove(&mut self, user_id: &UserId) -> Option<Commitment> {
        let idx = self.entries.iter().position(|c| &c.user_id == user_id)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Commitment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Commitment>> for VolunteerLedger {
    fn from(entries: Vec<Commitment>) -> Self {
        Self { entries }
    }
}
