//! Opaque identifiers
//!
//! Ids are compared for equality and nothing else. New ids use the
//! document store's native format (hex ObjectId) so an aggregate built in
//! memory can be persisted to MongoDB unchanged.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Mint a fresh id
            pub fn generate() -> Self {
                Self(ObjectId::new().to_hex())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

opaque_id!(
    /// Identity of a campsite aggregate
    CampsiteId
);
opaque_id!(
    /// Identity of a gear category, unique within its campsite
    GearCategoryId
);
opaque_id!(
    /// Identity of a gear record, unique within its category
    GearId
);
opaque_id!(
    /// Identity of a user as handed over by the auth layer
    UserId
);
