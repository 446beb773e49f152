//! Gear domain: the campsite aggregate, volunteer ledgers and the rules
//! that mutate them

pub mod aggregate;
pub mod ledger;
pub mod validation;
pub mod view;
pub mod volunteer;

pub use aggregate::{Campsite, GearCategory, GearRecord};
pub use ledger::{Commitment, VolunteerLedger};
pub use validation::FieldError;
pub use view::{CampsiteView, GearCategoryView, GearView};
pub use volunteer::{GearTarget, MutationOutcome};
