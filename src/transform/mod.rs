//! Pure record transforms.
//!
//! Every function here maps raw field text to a normalized value without side
//! effects. Missing or empty input yields an empty result rather than an error.

/// Contact-style normalization: phones, yes/no answers, emergency contacts
pub mod contact;
/// Month/day fragments to full dates
pub mod dates;
/// Free-text school grade to numeric grade
pub mod grade;
/// Surname-based household ids
pub mod household;
/// Authorized pickup lists
pub mod pickups;

pub use contact::{
    emergency_contact, format_phone, household_primary_contact, medical_notes,
    status_and_membership, yes_no_token,
};
pub use dates::{format_anniversary, format_birthdate};
pub use grade::map_grade;
pub use household::HouseholdAssigner;
pub use pickups::{format_pickup_member, join_authorized_pickups, join_pickup_members, split_pickup_names};
