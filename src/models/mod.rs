//! League scheduling domain models.
//!
//! Provides the data types the search engine mutates in place (teams,
//! venues, the week × venue grid) and the read-out types a found schedule
//! is copied into.
//!
//! # Domain Mappings
//!
//! | u-robin | League | Meaning |
//! |---------|--------|---------|
//! | Team | Club / squad | Identity, home/away counters, group |
//! | Venue | Shared facility | Two sibling teams, hosting history |
//! | Week | Round | One Assignment per venue plus occupancy |
//! | Assignment | Slot | Home/away for one (week, venue) cell |
//! | Schedule | Season plan | Read-out of a complete grid |

mod matrix;
mod schedule;
mod team;
mod venue;
mod week;

pub use matrix::PairMatrix;
pub use schedule::{Fixture, Round, RoundKind, Schedule, Slot};
pub use team::{canonical_team_name, canonical_venue_name, Team, TeamRole};
pub use venue::Venue;
pub use week::{Assignment, NamePattern, SoloCounters, Week};

/// Dense team identifier (`0..team_count`).
///
/// Teams `2i` and `2i + 1` share venue `i`.
pub type TeamId = usize;

/// Dense venue identifier (`0..venue_count`).
pub type VenueId = usize;

/// Group identifier, numbered from 1 in order of first appearance.
pub type GroupId = u32;
