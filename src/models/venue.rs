//! Venue model.

use serde::{Deserialize, Serialize};

use super::{canonical_venue_name, TeamId, VenueId};

/// A shared facility hosting exactly one match (or a bye) per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Dense identifier.
    pub id: VenueId,
    /// Display name (defaults to `A`, `B`, ...).
    pub name: String,
    /// Prime and sister occupants. The sister may be a placeholder.
    pub teams: [TeamId; 2],
    /// Last team to host here on the current search path.
    pub recent_home: Option<TeamId>,
    /// Opponents that already visited this venue, indexed by team id.
    pub hosted: Vec<bool>,
    /// One slot is a non-playing placeholder.
    pub solo: bool,
}

impl Venue {
    /// Creates the venue for index `id` in a league of `team_count` teams.
    pub fn new(id: VenueId, team_count: usize) -> Self {
        Self {
            id,
            name: canonical_venue_name(id),
            teams: [2 * id, 2 * id + 1],
            recent_home: None,
            hosted: vec![false; team_count],
            solo: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Prime occupant.
    #[inline]
    pub fn prime(&self) -> TeamId {
        self.teams[0]
    }

    /// Sister occupant.
    #[inline]
    pub fn sister(&self) -> TeamId {
        self.teams[1]
    }

    /// Whether `team` is one of this venue's own occupants.
    #[inline]
    pub fn occupies(&self, team: TeamId) -> bool {
        self.teams.contains(&team)
    }

    /// Whether `team` has already visited as the away side.
    #[inline]
    pub fn has_hosted(&self, team: TeamId) -> bool {
        self.hosted.get(team).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_new() {
        let v = Venue::new(2, 10).with_name("Charlie");
        assert_eq!(v.name, "Charlie");
        assert_eq!(v.prime(), 4);
        assert_eq!(v.sister(), 5);
        assert!(v.occupies(5));
        assert!(!v.occupies(6));
        assert_eq!(v.hosted.len(), 10);
        assert!(!v.has_hosted(0));
        assert!(!v.has_hosted(99));
    }
}
