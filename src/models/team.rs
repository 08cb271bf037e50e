//! Team model.
//!
//! Every venue holds two teams: the *prime* (`2i`) and the *sister*
//! (`2i + 1`). The pair alternates hosting duties at the venue, so each
//! team's home-game ceiling is fixed at setup and its counters move as the
//! search commits and undoes assignments.

use serde::{Deserialize, Serialize};

use super::{GroupId, TeamId, VenueId};

const TEAM_CODES: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const VENUE_CODES: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of a team within its venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    /// First occupant (`a1`, `b1`, ...).
    Prime,
    /// Second occupant (`a2`, `b2`, ...).
    Sister,
}

/// A team taking part in the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Dense identifier.
    pub id: TeamId,
    /// Venue this team shares with its sibling.
    pub venue: VenueId,
    /// Prime or sister slot within the venue.
    pub role: TeamRole,
    /// Canonical name (`a1`, `a2`, ...), matched by seed patterns.
    pub canonical_name: String,
    /// Display name (defaults to the canonical name).
    pub name: String,
    /// Maximum number of home games over the season.
    pub max_home: usize,
    /// Maximum number of away games over the season.
    pub max_away: usize,
    /// Home games committed on the current search path.
    pub home_count: usize,
    /// Away games committed on the current search path.
    pub away_count: usize,
    /// Group membership for inter/intra pairing rules.
    pub group: Option<GroupId>,
    /// The only real team at its venue.
    pub solo: bool,
    /// Placeholder for the vacant slot of a solo venue; never plays.
    pub empty: bool,
}

impl Team {
    /// Creates a team with canonical naming and the given season limits.
    pub fn new(id: TeamId, role: TeamRole, max_home: usize, max_away: usize) -> Self {
        let canonical_name = canonical_team_name(id);
        Self {
            id,
            venue: id / 2,
            role,
            name: canonical_name.clone(),
            canonical_name,
            max_home,
            max_away,
            home_count: 0,
            away_count: 0,
            group: None,
            solo: false,
            empty: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group.
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// The other team at the same venue.
    #[inline]
    pub fn sibling(&self) -> TeamId {
        self.id ^ 1
    }

    /// Games committed so far (home + away).
    #[inline]
    pub fn games_played(&self) -> usize {
        self.home_count + self.away_count
    }

    /// Whether another home game fits under the ceiling.
    #[inline]
    pub fn can_host(&self) -> bool {
        self.home_count < self.max_home
    }

    /// Whether another away game fits under the ceiling.
    #[inline]
    pub fn can_travel(&self) -> bool {
        self.away_count < self.max_away
    }

    /// Whether this team actually plays (not a solo venue's placeholder).
    #[inline]
    pub fn is_real(&self) -> bool {
        !self.empty
    }
}

/// Canonical team name: venue letter plus `1` (prime) or `2` (sister).
///
/// Venues past the 36th fall back to `x<venue>` as the base.
pub fn canonical_team_name(id: TeamId) -> String {
    let code = id / 2;
    let suffix = id % 2 + 1;
    match TEAM_CODES.get(code) {
        Some(&c) => format!("{}{suffix}", c as char),
        None => format!("x{code}_{suffix}"),
    }
}

/// Canonical venue name: `A`, `B`, ...; `V<index>` past `Z`.
pub fn canonical_venue_name(index: VenueId) -> String {
    match VENUE_CODES.get(index) {
        Some(&c) => (c as char).to_string(),
        None => format!("V{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(canonical_team_name(0), "a1");
        assert_eq!(canonical_team_name(1), "a2");
        assert_eq!(canonical_team_name(9), "e2");
        assert_eq!(canonical_team_name(52), "01");
        assert_eq!(canonical_team_name(80), "x40_1");
        assert_eq!(canonical_venue_name(0), "A");
        assert_eq!(canonical_venue_name(4), "E");
        assert_eq!(canonical_venue_name(30), "V30");
    }

    #[test]
    fn test_team_builder() {
        let t = Team::new(3, TeamRole::Sister, 4, 4)
            .with_name("Bees")
            .with_group(2);

        assert_eq!(t.venue, 1);
        assert_eq!(t.canonical_name, "b2");
        assert_eq!(t.name, "Bees");
        assert_eq!(t.group, Some(2));
        assert_eq!(t.sibling(), 2);
        assert!(t.is_real());
    }

    #[test]
    fn test_team_limits() {
        let mut t = Team::new(0, TeamRole::Prime, 1, 2);
        assert!(t.can_host());
        t.home_count = 1;
        assert!(!t.can_host());
        t.away_count = 2;
        assert!(!t.can_travel());
        assert_eq!(t.games_played(), 3);
    }
}
