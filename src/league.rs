//! Roster and venue setup.
//!
//! Builds the teams and venues of a league from a venue count, a season
//! length and optional display names, then attaches group membership and
//! the cross-venue pairings used by solo venues in the sister week.
//!
//! # Home limits
//!
//! With `w` weeks, the sister team may host `ceil(w / 2)` games and the
//! prime team the remaining `w - ceil(w / 2)`. In balanced mode both get
//! `ceil(w / 2)`.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::input::{GroupEntry, PairEntry, RosterNames};
use crate::models::{GroupId, Team, TeamId, TeamRole, Venue, VenueId};

/// Default season length: every team meets every non-sibling once.
pub fn default_week_count(venue_count: usize) -> usize {
    2 * venue_count.saturating_sub(1)
}

/// Resolves the season length.
///
/// A requested count is honoured only when `0 < weeks < default`. Without
/// a request, a names file shortens the season to `real teams - 2`.
pub fn resolve_week_count(
    venue_count: usize,
    requested: Option<usize>,
    names: Option<&RosterNames>,
) -> usize {
    let default = default_week_count(venue_count);
    match requested {
        Some(w) if w > 0 && w < default => w,
        Some(_) => default,
        None => names
            .map(|n| n.team_count().saturating_sub(2))
            .unwrap_or(default),
    }
}

/// Builder for a [`League`].
///
/// # Example
///
/// ```
/// use u_robin::league::LeagueBuilder;
///
/// let league = LeagueBuilder::new(5).build().unwrap();
/// assert_eq!(league.team_count(), 10);
/// assert_eq!(league.week_count, 8);
/// assert_eq!(league.teams[0].max_home, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeagueBuilder {
    venue_count: usize,
    weeks: Option<usize>,
    balanced_home: bool,
    names: Option<RosterNames>,
}

impl LeagueBuilder {
    /// Starts a league with `venue_count` venues.
    pub fn new(venue_count: usize) -> Self {
        Self {
            venue_count,
            ..Default::default()
        }
    }

    /// Requests a season length (see [`resolve_week_count`]).
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Gives the prime team the same home ceiling as the sister.
    pub fn with_balanced_home(mut self, balanced: bool) -> Self {
        self.balanced_home = balanced;
        self
    }

    /// Sets venue and team display names.
    pub fn with_names(mut self, names: RosterNames) -> Self {
        self.names = Some(names);
        self
    }

    /// Builds the league.
    ///
    /// # Errors
    /// [`ConfigError::RosterLineCount`] when the names do not cover exactly
    /// one line per venue.
    pub fn build(self) -> Result<League, ConfigError> {
        if let Some(names) = &self.names {
            if names.venues.len() != self.venue_count {
                return Err(ConfigError::RosterLineCount {
                    expected: self.venue_count,
                    found: names.venues.len(),
                });
            }
        }

        let week_count = resolve_week_count(self.venue_count, self.weeks, self.names.as_ref());
        let sister_max = week_count.div_ceil(2);
        let prime_max = if self.balanced_home {
            sister_max
        } else {
            week_count - sister_max
        };
        let team_count = 2 * self.venue_count;

        let mut teams = Vec::with_capacity(team_count);
        let mut venues = Vec::with_capacity(self.venue_count);
        for i in 0..self.venue_count {
            let mut prime = Team::new(2 * i, TeamRole::Prime, prime_max, week_count - prime_max);
            let mut sister =
                Team::new(2 * i + 1, TeamRole::Sister, sister_max, week_count - sister_max);
            let mut venue = Venue::new(i, team_count);

            if let Some(line) = self.names.as_ref().map(|n| &n.venues[i]) {
                venue = venue.with_name(line.venue.as_str());
                prime = prime.with_name(line.prime.as_str());
                match &line.sister {
                    Some(name) => sister = sister.with_name(name.as_str()),
                    None => {
                        prime.solo = true;
                        sister.empty = true;
                        venue.solo = true;
                    }
                }
            }

            teams.push(prime);
            teams.push(sister);
            venues.push(venue);
        }

        let mut canonical = HashMap::with_capacity(team_count);
        let mut lookup = HashMap::with_capacity(team_count);
        for team in &teams {
            canonical.insert(team.canonical_name.clone(), team.id);
            lookup.insert(team.canonical_name.clone(), team.id);
        }
        if self.names.is_some() {
            for team in teams.iter().filter(|t| t.is_real()) {
                lookup.insert(team.name.clone(), team.id);
            }
        }

        Ok(League {
            pairings: vec![None; team_count],
            teams,
            venues,
            week_count,
            named: self.names.is_some(),
            canonical,
            lookup,
        })
    }
}

/// Teams and venues of a league, before any search state is attached.
#[derive(Debug, Clone)]
pub struct League {
    /// Teams indexed by id (`2i` prime, `2i + 1` sister of venue `i`).
    pub teams: Vec<Team>,
    /// Venues indexed by id.
    pub venues: Vec<Venue>,
    /// Number of weeks the search fills.
    pub week_count: usize,
    pairings: Vec<Option<TeamId>>,
    named: bool,
    canonical: HashMap<String, TeamId>,
    lookup: HashMap<String, TeamId>,
}

impl League {
    /// Number of teams, placeholders included.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of venues.
    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    /// Number of venues with a placeholder slot.
    pub fn solo_venue_count(&self) -> usize {
        self.venues.iter().filter(|v| v.solo).count()
    }

    /// Whether display names were supplied.
    pub fn is_named(&self) -> bool {
        self.named
    }

    /// Resolves a display name or canonical name to a team.
    ///
    /// Display names win over canonical names when both match.
    pub fn lookup(&self, name: &str) -> Option<TeamId> {
        self.lookup.get(name).copied()
    }

    /// Resolves a canonical name (`a1`, `b2`, ...) to a team.
    pub fn canonical_team(&self, name: &str) -> Option<TeamId> {
        self.canonical.get(name).copied()
    }

    /// Display name of a team.
    pub fn team_name(&self, team: TeamId) -> &str {
        &self.teams[team].name
    }

    /// Display name of a venue.
    pub fn venue_name(&self, venue: VenueId) -> &str {
        &self.venues[venue].name
    }

    /// Sister-week partner of a solo team.
    pub fn pairing(&self, team: TeamId) -> Option<TeamId> {
        self.pairings.get(team).copied().flatten()
    }

    /// Assigns groups, numbering labels from 1 in order of first use.
    ///
    /// # Errors
    /// [`ConfigError::UnknownTeam`] when a team name does not resolve.
    pub fn assign_groups(&mut self, entries: &[GroupEntry]) -> Result<(), ConfigError> {
        let mut ids: HashMap<&str, GroupId> = HashMap::new();
        for entry in entries {
            let team = self.resolve(&entry.team, "groups")?;
            let next = ids.len() as GroupId + 1;
            let group = *ids.entry(entry.group.as_str()).or_insert(next);
            self.teams[team].group = Some(group);
        }
        Ok(())
    }

    /// Records mutual sister-week partners.
    ///
    /// # Errors
    /// [`ConfigError::UnknownTeam`] when a team name does not resolve.
    pub fn assign_pairings(&mut self, entries: &[PairEntry]) -> Result<(), ConfigError> {
        for entry in entries {
            let first = self.resolve(&entry.first, "pairs")?;
            let second = self.resolve(&entry.second, "pairs")?;
            self.pairings[first] = Some(second);
            self.pairings[second] = Some(first);
        }
        Ok(())
    }

    fn resolve(&self, name: &str, context: &'static str) -> Result<TeamId, ConfigError> {
        self.lookup(name).ok_or_else(|| ConfigError::UnknownTeam {
            name: name.to_string(),
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_groups, parse_pairs, parse_roster_names};

    #[test]
    fn test_week_count_resolution() {
        assert_eq!(default_week_count(5), 8);
        assert_eq!(resolve_week_count(5, None, None), 8);
        assert_eq!(resolve_week_count(5, Some(6), None), 6);
        assert_eq!(resolve_week_count(5, Some(12), None), 8);
        assert_eq!(resolve_week_count(5, Some(0), None), 8);

        let names = parse_roster_names("A a1 a2\nB b1 b2\nC c1\nD d1\n").unwrap();
        assert_eq!(resolve_week_count(4, None, Some(&names)), 4);
        assert_eq!(resolve_week_count(4, Some(5), Some(&names)), 5);
    }

    #[test]
    fn test_home_limits() {
        let league = LeagueBuilder::new(4).with_weeks(5).build().unwrap();
        assert_eq!(league.week_count, 5);
        // sister: ceil(5/2) = 3, prime: 5 - 3 = 2
        assert_eq!(league.teams[1].max_home, 3);
        assert_eq!(league.teams[1].max_away, 2);
        assert_eq!(league.teams[0].max_home, 2);
        assert_eq!(league.teams[0].max_away, 3);

        let balanced = LeagueBuilder::new(4)
            .with_weeks(5)
            .with_balanced_home(true)
            .build()
            .unwrap();
        assert_eq!(balanced.teams[0].max_home, 3);
        assert_eq!(balanced.teams[0].max_away, 2);
    }

    #[test]
    fn test_venue_pairing_layout() {
        let league = LeagueBuilder::new(3).build().unwrap();
        assert_eq!(league.team_count(), 6);
        assert_eq!(league.venues[2].teams, [4, 5]);
        assert_eq!(league.teams[5].venue, 2);
        assert_eq!(league.venue_name(1), "B");
        assert_eq!(league.team_name(3), "b2");
        assert_eq!(league.solo_venue_count(), 0);
        assert!(!league.is_named());
    }

    #[test]
    fn test_names_and_solo_venue() {
        let names = parse_roster_names("Alpha Ants\nBravo Bats Bees\n").unwrap();
        let league = LeagueBuilder::new(2).with_names(names).build().unwrap();

        assert_eq!(league.venue_name(0), "Alpha");
        assert!(league.teams[0].solo);
        assert!(league.teams[1].empty);
        assert!(league.venues[0].solo);
        assert!(!league.venues[1].solo);
        assert_eq!(league.solo_venue_count(), 1);
        assert_eq!(league.lookup("Bees"), Some(3));
        assert_eq!(league.lookup("b2"), Some(3));
        assert_eq!(league.canonical_team("a2"), Some(1));
        assert_eq!(league.canonical_team("Bees"), None);
    }

    #[test]
    fn test_roster_line_count_mismatch() {
        let names = parse_roster_names("Alpha Ants Apes\n").unwrap();
        let err = LeagueBuilder::new(3).with_names(names).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RosterLineCount {
                expected: 3,
                found: 1
            }
        ));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_assign_groups() {
        let names = parse_roster_names("A Ants Apes\nB Bats Bees\n").unwrap();
        let mut league = LeagueBuilder::new(2).with_names(names).build().unwrap();
        let groups = parse_groups("Ants north\nBats south\nApes north\n").unwrap();
        league.assign_groups(&groups).unwrap();

        assert_eq!(league.teams[0].group, Some(1));
        assert_eq!(league.teams[2].group, Some(2));
        assert_eq!(league.teams[1].group, Some(1));
        assert_eq!(league.teams[3].group, None);

        let bad = parse_groups("Owls north\n").unwrap();
        let err = league.assign_groups(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTeam { .. }));
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_assign_pairings() {
        let names = parse_roster_names("A Ants\nB Bats Bees\nC Cats\n").unwrap();
        let mut league = LeagueBuilder::new(3).with_names(names).build().unwrap();
        league
            .assign_pairings(&parse_pairs("Ants Cats\n").unwrap())
            .unwrap();

        assert_eq!(league.pairing(0), Some(4));
        assert_eq!(league.pairing(4), Some(0));
        assert_eq!(league.pairing(2), None);

        let err = league
            .assign_pairings(&parse_pairs("Ants Owls\n").unwrap())
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTeam { context: "pairs", .. }));
    }
}
