//! Schedule grid: weeks and their per-venue assignment slots.

use regex::Regex;

use super::TeamId;

/// A compiled name pattern from a seed file.
///
/// Matches unanchored against canonical team names, so `^a` admits
/// `a1` and `a2` while `1` admits every prime team.
#[derive(Debug, Clone)]
pub struct NamePattern(Regex);

impl NamePattern {
    /// Compiles a pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Whether the canonical name is admitted.
    #[inline]
    pub fn matches(&self, canonical_name: &str) -> bool {
        self.0.is_match(canonical_name)
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// One (week, venue) cell of the grid.
///
/// Locked fields come from a seed pattern and never change during search;
/// the rest are toggled by commit/undo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    /// Hosting team.
    pub home: Option<TeamId>,
    /// Visiting team.
    pub away: Option<TeamId>,
    /// Home fixed by the seed pattern.
    pub home_locked: bool,
    /// Away fixed by the seed pattern.
    pub away_locked: bool,
    /// Constraint on the home team's canonical name.
    pub home_pattern: Option<NamePattern>,
    /// Constraint on the away team's canonical name.
    pub away_pattern: Option<NamePattern>,
    /// Deliberately vacant this week (a solo venue's bye).
    pub empty: bool,
    /// One of this venue's own teams is already playing away this week.
    pub sister_away: bool,
}

impl Assignment {
    /// Both sides fixed by the seed pattern.
    #[inline]
    pub fn is_fully_locked(&self) -> bool {
        self.home_locked && self.away_locked
    }

    /// The away side is forced, either by a lock or by a name pattern.
    #[inline]
    pub fn away_constrained(&self) -> bool {
        self.away_locked || self.away_pattern.is_some()
    }
}

/// Per-week occupancy of solo-venue slots.
///
/// Each counter is capped at half the number of solo venues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoloCounters {
    /// Solo venues hosting a real game.
    pub full: usize,
    /// Solo venues left vacant.
    pub empty: usize,
    /// Solo teams playing away.
    pub away: usize,
}

/// One week of the season.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    /// Slots indexed by venue.
    pub assignments: Vec<Assignment>,
    /// Teams that already have a game this week, indexed by team id.
    pub playing: Vec<bool>,
    /// Solo-venue occupancy.
    pub solo: SoloCounters,
}

impl Week {
    /// Creates an unassigned week.
    pub fn new(venue_count: usize, team_count: usize) -> Self {
        Self {
            assignments: vec![Assignment::default(); venue_count],
            playing: vec![false; team_count],
            solo: SoloCounters::default(),
        }
    }

    /// Whether `team` already has a game this week.
    #[inline]
    pub fn is_playing(&self, team: TeamId) -> bool {
        self.playing[team]
    }

    /// Number of teams with a game this week.
    pub fn playing_count(&self) -> usize {
        self.playing.iter().filter(|&&p| p).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern_unanchored() {
        let p = NamePattern::new("^a").unwrap();
        assert!(p.matches("a1"));
        assert!(p.matches("a2"));
        assert!(!p.matches("ba"));

        let any_prime = NamePattern::new("1").unwrap();
        assert!(any_prime.matches("c1"));
        assert!(!any_prime.matches("c2"));
        assert_eq!(any_prime, NamePattern::new("1").unwrap());
    }

    #[test]
    fn test_invalid_name_pattern() {
        assert!(NamePattern::new("a(").is_err());
    }

    #[test]
    fn test_week_new() {
        let w = Week::new(3, 6);
        assert_eq!(w.assignments.len(), 3);
        assert_eq!(w.playing_count(), 0);
        assert!(!w.is_playing(5));
        assert_eq!(w.solo, SoloCounters::default());
    }

    #[test]
    fn test_assignment_flags() {
        let mut a = Assignment::default();
        assert!(!a.is_fully_locked());
        assert!(!a.away_constrained());

        a.away_pattern = Some(NamePattern::new("b").unwrap());
        assert!(a.away_constrained());

        a.home_locked = true;
        a.away_locked = true;
        assert!(a.is_fully_locked());
    }
}
