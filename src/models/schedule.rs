//! Schedule (solution) model.
//!
//! A schedule is the read-out of a completed search grid: one round per
//! week, one slot per venue. It is copied out of the search state at the
//! moment of success, so it stays valid after the search unwinds.

use serde::{Deserialize, Serialize};

use super::{TeamId, VenueId};

/// A complete season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in play order.
    pub rounds: Vec<Round>,
}

/// One week of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Where this round came from.
    pub kind: RoundKind,
    /// Slots indexed by venue.
    pub slots: Vec<Slot>,
}

/// Origin of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Produced by the search.
    Regular,
    /// Synthesized sibling-vs-sibling week.
    Sister,
}

/// What happens at a venue in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// A game.
    Match(Fixture),
    /// No game at this venue.
    Bye,
}

/// A single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    /// Hosting team.
    pub home: TeamId,
    /// Visiting team.
    pub away: TeamId,
}

impl Fixture {
    /// Creates a fixture.
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    /// Same pairing with home and away swapped.
    pub fn reversed(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    /// Whether `team` plays in this fixture.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// The opponent of `team`, if `team` plays in this fixture.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if self.home == team {
            Some(self.away)
        } else if self.away == team {
            Some(self.home)
        } else {
            None
        }
    }
}

impl Round {
    /// Creates a round with every venue on a bye.
    pub fn new(kind: RoundKind, venue_count: usize) -> Self {
        Self {
            kind,
            slots: vec![Slot::Bye; venue_count],
        }
    }

    /// Places a fixture at a venue.
    pub fn set(&mut self, venue: VenueId, fixture: Fixture) {
        self.slots[venue] = Slot::Match(fixture);
    }

    /// The fixture at a venue, if any.
    pub fn fixture(&self, venue: VenueId) -> Option<Fixture> {
        match self.slots.get(venue) {
            Some(Slot::Match(f)) => Some(*f),
            _ => None,
        }
    }

    /// Fixtures with their venues.
    pub fn fixtures(&self) -> impl Iterator<Item = (VenueId, Fixture)> + '_ {
        self.slots.iter().enumerate().filter_map(|(v, s)| match s {
            Slot::Match(f) => Some((v, *f)),
            Slot::Bye => None,
        })
    }

    /// Number of venues without a game.
    pub fn bye_count(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Bye).count()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round.
    pub fn add_round(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// Number of rounds (weeks).
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// All fixtures as `(round index, venue, fixture)`.
    pub fn fixtures(&self) -> impl Iterator<Item = (usize, VenueId, Fixture)> + '_ {
        self.rounds
            .iter()
            .enumerate()
            .flat_map(|(w, r)| r.fixtures().map(move |(v, f)| (w, v, f)))
    }

    /// Number of games.
    pub fn fixture_count(&self) -> usize {
        self.fixtures().count()
    }

    /// The fixture at `(round, venue)`, if any.
    pub fn fixture_at(&self, round: usize, venue: VenueId) -> Option<Fixture> {
        self.rounds.get(round).and_then(|r| r.fixture(venue))
    }

    /// How many times `a` and `b` meet, in either orientation.
    pub fn meetings(&self, a: TeamId, b: TeamId) -> usize {
        self.fixtures()
            .filter(|(_, _, f)| f.involves(a) && f.involves(b))
            .count()
    }

    /// Fixtures involving `team`.
    pub fn fixtures_for_team(&self, team: TeamId) -> Vec<(usize, VenueId, Fixture)> {
        self.fixtures().filter(|(_, _, f)| f.involves(team)).collect()
    }

    /// Home games of `team`.
    pub fn home_games(&self, team: TeamId) -> usize {
        self.fixtures().filter(|(_, _, f)| f.home == team).count()
    }

    /// Away games of `team`.
    pub fn away_games(&self, team: TeamId) -> usize {
        self.fixtures().filter(|(_, _, f)| f.away == team).count()
    }
}
