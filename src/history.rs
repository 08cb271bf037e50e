//! Prior-season matchup history.
//!
//! Keeps the most recent meeting of every team pair, stored symmetrically
//! so that `(a, b)` and `(b, a)` return the same record. A cell that never
//! received a meeting reads as season 0 with the row team at home.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::input::HistoryEntry;
use crate::league::League;
use crate::models::{PairMatrix, TeamId};

/// The most recent meeting of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Season number; 0 means the pair never met.
    pub season: u32,
    pub home: TeamId,
    pub away: TeamId,
}

/// Classification of a prospective pairing against history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchupQuality {
    /// No prior meeting.
    Fresh,
    /// Same home team as the last meeting.
    Duplicate,
    /// Home and away swapped from the last meeting.
    Reversed,
}

impl MatchupQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchupQuality::Fresh => "fresh",
            MatchupQuality::Duplicate => "duplicate",
            MatchupQuality::Reversed => "reversed",
        }
    }
}

impl fmt::Display for MatchupQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matchup history over all team pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    meetings: PairMatrix<Meeting>,
}

impl History {
    /// Creates a history where no pair has met.
    pub fn new(team_count: usize) -> Self {
        Self {
            meetings: PairMatrix::from_fn(team_count, |home, away| Meeting {
                season: 0,
                home,
                away,
            }),
        }
    }

    /// Builds a history from parsed entries.
    ///
    /// Names resolve through [`League::lookup`]; entries naming unknown
    /// teams are skipped with a warning.
    pub fn from_entries(league: &League, entries: &[HistoryEntry]) -> Self {
        let mut history = Self::new(league.team_count());
        for entry in entries {
            match (league.lookup(&entry.home), league.lookup(&entry.away)) {
                (Some(home), Some(away)) => history.record(entry.season, home, away),
                _ => warn!(
                    home = %entry.home,
                    away = %entry.away,
                    season = entry.season,
                    "skipping history entry with unknown team"
                ),
            }
        }
        history
    }

    /// Records a meeting, keeping it only if it is the most recent for
    /// the pair.
    pub fn record(&mut self, season: u32, home: TeamId, away: TeamId) {
        if season > self.meetings.get(home, away).season {
            self.meetings
                .set_symmetric(home, away, Meeting { season, home, away });
        }
    }

    /// Number of teams covered.
    pub fn team_count(&self) -> usize {
        self.meetings.size()
    }

    /// Most recent meeting of the pair.
    #[inline]
    pub fn meeting(&self, home: TeamId, away: TeamId) -> &Meeting {
        self.meetings.get(home, away)
    }

    /// Season of the most recent meeting, 0 if none.
    #[inline]
    pub fn season(&self, home: TeamId, away: TeamId) -> u32 {
        self.meeting(home, away).season
    }

    /// Whether `home` hosting `away` repeats the last meeting's orientation.
    #[inline]
    pub fn is_duplicate(&self, home: TeamId, away: TeamId) -> bool {
        let m = self.meeting(home, away);
        m.season > 0 && m.home == home
    }

    /// Classifies `home` hosting `away`.
    pub fn quality(&self, home: TeamId, away: TeamId) -> MatchupQuality {
        if self.season(home, away) == 0 {
            MatchupQuality::Fresh
        } else if self.is_duplicate(home, away) {
            MatchupQuality::Duplicate
        } else {
            MatchupQuality::Reversed
        }
    }
}
