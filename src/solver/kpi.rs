//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fixtures | Games across all rounds |
//! | Byes | Venue-weeks without a game |
//! | Repeated pairs | Pairs meeting more than once |
//! | Unplayed pairs | Pairs of real teams that never meet |
//! | Max imbalance | Largest \|home - away\| of any team |
//! | Fresh / Duplicate / Reversed | Games classified against history |

use serde::Serialize;

use crate::history::{History, MatchupQuality};
use crate::league::League;
use crate::models::Schedule;

/// Home/away tally of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamBalance {
    pub team: String,
    pub home: usize,
    pub away: usize,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleKpi {
    pub rounds: usize,
    pub fixtures: usize,
    pub byes: usize,
    /// Pairs meeting more than once.
    pub repeated_pairs: usize,
    /// Pairs of real teams that never meet.
    pub unplayed_pairs: usize,
    /// Per-team home/away counts, real teams only.
    pub balance: Vec<TeamBalance>,
    /// Largest home/away difference of any team.
    pub max_imbalance: usize,
    /// Games with no prior meeting (zero without history).
    pub fresh: usize,
    pub duplicates: usize,
    pub reversed: usize,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule of `league`.
    pub fn calculate(schedule: &Schedule, league: &League, history: Option<&History>) -> Self {
        let n = league.team_count();
        let mut meetings = vec![0usize; n * n];
        let mut fresh = 0;
        let mut duplicates = 0;
        let mut reversed = 0;

        for (_, _, f) in schedule.fixtures() {
            meetings[f.home * n + f.away] += 1;
            meetings[f.away * n + f.home] += 1;
            match history.map(|h| h.quality(f.home, f.away)) {
                Some(MatchupQuality::Fresh) => fresh += 1,
                Some(MatchupQuality::Duplicate) => duplicates += 1,
                Some(MatchupQuality::Reversed) => reversed += 1,
                None => {}
            }
        }

        let real: Vec<_> = league.teams.iter().filter(|t| t.is_real()).collect();
        let mut repeated_pairs = 0;
        let mut unplayed_pairs = 0;
        for (i, a) in real.iter().enumerate() {
            for b in &real[i + 1..] {
                match meetings[a.id * n + b.id] {
                    0 => unplayed_pairs += 1,
                    1 => {}
                    _ => repeated_pairs += 1,
                }
            }
        }

        let balance: Vec<TeamBalance> = real
            .iter()
            .map(|t| TeamBalance {
                team: t.name.clone(),
                home: schedule.home_games(t.id),
                away: schedule.away_games(t.id),
            })
            .collect();
        let max_imbalance = balance
            .iter()
            .map(|b| b.home.abs_diff(b.away))
            .max()
            .unwrap_or(0);

        Self {
            rounds: schedule.round_count(),
            fixtures: schedule.fixture_count(),
            byes: schedule.rounds.iter().map(|r| r.bye_count()).sum(),
            repeated_pairs,
            unplayed_pairs,
            balance,
            max_imbalance,
            fresh,
            duplicates,
            reversed,
        }
    }

    /// Whether every pair of real teams meets exactly once.
    pub fn is_perfect_round_robin(&self) -> bool {
        self.repeated_pairs == 0 && self.unplayed_pairs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::LeagueBuilder;
    use crate::models::{Fixture, Round, RoundKind};

    fn schedule(rounds: &[&[(usize, usize)]], venues: usize) -> Schedule {
        let mut s = Schedule::new();
        for fixtures in rounds {
            let mut r = Round::new(RoundKind::Regular, venues);
            for (v, &(h, a)) in fixtures.iter().enumerate() {
                r.set(v, Fixture::new(h, a));
            }
            s.add_round(r);
        }
        s
    }

    #[test]
    fn test_kpi_two_venues() {
        let league = LeagueBuilder::new(2).build().unwrap();
        // a1-b1, a2-b2 twice; siblings never meet
        let s = schedule(&[&[(0, 2), (3, 1)], &[(1, 3)]], 2);
        let kpi = ScheduleKpi::calculate(&s, &league, None);

        assert_eq!(kpi.rounds, 2);
        assert_eq!(kpi.fixtures, 3);
        assert_eq!(kpi.byes, 1);
        assert_eq!(kpi.repeated_pairs, 1);
        assert_eq!(kpi.unplayed_pairs, 4);
        assert!(!kpi.is_perfect_round_robin());
        assert_eq!(kpi.balance[1].team, "a2");
        assert_eq!(kpi.balance[1].home, 1);
        assert_eq!(kpi.balance[1].away, 1);
        assert_eq!(kpi.max_imbalance, 1);
        assert_eq!(kpi.fresh + kpi.duplicates + kpi.reversed, 0);
    }

    #[test]
    fn test_kpi_history_classes() {
        let league = LeagueBuilder::new(2).build().unwrap();
        let mut history = History::new(4);
        history.record(1, 0, 2);
        history.record(1, 1, 3);
        let s = schedule(&[&[(0, 2), (3, 1)]], 2);
        let kpi = ScheduleKpi::calculate(&s, &league, Some(&history));

        assert_eq!(kpi.duplicates, 1);
        assert_eq!(kpi.reversed, 1);
        assert_eq!(kpi.fresh, 0);
    }
}
