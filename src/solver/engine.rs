//! Depth-first backtracking search.
//!
//! The search walks a cursor over `(week, venue, phase)`: for each cell it
//! picks a host, then a visitor, then moves to the next venue (or to venue
//! 0 of the next week). Every choice is committed on the [`SearchState`]
//! before recursing and undone right after, so a branch that fails leaves
//! no trace.
//!
//! # Termination
//!
//! In [`SolverMode::FirstSolution`] the first complete grid sets the
//! `found` flag and every frame unwinds without trying more candidates.
//! In [`SolverMode::BestScore`] each complete grid tightens the duplicate
//! limit to one below its own count, and the search only stops at zero
//! duplicates or when the tree is exhausted.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, Level};

use crate::error::ConfigError;
use crate::history::History;
use crate::input::SeedPattern;
use crate::league::League;
use crate::models::{Schedule, TeamId, VenueId};
use crate::ordering::{alternate_home, rules, OrderingContext, OrderingPipeline};
use crate::seed::apply_seed;

use super::config::{SolverConfig, SolverMode};
use super::filter::{self, AwayFilter, Rejection};
use super::finalize::build_schedule;
use super::state::SearchState;

/// A complete schedule handed to the caller.
#[derive(Debug, Clone)]
pub struct Solution {
    pub schedule: Schedule,
    /// History duplicates in the searched weeks.
    pub duplicates: usize,
    /// Dead ends met before this schedule was found.
    pub deadends: u64,
}

/// Summary of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Schedules emitted.
    pub solutions: usize,
    /// Duplicate count of the last emitted schedule.
    pub best_duplicates: Option<usize>,
    pub deadends: u64,
    /// Seed the random source was started from.
    pub seed: u64,
    /// The whole search tree was explored.
    pub exhausted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    week: usize,
    venue: VenueId,
    phase: Phase,
}

impl Cursor {
    fn start() -> Self {
        Self {
            week: 0,
            venue: 0,
            phase: Phase::Home,
        }
    }

    fn away(self) -> Self {
        Self {
            phase: Phase::Away,
            ..self
        }
    }

    fn next(self, venue_count: usize) -> Self {
        if self.venue + 1 >= venue_count {
            Self {
                week: self.week + 1,
                venue: 0,
                phase: Phase::Home,
            }
        } else {
            Self {
                week: self.week,
                venue: self.venue + 1,
                phase: Phase::Home,
            }
        }
    }
}

/// Backtracking schedule search over one league.
///
/// # Example
///
/// ```
/// use u_robin::league::LeagueBuilder;
/// use u_robin::solver::{Solver, SolverConfig};
///
/// let league = LeagueBuilder::new(3).build().unwrap();
/// let config = SolverConfig::default().with_repeat_visitors(true);
/// let schedule = Solver::new(&league, config).solve().unwrap();
/// assert_eq!(schedule.round_count(), 5);
/// ```
#[derive(Debug)]
pub struct Solver<'a> {
    league: &'a League,
    history: Option<&'a History>,
    config: SolverConfig,
    initial: SearchState,
    state: SearchState,
    ordering: OrderingPipeline,
    rng: SmallRng,
    seed: u64,
    duplicate_limit: Option<usize>,
    best: Option<usize>,
    found: bool,
    solutions: usize,
    deadends: u64,
    trace_deadends: bool,
}

impl<'a> Solver<'a> {
    /// Creates a solver. Without a configured seed, one is drawn now.
    pub fn new(league: &'a League, config: SolverConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let initial = SearchState::new(league);
        Self {
            league,
            history: None,
            state: initial.clone(),
            initial,
            ordering: OrderingPipeline::new(),
            rng: SmallRng::seed_from_u64(seed),
            seed,
            duplicate_limit: config.duplicate_threshold,
            config,
            best: None,
            found: false,
            solutions: 0,
            deadends: 0,
            trace_deadends: false,
        }
    }

    /// Uses `history` for duplicate avoidance and candidate ordering.
    pub fn with_history(mut self, history: &'a History) -> Self {
        self.history = Some(history);
        self
    }

    /// Pre-fills the grid from a seed pattern.
    ///
    /// # Errors
    /// See [`apply_seed`].
    pub fn with_seed_pattern(mut self, pattern: &SeedPattern) -> Result<Self, ConfigError> {
        apply_seed(&mut self.initial, self.league, pattern)?;
        self.state = self.initial.clone();
        Ok(self)
    }

    /// Seed of the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Current search state; after a run this is the seeded starting grid.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Runs the search and returns the last schedule it produced.
    pub fn solve(&mut self) -> Option<Schedule> {
        let mut last = None;
        self.solve_with(&mut |solution: &Solution| last = Some(solution.schedule.clone()));
        last
    }

    /// Runs the search, handing every emitted schedule to `sink`.
    ///
    /// Each call starts from the seeded grid with the random source reset,
    /// so repeated calls give identical results.
    pub fn solve_with(&mut self, sink: &mut dyn FnMut(&Solution)) -> SearchReport {
        self.state = self.initial.clone();
        self.rng = SmallRng::seed_from_u64(self.seed);
        self.ordering = self.build_ordering();
        self.duplicate_limit = self.config.duplicate_threshold;
        self.best = None;
        self.found = false;
        self.solutions = 0;
        self.deadends = 0;
        self.trace_deadends = tracing::enabled!(Level::DEBUG);

        info!(
            seed = self.seed,
            weeks = self.state.week_count(),
            venues = self.state.venue_count(),
            ordering = ?self.ordering.rule_names(),
            "search started"
        );
        self.search(Cursor::start(), sink);
        info!(
            deadends = self.deadends,
            solutions = self.solutions,
            "search finished"
        );

        SearchReport {
            solutions: self.solutions,
            best_duplicates: self.best,
            deadends: self.deadends,
            seed: self.seed,
            exhausted: !self.found,
        }
    }

    fn build_ordering(&self) -> OrderingPipeline {
        let mut pipeline = OrderingPipeline::new();
        if self.config.randomize {
            pipeline = pipeline.with_rule(rules::Shuffle);
        }
        if self.config.allow_repeat_visitors {
            pipeline = pipeline.with_rule(rules::FreshFirst);
        }
        if self.history.is_some() {
            pipeline = pipeline.with_rule(rules::RecentAwayFirst);
        }
        pipeline
    }

    fn away_filter(&self) -> AwayFilter<'a> {
        AwayFilter {
            history: self.history,
            duplicate_limit: self.duplicate_limit,
            group_rule: self.config.group_rule,
            allow_repeat_visitors: self.config.allow_repeat_visitors,
        }
    }

    fn search(&mut self, cursor: Cursor, sink: &mut dyn FnMut(&Solution)) {
        if self.found {
            return;
        }
        if cursor.week >= self.state.week_count() {
            self.complete(sink);
            return;
        }
        match cursor.phase {
            Phase::Home => self.choose_home(cursor, sink),
            Phase::Away => self.choose_away(cursor, sink),
        }
    }

    fn choose_home(&mut self, cursor: Cursor, sink: &mut dyn FnMut(&Solution)) {
        let (week, venue) = (cursor.week, cursor.venue);
        let next = cursor.next(self.state.venue_count());
        let cell = &self.state.weeks[week].assignments[venue];

        if cell.home_locked {
            let (home, away_locked) = (cell.home, cell.away_locked);
            let Some(home) = home else {
                return;
            };
            if self.state.teams[home].empty {
                let bye = self.state.commit_bye(week, venue, home, false);
                self.search(next, sink);
                self.state.undo_bye(bye);
            } else if away_locked {
                self.search(next, sink);
            } else {
                let previous = self.state.swap_recent_home(venue, Some(home));
                self.search(cursor.away(), sink);
                self.state.swap_recent_home(venue, previous);
            }
            return;
        }

        let mut candidates = filter::home_candidates(&self.state, week, venue);
        if candidates.is_empty() && self.trace_deadends {
            let rejected = filter::explain_home(&self.state, week, venue);
            debug!(
                week = week + 1,
                venue = %self.league.venue_name(venue),
                rejected = %self.describe(&rejected),
                "dead end choosing home"
            );
        }
        let rng = self.config.randomize.then_some(&mut self.rng);
        alternate_home(&mut candidates, self.state.venues[venue].recent_home, rng);

        for team in candidates {
            if self.found {
                break;
            }
            if self.state.teams[team].empty {
                let bye = self.state.commit_bye(week, venue, team, true);
                self.search(next, sink);
                self.state.undo_bye(bye);
                continue;
            }
            let commit = self.state.commit_home(week, venue, team);
            self.search(cursor.away(), sink);
            if !self.found {
                self.deadends += 1;
            }
            self.state.undo_home(commit);
        }
    }

    fn choose_away(&mut self, cursor: Cursor, sink: &mut dyn FnMut(&Solution)) {
        let (week, venue) = (cursor.week, cursor.venue);
        let next = cursor.next(self.state.venue_count());
        let cell = &self.state.weeks[week].assignments[venue];
        let Some(home) = cell.home else {
            return;
        };

        if cell.away_locked {
            if let Some(away) = cell.away {
                let previous = self.state.mark_played(home, away, true);
                self.search(next, sink);
                self.state.mark_played(home, away, previous);
            }
            return;
        }

        let rules = self.away_filter();
        let mut candidates = filter::away_candidates(&self.state, &rules, week, venue, home);
        if candidates.is_empty() && self.trace_deadends {
            let rejected = filter::explain_away(&self.state, &rules, week, venue, home);
            debug!(
                week = week + 1,
                venue = %self.league.venue_name(venue),
                home = %self.league.team_name(home),
                rejected = %self.describe(&rejected),
                "dead end choosing away"
            );
        }
        let mut context =
            OrderingContext::new(home, &self.state.venues[venue].hosted, &mut self.rng)
                .with_history(self.history);
        self.ordering.apply(&mut candidates, &mut context);

        for team in candidates {
            if self.found {
                break;
            }
            // the limit may have tightened while a sibling branch ran
            let rules = self.away_filter();
            if !rules.within_limit(&self.state, home, team) {
                continue;
            }
            let commit = self
                .state
                .commit_away(week, venue, home, team, rules.is_duplicate(home, team));
            self.search(next, sink);
            if !self.found {
                self.deadends += 1;
            }
            self.state.undo_away(commit);
        }
    }

    fn complete(&mut self, sink: &mut dyn FnMut(&Solution)) {
        let duplicates = self.state.duplicates;
        match self.config.mode {
            SolverMode::FirstSolution => self.found = true,
            SolverMode::BestScore => {
                if self.best.is_some_and(|best| duplicates >= best) {
                    return;
                }
                match duplicates.checked_sub(1) {
                    Some(limit) => self.duplicate_limit = Some(limit),
                    None => self.found = true,
                }
            }
        }
        self.best = Some(duplicates);
        self.solutions += 1;
        info!(duplicates, deadends = self.deadends, "found a schedule");

        let schedule = build_schedule(
            &self.state,
            self.league,
            self.history,
            self.config.sister_week,
        );
        sink(&Solution {
            schedule,
            duplicates,
            deadends: self.deadends,
        });
    }

    fn describe(&self, rejected: &[(TeamId, Rejection)]) -> String {
        rejected
            .iter()
            .map(|(team, reason)| format!("{}:{reason}", self.league.team_name(*team)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        parse_groups, parse_history, parse_pairs, parse_roster_names, parse_seed_pattern,
    };
    use crate::league::LeagueBuilder;
    use crate::models::{RoundKind, Slot};
    use crate::solver::{GroupRule, SisterWeek};
    use crate::validation::validate_setup;

    const INIT5: &str = include_str!("../../config/init5.csv");

    fn rows(schedule: &Schedule, league: &League) -> Vec<String> {
        schedule
            .fixtures()
            .map(|(w, v, f)| {
                format!(
                    "{} {} {} {}",
                    w + 1,
                    league.venue_name(v),
                    league.team_name(f.home),
                    league.team_name(f.away)
                )
            })
            .collect()
    }

    fn run(solver: &mut Solver<'_>) -> (Vec<Solution>, SearchReport) {
        let mut found = Vec::new();
        let report = solver.solve_with(&mut |s: &Solution| found.push(s.clone()));
        (found, report)
    }

    /// Checks the properties every completed schedule must satisfy.
    fn assert_well_formed(schedule: &Schedule, league: &League, unique_pairs: bool) {
        for round in &schedule.rounds {
            let mut seen = vec![false; league.team_count()];
            let mut travelling = vec![false; league.venue_count()];
            for (_, f) in round.fixtures() {
                for team in [f.home, f.away] {
                    assert!(!seen[team], "team {team} plays twice in a week");
                    seen[team] = true;
                }
                let v = league.teams[f.away].venue;
                assert!(!travelling[v], "both teams of venue {v} travel in one week");
                travelling[v] = true;
            }
        }
        let searched = Schedule {
            rounds: schedule
                .rounds
                .iter()
                .filter(|r| r.kind == RoundKind::Regular)
                .cloned()
                .collect(),
        };
        for team in &league.teams {
            assert!(searched.home_games(team.id) <= team.max_home);
            assert!(searched.away_games(team.id) <= team.max_away);
        }
        if unique_pairs {
            for a in 0..league.team_count() {
                for b in a + 1..league.team_count() {
                    assert!(schedule.meetings(a, b) <= 1, "{a} and {b} meet twice");
                }
            }
        }
    }

    #[test]
    fn test_cursor_advance() {
        let c = Cursor::start();
        assert_eq!(c.away().phase, Phase::Away);
        let n = c.away().next(3);
        assert_eq!((n.week, n.venue, n.phase), (0, 1, Phase::Home));
        let wrap = Cursor {
            week: 2,
            venue: 2,
            phase: Phase::Away,
        }
        .next(3);
        assert_eq!((wrap.week, wrap.venue), (3, 0));
    }

    #[test]
    fn test_two_venues_exhaust() {
        let league = LeagueBuilder::new(2).build().unwrap();
        let mut solver = Solver::new(&league, SolverConfig::default());
        let (found, report) = run(&mut solver);

        assert!(found.is_empty());
        assert_eq!(report.solutions, 0);
        assert!(report.exhausted);
        assert_eq!(report.deadends, 18);
        assert_eq!(solver.state(), &SearchState::new(&league));
    }

    #[test]
    fn test_three_venues_exhaust() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let mut solver = Solver::new(&league, SolverConfig::default());
        let (found, report) = run(&mut solver);

        assert!(found.is_empty());
        assert_eq!(report.deadends, 1_114);
    }

    #[test]
    fn test_three_venues_relaxed_golden() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let config = SolverConfig::default().with_repeat_visitors(true);
        let mut solver = Solver::new(&league, config);
        let (found, report) = run(&mut solver);

        assert_eq!(found.len(), 1);
        assert_eq!(report.deadends, 30);
        assert!(!report.exhausted);
        let expected = [
            "1 A a1 c2", "1 B b1 a2", "1 C c1 b2", //
            "2 A a2 c1", "2 B b1 a1", "2 C c2 b2", //
            "3 A a1 c1", "3 B b2 a2", "3 C c2 b1", //
            "4 A a2 c2", "4 B b2 a1", "4 C c1 b1", //
            "5 A a2 a1", "5 B b2 b1", "5 C c2 c1",
        ];
        assert_eq!(rows(&found[0].schedule, &league), expected);
        assert_well_formed(&found[0].schedule, &league, false);
    }

    #[test]
    fn test_sister_week_placement() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let base = SolverConfig::default().with_repeat_visitors(true);

        let first = Solver::new(&league, base.clone().with_sister_week(SisterWeek::First))
            .solve()
            .unwrap();
        let r = rows(&first, &league);
        assert_eq!(&r[..4], ["1 A a2 a1", "1 B b2 b1", "1 C c2 c1", "2 A a1 c2"]);
        assert_eq!(first.rounds[0].kind, RoundKind::Sister);

        let both = Solver::new(&league, base.clone().with_sister_week(SisterWeek::Both))
            .solve()
            .unwrap();
        let r = rows(&both, &league);
        assert_eq!(both.round_count(), 6);
        assert_eq!(&r[15..], ["6 A a1 a2", "6 B b1 b2", "6 C c1 c2"]);

        let none = Solver::new(&league, base.with_sister_week(SisterWeek::None))
            .solve()
            .unwrap();
        assert_eq!(none.round_count(), 4);
        assert_eq!(none.fixture_count(), 12);
    }

    #[test]
    fn test_five_venues_seeded_golden() {
        let league = LeagueBuilder::new(5).build().unwrap();
        let mut solver = Solver::new(&league, SolverConfig::default())
            .with_seed_pattern(&parse_seed_pattern(INIT5))
            .unwrap();
        let (found, report) = run(&mut solver);

        assert_eq!(found.len(), 1);
        assert_eq!(report.deadends, 76_083);
        let schedule = &found[0].schedule;
        let r = rows(schedule, &league);
        assert_eq!(r.len(), 45);
        assert_eq!(
            &r[..5],
            ["1 A a2 d2", "1 B b2 c1", "1 C c2 e2", "1 D d1 b1", "1 E e1 a1"]
        );
        assert_eq!(
            &r[40..],
            ["9 A a2 a1", "9 B b2 b1", "9 C c2 c1", "9 D d2 d1", "9 E e2 e1"]
        );

        // every pair of the ten teams meets exactly once
        for a in 0..10 {
            for b in a + 1..10 {
                assert_eq!(schedule.meetings(a, b), 1, "{a} vs {b}");
            }
        }
        assert_well_formed(schedule, &league, true);

        // locked hosts are honoured
        let pattern = parse_seed_pattern(INIT5);
        for (w, row) in pattern.rows.iter().enumerate() {
            for (v, cell) in row.iter().enumerate() {
                let host = schedule.fixture_at(w, v).unwrap().home;
                assert_eq!(Some(league.team_name(host)), cell.home.as_deref());
            }
        }
    }

    #[test]
    fn test_deterministic_reruns() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let config = SolverConfig::default()
            .with_repeat_visitors(true)
            .with_randomize(true)
            .with_seed(1234);

        let mut solver = Solver::new(&league, config.clone());
        let first = solver.solve();
        let second = solver.solve();
        let other = Solver::new(&league, config).solve();

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(first, other);
        assert_eq!(solver.seed(), 1234);
    }

    #[test]
    fn test_randomized_schedules_are_well_formed() {
        let league = LeagueBuilder::new(3).build().unwrap();
        for seed in 0..5 {
            let config = SolverConfig::default()
                .with_repeat_visitors(true)
                .with_randomize(true)
                .with_seed(seed);
            if let Some(schedule) = Solver::new(&league, config).solve() {
                assert_eq!(schedule.round_count(), 5);
                assert_well_formed(&schedule, &league, false);
            }
        }
    }

    #[test]
    fn test_home_lock_honoured() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let config = SolverConfig::default().with_repeat_visitors(true);
        let schedule = Solver::new(&league, config)
            .with_seed_pattern(&parse_seed_pattern("a2"))
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(schedule.fixture_at(0, 0).unwrap().home, 1);
        assert_well_formed(&schedule, &league, false);
    }

    #[test]
    fn test_history_golden_with_zero_duplicates() {
        let names = parse_roster_names("A a1 a2\nB b1 b2\nC c1 c2\n").unwrap();
        let league = LeagueBuilder::new(3).with_names(names).build().unwrap();
        let entries = parse_history("1 w a1 c2\n2 w b1 a2\n1 w b1 a2\n").unwrap();
        let history = History::from_entries(&league, &entries);
        let config = SolverConfig::default()
            .with_repeat_visitors(true)
            .with_duplicate_threshold(0);

        let mut solver = Solver::new(&league, config).with_history(&history);
        let (found, report) = run(&mut solver);

        assert_eq!(report.deadends, 6);
        assert_eq!(found[0].duplicates, 0);
        let schedule = &found[0].schedule;
        let expected = [
            "1 A a1 b1", "1 B b2 c1", "1 C c2 a2", //
            "2 A a2 b1", "2 B b2 c2", "2 C c1 a1", //
            "3 A a1 b2", "3 B b1 c2", "3 C c1 a2", //
            "4 A a2 b2", "4 B b1 c1", "4 C c2 a1", //
            "5 A a2 a1", "5 B b2 b1", "5 C c2 c1",
        ];
        assert_eq!(rows(schedule, &league), expected);
        assert_well_formed(schedule, &league, false);

        // neither history pairing repeats its orientation
        for (_, _, f) in schedule.fixtures() {
            assert!(!history.is_duplicate(f.home, f.away));
        }
    }

    #[test]
    fn test_best_score_improves_until_zero() {
        let league = LeagueBuilder::new(3).build().unwrap();
        let mut history = History::new(league.team_count());
        // the first relaxed schedule opens with a1 hosting c2 and b1 hosting a2
        history.record(1, 0, 5);
        history.record(1, 2, 1);
        let config = SolverConfig::default()
            .with_repeat_visitors(true)
            .with_mode(SolverMode::BestScore);

        let mut solver = Solver::new(&league, config).with_history(&history);
        let (found, report) = run(&mut solver);

        assert!(!found.is_empty());
        let scores: Vec<usize> = found.iter().map(|s| s.duplicates).collect();
        assert!(scores.windows(2).all(|w| w[1] < w[0]), "{scores:?}");
        assert_eq!(report.best_duplicates, scores.last().copied());
        assert_eq!(report.solutions, found.len());
        if report.best_duplicates == Some(0) {
            assert!(!report.exhausted);
        }
        for s in &found {
            let counted = s
                .schedule
                .rounds
                .iter()
                .filter(|r| r.kind == RoundKind::Regular)
                .flat_map(|r| r.fixtures())
                .filter(|(_, f)| history.is_duplicate(f.home, f.away))
                .count();
            assert_eq!(counted, s.duplicates);
        }
    }

    #[test]
    fn test_solo_venues_with_pairing() {
        let names =
            parse_roster_names("Alpha Ants\nBravo Bats Bees\nCharlie Cats Cows\nDelta Dogs\n")
                .unwrap();
        let mut league = LeagueBuilder::new(4).with_names(names).build().unwrap();
        league
            .assign_pairings(&parse_pairs("Ants Dogs\n").unwrap())
            .unwrap();
        assert_eq!(league.week_count, 4);

        let config = SolverConfig::default().with_repeat_visitors(true);
        let mut solver = Solver::new(&league, config.clone());
        let (found, report) = run(&mut solver);

        assert_eq!(report.deadends, 1_045);
        let schedule = &found[0].schedule;
        let expected = [
            "1 Alpha Ants Cows",
            "1 Bravo Bats Dogs",
            "1 Charlie Cats Bees",
            "2 Bravo Bees Ants",
            "2 Charlie Cats Bats",
            "2 Delta Dogs Cows",
            "3 Alpha Ants Cats",
            "3 Bravo Bees Dogs",
            "3 Charlie Cows Bats",
            "4 Bravo Bats Ants",
            "4 Charlie Cows Bees",
            "4 Delta Dogs Cats",
            "5 Alpha Ants Dogs",
            "5 Bravo Bees Bats",
            "5 Charlie Cows Cats",
        ];
        assert_eq!(rows(schedule, &league), expected);
        assert_eq!(schedule.rounds[4].slots[3], Slot::Bye);
        assert_well_formed(schedule, &league, true);

        let strict = SolverConfig::default();
        assert!(Solver::new(&league, strict).solve().is_none());
    }

    #[test]
    fn test_ungrouped_teams_share_one_group() {
        let names = parse_roster_names("A a1 a2\nB b1 b2\nC c1 c2\n").unwrap();
        let config = SolverConfig::default()
            .with_repeat_visitors(true)
            .with_group_rule(GroupRule::InterOnly);

        // c1 and c2 are both ungrouped but never meet outside the sister week
        let mut league = LeagueBuilder::new(3).with_names(names.clone()).build().unwrap();
        league
            .assign_groups(&parse_groups("a1 x\na2 y\nb1 z\nb2 w\n").unwrap())
            .unwrap();
        assert!(validate_setup(&league, &config).is_ok());
        let (found, report) = run(&mut Solver::new(&league, config.clone()));
        assert_eq!(report.deadends, 30);
        let schedule = &found[0].schedule;
        assert_eq!(&rows(schedule, &league)[..3], ["1 A a1 c2", "1 B b1 a2", "1 C c1 b2"]);
        assert_well_formed(schedule, &league, false);

        // five ungrouped teams may only face a1
        let mut league = LeagueBuilder::new(3).with_names(names).build().unwrap();
        league.assign_groups(&parse_groups("a1 x\n").unwrap()).unwrap();
        assert!(validate_setup(&league, &config).is_ok());
        let (found, report) = run(&mut Solver::new(&league, config));
        assert!(found.is_empty());
        assert!(report.exhausted);
        assert_eq!(report.deadends, 12);
    }
}
