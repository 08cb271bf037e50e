//! Mutable search state.
//!
//! Holds every counter, matrix and flag the search touches. Each mutation
//! is a `commit_*` call that returns a token carrying the overwritten
//! values; passing the token back to the matching `undo_*` restores the
//! state exactly. Tokens are `#[must_use]` so a commit cannot silently
//! lose its undo.
//!
//! Seed locks are applied once, before the search, and are never undone.

use crate::error::ConfigError;
use crate::league::League;
use crate::models::{NamePattern, PairMatrix, Team, TeamId, Venue, VenueId, Week};

/// The week × venue grid plus all per-path bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub teams: Vec<Team>,
    pub venues: Vec<Venue>,
    pub weeks: Vec<Week>,
    /// Pairs already matched on the current path.
    pub played: PairMatrix<bool>,
    /// History duplicates committed on the current path.
    pub duplicates: usize,
    /// Per-week cap on each solo counter.
    pub solo_max: usize,
}

/// Undo token for [`SearchState::commit_home`].
#[must_use]
#[derive(Debug)]
pub struct HomeCommit {
    week: usize,
    venue: VenueId,
    team: TeamId,
    previous_home: Option<TeamId>,
    previous_recent: Option<TeamId>,
}

/// Undo token for [`SearchState::commit_bye`].
#[must_use]
#[derive(Debug)]
pub struct ByeCommit {
    week: usize,
    venue: VenueId,
    counted: bool,
    previous_empty: bool,
    previous_recent: Option<TeamId>,
}

/// Undo token for [`SearchState::commit_away`].
#[must_use]
#[derive(Debug)]
pub struct AwayCommit {
    week: usize,
    venue: VenueId,
    team: TeamId,
    home: TeamId,
    previous_away: Option<TeamId>,
    previous_hosted: bool,
    previous_sister_away: bool,
    previous_played: bool,
    previous_duplicates: usize,
}

impl SearchState {
    /// Creates an unassigned grid for the league.
    pub fn new(league: &League) -> Self {
        let team_count = league.team_count();
        let venue_count = league.venue_count();
        Self {
            teams: league.teams.clone(),
            venues: league.venues.clone(),
            weeks: (0..league.week_count)
                .map(|_| Week::new(venue_count, team_count))
                .collect(),
            played: PairMatrix::filled(team_count, false),
            duplicates: 0,
            solo_max: league.solo_venue_count() / 2,
        }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    /// Whether `a` and `b` already met on the current path.
    #[inline]
    pub fn has_played(&self, a: TeamId, b: TeamId) -> bool {
        *self.played.get(a, b)
    }

    /// Sets the played flag of a pair and returns the previous value.
    pub fn mark_played(&mut self, a: TeamId, b: TeamId, value: bool) -> bool {
        let previous = *self.played.get(a, b);
        self.played.set_symmetric(a, b, value);
        previous
    }

    /// Replaces a venue's most recent host and returns the previous one.
    pub fn swap_recent_home(&mut self, venue: VenueId, team: Option<TeamId>) -> Option<TeamId> {
        std::mem::replace(&mut self.venues[venue].recent_home, team)
    }

    /// Puts `team` at home in `(week, venue)`.
    pub fn commit_home(&mut self, week: usize, venue: VenueId, team: TeamId) -> HomeCommit {
        let previous_recent = self.swap_recent_home(venue, Some(team));
        let w = &mut self.weeks[week];
        let previous_home = w.assignments[venue].home.replace(team);
        w.playing[team] = true;
        let t = &mut self.teams[team];
        t.home_count += 1;
        if t.solo {
            w.solo.full += 1;
        }
        HomeCommit {
            week,
            venue,
            team,
            previous_home,
            previous_recent,
        }
    }

    pub fn undo_home(&mut self, commit: HomeCommit) {
        let w = &mut self.weeks[commit.week];
        let t = &mut self.teams[commit.team];
        if t.solo {
            w.solo.full -= 1;
        }
        t.home_count -= 1;
        w.playing[commit.team] = false;
        w.assignments[commit.venue].home = commit.previous_home;
        self.venues[commit.venue].recent_home = commit.previous_recent;
    }

    /// Leaves `(week, venue)` vacant with `team` (the placeholder) as the
    /// nominal host.
    ///
    /// `count_solo` charges the week's solo `empty` quota; a seed lock has
    /// already charged it.
    pub fn commit_bye(
        &mut self,
        week: usize,
        venue: VenueId,
        team: TeamId,
        count_solo: bool,
    ) -> ByeCommit {
        let previous_recent = self.swap_recent_home(venue, Some(team));
        let w = &mut self.weeks[week];
        if count_solo {
            w.solo.empty += 1;
        }
        let previous_empty = std::mem::replace(&mut w.assignments[venue].empty, true);
        ByeCommit {
            week,
            venue,
            counted: count_solo,
            previous_empty,
            previous_recent,
        }
    }

    pub fn undo_bye(&mut self, commit: ByeCommit) {
        let w = &mut self.weeks[commit.week];
        w.assignments[commit.venue].empty = commit.previous_empty;
        if commit.counted {
            w.solo.empty -= 1;
        }
        self.venues[commit.venue].recent_home = commit.previous_recent;
    }

    /// Sends `team` to play away against `home` at `(week, venue)`.
    ///
    /// `duplicate` adds one to the running history-duplicate count.
    pub fn commit_away(
        &mut self,
        week: usize,
        venue: VenueId,
        home: TeamId,
        team: TeamId,
        duplicate: bool,
    ) -> AwayCommit {
        let home_venue = self.teams[team].venue;
        let w = &mut self.weeks[week];
        let t = &mut self.teams[team];
        if t.solo {
            w.solo.away += 1;
        }
        t.away_count += 1;
        let previous_hosted = std::mem::replace(&mut self.venues[venue].hosted[team], true);
        let previous_sister_away =
            std::mem::replace(&mut w.assignments[home_venue].sister_away, true);
        w.playing[team] = true;
        let previous_away = w.assignments[venue].away.replace(team);
        let previous_played = self.mark_played(home, team, true);
        let previous_duplicates = self.duplicates;
        self.duplicates += usize::from(duplicate);
        AwayCommit {
            week,
            venue,
            team,
            home,
            previous_away,
            previous_hosted,
            previous_sister_away,
            previous_played,
            previous_duplicates,
        }
    }

    pub fn undo_away(&mut self, commit: AwayCommit) {
        self.duplicates = commit.previous_duplicates;
        self.played
            .set_symmetric(commit.home, commit.team, commit.previous_played);
        let home_venue = self.teams[commit.team].venue;
        let w = &mut self.weeks[commit.week];
        w.assignments[commit.venue].away = commit.previous_away;
        w.playing[commit.team] = false;
        w.assignments[home_venue].sister_away = commit.previous_sister_away;
        self.venues[commit.venue].hosted[commit.team] = commit.previous_hosted;
        let t = &mut self.teams[commit.team];
        t.away_count -= 1;
        if t.solo {
            w.solo.away -= 1;
        }
    }

    /// Locks `team` as host of `(week, venue)`.
    ///
    /// # Errors
    /// [`ConfigError::SeedConflict`] when the team does not belong to the
    /// venue, already plays that week, has no home games left, or is a bye
    /// placeholder facing a locked visitor.
    pub fn lock_home(
        &mut self,
        week: usize,
        venue: VenueId,
        team: TeamId,
    ) -> Result<(), ConfigError> {
        let t = &self.teams[team];
        if t.venue != venue {
            return Err(conflict(
                week,
                format!("{} cannot host at {}", t.canonical_name, self.venues[venue].name),
            ));
        }
        if t.empty && self.weeks[week].assignments[venue].away_locked {
            return Err(conflict(
                week,
                format!("{} is a bye and cannot receive a visitor", t.canonical_name),
            ));
        }
        if self.weeks[week].playing[team] {
            return Err(conflict(week, format!("{} is locked twice", t.canonical_name)));
        }
        if !t.can_host() {
            return Err(conflict(
                week,
                format!("{} exceeds {} home games", t.canonical_name, t.max_home),
            ));
        }

        let w = &mut self.weeks[week];
        let t = &mut self.teams[team];
        let cell = &mut w.assignments[venue];
        cell.home = Some(team);
        cell.home_locked = true;
        w.playing[team] = true;
        if t.solo {
            w.solo.full += 1;
        } else if t.empty {
            w.solo.empty += 1;
        }
        t.home_count += 1;
        Ok(())
    }

    /// Locks `team` as visitor of `(week, venue)`.
    ///
    /// Also marks the team's own venue as having a sibling away that week,
    /// and the pair as played when the host is locked too.
    ///
    /// # Errors
    /// [`ConfigError::SeedConflict`] when the team is a placeholder,
    /// belongs to the venue, already plays that week, has no away games
    /// left, or the locked host of the venue is a bye placeholder.
    pub fn lock_away(
        &mut self,
        week: usize,
        venue: VenueId,
        team: TeamId,
    ) -> Result<(), ConfigError> {
        let t = &self.teams[team];
        if t.empty {
            return Err(conflict(
                week,
                format!("{} is a bye placeholder and cannot travel", t.canonical_name),
            ));
        }
        if t.venue == venue {
            return Err(conflict(
                week,
                format!("{} cannot visit its own venue", t.canonical_name),
            ));
        }
        if self.weeks[week].playing[team] {
            return Err(conflict(week, format!("{} is locked twice", t.canonical_name)));
        }
        if !t.can_travel() {
            return Err(conflict(
                week,
                format!("{} exceeds {} away games", t.canonical_name, t.max_away),
            ));
        }

        let home_venue = t.venue;
        let cell = &self.weeks[week].assignments[venue];
        if let (true, Some(home)) = (cell.home_locked, cell.home) {
            if self.teams[home].empty {
                return Err(conflict(
                    week,
                    format!(
                        "{} is a bye and cannot receive a visitor",
                        self.teams[home].canonical_name
                    ),
                ));
            }
            self.mark_played(home, team, true);
        }
        let w = &mut self.weeks[week];
        let t = &mut self.teams[team];
        if t.solo {
            w.solo.away += 1;
        }
        w.assignments[home_venue].sister_away = true;
        let cell = &mut w.assignments[venue];
        cell.away = Some(team);
        cell.away_locked = true;
        w.playing[team] = true;
        t.away_count += 1;
        Ok(())
    }

    /// Restricts the host of `(week, venue)` by canonical name.
    pub fn set_home_pattern(&mut self, week: usize, venue: VenueId, pattern: NamePattern) {
        self.weeks[week].assignments[venue].home_pattern = Some(pattern);
    }

    /// Restricts the visitor of `(week, venue)` by canonical name.
    pub fn set_away_pattern(&mut self, week: usize, venue: VenueId, pattern: NamePattern) {
        self.weeks[week].assignments[venue].away_pattern = Some(pattern);
    }
}

fn conflict(week: usize, message: String) -> ConfigError {
    ConfigError::SeedConflict {
        week: week + 1,
        message,
    }
}
