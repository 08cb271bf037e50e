//! Home and away candidate filters.
//!
//! Each check returns the first [`Rejection`] that applies, in a fixed
//! order. The search only needs the survivors; the reasons are collected
//! for dead-end logging.

use std::fmt;

use crate::history::History;
use crate::models::{TeamId, VenueId};

use super::config::GroupRule;
use super::state::SearchState;

/// Why a candidate was excluded from a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// All solo venues allowed to host a real game this week already do.
    SoloFull,
    /// All solo venues allowed to sit empty this week already do.
    SoloEmpty,
    /// Home ceiling reached.
    MaxHome,
    /// The slot's away side is forced, so it cannot be a bye.
    AwayOccupied,
    /// Already has a game this week.
    Playing,
    /// Rejected by the slot's name pattern.
    NamePattern,
    /// Would push the history-duplicate count over its limit.
    DuplicateLimit,
    /// Placeholder team.
    Bye,
    /// Same group under an inter-group rule.
    InterGroup,
    /// Different group under an intra-group rule.
    IntraGroup,
    /// One of the venue's own teams.
    OwnVenue,
    /// All solo teams allowed to travel this week already do.
    SoloAway,
    /// The sibling is already playing away this week.
    SisterAway,
    /// Away ceiling reached.
    MaxAway,
    /// Already visited this venue.
    RepeatVisitor,
    /// Already met the home team.
    AlreadyPlayed,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::SoloFull => "solo_full",
            Rejection::SoloEmpty => "solo_empty",
            Rejection::MaxHome => "max_home",
            Rejection::AwayOccupied => "away_occupied",
            Rejection::Playing => "playing",
            Rejection::NamePattern => "name_pattern",
            Rejection::DuplicateLimit => "duplicate_limit",
            Rejection::Bye => "bye",
            Rejection::InterGroup => "inter_group",
            Rejection::IntraGroup => "intra_group",
            Rejection::OwnVenue => "own_venue",
            Rejection::SoloAway => "solo_away",
            Rejection::SisterAway => "sister_away",
            Rejection::MaxAway => "max_away",
            Rejection::RepeatVisitor => "repeat_visitor",
            Rejection::AlreadyPlayed => "already_played",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options the away filter depends on.
#[derive(Debug, Clone, Copy)]
pub struct AwayFilter<'a> {
    pub history: Option<&'a History>,
    /// Highest duplicate count a partial schedule may reach.
    pub duplicate_limit: Option<usize>,
    pub group_rule: GroupRule,
    pub allow_repeat_visitors: bool,
}

impl AwayFilter<'_> {
    /// Whether `home` hosting `away` repeats history.
    #[inline]
    pub fn is_duplicate(&self, home: TeamId, away: TeamId) -> bool {
        self.history.is_some_and(|h| h.is_duplicate(home, away))
    }

    /// Whether committing `home` vs `away` stays within the limit.
    #[inline]
    pub fn within_limit(&self, state: &SearchState, home: TeamId, away: TeamId) -> bool {
        let same = usize::from(self.is_duplicate(home, away));
        self.duplicate_limit
            .map_or(true, |limit| state.duplicates + same <= limit)
    }
}

/// Checks whether `team` may host `(week, venue)`.
pub fn check_home(
    state: &SearchState,
    week: usize,
    venue: VenueId,
    team: TeamId,
) -> Result<(), Rejection> {
    let w = &state.weeks[week];
    let cell = &w.assignments[venue];
    let t = &state.teams[team];

    if state.venues[venue].solo && state.solo_max > 0 {
        if !t.empty && w.solo.full == state.solo_max {
            return Err(Rejection::SoloFull);
        }
        if t.empty && w.solo.empty == state.solo_max {
            return Err(Rejection::SoloEmpty);
        }
    }
    if t.home_count >= t.max_home {
        return Err(Rejection::MaxHome);
    }
    if t.empty && cell.away_constrained() {
        return Err(Rejection::AwayOccupied);
    }
    if w.is_playing(team) {
        return Err(Rejection::Playing);
    }
    if let Some(pattern) = &cell.home_pattern {
        if !pattern.matches(&t.canonical_name) {
            return Err(Rejection::NamePattern);
        }
    }
    Ok(())
}

/// Legal hosts of `(week, venue)`, prime first.
pub fn home_candidates(state: &SearchState, week: usize, venue: VenueId) -> Vec<TeamId> {
    state.venues[venue]
        .teams
        .iter()
        .copied()
        .filter(|&team| check_home(state, week, venue, team).is_ok())
        .collect()
}

/// Every rejected host of `(week, venue)` with its reason.
pub fn explain_home(state: &SearchState, week: usize, venue: VenueId) -> Vec<(TeamId, Rejection)> {
    state.venues[venue]
        .teams
        .iter()
        .filter_map(|&team| check_home(state, week, venue, team).err().map(|r| (team, r)))
        .collect()
}

/// Checks whether `team` may visit `home` at `(week, venue)`.
pub fn check_away(
    state: &SearchState,
    filter: &AwayFilter<'_>,
    week: usize,
    venue: VenueId,
    home: TeamId,
    team: TeamId,
) -> Result<(), Rejection> {
    let w = &state.weeks[week];
    let cell = &w.assignments[venue];
    let t = &state.teams[team];

    if !filter.within_limit(state, home, team) {
        return Err(Rejection::DuplicateLimit);
    }
    if t.empty {
        return Err(Rejection::Bye);
    }
    if let Some(pattern) = &cell.away_pattern {
        if !pattern.matches(&t.canonical_name) {
            return Err(Rejection::NamePattern);
        }
    }
    let same_group = state.teams[home].group == t.group;
    match filter.group_rule {
        GroupRule::InterOnly if same_group => return Err(Rejection::InterGroup),
        GroupRule::IntraOnly if !same_group => return Err(Rejection::IntraGroup),
        _ => {}
    }
    if t.venue == venue {
        return Err(Rejection::OwnVenue);
    }
    if w.is_playing(team) {
        return Err(Rejection::Playing);
    }
    if t.solo && w.solo.away == state.solo_max {
        return Err(Rejection::SoloAway);
    }
    if w.assignments[t.venue].sister_away {
        return Err(Rejection::SisterAway);
    }
    if t.away_count >= t.max_away {
        return Err(Rejection::MaxAway);
    }
    if state.venues[venue].has_hosted(team) && !filter.allow_repeat_visitors {
        return Err(Rejection::RepeatVisitor);
    }
    if state.has_played(team, home) {
        return Err(Rejection::AlreadyPlayed);
    }
    Ok(())
}

/// Legal visitors of `home` at `(week, venue)`, in team-id order.
pub fn away_candidates(
    state: &SearchState,
    filter: &AwayFilter<'_>,
    week: usize,
    venue: VenueId,
    home: TeamId,
) -> Vec<TeamId> {
    (0..state.teams.len())
        .filter(|&team| check_away(state, filter, week, venue, home, team).is_ok())
        .collect()
}

/// Every rejected visitor with its reason.
pub fn explain_away(
    state: &SearchState,
    filter: &AwayFilter<'_>,
    week: usize,
    venue: VenueId,
    home: TeamId,
) -> Vec<(TeamId, Rejection)> {
    (0..state.teams.len())
        .filter_map(|team| {
            check_away(state, filter, week, venue, home, team)
                .err()
                .map(|r| (team, r))
        })
        .collect()
}
