//! Built-in ordering rules.
//!
//! - **SHUFFLE**: uniform random permutation
//! - **FRESH**: opponents the venue has not hosted yet come first
//! - **RECENT_AWAY**: history-aware ordering that prefers swapping the
//!   orientation of the most recent meetings
//!
//! Home candidates are never more than two, so they are ordered by the
//! plain [`alternate_home`] function rather than a pipeline.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{CandidateRule, OrderingContext};
use crate::models::TeamId;

/// Random permutation of the candidates.
#[derive(Debug, Clone, Copy)]
pub struct Shuffle;

impl CandidateRule for Shuffle {
    fn name(&self) -> &'static str {
        "SHUFFLE"
    }

    fn apply(&self, candidates: &mut Vec<TeamId>, context: &mut OrderingContext<'_>) {
        candidates.shuffle(&mut *context.rng);
    }

    fn description(&self) -> &'static str {
        "Uniform random order"
    }
}

/// Opponents not yet hosted by the venue first.
///
/// Each fresh candidate is moved to the front as it is met, so the fresh
/// block ends up in reverse of its incoming order. Already-hosted
/// candidates keep their relative order at the back.
#[derive(Debug, Clone, Copy)]
pub struct FreshFirst;

impl CandidateRule for FreshFirst {
    fn name(&self) -> &'static str {
        "FRESH"
    }

    fn apply(&self, candidates: &mut Vec<TeamId>, context: &mut OrderingContext<'_>) {
        let mut ordered = VecDeque::with_capacity(candidates.len());
        for &team in candidates.iter() {
            if context.has_hosted(team) {
                ordered.push_back(team);
            } else {
                ordered.push_front(team);
            }
        }
        candidates.clear();
        candidates.extend(ordered);
    }

    fn description(&self) -> &'static str {
        "Unvisited opponents first"
    }
}

/// History-aware ordering.
///
/// 1. Teams whose last meeting with the host had the host away, oldest
///    season first.
/// 2. Teams that never met the host.
/// 3. Everybody else.
///
/// Ties in the first and last class keep their incoming order. Never-met
/// teams come out in reverse of their incoming order. Without history the
/// rule does nothing.
#[derive(Debug, Clone, Copy)]
pub struct RecentAwayFirst;

impl CandidateRule for RecentAwayFirst {
    fn name(&self) -> &'static str {
        "RECENT_AWAY"
    }

    fn apply(&self, candidates: &mut Vec<TeamId>, context: &mut OrderingContext<'_>) {
        let Some(history) = context.history else {
            return;
        };
        let home = context.home;
        let rank = |team: TeamId| {
            let meeting = history.meeting(home, team);
            if meeting.away == home {
                (0, meeting.season)
            } else if meeting.season == 0 {
                (1, 0)
            } else {
                (2, 0)
            }
        };
        candidates.sort_by_key(|&team| rank(team));

        let unmet = |team: &TeamId| rank(*team).0 == 1;
        if let (Some(start), Some(end)) = (
            candidates.iter().position(unmet),
            candidates.iter().rposition(unmet),
        ) {
            candidates[start..=end].reverse();
        }
    }

    fn description(&self) -> &'static str {
        "Reverse recent meetings, then unmet opponents"
    }
}

/// Orders the two possible hosts of a venue.
///
/// With `rng`, the pair is first swapped at random. Then, if the first
/// candidate hosted most recently at this venue, the pair is swapped so
/// the venue alternates hosts. Lists of any other length are left alone.
pub fn alternate_home(
    candidates: &mut [TeamId],
    recent_home: Option<TeamId>,
    rng: Option<&mut SmallRng>,
) {
    if candidates.len() != 2 {
        return;
    }
    if let Some(rng) = rng {
        if rng.random_bool(0.5) {
            candidates.swap(0, 1);
        }
    }
    if recent_home == Some(candidates[0]) {
        candidates.swap(0, 1);
    }
}
