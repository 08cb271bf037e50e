//! Read-out of a completed grid, plus the sister week.
//!
//! The sister week pairs each venue's two teams against each other. The
//! team with fewer home games hosts (the sister on a tie), unless history
//! says that orientation repeats the last meeting. A solo team has no
//! sibling, so it meets its configured cross-venue partner instead, and
//! the venue that does not host the game sits empty.

use tracing::warn;

use crate::history::History;
use crate::league::League;
use crate::models::{Fixture, Round, RoundKind, Schedule, Slot, TeamId, Week};

use super::config::SisterWeek;
use super::state::SearchState;

/// Copies the grid into a [`Schedule`] and places the sister week(s).
pub fn build_schedule(
    state: &SearchState,
    league: &League,
    history: Option<&History>,
    placement: SisterWeek,
) -> Schedule {
    let mut rounds: Vec<Round> = state.weeks.iter().map(regular_round).collect();

    match placement {
        SisterWeek::None => {}
        SisterWeek::Last => rounds.push(sister_round(state, league, history, false)),
        SisterWeek::First => rounds.insert(0, sister_round(state, league, history, false)),
        SisterWeek::Both => {
            rounds.insert(0, sister_round(state, league, history, false));
            rounds.push(sister_round(state, league, history, true));
        }
    }
    Schedule { rounds }
}

fn regular_round(week: &Week) -> Round {
    let slots = week
        .assignments
        .iter()
        .map(|a| match (a.empty, a.home, a.away) {
            (false, Some(home), Some(away)) => Slot::Match(Fixture::new(home, away)),
            _ => Slot::Bye,
        })
        .collect();
    Round {
        kind: RoundKind::Regular,
        slots,
    }
}

/// Builds one sister week; `reversed` swaps every orientation.
fn sister_round(
    state: &SearchState,
    league: &League,
    history: Option<&History>,
    reversed: bool,
) -> Round {
    let is_duplicate =
        |home: TeamId, away: TeamId| history.is_some_and(|h| h.is_duplicate(home, away));
    let mut round = Round::new(RoundKind::Sister, state.venue_count());
    let mut settled = vec![false; state.teams.len()];

    for venue in &state.venues {
        let prime = &state.teams[venue.prime()];
        let sister = &state.teams[venue.sister()];

        if prime.solo {
            if settled[prime.id] {
                continue;
            }
            settled[prime.id] = true;
            let Some(partner) = league.pairing(prime.id).map(|p| &state.teams[p]) else {
                warn!(team = %prime.name, "solo team has no sister-week pairing");
                continue;
            };
            settled[partner.id] = true;

            let flip = (is_duplicate(prime.id, partner.id) || prime.home_count > partner.home_count)
                != reversed;
            let (host, guest) = if flip { (partner, prime) } else { (prime, partner) };
            round.set(host.venue, Fixture::new(host.id, guest.id));
            continue;
        }

        let (mut home, mut away) = if prime.home_count < sister.home_count {
            (prime.id, sister.id)
        } else {
            (sister.id, prime.id)
        };
        if is_duplicate(home, away) {
            std::mem::swap(&mut home, &mut away);
        }
        let fixture = Fixture::new(home, away);
        round.set(venue.id, if reversed { fixture.reversed() } else { fixture });
    }
    round
}
