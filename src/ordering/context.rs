//! Search state visible to ordering rules.

use rand::rngs::SmallRng;

use crate::history::History;
use crate::models::TeamId;

/// What a rule may look at while ordering the visitors of one slot.
#[derive(Debug)]
pub struct OrderingContext<'a> {
    /// Team hosting the slot.
    pub home: TeamId,
    /// Opponents the slot's venue has already hosted, indexed by team id.
    pub hosted: &'a [bool],
    /// Prior-season meetings, when loaded.
    pub history: Option<&'a History>,
    /// The search's random source.
    pub rng: &'a mut SmallRng,
}

impl<'a> OrderingContext<'a> {
    /// Creates a context without history.
    pub fn new(home: TeamId, hosted: &'a [bool], rng: &'a mut SmallRng) -> Self {
        Self {
            home,
            hosted,
            history: None,
            rng,
        }
    }

    /// Attaches matchup history.
    pub fn with_history(mut self, history: Option<&'a History>) -> Self {
        self.history = history;
        self
    }

    /// Whether the venue already hosted `team`.
    #[inline]
    pub fn has_hosted(&self, team: TeamId) -> bool {
        self.hosted.get(team).copied().unwrap_or(false)
    }
}
