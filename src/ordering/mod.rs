//! Candidate ordering rules and the pipeline that chains them.
//!
//! The filters decide *which* teams may fill a slot; the rules here decide
//! the order the search tries them in. Rules rearrange the candidate list
//! in place and are applied in the order they were added.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_robin::ordering::{rules, OrderingContext, OrderingPipeline};
//!
//! let pipeline = OrderingPipeline::new().with_rule(rules::FreshFirst);
//!
//! let hosted = vec![false, false, true, false];
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut ctx = OrderingContext::new(0, &hosted, &mut rng);
//! let mut candidates = vec![1, 2, 3];
//! pipeline.apply(&mut candidates, &mut ctx);
//! assert_eq!(candidates, vec![3, 1, 2]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::OrderingContext;
pub use engine::OrderingPipeline;
pub use rules::alternate_home;

use crate::models::TeamId;
use std::fmt::Debug;

/// A rule that reorders away candidates.
pub trait CandidateRule: Send + Sync + Debug {
    /// Rule name (e.g., "SHUFFLE").
    fn name(&self) -> &'static str;

    /// Reorders `candidates` in place.
    fn apply(&self, candidates: &mut Vec<TeamId>, context: &mut OrderingContext<'_>);

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
