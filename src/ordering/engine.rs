//! Composable ordering pipeline.

use std::sync::Arc;

use super::{CandidateRule, OrderingContext};
use crate::models::TeamId;

/// Applies a sequence of [`CandidateRule`]s, first added first.
///
/// # Example
/// ```
/// use u_robin::ordering::{rules, OrderingPipeline};
///
/// let pipeline = OrderingPipeline::new()
///     .with_rule(rules::Shuffle)
///     .with_rule(rules::FreshFirst);
/// assert_eq!(pipeline.rule_names(), vec!["SHUFFLE", "FRESH"]);
/// ```
#[derive(Clone, Default)]
pub struct OrderingPipeline {
    rules: Vec<Arc<dyn CandidateRule>>,
}

impl OrderingPipeline {
    /// Creates an empty pipeline, which keeps candidates in filter order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn with_rule<R: CandidateRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the rules in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule over `candidates`.
    pub fn apply(&self, candidates: &mut Vec<TeamId>, context: &mut OrderingContext<'_>) {
        if candidates.len() < 2 {
            return;
        }
        for rule in &self.rules {
            rule.apply(candidates, context);
        }
    }
}

impl std::fmt::Debug for OrderingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingPipeline")
            .field("rules", &self.rule_names())
            .finish()
    }
}
