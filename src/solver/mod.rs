//! Schedule search.
//!
//! - [`SearchState`]: the grid and counters, mutated through commit/undo
//! - [`filter`]: legal hosts and visitors for a slot
//! - [`Solver`]: depth-first search over the grid
//! - [`build_schedule`]: read-out plus the sister week
//! - [`ScheduleKpi`]: quality metrics of a finished schedule

mod config;
mod engine;
pub mod filter;
mod finalize;
mod kpi;
mod state;

pub use config::{GroupRule, SisterWeek, SolverConfig, SolverMode};
pub use engine::{SearchReport, Solution, Solver};
pub use filter::Rejection;
pub use finalize::build_schedule;
pub use kpi::{ScheduleKpi, TeamBalance};
pub use state::{AwayCommit, ByeCommit, HomeCommit, SearchState};
