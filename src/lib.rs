//! Round-robin scheduling for leagues whose teams share venues.
//!
//! Every venue is home to two sibling teams and hosts at most one game a
//! week. A depth-first search assigns a host and a visitor to each
//! (week, venue) cell, pruning with home/away limits, per-week occupancy,
//! group rules and prior-season history, and undoing every choice on the
//! way back up.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Venue`, `Week`, `Assignment`,
//!   `PairMatrix`, `Schedule`
//! - **`league`**: Roster and venue setup, groups, cross-venue pairings
//! - **`history`**: Prior meetings and fresh/duplicate/reversed classification
//! - **`input`**: Parsers for the names, groups, pairs, history and seed files
//! - **`seed`**: Seed patterns resolved into locks and name patterns
//! - **`ordering`**: Candidate ordering rules and their pipeline
//! - **`solver`**: Search state, filters, engine, sister week, KPIs
//! - **`validation`**: Setup checks run before searching
//! - **`output`**: TSV and JSON schedule rows
//! - **`error`**: Configuration errors and their exit codes
//!
//! # Example
//!
//! ```
//! use u_robin::league::LeagueBuilder;
//! use u_robin::solver::{ScheduleKpi, Solver, SolverConfig};
//!
//! let league = LeagueBuilder::new(3).build().unwrap();
//! let config = SolverConfig::default().with_repeat_visitors(true);
//! let schedule = Solver::new(&league, config).solve().unwrap();
//!
//! let kpi = ScheduleKpi::calculate(&schedule, &league, None);
//! assert_eq!(kpi.rounds, league.week_count + 1);
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod error;
pub mod history;
pub mod input;
pub mod league;
pub mod models;
pub mod ordering;
pub mod output;
pub mod seed;
pub mod solver;
pub mod validation;
