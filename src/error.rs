//! Configuration errors.
//!
//! Everything here is fatal and raised before the search starts. A
//! rejected candidate during search is pruning, not an error, and an
//! exhausted search is reported through [`crate::solver::SearchReport`].

use thiserror::Error;

use crate::validation::ValidationError;

/// A malformed or inconsistent input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pattern row {row} lists {found} slots but there are only {venues} venues")]
    PatternTooWide {
        row: usize,
        found: usize,
        venues: usize,
    },

    #[error("--{option} must be used together with --{companion}")]
    MissingCompanion {
        option: &'static str,
        companion: &'static str,
    },

    #[error("invalid name pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("the names file must contain one line per venue: expected {expected}, found {found}")]
    RosterLineCount { expected: usize, found: usize },

    #[error("unknown team '{name}' in {context}")]
    UnknownTeam { name: String, context: &'static str },

    #[error("malformed {context} line {line}: '{text}'")]
    MalformedLine {
        context: &'static str,
        line: usize,
        text: String,
    },

    #[error("seed pattern conflict in week {week}: {message}")]
    SeedConflict { week: usize, message: String },

    #[error("invalid setup: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

impl ConfigError {
    /// Process exit status for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::PatternTooWide { .. } => 2,
            ConfigError::MissingCompanion { .. } => 3,
            ConfigError::InvalidPattern { .. } => 4,
            ConfigError::RosterLineCount { .. } => 5,
            ConfigError::UnknownTeam { .. } => 6,
            ConfigError::MalformedLine { .. } => 7,
            ConfigError::SeedConflict { .. } => 8,
            ConfigError::Invalid(_) => 9,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
