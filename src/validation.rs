//! Setup validation.
//!
//! Checks a league and solver configuration before searching. Detects:
//! - Empty leagues and seasons
//! - Solo teams without a sister-week partner
//! - Pairings that are not between solo teams of different venues
//!
//! Teams without a group are not an error: under a group rule they all
//! share one unnamed group.

use std::fmt;

use crate::league::League;
use crate::solver::SolverConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The league has no venues.
    NoVenues,
    /// The season has no weeks.
    NoWeeks,
    /// A solo team has no sister-week partner.
    MissingPairing,
    /// A pairing links teams that cannot meet in the sister week.
    InvalidPairing,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a league against the solver options.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_setup(league: &League, config: &SolverConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if league.venue_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoVenues,
            "league has no venues",
        ));
    }
    if league.week_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWeeks,
            "season has no weeks",
        ));
    }

    for team in &league.teams {
        match league.pairing(team.id) {
            None if team.solo && config.sister_week.is_enabled() => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPairing,
                    format!("solo team '{}' has no sister-week pairing", team.name),
                ));
            }
            Some(partner) if team.id < partner => {
                let other = &league.teams[partner];
                if !team.solo || !other.solo || team.venue == other.venue {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidPairing,
                        format!(
                            "'{}' and '{}' must be solo teams of different venues",
                            team.name, other.name
                        ),
                    ));
                }
            }
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
