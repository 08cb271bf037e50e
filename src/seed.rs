//! Seed pattern resolution.
//!
//! A seed pattern pre-fills parts of the grid before the search starts.
//! Row `i` describes week `i`, token `j` describes venue `j`. A side that
//! names a team exactly (`a1`, `c2`, ...) locks that team; any other text
//! is compiled once into a [`NamePattern`] the filters test candidates
//! against.

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::input::SeedPattern;
use crate::league::League;
use crate::models::{NamePattern, TeamId};
use crate::solver::SearchState;

/// A resolved side of a seed cell.
#[derive(Debug)]
enum SeedSide {
    Lock(TeamId),
    Pattern(NamePattern),
}

fn resolve(league: &League, text: &str) -> Result<SeedSide, ConfigError> {
    if let Some(team) = league.canonical_team(text) {
        return Ok(SeedSide::Lock(team));
    }
    NamePattern::new(text)
        .map(SeedSide::Pattern)
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: text.to_string(),
            source,
        })
}

/// Applies `pattern` to a fresh search state.
///
/// Rows beyond the season are ignored with a warning.
///
/// # Errors
/// - [`ConfigError::PatternTooWide`] when a row has more tokens than venues
/// - [`ConfigError::InvalidPattern`] when a token is not a valid expression
/// - [`ConfigError::SeedConflict`] when locks contradict each other or the
///   team limits
pub fn apply_seed(
    state: &mut SearchState,
    league: &League,
    pattern: &SeedPattern,
) -> Result<(), ConfigError> {
    let weeks = state.week_count();
    let venues = state.venue_count();
    if pattern.rows.len() > weeks {
        warn!(
            rows = pattern.rows.len(),
            weeks, "seed pattern has more rows than weeks; extra rows ignored"
        );
    }

    for (week, row) in pattern.rows.iter().take(weeks).enumerate() {
        if row.len() > venues {
            return Err(ConfigError::PatternTooWide {
                row: week + 1,
                found: row.len(),
                venues,
            });
        }
        for (venue, cell) in row.iter().enumerate() {
            if let Some(text) = &cell.home {
                match resolve(league, text)? {
                    SeedSide::Lock(team) => state.lock_home(week, venue, team)?,
                    SeedSide::Pattern(p) => state.set_home_pattern(week, venue, p),
                }
            }
            if let Some(text) = &cell.away {
                match resolve(league, text)? {
                    SeedSide::Lock(team) => state.lock_away(week, venue, team)?,
                    SeedSide::Pattern(p) => state.set_away_pattern(week, venue, p),
                }
            }
        }
    }
    debug!(rows = pattern.rows.len().min(weeks), "seed pattern applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_roster_names, parse_seed_pattern};
    use crate::league::LeagueBuilder;

    fn seeded(venues: usize, text: &str) -> Result<SearchState, ConfigError> {
        let league = LeagueBuilder::new(venues).build().unwrap();
        let mut state = SearchState::new(&league);
        apply_seed(&mut state, &league, &parse_seed_pattern(text))?;
        Ok(state)
    }

    #[test]
    fn test_locks_and_patterns() {
        let s = seeded(3, "a1,b2 ^b c2\n\n,c").unwrap();

        let cell = &s.weeks[0].assignments[0];
        assert!(cell.is_fully_locked());
        assert_eq!(cell.home, Some(0));
        assert_eq!(cell.away, Some(3));
        assert!(s.has_played(0, 3));

        let cell = &s.weeks[0].assignments[1];
        assert!(!cell.home_locked);
        assert_eq!(cell.home_pattern.as_ref().map(|p| p.as_str()), Some("^b"));

        assert!(s.weeks[0].assignments[2].home_locked);
        assert_eq!(s.teams[5].home_count, 1);

        assert_eq!(s.weeks[1], crate::models::Week::new(3, 6));
        let cell = &s.weeks[2].assignments[0];
        assert!(cell.home.is_none());
        assert!(cell.away_constrained());
    }

    #[test]
    fn test_pattern_too_wide() {
        let err = seeded(2, "a1 b1 c1").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PatternTooWide {
                row: 1,
                found: 3,
                venues: 2
            }
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = seeded(3, "a1 (b").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_extra_rows_ignored() {
        // 2 venues -> 2 weeks
        let s = seeded(2, "a1\na2\na1\n").unwrap();
        assert_eq!(s.teams[0].home_count, 1);
        assert_eq!(s.teams[1].home_count, 1);
    }

    #[test]
    fn test_conflicting_locks() {
        let err = seeded(3, "b1").unwrap_err();
        assert!(matches!(err, ConfigError::SeedConflict { week: 1, .. }));

        let err = seeded(3, "a1,b1 b1").unwrap_err();
        assert!(matches!(err, ConfigError::SeedConflict { .. }));
    }

    #[test]
    fn test_visitor_locked_at_bye() {
        let names = parse_roster_names("A Ants\nB Bats Bees\nC Cats Cows\n").unwrap();
        let league = LeagueBuilder::new(3).with_names(names).build().unwrap();
        let mut state = SearchState::new(&league);
        let err = apply_seed(&mut state, &league, &parse_seed_pattern("a2,b1")).unwrap_err();
        assert!(matches!(err, ConfigError::SeedConflict { week: 1, .. }));
    }
}
