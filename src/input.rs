//! Text input parsers.
//!
//! Turn the whitespace-separated line formats of the roster, group,
//! pairing, history and seed-pattern files into plain records. Names are
//! kept as strings here; resolution against the roster happens in
//! [`crate::league`], [`crate::history`] and [`crate::seed`].
//!
//! Line numbers in errors are 1-based.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Display names for every venue, one entry per line of the names file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterNames {
    /// Venues in venue-index order.
    pub venues: Vec<VenueNames>,
}

/// One line of the names file: `venueName teamName [teamName]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueNames {
    /// Venue display name.
    pub venue: String,
    /// Prime team display name.
    pub prime: String,
    /// Sister team display name; `None` marks a solo venue.
    pub sister: Option<String>,
}

impl RosterNames {
    /// Number of real teams named.
    pub fn team_count(&self) -> usize {
        self.venues
            .iter()
            .map(|v| 1 + usize::from(v.sister.is_some()))
            .sum()
    }
}

/// One line of the groups file: `teamName groupLabel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub team: String,
    pub group: String,
}

/// One line of the pairs file: `teamName teamName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    pub first: String,
    pub second: String,
}

/// One prior meeting from the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub season: u32,
    pub home: String,
    pub away: String,
}

/// Seed pattern: per-week rows of per-venue cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedPattern {
    /// Rows in week order; a blank line is a week without constraints.
    pub rows: Vec<Vec<SeedCell>>,
}

/// One token of a seed row: `home` or `home,away`.
///
/// Each side is either a canonical team name (a lock) or a regular
/// expression; an empty side is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedCell {
    pub home: Option<String>,
    pub away: Option<String>,
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Non-blank lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
}

fn malformed(context: &'static str, line: usize, text: &str) -> ConfigError {
    ConfigError::MalformedLine {
        context,
        line,
        text: text.to_string(),
    }
}

/// Parses the names file.
///
/// The line count is checked against the venue count by
/// [`crate::league::LeagueBuilder::build`].
pub fn parse_roster_names(text: &str) -> Result<RosterNames, ConfigError> {
    let mut venues = Vec::new();
    for (line_no, line) in content_lines(text) {
        match tokens(line).as_slice() {
            [venue, prime] => venues.push(VenueNames {
                venue: venue.to_string(),
                prime: prime.to_string(),
                sister: None,
            }),
            [venue, prime, sister] => venues.push(VenueNames {
                venue: venue.to_string(),
                prime: prime.to_string(),
                sister: Some(sister.to_string()),
            }),
            _ => return Err(malformed("names", line_no, line)),
        }
    }
    Ok(RosterNames { venues })
}

/// Parses the groups file.
pub fn parse_groups(text: &str) -> Result<Vec<GroupEntry>, ConfigError> {
    content_lines(text)
        .map(|(line_no, line)| match tokens(line).as_slice() {
            [team, group] => Ok(GroupEntry {
                team: team.to_string(),
                group: group.to_string(),
            }),
            _ => Err(malformed("groups", line_no, line)),
        })
        .collect()
}

/// Parses the pairs file.
pub fn parse_pairs(text: &str) -> Result<Vec<PairEntry>, ConfigError> {
    content_lines(text)
        .map(|(line_no, line)| match tokens(line).as_slice() {
            [first, second] => Ok(PairEntry {
                first: first.to_string(),
                second: second.to_string(),
            }),
            _ => Err(malformed("pairs", line_no, line)),
        })
        .collect()
}

/// Parses the history file.
///
/// Accepts `season home away`, and also `season label home away` where
/// the second column (typically a week number) is ignored.
pub fn parse_history(text: &str) -> Result<Vec<HistoryEntry>, ConfigError> {
    content_lines(text)
        .map(|(line_no, line)| {
            let (season, home, away) = match tokens(line).as_slice() {
                [season, home, away] => (*season, *home, *away),
                [season, _, home, away, ..] => (*season, *home, *away),
                _ => return Err(malformed("history", line_no, line)),
            };
            let season = season
                .parse::<u32>()
                .map_err(|_| malformed("history", line_no, line))?;
            Ok(HistoryEntry {
                season,
                home: home.to_string(),
                away: away.to_string(),
            })
        })
        .collect()
}

/// Parses a seed pattern.
///
/// Trailing blank lines are dropped; interior blank lines stay as empty
/// rows so later rows keep their week index.
pub fn parse_seed_pattern(text: &str) -> SeedPattern {
    let mut rows: Vec<Vec<SeedCell>> = text
        .lines()
        .map(|line| tokens(line).into_iter().map(parse_seed_cell).collect())
        .collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    SeedPattern { rows }
}

fn parse_seed_cell(token: &str) -> SeedCell {
    let side = |s: &str| (!s.is_empty()).then(|| s.to_string());
    match token.split_once(',') {
        Some((home, away)) => SeedCell {
            home: side(home),
            away: side(away),
        },
        None => SeedCell {
            home: side(token),
            away: None,
        },
    }
}
