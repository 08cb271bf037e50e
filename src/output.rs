//! Schedule output.
//!
//! One row per game: `week venue home away`, weeks numbered from 1.
//! The TSV layout can add a `playoffs` column (always `FALSE`) and, on top
//! of that, the away team's group, whether both teams share a group, and
//! with history the last season the pair met and the matchup quality.

use serde::Serialize;

use crate::history::{History, MatchupQuality};
use crate::league::League;
use crate::models::{GroupId, Schedule};

/// One game of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    /// 1-based week number.
    pub week: usize,
    pub venue: String,
    pub home: String,
    pub away: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RowDetails>,
}

/// Group and history annotations of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDetails {
    pub away_group: Option<GroupId>,
    /// Both teams have the same group (two ungrouped teams count as same).
    pub same_group: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<MatchupQuality>,
}

/// TSV layout switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Write the header line.
    pub header: bool,
    /// Add the `playoffs` column.
    pub playoffs: bool,
    /// Add group and history columns; needs `playoffs`.
    pub augment: bool,
}

/// Flattens a schedule into rows, with details when `augment` is set.
pub fn schedule_rows(
    schedule: &Schedule,
    league: &League,
    history: Option<&History>,
    augment: bool,
) -> Vec<ScheduleRow> {
    schedule
        .fixtures()
        .map(|(week, venue, f)| {
            let details = augment.then(|| {
                let home = &league.teams[f.home];
                let away = &league.teams[f.away];
                RowDetails {
                    away_group: away.group,
                    same_group: away.group == home.group,
                    season: history.map(|h| h.season(f.home, f.away)),
                    quality: history.map(|h| h.quality(f.home, f.away)),
                }
            });
            ScheduleRow {
                week: week + 1,
                venue: league.venue_name(venue).to_string(),
                home: league.team_name(f.home).to_string(),
                away: league.team_name(f.away).to_string(),
                details,
            }
        })
        .collect()
}

/// Tab-separated layout, one line per row.
pub fn format_tsv(rows: &[ScheduleRow], options: OutputOptions) -> String {
    let mut out = String::new();
    if options.header {
        out.push_str("week\tvenue\thome\taway");
        if options.playoffs {
            out.push_str("\tplayoffs");
        }
        out.push('\n');
    }
    for row in rows {
        let mut fields = vec![
            row.week.to_string(),
            row.venue.clone(),
            row.home.clone(),
            row.away.clone(),
        ];
        if options.playoffs {
            fields.push("FALSE".to_string());
            if options.augment {
                if let Some(d) = &row.details {
                    fields.push(d.away_group.map(|g| g.to_string()).unwrap_or_default());
                    fields.push(d.same_group.to_string());
                    if let (Some(season), Some(quality)) = (d.season, d.quality) {
                        fields.push(season.to_string());
                        fields.push(quality.to_string());
                    }
                }
            }
        }
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of rows.
pub fn format_json(rows: &[ScheduleRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
