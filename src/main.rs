use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use u_robin::error::ConfigError;
use u_robin::history::History;
use u_robin::input::{
    parse_groups, parse_history, parse_pairs, parse_roster_names, parse_seed_pattern, SeedPattern,
};
use u_robin::league::{League, LeagueBuilder};
use u_robin::models::Schedule;
use u_robin::output::{format_json, format_tsv, schedule_rows, OutputOptions};
use u_robin::solver::{
    GroupRule, ScheduleKpi, SisterWeek, Solution, Solver, SolverConfig, SolverMode,
};
use u_robin::validation::validate_setup;

#[derive(Parser, Debug)]
#[command(name = "u-robin", version)]
#[command(about = "Round-robin schedules for leagues sharing venues", long_about = None)]
struct Cli {
    /// Number of venues (two teams each)
    #[arg(long, default_value_t = 5)]
    venues: usize,

    /// Season length; only values below 2 * (venues - 1) are honoured
    #[arg(long)]
    weeks: Option<usize>,

    /// Write the schedule to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to put the week in which sibling teams meet
    #[arg(long, value_enum, default_value_t = SisterArg::Last)]
    sister: SisterArg,

    /// Shuffle candidates
    #[arg(long)]
    random: bool,

    /// Seed for --random (drawn at startup when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore the default seed pattern
    #[arg(long)]
    brute: bool,

    /// Venue and team names, one line per venue
    #[arg(long)]
    names: Option<PathBuf>,

    /// Allow a venue to host the same visitor more than once
    #[arg(long)]
    relax: bool,

    /// Seed pattern file
    #[arg(long, conflicts_with = "brute")]
    pattern: Option<PathBuf>,

    /// Directory holding the default init<venues>.csv patterns
    #[arg(long, default_value = "config")]
    pattern_dir: PathBuf,

    /// Group membership file (team group)
    #[arg(long)]
    groups: Option<PathBuf>,

    /// Only pair teams of the same group (implies --balanced)
    #[arg(long, conflicts_with = "inter")]
    intra: bool,

    /// Only pair teams of different groups
    #[arg(long)]
    inter: bool,

    /// Same home ceiling for both teams of a venue
    #[arg(long)]
    balanced: bool,

    /// Prior meetings file (season home away)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Maximum number of repeated home/away meetings
    #[arg(long)]
    duplicates: Option<usize>,

    /// Keep searching for schedules with fewer repeated meetings
    #[arg(long)]
    best: bool,

    /// Sister-week partners for solo venues (team team)
    #[arg(long)]
    pairs: Option<PathBuf>,

    /// Add the playoffs column
    #[arg(long)]
    mnp: bool,

    /// Add group and history columns (needs --mnp)
    #[arg(long)]
    augment: bool,

    /// Print JSON instead of tab-separated rows
    #[arg(long)]
    json: bool,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,

    /// Log every dead end with the reasons candidates were rejected
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SisterArg {
    First,
    Last,
    Both,
    None,
}

impl From<SisterArg> for SisterWeek {
    fn from(arg: SisterArg) -> Self {
        match arg {
            SisterArg::First => SisterWeek::First,
            SisterArg::Last => SisterWeek::Last,
            SisterArg::Both => SisterWeek::Both,
            SisterArg::None => SisterWeek::None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<ConfigError>()
                .map_or(1, ConfigError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    check_companions(cli)?;

    let league = build_league(cli)?;
    let history = match &cli.history {
        Some(path) => Some(History::from_entries(&league, &parse_history(&read(path)?)?)),
        None => None,
    };
    let config = solver_config(cli);
    validate_setup(&league, &config).map_err(ConfigError::Invalid)?;

    let mut solver = Solver::new(&league, config);
    if let Some(history) = &history {
        solver = solver.with_history(history);
    }
    if let Some(pattern) = seed_pattern(cli)? {
        solver = solver.with_seed_pattern(&pattern)?;
    }

    let options = OutputOptions {
        header: cli.output.is_some(),
        playoffs: cli.mnp,
        augment: cli.augment,
    };
    let mut last: Option<Schedule> = None;
    let mut failure: Option<anyhow::Error> = None;
    let report = solver.solve_with(&mut |solution: &Solution| {
        if failure.is_some() {
            return;
        }
        let target = cli.output.as_deref().map(|path| {
            if cli.best {
                best_path(path, solution.duplicates)
            } else {
                path.to_path_buf()
            }
        });
        let rows = schedule_rows(&solution.schedule, &league, history.as_ref(), cli.augment);
        if let Err(err) = emit(&rows, target.as_deref(), options, cli.json) {
            failure = Some(err);
        }
        last = Some(solution.schedule.clone());
    });
    if let Some(err) = failure {
        return Err(err);
    }

    let Some(schedule) = last else {
        warn!(
            deadends = report.deadends,
            seed = report.seed,
            "no schedule satisfies the constraints"
        );
        return Ok(());
    };
    log_kpi(&ScheduleKpi::calculate(&schedule, &league, history.as_ref()));
    info!(
        solutions = report.solutions,
        best_duplicates = ?report.best_duplicates,
        deadends = report.deadends,
        seed = report.seed,
        "done"
    );
    Ok(())
}

fn check_companions(cli: &Cli) -> Result<(), ConfigError> {
    let missing = |option, companion| ConfigError::MissingCompanion { option, companion };
    if cli.groups.is_some() && cli.names.is_none() {
        return Err(missing("groups", "names"));
    }
    if cli.pairs.is_some() && cli.names.is_none() {
        return Err(missing("pairs", "names"));
    }
    if cli.augment && !cli.mnp {
        return Err(missing("augment", "mnp"));
    }
    if cli.best && cli.history.is_none() {
        return Err(missing("best", "history"));
    }
    Ok(())
}

fn build_league(cli: &Cli) -> Result<League> {
    let mut builder = LeagueBuilder::new(cli.venues).with_balanced_home(cli.balanced || cli.intra);
    if let Some(weeks) = cli.weeks {
        builder = builder.with_weeks(weeks);
    }
    if let Some(path) = &cli.names {
        builder = builder.with_names(parse_roster_names(&read(path)?)?);
    }
    let mut league = builder.build()?;

    if let Some(path) = &cli.groups {
        league.assign_groups(&parse_groups(&read(path)?)?)?;
    }
    if let Some(path) = &cli.pairs {
        league.assign_pairings(&parse_pairs(&read(path)?)?)?;
    }
    Ok(league)
}

fn solver_config(cli: &Cli) -> SolverConfig {
    let group_rule = if cli.intra {
        GroupRule::IntraOnly
    } else if cli.inter {
        GroupRule::InterOnly
    } else {
        GroupRule::Any
    };
    let mut config = SolverConfig::default()
        .with_randomize(cli.random)
        .with_repeat_visitors(cli.relax)
        .with_group_rule(group_rule)
        .with_sister_week(cli.sister.into())
        .with_mode(if cli.best {
            SolverMode::BestScore
        } else {
            SolverMode::FirstSolution
        });
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(threshold) = cli.duplicates {
        config = config.with_duplicate_threshold(threshold);
    }
    config
}

fn seed_pattern(cli: &Cli) -> Result<Option<SeedPattern>> {
    if cli.brute {
        return Ok(None);
    }
    let path = match &cli.pattern {
        Some(path) => path.clone(),
        None => {
            let path = cli.pattern_dir.join(format!("init{}.csv", cli.venues));
            if !path.exists() {
                debug!(path = %path.display(), "no default seed pattern");
                return Ok(None);
            }
            path
        }
    };
    info!(path = %path.display(), "loading seed pattern");
    Ok(Some(parse_seed_pattern(&read(&path)?)))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn emit(
    rows: &[u_robin::output::ScheduleRow],
    path: Option<&Path>,
    options: OutputOptions,
    json: bool,
) -> Result<()> {
    let text = if json {
        format_json(rows)? + "\n"
    } else {
        format_tsv(rows, options)
    };
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = rows.len(), "schedule written");
        }
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

/// `out.tsv` with 3 duplicates becomes `out-dup3.tsv`.
fn best_path(path: &Path, duplicates: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}-dup{duplicates}.{}", ext.to_string_lossy()),
        None => format!("{stem}-dup{duplicates}"),
    };
    path.with_file_name(name)
}

fn log_kpi(kpi: &ScheduleKpi) {
    info!(
        rounds = kpi.rounds,
        fixtures = kpi.fixtures,
        byes = kpi.byes,
        repeated_pairs = kpi.repeated_pairs,
        unplayed_pairs = kpi.unplayed_pairs,
        max_imbalance = kpi.max_imbalance,
        fresh = kpi.fresh,
        duplicates = kpi.duplicates,
        reversed = kpi.reversed,
        "schedule kpi"
    );
    for team in &kpi.balance {
        debug!(team = %team.team, home = team.home, away = team.away, "balance");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("u-robin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_best_path() {
        assert_eq!(
            best_path(Path::new("out/sched.tsv"), 3),
            PathBuf::from("out/sched-dup3.tsv")
        );
        assert_eq!(best_path(Path::new("sched"), 0), PathBuf::from("sched-dup0"));
    }

    #[test]
    fn test_companions() {
        assert!(check_companions(&cli(&[])).is_ok());

        let err = check_companions(&cli(&["--groups", "g.txt"])).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("--groups"));

        assert!(check_companions(&cli(&["--augment"])).is_err());
        assert!(check_companions(&cli(&["--augment", "--mnp"])).is_ok());
        assert!(check_companions(&cli(&["--best"])).is_err());
        assert!(check_companions(&cli(&["--pairs", "p", "--names", "n"])).is_ok());
    }

    #[test]
    fn test_flag_mapping() {
        let args = ["--intra", "--relax", "--sister", "both", "--seed", "7"];
        let config = solver_config(&cli(&args));
        assert_eq!(config.group_rule, GroupRule::IntraOnly);
        assert!(config.allow_repeat_visitors);
        assert_eq!(config.sister_week, SisterWeek::Both);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mode, SolverMode::FirstSolution);

        let best = solver_config(&cli(&["--best", "--history", "h", "--duplicates", "4"]));
        assert_eq!(best.mode, SolverMode::BestScore);
        assert_eq!(best.duplicate_threshold, Some(4));
    }

    #[test]
    fn test_conflicting_flags() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("u-robin").chain(args.iter().copied()))
        };
        assert!(parse(&["--intra", "--inter"]).is_err());
        assert!(parse(&["--brute", "--pattern", "p.csv"]).is_err());
        assert!(parse(&["--sister", "sometimes"]).is_err());
    }
}
