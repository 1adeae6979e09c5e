//! Tournament CLI
//!
//! Run matches, meetings, league days and competitions, and track ratings.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pong_core::{
    generate_competitor, rated_competitor, standings, Attributes, Competition, CompetitionShape,
    Competitor, CompetitorKind, PlayStyle, Tier,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tournament::{
    load_sim_config, EventReport, EventRunner, LeagueSetup, RatingLedger, ReportBody,
    RunnerConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_RATING: f64 = 500.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Table tennis simulator")]
struct Cli {
    /// Seed for a replayable run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Simulation settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rating ledger (JSON)
    #[arg(long, global = true, default_value = "pong_ledger.json")]
    ledger: PathBuf,

    /// Also write the event report as JSON
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    /// Debug logging and point-by-point commentary
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a competitor to the ledger
    Add {
        id: String,
        name: String,
        /// Starting rating; derived from --skill when omitted
        #[arg(long)]
        rating: Option<f64>,
        /// Uniform attribute level (0-100) instead of one scaled from the rating
        #[arg(long)]
        skill: Option<f64>,
        #[arg(long, default_value_t = 25)]
        age: u8,
        #[arg(long, value_parser = parse_style, default_value = "all_round")]
        style: PlayStyle,
    },
    /// Add generated competitors around a target rating
    Generate {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 1000.0)]
        rating: f64,
        #[arg(long, default_value = "gen")]
        prefix: String,
    },
    /// Play a single match
    Match { a: String, b: String },
    /// Play a team meeting
    Meeting {
        #[arg(long, value_delimiter = ',', required = true)]
        home: Vec<String>,
        #[arg(long, value_delimiter = ',', required = true)]
        away: Vec<String>,
    },
    /// Simulate the other fixtures of a league day
    LeagueDay {
        /// League setup (TOML)
        setup: PathBuf,
        #[arg(long)]
        day: u32,
        /// Club whose fixture is skipped as well
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Simulate a competition
    Competition {
        name: String,
        #[arg(long, value_enum)]
        shape: ShapeArg,
        #[arg(long, value_enum, default_value_t = TierArg::Standard)]
        tier: TierArg,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        max_rating: Option<f64>,
        #[arg(long)]
        min_age: Option<u8>,
        #[arg(long)]
        max_age: Option<u8>,
        /// Registrants in entry order (defaults to the whole ledger)
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,
    },
    /// Run a club internal event
    Internal {
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,
    },
    /// Show the ledger leaderboard
    Leaderboard,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    RankedBracket,
    PairedPool,
    Fallback,
}

impl From<ShapeArg> for CompetitionShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::RankedBracket => CompetitionShape::RankedBracket,
            ShapeArg::PairedPool => CompetitionShape::PairedPool,
            ShapeArg::Fallback => CompetitionShape::Fallback,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierArg {
    Standard,
    Federal,
    Finals,
}

impl From<TierArg> for Tier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Standard => Tier::Standard,
            TierArg::Federal => Tier::Federal,
            TierArg::Finals => Tier::Finals,
        }
    }
}

fn parse_style(s: &str) -> Result<PlayStyle, String> {
    use serde::de::value::{Error, StrDeserializer};
    PlayStyle::deserialize(StrDeserializer::<Error>::new(s)).map_err(|e| e.to_string())
}

/// Look up competitors by id, failing on the first unknown one
fn resolve(ledger: &RatingLedger, ids: &[String]) -> Result<Vec<Competitor>> {
    ids.iter()
        .map(|id| {
            ledger
                .get(&id.as_str().into())
                .map(|e| e.competitor.clone())
                .with_context(|| format!("unknown competitor {id}"))
        })
        .collect()
}

/// Selected competitors, or everyone in the ledger when none are named
fn resolve_or_all(ledger: &RatingLedger, ids: &[String]) -> Result<Vec<Competitor>> {
    if ids.is_empty() {
        Ok(ledger.entries.values().map(|e| e.competitor.clone()).collect())
    } else {
        resolve(ledger, ids)
    }
}

fn finish(report: EventReport, path: Option<&Path>) -> Result<()> {
    report.print_report();
    if let Some(path) = path {
        report.save(path)?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let sim = load_sim_config(cli.config.as_deref())?;
    let mut ledger = RatingLedger::load_or_default(&cli.ledger)?;
    let mut runner = EventRunner::new(
        sim,
        RunnerConfig {
            seed: cli.seed,
            verbose: cli.verbose,
        },
    );
    let report_path = cli.report.as_deref();

    match cli.command {
        Command::Add {
            id,
            name,
            rating,
            skill,
            age,
            style,
        } => {
            let competitor = match (skill.map(Attributes::uniform), rating) {
                (Some(attributes), None) => rated_competitor(id.clone(), name, attributes),
                (Some(attributes), Some(rating)) => {
                    Competitor::new(id.clone(), name, rating).with_attributes(attributes)
                }
                (None, rating) => {
                    Competitor::new(id.clone(), name, rating.unwrap_or(DEFAULT_RATING))
                }
            }
            .with_age(age)
            .with_style(style);
            if !ledger.register(competitor) {
                bail!("competitor {id} already exists");
            }
            println!("Added {id}");
        }
        Command::Generate {
            count,
            rating,
            prefix,
        } => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let first = ledger.len();
            let mut added = 0;
            for n in first..first + count {
                let mut competitor = generate_competitor(&mut rng, format!("{prefix}-{n}"), rating);
                competitor.kind = CompetitorKind::Real;
                if ledger.register(competitor) {
                    added += 1;
                }
            }
            println!("Added {added} competitors");
        }
        Command::Match { a, b } => {
            let players = resolve(&ledger, &[a.clone(), b.clone()])?;
            let game = runner.run_match(&players[0], &players[1]);
            ledger.apply_match(&format!("match {a} v {b}"), &game);
            finish(
                EventReport::new(&format!("{a} v {b}"), runner.seed(), ReportBody::Match { game }),
                report_path,
            )?;
        }
        Command::Meeting { home, away } => {
            let home_players = resolve(&ledger, &home)?;
            let away_players = resolve(&ledger, &away)?;
            let meeting = runner.run_meeting(&home_players, &away_players);
            ledger.apply_matches("meeting", &meeting.matches);
            finish(
                EventReport::new("Meeting", runner.seed(), ReportBody::Meeting { meeting }),
                report_path,
            )?;
        }
        Command::LeagueDay {
            setup,
            day,
            exclude,
        } => {
            let setup = LeagueSetup::load(&setup)?;
            let clubs = setup.clubs(&ledger);
            let meetings =
                runner.run_league_day(day, &setup.tracked, &clubs, exclude.as_deref())?;
            for lm in &meetings {
                ledger.apply_matches(&format!("league day {day}"), &lm.meeting.matches);
            }
            let table = standings(setup.clubs.iter().map(|c| c.id.clone()), &meetings);
            finish(
                EventReport::new(
                    &format!("League day {day}"),
                    runner.seed(),
                    ReportBody::LeagueDay {
                        day,
                        meetings,
                        table,
                    },
                ),
                report_path,
            )?;
        }
        Command::Competition {
            name,
            shape,
            tier,
            min_rating,
            max_rating,
            min_age,
            max_age,
            players,
        } => {
            let id = name.to_lowercase().replace(' ', "-");
            let competition = Competition::new(id, &name, shape.into())
                .with_tier(tier.into())
                .with_rating_bounds(min_rating, max_rating)
                .with_age_bounds(min_age, max_age);
            let registrants = resolve_or_all(&ledger, &players)?;
            let results = runner.run_competition(&competition, &registrants);
            ledger.apply_competition(&name, &results);
            finish(
                EventReport::new(&name, runner.seed(), ReportBody::Competition { results }),
                report_path,
            )?;
        }
        Command::Internal { players } => {
            let members = resolve_or_all(&ledger, &players)?;
            let event = runner.run_internal(&members)?;
            ledger.apply_matches("internal event", event.matches());
            finish(
                EventReport::new("Internal event", runner.seed(), ReportBody::Internal { event }),
                report_path,
            )?;
        }
        Command::Leaderboard => {
            if ledger.is_empty() {
                println!("No competitors yet. Add some first!");
            } else {
                ledger.print_leaderboard();
            }
            return Ok(());
        }
    }

    ledger.save(&cli.ledger)?;
    Ok(())
}
