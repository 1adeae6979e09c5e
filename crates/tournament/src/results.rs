//! Event results storage and reporting

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pong_core::{
    CompetitionResult, InternalEvent, LeagueMeeting, Leg, Match, Meeting, StandingRow,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// What an event produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Match { game: Match },
    Meeting { meeting: Meeting },
    LeagueDay {
        day: u32,
        meetings: Vec<LeagueMeeting>,
        table: Vec<StandingRow>,
    },
    Competition { results: Vec<CompetitionResult> },
    Internal { event: InternalEvent },
}

/// A finished event, ready to print or store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub name: String,
    pub created: DateTime<Utc>,
    /// Seed the run was made with, when it can be replayed
    pub seed: Option<u64>,
    pub body: ReportBody,
}

impl EventReport {
    pub fn new(name: &str, seed: Option<u64>, body: ReportBody) -> Self {
        Self {
            name: name.to_string(),
            created: Utc::now(),
            seed,
            body,
        }
    }

    /// Save the report to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse report {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", self.name);
        if let Some(seed) = self.seed {
            let _ = writeln!(out, "Seed: {seed}");
        }
        out.push('\n');

        match &self.body {
            ReportBody::Match { game } => write_match(&mut out, game),
            ReportBody::Meeting { meeting } => write_meeting(&mut out, meeting),
            ReportBody::LeagueDay {
                day,
                meetings,
                table,
            } => {
                let _ = writeln!(out, "Day {day}");
                for lm in meetings {
                    let _ = writeln!(
                        out,
                        "{:<20} {:>2} - {:<2} {:<20}",
                        lm.home_club, lm.meeting.home_score, lm.meeting.away_score, lm.away_club
                    );
                }
                out.push('\n');
                write_table(&mut out, table);
            }
            ReportBody::Competition { results } => write_competition(&mut out, results),
            ReportBody::Internal { event } => {
                let _ = writeln!(
                    out,
                    "{:>4} {:<24} {:>7} {:>3} {:>3} {:>3} {:>5}",
                    "#", "Name", "Rating", "W", "L", "Bye", "Pts"
                );
                let _ = writeln!(out, "{}", "-".repeat(55));
                for s in &event.standings {
                    let _ = writeln!(
                        out,
                        "{:>4} {:<24} {:>7.0} {:>3} {:>3} {:>3} {:>5}",
                        s.rank, s.name, s.rating, s.wins, s.losses, s.byes, s.score
                    );
                }
            }
        }

        out
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn write_match(out: &mut String, game: &Match) {
    let _ = writeln!(out, "{} vs {}", game.a, game.b);
    let _ = writeln!(out, "Score: {}", game.score_line());
    if game.walkover {
        let _ = writeln!(out, "Walkover");
    }
    let _ = writeln!(
        out,
        "Winner: {} ({:+.1}), loser {} ({:+.1})",
        game.winner_id(),
        game.delta.gain,
        game.loser_id(),
        game.delta.loss
    );
}

fn write_meeting(out: &mut String, meeting: &Meeting) {
    for (leg, game) in meeting.results() {
        let label = match leg {
            Leg::Singles { home, away } => format!("{} v {}", home + 1, away + 1),
            Leg::Doubles { .. } => "doubles".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<8} {:<24} {:<24} {}",
            label,
            game.a.as_str(),
            game.b.as_str(),
            game.score_line()
        );
    }
    let _ = writeln!(out, "\nFinal: {} - {}", meeting.home_score, meeting.away_score);
}

fn write_table(out: &mut String, table: &[StandingRow]) {
    let _ = writeln!(
        out,
        "{:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>6}",
        "Club", "P", "W", "D", "L", "Pts", "Diff"
    );
    let _ = writeln!(out, "{}", "-".repeat(48));
    for row in table {
        let _ = writeln!(
            out,
            "{:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>+6}",
            row.club,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.points,
            row.match_difference()
        );
    }
}

fn write_competition(out: &mut String, results: &[CompetitionResult]) {
    let _ = writeln!(
        out,
        "{:<24} {:<7} {:<28} {:>3} {:>3} {:>7}",
        "Competitor", "Cat", "Placement", "W", "L", "Delta"
    );
    let _ = writeln!(out, "{}", "-".repeat(77));
    for r in results {
        let mut flags = String::new();
        if r.promoted {
            flags.push_str(" [up]");
        }
        if r.relegated {
            flags.push_str(" [down]");
        }
        if r.qualified {
            flags.push_str(" [Q]");
        }
        let _ = writeln!(
            out,
            "{:<24} {:<7} {:<28} {:>3} {:>3} {:>+7.1}{}",
            r.competitor_name,
            r.category.label(),
            r.placement,
            r.wins,
            r.losses,
            r.rating_delta,
            flags
        );
    }
}
