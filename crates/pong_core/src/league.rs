//! League days and the league table
//!
//! A league group is eight clubs: the tracked club and seven others. The
//! tracked club's own fixture is played by the caller, so a simulated day
//! only covers the fixtures between the other clubs.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimConfig;
use crate::error::Result;
use crate::meeting::{fill_roster, play_meeting, Meeting, MeetingFormat};
use crate::schedule::day_pairings;
use crate::types::{Competitor, Side};

/// Points awarded for a meeting won, drawn and lost.
pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 2;
pub const LOSS_POINTS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueClub {
    pub id: String,
    pub name: String,
    /// Players in lineup order; only the first four play
    pub roster: Vec<Competitor>,
}

impl LeagueClub {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roster: Vec<Competitor>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roster,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueMeeting {
    pub day: u32,
    pub home_club: String,
    pub away_club: String,
    pub meeting: Meeting,
}

/// Play one league fixture. League meetings always use the four-player
/// sheet, so short rosters are ghost-padded rather than downgraded.
pub fn play_fixture<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimConfig,
    day: u32,
    home: &LeagueClub,
    away: &LeagueClub,
) -> LeagueMeeting {
    let size = MeetingFormat::Full.roster_size();
    let home_lineup = fill_roster(&home.roster, size, &home.id);
    let away_lineup = fill_roster(&away.roster, size, &away.id);

    LeagueMeeting {
        day,
        home_club: home.id.clone(),
        away_club: away.id.clone(),
        meeting: play_meeting(rng, &config.meeting, &home_lineup, &away_lineup),
    }
}

/// Simulate the other fixtures of league day `day`.
///
/// `clubs` must hold the tracked club's seven opponents (the tracked club
/// itself may be included and is ignored). Fixtures involving the tracked
/// club or `excluded` are skipped.
pub fn simulate_league_day<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimConfig,
    day: u32,
    tracked_club: &str,
    clubs: &[LeagueClub],
    excluded: Option<&str>,
) -> Result<Vec<LeagueMeeting>> {
    let opponents: Vec<Option<&LeagueClub>> = clubs
        .iter()
        .filter(|c| c.id != tracked_club)
        .map(Some)
        .collect();

    let fixtures = day_pairings(day, &None, &opponents)?;

    let meetings: Vec<LeagueMeeting> = fixtures
        .into_iter()
        .filter_map(|f| match (f.home, f.away) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        })
        .filter(|(home, away)| excluded.map_or(true, |x| home.id != x && away.id != x))
        .map(|(home, away)| play_fixture(rng, config, day, home, away))
        .collect();

    debug!(day, meetings = meetings.len(), "league day simulated");
    Ok(meetings)
}

/// One line of the league table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub club: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
}

impl StandingRow {
    pub fn match_difference(&self) -> i64 {
        self.matches_won as i64 - self.matches_lost as i64
    }
}

/// Build the league table for `club_ids` from finished meetings.
///
/// Meetings involving a club outside `club_ids` are ignored. Rows are sorted
/// by points, then by match difference; remaining ties keep `club_ids` order.
pub fn standings<I, S>(club_ids: I, meetings: &[LeagueMeeting]) -> Vec<StandingRow>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut rows: Vec<StandingRow> = club_ids
        .into_iter()
        .map(|id| StandingRow {
            club: id.into(),
            ..StandingRow::default()
        })
        .collect();
    let index: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.club.clone(), i))
        .collect();

    for lm in meetings {
        let (Some(&h), Some(&a)) = (index.get(&lm.home_club), index.get(&lm.away_club)) else {
            continue;
        };
        let (home_score, away_score) = (lm.meeting.home_score, lm.meeting.away_score);

        for (i, won, lost) in [(h, home_score, away_score), (a, away_score, home_score)] {
            let row = &mut rows[i];
            row.played += 1;
            row.matches_won += won;
            row.matches_lost += lost;
        }

        match lm.meeting.winner() {
            Some(Side::A) => record(&mut rows, h, a),
            Some(Side::B) => record(&mut rows, a, h),
            None => {
                for i in [h, a] {
                    rows[i].draws += 1;
                    rows[i].points += DRAW_POINTS;
                }
            }
        }
    }

    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.match_difference().cmp(&x.match_difference()))
    });
    rows
}

fn record(rows: &mut [StandingRow], winner: usize, loser: usize) {
    rows[winner].wins += 1;
    rows[winner].points += WIN_POINTS;
    rows[loser].losses += 1;
    rows[loser].points += LOSS_POINTS;
}

#[cfg(test)]
#[path = "league_tests.rs"]
mod league_tests;
