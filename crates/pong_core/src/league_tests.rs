use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn clubs() -> Vec<LeagueClub> {
    (0..8)
        .map(|c| {
            let roster = (0..4)
                .map(|p| {
                    let rating = 900.0 + 20.0 * p as f64;
                    Competitor::new(format!("c{c}p{p}"), format!("Player {c}.{p}"), rating)
                })
                .collect();
            LeagueClub::new(format!("club{c}"), format!("Club {c}"), roster)
        })
        .collect()
}

fn scored(home: &str, away: &str, home_score: u32, away_score: u32) -> LeagueMeeting {
    LeagueMeeting {
        day: 1,
        home_club: home.to_string(),
        away_club: away.to_string(),
        meeting: Meeting {
            format: MeetingFormat::Full,
            home_roster: Vec::new(),
            away_roster: Vec::new(),
            legs: Vec::new(),
            matches: Vec::new(),
            home_score,
            away_score,
        },
    }
}

#[test]
fn test_day_skips_tracked_fixture() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = SimConfig::default();
    let meetings = simulate_league_day(&mut rng, &config, 1, "club0", &clubs(), None).unwrap();

    assert_eq!(meetings.len(), 3);
    for lm in &meetings {
        assert_ne!(lm.home_club, "club0");
        assert_ne!(lm.away_club, "club0");
        assert_eq!(lm.meeting.matches.len(), 14);
        assert_eq!(lm.day, 1);
    }
}

#[test]
fn test_day_skips_excluded_club() {
    let mut rng = StdRng::seed_from_u64(2);
    let config = SimConfig::default();
    let meetings =
        simulate_league_day(&mut rng, &config, 3, "club0", &clubs(), Some("club2")).unwrap();

    assert_eq!(meetings.len(), 2);
    assert!(meetings.iter().all(|m| m.home_club != "club2" && m.away_club != "club2"));
}

#[test]
fn test_day_needs_seven_opponents() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = clubs();
    field.truncate(6);
    let config = SimConfig::default();
    let err = simulate_league_day(&mut rng, &config, 1, "club0", &field, None).unwrap_err();
    assert!(matches!(err, crate::SimError::OpponentCount { actual: 5, .. }));
}

#[test]
fn test_short_roster_still_plays_full_sheet() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = clubs();
    field[1].roster.truncate(2);
    let meeting = play_fixture(&mut rng, &SimConfig::default(), 1, &field[1], &field[2]);

    assert_eq!(meeting.meeting.format, MeetingFormat::Full);
    assert_eq!(meeting.meeting.home_roster[3].as_str(), "ghost-club1-3");
}

#[test]
fn test_standings_points_and_order() {
    let meetings = vec![
        scored("a", "b", 9, 5),
        scored("c", "d", 7, 7),
        scored("b", "c", 8, 6),
        scored("d", "a", 2, 12),
    ];
    let table = standings(["a", "b", "c", "d"], &meetings);

    let clubs: Vec<&str> = table.iter().map(|r| r.club.as_str()).collect();
    assert_eq!(clubs, ["a", "b", "c", "d"]);

    let a = &table[0];
    assert_eq!((a.played, a.wins, a.points), (2, 2, 6));
    assert_eq!((a.matches_won, a.matches_lost), (21, 7));

    let c = &table[2];
    assert_eq!((c.draws, c.losses, c.points), (1, 1, 3));
    let d = &table[3];
    assert_eq!((d.draws, d.losses, d.points), (1, 1, 3));
    assert!(c.match_difference() > d.match_difference());
}

#[test]
fn test_standings_ignore_unknown_clubs() {
    let table = standings(vec!["a".to_string()], &[scored("a", "zz", 8, 6)]);
    assert_eq!(table[0].played, 0);
}
