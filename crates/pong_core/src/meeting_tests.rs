use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn roster(prefix: &str, size: usize, rating: f64) -> Vec<Competitor> {
    (0..size)
        .map(|i| Competitor::new(format!("{prefix}{i}"), format!("Player {prefix}{i}"), rating))
        .collect()
}

#[test]
fn test_full_sheet_order() {
    let legs = MeetingFormat::Full.legs(&MeetingConfig::default());
    assert_eq!(legs.len(), 14);
    assert_eq!(legs[0], Leg::Singles { home: 0, away: 0 });
    assert_eq!(legs[6], Leg::Singles { home: 3, away: 2 });
    assert_eq!(legs[8], legs[9]);
    assert_eq!(legs[13], Leg::Singles { home: 1, away: 3 });
}

#[test]
fn test_distinct_doubles_switch() {
    let config = MeetingConfig {
        distinct_doubles_pairs: true,
    };
    let legs = MeetingFormat::Full.legs(&config);
    assert_eq!(
        legs[9],
        Leg::Doubles {
            home: (2, 3),
            away: (2, 3)
        }
    );
    assert_ne!(legs[8], legs[9]);
}

#[test]
fn test_format_by_home_roster() {
    assert_eq!(MeetingFormat::for_roster(4), MeetingFormat::Full);
    assert_eq!(MeetingFormat::for_roster(3), MeetingFormat::Full);
    assert_eq!(MeetingFormat::for_roster(2), MeetingFormat::Reduced);
    assert_eq!(MeetingFormat::for_roster(0), MeetingFormat::Reduced);
}

#[test]
fn test_full_meeting_score_adds_up() {
    let mut rng = StdRng::seed_from_u64(10);
    let meeting = play_meeting(
        &mut rng,
        &MeetingConfig::default(),
        &roster("h", 4, 1200.0),
        &roster("a", 4, 1200.0),
    );

    assert_eq!(meeting.format, MeetingFormat::Full);
    assert_eq!(meeting.matches.len(), 14);
    assert_eq!(meeting.home_score + meeting.away_score, 14);
    for (leg, m) in meeting.results() {
        if let Leg::Singles { home, away } = leg {
            assert_eq!(m.a, meeting.home_roster[*home]);
            assert_eq!(m.b, meeting.away_roster[*away]);
        }
    }
}

#[test]
fn test_reduced_meeting() {
    let mut rng = StdRng::seed_from_u64(12);
    let meeting = play_meeting(
        &mut rng,
        &MeetingConfig::default(),
        &roster("h", 2, 900.0),
        &roster("a", 2, 900.0),
    );

    assert_eq!(meeting.format, MeetingFormat::Reduced);
    assert_eq!(meeting.matches.len(), 5);
    assert!(meeting.winner().is_some());
    assert!(meeting.matches[2].a.as_str().starts_with("DBL-"));
}

#[test]
fn test_short_away_roster_is_padded_with_ghosts() {
    let mut rng = StdRng::seed_from_u64(13);
    let meeting = play_meeting(
        &mut rng,
        &MeetingConfig::default(),
        &roster("h", 4, 800.0),
        &roster("a", 3, 800.0),
    );

    assert_eq!(meeting.away_roster[3].as_str(), "ghost-away-3");
    // Slot 3 of the away side appears in three singles legs, all forfeited
    let forfeits = meeting
        .results()
        .filter(|(leg, _)| matches!(leg, Leg::Singles { away: 3, .. }))
        .inspect(|(_, m)| assert!(m.walkover && m.winner == Side::A))
        .count();
    assert_eq!(forfeits, 3);
}

#[test]
fn test_long_roster_is_truncated() {
    let filled = fill_roster(&roster("x", 6, 1000.0), 4, "home");
    assert_eq!(filled.len(), 4);
    assert_eq!(filled[3].id.as_str(), "x3");
}
