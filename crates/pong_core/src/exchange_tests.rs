use super::*;

#[test]
fn test_band_boundaries() {
    assert_eq!(exchange_band(0.0), 0);
    assert_eq!(exchange_band(24.9), 0);
    assert_eq!(exchange_band(25.0), 1);
    assert_eq!(exchange_band(99.0), 2);
    assert_eq!(exchange_band(100.0), 3);
    assert_eq!(exchange_band(299.0), 5);
    assert_eq!(exchange_band(499.9), 7);
    assert_eq!(exchange_band(500.0), 8);
    assert_eq!(exchange_band(5000.0), 8);
}

#[test]
fn test_equal_ratings_are_expected_result() {
    let delta = point_exchange(1000.0, 1000.0);
    assert_eq!(delta, RatingDelta { gain: 6.0, loss: -5.0 });
}

#[test]
fn test_big_upset_pays_most() {
    let delta = point_exchange(800.0, 1400.0);
    assert_eq!(delta.gain, 40.0);
    assert_eq!(delta.loss, -29.0);
}

#[test]
fn test_expected_win_worth_less_as_gap_grows() {
    let mut previous = point_exchange(1000.0, 1000.0);
    for loser in [970.0, 940.0, 890.0, 840.0, 790.0, 690.0, 590.0, 490.0] {
        let delta = point_exchange(1000.0, loser);
        assert!(delta.gain <= previous.gain);
        assert!(delta.loss >= previous.loss);
        previous = delta;
    }
    assert_eq!(previous, RatingDelta { gain: 0.0, loss: 0.0 });
}

#[test]
fn test_upset_worth_more_as_gap_grows() {
    let mut previous = point_exchange(1000.0, 1010.0);
    for loser in [1030.0, 1060.0, 1110.0, 1160.0, 1210.0, 1310.0, 1410.0, 1510.0] {
        let delta = point_exchange(1000.0, loser);
        assert!(delta.gain > previous.gain);
        assert!(delta.loss < previous.loss);
        previous = delta;
    }
}

#[test]
fn test_exchange_is_pure() {
    for (w, l) in [(512.0, 1337.0), (1500.0, 1499.5), (2000.0, 1620.0)] {
        assert_eq!(point_exchange(w, l), point_exchange(w, l));
    }
}
