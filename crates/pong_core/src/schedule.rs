//! League day scheduling with the circle method
//!
//! The field is always eight entrants: the tracked one plus seven others.
//! Slot 0 stays put while slots 1..=7 rotate one step per day, which gives a
//! full single round robin over seven days.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Entrants in one league group, tracked entrant included.
pub const FIELD_SIZE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture<T> {
    pub home: T,
    pub away: T,
}

/// Slot pairs `(home, away)` for `day`, where slot 0 is the tracked entrant
/// and slot `i` is opponent `i - 1`.
pub fn day_slots(day: u32) -> Result<Vec<(usize, usize)>> {
    if day == 0 {
        return Err(SimError::InvalidDay(day));
    }

    let mut rotating: Vec<usize> = (1..FIELD_SIZE).collect();
    let shift = (day as usize - 1) % rotating.len();
    rotating.rotate_right(shift);

    let order: Vec<usize> = std::iter::once(0).chain(rotating).collect();

    let slots = (0..FIELD_SIZE / 2)
        .map(|i| {
            let (first, last) = (order[i], order[FIELD_SIZE - 1 - i]);
            if (day as usize + i) % 2 == 0 {
                (last, first)
            } else {
                (first, last)
            }
        })
        .collect();

    Ok(slots)
}

/// Fixtures for `day` between `tracked` and exactly seven `opponents`.
pub fn day_pairings<T: Clone>(day: u32, tracked: &T, opponents: &[T]) -> Result<Vec<Fixture<T>>> {
    if opponents.len() != FIELD_SIZE - 1 {
        return Err(SimError::OpponentCount {
            expected: FIELD_SIZE - 1,
            actual: opponents.len(),
        });
    }

    let entrant = |slot: usize| {
        if slot == 0 {
            tracked.clone()
        } else {
            opponents[slot - 1].clone()
        }
    };

    Ok(day_slots(day)?
        .into_iter()
        .map(|(home, away)| Fixture {
            home: entrant(home),
            away: entrant(away),
        })
        .collect())
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
