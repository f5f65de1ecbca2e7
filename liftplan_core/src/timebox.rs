//! Session time-boxing: fit the main block into the user's time budget.
//!
//! Reduction is strictly ordered and only ever touches accessory work:
//! 1. Shave accessory sets one at a time, last exercise first, floor one set
//! 2. Drop whole accessory exercises, last first
//! 3. For endurance and general fitness, shrink accessory rest by a quarter
//!
//! Primary exercises are the session's non-negotiable core and come through
//! untouched, even when the session still overshoots the budget.

use crate::types::{Priority, ResolvedExercise, TrainingFocus};
use tracing::debug;

/// Estimated minutes for one exercise: ~45s of effort per set plus rest.
pub fn estimate_minutes(sets: u32, rest_seconds: u32) -> u32 {
    (sets * (45 + rest_seconds)).div_ceil(60)
}

/// Estimated minutes for a whole block.
pub fn block_minutes(exercises: &[ResolvedExercise]) -> u32 {
    exercises
        .iter()
        .map(|exercise| estimate_minutes(exercise.sets, exercise.rest_seconds))
        .sum()
}

/// Trim a main block until it fits the target duration, or until only
/// primary work remains. Never increases duration or adds content.
///
/// A zero preference means "no preference" and falls back to 45 minutes;
/// anything under 15 minutes is treated as 15.
pub fn timebox(
    mut exercises: Vec<ResolvedExercise>,
    target_minutes: u32,
    focus: TrainingFocus,
) -> Vec<ResolvedExercise> {
    let target = if target_minutes == 0 {
        45
    } else {
        target_minutes
    }
    .max(15);

    let before = block_minutes(&exercises);
    let mut minutes = before;

    // 1) shave accessory sets, one per pass, from the back
    while minutes > target {
        let mut changed = false;
        for i in (0..exercises.len()).rev() {
            if minutes <= target {
                break;
            }
            if exercises[i].priority == Priority::Accessory && exercises[i].sets > 1 {
                exercises[i].sets -= 1;
                minutes = block_minutes(&exercises);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // 2) drop whole accessory exercises from the back
    let mut i = exercises.len();
    while i > 0 && minutes > target {
        i -= 1;
        if exercises[i].priority == Priority::Accessory {
            exercises.remove(i);
            minutes = block_minutes(&exercises);
        }
    }

    // 3) endurance-leaning programs tolerate shorter accessory rests
    if minutes > target
        && matches!(
            focus,
            TrainingFocus::Endurance | TrainingFocus::GeneralFitness
        )
    {
        for exercise in exercises
            .iter_mut()
            .filter(|e| e.priority == Priority::Accessory)
        {
            exercise.rest_seconds =
                ((f64::from(exercise.rest_seconds) * 0.75).round() as u32).max(30);
        }
        minutes = block_minutes(&exercises);
    }

    debug!(target, before, after = minutes, "Time-boxed session");
    exercises
}
