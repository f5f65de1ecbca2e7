//! Weekly volume targets, set/rep schemes and rest durations.
//!
//! Focus picks the rep ranges and rest lengths, experience picks the set
//! counts, and the combination yields weekly set caps per movement pattern.
//! The `CapLedger` enforces those caps while sessions are populated: primary
//! patterns each own a bucket, and all accessory patterns (isolation, carry,
//! rotation) share one pooled bucket.

use crate::types::{ExperienceLevel, GenerationParameters, MovementPattern, Priority, RepTarget, TrainingFocus};
use std::collections::HashMap;
use tracing::debug;

/// Weekly set targets per movement pattern tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeeklyTargets {
    /// Weekly sets for each primary pattern bucket.
    pub primary: u32,
    /// Weekly sets for the shared accessory pool, before doubling.
    pub accessory: u32,
}

/// Compute weekly set targets from focus, experience and availability.
///
/// Experience shifts both tiers (beginners two down, advanced two up);
/// training three or fewer days adds a primary set per pattern since each
/// session must cover more ground, five or more removes one. Floors keep
/// degenerate inputs from producing useless targets.
pub fn weekly_targets(params: &GenerationParameters) -> WeeklyTargets {
    let (mut primary, mut accessory): (i32, i32) = match params.focus {
        TrainingFocus::Strength => (10, 6),
        TrainingFocus::Hypertrophy => (12, 10),
        TrainingFocus::Endurance => (8, 6),
        TrainingFocus::GeneralFitness => (10, 8),
    };

    match params.experience {
        ExperienceLevel::Beginner => {
            primary -= 2;
            accessory -= 2;
        }
        ExperienceLevel::Intermediate => {}
        ExperienceLevel::Advanced => {
            primary += 2;
            accessory += 2;
        }
    }

    if params.weekly_availability <= 3 {
        primary += 1;
    } else if params.weekly_availability >= 5 {
        primary -= 1;
    }

    let targets = WeeklyTargets {
        primary: primary.max(4) as u32,
        accessory: accessory.max(2) as u32,
    };
    debug!(
        primary = targets.primary,
        accessory = targets.accessory,
        "Weekly volume targets computed"
    );
    targets
}

/// Sets and rep targets for one session's slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepScheme {
    pub primary_sets: u32,
    pub accessory_sets: u32,
    pub primary_reps: RepTarget,
    pub accessory_reps: RepTarget,
}

/// Set counts come from experience, rep ranges from focus.
pub fn rep_scheme(params: &GenerationParameters) -> RepScheme {
    let (primary_sets, accessory_sets) = match params.experience {
        ExperienceLevel::Beginner => (3, 2),
        ExperienceLevel::Intermediate => (4, 3),
        ExperienceLevel::Advanced => (5, 3),
    };

    let (primary_reps, accessory_reps) = match params.focus {
        TrainingFocus::Strength => (
            RepTarget::Range { min: 3, max: 5 },
            RepTarget::Range { min: 6, max: 8 },
        ),
        TrainingFocus::Hypertrophy => (
            RepTarget::Range { min: 6, max: 12 },
            RepTarget::Range { min: 10, max: 15 },
        ),
        TrainingFocus::Endurance => (
            RepTarget::Range { min: 12, max: 20 },
            RepTarget::Range { min: 15, max: 25 },
        ),
        TrainingFocus::GeneralFitness => (
            RepTarget::Range { min: 8, max: 12 },
            RepTarget::Range { min: 10, max: 15 },
        ),
    };

    RepScheme {
        primary_sets,
        accessory_sets,
        primary_reps,
        accessory_reps,
    }
}

/// Rest between sets, in seconds.
pub fn rest_seconds(focus: TrainingFocus, priority: Priority) -> u32 {
    match (focus, priority) {
        (TrainingFocus::Strength, Priority::Primary) => 180,
        (TrainingFocus::Strength, Priority::Accessory) => 120,
        (TrainingFocus::Hypertrophy, Priority::Primary) => 90,
        (TrainingFocus::Hypertrophy, Priority::Accessory) => 60,
        (TrainingFocus::Endurance, Priority::Primary) => 60,
        (TrainingFocus::Endurance, Priority::Accessory) => 45,
        (TrainingFocus::GeneralFitness, Priority::Primary) => 90,
        (TrainingFocus::GeneralFitness, Priority::Accessory) => 60,
    }
}

/// Route a movement pattern to the bucket that pays for its sets.
///
/// Primary patterns own their bucket; everything else draws from the pooled
/// isolation bucket.
fn cap_bucket(pattern: MovementPattern) -> MovementPattern {
    if pattern.is_primary() {
        pattern
    } else {
        MovementPattern::Isolation
    }
}

/// Mutable ledger of weekly set caps, drawn down as slots are populated.
#[derive(Clone, Debug)]
pub struct CapLedger {
    remaining: HashMap<MovementPattern, u32>,
}

impl CapLedger {
    /// Ledger with one bucket per primary pattern plus the accessory pool.
    ///
    /// The accessory pool is doubled because three patterns (isolation,
    /// carry, rotation) share it.
    pub fn new(targets: &WeeklyTargets) -> Self {
        let mut remaining = HashMap::new();
        for pattern in MovementPattern::PRIMARY {
            remaining.insert(pattern, targets.primary);
        }
        remaining.insert(MovementPattern::Isolation, targets.accessory * 2);
        Self { remaining }
    }

    /// Sets still available for a pattern this week.
    pub fn remaining(&self, pattern: MovementPattern) -> u32 {
        self.remaining
            .get(&cap_bucket(pattern))
            .copied()
            .unwrap_or(0)
    }

    /// Charge a slot's set request against the pattern's bucket.
    ///
    /// Returns the granted set count, reduced to what the bucket still holds
    /// but never below one. Returns `None` when the bucket is empty, which
    /// drops the slot entirely.
    pub fn grant(&mut self, pattern: MovementPattern, desired_sets: u32) -> Option<u32> {
        let bucket = cap_bucket(pattern);
        let left = self.remaining.get(&bucket).copied().unwrap_or(0);
        if left == 0 {
            debug!(pattern = %pattern, "Weekly cap exhausted, dropping slot");
            return None;
        }
        let granted = desired_sets.min(left).max(1);
        if let Some(entry) = self.remaining.get_mut(&bucket) {
            *entry -= granted;
        }
        Some(granted)
    }
}
