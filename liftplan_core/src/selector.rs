//! Exercise selection: resolving template slots to concrete catalog rows.
//!
//! Selection is a filter cascade that relaxes one constraint at a time:
//! 1. Strict: pattern, experience, owned equipment, dislikes, session novelty
//! 2. Equipment-relaxed: additionally allow no-equipment and bodyweight rows
//! 3. Similar-pattern: retry the relaxed filter against adjacent patterns
//! 4. Give up: the slot is dropped, which is a policy choice rather than an
//!    error (overly restrictive preferences degrade the plan gracefully)
//!
//! Among survivors, compound lifts win over isolation work, and the final
//! pick is seeded per pattern and week so the same slot resolves identically
//! all week.

use crate::error::{Error, Result};
use crate::rng::{slot_seed_key, SeededRng};
use crate::types::{
    Catalog, Exercise, ExerciseCategory, GenerationParameters, MovementPattern,
};
use tracing::{debug, trace};

const BODYWEIGHT: &str = "bodyweight";

/// Adjacent patterns to try when a slot's own pattern yields no candidates.
///
/// Pairs that train overlapping musculature point at each other; everything
/// accessory-shaped funnels toward isolation.
fn similar_patterns(pattern: MovementPattern) -> &'static [MovementPattern] {
    use MovementPattern::*;
    match pattern {
        PushVertical => &[PushHorizontal, Isolation],
        PushHorizontal => &[PushVertical, Isolation],
        PullVertical => &[PullHorizontal, Isolation],
        PullHorizontal => &[PullVertical, Isolation],
        Squat => &[Lunge, Hinge],
        Hinge => &[Squat, Lunge],
        Lunge => &[Squat, Hinge],
        Isolation => &[Carry, Rotation],
        Carry | Rotation => &[Isolation],
        Mobility | Stretch | Breathing => &[Isolation],
    }
}

fn eligible_base(
    exercise: &Exercise,
    pattern: MovementPattern,
    params: &GenerationParameters,
    used_ids: &[&str],
) -> bool {
    exercise.category == ExerciseCategory::Normal
        && exercise.movement_pattern == pattern
        && exercise.experience_level <= params.experience
        && !params.disliked_exercises.contains(&exercise.id)
        && !used_ids.contains(&exercise.id.as_str())
}

fn strict_candidates<'a>(
    catalog: &'a Catalog,
    pattern: MovementPattern,
    params: &GenerationParameters,
    used_ids: &[&str],
) -> Vec<&'a Exercise> {
    catalog
        .exercises
        .iter()
        .filter(|exercise| {
            eligible_base(exercise, pattern, params, used_ids)
                && exercise
                    .equipment
                    .as_ref()
                    .map_or(true, |eq| params.available_equipment.contains(eq))
        })
        .collect()
}

fn relaxed_candidates<'a>(
    catalog: &'a Catalog,
    pattern: MovementPattern,
    params: &GenerationParameters,
    used_ids: &[&str],
) -> Vec<&'a Exercise> {
    catalog
        .exercises
        .iter()
        .filter(|exercise| {
            eligible_base(exercise, pattern, params, used_ids)
                && match exercise.equipment.as_deref() {
                    None | Some(BODYWEIGHT) => true,
                    Some(eq) => params.available_equipment.contains(eq),
                }
        })
        .collect()
}

/// Resolve one slot's pattern to a catalog exercise, or `None` if the
/// cascade exhausts every relaxation.
///
/// The seeded pick is keyed by the requested pattern even when the cascade
/// lands on a similar one, so a slot's identity stays stable for the week.
pub fn select_exercise<'a>(
    catalog: &'a Catalog,
    pattern: MovementPattern,
    params: &GenerationParameters,
    used_ids: &[&str],
    week: &str,
) -> Option<&'a Exercise> {
    let mut candidates = strict_candidates(catalog, pattern, params, used_ids);

    if candidates.is_empty() {
        debug!(pattern = %pattern, "No strict candidates, relaxing equipment filter");
        candidates = relaxed_candidates(catalog, pattern, params, used_ids);
    }

    if candidates.is_empty() {
        for &similar in similar_patterns(pattern) {
            candidates = relaxed_candidates(catalog, similar, params, used_ids);
            if !candidates.is_empty() {
                debug!(
                    pattern = %pattern,
                    similar = %similar,
                    "Borrowed candidates from similar pattern"
                );
                break;
            }
        }
    }

    if candidates.is_empty() {
        debug!(pattern = %pattern, "Cascade exhausted, dropping slot");
        return None;
    }

    let compounds: Vec<&Exercise> = candidates
        .iter()
        .copied()
        .filter(|exercise| exercise.is_compound)
        .collect();
    let pool = if compounds.is_empty() {
        &candidates
    } else {
        &compounds
    };

    let mut rng = SeededRng::from_key(&slot_seed_key(pattern, params, week));
    let picked = rng.pick(pool).copied();
    if let Some(exercise) = picked {
        trace!(pattern = %pattern, exercise = %exercise.id, "Selected exercise");
    }
    picked
}

/// Suggest a replacement for an exercise already in a plan.
///
/// Curated alternatives are tried first, in listed order, keeping the first
/// one the user can actually perform. Failing that, the selection cascade
/// runs against the original's movement pattern with the original vetoed.
pub fn find_alternative(
    catalog: &Catalog,
    exercise_id: &str,
    params: &GenerationParameters,
    week: &str,
) -> Result<Option<Exercise>> {
    let original = catalog
        .get(exercise_id)
        .ok_or_else(|| Error::UnknownExercise(exercise_id.to_string()))?;

    if let Some(curated) = catalog.alternatives.get(exercise_id) {
        for alt_id in curated {
            let Some(candidate) = catalog.get(alt_id) else {
                continue;
            };
            let equipment_ok = candidate
                .equipment
                .as_ref()
                .map_or(true, |eq| params.available_equipment.contains(eq));
            if equipment_ok && !params.disliked_exercises.contains(&candidate.id) {
                debug!(original = exercise_id, alternative = %candidate.id, "Curated alternative chosen");
                return Ok(Some(candidate.clone()));
            }
        }
    }

    let fallback = select_exercise(
        catalog,
        original.movement_pattern,
        params,
        &[exercise_id],
        week,
    );
    if let Some(exercise) = fallback {
        debug!(original = exercise_id, alternative = %exercise.id, "Cascade alternative chosen");
    }
    Ok(fallback.cloned())
}
