//! Warm-up and cool-down composition.
//!
//! Bookend blocks are supplementary, not the trained stimulus: a handful of
//! mobility or stretch entries aimed at the muscle groups the main block
//! actually touches, topped up from the generic pool when targeted matches
//! run out. Picks draw on the program-level seeded generator so bookends are
//! as reproducible as everything else.

use crate::rng::SeededRng;
use crate::types::{
    Catalog, Exercise, ExerciseCategory, GenerationParameters, Priority, RepTarget,
    ResolvedExercise,
};
use tracing::debug;

/// Minimum leftover minutes before a warm-up is added.
pub const WARMUP_THRESHOLD_MINUTES: u32 = 6;
/// Minimum leftover minutes before a cool-down is added.
pub const COOLDOWN_THRESHOLD_MINUTES: u32 = 4;

const BODYWEIGHT: &str = "bodyweight";

fn eligible(exercise: &Exercise, category: ExerciseCategory, params: &GenerationParameters) -> bool {
    exercise.category == category
        && !params.disliked_exercises.contains(&exercise.id)
        && match exercise.equipment.as_deref() {
            None | Some(BODYWEIGHT) => true,
            Some(eq) => params.available_equipment.contains(eq),
        }
}

/// Distinct muscle groups in first-encountered order across the main block.
fn touched_muscles(main: &[ResolvedExercise]) -> Vec<&str> {
    let mut seen = Vec::new();
    for exercise in main {
        for muscle in &exercise.muscle_groups {
            if !seen.contains(&muscle.as_str()) {
                seen.push(muscle.as_str());
            }
        }
    }
    seen
}

fn bookend_entry(
    exercise: &Exercise,
    order_index: u32,
    category: ExerciseCategory,
) -> ResolvedExercise {
    // cool-down entries are all timed at 30 seconds; warm-ups count reps
    // unless the name marks a hold or stretch
    let reps = match category {
        ExerciseCategory::CoolDown => RepTarget::Count(30),
        _ if exercise.name.contains("Hold") || exercise.name.contains("Stretch") => {
            RepTarget::Count(30)
        }
        _ => RepTarget::Count(10),
    };
    let rest_seconds = match category {
        ExerciseCategory::CoolDown => 10,
        _ => 15,
    };

    ResolvedExercise {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        sets: 1,
        reps,
        rest_seconds,
        order_index,
        movement_pattern: exercise.movement_pattern,
        muscle_groups: exercise.muscle_groups.clone(),
        notes: None,
        priority: Priority::Accessory,
    }
}

/// Compose a warm-up or cool-down block for a main block.
///
/// Targets `clamp(budget / 1.5, 3, 6)` entries: one per touched muscle group
/// (first four, in encounter order), then generic fill from whatever is left
/// in the category pool. Returns an empty block when the catalog has nothing
/// usable, which callers treat as "omit".
pub fn compose_block(
    catalog: &Catalog,
    main: &[ResolvedExercise],
    category: ExerciseCategory,
    budget_minutes: u32,
    params: &GenerationParameters,
    rng: &mut SeededRng,
) -> Vec<ResolvedExercise> {
    let target = (budget_minutes * 2 / 3).clamp(3, 6) as usize;

    let mut groups = touched_muscles(main);
    groups.truncate(4);

    let pool: Vec<&Exercise> = catalog
        .exercises
        .iter()
        .filter(|exercise| eligible(exercise, category, params))
        .collect();

    let mut picks: Vec<ResolvedExercise> = Vec::new();

    for group in &groups {
        let matches: Vec<&Exercise> = pool
            .iter()
            .copied()
            .filter(|exercise| {
                exercise.muscle_groups.iter().any(|m| m == group)
                    && !picks.iter().any(|p| p.exercise_id == exercise.id)
            })
            .collect();
        if let Some(&exercise) = rng.pick(&matches) {
            picks.push(bookend_entry(exercise, picks.len() as u32, category));
        }
    }

    picks.truncate(target);

    // top up from the generic pool when targeted picks fall short
    while picks.len() < target {
        let leftovers: Vec<&Exercise> = pool
            .iter()
            .copied()
            .filter(|exercise| !picks.iter().any(|p| p.exercise_id == exercise.id))
            .collect();
        match rng.pick(&leftovers) {
            Some(&exercise) => {
                picks.push(bookend_entry(exercise, picks.len() as u32, category))
            }
            None => break,
        }
    }

    debug!(
        ?category,
        entries = picks.len(),
        target,
        "Composed bookend block"
    );
    picks
}
