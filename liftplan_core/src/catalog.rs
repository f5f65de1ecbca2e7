//! Built-in exercise catalog and catalog loading.
//!
//! The default catalog covers every primary movement pattern across the
//! common home/gym equipment tiers, plus warm-up and cool-down material and
//! a curated alternatives relation. Callers may substitute their own catalog
//! from a JSON file with the same shape.

use crate::error::Result;
use crate::types::{Catalog, Exercise, ExerciseCategory, ExperienceLevel, MovementPattern};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
///
/// Prefer this over `build_default_catalog()` outside of tests; the catalog
/// is immutable after construction so one copy serves every generation call.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn exercise(
    id: &str,
    name: &str,
    pattern: MovementPattern,
    muscles: &[&str],
    equipment: Option<&str>,
    level: ExperienceLevel,
    compound: bool,
    instructions: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        movement_pattern: pattern,
        muscle_groups: muscles.iter().map(|m| m.to_string()).collect(),
        equipment: equipment.map(String::from),
        experience_level: level,
        is_compound: compound,
        category: ExerciseCategory::Normal,
        instructions: Some(instructions.to_string()),
    }
}

fn bookend(
    id: &str,
    name: &str,
    pattern: MovementPattern,
    muscles: &[&str],
    category: ExerciseCategory,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        movement_pattern: pattern,
        muscle_groups: muscles.iter().map(|m| m.to_string()).collect(),
        equipment: None,
        experience_level: ExperienceLevel::Beginner,
        is_compound: false,
        category,
        instructions: None,
    }
}

/// Builds the default catalog with built-in exercises and alternatives
pub fn build_default_catalog() -> Catalog {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use MovementPattern::*;

    let mut exercises = Vec::new();

    // ========================================================================
    // Squat
    // ========================================================================

    exercises.push(exercise(
        "bodyweight_squat",
        "Bodyweight Squat",
        Squat,
        &["quadriceps", "glutes"],
        Some("bodyweight"),
        Beginner,
        true,
        "Stand with feet shoulder-width apart, sit back and down until the thighs are parallel, drive back up.",
    ));
    exercises.push(exercise(
        "goblet_squat",
        "Goblet Squat",
        Squat,
        &["quadriceps", "glutes", "core"],
        Some("dumbbells"),
        Beginner,
        true,
        "Hold one dumbbell at your chest, squat between your knees, keep the torso tall.",
    ));
    exercises.push(exercise(
        "back_squat",
        "Barbell Back Squat",
        Squat,
        &["quadriceps", "glutes", "lower_back"],
        Some("barbell"),
        Intermediate,
        true,
        "Bar on the upper back, brace hard, squat to depth and stand.",
    ));
    exercises.push(exercise(
        "front_squat",
        "Barbell Front Squat",
        Squat,
        &["quadriceps", "core", "glutes"],
        Some("barbell"),
        Advanced,
        true,
        "Bar racked on the front delts, elbows high, squat upright.",
    ));

    // ========================================================================
    // Hinge
    // ========================================================================

    exercises.push(exercise(
        "glute_bridge",
        "Glute Bridge",
        Hinge,
        &["glutes", "hamstrings"],
        Some("bodyweight"),
        Beginner,
        true,
        "On your back with knees bent, drive the hips to the ceiling and squeeze.",
    ));
    exercises.push(exercise(
        "dumbbell_rdl",
        "Dumbbell Romanian Deadlift",
        Hinge,
        &["hamstrings", "glutes"],
        Some("dumbbells"),
        Beginner,
        true,
        "Soft knees, hinge at the hips, slide the dumbbells down the thighs until the hamstrings stretch.",
    ));
    exercises.push(exercise(
        "romanian_deadlift",
        "Barbell Romanian Deadlift",
        Hinge,
        &["hamstrings", "glutes", "lower_back"],
        Some("barbell"),
        Intermediate,
        true,
        "Hinge with a flat back, keep the bar close to the legs, stand by driving the hips forward.",
    ));
    exercises.push(exercise(
        "kettlebell_swing",
        "Kettlebell Swing",
        Hinge,
        &["glutes", "hamstrings", "core"],
        Some("kettlebell"),
        Intermediate,
        true,
        "Hike the bell back, snap the hips forward, let it float to chest height.",
    ));
    exercises.push(exercise(
        "deadlift",
        "Barbell Deadlift",
        Hinge,
        &["hamstrings", "glutes", "lower_back", "forearms"],
        Some("barbell"),
        Advanced,
        true,
        "Brace, push the floor away, keep the bar dragging up the shins.",
    ));

    // ========================================================================
    // Horizontal Push
    // ========================================================================

    exercises.push(exercise(
        "push_up",
        "Push-Up",
        PushHorizontal,
        &["chest", "triceps", "shoulders"],
        Some("bodyweight"),
        Beginner,
        true,
        "Rigid plank from head to heels, lower the chest to the floor, press away.",
    ));
    exercises.push(exercise(
        "incline_push_up",
        "Incline Push-Up",
        PushHorizontal,
        &["chest", "triceps", "shoulders"],
        Some("bodyweight"),
        Beginner,
        true,
        "Hands on a raised surface to reduce the load, keep the same rigid line.",
    ));
    exercises.push(exercise(
        "dumbbell_bench_press",
        "Dumbbell Bench Press",
        PushHorizontal,
        &["chest", "triceps", "shoulders"],
        Some("dumbbells"),
        Intermediate,
        true,
        "Lower the dumbbells to chest level with the elbows at about 45 degrees, press up and slightly in.",
    ));
    exercises.push(exercise(
        "bench_press",
        "Barbell Bench Press",
        PushHorizontal,
        &["chest", "triceps", "shoulders"],
        Some("barbell"),
        Intermediate,
        true,
        "Feet planted, shoulder blades pinned, touch the chest and press.",
    ));

    // ========================================================================
    // Vertical Push
    // ========================================================================

    exercises.push(exercise(
        "pike_push_up",
        "Pike Push-Up",
        PushVertical,
        &["shoulders", "triceps"],
        Some("bodyweight"),
        Beginner,
        true,
        "Hips high in a pike, lower the crown of the head toward the floor, press back.",
    ));
    exercises.push(exercise(
        "dumbbell_shoulder_press",
        "Dumbbell Shoulder Press",
        PushVertical,
        &["shoulders", "triceps"],
        Some("dumbbells"),
        Beginner,
        true,
        "Press the dumbbells from shoulder height to lockout without flaring the ribs.",
    ));
    exercises.push(exercise(
        "overhead_press",
        "Barbell Overhead Press",
        PushVertical,
        &["shoulders", "triceps", "core"],
        Some("barbell"),
        Intermediate,
        true,
        "Squeeze the glutes, press the bar overhead and push the head through.",
    ));

    // ========================================================================
    // Horizontal Pull
    // ========================================================================

    exercises.push(exercise(
        "inverted_row",
        "Inverted Row",
        PullHorizontal,
        &["back", "biceps"],
        Some("bodyweight"),
        Beginner,
        true,
        "Hang under a bar or table edge, pull the chest to it with a straight body.",
    ));
    exercises.push(exercise(
        "band_row",
        "Band Row",
        PullHorizontal,
        &["back", "biceps"],
        Some("resistance_bands"),
        Beginner,
        true,
        "Anchor the band, row the handles to your ribs, squeeze the shoulder blades.",
    ));
    exercises.push(exercise(
        "dumbbell_row",
        "One-Arm Dumbbell Row",
        PullHorizontal,
        &["back", "lats", "biceps"],
        Some("dumbbells"),
        Beginner,
        true,
        "One hand braced on a bench, row the dumbbell to the hip without twisting.",
    ));
    exercises.push(exercise(
        "barbell_row",
        "Barbell Bent-Over Row",
        PullHorizontal,
        &["back", "lats", "biceps"],
        Some("barbell"),
        Intermediate,
        true,
        "Hinge to near-parallel, row the bar to the lower ribs.",
    ));
    exercises.push(exercise(
        "seated_cable_row",
        "Seated Cable Row",
        PullHorizontal,
        &["back", "lats", "biceps"],
        Some("cable_machine"),
        Beginner,
        true,
        "Tall spine, pull the handle to the navel, control the return.",
    ));

    // ========================================================================
    // Vertical Pull
    // ========================================================================

    exercises.push(exercise(
        "lat_pulldown",
        "Lat Pulldown",
        PullVertical,
        &["lats", "back", "biceps"],
        Some("cable_machine"),
        Beginner,
        true,
        "Pull the bar to the collarbone with the chest up, no leaning back.",
    ));
    exercises.push(exercise(
        "band_pulldown",
        "Band Pulldown",
        PullVertical,
        &["lats", "back"],
        Some("resistance_bands"),
        Beginner,
        true,
        "Kneel under a high anchor, pull the elbows down to the ribs.",
    ));
    exercises.push(exercise(
        "negative_pull_up",
        "Negative Pull-Up",
        PullVertical,
        &["lats", "back", "biceps"],
        Some("pull_up_bar"),
        Beginner,
        true,
        "Jump to the top position, lower yourself on a slow five count.",
    ));
    exercises.push(exercise(
        "pull_up",
        "Pull-Up",
        PullVertical,
        &["lats", "back", "biceps"],
        Some("pull_up_bar"),
        Intermediate,
        true,
        "Dead hang, pull the chin over the bar without swinging.",
    ));
    exercises.push(exercise(
        "chin_up",
        "Chin-Up",
        PullVertical,
        &["lats", "biceps", "back"],
        Some("pull_up_bar"),
        Intermediate,
        true,
        "Underhand grip, pull the chin over the bar, control the descent.",
    ));

    // ========================================================================
    // Lunge
    // ========================================================================

    exercises.push(exercise(
        "step_up",
        "Step-Up",
        Lunge,
        &["quadriceps", "glutes"],
        Some("bodyweight"),
        Beginner,
        true,
        "Step onto a sturdy box, drive through the front heel, stand tall.",
    ));
    exercises.push(exercise(
        "bodyweight_lunge",
        "Bodyweight Lunge",
        Lunge,
        &["quadriceps", "glutes"],
        Some("bodyweight"),
        Beginner,
        true,
        "Step forward, lower the back knee toward the floor, push back to standing.",
    ));
    exercises.push(exercise(
        "walking_lunge",
        "Walking Lunge",
        Lunge,
        &["quadriceps", "glutes", "hamstrings"],
        Some("bodyweight"),
        Intermediate,
        true,
        "Alternate long strides, torso tall, front knee tracking the toes.",
    ));
    exercises.push(exercise(
        "dumbbell_lunge",
        "Dumbbell Lunge",
        Lunge,
        &["quadriceps", "glutes"],
        Some("dumbbells"),
        Intermediate,
        true,
        "Lunge holding dumbbells at your sides, short controlled steps.",
    ));
    exercises.push(exercise(
        "bulgarian_split_squat",
        "Bulgarian Split Squat",
        Lunge,
        &["quadriceps", "glutes", "hamstrings"],
        Some("bodyweight"),
        Advanced,
        true,
        "Rear foot elevated, drop straight down over the front foot.",
    ));

    // ========================================================================
    // Carry / Rotation
    // ========================================================================

    exercises.push(exercise(
        "farmers_carry",
        "Farmer's Carry",
        Carry,
        &["forearms", "core", "shoulders"],
        Some("dumbbells"),
        Beginner,
        true,
        "Heavy dumbbells at your sides, walk tall with short quick steps.",
    ));
    exercises.push(exercise(
        "suitcase_carry",
        "Suitcase Carry",
        Carry,
        &["core", "forearms", "shoulders"],
        Some("kettlebell"),
        Intermediate,
        true,
        "One heavy bell, resist the side lean while you walk.",
    ));
    exercises.push(exercise(
        "russian_twist",
        "Russian Twist",
        Rotation,
        &["core"],
        Some("bodyweight"),
        Beginner,
        false,
        "Seated, lean back slightly, rotate the ribcage side to side.",
    ));
    exercises.push(exercise(
        "pallof_press",
        "Pallof Press",
        Rotation,
        &["core", "shoulders"],
        Some("resistance_bands"),
        Beginner,
        false,
        "Band at chest height, press straight out and resist the pull to rotate.",
    ));
    exercises.push(exercise(
        "cable_woodchop",
        "Cable Woodchop",
        Rotation,
        &["core", "shoulders"],
        Some("cable_machine"),
        Intermediate,
        true,
        "Pull the handle diagonally across the body with long arms.",
    ));

    // ========================================================================
    // Isolation
    // ========================================================================

    exercises.push(exercise(
        "plank",
        "Plank",
        Isolation,
        &["core"],
        Some("bodyweight"),
        Beginner,
        false,
        "Forearms down, squeeze glutes and abs, hold a straight line.",
    ));
    exercises.push(exercise(
        "crunch",
        "Crunch",
        Isolation,
        &["core"],
        Some("bodyweight"),
        Beginner,
        false,
        "Curl the ribs toward the pelvis, lower with control.",
    ));
    exercises.push(exercise(
        "calf_raise",
        "Standing Calf Raise",
        Isolation,
        &["calves"],
        Some("bodyweight"),
        Beginner,
        false,
        "Rise onto the balls of the feet, pause, lower slowly.",
    ));
    exercises.push(exercise(
        "dumbbell_curl",
        "Dumbbell Curl",
        Isolation,
        &["biceps"],
        Some("dumbbells"),
        Beginner,
        false,
        "Curl without swinging, elbows pinned to the ribs.",
    ));
    exercises.push(exercise(
        "hammer_curl",
        "Hammer Curl",
        Isolation,
        &["biceps", "forearms"],
        Some("dumbbells"),
        Beginner,
        false,
        "Neutral grip curl, squeeze at the top.",
    ));
    exercises.push(exercise(
        "lateral_raise",
        "Dumbbell Lateral Raise",
        Isolation,
        &["shoulders"],
        Some("dumbbells"),
        Beginner,
        false,
        "Raise to shoulder height with a slight elbow bend, no shrugging.",
    ));
    exercises.push(exercise(
        "triceps_extension",
        "Overhead Triceps Extension",
        Isolation,
        &["triceps"],
        Some("dumbbells"),
        Intermediate,
        false,
        "Both hands on one dumbbell overhead, bend only at the elbows.",
    ));
    exercises.push(exercise(
        "triceps_pushdown",
        "Triceps Pushdown",
        Isolation,
        &["triceps"],
        Some("cable_machine"),
        Beginner,
        false,
        "Elbows pinned, push the bar to lockout, resist the return.",
    ));
    exercises.push(exercise(
        "band_face_pull",
        "Band Face Pull",
        Isolation,
        &["shoulders", "back"],
        Some("resistance_bands"),
        Beginner,
        false,
        "Pull the band to your face with elbows high, thumbs back.",
    ));
    exercises.push(exercise(
        "hanging_knee_raise",
        "Hanging Knee Raise",
        Isolation,
        &["core", "hip_flexors"],
        Some("pull_up_bar"),
        Intermediate,
        false,
        "Hang from the bar, lift the knees to hip height without swinging.",
    ));

    // ========================================================================
    // Warm-up
    // ========================================================================

    exercises.push(bookend(
        "arm_circles",
        "Arm Circles",
        Mobility,
        &["shoulders"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "leg_swings",
        "Leg Swings",
        Mobility,
        &["quadriceps", "hip_flexors", "hamstrings"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "hip_circles",
        "Hip Circles",
        Mobility,
        &["hip_flexors", "glutes"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "cat_cow",
        "Cat-Cow",
        Mobility,
        &["lower_back", "core"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "jumping_jacks",
        "Jumping Jacks",
        Mobility,
        &["shoulders", "calves"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "inchworm",
        "Inchworm",
        Mobility,
        &["hamstrings", "core", "shoulders"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "bodyweight_good_morning",
        "Bodyweight Good Morning",
        Mobility,
        &["hamstrings", "lower_back"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "torso_rotation",
        "Standing Torso Rotation",
        Mobility,
        &["core", "back"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "scapular_push_up",
        "Scapular Push-Up",
        Mobility,
        &["shoulders", "chest"],
        ExerciseCategory::WarmUp,
    ));
    exercises.push(bookend(
        "worlds_greatest_stretch",
        "World's Greatest Stretch",
        Stretch,
        &["hip_flexors", "hamstrings", "core"],
        ExerciseCategory::WarmUp,
    ));

    // ========================================================================
    // Cool-down
    // ========================================================================

    exercises.push(bookend(
        "hamstring_stretch",
        "Seated Hamstring Stretch",
        Stretch,
        &["hamstrings"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "quad_stretch",
        "Standing Quad Stretch",
        Stretch,
        &["quadriceps"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "chest_stretch",
        "Doorway Chest Stretch",
        Stretch,
        &["chest", "shoulders"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "childs_pose",
        "Child's Pose Hold",
        Stretch,
        &["lower_back", "lats"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "pigeon_pose",
        "Pigeon Pose Hold",
        Stretch,
        &["glutes", "hip_flexors"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "hip_flexor_stretch",
        "Kneeling Hip Flexor Stretch",
        Stretch,
        &["hip_flexors", "quadriceps"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "lat_stretch",
        "Overhead Lat Stretch",
        Stretch,
        &["lats", "back"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "calf_stretch",
        "Wall Calf Stretch",
        Stretch,
        &["calves"],
        ExerciseCategory::CoolDown,
    ));
    exercises.push(bookend(
        "box_breathing",
        "Box Breathing",
        Breathing,
        &["core"],
        ExerciseCategory::CoolDown,
    ));

    // ========================================================================
    // Curated Alternatives
    // ========================================================================

    let mut alternatives: HashMap<String, Vec<String>> = HashMap::new();
    let mut alt = |primary: &str, alts: &[&str]| {
        alternatives.insert(
            primary.to_string(),
            alts.iter().map(|a| a.to_string()).collect(),
        );
    };
    alt("back_squat", &["front_squat", "goblet_squat"]);
    alt("bench_press", &["dumbbell_bench_press", "push_up"]);
    alt("deadlift", &["romanian_deadlift", "kettlebell_swing"]);
    alt("overhead_press", &["dumbbell_shoulder_press", "pike_push_up"]);
    alt("barbell_row", &["dumbbell_row", "seated_cable_row"]);
    alt("pull_up", &["lat_pulldown", "negative_pull_up"]);
    alt("romanian_deadlift", &["dumbbell_rdl", "glute_bridge"]);
    alt("dumbbell_lunge", &["bodyweight_lunge", "step_up"]);

    Catalog {
        exercises,
        alternatives,
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// The file carries the same shape as the built-in catalog; callers
    /// should run `validate` before generating against it.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            exercises = catalog.exercises.len(),
            "Loaded exercise catalog"
        );
        Ok(catalog)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty id".to_string());
            } else if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise id '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.muscle_groups.is_empty() {
                errors.push(format!("Exercise '{}' has no muscle groups", exercise.id));
            }
        }

        for (id, alts) in &self.alternatives {
            if self.get(id).is_none() {
                errors.push(format!("Alternatives listed for unknown exercise '{}'", id));
            }
            for alt in alts {
                if self.get(alt).is_none() {
                    errors.push(format!(
                        "Alternative '{}' for '{}' is not in the catalog",
                        alt, id
                    ));
                }
                if alt == id {
                    errors.push(format!("Exercise '{}' lists itself as an alternative", id));
                }
            }
        }

        // a usable catalog covers every primary pattern and both bookends
        for pattern in MovementPattern::PRIMARY {
            let covered = self.exercises.iter().any(|e| {
                e.category == ExerciseCategory::Normal && e.movement_pattern == pattern
            });
            if !covered {
                errors.push(format!("No exercises cover the {} pattern", pattern));
            }
        }
        if !self
            .exercises
            .iter()
            .any(|e| e.category == ExerciseCategory::WarmUp)
        {
            errors.push("Catalog has no warm-up exercises".to_string());
        }
        if !self
            .exercises
            .iter()
            .any(|e| e.category == ExerciseCategory::CoolDown)
        {
            errors.push("Catalog has no cool-down exercises".to_string());
        }

        errors
    }
}
