//! Core domain types for the liftplan engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise catalog rows and their vocabulary (patterns, categories)
//! - Generation parameters supplied by the caller
//! - Slots (template intermediates) and resolved plan output
//! - Program archetypes and session labels

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Vocabulary Enums
// ============================================================================

/// Training experience level, ordered from least to most experienced.
///
/// Exercise eligibility is inclusive downward: an intermediate user may be
/// given beginner and intermediate exercises, never advanced ones.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Unknown experience level: {}", s)),
        }
    }
}

/// What the user is primarily training for.
///
/// Focus determines rep ranges and rest durations; experience determines
/// set counts (see the volume module).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    Strength,
    Hypertrophy,
    Endurance,
    GeneralFitness,
}

impl fmt::Display for TrainingFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Hypertrophy => write!(f, "hypertrophy"),
            Self::Endurance => write!(f, "endurance"),
            Self::GeneralFitness => write!(f, "general_fitness"),
        }
    }
}

impl FromStr for TrainingFocus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            "general_fitness" => Ok(Self::GeneralFitness),
            _ => Err(format!("Unknown training focus: {}", s)),
        }
    }
}

/// Biomechanical movement pattern trained by an exercise.
///
/// The first seven are the primary patterns with their own weekly set caps;
/// carry, rotation and isolation pool into a shared accessory bucket.
/// Mobility, stretch and breathing are the warm-up/cool-down vocabulary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    Squat,
    Hinge,
    PushVertical,
    PushHorizontal,
    PullVertical,
    PullHorizontal,
    Lunge,
    Carry,
    Rotation,
    Isolation,
    Mobility,
    Stretch,
    Breathing,
}

impl MovementPattern {
    /// The seven patterns that carry their own weekly set cap.
    pub const PRIMARY: [MovementPattern; 7] = [
        MovementPattern::Squat,
        MovementPattern::Hinge,
        MovementPattern::PushVertical,
        MovementPattern::PushHorizontal,
        MovementPattern::PullVertical,
        MovementPattern::PullHorizontal,
        MovementPattern::Lunge,
    ];

    pub fn is_primary(&self) -> bool {
        Self::PRIMARY.contains(self)
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::PushVertical => "push_vertical",
            Self::PushHorizontal => "push_horizontal",
            Self::PullVertical => "pull_vertical",
            Self::PullHorizontal => "pull_horizontal",
            Self::Lunge => "lunge",
            Self::Carry => "carry",
            Self::Rotation => "rotation",
            Self::Isolation => "isolation",
            Self::Mobility => "mobility",
            Self::Stretch => "stretch",
            Self::Breathing => "breathing",
        };
        write!(f, "{}", token)
    }
}

/// Catalog category separating trainable work from bookend material.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Normal,
    WarmUp,
    CoolDown,
}

/// Priority tier of a slot or resolved exercise.
///
/// Primary work is the session's non-negotiable core and is never trimmed by
/// the time-boxer; accessory work absorbs all duration reductions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Primary,
    Accessory,
}

/// Label describing which patterns a session trains, derived from its slots.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    FullBody,
    Push,
    Pull,
    Legs,
    Mixed,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullBody => write!(f, "full_body"),
            Self::Push => write!(f, "push"),
            Self::Pull => write!(f, "pull"),
            Self::Legs => write!(f, "legs"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Weekly split shape, chosen from how many days the user can train.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramArchetype {
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl ProgramArchetype {
    /// Map weekly training frequency to a split shape.
    ///
    /// Three or fewer days fit full-body sessions, exactly four fits an
    /// upper/lower split, five or more a push/pull/legs rotation.
    pub fn for_availability(days: u32) -> Self {
        if days <= 3 {
            Self::FullBody
        } else if days == 4 {
            Self::UpperLower
        } else {
            Self::PushPullLegs
        }
    }

    /// Length of the day-template cycle for this split.
    pub fn cycle_length(&self) -> u32 {
        match self {
            Self::FullBody => 1,
            Self::UpperLower => 2,
            Self::PushPullLegs => 3,
        }
    }

    /// Human title for the split as a whole.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperLower => "Upper/Lower",
            Self::PushPullLegs => "Push/Pull/Legs",
        }
    }

    /// Human title for a given day index ("Upper", "Legs", ...).
    pub fn day_title(&self, day_index: u32) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperLower => {
                if day_index % 2 == 0 {
                    "Upper"
                } else {
                    "Lower"
                }
            }
            Self::PushPullLegs => match day_index % 3 {
                0 => "Push",
                1 => "Pull",
                _ => "Legs",
            },
        }
    }
}

impl fmt::Display for ProgramArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Rep Targets
// ============================================================================

/// Repetition target for one exercise: a literal count or a working range.
///
/// Serializes the way downstream consumers expect it: a bare number for
/// counts, a `"min-max"` string for ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepTarget {
    Count(u32),
    Range { min: u32, max: u32 },
}

impl fmt::Display for RepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

impl FromStr for RepTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lo, hi)) = s.split_once('-') {
            let min = lo
                .trim()
                .parse()
                .map_err(|_| format!("Invalid rep range: {}", s))?;
            let max = hi
                .trim()
                .parse()
                .map_err(|_| format!("Invalid rep range: {}", s))?;
            Ok(Self::Range { min, max })
        } else {
            s.trim()
                .parse()
                .map(Self::Count)
                .map_err(|_| format!("Invalid rep count: {}", s))
        }
    }
}

impl Serialize for RepTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Range { .. } => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RepTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RepTargetVisitor;

        impl<'de> serde::de::Visitor<'de> for RepTargetVisitor {
            type Value = RepTarget;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rep count or a \"min-max\" range string")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<RepTarget, E> {
                u32::try_from(v)
                    .map(RepTarget::Count)
                    .map_err(|_| E::custom("rep count out of range"))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<RepTarget, E> {
                u32::try_from(v)
                    .map(RepTarget::Count)
                    .map_err(|_| E::custom("rep count out of range"))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<RepTarget, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(RepTargetVisitor)
    }
}

// ============================================================================
// Catalog Row
// ============================================================================

/// A catalog exercise, read-only to the engine.
///
/// `equipment` of `None` means nothing is needed; `"bodyweight"` is the
/// conventional tag for calisthenics that selection may always fall back to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub movement_pattern: MovementPattern,
    pub muscle_groups: Vec<String>,
    pub equipment: Option<String>,
    pub experience_level: ExperienceLevel,
    pub is_compound: bool,
    pub category: ExerciseCategory,
    pub instructions: Option<String>,
}

impl Exercise {
    /// First 100 characters of the instructions, for plan notes.
    pub fn short_note(&self) -> Option<String> {
        self.instructions
            .as_ref()
            .map(|text| text.chars().take(100).collect())
    }
}

/// The exercise catalog plus curated alternative suggestions.
///
/// Exercises live in a `Vec` rather than a map: candidate filtering must
/// iterate in a stable order for seeded picks to be reproducible.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    /// Exercise id to preferred replacement ids, best first.
    #[serde(default)]
    pub alternatives: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }
}

// ============================================================================
// Generation Input
// ============================================================================

/// Caller-supplied parameters for one generation call.
///
/// Equipment and dislikes are ordered sets so that their serialization into
/// seed keys is stable across runs and platforms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationParameters {
    pub experience: ExperienceLevel,
    pub focus: TrainingFocus,
    pub weekly_availability: u32,
    pub available_equipment: BTreeSet<String>,
    pub disliked_exercises: BTreeSet<String>,
    pub preferred_duration_minutes: u32,
}

impl GenerationParameters {
    /// Normalize out-of-range preference inputs instead of rejecting them.
    ///
    /// Weekly availability lands in [1, 7]. These are low-stakes preference
    /// values, so a best-effort plan beats a hard failure.
    pub fn clamped(&self) -> Self {
        let mut params = self.clone();
        params.weekly_availability = params.weekly_availability.clamp(1, 7);
        params
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            experience: ExperienceLevel::Beginner,
            focus: TrainingFocus::GeneralFitness,
            weekly_availability: 3,
            available_equipment: BTreeSet::from(["bodyweight".to_string()]),
            disliked_exercises: BTreeSet::new(),
            preferred_duration_minutes: 45,
        }
    }
}

// ============================================================================
// Template and Output Types
// ============================================================================

/// One templated exercise slot, before catalog resolution.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub pattern: MovementPattern,
    pub sets: u32,
    pub reps: RepTarget,
    pub priority: Priority,
}

/// A slot resolved against the catalog, ready to perform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: u32,
    pub reps: RepTarget,
    pub rest_seconds: u32,
    pub order_index: u32,
    pub movement_pattern: MovementPattern,
    pub muscle_groups: Vec<String>,
    pub notes: Option<String>,
    pub priority: Priority,
}

/// One generated training day.
///
/// Warm-up and cool-down are omitted entirely (not just empty) when the
/// session has no time budget left for them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedSession {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup: Option<Vec<ResolvedExercise>>,
    pub main: Vec<ResolvedExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<Vec<ResolvedExercise>>,
    pub estimated_minutes: u32,
    pub session_type: SessionType,
}

/// A full generated week: one session per available training day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedProgram {
    pub archetype: ProgramArchetype,
    pub sessions: Vec<GeneratedSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_levels_are_ordered() {
        assert!(ExperienceLevel::Beginner < ExperienceLevel::Intermediate);
        assert!(ExperienceLevel::Intermediate < ExperienceLevel::Advanced);
    }

    #[test]
    fn test_enum_tokens_roundtrip() {
        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ] {
            assert_eq!(level.to_string().parse::<ExperienceLevel>(), Ok(level));
        }
        for focus in [
            TrainingFocus::Strength,
            TrainingFocus::Hypertrophy,
            TrainingFocus::Endurance,
            TrainingFocus::GeneralFitness,
        ] {
            assert_eq!(focus.to_string().parse::<TrainingFocus>(), Ok(focus));
        }
    }

    #[test]
    fn test_archetype_from_availability() {
        assert_eq!(
            ProgramArchetype::for_availability(1),
            ProgramArchetype::FullBody
        );
        assert_eq!(
            ProgramArchetype::for_availability(3),
            ProgramArchetype::FullBody
        );
        assert_eq!(
            ProgramArchetype::for_availability(4),
            ProgramArchetype::UpperLower
        );
        assert_eq!(
            ProgramArchetype::for_availability(5),
            ProgramArchetype::PushPullLegs
        );
        assert_eq!(
            ProgramArchetype::for_availability(7),
            ProgramArchetype::PushPullLegs
        );
    }

    #[test]
    fn test_archetype_display_titles() {
        assert_eq!(ProgramArchetype::FullBody.to_string(), "Full Body");
        assert_eq!(ProgramArchetype::UpperLower.to_string(), "Upper/Lower");
        assert_eq!(ProgramArchetype::PushPullLegs.to_string(), "Push/Pull/Legs");
    }

    #[test]
    fn test_day_titles_cycle() {
        let ppl = ProgramArchetype::PushPullLegs;
        assert_eq!(ppl.day_title(0), "Push");
        assert_eq!(ppl.day_title(1), "Pull");
        assert_eq!(ppl.day_title(2), "Legs");
        assert_eq!(ppl.day_title(3), "Push");

        let ul = ProgramArchetype::UpperLower;
        assert_eq!(ul.day_title(0), "Upper");
        assert_eq!(ul.day_title(1), "Lower");
        assert_eq!(ul.day_title(2), "Upper");
    }

    #[test]
    fn test_rep_target_serde_shapes() {
        let count = serde_json::to_string(&RepTarget::Count(10)).unwrap();
        assert_eq!(count, "10");

        let range = serde_json::to_string(&RepTarget::Range { min: 6, max: 8 }).unwrap();
        assert_eq!(range, "\"6-8\"");

        let parsed: RepTarget = serde_json::from_str("\"12-15\"").unwrap();
        assert_eq!(parsed, RepTarget::Range { min: 12, max: 15 });

        let parsed: RepTarget = serde_json::from_str("30").unwrap();
        assert_eq!(parsed, RepTarget::Count(30));
    }

    #[test]
    fn test_parameter_clamping() {
        let mut params = GenerationParameters::default();
        params.weekly_availability = 0;
        assert_eq!(params.clamped().weekly_availability, 1);

        params.weekly_availability = 12;
        assert_eq!(params.clamped().weekly_availability, 7);

        params.weekly_availability = 5;
        assert_eq!(params.clamped().weekly_availability, 5);
    }

    #[test]
    fn test_short_note_truncates_on_char_boundary() {
        let exercise = Exercise {
            id: "x".into(),
            name: "X".into(),
            movement_pattern: MovementPattern::Squat,
            muscle_groups: vec!["quadriceps".into()],
            equipment: None,
            experience_level: ExperienceLevel::Beginner,
            is_compound: true,
            category: ExerciseCategory::Normal,
            instructions: Some("é".repeat(150)),
        };

        let note = exercise.short_note().unwrap();
        assert_eq!(note.chars().count(), 100);
    }
}
