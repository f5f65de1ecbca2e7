//! Program generation engine.
//!
//! Ties the pipeline together for one weekly program:
//! - Volume planner computes weekly caps and the sets/reps scheme once
//! - Day templates emit pattern slots for each training day
//! - The selector resolves slots against the catalog, drawing down caps
//! - The time-boxer fits each day into the preferred duration
//! - The composer bookends each day with warm-up and cool-down blocks
//!
//! Generation is a pure function of catalog snapshot, parameters and date:
//! no clocks, no ambient randomness, no shared mutable state between calls.

use crate::rng::{program_seed_key, week_token, SeededRng};
use crate::selector::select_exercise;
use crate::template::{day_templates, session_type};
use crate::timebox::{block_minutes, timebox};
use crate::types::{
    Catalog, ExerciseCategory, GeneratedProgram, GeneratedSession, GenerationParameters,
    ProgramArchetype, ResolvedExercise, Slot,
};
use crate::volume::{rep_scheme, rest_seconds, weekly_targets, CapLedger};
use crate::warmup::{compose_block, COOLDOWN_THRESHOLD_MINUTES, WARMUP_THRESHOLD_MINUTES};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

/// Generate a full weekly program.
///
/// `today` anchors the calendar week: calls on any day of the same week with
/// the same parameters and catalog return byte-identical programs, and the
/// following week reshuffles. Out-of-range parameters are clamped rather
/// than rejected.
pub fn generate_program(
    catalog: &Catalog,
    params: &GenerationParameters,
    today: NaiveDate,
) -> GeneratedProgram {
    let params = params.clamped();
    let week = week_token(today);
    let archetype = ProgramArchetype::for_availability(params.weekly_availability);
    let targets = weekly_targets(&params);
    let scheme = rep_scheme(&params);
    let templates = day_templates(archetype, &scheme);

    let mut ledger = CapLedger::new(&targets);
    let mut program_rng = SeededRng::from_key(&program_seed_key(&params, &week));

    info!(
        ?archetype,
        days = params.weekly_availability,
        week = %week,
        "Generating weekly program"
    );

    let mut sessions = Vec::with_capacity(params.weekly_availability as usize);
    for day in 0..params.weekly_availability {
        let template = &templates[(day % archetype.cycle_length()) as usize];
        let resolved = populate_day(catalog, template, &params, &mut ledger, &week);
        let main = timebox(resolved, params.preferred_duration_minutes, params.focus);
        let main_minutes = block_minutes(&main);

        // bookends only when the preferred duration leaves room for them
        let mut estimated = main_minutes;
        let headroom = params
            .preferred_duration_minutes
            .saturating_sub(main_minutes);

        let warmup = if headroom >= WARMUP_THRESHOLD_MINUTES {
            let block = compose_block(
                catalog,
                &main,
                ExerciseCategory::WarmUp,
                WARMUP_THRESHOLD_MINUTES,
                &params,
                &mut program_rng,
            );
            if block.is_empty() {
                None
            } else {
                estimated += WARMUP_THRESHOLD_MINUTES;
                Some(block)
            }
        } else {
            None
        };

        let after_warmup = if warmup.is_some() {
            headroom.saturating_sub(WARMUP_THRESHOLD_MINUTES)
        } else {
            headroom
        };
        let cooldown = if after_warmup >= COOLDOWN_THRESHOLD_MINUTES {
            let block = compose_block(
                catalog,
                &main,
                ExerciseCategory::CoolDown,
                COOLDOWN_THRESHOLD_MINUTES,
                &params,
                &mut program_rng,
            );
            if block.is_empty() {
                None
            } else {
                estimated += COOLDOWN_THRESHOLD_MINUTES;
                Some(block)
            }
        } else {
            None
        };

        let round = day / archetype.cycle_length() + 1;
        let name = format!("{} {}", archetype.day_title(day), round);
        debug!(
            session = %name,
            exercises = main.len(),
            minutes = estimated,
            "Generated session"
        );

        sessions.push(GeneratedSession {
            name,
            warmup,
            main,
            cooldown,
            estimated_minutes: estimated,
            session_type: session_type(template),
        });
    }

    GeneratedProgram {
        archetype,
        sessions,
    }
}

/// Resolve one day's template slots against the catalog.
///
/// Slots are skipped when the cascade finds nothing or when the resolved
/// pattern's weekly cap is spent; everything else gets its set count reduced
/// to whatever the cap still allows.
fn populate_day(
    catalog: &Catalog,
    template: &[Slot],
    params: &GenerationParameters,
    ledger: &mut CapLedger,
    week: &str,
) -> Vec<ResolvedExercise> {
    let mut resolved: Vec<ResolvedExercise> = Vec::new();

    for slot in template {
        let used: Vec<&str> = resolved.iter().map(|r| r.exercise_id.as_str()).collect();
        let Some(exercise) = select_exercise(catalog, slot.pattern, params, &used, week) else {
            continue;
        };
        let Some(sets) = ledger.grant(exercise.movement_pattern, slot.sets) else {
            continue;
        };

        resolved.push(ResolvedExercise {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets,
            reps: slot.reps,
            rest_seconds: rest_seconds(params.focus, slot.priority),
            order_index: resolved.len() as u32,
            movement_pattern: exercise.movement_pattern,
            muscle_groups: exercise.muscle_groups.clone(),
            notes: exercise.short_note(),
            priority: slot.priority,
        });
    }

    resolved
}

/// The session to perform on a given date: weekday modulo session count.
pub fn todays_session(program: &GeneratedProgram, today: NaiveDate) -> Option<&GeneratedSession> {
    if program.sessions.is_empty() {
        return None;
    }
    let index = today.weekday().num_days_from_sunday() as usize % program.sessions.len();
    program.sessions.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;
    use crate::types::{ExperienceLevel, MovementPattern, Priority, RepTarget, TrainingFocus};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(
        focus: TrainingFocus,
        experience: ExperienceLevel,
        availability: u32,
        equipment: &[&str],
    ) -> GenerationParameters {
        GenerationParameters {
            focus,
            experience,
            weekly_availability: availability,
            available_equipment: equipment.iter().map(|s| s.to_string()).collect(),
            disliked_exercises: BTreeSet::new(),
            preferred_duration_minutes: 45,
        }
    }

    #[test]
    fn test_generation_is_byte_identical_within_a_week() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::Hypertrophy,
            ExperienceLevel::Intermediate,
            4,
            &["bodyweight", "dumbbells", "barbell"],
        );

        // both dates fall in day-of-year bucket 9 (2025-w9)
        let first = generate_program(catalog, &p, date(2025, 3, 5));
        let second = generate_program(catalog, &p, date(2025, 3, 11));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_three_day_strength_program_is_full_body() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::Strength,
            ExperienceLevel::Intermediate,
            3,
            &["bodyweight", "dumbbells"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        assert_eq!(program.archetype, ProgramArchetype::FullBody);
        assert_eq!(program.sessions.len(), 3);
        for session in &program.sessions {
            let count = session.main.len();
            assert!(
                (4..=6).contains(&count),
                "expected 4-6 main exercises, got {}",
                count
            );
            for exercise in session.main.iter().filter(|e| e.priority == Priority::Primary) {
                assert_eq!(exercise.reps, RepTarget::Range { min: 3, max: 5 });
            }
        }
    }

    #[test]
    fn test_four_day_program_alternates_upper_lower() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::GeneralFitness,
            ExperienceLevel::Intermediate,
            4,
            &["bodyweight", "dumbbells", "barbell"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        assert_eq!(program.archetype, ProgramArchetype::UpperLower);
        let names: Vec<&str> = program
            .sessions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Upper 1", "Lower 1", "Upper 2", "Lower 2"]);
    }

    #[test]
    fn test_six_day_program_cycles_push_pull_legs() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::Hypertrophy,
            ExperienceLevel::Intermediate,
            6,
            &["bodyweight", "dumbbells", "barbell", "pull_up_bar"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        assert_eq!(program.archetype, ProgramArchetype::PushPullLegs);
        assert_eq!(program.sessions.len(), 6);

        let names: Vec<&str> = program
            .sessions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Push 1", "Pull 1", "Legs 1", "Push 2", "Pull 2", "Legs 2"]
        );
        // day 3 reuses day 0's template
        assert_eq!(
            program.sessions[3].session_type,
            program.sessions[0].session_type
        );
    }

    #[test]
    fn test_weekly_caps_hold_across_the_program() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::Hypertrophy,
            ExperienceLevel::Advanced,
            6,
            &["bodyweight", "dumbbells", "barbell", "pull_up_bar", "cable_machine"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));
        let targets = weekly_targets(&p);

        let mut totals: std::collections::HashMap<MovementPattern, u32> =
            std::collections::HashMap::new();
        for session in &program.sessions {
            for exercise in &session.main {
                *totals.entry(exercise.movement_pattern).or_insert(0) += exercise.sets;
            }
        }

        for pattern in MovementPattern::PRIMARY {
            let total = totals.get(&pattern).copied().unwrap_or(0);
            assert!(
                total <= targets.primary,
                "{} used {} sets, cap {}",
                pattern,
                total,
                targets.primary
            );
        }
        let accessory_total: u32 = [
            MovementPattern::Isolation,
            MovementPattern::Carry,
            MovementPattern::Rotation,
        ]
        .iter()
        .map(|p| totals.get(p).copied().unwrap_or(0))
        .sum();
        assert!(accessory_total <= targets.accessory * 2);
    }

    #[test]
    fn test_no_duplicate_exercises_within_a_session() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::GeneralFitness,
            ExperienceLevel::Advanced,
            7,
            &["bodyweight", "dumbbells", "barbell", "kettlebell"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        for session in &program.sessions {
            let mut ids: Vec<&str> = session.main.iter().map(|e| e.exercise_id.as_str()).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(before, ids.len(), "duplicate exercise in {}", session.name);
        }
    }

    #[test]
    fn test_equipment_is_respected_or_bodyweight() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::Strength,
            ExperienceLevel::Intermediate,
            5,
            &["dumbbells"],
        );
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        for session in &program.sessions {
            for exercise in &session.main {
                let row = catalog.get(&exercise.exercise_id).unwrap();
                match row.equipment.as_deref() {
                    None | Some("bodyweight") => {}
                    Some(eq) => assert!(
                        p.available_equipment.contains(eq),
                        "{} requires unavailable {}",
                        exercise.exercise_id,
                        eq
                    ),
                }
            }
        }
    }

    #[test]
    fn test_disliked_exercises_never_appear() {
        let catalog = get_default_catalog();
        let mut p = params(
            TrainingFocus::GeneralFitness,
            ExperienceLevel::Intermediate,
            3,
            &["bodyweight", "dumbbells"],
        );
        p.disliked_exercises.insert("push_up".to_string());
        p.disliked_exercises.insert("goblet_squat".to_string());
        p.disliked_exercises.insert("leg_swings".to_string());
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        for session in &program.sessions {
            let all = session
                .main
                .iter()
                .chain(session.warmup.iter().flatten())
                .chain(session.cooldown.iter().flatten());
            for exercise in all {
                assert!(
                    !p.disliked_exercises.contains(&exercise.exercise_id),
                    "disliked {} appeared in {}",
                    exercise.exercise_id,
                    session.name
                );
            }
        }
    }

    #[test]
    fn test_tight_budget_trims_to_primaries() {
        let catalog = get_default_catalog();
        let mut p = params(
            TrainingFocus::Hypertrophy,
            ExperienceLevel::Advanced,
            3,
            &["bodyweight", "dumbbells", "barbell"],
        );
        p.preferred_duration_minutes = 20;
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        for session in &program.sessions {
            let fits = block_minutes(&session.main) <= 20;
            let only_primaries = session
                .main
                .iter()
                .all(|e| e.priority == Priority::Primary);
            assert!(fits || only_primaries, "session {} not trimmed", session.name);
        }
    }

    #[test]
    fn test_availability_is_clamped() {
        let catalog = get_default_catalog();
        let mut p = params(
            TrainingFocus::GeneralFitness,
            ExperienceLevel::Beginner,
            9,
            &["bodyweight"],
        );
        assert_eq!(generate_program(catalog, &p, date(2025, 6, 2)).sessions.len(), 7);

        p.weekly_availability = 0;
        assert_eq!(generate_program(catalog, &p, date(2025, 6, 2)).sessions.len(), 1);
    }

    #[test]
    fn test_bookends_fit_in_leftover_time() {
        let catalog = get_default_catalog();
        let mut p = params(
            TrainingFocus::Endurance,
            ExperienceLevel::Beginner,
            2,
            &["bodyweight"],
        );
        p.preferred_duration_minutes = 60;
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        for session in &program.sessions {
            let warmup = session.warmup.as_ref().expect("warm-up expected");
            let cooldown = session.cooldown.as_ref().expect("cool-down expected");
            assert_eq!(warmup.len(), 4);
            assert_eq!(cooldown.len(), 3);
            assert_eq!(
                session.estimated_minutes,
                block_minutes(&session.main)
                    + WARMUP_THRESHOLD_MINUTES
                    + COOLDOWN_THRESHOLD_MINUTES
            );
        }
    }

    #[test]
    fn test_no_bookends_when_main_block_fills_the_budget() {
        let catalog = get_default_catalog();
        let mut p = params(
            TrainingFocus::Strength,
            ExperienceLevel::Advanced,
            3,
            &["bodyweight", "barbell", "dumbbells"],
        );
        p.preferred_duration_minutes = 30;
        let program = generate_program(catalog, &p, date(2025, 6, 2));

        // advanced strength primaries alone overrun 30 minutes
        for session in &program.sessions {
            assert!(session.warmup.is_none());
            assert!(session.cooldown.is_none());
            assert_eq!(session.estimated_minutes, block_minutes(&session.main));
        }
    }

    #[test]
    fn test_todays_session_follows_weekday() {
        let catalog = get_default_catalog();
        let p = params(
            TrainingFocus::GeneralFitness,
            ExperienceLevel::Beginner,
            3,
            &["bodyweight"],
        );
        let program = generate_program(catalog, &p, date(2025, 8, 24));

        // 2025-08-24 is a Sunday, 2025-08-25 a Monday
        let sunday = todays_session(&program, date(2025, 8, 24)).unwrap();
        assert_eq!(sunday.name, program.sessions[0].name);
        let monday = todays_session(&program, date(2025, 8, 25)).unwrap();
        assert_eq!(monday.name, program.sessions[1].name);
        // wednesday wraps around a 3-session week
        let wednesday = todays_session(&program, date(2025, 8, 27)).unwrap();
        assert_eq!(wednesday.name, program.sessions[0].name);
    }
}
