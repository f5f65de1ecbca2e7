//! Day templates: which movement patterns each training day asks for.
//!
//! A template is an ordered list of slots (pattern + sets + reps + priority)
//! that the selector later resolves against the catalog. Templates repeat in
//! a cycle over the user's training days: full-body has a one-day cycle,
//! upper/lower two, push/pull/legs three.

use crate::types::{MovementPattern, Priority, ProgramArchetype, SessionType, Slot};
use crate::volume::RepScheme;
use tracing::debug;

fn primary_slot(pattern: MovementPattern, scheme: &RepScheme) -> Slot {
    Slot {
        pattern,
        sets: scheme.primary_sets,
        reps: scheme.primary_reps,
        priority: Priority::Primary,
    }
}

fn accessory_slot(pattern: MovementPattern, scheme: &RepScheme) -> Slot {
    Slot {
        pattern,
        sets: scheme.accessory_sets,
        reps: scheme.accessory_reps,
        priority: Priority::Accessory,
    }
}

/// Build the day-template cycle for a split shape.
///
/// Every returned day leads with compound primary work and closes with
/// accessory slots. Push and pull days carry two accessory slots since they
/// cover fewer primary patterns.
pub fn day_templates(archetype: ProgramArchetype, scheme: &RepScheme) -> Vec<Vec<Slot>> {
    use MovementPattern::*;

    let templates = match archetype {
        ProgramArchetype::FullBody => vec![vec![
            primary_slot(Squat, scheme),
            primary_slot(Hinge, scheme),
            primary_slot(PushHorizontal, scheme),
            primary_slot(PullHorizontal, scheme),
            accessory_slot(Isolation, scheme),
        ]],
        ProgramArchetype::UpperLower => vec![
            vec![
                primary_slot(PushHorizontal, scheme),
                primary_slot(PullHorizontal, scheme),
                primary_slot(PushVertical, scheme),
                primary_slot(PullVertical, scheme),
                accessory_slot(Isolation, scheme),
            ],
            vec![
                primary_slot(Squat, scheme),
                primary_slot(Hinge, scheme),
                primary_slot(Lunge, scheme),
                accessory_slot(Isolation, scheme),
            ],
        ],
        ProgramArchetype::PushPullLegs => vec![
            vec![
                primary_slot(PushHorizontal, scheme),
                primary_slot(PushVertical, scheme),
                accessory_slot(Isolation, scheme),
                accessory_slot(Isolation, scheme),
            ],
            vec![
                primary_slot(PullHorizontal, scheme),
                primary_slot(PullVertical, scheme),
                accessory_slot(Isolation, scheme),
                accessory_slot(Isolation, scheme),
            ],
            vec![
                primary_slot(Squat, scheme),
                primary_slot(Hinge, scheme),
                primary_slot(Lunge, scheme),
                accessory_slot(Isolation, scheme),
            ],
        ],
    };

    debug!(?archetype, days = templates.len(), "Built day templates");
    templates
}

/// Classify a day by the patterns its template requests.
///
/// Checked most-specific first; note an upper day contains both push and
/// pull pairs and classifies as push.
pub fn session_type(slots: &[Slot]) -> SessionType {
    let has = |pattern: MovementPattern| slots.iter().any(|slot| slot.pattern == pattern);

    if has(MovementPattern::Squat)
        && has(MovementPattern::Hinge)
        && has(MovementPattern::PushHorizontal)
    {
        SessionType::FullBody
    } else if has(MovementPattern::PushHorizontal) && has(MovementPattern::PushVertical) {
        SessionType::Push
    } else if has(MovementPattern::PullHorizontal) && has(MovementPattern::PullVertical) {
        SessionType::Pull
    } else if has(MovementPattern::Squat) && has(MovementPattern::Hinge) {
        SessionType::Legs
    } else {
        SessionType::Mixed
    }
}
