//! Deterministic seeded randomness for plan generation.
//!
//! Generation must be a pure function of its inputs: the same parameters in
//! the same calendar week always produce byte-identical plans, on every
//! platform. This module provides the pieces that make that hold:
//! - `hash_key` folds a seed string into a 32-bit seed (xmur3 construction)
//! - `SeededRng` is a mulberry32 generator over that seed
//! - `week_token` anchors seeds to the ISO calendar week of a supplied date
//! - seed-key builders serialize parameters into stable, flat strings
//!
//! All arithmetic is explicit `u32` wrapping math, so results do not depend
//! on host word size or float quirks.

use crate::types::{GenerationParameters, MovementPattern};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Fold a seed string into a 32-bit seed (xmur3 construction).
///
/// Hashes the UTF-8 bytes of `key`. Distinct keys of the kind the engine
/// builds (token joins) disperse well; equal keys always hash equal.
pub fn hash_key(key: &str) -> u32 {
    let mut h: u32 = 1779033703 ^ (key.len() as u32);
    for byte in key.bytes() {
        h = (h ^ u32::from(byte)).wrapping_mul(3432918353);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(2246822507);
    h = (h ^ (h >> 13)).wrapping_mul(3266489909);
    h ^ (h >> 16)
}

/// Small deterministic PRNG (mulberry32) seeded from a key string.
///
/// Not cryptographic. Statistical quality is more than enough for shuffling
/// a handful of exercise candidates, and the state is a single `u32`, so
/// generators are cheap to create per decision point.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn from_key(key: &str) -> Self {
        Self {
            state: hash_key(key),
        }
    }

    /// Advance the generator and return the raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value uniformly distributed in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Pick one element uniformly; `None` on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_f64() * items.len() as f64) as usize;
        items.get(index)
    }
}

/// Calendar-week token for a date, e.g. `"2025-w34"`.
///
/// The week index is the zero-based day-of-year divided by seven, so the
/// token rolls over every seven days and resets at New Year. Plans reshuffle
/// on that boundary and are stable inside it.
pub fn week_token(date: NaiveDate) -> String {
    format!("{}-w{}", date.year(), date.ordinal0() / 7)
}

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Seed key for program-level decisions (warm-up and cool-down picks).
///
/// Every field that shapes the plan participates, so any parameter change
/// reshuffles; `BTreeSet` iteration keeps the joins sorted and stable.
pub fn program_seed_key(params: &GenerationParameters, week: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}-{}",
        params.focus,
        params.experience,
        params.weekly_availability,
        join_set(&params.available_equipment),
        join_set(&params.disliked_exercises),
        week
    )
}

/// Seed key for one slot's exercise pick.
///
/// Keyed by pattern rather than by day so that a pattern appearing on several
/// days of one week resolves to the same exercise each time.
pub fn slot_seed_key(
    pattern: MovementPattern,
    params: &GenerationParameters,
    week: &str,
) -> String {
    format!(
        "{}-{}-{}-{}",
        pattern,
        join_set(&params.available_equipment),
        join_set(&params.disliked_exercises),
        week
    )
}
