#![forbid(unsafe_code)]

//! Core domain model and plan generation logic for Liftplan.
//!
//! This crate provides:
//! - Domain types (exercises, generation parameters, sessions, programs)
//! - Catalog management
//! - Deterministic seeded randomness
//! - Volume planning, day templates, and exercise selection
//! - Session time-boxing and warm-up/cool-down composition

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod rng;
pub mod volume;
pub mod template;
pub mod selector;
pub mod timebox;
pub mod warmup;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use selector::find_alternative;
pub use engine::{generate_program, todays_session};
