//! # WeekGen Core Library
//!
//! This library generates a plausible week of time-blocked calendar events for
//! a chosen profession. The CLI binary is a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Professions**: static tables of working hours, likelihoods and weighted
//!   work activities
//! - **Generator**: a stateless week generator driven by an injected random
//!   source, so a seed reproduces a week exactly
//! - **Export**: a store-agnostic seam for writing a week to a calendar
//! - **Storage**: TOML-based settings holding the default profile
//!
//! ## Key Components
//!
//! - [`WeekGenerator`]: builds the week
//! - [`GenerationConfig`]: what to generate
//! - [`Event`]: one generated calendar entry
//! - [`CalendarStore`]: trait for export destinations

pub mod error;
pub mod event;
pub mod export;
pub mod generator;
pub mod options;
pub mod profession;
pub mod sampler;
pub mod storage;
pub mod week;

pub use error::{ConfigError, CoreError, ExportError, ValidationError};
pub use event::{Event, EventColor, EventKind};
pub use export::{
    export_events, AccessStatus, CalendarStore, CalendarTarget, ExportRecord, ExportSummary,
    JsonFileStore,
};
pub use generator::{generation_rng, is_weekend, GenerationSeed, WeekGenerator};
pub use options::{GenerationConfig, WorkIntensity};
pub use profession::{Profession, ProfessionCategory, ProfessionProfile, WorkActivity};
pub use sampler::{pick_weighted, Weighted};
pub use storage::Settings;
