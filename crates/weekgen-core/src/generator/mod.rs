//! Week generator.
//!
//! Builds a plausible week of time-blocked events for one profession:
//! - Weekdays follow a cursor from a jittered wake time through gym, commute,
//!   the profession's working hours, the commute home and the evening
//! - Weekends place a few optional blocks at independently drawn hours
//! - All randomness comes from a caller-supplied [`Rng`], so a fixed seed
//!   reproduces the exact same week, event ids included

mod weekday;
mod weekend;
mod work_block;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, Weekday};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::event::Event;
use crate::options::GenerationConfig;

pub use work_block::fill_work_block;

pub const DAYS_PER_WEEK: u64 = 7;

/// Seed for reproducible generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationSeed(pub u64);

impl GenerationSeed {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Derive a seed from a string (for named scenarios)
    pub fn from_string(s: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        Self(hasher.finish())
    }

    pub fn rng(&self) -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(self.0)
    }
}

/// Random source for one generation: seeded when a seed is given, entropy otherwise.
pub fn generation_rng(seed: Option<GenerationSeed>) -> Mcg128Xsl64 {
    match seed {
        Some(seed) => seed.rng(),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Generates weeks of events for a fixed configuration.
///
/// The generator keeps no state between calls.
#[derive(Debug, Clone)]
pub struct WeekGenerator {
    config: GenerationConfig,
}

impl WeekGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the 7 days starting at `start`, sorted by start time.
    ///
    /// `start` is used as given; aligning it to the first day of a week is the
    /// caller's job (see [`crate::week::week_start`]). A day whose date cannot
    /// be computed is left out.
    pub fn generate_week<R: Rng + ?Sized>(&self, start: NaiveDate, rng: &mut R) -> Vec<Event> {
        let mut events = Vec::new();

        for offset in 0..DAYS_PER_WEEK {
            let Some(day) = start.checked_add_days(Days::new(offset)) else {
                debug!(%start, offset, "day out of calendar range, skipping");
                continue;
            };
            events.extend(self.generate_day(day, rng));
        }

        events.sort_by_key(|e| e.start);
        events
    }

    /// Generate a week from a seed.
    pub fn generate_week_seeded(&self, start: NaiveDate, seed: GenerationSeed) -> Vec<Event> {
        self.generate_week(start, &mut seed.rng())
    }

    /// Generate a single day, dispatching on weekday vs weekend.
    pub fn generate_day<R: Rng + ?Sized>(&self, day: NaiveDate, rng: &mut R) -> Vec<Event> {
        if is_weekend(day) {
            weekend::generate(&self.config, day, rng)
        } else {
            weekday::generate(&self.config, day, rng)
        }
    }
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Event identity drawn from the generation's random source.
fn new_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn plus_minutes(at: NaiveDateTime, minutes: i64) -> Option<NaiveDateTime> {
    at.checked_add_signed(Duration::minutes(minutes))
}
