use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{new_id, plus_minutes};
use crate::event::{Event, EventKind};
use crate::options::GenerationConfig;

const WEEKEND_WORK_TITLES: [&str; 5] = [
    "Catch-up Work",
    "Project Deadline",
    "Preparation",
    "Review Session",
    "Planning",
];

/// Build a weekend day from up to three independent blocks.
///
/// Each block picks its own start hour, so blocks can overlap one another.
pub(super) fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    day: NaiveDate,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = Vec::new();

    if config.include_weekend_work && rng.gen::<f64>() < config.weekend_work_probability() {
        let hour = rng.gen_range(9..=11);
        let Some(start) = day.and_hms_opt(hour, 0, 0) else {
            return events;
        };
        let minutes = rng.gen_range(180..=300);
        if let Some(end) = plus_minutes(start, minutes) {
            let title = WEEKEND_WORK_TITLES
                .choose(rng)
                .copied()
                .unwrap_or("Weekend Work");
            events.push(Event::new(
                new_id(rng),
                title,
                start,
                end,
                EventKind::Work,
                Some("Weekend catch-up"),
            ));
        }
    }

    if config.include_gym && rng.gen_bool(0.5) {
        let hour = rng.gen_range(8..=10);
        let Some(start) = day.and_hms_opt(hour, 0, 0) else {
            return events;
        };
        let minutes = rng.gen_range(60..=90);
        if let Some(end) = plus_minutes(start, minutes) {
            events.push(Event::new(
                new_id(rng),
                "Gym",
                start,
                end,
                EventKind::Gym,
                Some("Weekend workout"),
            ));
        }
    }

    if config.include_family_time {
        let hour = rng.gen_range(14..=16);
        let Some(start) = day.and_hms_opt(hour, 0, 0) else {
            return events;
        };
        let minutes = rng.gen_range(120..=240);
        if let Some(end) = plus_minutes(start, minutes) {
            events.push(Event::new(
                new_id(rng),
                "Family Time",
                start,
                end,
                EventKind::FamilyTime,
                Some("Weekend family activities"),
            ));
        }
    }

    events
}
