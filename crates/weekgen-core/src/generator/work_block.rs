//! Decomposition of the working hours into individual work events.

use chrono::{NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{new_id, plus_minutes};
use crate::event::{Event, EventKind};
use crate::options::{GenerationConfig, WorkIntensity};
use crate::profession::{ProfessionCategory, WorkActivity};
use crate::sampler::{pick_weighted, Weighted};

const BASE_DURATIONS: [i64; 5] = [30, 45, 60, 90, 120];
const LUNCH_START_HOUR: u32 = 12;
const LUNCH_END_HOUR: u32 = 14;
const BREAK_PROBABILITY: f64 = 0.3;

/// Fill `[work_start, work_end)` with work events, at most one lunch and the
/// odd break.
///
/// Lunch starts at the first cursor position whose hour falls in 12..14. A
/// step that carries the cursor over the whole window skips lunch for the day.
/// A work event that would run past `work_end` is clipped to end exactly there
/// and closes the block.
pub fn fill_work_block<R: Rng + ?Sized>(
    config: &GenerationConfig,
    work_start: NaiveDateTime,
    work_end: NaiveDateTime,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = Vec::new();
    let category = config.profession.category();
    let activities = config.profession.activities();
    let mut lunch_placed = false;
    let mut cursor = work_start;

    while cursor < work_end {
        if !lunch_placed && is_lunch_hour(cursor) {
            let minutes = lunch_minutes(category, rng);
            let end = plus_minutes(cursor, minutes).map_or(work_end, |e| e.min(work_end));
            events.push(Event::new(new_id(rng), "Lunch", cursor, end, EventKind::Lunch, None));
            lunch_placed = true;
            cursor = end;
            continue;
        }

        let minutes = work_event_minutes(config.work_intensity, rng);
        let Some(end) = plus_minutes(cursor, minutes) else {
            break;
        };

        if end > work_end {
            events.push(work_event(activities, cursor, work_end, rng));
            break;
        }

        events.push(work_event(activities, cursor, end, rng));
        cursor = end;

        if rng.gen_bool(0.5) && rng.gen::<f64>() < BREAK_PROBABILITY {
            let minutes = rng.gen_range(10..=15);
            if let Some(break_end) = plus_minutes(cursor, minutes).filter(|e| *e < work_end) {
                events.push(Event::new(
                    new_id(rng),
                    "Break",
                    cursor,
                    break_end,
                    EventKind::BreakTime,
                    None,
                ));
                cursor = break_end;
            }
        }
    }

    events
}

fn is_lunch_hour(at: NaiveDateTime) -> bool {
    (LUNCH_START_HOUR..LUNCH_END_HOUR).contains(&at.hour())
}

fn lunch_minutes<R: Rng + ?Sized>(category: ProfessionCategory, rng: &mut R) -> i64 {
    match category {
        ProfessionCategory::Professional => rng.gen_range(45..=60),
        ProfessionCategory::Tradesperson => rng.gen_range(30..=45),
    }
}

/// One of the base durations scaled by intensity, truncated to whole minutes.
fn work_event_minutes<R: Rng + ?Sized>(intensity: WorkIntensity, rng: &mut R) -> i64 {
    let base = BASE_DURATIONS.choose(rng).copied().unwrap_or(60);
    (base as f64 * intensity.multiplier()) as i64
}

/// One work event drawn from `activities`; plain "Work" if the draw finds nothing.
fn work_event<R: Rng + ?Sized>(
    activities: &[Weighted<WorkActivity>],
    start: NaiveDateTime,
    end: NaiveDateTime,
    rng: &mut R,
) -> Event {
    let (kind, title) = match pick_weighted(rng, activities) {
        Some(activity) => (activity.kind, activity.title),
        None => (EventKind::Work, "Work"),
    };
    Event::new(new_id(rng), title, start, end, kind, None)
}
