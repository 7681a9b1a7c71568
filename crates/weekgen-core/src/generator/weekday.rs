use chrono::{NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{new_id, plus_minutes, work_block};
use crate::event::{Event, EventKind};
use crate::options::GenerationConfig;
use crate::profession::ProfessionCategory;

const WAKE_BASE_HOUR: i32 = 6;

const AFTER_HOURS_TITLES: [&str; 5] = [
    "Email Catch-up",
    "Project Work",
    "Preparation for Tomorrow",
    "Review Documents",
    "Planning Session",
];

/// Build one working day by walking a cursor forward from the wake time.
///
/// The work block is anchored to the profession's hours rather than the
/// cursor, so the morning commute may end before or after work starts.
pub(super) fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    day: NaiveDate,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = Vec::new();
    let category = config.profession.category();

    let (wake_hour, wake_minute) = wake_time(rng);
    let Some(mut cursor) = day.and_hms_opt(wake_hour, wake_minute, 0) else {
        return events;
    };

    if config.include_gym && rng.gen::<f64>() < config.weekday_gym_probability() {
        let minutes = rng.gen_range(45..=75);
        if let Some(end) = plus_minutes(cursor, minutes) {
            events.push(Event::new(
                new_id(rng),
                "Gym",
                cursor,
                end,
                EventKind::Gym,
                Some("Morning workout"),
            ));
            cursor = end;
        }
    }

    let commute = commute_minutes(category, rng);
    if let Some(end) = plus_minutes(cursor, commute) {
        events.push(commute_event(rng, "Commute to Work", cursor, end));
    }

    let work_start = day.and_hms_opt(config.profession.typical_start_hour(), 0, 0);
    let work_end = day.and_hms_opt(config.profession.typical_end_hour(), 0, 0);
    let (Some(work_start), Some(work_end)) = (work_start, work_end) else {
        return events;
    };
    events.extend(work_block::fill_work_block(config, work_start, work_end, rng));

    let mut cursor = work_end;
    if let Some(end) = plus_minutes(cursor, commute) {
        events.push(commute_event(rng, "Commute Home", cursor, end));
        cursor = end;
    }

    if config.include_family_time {
        let minutes = rng.gen_range(90..=180);
        if let Some(end) = plus_minutes(cursor, minutes) {
            events.push(Event::new(
                new_id(rng),
                "Family Time",
                cursor,
                end,
                EventKind::FamilyTime,
                Some("Dinner and family activities"),
            ));
            cursor = end;
        }
    }

    if config.include_after_hours && rng.gen::<f64>() < config.after_hours_probability() {
        let minutes = rng.gen_range(60..=120);
        if let Some(end) = plus_minutes(cursor, minutes) {
            let title = AFTER_HOURS_TITLES
                .choose(rng)
                .copied()
                .unwrap_or("After Hours Work");
            events.push(Event::new(
                new_id(rng),
                title,
                cursor,
                end,
                EventKind::AfterHours,
                Some("Evening work session"),
            ));
        }
    }

    events
}

/// Wake time: base hour jittered by up to an hour either way, minute in [0, 30].
fn wake_time<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    let jitter = rng.gen_range(-1..=1);
    let hour = (WAKE_BASE_HOUR + jitter).clamp(0, 23) as u32;
    let minute = rng.gen_range(0..=30);
    (hour, minute)
}

fn commute_minutes<R: Rng + ?Sized>(category: ProfessionCategory, rng: &mut R) -> i64 {
    match category {
        ProfessionCategory::Professional => rng.gen_range(20..=45),
        ProfessionCategory::Tradesperson => rng.gen_range(15..=30),
    }
}

fn commute_event<R: Rng + ?Sized>(
    rng: &mut R,
    title: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Event {
    Event::new(new_id(rng), title, start, end, EventKind::Commute, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::WorkIntensity;
    use crate::profession::Profession;
    use chrono::{Duration, Timelike};
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    fn count(events: &[Event], kind: EventKind) -> usize {
        events.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn minimal_day_has_commutes_and_work() {
        let cfg = GenerationConfig {
            work_intensity: WorkIntensity::Light,
            ..GenerationConfig::work_only(Profession::Lawyer)
        };
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let events = generate(&cfg, tuesday(), &mut rng);

        assert_eq!(count(&events, EventKind::Commute), 2);
        assert_eq!(count(&events, EventKind::Lunch), 1);
        assert_eq!(count(&events, EventKind::Gym), 0);
        assert_eq!(count(&events, EventKind::FamilyTime), 0);

        let home = events.iter().find(|e| e.title == "Commute Home").unwrap();
        assert_eq!(home.start, tuesday().and_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn wake_time_stays_in_window() {
        let mut rng = Mcg128Xsl64::seed_from_u64(2);
        for _ in 0..500 {
            let (hour, minute) = wake_time(&mut rng);
            assert!((5..=7).contains(&hour));
            assert!(minute <= 30);
        }
    }

    #[test]
    fn commute_home_reuses_morning_duration() {
        let cfg = GenerationConfig::work_only(Profession::Electrician);
        let mut rng = Mcg128Xsl64::seed_from_u64(3);
        for _ in 0..50 {
            let events = generate(&cfg, tuesday(), &mut rng);
            let to_work = events.iter().find(|e| e.title == "Commute to Work").unwrap();
            let home = events.iter().find(|e| e.title == "Commute Home").unwrap();
            assert_eq!(to_work.duration(), home.duration());
            assert!((15..=30).contains(&home.duration_minutes()));
        }
    }

    #[test]
    fn evening_blocks_chain_off_commute_home() {
        let mut cfg = GenerationConfig::default_for(Profession::Doctor);
        cfg.include_after_hours = true;
        cfg.work_intensity = WorkIntensity::Intense;
        let mut rng = Mcg128Xsl64::seed_from_u64(4);

        let mut saw_after_hours = false;
        for _ in 0..50 {
            let events = generate(&cfg, tuesday(), &mut rng);
            let home = events.iter().find(|e| e.title == "Commute Home").unwrap();
            let family = events.iter().find(|e| e.kind == EventKind::FamilyTime).unwrap();
            assert_eq!(family.start, home.end);
            assert!((90..=180).contains(&family.duration_minutes()));

            if let Some(late) = events.iter().find(|e| e.kind == EventKind::AfterHours) {
                saw_after_hours = true;
                assert_eq!(late.start, family.end);
                assert!(AFTER_HOURS_TITLES.contains(&late.title.as_str()));
                assert!((60..=120).contains(&late.duration_minutes()));
            }
        }
        assert!(saw_after_hours);
    }

    #[test]
    fn morning_gym_starts_at_wake_time() {
        let mut cfg = GenerationConfig::work_only(Profession::Mechanic);
        cfg.include_gym = true;
        cfg.gym_frequency = 5;
        let mut rng = Mcg128Xsl64::seed_from_u64(5);
        let events = generate(&cfg, tuesday(), &mut rng);

        let gym = events.iter().find(|e| e.kind == EventKind::Gym).unwrap();
        assert!((5..=7).contains(&gym.start.hour()));
        assert!((45..=75).contains(&gym.duration_minutes()));
        let commute = events.iter().find(|e| e.title == "Commute to Work").unwrap();
        assert_eq!(commute.start, gym.end);
        assert!(commute.start - gym.start <= Duration::minutes(75));
    }
}
