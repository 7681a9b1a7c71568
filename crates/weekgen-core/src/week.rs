//! Week navigation and per-day summaries used by presentation layers.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::event::Event;

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Move by whole weeks. `None` when the result leaves the calendar range.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    let days = Days::new(weeks.unsigned_abs().checked_mul(7)?);
    if weeks >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Header for a week, e.g. `"19 Oct - 25 Oct, 2026"`.
///
/// The year is taken from the last day so weeks spanning New Year read naturally.
pub fn week_range_label(start: NaiveDate) -> String {
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    format!(
        "{} - {}, {}",
        start.format("%-d %b"),
        end.format("%-d %b"),
        end.format("%Y")
    )
}

/// Events bucketed by the day they start on, each bucket sorted by start.
pub fn group_by_day(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        days.entry(event.day()).or_default().push(event);
    }
    for bucket in days.values_mut() {
        bucket.sort_by_key(|e| e.start);
    }
    days
}

pub fn total_hours<'a>(events: impl IntoIterator<Item = &'a Event>) -> f64 {
    events.into_iter().map(Event::duration_hours).sum()
}

/// Compact duration: `"1h 30m"`, `"2h"` or `"45m"`.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_snaps_to_monday() {
        assert_eq!(week_start(date(2026, 10, 19)), date(2026, 10, 19));
        assert_eq!(week_start(date(2026, 10, 22)), date(2026, 10, 19));
        assert_eq!(week_start(date(2026, 10, 25)), date(2026, 10, 19));
        assert_eq!(week_start(date(2027, 1, 1)), date(2026, 12, 28));
    }

    #[test]
    fn shift_weeks_both_ways() {
        assert_eq!(shift_weeks(date(2026, 10, 19), 1), Some(date(2026, 10, 26)));
        assert_eq!(shift_weeks(date(2026, 10, 19), -2), Some(date(2026, 10, 5)));
        assert_eq!(shift_weeks(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn range_label_uses_end_year() {
        assert_eq!(week_range_label(date(2026, 10, 19)), "19 Oct - 25 Oct, 2026");
        assert_eq!(week_range_label(date(2026, 12, 28)), "28 Dec - 3 Jan, 2027");
    }

    #[test]
    fn durations_format_compactly() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(0), "0m");
    }

    #[test]
    fn grouping_and_totals() {
        let day = date(2026, 10, 20);
        let at = |h: u32| day.and_hms_opt(h, 0, 0).unwrap();
        let next = date(2026, 10, 21).and_hms_opt(9, 0, 0).unwrap();
        let events = vec![
            Event::new(Uuid::nil(), "B", at(10), at(12), EventKind::Meeting, None),
            Event::new(Uuid::nil(), "A", at(8), at(9), EventKind::Commute, None),
            Event::new(Uuid::nil(), "C", next, next + chrono::Duration::minutes(30), EventKind::Work, None),
        ];

        let days = group_by_day(&events);
        assert_eq!(days.len(), 2);
        let first: Vec<_> = days[&day].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(first, ["A", "B"]);
        assert!((total_hours(days[&day].iter().copied()) - 3.0).abs() < 1e-9);
        assert!((total_hours(&events) - 3.5).abs() < 1e-9);
    }
}
