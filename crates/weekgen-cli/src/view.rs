//! Plain-text week view.

use chrono::NaiveDate;
use weekgen_core::storage::DisplayConfig;
use weekgen_core::week::{format_duration, group_by_day, total_hours, week_range_label};
use weekgen_core::{Event, GenerationConfig};

/// Render a week as one section per day.
///
/// An event that overlaps an earlier one on the same day names it.
pub fn render_week(
    config: &GenerationConfig,
    start: NaiveDate,
    events: &[Event],
    display: &DisplayConfig,
) -> String {
    let mut out = format!(
        "{} ({}, {} intensity)\n",
        week_range_label(start),
        config.profession.display_name(),
        config.work_intensity
    );

    if events.is_empty() {
        out.push_str("No events\n");
        return out;
    }

    for (day, day_events) in group_by_day(events) {
        let hours = total_hours(day_events.iter().copied());
        out.push_str(&format!("\n{}  {:.1}h\n", day.format("%A %-d %b"), hours));

        for (i, event) in day_events.iter().enumerate() {
            out.push_str(&event_line(event, display));
            if let Some(earlier) = day_events[..i]
                .iter()
                .find(|e| e.overlaps(event.start, event.end))
            {
                out.push_str(&format!("  (overlaps {})", earlier.title));
            }
            out.push('\n');

            if display.show_notes {
                if let Some(notes) = event.notes.as_deref() {
                    out.push_str(&format!("      {notes}\n"));
                }
            }
        }
    }
    out
}

fn event_line(event: &Event, display: &DisplayConfig) -> String {
    let mut line = format!(
        "  {} - {}  {}  ({})",
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        event.title,
        format_duration(event.duration_minutes())
    );
    if display.show_colors {
        line.push_str(&format!(" [{}]", event.kind.color().as_str()));
    }
    line
}
