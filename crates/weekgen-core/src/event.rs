//! Calendar event records produced by the generator.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag on a generated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Work,
    Meeting,
    ClientCall,
    ProjectWork,
    Paperwork,
    OnSite,
    Consultation,
    Gym,
    FamilyTime,
    BreakTime,
    Lunch,
    Commute,
    AfterHours,
}

/// Display color attached to an event kind.
///
/// Presentation layers map these onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventColor {
    Blue,
    Purple,
    Green,
    Orange,
    Gray,
    Yellow,
    Red,
}

impl EventColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Purple => "purple",
            EventColor::Green => "green",
            EventColor::Orange => "orange",
            EventColor::Gray => "gray",
            EventColor::Yellow => "yellow",
            EventColor::Red => "red",
        }
    }
}

impl EventKind {
    pub const ALL: [EventKind; 13] = [
        EventKind::Work,
        EventKind::Meeting,
        EventKind::ClientCall,
        EventKind::ProjectWork,
        EventKind::Paperwork,
        EventKind::OnSite,
        EventKind::Consultation,
        EventKind::Gym,
        EventKind::FamilyTime,
        EventKind::BreakTime,
        EventKind::Lunch,
        EventKind::Commute,
        EventKind::AfterHours,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Work => "Work",
            EventKind::Meeting => "Meeting",
            EventKind::ClientCall => "Client Call",
            EventKind::ProjectWork => "Project Work",
            EventKind::Paperwork => "Paperwork",
            EventKind::OnSite => "On Site",
            EventKind::Consultation => "Consultation",
            EventKind::Gym => "Gym",
            EventKind::FamilyTime => "Family Time",
            EventKind::BreakTime => "Break",
            EventKind::Lunch => "Lunch",
            EventKind::Commute => "Commute",
            EventKind::AfterHours => "After Hours Work",
        }
    }

    pub fn color(&self) -> EventColor {
        match self {
            EventKind::Work
            | EventKind::Meeting
            | EventKind::ClientCall
            | EventKind::ProjectWork
            | EventKind::OnSite
            | EventKind::Consultation => EventColor::Blue,
            EventKind::Paperwork => EventColor::Purple,
            EventKind::Gym => EventColor::Green,
            EventKind::FamilyTime => EventColor::Orange,
            EventKind::BreakTime | EventKind::Lunch => EventColor::Gray,
            EventKind::Commute => EventColor::Yellow,
            EventKind::AfterHours => EventColor::Red,
        }
    }
}

/// A single time-blocked calendar entry.
///
/// Timestamps are wall-clock; attaching a time zone is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub notes: Option<String>,
}

impl Event {
    /// Create a new event with the given identity.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        kind: EventKind,
        notes: Option<&str>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            kind,
            notes: notes.map(str::to_string),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// Calendar day the event starts on.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Check if this event overlaps with a time range
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && self.end > start
    }
}
