//! Export of a generated week to an external calendar store.
//!
//! The core only maps events to [`ExportRecord`]s and drives a
//! [`CalendarStore`]; where the records end up is up to the store.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CoreError, ExportError, Result, ValidationError};
use crate::event::Event;

/// Which calendar inside the store receives a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarTarget {
    /// The store's default calendar for new events.
    Default,
}

/// What a calendar store receives for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: Option<String>,
    pub calendar: CalendarTarget,
}

impl From<&Event> for ExportRecord {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            notes: event.notes.clone(),
            calendar: CalendarTarget::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

/// A destination for exported events.
pub trait CalendarStore {
    /// Ask for permission to write. Called once per export.
    fn request_access(&mut self) -> Result<AccessStatus>;

    /// Save one record.
    fn save(&mut self, record: &ExportRecord) -> Result<()>;

    /// Flush saved records, if the store buffers them.
    fn commit(&mut self) -> Result<()> {
        Ok(()) // default no-op
    }
}

/// Outcome of an export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub exported: usize,
    pub failed: usize,
}

impl ExportSummary {
    /// Status line shown to the user.
    pub fn message(&self) -> String {
        let mut message = format!("Exported {} events to your calendar", self.exported);
        if self.failed > 0 {
            message.push_str(&format!("\n{} events failed", self.failed));
        }
        message
    }
}

/// Write every event to `store`.
///
/// A record the store rejects is counted as failed and the export carries on;
/// denied access aborts before anything is written.
pub fn export_events<S: CalendarStore + ?Sized>(
    store: &mut S,
    events: &[Event],
) -> Result<ExportSummary> {
    if store.request_access()? == AccessStatus::Denied {
        return Err(ExportError::AccessDenied.into());
    }

    let mut summary = ExportSummary::default();
    for event in events {
        match store.save(&ExportRecord::from(event)) {
            Ok(()) => summary.exported += 1,
            Err(e) => {
                warn!(title = %event.title, error = %e, "failed to export event");
                summary.failed += 1;
            }
        }
    }
    store.commit()?;

    info!(exported = summary.exported, failed = summary.failed, "export finished");
    Ok(summary)
}

/// Store that writes all records as one JSON array.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<ExportRecord>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records saved so far and not yet committed.
    pub fn pending(&self) -> &[ExportRecord] {
        &self.records
    }
}

impl CalendarStore for JsonFileStore {
    fn request_access(&mut self) -> Result<AccessStatus> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        Ok(if parent.is_dir() {
            AccessStatus::Granted
        } else {
            AccessStatus::Denied
        })
    }

    fn save(&mut self, record: &ExportRecord) -> Result<()> {
        if record.end <= record.start {
            return Err(CoreError::from(ValidationError::InvalidTimeRange {
                start: record.start,
                end: record.end,
            }));
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, json)?;
        self.records.clear();
        Ok(())
    }
}
