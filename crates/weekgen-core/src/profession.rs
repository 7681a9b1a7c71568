//! Profession identities and their static generation tables.
//!
//! Every profession owns one row in [`PROFILES`]: its category, after-hours and
//! weekend-work likelihoods, and the weighted list of work activities drawn
//! during the working day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::event::EventKind;
use crate::sampler::Weighted;

/// Broad grouping that drives working hours and commute/lunch lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionCategory {
    Professional,
    Tradesperson,
}

impl ProfessionCategory {
    pub const ALL: [ProfessionCategory; 2] =
        [ProfessionCategory::Professional, ProfessionCategory::Tradesperson];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfessionCategory::Professional => "Professional",
            ProfessionCategory::Tradesperson => "Tradesperson",
        }
    }

    /// Typical first hour of the working day.
    pub fn start_hour(&self) -> u32 {
        match self {
            ProfessionCategory::Professional => 9,
            ProfessionCategory::Tradesperson => 7,
        }
    }

    /// Typical hour the working day ends.
    pub fn end_hour(&self) -> u32 {
        match self {
            ProfessionCategory::Professional => 17,
            ProfessionCategory::Tradesperson => 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Lawyer,
    Academic,
    Doctor,
    Accountant,
    Architect,
    Engineer,
    Carpenter,
    Bricklayer,
    Plumber,
    Electrician,
    Painter,
    Mechanic,
}

/// A kind of work event and the title it is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkActivity {
    pub kind: EventKind,
    pub title: &'static str,
}

/// Static generation data for one profession.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfessionProfile {
    pub profession: Profession,
    pub name: &'static str,
    pub category: ProfessionCategory,
    pub after_hours_likelihood: f64,
    pub weekend_work_likelihood: f64,
    pub activities: &'static [Weighted<WorkActivity>],
}

const fn activity(kind: EventKind, title: &'static str, weight: f64) -> Weighted<WorkActivity> {
    Weighted::new(WorkActivity { kind, title }, weight)
}

const LAWYER: &[Weighted<WorkActivity>] = &[
    activity(EventKind::Meeting, "Client Meeting", 0.30),
    activity(EventKind::ClientCall, "Client Call", 0.20),
    activity(EventKind::Paperwork, "Case Documentation", 0.25),
    activity(EventKind::ProjectWork, "Legal Research", 0.25),
];

const ACADEMIC: &[Weighted<WorkActivity>] = &[
    activity(EventKind::Meeting, "Lecture", 0.30),
    activity(EventKind::Meeting, "Tutorial", 0.20),
    activity(EventKind::ProjectWork, "Research", 0.30),
    activity(EventKind::Paperwork, "Marking/Admin", 0.20),
];

const DOCTOR: &[Weighted<WorkActivity>] = &[
    activity(EventKind::Consultation, "Patient Consultation", 0.50),
    activity(EventKind::Meeting, "Rounds", 0.20),
    activity(EventKind::Paperwork, "Patient Notes", 0.20),
    activity(EventKind::Meeting, "Team Meeting", 0.10),
];

const ACCOUNTANT: &[Weighted<WorkActivity>] = &[
    activity(EventKind::ClientCall, "Client Call", 0.20),
    activity(EventKind::ProjectWork, "Financial Analysis", 0.30),
    activity(EventKind::Paperwork, "Documentation", 0.30),
    activity(EventKind::Meeting, "Team Meeting", 0.20),
];

const ARCHITECT: &[Weighted<WorkActivity>] = &[
    activity(EventKind::ProjectWork, "Design Work", 0.40),
    activity(EventKind::Meeting, "Client Meeting", 0.25),
    activity(EventKind::OnSite, "Site Visit", 0.20),
    activity(EventKind::Paperwork, "Documentation", 0.15),
];

const ENGINEER: &[Weighted<WorkActivity>] = &[
    activity(EventKind::ProjectWork, "Engineering Work", 0.45),
    activity(EventKind::Meeting, "Team Meeting", 0.25),
    activity(EventKind::OnSite, "Site Inspection", 0.15),
    activity(EventKind::Paperwork, "Reports", 0.15),
];

// Carpenter, bricklayer and painter share one table.
const BUILDING_TRADES: &[Weighted<WorkActivity>] = &[
    activity(EventKind::OnSite, "On Site Work", 0.70),
    activity(EventKind::ProjectWork, "Preparation", 0.15),
    activity(EventKind::Meeting, "Client Discussion", 0.10),
    activity(EventKind::Paperwork, "Quotes/Invoicing", 0.05),
];

// Plumber and electrician.
const SERVICE_TRADES: &[Weighted<WorkActivity>] = &[
    activity(EventKind::OnSite, "Job Site", 0.60),
    activity(EventKind::ProjectWork, "Installation Work", 0.20),
    activity(EventKind::Meeting, "Client Consultation", 0.10),
    activity(EventKind::Paperwork, "Paperwork", 0.10),
];

const MECHANIC: &[Weighted<WorkActivity>] = &[
    activity(EventKind::ProjectWork, "Vehicle Repair", 0.60),
    activity(EventKind::Consultation, "Customer Consultation", 0.20),
    activity(EventKind::Paperwork, "Service Documentation", 0.15),
    activity(EventKind::Meeting, "Parts Ordering", 0.05),
];

/// One row per profession, in declaration order of [`Profession`].
pub static PROFILES: [ProfessionProfile; 12] = [
    ProfessionProfile {
        profession: Profession::Lawyer,
        name: "Lawyer",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.6,
        weekend_work_likelihood: 0.4,
        activities: LAWYER,
    },
    ProfessionProfile {
        profession: Profession::Academic,
        name: "Academic",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.4,
        weekend_work_likelihood: 0.2,
        activities: ACADEMIC,
    },
    ProfessionProfile {
        profession: Profession::Doctor,
        name: "Doctor",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.6,
        weekend_work_likelihood: 0.5,
        activities: DOCTOR,
    },
    ProfessionProfile {
        profession: Profession::Accountant,
        name: "Accountant",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.3,
        weekend_work_likelihood: 0.15,
        activities: ACCOUNTANT,
    },
    ProfessionProfile {
        profession: Profession::Architect,
        name: "Architect",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.4,
        weekend_work_likelihood: 0.15,
        activities: ARCHITECT,
    },
    ProfessionProfile {
        profession: Profession::Engineer,
        name: "Engineer",
        category: ProfessionCategory::Professional,
        after_hours_likelihood: 0.4,
        weekend_work_likelihood: 0.2,
        activities: ENGINEER,
    },
    ProfessionProfile {
        profession: Profession::Carpenter,
        name: "Carpenter",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.3,
        activities: BUILDING_TRADES,
    },
    ProfessionProfile {
        profession: Profession::Bricklayer,
        name: "Bricklayer",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.1,
        activities: BUILDING_TRADES,
    },
    ProfessionProfile {
        profession: Profession::Plumber,
        name: "Plumber",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.3,
        activities: SERVICE_TRADES,
    },
    ProfessionProfile {
        profession: Profession::Electrician,
        name: "Electrician",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.3,
        activities: SERVICE_TRADES,
    },
    ProfessionProfile {
        profession: Profession::Painter,
        name: "Painter",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.1,
        activities: BUILDING_TRADES,
    },
    ProfessionProfile {
        profession: Profession::Mechanic,
        name: "Mechanic",
        category: ProfessionCategory::Tradesperson,
        after_hours_likelihood: 0.15,
        weekend_work_likelihood: 0.3,
        activities: MECHANIC,
    },
];

impl Profession {
    pub const ALL: [Profession; 12] = [
        Profession::Lawyer,
        Profession::Academic,
        Profession::Doctor,
        Profession::Accountant,
        Profession::Architect,
        Profession::Engineer,
        Profession::Carpenter,
        Profession::Bricklayer,
        Profession::Plumber,
        Profession::Electrician,
        Profession::Painter,
        Profession::Mechanic,
    ];

    pub fn profile(&self) -> &'static ProfessionProfile {
        &PROFILES[*self as usize]
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().name
    }

    pub fn category(&self) -> ProfessionCategory {
        self.profile().category
    }

    pub fn typical_start_hour(&self) -> u32 {
        self.category().start_hour()
    }

    pub fn typical_end_hour(&self) -> u32 {
        self.category().end_hour()
    }

    pub fn after_hours_likelihood(&self) -> f64 {
        self.profile().after_hours_likelihood
    }

    pub fn weekend_work_likelihood(&self) -> f64 {
        self.profile().weekend_work_likelihood
    }

    /// Weighted work activities for this profession.
    pub fn activities(&self) -> &'static [Weighted<WorkActivity>] {
        self.profile().activities
    }

    /// Lowercase identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Profession::Lawyer => "lawyer",
            Profession::Academic => "academic",
            Profession::Doctor => "doctor",
            Profession::Accountant => "accountant",
            Profession::Architect => "architect",
            Profession::Engineer => "engineer",
            Profession::Carpenter => "carpenter",
            Profession::Bricklayer => "bricklayer",
            Profession::Plumber => "plumber",
            Profession::Electrician => "electrician",
            Profession::Painter => "painter",
            Profession::Mechanic => "mechanic",
        }
    }

    /// All professions in a category, in table order.
    pub fn in_category(category: ProfessionCategory) -> impl Iterator<Item = Profession> {
        Self::ALL.into_iter().filter(move |p| p.category() == category)
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Profession {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "profession".into(),
                message: format!("unknown profession '{s}'"),
            })
    }
}
