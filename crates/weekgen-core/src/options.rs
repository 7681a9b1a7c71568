//! Generation options chosen by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::profession::Profession;

/// How hard the week is: scales work-event durations and work likelihoods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkIntensity {
    Light,
    #[default]
    Moderate,
    Intense,
}

impl WorkIntensity {
    pub const ALL: [WorkIntensity; 3] = [
        WorkIntensity::Light,
        WorkIntensity::Moderate,
        WorkIntensity::Intense,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            WorkIntensity::Light => 0.7,
            WorkIntensity::Moderate => 1.0,
            WorkIntensity::Intense => 1.3,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            WorkIntensity::Light => "light",
            WorkIntensity::Moderate => "moderate",
            WorkIntensity::Intense => "intense",
        }
    }
}

impl fmt::Display for WorkIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkIntensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.id() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "work_intensity".into(),
                message: format!("expected light, moderate or intense, got '{s}'"),
            })
    }
}

/// Allowed gym sessions per week.
pub const GYM_FREQUENCY_RANGE: std::ops::RangeInclusive<u8> = 1..=7;

/// Everything the generator needs to know about the person whose week it builds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub profession: Profession,
    pub include_gym: bool,
    /// Target gym sessions per week (1-7).
    pub gym_frequency: u8,
    pub include_family_time: bool,
    pub include_weekend_work: bool,
    pub include_after_hours: bool,
    pub work_intensity: WorkIntensity,
}

impl GenerationConfig {
    /// Defaults offered when a profession is first picked.
    pub fn default_for(profession: Profession) -> Self {
        Self {
            profession,
            include_gym: true,
            gym_frequency: 3,
            include_family_time: true,
            include_weekend_work: false,
            include_after_hours: false,
            work_intensity: WorkIntensity::Moderate,
        }
    }

    /// A config with every optional block switched off.
    pub fn work_only(profession: Profession) -> Self {
        Self {
            include_gym: false,
            include_family_time: false,
            ..Self::default_for(profession)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !GYM_FREQUENCY_RANGE.contains(&self.gym_frequency) {
            return Err(ValidationError::InvalidValue {
                field: "gym_frequency".into(),
                message: format!("must be between 1 and 7, got {}", self.gym_frequency),
            });
        }
        Ok(())
    }

    /// Probability that a given weekday includes a morning gym session.
    ///
    /// Frequencies above five weekdays saturate at 1.0.
    pub fn weekday_gym_probability(&self) -> f64 {
        (f64::from(self.gym_frequency) / 5.0).min(1.0)
    }

    pub fn after_hours_probability(&self) -> f64 {
        self.profession.after_hours_likelihood() * self.work_intensity.multiplier()
    }

    pub fn weekend_work_probability(&self) -> f64 {
        self.profession.weekend_work_likelihood() * self.work_intensity.multiplier()
    }
}
