use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;
use weekgen_core::week::week_start;
use weekgen_core::{
    export_events, generation_rng, Event, GenerationConfig, GenerationSeed, JsonFileStore,
    Profession, Settings, WeekGenerator, WorkIntensity,
};

use crate::view;

/// Options for one generated week. Anything left out comes from the
/// configured profile.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Profession (e.g. lawyer, plumber)
    #[arg(long, short)]
    pub profession: Option<Profession>,
    /// Any date inside the week to generate (YYYY-MM-DD, default: today)
    #[arg(long, short)]
    pub date: Option<NaiveDate>,
    /// Include gym sessions
    #[arg(long, overrides_with = "no_gym")]
    pub gym: bool,
    #[arg(long, hide = true)]
    pub no_gym: bool,
    /// Gym sessions per week (1-7)
    #[arg(long)]
    pub gym_frequency: Option<u8>,
    /// Include family time
    #[arg(long, overrides_with = "no_family")]
    pub family: bool,
    #[arg(long, hide = true)]
    pub no_family: bool,
    /// Include weekend work
    #[arg(long, overrides_with = "no_weekend_work")]
    pub weekend_work: bool,
    #[arg(long, hide = true)]
    pub no_weekend_work: bool,
    /// Include after-hours work
    #[arg(long, overrides_with = "no_after_hours")]
    pub after_hours: bool,
    #[arg(long, hide = true)]
    pub no_after_hours: bool,
    /// Work intensity: light, moderate or intense
    #[arg(long)]
    pub intensity: Option<WorkIntensity>,
    /// Seed for a reproducible week
    #[arg(long)]
    pub seed: Option<u64>,
}

/// A fully resolved generation request.
#[derive(Debug, Clone)]
pub struct WeekRequest {
    pub config: GenerationConfig,
    pub start: NaiveDate,
    pub seed: Option<GenerationSeed>,
}

impl WeekRequest {
    pub fn generate(&self) -> Vec<Event> {
        debug!(
            profession = %self.config.profession,
            start = %self.start,
            seed = ?self.seed.map(|s| s.0),
            "generating week"
        );
        let mut rng = generation_rng(self.seed);
        WeekGenerator::new(self.config).generate_week(self.start, &mut rng)
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

impl GenerateArgs {
    /// Merge flags over the configured profile and align the date to its week.
    pub fn resolve(&self, settings: &Settings) -> Result<WeekRequest, Box<dyn std::error::Error>> {
        let profile = &settings.profile;
        let config = GenerationConfig {
            profession: self.profession.unwrap_or(profile.profession),
            include_gym: toggle(self.gym, self.no_gym, profile.include_gym),
            gym_frequency: self.gym_frequency.unwrap_or(profile.gym_frequency),
            include_family_time: toggle(self.family, self.no_family, profile.include_family_time),
            include_weekend_work: toggle(
                self.weekend_work,
                self.no_weekend_work,
                profile.include_weekend_work,
            ),
            include_after_hours: toggle(
                self.after_hours,
                self.no_after_hours,
                profile.include_after_hours,
            ),
            work_intensity: self.intensity.unwrap_or(profile.work_intensity),
        };
        config.validate()?;

        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let seed = self.seed.map(GenerationSeed::new).or_else(|| settings.seed());

        Ok(WeekRequest {
            config,
            start: week_start(date),
            seed,
        })
    }
}

pub fn run(args: GenerateArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();
    let request = args.resolve(&settings)?;
    let events = request.generate();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        print!(
            "{}",
            view::render_week(&request.config, request.start, &events, &settings.display)
        );
    }
    Ok(())
}

pub fn export(args: GenerateArgs, out: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();
    let request = args.resolve(&settings)?;
    let events = request.generate();

    let mut store = JsonFileStore::new(out);
    let summary = export_events(&mut store, &events)?;
    println!("{}", summary.message());
    Ok(())
}
