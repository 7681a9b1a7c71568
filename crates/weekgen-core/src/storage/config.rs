//! TOML-based application settings.
//!
//! Stores user preferences including:
//! - The default profile offered by the generator (profession and options)
//! - An optional fixed seed for reproducible weeks
//! - Display toggles for the CLI week view
//!
//! Settings are stored at `~/.config/weekgen/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::generator::GenerationSeed;
use crate::options::{GenerationConfig, WorkIntensity};
use crate::profession::Profession;

/// Default generation profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profession")]
    pub profession: Profession,
    #[serde(default = "default_true")]
    pub include_gym: bool,
    #[serde(default = "default_gym_frequency")]
    pub gym_frequency: u8,
    #[serde(default = "default_true")]
    pub include_family_time: bool,
    #[serde(default)]
    pub include_weekend_work: bool,
    #[serde(default)]
    pub include_after_hours: bool,
    #[serde(default)]
    pub work_intensity: WorkIntensity,
}

/// Generation behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Fixed seed; every run produces the same week when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Week view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_notes: bool,
    #[serde(default = "default_true")]
    pub show_colors: bool,
}

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/weekgen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_profession() -> Profession {
    Profession::Lawyer
}
fn default_gym_frequency() -> u8 {
    3
}
fn default_true() -> bool {
    true
}

impl Default for ProfileConfig {
    fn default() -> Self {
        GenerationConfig::default_for(default_profession()).into()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_notes: true,
            show_colors: true,
        }
    }
}

impl From<GenerationConfig> for ProfileConfig {
    fn from(cfg: GenerationConfig) -> Self {
        Self {
            profession: cfg.profession,
            include_gym: cfg.include_gym,
            gym_frequency: cfg.gym_frequency,
            include_family_time: cfg.include_family_time,
            include_weekend_work: cfg.include_weekend_work,
            include_after_hours: cfg.include_after_hours,
            work_intensity: cfg.work_intensity,
        }
    }
}

impl ProfileConfig {
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            profession: self.profession,
            include_gym: self.include_gym,
            gym_frequency: self.gym_frequency,
            include_family_time: self.include_family_time,
            include_weekend_work: self.include_weekend_work,
            include_after_hours: self.include_after_hours,
            work_intensity: self.work_intensity,
        }
    }
}

impl Settings {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".into(),
        };
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(invalid("config key is empty".into()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => Self::parse_number(value).map_err(invalid)?,
                    // Optional numbers: "none" clears them
                    serde_json::Value::Null => match value {
                        "" | "none" | "null" => serde_json::Value::Null,
                        _ => Self::parse_number(value).map_err(invalid)?,
                    },
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot set a whole section".into()));
                    }
                    _ => serde_json::Value::String(value.trim().to_ascii_lowercase()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Non-negative integer that TOML can store (TOML integers are i64).
    fn parse_number(value: &str) -> std::result::Result<serde_json::Value, String> {
        let n: u64 = value
            .parse()
            .map_err(|_| format!("cannot parse '{value}' as number"))?;
        if i64::try_from(n).is_err() {
            return Err(format!("{n} is too large, the maximum is {}", i64::MAX));
        }
        Ok(serde_json::Value::Number(n.into()))
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed,
    /// or if the default settings cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings: Settings =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                Ok(settings)
            }
            Err(_) => {
                let settings = Self::default();
                settings.save_to(path)?;
                Ok(settings)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a settings value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value by key in memory, validating the resulting profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit it.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Settings = serde_json::from_value(json).map_err(|e| {
            CoreError::from(ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
        })?;
        updated
            .profile
            .to_generation_config()
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        *self = updated;
        Ok(())
    }

    /// Set a value by key and persist. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    pub fn seed(&self) -> Option<GenerationSeed> {
        self.generation.seed.map(GenerationSeed::new)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.profile.profession, Profession::Lawyer);
        assert_eq!(parsed.profile.gym_frequency, 3);
        assert!(parsed.generation.seed.is_none());
        assert!(parsed.display.show_notes);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Settings = toml::from_str(
            r#"
            [profile]
            profession = "plumber"
            work_intensity = "intense"

            [generation]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(parsed.profile.profession, Profession::Plumber);
        assert_eq!(parsed.profile.work_intensity, WorkIntensity::Intense);
        assert!(parsed.profile.include_gym);
        assert_eq!(parsed.seed(), Some(GenerationSeed::new(7)));
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let settings = Settings::default();
        assert_eq!(settings.get("profile.profession").as_deref(), Some("lawyer"));
        assert_eq!(settings.get("profile.gym_frequency").as_deref(), Some("3"));
        assert_eq!(settings.get("display.show_colors").as_deref(), Some("true"));
        assert_eq!(settings.get("generation.seed").as_deref(), Some("null"));
        assert!(settings.get("profile.missing_key").is_none());
    }

    #[test]
    fn apply_updates_typed_values() {
        let mut settings = Settings::default();
        settings.apply("profile.profession", "Doctor").unwrap();
        settings.apply("profile.include_after_hours", "true").unwrap();
        settings.apply("profile.gym_frequency", "5").unwrap();
        settings.apply("generation.seed", "42").unwrap();

        assert_eq!(settings.profile.profession, Profession::Doctor);
        assert!(settings.profile.include_after_hours);
        assert_eq!(settings.profile.gym_frequency, 5);
        assert_eq!(settings.generation.seed, Some(42));

        settings.apply("generation.seed", "none").unwrap();
        assert_eq!(settings.generation.seed, None);
    }

    #[test]
    fn apply_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(settings.apply("profile.nonexistent_key", "1").is_err());
        assert!(settings.apply("profile.include_gym", "sometimes").is_err());
        assert!(settings.apply("profile.profession", "astronaut").is_err());
        assert!(settings.apply("profile.gym_frequency", "9").is_err());
        assert!(settings.apply("profile", "x").is_err());
        assert!(settings.apply("", "x").is_err());
        // nothing was applied
        assert_eq!(settings.profile.gym_frequency, 3);
        assert_eq!(settings.profile.profession, Profession::Lawyer);
    }

    #[test]
    fn load_from_writes_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let first = Settings::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first.profile.profession, Profession::Lawyer);

        let mut changed = first.clone();
        changed.apply("profile.profession", "mechanic").unwrap();
        changed.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.profile.profession, Profession::Mechanic);
    }

    #[test]
    fn seed_must_fit_in_toml_integer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut settings = Settings::default();

        let err = settings
            .apply("generation.seed", &u64::MAX.to_string())
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert!(settings.apply("generation.seed", "9223372036854775808").is_err());
        assert_eq!(settings.generation.seed, None);

        settings
            .apply("generation.seed", &i64::MAX.to_string())
            .unwrap();
        settings.save_to(&path).unwrap();
        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.generation.seed, Some(i64::MAX as u64));
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "profile = [").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn profile_converts_to_generation_config() {
        let profile = ProfileConfig::default();
        let cfg = profile.to_generation_config();
        assert_eq!(cfg, GenerationConfig::default_for(Profession::Lawyer));
    }
}
