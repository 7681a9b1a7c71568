use clap::Subcommand;
use weekgen_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "profile.profession", "generation.seed")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value ("none" clears an optional value)
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let settings = Settings::load()?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let settings = Settings::load()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Reset => {
            Settings::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
