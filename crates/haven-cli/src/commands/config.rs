//! `haven config`: read and edit `config.toml`.
//!
//! Keys are dot paths into three sections:
//! - `api.base_url`, `api.timeout_ms`
//! - `sos.hold_threshold_ms`, `sos.location_timeout_ms`, `sos.emergency_number`
//! - `location.latitude`, `location.longitude`

use clap::Subcommand;
use haven_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value
    Get {
        /// Dot path, e.g. "sos.emergency_number" or "location.latitude"
        key: String,
    },
    /// Change one value and save ("null" clears a location coordinate)
    Set {
        /// Dot path, e.g. "api.timeout_ms"
        key: String,
        /// New value, parsed by the type of the current one
        value: String,
    },
    /// Print the whole config as JSON
    List,
    /// Overwrite the config with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            Config::load()?.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => println!("{}", serde_json::to_string_pretty(&Config::load()?)?),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
