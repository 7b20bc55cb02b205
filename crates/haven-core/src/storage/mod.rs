mod config;

pub use config::{ApiConfig, Config, LocationConfig, SosConfig};

use std::path::PathBuf;

/// Returns the configuration directory.
///
/// `HAVEN_CONFIG_DIR` wins if set. Otherwise `~/.config/haven[-dev]/`,
/// with `HAVEN_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("HAVEN_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HAVEN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("haven-dev")
            } else {
                base_dir.join("haven")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
