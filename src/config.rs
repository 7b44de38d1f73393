//! Optional CLI-surface configuration
//!
//! `~/.config/ferrofetch/config.toml` may reorder or drop info fields and
//! change the label separator. Anything missing or malformed falls back
//! to built-in defaults; configuration problems never fail the run.

use dirs::config_dir;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct DisplayConfig {
    pub separator: Option<String>,
    pub fields: Option<Vec<String>>,
}

pub fn load_config() -> Config {
    let Some(path) = config_dir().map(|p| p.join("ferrofetch/config.toml")) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Warning: could not read {}: {}", path.display(), err);
            return Config::default();
        }
    };
    match toml::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: ignoring malformed {}: {}", path.display(), err);
            Config::default()
        }
    }
}
