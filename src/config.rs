use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_PATH_ENV_VAR: &str = "SOJOURN_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env: Option<PathBuf> = env::var(CONFIG_PATH_ENV_VAR).ok().map(PathBuf::from);

    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to find home directory"))?;

    let home_config = home.join(".sojourn.toml");

    let config_xdg = dirs::config_dir()
        .unwrap_or_else(|| home.join(".config"))
        .join("sojourn")
        .join("config.toml");

    let mut locations = vec![config_xdg, home_config];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Redraw/update interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Marker printed next to today's day number.
    pub today_char: Option<char>,
    /// Marker printed next to the focused day number.
    pub focus_char: Option<char>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            today_char: Some('*'),
            focus_char: None,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn load(path: &Path) -> io::Result<Config> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}

/// Loads the config from an explicit path, or the first existing file
/// among the known locations, or falls back to the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> io::Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for location in find_configfile_locations()? {
        if location.is_file() {
            log::info!("using config file {}", location.display());
            return Config::load(&location);
        }
    }

    log::info!("no config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.today_char, Some('*'));
        assert_eq!(config.focus_char, None);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("tick_rate_ms = 250\n").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.today_char, Some('*'));
    }

    #[test]
    fn marker_overrides() {
        let config: Config = toml::from_str("today_char = \"#\"\nfocus_char = \">\"\n").unwrap();
        assert_eq!(config.today_char, Some('#'));
        assert_eq!(config.focus_char, Some('>'));
    }
}
