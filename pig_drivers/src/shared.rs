use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG_FILE_NAME: &str = ".pig.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Rule(#[from] pig::PigError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rule: ConfigRule,
    pub pig_console: ConfigPigConsole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRule {
    pub sides: u8,
    pub target_score: u32,
    pub computer_hold_cap: u32,
    /// Only used when playing a timed match.
    pub time_budget_secs: u64,
}

impl ConfigRule {
    pub fn get_time_budget(&self) -> Duration {
        Duration::from_secs(self.time_budget_secs)
    }
}

impl Default for ConfigRule {
    fn default() -> Self {
        let rule = pig::Rule::default();
        ConfigRule {
            sides: rule.sides,
            target_score: rule.target_score,
            computer_hold_cap: rule.computer_hold_cap,
            time_budget_secs: pig::DEFAULT_TIME_BUDGET.as_secs(),
        }
    }
}

/// Converts to an untimed rule.
impl TryInto<pig::Rule> for ConfigRule {
    type Error = ConfigError;

    fn try_into(self) -> Result<pig::Rule, Self::Error> {
        let pig_rule = pig::Rule {
            sides: self.sides,
            target_score: self.target_score,
            computer_hold_cap: self.computer_hold_cap,
            time_budget: None,
        };
        pig_rule.validate()?;

        Ok(pig_rule)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPigConsole {
    pub seed: u64,
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &Path) -> Result<Config, ConfigError> {
    let file_content = fs::read_to_string(filename).map_err(|source| ConfigError::Read {
        path: filename.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&file_content)?)
}

/// Loads the given config file. Without one, loads `~/.pig.yml` if it exists
/// and falls back to the default config otherwise.
pub fn resolve_config(filename: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(filename) = filename {
        return parse_config_from_file(filename);
    }

    let default_path = home::home_dir().map(|home_dir| home_dir.join(DEFAULT_CONFIG_FILE_NAME));
    match default_path {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config_from_file(&path)
        }
        _ => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}
