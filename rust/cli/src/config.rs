use serde::{Deserialize, Serialize};
use std::fs;

use ventuno_engine::player::STARTING_CHIPS;
use ventuno_engine::supply::DEFAULT_SETS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub sets: usize,
    pub starting_chips: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub sets: ValueSource,
    pub starting_chips: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            sets: ValueSource::Default,
            starting_chips: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 1,
            sets: DEFAULT_SETS,
            starting_chips: STARTING_CHIPS,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `VENTUNO_CONFIG`, then `VENTUNO_SETS` / `VENTUNO_CHIPS` env overrides.
/// Each field remembers where its value came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("VENTUNO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.sets {
            cfg.sets = v;
            sources.sets = ValueSource::File;
        }
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("VENTUNO_SETS") {
        let parsed: usize = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("VENTUNO_SETS: {}", v)))?;
        cfg.sets = parsed;
        sources.sets = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("VENTUNO_CHIPS") {
        let parsed: u32 = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("VENTUNO_CHIPS: {}", v)))?;
        cfg.starting_chips = parsed;
        sources.starting_chips = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players < 1 || cfg.players > 3 {
        return Err(ConfigError::Invalid(format!(
            "players must be 1-3, got {}",
            cfg.players
        )));
    }
    if cfg.sets < 1 {
        return Err(ConfigError::Invalid("sets must be at least 1".to_string()));
    }
    if cfg.starting_chips < 1 {
        return Err(ConfigError::Invalid(
            "starting_chips must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    players: Option<usize>,
    sets: Option<usize>,
    starting_chips: Option<u32>,
    seed: Option<u64>,
}
