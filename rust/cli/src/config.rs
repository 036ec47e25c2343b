use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::TableArgs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub players: u8,
    pub opponent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub players: ValueSource,
    pub opponent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            players: ValueSource::Default,
            opponent: ValueSource::Default,
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
            starting_stack: 1000,
            big_blind: 20,
            seed: None,
            players: 4,
            opponent: "heuristic".into(),
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, raw)))
}

/// Defaults, then the TOML file named by `TABLESTAKES_CONFIG`, then
/// `TABLESTAKES_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value("TABLESTAKES_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.opponent {
            cfg.opponent = v;
            sources.opponent = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("TABLESTAKES_SEED") {
        cfg.seed = Some(parse_env("TABLESTAKES_SEED", &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(bb) = env_value("TABLESTAKES_BIG_BLIND") {
        cfg.big_blind = parse_env("TABLESTAKES_BIG_BLIND", &bb)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(stack) = env_value("TABLESTAKES_STARTING_STACK") {
        cfg.starting_stack = parse_env("TABLESTAKES_STARTING_STACK", &stack)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(players) = env_value("TABLESTAKES_PLAYERS") {
        cfg.players = parse_env("TABLESTAKES_PLAYERS", &players)?;
        sources.players = ValueSource::Env;
    }
    if let Some(kind) = env_value("TABLESTAKES_OPPONENT") {
        cfg.opponent = kind.trim().to_string();
        sources.opponent = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Resolves the configuration and lays command-line flags over it.
pub fn resolve(args: &TableArgs) -> Result<ConfigResolved, ConfigError> {
    let ConfigResolved {
        mut config,
        mut sources,
    } = load_with_sources()?;

    if let Some(v) = args.players {
        config.players = v;
        sources.players = ValueSource::Cli;
    }
    if let Some(v) = args.seed {
        config.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = args.big_blind {
        config.big_blind = v;
        sources.big_blind = ValueSource::Cli;
    }
    if let Some(v) = args.stack {
        config.starting_stack = v;
        sources.starting_stack = ValueSource::Cli;
    }
    if let Some(v) = &args.opponent {
        config.opponent = v.trim().to_string();
        sources.opponent = ValueSource::Cli;
    }

    validate(&config)?;
    Ok(ConfigResolved { config, sources })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<u8>,
    #[serde(default)]
    opponent: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.big_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must be >0".into(),
        ));
    }
    if cfg.starting_stack <= cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack ({}) must exceed big_blind ({})",
            cfg.starting_stack, cfg.big_blind
        )));
    }
    if !(2..=10).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be 2..=10, got {}",
            cfg.players
        )));
    }
    let chips = u64::from(cfg.starting_stack) * u64::from(cfg.players);
    if chips > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} players with {} chips each exceed {} chips at the table",
            cfg.players,
            cfg.starting_stack,
            u32::MAX
        )));
    }
    if !tablestakes_ai::KINDS.contains(&cfg.opponent.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown opponent {:?}",
            cfg.opponent
        )));
    }
    Ok(())
}
