use bridgehand_engine::board::Seat;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BRIDGEHAND_CONFIG";
pub const SEED_ENV: &str = "BRIDGEHAND_SEED";
pub const BOARDS_ENV: &str = "BRIDGEHAND_BOARDS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub boards: u32,
    pub start_board: u32,
    pub max_boards: u32,
    pub seat: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub boards: ValueSource,
    pub start_board: ValueSource,
    pub max_boards: ValueSource,
    pub seat: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            boards: ValueSource::Default,
            start_board: ValueSource::Default,
            max_boards: ValueSource::Default,
            seat: ValueSource::Default,
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
            seed: None,
            boards: 1,
            start_board: 1,
            max_boards: 10_000,
            seat: Seat::South,
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

/// Defaults, then the TOML file named by `BRIDGEHAND_CONFIG`, then the
/// `BRIDGEHAND_SEED` / `BRIDGEHAND_BOARDS` environment variables.
/// Command-line flags are applied on top by each command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path = %path, "config file loaded");
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.boards {
            cfg.boards = v;
            sources.boards = ValueSource::File;
        }
        if let Some(v) = f.start_board {
            cfg.start_board = v;
            sources.start_board = ValueSource::File;
        }
        if let Some(v) = f.max_boards {
            cfg.max_boards = v;
            sources.max_boards = ValueSource::File;
        }
        if let Some(v) = f.seat {
            cfg.seat = v;
            sources.seat = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(boards) = std::env::var(BOARDS_ENV)
        && !boards.is_empty()
    {
        cfg.boards = boards
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid boards: {}", boards)))?;
        sources.boards = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    boards: Option<u32>,
    #[serde(default)]
    start_board: Option<u32>,
    #[serde(default)]
    max_boards: Option<u32>,
    #[serde(default)]
    seat: Option<Seat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.boards == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: boards must be >0".into(),
        ));
    }
    if cfg.start_board == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: start_board must be >=1".into(),
        ));
    }
    if cfg.max_boards == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_boards must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        for cfg in [
            Config {
                boards: 0,
                ..Config::default()
            },
            Config {
                start_board: 0,
                ..Config::default()
            },
            Config {
                max_boards: 0,
                ..Config::default()
            },
        ] {
            assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_file_config_parses_seat_names() {
        let f: FileConfig = toml::from_str("seat = \"North\"\nmax_boards = 50\n").unwrap();
        assert_eq!(f.seat, Some(Seat::North));
        assert_eq!(f.max_boards, Some(50));
        assert!(f.seed.is_none());
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("level = 3\n").is_err());
    }
}
