//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SIMQUERY_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::engine::StrategyKind;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIMQUERY_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Plain-text ground-truth file. Default: `ground-truth.txt`.
    pub ground_truth_path: PathBuf,

    /// Model directory for the selected strategy. Absent means the provider
    /// runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// Scoring strategy. Default: [`StrategyKind::Dense`].
    pub strategy: StrategyKind,
}

/// Default ground-truth filename used when `SIMQUERY_GROUND_TRUTH` is not
/// set.
pub const DEFAULT_GROUND_TRUTH_PATH: &str = "ground-truth.txt";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            ground_truth_path: PathBuf::from(DEFAULT_GROUND_TRUTH_PATH),
            model_path: None,
            strategy: StrategyKind::Dense,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SIMQUERY_PORT";
    const ENV_BIND_ADDR: &'static str = "SIMQUERY_BIND_ADDR";
    const ENV_GROUND_TRUTH: &'static str = "SIMQUERY_GROUND_TRUTH";
    const ENV_MODEL_PATH: &'static str = "SIMQUERY_MODEL_PATH";
    const ENV_STRATEGY: &'static str = "SIMQUERY_STRATEGY";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let ground_truth_path =
            Self::parse_path_from_env(Self::ENV_GROUND_TRUTH, defaults.ground_truth_path);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let strategy = Self::parse_strategy_from_env(defaults.strategy)?;

        Ok(Self {
            port,
            bind_addr,
            ground_truth_path,
            model_path,
            strategy,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ground_truth_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.ground_truth_path.clone(),
            });
        }
        if !self.ground_truth_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.ground_truth_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_strategy_from_env(default: StrategyKind) -> Result<StrategyKind, ConfigError> {
        match env::var(Self::ENV_STRATEGY) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "dense" => Ok(StrategyKind::Dense),
                "classifier" => Ok(StrategyKind::Classifier),
                _ => Err(ConfigError::InvalidStrategy { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
