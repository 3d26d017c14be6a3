//! Configuration management for the NPT server
//!
//! Sources are layered lowest to highest: built-in defaults, the YAML file
//! (`conf/application.yml` unless `--config` says otherwise), `NPT_*`
//! environment variables, then command line flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, ConfigBuilder, ConfigError, Environment, builder::DefaultState};

use npt_auth::{HrisConfig, LoginMode, model::DEFAULT_HRIS_LOGIN_URL, model::DEFAULT_LOGIN_TIMEOUT_MS};
use npt_common::NptError;
use npt_persistence::StorageMode;

use super::constants::*;
use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Default, Parser)]
#[command(version, about = "NPT backend server")]
pub struct Cli {
    /// Configuration file (YAML); missing files are ignored
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,
    #[arg(short = 'p', long = "port", env = "PORT")]
    pub port: Option<u16>,
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,
    /// `pass-through` or `form`
    #[arg(long = "login-mode")]
    pub login_mode: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Load configuration using the process command line.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(args: Cli) -> Result<Self, ConfigError> {
        let mut config_builder = Self::defaults()?
            .add_source(config::File::with_name(&args.config_file).required(false))
            .add_source(
                Environment::with_prefix("NPT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = args.port {
            config_builder = config_builder.set_override(SERVER_PORT, i64::from(v))?;
        }
        if let Some(v) = args.data_dir {
            config_builder = config_builder.set_override(DATA_DIR, v)?;
        }
        if let Some(v) = args.login_mode {
            config_builder = config_builder.set_override(HRIS_LOGIN_MODE, v)?;
        }

        Ok(Configuration {
            config: config_builder.build()?,
        })
    }

    /// Builder pre-populated with every default value.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(SERVER_ADDRESS, DEFAULT_SERVER_ADDRESS)?
            .set_default(SERVER_PORT, i64::from(DEFAULT_SERVER_PORT))?
            .set_default(SERVER_CONTEXT_PATH, "")?
            .set_default(SERVER_SHUTDOWN_TIMEOUT_SECS, DEFAULT_SHUTDOWN_TIMEOUT_SECS)?
            .set_default(STORAGE_MODE, StorageMode::File.to_string())?
            .set_default(DATA_DIR, DEFAULT_DATA_DIR)?
            .set_default(DATA_FILE, DEFAULT_DATA_FILE)?
            .set_default(LOGS_CONSOLE, true)?
            .set_default(LOGS_FILE, true)?
            .set_default(LOGS_LEVEL, DEFAULT_LOG_LEVEL)?
            .set_default(LOGS_ROTATION, DEFAULT_LOG_ROTATION)?
            .set_default(HRIS_LOGIN_MODE, LoginMode::PassThrough.to_string())?
            .set_default(HRIS_LOGIN_URL, DEFAULT_HRIS_LOGIN_URL)?
            .set_default(HRIS_LOGIN_API_KEY, "")?
            .set_default(HRIS_LOGIN_AUTHORIZATION, "")?
            .set_default(HRIS_LOGIN_TIMEOUT_MS, DEFAULT_LOGIN_TIMEOUT_MS)
    }

    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT)
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn server_context_path(&self) -> String {
        self.config
            .get_string(SERVER_CONTEXT_PATH)
            .unwrap_or_default()
    }

    pub fn shutdown_timeout(&self) -> Duration {
        let secs = self
            .config
            .get_int(SERVER_SHUTDOWN_TIMEOUT_SECS)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    // ========================================================================
    // Storage Configuration
    // ========================================================================

    pub fn storage_mode(&self) -> Result<StorageMode, NptError> {
        self.config
            .get_string(STORAGE_MODE)
            .unwrap_or_default()
            .parse()
            .map_err(NptError::Config)
    }

    pub fn data_dir(&self) -> String {
        self.config
            .get_string(DATA_DIR)
            .unwrap_or(DEFAULT_DATA_DIR.to_string())
    }

    pub fn data_file(&self) -> String {
        self.config
            .get_string(DATA_FILE)
            .unwrap_or(DEFAULT_DATA_FILE.to_string())
    }

    // ========================================================================
    // HRIS Login Configuration
    // ========================================================================

    pub fn hris_config(&self) -> Result<HrisConfig, NptError> {
        let mode: LoginMode = self
            .config
            .get_string(HRIS_LOGIN_MODE)
            .unwrap_or_default()
            .parse()
            .map_err(NptError::Config)?;

        let timeout_ms = self
            .config
            .get_int(HRIS_LOGIN_TIMEOUT_MS)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_LOGIN_TIMEOUT_MS);

        Ok(HrisConfig {
            mode,
            url: self
                .config
                .get_string(HRIS_LOGIN_URL)
                .unwrap_or(DEFAULT_HRIS_LOGIN_URL.to_string()),
            api_key: self
                .config
                .get_string(HRIS_LOGIN_API_KEY)
                .unwrap_or_default(),
            authorization: self
                .config
                .get_string(HRIS_LOGIN_AUTHORIZATION)
                .unwrap_or_default(),
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGS_PATH).ok(),
            self.config.get_bool(LOGS_CONSOLE).unwrap_or(true),
            self.config.get_bool(LOGS_FILE).unwrap_or(true),
            self.config
                .get_string(LOGS_LEVEL)
                .unwrap_or(DEFAULT_LOG_LEVEL.to_string()),
            self.config
                .get_string(LOGS_ROTATION)
                .unwrap_or(DEFAULT_LOG_ROTATION.to_string()),
        )
    }
}
