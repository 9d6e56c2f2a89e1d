use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use tracing::{info, warn};

use crate::errors::SeedError;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the database file used when no URL is configured
pub const DEFAULT_DATABASE_FILE: &str = "anythink.db";

/// Configuration for the seeder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Number of users (and items and comments) created by one seed run
    pub seed_count: usize,
    /// How many candidates are tried for one user before giving up
    pub max_user_attempts: u32,
    /// Delay before the first retry, doubled on each further retry
    pub retry_backoff_ms: u64,
    /// Pause between finishing an operation and showing the menu again
    pub prompt_delay_ms: u64,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub seed_count: Option<usize>,
    #[serde(default)]
    pub max_user_attempts: Option<u32>,
    #[serde(default)]
    pub retry_backoff_ms: Option<u64>,
    #[serde(default)]
    pub prompt_delay_ms: Option<u64>,
}

/// Command line arguments for the seeder
#[derive(Parser, Debug)]
#[clap(name = "anythink-seeds", about = "Seeds, clears and counts the anythink database")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Show the interactive menu instead of seeding once and exiting
    #[clap(long = "user-input")]
    pub user_input: bool,

    /// Debug mode
    #[clap(long, env = "SEEDS_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            seed_count: update.seed_count.unwrap_or(self.seed_count),
            max_user_attempts: update.max_user_attempts.unwrap_or(self.max_user_attempts),
            retry_backoff_ms: update.retry_backoff_ms.unwrap_or(self.retry_backoff_ms),
            prompt_delay_ms: update.prompt_delay_ms.unwrap_or(self.prompt_delay_ms),
        }
    }

    /// Returns the retry backoff as a Duration
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Returns the prompt delay as a Duration
    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }
}

/// Returns the base (default) configuration
pub fn base_config(config_path: Option<PathBuf>) -> Config {
    let database_url = config_path.map_or(DEFAULT_DATABASE_FILE.to_string(), |path| {
        path.join(DEFAULT_DATABASE_FILE).to_string_lossy().to_string()
    });

    Config {
        database_url,
        seed_count: 100,
        max_user_attempts: 10,
        retry_backoff_ms: 250,
        prompt_delay_ms: 1500,
    }
}

/// Loads configuration from a TOML file
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, SeedError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        warn!("Failed to read config file: {}", e);
        SeedError::Config(format!("Failed to read config file: {}", e))
    })?;

    let config = toml::from_str::<ConfigUpdate>(&content).map_err(|e| {
        warn!("Failed to parse config file: {}", e);
        SeedError::Config(format!("Failed to parse config file: {}", e))
    })?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(config)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        ..ConfigUpdate::default()
    }
}

/// Returns the platform config directory, if it exists
pub fn get_config_dir_path() -> Option<PathBuf> {
    let Some(proj_dirs) = ProjectDirs::from("com", "anythink", "anythink-seeds") else {
        warn!("Could not determine XDG config directory, skipping config file");
        return None;
    };

    let path = proj_dirs.config_dir().to_path_buf();
    if !path.exists() {
        info!("Config path not found at {:?}, using defaults", path);
        return None;
    }
    Some(path)
}

/// Merges the base configuration with the file and argument layers
///
/// Warns when neither layer names a database, mirroring how the seeder
/// treats a missing `DATABASE_URL`: the default location is used instead of
/// failing.
pub fn merge_config(base: Config, file: ConfigUpdate, args: ConfigUpdate) -> Config {
    if file.database_url.is_none() && args.database_url.is_none() {
        warn!(
            "Missing DATABASE_URL in env, please add it to your .env file (using {})",
            base.database_url
        );
    }

    base.apply_update(file).apply_update(args)
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: &CliArgs) -> Config {
    let config_dir = get_config_dir_path();

    let base = base_config(config_dir.clone());
    let file = config_from_file(config_dir.map(|dir| dir.join(CONFIG_FILE_NAME))).unwrap_or_default();
    let config = merge_config(base, file, config_from_args(args));

    info!(
        "Final configuration: database_url={}, seed_count={}, max_user_attempts={}, retry_backoff={}ms, prompt_delay={}ms",
        config.database_url,
        config.seed_count,
        config.max_user_attempts,
        config.retry_backoff_ms,
        config.prompt_delay_ms
    );

    config
}

#[cfg(test)]
mod tests;
