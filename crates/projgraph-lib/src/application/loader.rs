//! Configuration loading
//!
//! Coordinates loading configuration from env files, the environment and
//! the command line.

use crate::primitives::ConfigError;

use super::{cli::Cli, config::AppConfig, env::EnvironmentConfig};

/// Env files consulted before the process environment, first wins
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` style files; missing files are fine, unreadable ones are not
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        if let Err(e) = dotenvy::from_filename(env_file) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Resolve the effective config for a parsed command line:
    /// defaults -> env color conventions -> CLI (which already saw the
    /// `PROJGRAPH_*` variables).
    pub fn resolve(cli: &Cli, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env.apply_color_config(config.color);
        config = config.merge_with(cli.config.clone());
        config.validate()?;
        Ok(config)
    }

}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
