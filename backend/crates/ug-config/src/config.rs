use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ServerConfig, SupabaseConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for UG_CONFIG_DIR env var, else use ./.ug/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SUPABASE_* then UG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UG_CONFIG_DIR env var > ./.ug/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.supabase.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs keys).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  supabase: {} (anon key: {}, service role key: {}, timeout: {}s)",
            self.supabase.url,
            Self::presence(&self.supabase.anon_key),
            Self::presence(&self.supabase.service_role_key),
            self.supabase.timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn presence(secret: &str) -> &'static str {
        if secret.is_empty() { "missing" } else { "set" }
    }

    fn apply_env_overrides(&mut self) {
        // Supabase runtime conventions first, so UG_* names win
        Self::apply_env_string("SUPABASE_URL", &mut self.supabase.url);
        Self::apply_env_string("SUPABASE_ANON_KEY", &mut self.supabase.anon_key);
        Self::apply_env_string(
            "SUPABASE_SERVICE_ROLE_KEY",
            &mut self.supabase.service_role_key,
        );

        // Server
        Self::apply_env_string("UG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UG_SERVER_PORT", &mut self.server.port);

        // Supabase
        Self::apply_env_string("UG_SUPABASE_URL", &mut self.supabase.url);
        Self::apply_env_string("UG_SUPABASE_ANON_KEY", &mut self.supabase.anon_key);
        Self::apply_env_string(
            "UG_SUPABASE_SERVICE_ROLE_KEY",
            &mut self.supabase.service_role_key,
        );
        Self::apply_env_parse("UG_SUPABASE_TIMEOUT_SECS", &mut self.supabase.timeout_secs);

        // Logging
        Self::apply_env_parse("UG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UG_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("UG_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
