use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the Supabase auth (GoTrue) API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    pub anon_key: String,
    /// Admin key used to read identities; never logged
    pub service_role_key: String,
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SupabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::supabase(
                "supabase.url is required (set SUPABASE_URL or UG_SUPABASE_URL)",
            ));
        }

        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::supabase(format!(
                "supabase.url must start with http:// or https://, got {}",
                self.url
            )));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::supabase(
                "supabase.anon_key is required (set SUPABASE_ANON_KEY or UG_SUPABASE_ANON_KEY)",
            ));
        }

        if self.service_role_key.trim().is_empty() {
            return Err(ConfigError::supabase(
                "supabase.service_role_key is required \
                 (set SUPABASE_SERVICE_ROLE_KEY or UG_SUPABASE_SERVICE_ROLE_KEY)",
            ));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::supabase(format!(
                "supabase.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// URL without trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
