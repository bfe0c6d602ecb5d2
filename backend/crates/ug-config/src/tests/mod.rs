
use std::env;

use tempfile::TempDir;

/// Variables a developer shell may carry that would leak into config tests
const AMBIENT_VARS: [&str; 9] = [
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
    "UG_SERVER_PORT",
    "UG_SUPABASE_URL",
    "UG_SUPABASE_ANON_KEY",
    "UG_SUPABASE_SERVICE_ROLE_KEY",
    "UG_LOG_LEVEL",
    "UG_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point UG_CONFIG_DIR at it and clear
/// ambient overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = AMBIENT_VARS.iter().map(|k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::set(
        "UG_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}

/// Set a complete, valid Supabase configuration through the conventional vars
pub(crate) fn valid_supabase_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SUPABASE_URL", "https://project.supabase.co"),
        EnvGuard::set("SUPABASE_ANON_KEY", "anon-key"),
        EnvGuard::set("SUPABASE_SERVICE_ROLE_KEY", "service-role-key"),
    ]
}

/// Write config.toml into the temp config dir
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
