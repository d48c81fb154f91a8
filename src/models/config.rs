//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_password_hash_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by the report binary.
pub struct AppConfig {
    /// JSON registry snapshot used to seed the in-memory registry.
    pub seed_path: String,
    /// Bcrypt cost applied when hashing delivery person passwords.
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

#[cfg(feature = "cli")]
impl AppConfig {
    /// Reads `{dir}/default.yaml`, the optional `{dir}/{app_env}.yaml` overrides
    /// and finally `APP_*` environment variables.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<AppConfig>()
    }
}
