use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub tables: TableSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_destinations_table")]
    pub destinations: String,
    #[serde(default = "default_bookings_table")]
    pub bookings: String,
    #[serde(default = "default_guides_table")]
    pub guides: String,
    #[serde(default = "default_reviews_table")]
    pub reviews: String,
    #[serde(default = "default_events_table")]
    pub cultural_events: String,
    #[serde(default = "default_profiles_table")]
    pub user_profiles: String,
    #[serde(default = "default_itineraries_table")]
    pub itineraries: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            destinations: default_destinations_table(),
            bookings: default_bookings_table(),
            guides: default_guides_table(),
            reviews: default_reviews_table(),
            cultural_events: default_events_table(),
            user_profiles: default_profiles_table(),
            itineraries: default_itineraries_table(),
        }
    }
}

fn default_destinations_table() -> String { "destinations".to_string() }
fn default_bookings_table() -> String { "bookings".to_string() }
fn default_guides_table() -> String { "guides".to_string() }
fn default_reviews_table() -> String { "reviews".to_string() }
fn default_events_table() -> String { "cultural_events".to_string() }
fn default_profiles_table() -> String { "user_profiles".to_string() }
fn default_itineraries_table() -> String { "itineraries".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Shared L2 tier; the service runs on the in-process cache without it
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with YATRA_)
    /// 4. SUPABASE_URL / SUPABASE_ANON_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., YATRA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("YATRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("YATRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional Supabase environment variables on top of the config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL").ok();
    let supabase_key = env::var("SUPABASE_ANON_KEY").ok();
    let redis_url = env::var("REDIS_URL").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(key) = supabase_key {
        builder = builder.set_override("supabase.anon_key", key)?;
    }
    if let Some(url) = redis_url {
        builder = builder.set_override("cache.redis_url", url)?;
    }

    builder.build()
}
