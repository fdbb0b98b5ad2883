use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}";

/// Backend settings for binaries that install log4rs through [`crate::logger`].
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: String,
    pub pattern: String,
}

pub fn load_config() -> Result<LogSettings, ConfigError> {
    load_config_from("config/logex")
}

/// Defaults, then the optional file `path` (any extension `config` knows),
/// then `LOGEX_*` environment variables.
pub fn load_config_from(path: &str) -> Result<LogSettings, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("log_level", "info")?
        .set_default("log_to_file", false)?
        .set_default("log_file", "log/logex.log")?
        .set_default("pattern", DEFAULT_PATTERN)?
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("LOGEX"))
        .build()?;

    s.try_deserialize()
}
