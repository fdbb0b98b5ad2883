use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
};

use crate::configure::{load_config, LogSettings};
use crate::error::{LogExError, Result};

/// Map a configured level name to a filter. Unknown names fall back to Info.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info
    }
}

/// Build the log4rs config: stdout always, plus a file appender when
/// `log_to_file` is set.
pub fn build_config(settings: &LogSettings) -> Result<LogConfig> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(&settings.pattern)))
        .build();

    let mut log_config_builder = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));

    let mut root_builder = Root::builder().appender("stdout");

    // Conditionally add file appender
    if settings.log_to_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(&settings.pattern)))
            .build(&settings.log_file)
            .map_err(|e| LogExError::Setup(format!("{}: {}", settings.log_file, e)))?;

        log_config_builder =
            log_config_builder.appender(Appender::builder().build("file", Box::new(file)));

        root_builder = root_builder.appender("file");
    }

    log_config_builder
        .build(root_builder.build(parse_level(&settings.log_level)))
        .map_err(|e| LogExError::Setup(e.to_string()))
}

/// Install log4rs as the global `log` backend.
pub fn setup_logger(settings: &LogSettings) -> Result<()> {
    let log_config = build_config(settings)?;
    log4rs::init_config(log_config)?;

    log::debug!(
        target: crate::LOG_TARGET,
        "logger initialized (level={}, file={})",
        settings.log_level,
        if settings.log_to_file { settings.log_file.as_str() } else { "-" }
    );
    Ok(())
}

/// Load settings with [`load_config`] and install the backend.
pub fn init() -> Result<()> {
    let settings = load_config()?;
    setup_logger(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure::DEFAULT_PATTERN;

    fn settings(level: &str) -> LogSettings {
        LogSettings {
            log_level: level.to_string(),
            log_to_file: false,
            log_file: "log/logex.log".to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_build_console_only() {
        let config = build_config(&settings("debug")).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.root().appenders(), ["stdout".to_string()]);
    }

    #[test]
    fn test_build_with_file() {
        let dir = std::env::temp_dir().join(format!("logex-logger-{}", std::process::id()));
        let mut s = settings("error");
        s.log_to_file = true;
        s.log_file = dir.join("app.log").to_string_lossy().into_owned();

        let config = build_config(&s).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Error);
        assert_eq!(config.root().appenders().len(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}
