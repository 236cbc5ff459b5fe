use log::{error, info, LevelFilter};
use std::path::Path;

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::{Error, Result};

/// Environment variable that overrides the configured level
pub const LOG_ENV_VAR: &str = "CLOSET_LOG";

/// Initialize the rolling file logger in `log_dir`.
///
/// Logs go to the file only, so the GUI's console stays quiet.
pub fn init_logger(log_dir: &Path, level: LevelFilter) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("closet.log");
    let archived_logs_pattern = format!("{}/closet.{{}}.log", log_dir.display());

    // Rotate at 10MB and keep 5 archived files
    let file_trigger = SizeTrigger::new(10 * 1024 * 1024);
    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern, 5)
        .map_err(|e| Error::Configuration(format!("Failed to create log roller: {}", e)))?;

    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))?;

    let level = env_level().unwrap_or(level);
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(level))
        .map_err(|e| Error::Configuration(format!("Failed to build log config: {}", e)))?;

    log4rs::init_config(config)
        .map_err(|e| Error::Configuration(format!("Failed to initialize log4rs: {}", e)))?;

    info!("Digital closet started");
    info!("Logging to file: {}", log_file_path.display());
    Ok(())
}

/// Level requested through `CLOSET_LOG`, if it parses
pub fn env_level() -> Option<LevelFilter> {
    std::env::var(LOG_ENV_VAR).ok()?.parse().ok()
}

/// Log file operation that failed
pub fn log_file_error(path: &Path, operation: &str, error: &dyn std::error::Error) {
    error!(
        "File operation failed - Operation: {}, Path: {}, Error: {}",
        operation,
        path.display(),
        error
    );
}
