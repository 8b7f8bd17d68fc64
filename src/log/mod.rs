// Logging infrastructure for the ValueBid application

use crate::config::get_log_dir;
use crate::error::{Result, ValueBidError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use strum::{Display, EnumString};

mod file_appender;
mod formatter;

pub use file_appender::FileAppender;
pub use formatter::LogFormatter;

/// Log level enumeration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: LogLevel,
    pub max_file_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: get_log_dir(),
            log_level: LogLevel::Info,
            max_file_size: 1024 * 1024, // 1MB
        }
    }
}

/// Global logger instance
pub struct Logger {
    config: LogConfig,
    appender: Arc<Mutex<FileAppender>>,
}

impl Logger {
    fn new(config: LogConfig) -> Result<Self> {
        let appender = FileAppender::new(config.log_dir.clone(), config.max_file_size)?;

        Ok(Self {
            config,
            appender: Arc::new(Mutex::new(appender)),
        })
    }

    pub fn log(&self, level: LogLevel, module: &str, message: &str) {
        if level < self.config.log_level {
            return;
        }

        let formatted = LogFormatter::format_with_timestamp(level, module, message);

        if let Ok(mut appender) = self.appender.lock() {
            let _ = appender.write_log(&formatted);
        }
    }
}

static LOGGER: Lazy<Mutex<Option<Logger>>> = Lazy::new(|| Mutex::new(None));

/// Initialize the logging system with the given configuration
pub fn init_logger(config: LogConfig) -> Result<()> {
    let logger = Logger::new(config)?;

    if let Ok(mut global_logger) = LOGGER.lock() {
        *global_logger = Some(logger);
        Ok(())
    } else {
        Err(ValueBidError::Log("Failed to acquire logger lock".to_string()))
    }
}

/// Log a message at the specified level. A no-op until [`init_logger`] runs.
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(logger_guard) = LOGGER.lock()
        && let Some(logger) = logger_guard.as_ref()
    {
        logger.log(level, module, message);
    }
}

/// Logging macros for convenient use throughout the codebase
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Trace, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Debug, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Info, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Warn, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Error, module_path!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_level_parse_and_order() {
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("loud").is_err());
        assert!(LogLevel::Trace < LogLevel::Error);
    }

    #[test]
    fn test_level_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new(LogConfig {
            log_dir: dir.path().to_path_buf(),
            log_level: LogLevel::Warn,
            max_file_size: 4096,
        })
        .unwrap();

        logger.log(LogLevel::Info, "valuebid::test", "quiet");
        logger.log(LogLevel::Error, "valuebid::test", "loud");

        let written = std::fs::read_to_string(dir.path().join("valuebid.log")).unwrap();
        assert!(!written.contains("quiet"));
        assert!(written.contains("[ERROR] [valuebid::test] loud"));
    }
}
