use log::{debug, error, info, warn, Level};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::logging_utils::sanitize_credentials;

const MAX_CHARS: usize = 400;
const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";
const TARGET_PREFIX: &str = "S3TablesHttp::";
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

lazy_static::lazy_static! {
    static ref LOGGER_STATE: RwLock<LoggerState> = RwLock::new(LoggerState {
        level: DEFAULT_LOG_LEVEL,
        provider: None,
    });
}

struct LoggerState {
    level: LogLevel,
    provider: Option<Arc<dyn OutputLogProvider>>,
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    None,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "none" | "off" => LogLevel::None,
            _ => DEFAULT_LOG_LEVEL,
        }
    }
}

impl From<u32> for LogLevel {
    fn from(level: u32) -> Self {
        match level {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => DEFAULT_LOG_LEVEL,
        }
    }
}

impl LogLevel {
    fn to_third_party_level(&self) -> Option<Level> {
        match self {
            LogLevel::Debug => Some(Level::Debug),
            LogLevel::Info => Some(Level::Info),
            LogLevel::Warn => Some(Level::Warn),
            LogLevel::Error => Some(Level::Error),
            LogLevel::None => None,
        }
    }

    fn to_number(&self) -> u32 {
        match self {
            LogLevel::Debug => 4,
            LogLevel::Info => 3,
            LogLevel::Warn => 2,
            LogLevel::Error => 1,
            LogLevel::None => 0,
        }
    }
}

/// Sink for host applications that route SDK output into their own logging.
/// When none is installed, messages go through the `log` facade and
/// `simple_logger` is installed if no other logger claimed the facade.
pub trait OutputLogProvider: Send + Sync {
    fn initialize(&self);
    fn debug(&self, tag: &str, msg: String);
    fn info(&self, tag: &str, msg: String);
    fn warn(&self, tag: &str, msg: String);
    fn error(&self, tag: &str, msg: String);
    fn shutdown(&self);
}

pub fn initialize_output_logger(
    level: &Option<LogLevel>,
    provider: Option<Arc<dyn OutputLogProvider>>,
) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let mut state = match LOGGER_STATE.try_write_for(LOCK_TIMEOUT) {
        Some(state) => state,
        None => {
            eprintln!("[S3TablesHttp] Failed to acquire write lock for logger state");
            return;
        }
    };
    let level = level.clone().unwrap_or(DEFAULT_LOG_LEVEL);
    state.level = level.clone();

    if let Some(provider_impl) = provider {
        provider_impl.initialize();
        state.provider = Some(provider_impl);
        return;
    }

    let final_level = match level.to_third_party_level() {
        Some(level) => level,
        None => return,
    };

    if simple_logger::init_with_level(final_level).is_err() {
        // another logger already owns the facade
        log::set_max_level(final_level.to_level_filter());
    }
}

pub fn shutdown_output_logger() {
    let mut state = match LOGGER_STATE.try_write_for(LOCK_TIMEOUT) {
        Some(state) => state,
        None => {
            eprintln!("[S3TablesHttp] Failed to acquire write lock for logger state");
            return;
        }
    };

    if let Some(provider) = state.provider.take() {
        provider.shutdown();
    }

    INITIALIZED.store(false, Ordering::SeqCst);
}

pub fn log_message(tag: &str, level: LogLevel, msg: String) {
    let msg = sanitize_credentials(&truncate(msg));

    match LOGGER_STATE.try_read_for(LOCK_TIMEOUT) {
        Some(state) => {
            if let Some(provider) = &state.provider {
                match level {
                    LogLevel::Debug => provider.debug(tag, msg),
                    LogLevel::Info => provider.info(tag, msg),
                    LogLevel::Warn => provider.warn(tag, msg),
                    LogLevel::Error => provider.error(tag, msg),
                    LogLevel::None => {}
                }
                return;
            }
        }
        None => eprintln!("[S3TablesHttp] Failed to acquire read lock for logger state"),
    }

    let level = match level.to_third_party_level() {
        Some(level) => level,
        None => return,
    };

    let target = format!("{TARGET_PREFIX}{tag}");
    match level {
        Level::Debug => debug!(target: target.as_str(), "{}", msg),
        Level::Info => info!(target: target.as_str(), "{}", msg),
        Level::Warn => warn!(target: target.as_str(), "{}", msg),
        Level::Error => error!(target: target.as_str(), "{}", msg),
        Level::Trace => {}
    };
}

pub fn has_valid_log_level(level: &LogLevel) -> bool {
    match LOGGER_STATE.try_read_for(LOCK_TIMEOUT) {
        Some(state) => level.to_number() <= state.level.to_number(),
        None => {
            eprintln!("[S3TablesHttp] Failed to acquire read lock for logger state");
            false
        }
    }
}

fn truncate(msg: String) -> String {
    if msg.chars().count() <= MAX_CHARS {
        return msg;
    }

    let visible_chars = MAX_CHARS.saturating_sub(TRUNCATED_SUFFIX.len());
    let mut truncated: String = msg.chars().take(visible_chars).collect();
    truncated.push_str(TRUNCATED_SUFFIX);
    truncated
}

#[macro_export]
macro_rules! log_d {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Debug;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_i {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Info;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_w {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Warn;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_e {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Error;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}
