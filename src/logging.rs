// src/logging.rs
//! Severity-gated logging with an injectable sink.
//!
//! The client reports request lifecycle events to a logger callback of the
//! shape `(level, message, context)`. By default events flow into the `log`
//! facade tagged with their severity; callers who want to capture or route
//! events themselves inject their own sink at construction time.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Severity of a client log event, ordered from most to least verbose.
///
/// The client only invokes the logger for events at or above the configured
/// minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// An injectable log sink: receives the event severity, a short message,
/// and a structured context object (method and path for lifecycle events,
/// code and message for failures).
pub type Logger = Arc<dyn Fn(LogLevel, &str, &Value) + Send + Sync>;

/// Builds the default sink: events are handed to the `log` facade under the
/// `notionhq_client` target at the matching level.
pub(crate) fn console_logger() -> Logger {
    Arc::new(|level, message, context| match level {
        LogLevel::Debug => log::debug!(target: "notionhq_client", "{} {}", message, context),
        LogLevel::Info => log::info!(target: "notionhq_client", "{} {}", message, context),
        LogLevel::Warn => log::warn!(target: "notionhq_client", "{} {}", message, context),
        LogLevel::Error => log::error!(target: "notionhq_client", "{} {}", message, context),
    })
}
