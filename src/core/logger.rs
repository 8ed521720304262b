//! Logger: severity-gated output with an injected sink
//!
//! | Method | Channel | Shown when threshold >= |
//! |--------|---------|-------------------------|
//! | `error` | error | `Error` |
//! | `warn` | warn | `Warn` |
//! | `log` | info | `Full` |
//!
//! Each Logger owns its threshold. Nothing is global, so tests and callers
//! can hold isolated instances.

use super::level::{LevelSpec, LogLevel};
use crate::config::LoggerConfig;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Tag written before every message.
pub const LOG_PREFIX: &str = "SkyWay: ";

/// Output channel a message is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Info,
}

impl Channel {
    /// Minimum threshold at which this channel is shown.
    pub fn required_level(self) -> LogLevel {
        match self {
            Channel::Error => LogLevel::Error,
            Channel::Warn => LogLevel::Warn,
            Channel::Info => LogLevel::Full,
        }
    }
}

/// Destination for messages that passed the threshold.
pub trait LogSink: Send + Sync {
    fn write(&self, channel: Channel, prefix: &str, message: &str);
}

/// Routes channels to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, channel: Channel, prefix: &str, message: &str) {
        match channel {
            Channel::Error => tracing::error!(target: "rtc_support", "{}{}", prefix, message),
            Channel::Warn => tracing::warn!(target: "rtc_support", "{}{}", prefix, message),
            Channel::Info => tracing::info!(target: "rtc_support", "{}{}", prefix, message),
        }
    }
}

pub struct Logger {
    level: AtomicU8,
    prefix: String,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Logger with threshold `None` writing to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_config(LoggerConfig::default(), sink)
    }

    pub fn with_config(config: LoggerConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            level: AtomicU8::new(config.level.rank()),
            prefix: config.prefix,
            sink,
        }
    }

    /// Set the threshold. Unrecognised input silently becomes `None`.
    pub fn set_level(&self, level: impl Into<LevelSpec>) {
        let resolved = LogLevel::resolve(level);
        self.level.store(resolved.rank(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_rank(i64::from(self.level.load(Ordering::Relaxed)))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn enabled(&self, required: LogLevel) -> bool {
        required != LogLevel::None && self.level() >= required
    }

    pub fn error(&self, message: impl Display) {
        self.emit(Channel::Error, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(Channel::Warn, message);
    }

    pub fn log(&self, message: impl Display) {
        self.emit(Channel::Info, message);
    }

    /// Several items on one line, separated by a space.
    pub fn error_items<I: IntoIterator>(&self, items: I)
    where
        I::Item: Display,
    {
        self.emit_items(Channel::Error, items);
    }

    pub fn warn_items<I: IntoIterator>(&self, items: I)
    where
        I::Item: Display,
    {
        self.emit_items(Channel::Warn, items);
    }

    pub fn log_items<I: IntoIterator>(&self, items: I)
    where
        I::Item: Display,
    {
        self.emit_items(Channel::Info, items);
    }

    /// Run `write` with the prefix only when `channel` passes the threshold.
    /// Lets callers with their own output (raw JS values) share the gate.
    pub fn if_enabled<R>(&self, channel: Channel, write: impl FnOnce(&str) -> R) -> Option<R> {
        self.enabled(channel.required_level()).then(|| write(&self.prefix))
    }

    fn emit(&self, channel: Channel, message: impl Display) {
        self.if_enabled(channel, |prefix| self.sink.write(channel, prefix, &message.to_string()));
    }

    fn emit_items<I: IntoIterator>(&self, channel: Channel, items: I)
    where
        I::Item: Display,
    {
        self.if_enabled(channel, |prefix| {
            let message = items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>().join(" ");
            self.sink.write(channel, prefix, &message);
        });
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(default_sink())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "wasm")]
fn default_sink() -> Arc<dyn LogSink> {
    Arc::new(crate::wasm::ConsoleSink)
}

#[cfg(not(feature = "wasm"))]
fn default_sink() -> Arc<dyn LogSink> {
    Arc::new(TracingSink)
}
