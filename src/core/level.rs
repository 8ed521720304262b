//! Severity levels: None < Error < Warn < Full
//!
//! A message of rank R is shown iff the active threshold is >= R. Any input
//! that does not resolve to one of the four ranks falls back to `None`.

use super::parse::parse_leading_int;
use crate::error::SupportError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "LevelRepr")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    None = 0,
    Error = 1,
    Warn = 2,
    Full = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::None, LogLevel::Error, LogLevel::Warn, LogLevel::Full];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Map a numeric rank to a level. Out-of-range ranks are `None`.
    pub fn from_rank(rank: i64) -> Self {
        match rank {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Full,
            _ => LogLevel::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Full => "full",
        }
    }

    /// Resolve any accepted level input to a canonical level.
    pub fn resolve(spec: impl Into<LevelSpec>) -> Self {
        spec.into().resolve()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level names (case-insensitive) or integer text. Anything else is an
/// error so config loaders can tell "unrecognised" from "set to NONE".
impl FromStr for LogLevel {
    type Err = SupportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "full" | "all" => Ok(LogLevel::Full),
            other => parse_leading_int(other)
                .map(LogLevel::from_rank)
                .ok_or_else(|| SupportError::InvalidLevel(value.to_string())),
        }
    }
}

/// Accepted shapes for a level argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelSpec {
    /// Raw number, truncated toward zero.
    Numeric(f64),
    /// Text parsed as a leading decimal integer.
    Text(String),
    /// Already-named level.
    Named(LogLevel),
}

impl LevelSpec {
    pub fn resolve(&self) -> LogLevel {
        match self {
            LevelSpec::Named(level) => *level,
            LevelSpec::Numeric(n) if n.is_finite() => LogLevel::from_rank(n.trunc() as i64),
            LevelSpec::Numeric(_) => LogLevel::None,
            LevelSpec::Text(s) => parse_leading_int(s)
                .map(LogLevel::from_rank)
                .unwrap_or(LogLevel::None),
        }
    }
}

impl From<LogLevel> for LevelSpec {
    fn from(level: LogLevel) -> Self {
        LevelSpec::Named(level)
    }
}

impl From<f64> for LevelSpec {
    fn from(n: f64) -> Self {
        LevelSpec::Numeric(n)
    }
}

macro_rules! numeric_level_spec {
    ($($t:ty),*) => {
        $(impl From<$t> for LevelSpec {
            fn from(n: $t) -> Self {
                LevelSpec::Numeric(n as f64)
            }
        })*
    };
}

numeric_level_spec!(u8, u32, i32, i64);

impl From<&str> for LevelSpec {
    fn from(s: &str) -> Self {
        LevelSpec::Text(s.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(s: String) -> Self {
        LevelSpec::Text(s)
    }
}

/// Wire shape accepted when deserializing a level from config.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(f64),
    Text(String),
}

impl From<LevelRepr> for LogLevel {
    fn from(repr: LevelRepr) -> Self {
        match repr {
            LevelRepr::Number(n) => LevelSpec::Numeric(n).resolve(),
            LevelRepr::Text(s) => s.parse().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_strict() {
        assert!(LogLevel::None < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Full);
        let ranks: Vec<u8> = LogLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_resolve_numeric() {
        assert_eq!(LogLevel::resolve(0), LogLevel::None);
        assert_eq!(LogLevel::resolve(1), LogLevel::Error);
        assert_eq!(LogLevel::resolve(2u8), LogLevel::Warn);
        assert_eq!(LogLevel::resolve(3i64), LogLevel::Full);
        assert_eq!(LogLevel::resolve(2.9), LogLevel::Warn);
        assert_eq!(LogLevel::resolve(-0.5), LogLevel::None);
    }

    #[test]
    fn test_resolve_invalid_falls_back_to_none() {
        assert_eq!(LogLevel::resolve(99), LogLevel::None);
        assert_eq!(LogLevel::resolve(-1), LogLevel::None);
        assert_eq!(LogLevel::resolve(f64::NAN), LogLevel::None);
        assert_eq!(LogLevel::resolve(f64::INFINITY), LogLevel::None);
        assert_eq!(LogLevel::resolve("verbose"), LogLevel::None);
        assert_eq!(LogLevel::resolve(""), LogLevel::None);
    }

    #[test]
    fn test_resolve_text_uses_integer_prefix() {
        assert_eq!(LogLevel::resolve("3"), LogLevel::Full);
        assert_eq!(LogLevel::resolve(" 2 "), LogLevel::Warn);
        assert_eq!(LogLevel::resolve("1.7"), LogLevel::Error);
        assert_eq!(LogLevel::resolve(String::from("2px")), LogLevel::Warn);
    }

    #[test]
    fn test_resolve_named() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::resolve(level), level);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" all ".parse::<LogLevel>(), Ok(LogLevel::Full));
        assert_eq!("1".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("7".parse::<LogLevel>(), Ok(LogLevel::None));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!("loud".parse::<LogLevel>(), Err(SupportError::InvalidLevel("loud".into())));
        let err = "".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognised log level: ");
    }

    #[test]
    fn test_serde_names_and_numbers() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        let from_name: LogLevel = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(from_name, LogLevel::Full);
        let from_number: LogLevel = serde_json::from_str("1").unwrap();
        assert_eq!(from_number, LogLevel::Error);
        let unknown: LogLevel = serde_json::from_str("\"chatty\"").unwrap();
        assert_eq!(unknown, LogLevel::None);
    }
}
