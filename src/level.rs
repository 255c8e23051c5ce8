//! Severity levels and the level-name resolver.
//!
//! Levels carry the numeric bit values used by the host logging framework
//! so entries can be built straight from raw severities.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warning,
    Info,
    Trace,
    Profile,
    ProfileBegin,
    ProfileEnd,
}

impl Level {
    /// Canonical lowercase name shipped in the `level` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Trace => "trace",
            Level::Profile => "profile",
            Level::ProfileBegin => "profile begin",
            Level::ProfileEnd => "profile end",
        }
    }

    /// Numeric severity used by the host framework.
    pub fn bits(&self) -> u32 {
        match self {
            Level::Error => 0x01,
            Level::Warning => 0x02,
            Level::Info => 0x04,
            Level::Trace => 0x08,
            Level::Profile => 0x40,
            Level::ProfileBegin => 0x50,
            Level::ProfileEnd => 0x60,
        }
    }

    /// Map a numeric severity back to a level, if it is one we know.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0x01 => Some(Self::Error),
            0x02 => Some(Self::Warning),
            0x04 => Some(Self::Info),
            0x08 => Some(Self::Trace),
            0x40 => Some(Self::Profile),
            0x50 => Some(Self::ProfileBegin),
            0x60 => Some(Self::ProfileEnd),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "trace" => Ok(Self::Trace),
            "profile" => Ok(Self::Profile),
            "profile begin" => Ok(Self::ProfileBegin),
            "profile end" => Ok(Self::ProfileEnd),
            _ => Err(()),
        }
    }
}

/// Resolves a severity into the human-readable name written to records.
///
/// Hosts with their own naming scheme implement this and hand it to the
/// shipper builder; everyone else gets [`DefaultLevelNames`].
pub trait LevelNames: Send {
    fn level_name(&self, level: Level) -> Cow<'static, str>;
}

/// Resolver returning [`Level::as_str`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLevelNames;

impl LevelNames for DefaultLevelNames {
    fn level_name(&self, level: Level) -> Cow<'static, str> {
        Cow::Borrowed(level.as_str())
    }
}
