//! Severity - closed, ordered set of log levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity attached uniformly to every message of one dispatch.
///
/// Ordered from least to most severe, so `Severity::Info < Severity::Fatal`.
/// Serialized in lowercase (`"info"`, `"warning"`, ...), matching `name()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All levels, least severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Static display name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
