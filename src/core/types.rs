use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display/behavior category of a series.
///
/// The group controls palette, stroke style, and the long-term trend applied
/// by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesGroup {
    Primary,
    Retired,
}

impl SeriesGroup {
    pub const ALL: [Self; 2] = [Self::Primary, Self::Retired];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Retired => "retired",
        }
    }

    /// Retired series are drawn dashed.
    #[must_use]
    pub fn is_dashed(self) -> bool {
        matches!(self, Self::Retired)
    }
}

impl fmt::Display for SeriesGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable unique key of a series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesCode(String);

impl SeriesCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for SeriesCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SeriesCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
