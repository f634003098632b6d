// ABOUTME: Sport enumeration for dashboard activities
// ABOUTME: Closed set of sports reported by the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sports the backend reports activities under.
///
/// The set is closed: a payload carrying any other sport string fails
/// decoding rather than being coerced. Activities the backend could not
/// classify arrive as `unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    /// Running activity
    Running,
    /// Cycling activity
    Cycling,
    /// Swimming activity
    Swimming,
    /// Activity the backend could not classify
    Unknown,
}

impl Sport {
    /// Wire representation, as used in query strings and payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            "swimming" => Ok(Self::Swimming),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unsupported sport: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_sports_outside_the_closed_set() {
        assert!("soccer".parse::<Sport>().is_err());
        assert!(serde_json::from_str::<Sport>("\"soccer\"").is_err());
    }

    #[test]
    fn round_trips_wire_names() {
        for sport in [
            Sport::Running,
            Sport::Cycling,
            Sport::Swimming,
            Sport::Unknown,
        ] {
            let parsed: Sport = sport.as_str().parse().unwrap();
            assert_eq!(parsed, sport);
        }
    }
}
