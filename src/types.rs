//! Shared types used across the engine and the CLI.
//!
//! These are the vocabulary of the whole crate: the stop-scale granularity,
//! the triangle axis being solved, and a caller's exposure triple. All of
//! them appear in `--json` reports (and `StopScale` in `stopwise.toml`),
//! so they live here rather than inside any one engine module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Granularity of the standard value scales.
///
/// Cameras quantize settings in whole, half, or third stops. `Third` is the
/// finest (and the usual click size on modern bodies); `Full` is the classic
/// textbook scale. Finer scales are strict supersets of coarser ones, so
/// every full-stop value stays selectable at every granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopScale {
    /// Whole stops: 1 EV between neighboring values.
    #[default]
    Full,
    /// Half stops: 1/2 EV between neighboring values.
    Half,
    /// Third stops: 1/3 EV between neighboring values.
    Third,
}

impl StopScale {
    /// Number of scale steps per whole stop (1, 2, or 3).
    pub fn steps_per_stop(self) -> u32 {
        match self {
            StopScale::Full => 1,
            StopScale::Half => 2,
            StopScale::Third => 3,
        }
    }
}

impl fmt::Display for StopScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StopScale::Full => "full",
            StopScale::Half => "half",
            StopScale::Third => "third",
        };
        write!(f, "{name}")
    }
}

impl FromStr for StopScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(StopScale::Full),
            "half" => Ok(StopScale::Half),
            "third" => Ok(StopScale::Third),
            other => Err(format!(
                "unknown stop scale {other:?} (expected full, half, or third)"
            )),
        }
    }
}

/// The exposure-triangle axis a value belongs to.
///
/// Shutter speed and ISO scale light linearly with their value; aperture
/// scales with the inverse square of the f-number. The stop arithmetic in
/// [`crate::stops`] dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Shutter,
    Aperture,
    Iso,
}

impl Axis {
    /// Lowercase axis name as it appears in error messages and reports.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Shutter => "shutter speed",
            Axis::Aperture => "aperture",
            Axis::Iso => "ISO",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A complete exposure in photographic notation, e.g. `1/125`, `f/8`, `100`.
///
/// This is the caller's metered starting point. Fields hold raw notation
/// strings: validity is checked where the values are used, not at
/// construction, so an `Exposure` can be built straight from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    pub shutter: String,
    pub aperture: String,
    pub iso: String,
}

impl Exposure {
    pub fn new(
        shutter: impl Into<String>,
        aperture: impl Into<String>,
        iso: impl Into<String>,
    ) -> Self {
        Self {
            shutter: shutter.into(),
            aperture: aperture.into(),
            iso: iso.into(),
        }
    }

    /// The notation string for one axis of the triple.
    pub fn value(&self, axis: Axis) -> &str {
        match axis {
            Axis::Shutter => &self.shutter,
            Axis::Aperture => &self.aperture,
            Axis::Iso => &self.iso,
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  ISO {}", self.shutter, self.aperture, self.iso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_to_full() {
        assert_eq!(StopScale::default(), StopScale::Full);
    }

    #[test]
    fn scale_parses_case_insensitively() {
        assert_eq!("full".parse::<StopScale>().unwrap(), StopScale::Full);
        assert_eq!("Half".parse::<StopScale>().unwrap(), StopScale::Half);
        assert_eq!("THIRD".parse::<StopScale>().unwrap(), StopScale::Third);
    }

    #[test]
    fn scale_rejects_unknown_names() {
        let err = "quarter".parse::<StopScale>().unwrap_err();
        assert!(err.contains("quarter"));
    }

    #[test]
    fn scale_steps_per_stop() {
        assert_eq!(StopScale::Full.steps_per_stop(), 1);
        assert_eq!(StopScale::Half.steps_per_stop(), 2);
        assert_eq!(StopScale::Third.steps_per_stop(), 3);
    }

    #[test]
    fn exposure_selects_value_by_axis() {
        let exposure = Exposure::new("1/125", "f/8", "100");
        assert_eq!(exposure.value(Axis::Shutter), "1/125");
        assert_eq!(exposure.value(Axis::Aperture), "f/8");
        assert_eq!(exposure.value(Axis::Iso), "100");
    }

    #[test]
    fn exposure_displays_as_triple() {
        let exposure = Exposure::new("1/125", "f/8", "100");
        assert_eq!(exposure.to_string(), "1/125  f/8  ISO 100");
    }
}
