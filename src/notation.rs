//! Parsing and formatting of photographic notation.
//!
//! All conversions between user-facing strings and physical values live
//! here, so the accepted grammar is defined in exactly one place:
//!
//! - Shutter speeds: `1/N` fractions of a second, whole or decimal seconds
//!   with a trailing `"` (`30"`, `0.8"`), or bare numerics read as seconds.
//! - Apertures: f-numbers with a mandatory `f/` prefix (`f/8`, `f/1.4`).
//! - ISO: bare positive numerics (`100`, `6400`).
//!
//! Formatting is the inverse direction: a physical value snaps to the
//! nearest canonical label on the requested scale. Out-of-range values
//! clamp to the scale's end label; range enforcement is the solver's job.

use thiserror::Error;

use crate::tables;
use crate::types::{Axis, StopScale};

/// A notation string that does not parse as a value for its axis.
///
/// The payload is the rejected input, echoed back so CLI errors and logs
/// show exactly what was typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid shutter speed {0:?} (expected e.g. 1/125, 2, or 30\")")]
    InvalidShutterSpeed(String),
    #[error("invalid aperture {0:?} (expected e.g. f/8)")]
    InvalidAperture(String),
    #[error("invalid ISO {0:?} (expected e.g. 100)")]
    InvalidIso(String),
}

/// A positive decimal in notation grammar: ASCII digits and a decimal
/// point, nothing else. `f64`'s wider syntax (exponents, signs, `inf`)
/// is not photographic notation.
fn parse_decimal(text: &str) -> Option<f64> {
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse().ok()
}

/// Parse a shutter speed into seconds.
///
/// `1/N` divides; a trailing `"` marks whole or decimal seconds and is
/// optional for bare numerics. Zero, negative, and non-finite values are
/// rejected.
pub fn parse_shutter_speed(input: &str) -> Result<f64, NotationError> {
    let err = || NotationError::InvalidShutterSpeed(input.to_string());
    let s = input.trim();
    if let Some(denominator) = s.strip_prefix("1/") {
        let n = parse_decimal(denominator).ok_or_else(err)?;
        return if n.is_finite() && n > 0.0 {
            Ok(1.0 / n)
        } else {
            Err(err())
        };
    }
    let body = s.strip_suffix('"').unwrap_or(s);
    let seconds = parse_decimal(body).ok_or_else(err)?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(err())
    }
}

/// Parse an aperture into its f-number.
///
/// The `f/` prefix is mandatory (accepted uppercase too); a bare `8` is
/// ambiguous with ISO and shutter notation and is rejected.
pub fn parse_aperture(input: &str) -> Result<f64, NotationError> {
    let err = || NotationError::InvalidAperture(input.to_string());
    let s = input.trim();
    let number = s
        .strip_prefix("f/")
        .or_else(|| s.strip_prefix("F/"))
        .ok_or_else(err)?;
    let f = parse_decimal(number).ok_or_else(err)?;
    if f.is_finite() && f > 0.0 { Ok(f) } else { Err(err()) }
}

/// Parse an ISO sensitivity.
pub fn parse_iso(input: &str) -> Result<f64, NotationError> {
    let err = || NotationError::InvalidIso(input.to_string());
    let iso = parse_decimal(input.trim()).ok_or_else(err)?;
    if iso.is_finite() && iso > 0.0 {
        Ok(iso)
    } else {
        Err(err())
    }
}

/// Parse a value in the notation of the given axis.
pub fn parse(axis: Axis, input: &str) -> Result<f64, NotationError> {
    match axis {
        Axis::Shutter => parse_shutter_speed(input),
        Axis::Aperture => parse_aperture(input),
        Axis::Iso => parse_iso(input),
    }
}

/// Canonical label for a duration in seconds on the given scale.
pub fn format_shutter_speed(seconds: f64, scale: StopScale) -> &'static str {
    tables::nearest(Axis::Shutter, scale, seconds).label
}

/// Canonical label for an f-number on the given scale.
pub fn format_aperture(f_number: f64, scale: StopScale) -> &'static str {
    tables::nearest(Axis::Aperture, scale, f_number).label
}

/// Canonical label for an ISO sensitivity on the given scale.
pub fn format_iso(iso: f64, scale: StopScale) -> &'static str {
    tables::nearest(Axis::Iso, scale, iso).label
}
