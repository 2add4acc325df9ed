//! The reciprocity solver.
//!
//! All three public operations run the same routine in light space:
//! sum the light change the two repositioned axes cause (in stops), take
//! the requested EV compensation, and shift the solved axis by the
//! difference so the frame lands exactly where the caller asked. The
//! exact result then snaps to the nearest canonical value on the
//! requested scale.
//!
//! Range checks happen on the exact value, before snapping, so a result
//! just inside a scale end still resolves to that end rather than
//! erroring. Which error a crossed end raises depends on the axis: the
//! shutter and aperture axes report the exposure failure (underexposed
//! past the fast/narrow end, overexposed past the slow/wide end), while
//! ISO reports a parameter limit in both directions, carrying the value
//! the solver needed and the limit it crossed.

use serde::Serialize;
use thiserror::Error;

use crate::notation::{self, NotationError};
use crate::stops;
use crate::tables;
use crate::types::{Axis, Exposure, StopScale};

/// Relative slack when testing a solved value against the scale ends, so
/// results that land exactly on an end stay in range through float noise.
const RANGE_EPSILON: f64 = 1e-9;

/// Why a solve failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A notation string in the base exposure or a target did not parse.
    #[error("{0}")]
    InvalidFormat(#[from] NotationError),
    /// The solution lies past the light-starved end of the scale
    /// (faster than the fastest shutter speed, narrower than the
    /// narrowest aperture). `stops` is the size of the shortfall.
    #[error("underexposed: the scale ends {stops:.1} stops short of the required setting")]
    Underexposed { stops: f64 },
    /// The solution lies past the light-rich end of the scale (slower
    /// than the slowest shutter speed, wider than the widest aperture).
    #[error("overexposed: the scale ends {stops:.1} stops short of the required setting")]
    Overexposed { stops: f64 },
    /// The solved value falls outside the standard range for its axis.
    /// Raised for ISO in both directions, where "too dark" and "too
    /// bright" read backwards and the hardware limit is the real story.
    #[error("required {axis} {required:.0} is beyond the standard limit of {limit:.0}")]
    ParameterLimit {
        axis: Axis,
        required: f64,
        limit: f64,
    },
}

/// The light change contributed by one repositioned axis, in stops.
/// Positive means that move alone brightened the frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxisMove {
    pub axis: Axis,
    pub stops: f64,
}

/// A solved exposure: the snapped canonical label plus the arithmetic
/// that produced it, for callers that explain their work.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    /// The axis that was solved.
    pub axis: Axis,
    /// Canonical notation for the solved value on the requested scale.
    pub label: &'static str,
    /// Stop shift applied to the solved axis. Positive means it moved
    /// toward admitting (or amplifying) more light.
    pub shift: f64,
    /// Per-axis light changes of the two repositioned axes.
    pub moves: [AxisMove; 2],
}

/// Solve for the shutter speed after the aperture and ISO move.
pub fn solve_shutter_speed(
    base: &Exposure,
    aperture: &str,
    iso: &str,
    scale: StopScale,
    ev_compensation: f64,
) -> Result<Solution, SolveError> {
    solve(
        Axis::Shutter,
        base,
        [(Axis::Aperture, aperture), (Axis::Iso, iso)],
        scale,
        ev_compensation,
    )
}

/// Solve for the aperture after the shutter speed and ISO move.
pub fn solve_aperture(
    base: &Exposure,
    shutter: &str,
    iso: &str,
    scale: StopScale,
    ev_compensation: f64,
) -> Result<Solution, SolveError> {
    solve(
        Axis::Aperture,
        base,
        [(Axis::Shutter, shutter), (Axis::Iso, iso)],
        scale,
        ev_compensation,
    )
}

/// Solve for the ISO after the shutter speed and aperture move.
pub fn solve_iso(
    base: &Exposure,
    shutter: &str,
    aperture: &str,
    scale: StopScale,
    ev_compensation: f64,
) -> Result<Solution, SolveError> {
    solve(
        Axis::Iso,
        base,
        [(Axis::Shutter, shutter), (Axis::Aperture, aperture)],
        scale,
        ev_compensation,
    )
}

fn axis_move(
    base: &Exposure,
    target_axis: Axis,
    target: &str,
) -> Result<AxisMove, NotationError> {
    let from = notation::parse(target_axis, base.value(target_axis))?;
    let to = notation::parse(target_axis, target)?;
    Ok(AxisMove {
        axis: target_axis,
        stops: stops::light_delta(target_axis, from, to),
    })
}

fn solve(
    axis: Axis,
    base: &Exposure,
    targets: [(Axis, &str); 2],
    scale: StopScale,
    ev_compensation: f64,
) -> Result<Solution, SolveError> {
    let base_value = notation::parse(axis, base.value(axis))?;
    let moves = [
        axis_move(base, targets[0].0, targets[0].1)?,
        axis_move(base, targets[1].0, targets[1].1)?,
    ];

    // The solved axis must supply whatever light the moved axes took
    // away (or absorb what they added), plus the deliberate EV shift.
    let shift = ev_compensation - moves[0].stops - moves[1].stops;
    let exact = stops::apply_light(axis, base_value, shift);
    check_range(axis, scale, exact)?;

    Ok(Solution {
        axis,
        label: tables::nearest(axis, scale, exact).label,
        shift,
        moves,
    })
}

fn check_range(axis: Axis, scale: StopScale, exact: f64) -> Result<(), SolveError> {
    let (first, last) = tables::range(axis, scale);
    match axis {
        Axis::Shutter => {
            // Dial order: first is the slowest speed, last the fastest.
            if exact > first.value * (1.0 + RANGE_EPSILON) {
                return Err(SolveError::Overexposed {
                    stops: (exact / first.value).log2(),
                });
            }
            if exact < last.value * (1.0 - RANGE_EPSILON) {
                return Err(SolveError::Underexposed {
                    stops: (last.value / exact).log2(),
                });
            }
        }
        Axis::Aperture => {
            // Dial order: first is the widest aperture, last the narrowest.
            if exact < first.value * (1.0 - RANGE_EPSILON) {
                return Err(SolveError::Overexposed {
                    stops: 2.0 * (first.value / exact).log2(),
                });
            }
            if exact > last.value * (1.0 + RANGE_EPSILON) {
                return Err(SolveError::Underexposed {
                    stops: 2.0 * (exact / last.value).log2(),
                });
            }
        }
        Axis::Iso => {
            if exact < first.value * (1.0 - RANGE_EPSILON) {
                return Err(SolveError::ParameterLimit {
                    axis,
                    required: exact,
                    limit: first.value,
                });
            }
            if exact > last.value * (1.0 + RANGE_EPSILON) {
                return Err(SolveError::ParameterLimit {
                    axis,
                    required: exact,
                    limit: last.value,
                });
            }
        }
    }
    Ok(())
}
