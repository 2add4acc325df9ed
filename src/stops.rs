//! Stop arithmetic for the three exposure axes.
//!
//! A stop is a doubling or halving of light. Shutter speed and ISO scale
//! light linearly with their value, so their stop distance is a plain
//! `log2` of the ratio. Aperture admits light through an area that goes
//! with the inverse square of the f-number: one stop is a factor of
//! sqrt(2) in f-number, and a larger f-number means less light. The
//! factor of two and the sign flip below carry that asymmetry, and the
//! rest of the crate never thinks about it again.

use crate::types::Axis;

/// Signed stop distance from one value to another along an axis.
///
/// Positive means movement in the direction of increasing value
/// (longer exposure, larger f-number, higher ISO).
pub fn distance(axis: Axis, from: f64, to: f64) -> f64 {
    match axis {
        Axis::Shutter | Axis::Iso => (to / from).log2(),
        Axis::Aperture => 2.0 * (to / from).log2(),
    }
}

/// Change in admitted light, in stops, when an axis moves from one value
/// to another. Positive means the frame gets brighter.
///
/// Same magnitude as [`distance`]; only the aperture sign differs,
/// because stopping down (a larger f-number) cuts light.
pub fn light_delta(axis: Axis, from: f64, to: f64) -> f64 {
    match axis {
        Axis::Shutter | Axis::Iso => (to / from).log2(),
        Axis::Aperture => -2.0 * (to / from).log2(),
    }
}

/// The value that changes admitted light by `stops` relative to `base`.
///
/// Inverse of [`light_delta`]: brightening by one stop doubles the
/// exposure time or ISO, but divides the f-number by sqrt(2).
pub fn apply_light(axis: Axis, base: f64, stops: f64) -> f64 {
    match axis {
        Axis::Shutter | Axis::Iso => base * stops.exp2(),
        Axis::Aperture => base * (-stops / 2.0).exp2(),
    }
}
