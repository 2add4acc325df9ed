//! Exposure value (EV) arithmetic.
//!
//! EV collapses a whole exposure into one number: EV = log2(N²/t) for
//! f-number N and shutter time t in seconds. By convention that number
//! is quoted at ISO 100, so sensitivity folds in as a correction term.
//! Higher EV means the settings admit less light, which is what a
//! brighter scene calls for. Sunny-16 daylight sits around EV 15;
//! {1/125, f/8, ISO 100} meters just under EV 13.

use crate::notation::{self, NotationError};
use crate::types::Exposure;

/// ISO-adjusted exposure value (EV at ISO 100) of a setting triple.
pub fn ev100(exposure: &Exposure) -> Result<f64, NotationError> {
    let seconds = notation::parse_shutter_speed(&exposure.shutter)?;
    let f_number = notation::parse_aperture(&exposure.aperture)?;
    let iso = notation::parse_iso(&exposure.iso)?;
    Ok((f_number * f_number / seconds).log2() - (iso / 100.0).log2())
}

/// Signed EV difference from `first` to `second`.
///
/// Positive means the second triple admits less light (a brighter scene
/// would meter there); zero means the two are equivalent exposures.
pub fn delta(first: &Exposure, second: &Exposure) -> Result<f64, NotationError> {
    Ok(ev100(second)? - ev100(first)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn daylight_reference_triple_meters_near_ev_13() {
        let ev = ev100(&Exposure::new("1/125", "f/8", "100")).unwrap();
        assert_abs_diff_eq!(ev, 12.9658, epsilon = 1e-4);
    }

    #[test]
    fn sunny_sixteen_meters_near_ev_15() {
        let ev = ev100(&Exposure::new("1/100", "f/16", "100")).unwrap();
        assert_abs_diff_eq!(ev, 14.6439, epsilon = 1e-4);
    }

    #[test]
    fn iso_correction_keeps_equivalent_exposures_equal() {
        let base = ev100(&Exposure::new("1/125", "f/8", "100")).unwrap();
        let traded = ev100(&Exposure::new("1/250", "f/8", "200")).unwrap();
        assert_abs_diff_eq!(base, traded, epsilon = 1e-9);
    }

    #[test]
    fn delta_is_signed_and_antisymmetric() {
        let wide = Exposure::new("1/125", "f/8", "100");
        let narrow = Exposure::new("1/125", "f/11", "100");
        let forward = delta(&wide, &narrow).unwrap();
        let backward = delta(&narrow, &wide).unwrap();
        assert_abs_diff_eq!(forward, 0.9189, epsilon = 1e-4);
        assert_abs_diff_eq!(forward, -backward, epsilon = 1e-9);
    }

    #[test]
    fn notation_errors_pass_through() {
        let err = ev100(&Exposure::new("1/125", "8", "100")).unwrap_err();
        assert!(matches!(err, NotationError::InvalidAperture(_)));
    }
}
