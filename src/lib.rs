//! # stopwise
//!
//! An exposure triangle calculator for photographers. Give it your metered
//! shutter speed, aperture, and ISO, tell it which two settings you are
//! changing, and it solves the third so the frame keeps the same
//! brightness (or shifts by a deliberate EV compensation).
//!
//! # Architecture: Solve in Light Space
//!
//! Every calculation runs through the same pipeline:
//!
//! ```text
//! 1. Parse     notation strings  →  physical values   (1/125 → 0.008 s)
//! 2. Solve     stop arithmetic along the light axis    (log2 of ratios)
//! 3. Snap      exact value → nearest canonical entry  (0.0151 s → 1/60)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **One solver**: shutter, aperture, and ISO solves are the same routine
//!   with a different axis plugged in; the aperture's inverse-square
//!   behavior lives in exactly one place ([`stops`]).
//! - **Real dial values**: photographers can only set what their camera
//!   offers, so results snap to the canonical scales instead of reporting
//!   `1/63.42` nobody can dial in.
//! - **Testability**: parsing, arithmetic, and snapping are pure functions
//!   with no I/O, so the reciprocity laws are tested directly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`notation`] | Parses and formats photographic notation (`1/125`, `f/8`, `30"`) |
//! | [`tables`] | Canonical full/half/third-stop value tables and nearest-entry snapping |
//! | [`stops`] | Stop arithmetic: distances, light deltas, and their inverses per axis |
//! | [`solve`] | The reciprocity solver shared by the three calculation commands |
//! | [`ev`] | ISO-adjusted exposure values (EV at ISO 100) and comparisons |
//! | [`config`] | `stopwise.toml` loading and validation for CLI flag defaults |
//! | [`output`] | Report structs for `--json` plus result-first text formatting |
//! | [`types`] | Shared vocabulary: [`types::StopScale`], [`types::Axis`], [`types::Exposure`] |
//!
//! # Design Decisions
//!
//! ## Tables as Authored Labels
//!
//! The canonical scales are authored as notation strings and parsed once
//! at startup, rather than generated from powers of two. Cameras mark
//! `1/90` and `f/1.2` where the math says `1/84.9` and `f/1.19`; the
//! industry's rounded labels are the ground truth users expect to see,
//! so the label lists are the single source both display and math derive
//! from. Snapping works on stop distance, so the rounding never
//! accumulates into a wrong answer.
//!
//! ## Errors Carry the Photography
//!
//! When a solve runs off the end of a scale the error says what the
//! photographer needs: how many stops short the scale fell
//! ([`solve::SolveError::Underexposed`], [`solve::SolveError::Overexposed`]),
//! or for ISO, the sensitivity the solve required and the limit it crossed
//! ([`solve::SolveError::ParameterLimit`]). Range checks run on the exact
//! value before snapping, so a result just inside an end still resolves
//! to that end instead of erroring.
//!
//! ## EV Compensation as a Plain Stop Offset
//!
//! `--ev 1` simply adds one stop of light to whatever the solved axis
//! must supply. It composes with the reciprocity math instead of being a
//! separate mode, which is exactly how compensation dials behave on
//! camera bodies.
//!
//! ## Library First
//!
//! The binary is a thin clap wrapper. Everything it does, including the
//! report structs that back `--json`, is reachable through this library,
//! so a light-meter app or a test can drive the engine directly.

pub mod config;
pub mod ev;
pub mod notation;
pub mod output;
pub mod solve;
pub mod stops;
pub mod tables;
pub mod types;
