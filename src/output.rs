//! CLI output formatting for all commands.
//!
//! # Result-First Display
//!
//! Output is **result-centric, not input-centric**. The headline of every
//! command is the thing the photographer asked for (the solved setting,
//! the EV, the table) and the arithmetic that produced it follows as
//! indented context lines. A solve reads top to bottom as "here is your
//! setting, here is why":
//!
//! ```text
//! Shutter speed: 1/60
//!     Base: 1/125  f/8  ISO 100
//!     Aperture: f/8 → f/11 (-0.9 EV)
//!     ISO: 100 → 100 (+0.0 EV)
//!     Shift: +0.9 EV (full-stop scale)
//! ```
//!
//! # Architecture
//!
//! Every command builds a serializable report struct first; `--json`
//! pretty-prints it directly, text mode runs it through a `format_*`
//! function (returns `Vec<String>`) and a `print_*` wrapper that writes
//! to stdout. Format functions are pure — no I/O, no side effects — so
//! tests assert on exact lines.

use serde::Serialize;

use crate::solve::Solution;
use crate::tables;
use crate::types::{Axis, Exposure, StopScale};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Labels per row in table listings.
const TABLE_ROW_WIDTH: usize = 8;

/// Capitalized axis name used as a line heading.
fn axis_title(axis: Axis) -> &'static str {
    match axis {
        Axis::Shutter => "Shutter speed",
        Axis::Aperture => "Aperture",
        Axis::Iso => "ISO",
    }
}

/// Wrap labels into indented rows, `TABLE_ROW_WIDTH` per line.
fn wrap_labels(labels: &[&str]) -> Vec<String> {
    labels
        .chunks(TABLE_ROW_WIDTH)
        .map(|row| format!("    {}", row.join("  ")))
        .collect()
}

// ============================================================================
// Solve reports
// ============================================================================

/// One repositioned axis in a solve, with the light change it caused.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMove {
    pub axis: Axis,
    pub from: String,
    pub to: String,
    pub stops: f64,
}

/// Full record of a solve: inputs, per-axis arithmetic, and the result.
///
/// This is the `--json` payload, and the text formatter renders the same
/// struct, so both modes always agree.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// The solved axis.
    pub axis: Axis,
    /// Canonical notation of the solved value.
    pub result: String,
    /// The metered starting triple.
    pub base: Exposure,
    /// The two repositioned axes, in argument order.
    pub moves: Vec<ReportMove>,
    /// Deliberate exposure shift requested by the caller, in stops.
    pub ev_compensation: f64,
    /// Stop shift applied to the solved axis.
    pub shift_stops: f64,
    /// Scale the result was snapped to.
    pub scale: StopScale,
}

/// Assemble a [`SolveReport`] from a solve's inputs and its [`Solution`].
///
/// `targets` pairs with `solution.moves` in order: the first target is
/// the new value of the first moved axis.
pub fn solve_report(
    base: &Exposure,
    targets: [&str; 2],
    solution: &Solution,
    scale: StopScale,
    ev_compensation: f64,
) -> SolveReport {
    let moves = solution
        .moves
        .iter()
        .zip(targets)
        .map(|(mv, to)| ReportMove {
            axis: mv.axis,
            from: base.value(mv.axis).to_string(),
            to: to.to_string(),
            stops: mv.stops,
        })
        .collect();
    SolveReport {
        axis: solution.axis,
        result: solution.label.to_string(),
        base: base.clone(),
        moves,
        ev_compensation,
        shift_stops: solution.shift,
        scale,
    }
}

/// Format a solve result: headline value, then the arithmetic.
pub fn format_solve(report: &SolveReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{}: {}", axis_title(report.axis), report.result));
    lines.push(format!("    Base: {}", report.base));
    for mv in &report.moves {
        lines.push(format!(
            "    {}: {} \u{2192} {} ({:+.1} EV)",
            axis_title(mv.axis),
            mv.from,
            mv.to,
            mv.stops
        ));
    }
    if report.ev_compensation != 0.0 {
        lines.push(format!(
            "    Compensation: {:+.1} EV",
            report.ev_compensation
        ));
    }
    lines.push(format!(
        "    Shift: {:+.1} EV ({}-stop scale)",
        report.shift_stops, report.scale
    ));
    lines
}

/// Print a solve report to stdout.
pub fn print_solve(report: &SolveReport) {
    for line in format_solve(report) {
        println!("{}", line);
    }
}

// ============================================================================
// EV reports
// ============================================================================

/// A second exposure measured against the first.
#[derive(Debug, Clone, Serialize)]
pub struct EvComparison {
    pub exposure: Exposure,
    pub ev: f64,
    /// Signed EV difference from the first exposure to this one.
    /// Positive means this one admits less light.
    pub delta: f64,
}

/// EV of an exposure, optionally compared against a second one.
#[derive(Debug, Clone, Serialize)]
pub struct EvReport {
    pub exposure: Exposure,
    /// ISO-adjusted exposure value (EV at ISO 100).
    pub ev: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versus: Option<EvComparison>,
}

/// Assemble an [`EvReport`]; the comparison delta is derived here.
pub fn ev_report(exposure: Exposure, ev: f64, versus: Option<(Exposure, f64)>) -> EvReport {
    EvReport {
        versus: versus.map(|(second, second_ev)| EvComparison {
            exposure: second,
            ev: second_ev,
            delta: second_ev - ev,
        }),
        exposure,
        ev,
    }
}

/// Format an EV measurement, with the comparison when present.
pub fn format_ev(report: &EvReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("EV {:.1} (ISO-adjusted)", report.ev));
    lines.push(format!("    Settings: {}", report.exposure));
    if let Some(versus) = &report.versus {
        lines.push(format!(
            "    Versus: {} (EV {:.1})",
            versus.exposure, versus.ev
        ));
        let reading = if versus.delta.abs() < 0.05 {
            "equivalent exposure"
        } else if versus.delta > 0.0 {
            "second admits less light"
        } else {
            "second admits more light"
        };
        lines.push(format!("    Delta: {:+.1} EV ({})", versus.delta, reading));
    }
    lines
}

/// Print an EV report to stdout.
pub fn print_ev(report: &EvReport) {
    for line in format_ev(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Table listings
// ============================================================================

/// The canonical value tables on one scale. Axes not selected by the
/// caller are omitted from both text and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct TablesReport {
    pub scale: StopScale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutter_speeds: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apertures: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isos: Option<Vec<&'static str>>,
}

/// Assemble a [`TablesReport`] for one axis, or all three when `axis`
/// is `None`.
pub fn tables_report(scale: StopScale, axis: Option<Axis>) -> TablesReport {
    let include = |wanted: Axis| axis.is_none() || axis == Some(wanted);
    TablesReport {
        scale,
        shutter_speeds: include(Axis::Shutter)
            .then(|| tables::shutter_speeds(scale).to_vec()),
        apertures: include(Axis::Aperture).then(|| tables::apertures(scale).to_vec()),
        isos: include(Axis::Iso).then(|| tables::isos(scale).to_vec()),
    }
}

/// Format the selected tables as headed, wrapped label listings.
pub fn format_tables(report: &TablesReport) -> Vec<String> {
    let sections: [(&str, &Option<Vec<&'static str>>); 3] = [
        ("Shutter speeds", &report.shutter_speeds),
        ("Apertures", &report.apertures),
        ("ISO", &report.isos),
    ];
    let mut lines = Vec::new();
    for (heading, labels) in sections {
        let Some(labels) = labels else { continue };
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} ({}-stop scale, {} values)",
            heading,
            report.scale,
            labels.len()
        ));
        lines.extend(wrap_labels(labels));
    }
    lines
}

/// Print a tables report to stdout.
pub fn print_tables(report: &TablesReport) {
    for line in format_tables(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::solve_shutter_speed;

    fn sunny_base() -> Exposure {
        Exposure::new("1/125", "f/8", "100")
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn axis_titles_are_capitalized() {
        assert_eq!(axis_title(Axis::Shutter), "Shutter speed");
        assert_eq!(axis_title(Axis::Aperture), "Aperture");
        assert_eq!(axis_title(Axis::Iso), "ISO");
    }

    #[test]
    fn wrap_labels_splits_into_rows() {
        let labels: Vec<&str> = (0..10).map(|_| "x").collect();
        let rows = wrap_labels(&labels);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "    x  x  x  x  x  x  x  x");
        assert_eq!(rows[1], "    x  x");
    }

    // =========================================================================
    // Solve formatting tests
    // =========================================================================

    fn shutter_report(ev: f64) -> SolveReport {
        let base = sunny_base();
        let solution =
            solve_shutter_speed(&base, "f/11", "100", StopScale::Full, ev).unwrap();
        solve_report(&base, ["f/11", "100"], &solution, StopScale::Full, ev)
    }

    #[test]
    fn format_solve_headline_then_context() {
        let lines = format_solve(&shutter_report(0.0));
        assert_eq!(lines[0], "Shutter speed: 1/60");
        assert_eq!(lines[1], "    Base: 1/125  f/8  ISO 100");
        assert_eq!(lines[2], "    Aperture: f/8 \u{2192} f/11 (-0.9 EV)");
        assert_eq!(lines[3], "    ISO: 100 \u{2192} 100 (+0.0 EV)");
        assert_eq!(lines[4], "    Shift: +0.9 EV (full-stop scale)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn format_solve_shows_nonzero_compensation() {
        let lines = format_solve(&shutter_report(1.0));
        assert_eq!(lines[0], "Shutter speed: 1/30");
        assert_eq!(lines[4], "    Compensation: +1.0 EV");
        assert_eq!(lines[5], "    Shift: +1.9 EV (full-stop scale)");
    }

    #[test]
    fn solve_report_pairs_moves_with_targets() {
        let report = shutter_report(0.0);
        assert_eq!(report.moves.len(), 2);
        assert_eq!(report.moves[0].from, "f/8");
        assert_eq!(report.moves[0].to, "f/11");
        assert_eq!(report.moves[1].from, "100");
        assert_eq!(report.moves[1].to, "100");
    }

    #[test]
    fn solve_report_serializes_all_fields() {
        let value = serde_json::to_value(shutter_report(0.0)).unwrap();
        assert_eq!(value["axis"], "shutter");
        assert_eq!(value["result"], "1/60");
        assert_eq!(value["base"]["aperture"], "f/8");
        assert_eq!(value["moves"][0]["axis"], "aperture");
        assert_eq!(value["scale"], "full");
        assert!(value["shift_stops"].is_number());
        assert!(value["ev_compensation"].is_number());
    }

    // =========================================================================
    // EV formatting tests
    // =========================================================================

    #[test]
    fn format_ev_single_exposure() {
        let report = ev_report(sunny_base(), 12.97, None);
        let lines = format_ev(&report);
        assert_eq!(lines[0], "EV 13.0 (ISO-adjusted)");
        assert_eq!(lines[1], "    Settings: 1/125  f/8  ISO 100");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn format_ev_with_comparison() {
        let second = Exposure::new("1/125", "f/11", "100");
        let report = ev_report(sunny_base(), 12.97, Some((second, 13.88)));
        let lines = format_ev(&report);
        assert_eq!(lines[2], "    Versus: 1/125  f/11  ISO 100 (EV 13.9)");
        assert_eq!(lines[3], "    Delta: +0.9 EV (second admits less light)");
    }

    #[test]
    fn format_ev_reads_equivalent_exposures() {
        let second = Exposure::new("1/250", "f/8", "200");
        let report = ev_report(sunny_base(), 12.97, Some((second, 12.97)));
        let lines = format_ev(&report);
        assert_eq!(lines[3], "    Delta: +0.0 EV (equivalent exposure)");
    }

    #[test]
    fn ev_report_omits_absent_comparison_in_json() {
        let value = serde_json::to_value(ev_report(sunny_base(), 12.97, None)).unwrap();
        assert!(value.get("versus").is_none());
        assert_eq!(value["exposure"]["shutter"], "1/125");
    }

    // =========================================================================
    // Tables formatting tests
    // =========================================================================

    #[test]
    fn format_tables_all_axes() {
        let report = tables_report(StopScale::Full, None);
        let lines = format_tables(&report);
        assert_eq!(lines[0], "Shutter speeds (full-stop scale, 19 values)");
        assert!(lines.contains(&"Apertures (full-stop scale, 11 values)".to_string()));
        assert!(lines.contains(&"ISO (full-stop scale, 10 values)".to_string()));
        // Blank separators between the three sections.
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 2);
    }

    #[test]
    fn format_tables_single_axis() {
        let report = tables_report(StopScale::Third, Some(Axis::Aperture));
        let lines = format_tables(&report);
        assert_eq!(lines[0], "Apertures (third-stop scale, 31 values)");
        assert_eq!(lines[1], "    f/1  f/1.1  f/1.2  f/1.4  f/1.6  f/1.8  f/2  f/2.2");
        assert!(!lines.iter().any(|l| l.starts_with("Shutter")));
    }

    #[test]
    fn tables_report_omits_unselected_axes_in_json() {
        let value =
            serde_json::to_value(tables_report(StopScale::Half, Some(Axis::Iso))).unwrap();
        assert!(value.get("shutter_speeds").is_none());
        assert!(value.get("apertures").is_none());
        assert_eq!(value["isos"].as_array().unwrap().len(), 19);
    }
}
