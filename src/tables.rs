//! Canonical setting tables for the three exposure axes.
//!
//! These are the values photographers actually see on dials and in
//! viewfinders, one list per axis and stop scale. The lists are authored
//! as notation labels (the single source of truth for both display and
//! math) and parsed once, lazily, into `(label, value)` tables.
//!
//! Ordering follows dial convention: shutter speeds slow to fast,
//! apertures wide to narrow, ISO low to high. Every scale spans the same
//! endpoints, and the half- and third-stop lists are strict supersets of
//! the full-stop list, so coarse values never disappear when a finer
//! scale is selected.
//!
//! The in-between labels are the industry's rounded markings, not exact
//! powers of two (`f/1.2` rather than `f/1.19`, `1/90` rather than
//! `1/84.9`). Snapping works on stop distance, so the rounding never
//! accumulates.

use std::sync::LazyLock;

use crate::notation;
use crate::stops;
use crate::types::{Axis, StopScale};

/// One canonical setting: the dial label and its physical value
/// (seconds, f-number, or ISO).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub label: &'static str,
    pub value: f64,
}

// ==================== Shutter speeds ====================

const SHUTTER_FULL: &[&str] = &[
    "30\"", "15\"", "8\"", "4\"", "2\"", "1\"", "1/2", "1/4", "1/8", "1/15",
    "1/30", "1/60", "1/125", "1/250", "1/500", "1/1000", "1/2000", "1/4000",
    "1/8000",
];

const SHUTTER_HALF: &[&str] = &[
    "30\"", "20\"", "15\"", "10\"", "8\"", "6\"", "4\"", "3\"", "2\"",
    "1.5\"", "1\"", "0.7\"", "1/2", "1/3", "1/4", "1/6", "1/8", "1/10",
    "1/15", "1/20", "1/30", "1/45", "1/60", "1/90", "1/125", "1/180",
    "1/250", "1/350", "1/500", "1/750", "1/1000", "1/1500", "1/2000",
    "1/3000", "1/4000", "1/6000", "1/8000",
];

const SHUTTER_THIRD: &[&str] = &[
    "30\"", "25\"", "20\"", "15\"", "13\"", "10\"", "8\"", "6\"", "5\"",
    "4\"", "3.2\"", "2.5\"", "2\"", "1.6\"", "1.3\"", "1\"", "0.8\"",
    "0.6\"", "1/2", "0.4\"", "0.3\"", "1/4", "1/5", "1/6", "1/8", "1/10",
    "1/13", "1/15", "1/20", "1/25", "1/30", "1/40", "1/50", "1/60", "1/80",
    "1/100", "1/125", "1/160", "1/200", "1/250", "1/320", "1/400", "1/500",
    "1/640", "1/800", "1/1000", "1/1250", "1/1600", "1/2000", "1/2500",
    "1/3200", "1/4000", "1/5000", "1/6400", "1/8000",
];

// ==================== Apertures ====================

const APERTURE_FULL: &[&str] = &[
    "f/1", "f/1.4", "f/2", "f/2.8", "f/4", "f/5.6", "f/8", "f/11", "f/16",
    "f/22", "f/32",
];

const APERTURE_HALF: &[&str] = &[
    "f/1", "f/1.2", "f/1.4", "f/1.7", "f/2", "f/2.4", "f/2.8", "f/3.3",
    "f/4", "f/4.8", "f/5.6", "f/6.7", "f/8", "f/9.5", "f/11", "f/13",
    "f/16", "f/19", "f/22", "f/27", "f/32",
];

const APERTURE_THIRD: &[&str] = &[
    "f/1", "f/1.1", "f/1.2", "f/1.4", "f/1.6", "f/1.8", "f/2", "f/2.2",
    "f/2.5", "f/2.8", "f/3.2", "f/3.5", "f/4", "f/4.5", "f/5", "f/5.6",
    "f/6.3", "f/7.1", "f/8", "f/9", "f/10", "f/11", "f/13", "f/14", "f/16",
    "f/18", "f/20", "f/22", "f/25", "f/29", "f/32",
];

// ==================== ISO ====================

const ISO_FULL: &[&str] = &[
    "50", "100", "200", "400", "800", "1600", "3200", "6400", "12800",
    "25600",
];

const ISO_HALF: &[&str] = &[
    "50", "70", "100", "140", "200", "280", "400", "560", "800", "1100",
    "1600", "2200", "3200", "4500", "6400", "9000", "12800", "18000",
    "25600",
];

const ISO_THIRD: &[&str] = &[
    "50", "64", "80", "100", "125", "160", "200", "250", "320", "400",
    "500", "640", "800", "1000", "1250", "1600", "2000", "2500", "3200",
    "4000", "5000", "6400", "8000", "10000", "12800", "16000", "20000",
    "25600",
];

static SHUTTER_ENTRIES: LazyLock<[Vec<TableEntry>; 3]> = LazyLock::new(|| {
    [
        parse_labels(Axis::Shutter, SHUTTER_FULL),
        parse_labels(Axis::Shutter, SHUTTER_HALF),
        parse_labels(Axis::Shutter, SHUTTER_THIRD),
    ]
});

static APERTURE_ENTRIES: LazyLock<[Vec<TableEntry>; 3]> = LazyLock::new(|| {
    [
        parse_labels(Axis::Aperture, APERTURE_FULL),
        parse_labels(Axis::Aperture, APERTURE_HALF),
        parse_labels(Axis::Aperture, APERTURE_THIRD),
    ]
});

static ISO_ENTRIES: LazyLock<[Vec<TableEntry>; 3]> = LazyLock::new(|| {
    [
        parse_labels(Axis::Iso, ISO_FULL),
        parse_labels(Axis::Iso, ISO_HALF),
        parse_labels(Axis::Iso, ISO_THIRD),
    ]
});

fn parse_labels(axis: Axis, labels: &[&'static str]) -> Vec<TableEntry> {
    labels
        .iter()
        .map(|label| TableEntry {
            label,
            value: notation::parse(axis, label)
                .expect("canonical table labels always parse"),
        })
        .collect()
}

fn scale_index(scale: StopScale) -> usize {
    match scale {
        StopScale::Full => 0,
        StopScale::Half => 1,
        StopScale::Third => 2,
    }
}

/// Canonical notation labels for one axis and scale, in dial order.
pub fn labels(axis: Axis, scale: StopScale) -> &'static [&'static str] {
    match (axis, scale) {
        (Axis::Shutter, StopScale::Full) => SHUTTER_FULL,
        (Axis::Shutter, StopScale::Half) => SHUTTER_HALF,
        (Axis::Shutter, StopScale::Third) => SHUTTER_THIRD,
        (Axis::Aperture, StopScale::Full) => APERTURE_FULL,
        (Axis::Aperture, StopScale::Half) => APERTURE_HALF,
        (Axis::Aperture, StopScale::Third) => APERTURE_THIRD,
        (Axis::Iso, StopScale::Full) => ISO_FULL,
        (Axis::Iso, StopScale::Half) => ISO_HALF,
        (Axis::Iso, StopScale::Third) => ISO_THIRD,
    }
}

/// Shutter speed labels, slowest to fastest.
pub fn shutter_speeds(scale: StopScale) -> &'static [&'static str] {
    labels(Axis::Shutter, scale)
}

/// Aperture labels, widest to narrowest.
pub fn apertures(scale: StopScale) -> &'static [&'static str] {
    labels(Axis::Aperture, scale)
}

/// ISO labels, lowest to highest.
pub fn isos(scale: StopScale) -> &'static [&'static str] {
    labels(Axis::Iso, scale)
}

/// Parsed `(label, value)` table for one axis and scale, in dial order.
pub fn entries(axis: Axis, scale: StopScale) -> &'static [TableEntry] {
    let tables = match axis {
        Axis::Shutter => &SHUTTER_ENTRIES,
        Axis::Aperture => &APERTURE_ENTRIES,
        Axis::Iso => &ISO_ENTRIES,
    };
    &tables[scale_index(scale)]
}

/// The entry closest to `value` in stop distance.
///
/// Ties keep the earlier entry in dial order (the slower shutter speed,
/// wider aperture, or lower ISO), via the strict `<` in the scan.
pub fn nearest(axis: Axis, scale: StopScale, value: f64) -> &'static TableEntry {
    let table = entries(axis, scale);
    let mut best = &table[0];
    let mut best_distance = stops::distance(axis, best.value, value).abs();
    for entry in &table[1..] {
        let distance = stops::distance(axis, entry.value, value).abs();
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }
    best
}

/// First and last entries of a table, in dial order.
///
/// For shutter speeds that is (slowest, fastest); for apertures
/// (widest, narrowest); for ISO (lowest, highest). Endpoints are the
/// same on every scale.
pub fn range(axis: Axis, scale: StopScale) -> (&'static TableEntry, &'static TableEntry) {
    let table = entries(axis, scale);
    (&table[0], &table[table.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_axes() -> [Axis; 3] {
        [Axis::Shutter, Axis::Aperture, Axis::Iso]
    }

    fn all_scales() -> [StopScale; 3] {
        [StopScale::Full, StopScale::Half, StopScale::Third]
    }

    // ==================== Structure ====================

    #[test]
    fn table_sizes_match_the_densification_rule() {
        // A scale with k steps per stop refines each full-stop interval
        // into k, keeping both endpoints: (n - 1) * k + 1 entries.
        for axis in all_axes() {
            let full = labels(axis, StopScale::Full).len();
            for scale in all_scales() {
                let expected = (full - 1) * scale.steps_per_stop() as usize + 1;
                assert_eq!(
                    labels(axis, scale).len(),
                    expected,
                    "{axis:?} on {scale:?} scale"
                );
            }
        }
    }

    #[test]
    fn expected_entry_counts() {
        assert_eq!(shutter_speeds(StopScale::Full).len(), 19);
        assert_eq!(shutter_speeds(StopScale::Half).len(), 37);
        assert_eq!(shutter_speeds(StopScale::Third).len(), 55);
        assert_eq!(apertures(StopScale::Full).len(), 11);
        assert_eq!(apertures(StopScale::Half).len(), 21);
        assert_eq!(apertures(StopScale::Third).len(), 31);
        assert_eq!(isos(StopScale::Full).len(), 10);
        assert_eq!(isos(StopScale::Half).len(), 19);
        assert_eq!(isos(StopScale::Third).len(), 28);
    }

    #[test]
    fn finer_scales_contain_every_full_stop_label() {
        for axis in all_axes() {
            for scale in [StopScale::Half, StopScale::Third] {
                let fine = labels(axis, scale);
                for label in labels(axis, StopScale::Full) {
                    assert!(
                        fine.contains(label),
                        "{label} missing from {axis:?} {scale:?} table"
                    );
                }
            }
        }
    }

    #[test]
    fn endpoints_agree_across_scales() {
        for axis in all_axes() {
            let (full_first, full_last) = range(axis, StopScale::Full);
            for scale in [StopScale::Half, StopScale::Third] {
                let (first, last) = range(axis, scale);
                assert_eq!(first.label, full_first.label);
                assert_eq!(last.label, full_last.label);
            }
        }
    }

    #[test]
    fn tables_are_strictly_ordered() {
        for axis in all_axes() {
            for scale in all_scales() {
                for pair in entries(axis, scale).windows(2) {
                    match axis {
                        // Dial order runs slow to fast, so seconds decrease.
                        Axis::Shutter => assert!(
                            pair[0].value > pair[1].value,
                            "{} then {}",
                            pair[0].label,
                            pair[1].label
                        ),
                        Axis::Aperture | Axis::Iso => assert!(
                            pair[0].value < pair[1].value,
                            "{} then {}",
                            pair[0].label,
                            pair[1].label
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn neighbors_sit_one_scale_step_apart() {
        // Labels are the industry's rounded markings, so allow a wide
        // margin around the nominal step (worst offender is the f/11,
        // f/13, f/14 run on the third-stop aperture scale).
        for axis in all_axes() {
            for scale in all_scales() {
                let nominal = 1.0 / scale.steps_per_stop() as f64;
                for pair in entries(axis, scale).windows(2) {
                    let step =
                        stops::distance(axis, pair[0].value, pair[1].value).abs();
                    assert!(
                        (step - nominal).abs() < 0.2,
                        "{} to {} is {step:.3} stops on {scale:?} scale",
                        pair[0].label,
                        pair[1].label
                    );
                }
            }
        }
    }

    // ==================== Snapping ====================

    #[test]
    fn every_label_snaps_to_itself() {
        for axis in all_axes() {
            for scale in all_scales() {
                for entry in entries(axis, scale) {
                    assert_eq!(nearest(axis, scale, entry.value).label, entry.label);
                }
            }
        }
    }

    #[test]
    fn nearest_picks_the_closer_neighbor() {
        // 1/100 s is 0.32 stops from 1/125 and 0.74 from 1/60.
        assert_eq!(nearest(Axis::Shutter, StopScale::Full, 0.01).label, "1/125");
        // f/9 is closer to f/8 than to f/11 in stop distance.
        assert_eq!(nearest(Axis::Aperture, StopScale::Full, 9.0).label, "f/8");
        assert_eq!(nearest(Axis::Iso, StopScale::Full, 300.0).label, "400");
        // The same f-number lands differently on a finer scale.
        assert_eq!(nearest(Axis::Aperture, StopScale::Third, 9.0).label, "f/9");
    }

    #[test]
    fn nearest_clamps_beyond_the_ends() {
        assert_eq!(nearest(Axis::Shutter, StopScale::Half, 90.0).label, "30\"");
        assert_eq!(
            nearest(Axis::Shutter, StopScale::Half, 0.00001).label,
            "1/8000"
        );
        assert_eq!(nearest(Axis::Iso, StopScale::Third, 12.0).label, "50");
    }

    #[test]
    fn range_reports_dial_order_endpoints() {
        let (slowest, fastest) = range(Axis::Shutter, StopScale::Full);
        assert_eq!(slowest.label, "30\"");
        assert_eq!(fastest.label, "1/8000");
        let (widest, narrowest) = range(Axis::Aperture, StopScale::Third);
        assert_eq!(widest.label, "f/1");
        assert_eq!(narrowest.label, "f/32");
    }
}
