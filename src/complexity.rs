//! Empirical complexity estimation.
//!
//! A two-point ratio heuristic: given operation counts at the two largest
//! tested sizes, compare the observed growth ratio against the ratios each
//! candidate class would predict and pick the closest fit within tolerance.
//! Two points cannot reliably separate neighboring classes, so the
//! tie-breaks are deliberately conservative: the N log N / N² ambiguity
//! resolves toward N² when both fit, and O(1) demands a tighter bound than
//! the growth classes since constant-time claims are the easiest to falsify.

use std::fmt;

use crate::counter::CounterSnapshot;

/// Tolerance for the growth classes (relative error of the ratio).
const TOLERANCE: f64 = 0.35;
/// O(1) must be noticeably closer than the growth classes.
const O1_TOLERANCE: f64 = TOLERANCE / 2.0;

/// Asymptotic class assigned to an observation series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    O1,
    ON,
    ONLogN,
    ON2,
    Undetermined,
    InsufficientData,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Complexity::O1 => "O(1)",
            Complexity::ON => "O(N)",
            Complexity::ONLogN => "O(N log N)",
            Complexity::ON2 => "O(N^2)",
            Complexity::Undetermined => "Undetermined",
            Complexity::InsufficientData => "Insufficient Data",
        };
        f.write_str(label)
    }
}

/// Classify from two (size, operation count) observations with `n1 < n2`.
pub fn estimate_from_pair(n1: f64, ops1: f64, n2: f64, ops2: f64) -> Complexity {
    if n1 <= 0.0 || n2 <= 0.0 || ops1 < 0.0 || ops2 < 0.0 || n2 <= n1 {
        return Complexity::InsufficientData;
    }

    // Constant or degenerate operation counts short-circuit the ratio test.
    if ops1 == 0.0 && ops2 == 0.0 {
        return Complexity::O1;
    }
    if ops1 > 0.0 && ops1 == ops2 {
        return Complexity::O1;
    }
    // Zero on one side only: ambiguous, needs more data.
    if ops1 == 0.0 || ops2 == 0.0 {
        return Complexity::InsufficientData;
    }

    let size_ratio = n2 / n1;
    let ops_ratio = ops2 / ops1;

    let expected_n = size_ratio;
    // For n1 near 1 the log factor degenerates; N log N behaves like N.
    let expected_nlogn = if n1 < 1.5 {
        expected_n
    } else {
        size_ratio * (n2.log2() / n1.log2())
    };
    let expected_n2 = size_ratio * size_ratio;

    let calc_diff = |expected: f64| {
        if expected <= f64::EPSILON {
            f64::MAX
        } else {
            (ops_ratio - expected).abs() / expected
        }
    };

    let diff_n = calc_diff(expected_n);
    let diff_nlogn = calc_diff(expected_nlogn);
    let diff_n2 = calc_diff(expected_n2);
    let diff_1 = (ops_ratio - 1.0).abs();

    let min_diff = diff_1.min(diff_n).min(diff_nlogn).min(diff_n2);

    if min_diff == diff_1 && min_diff < O1_TOLERANCE {
        return Complexity::O1;
    }
    if min_diff == diff_n && min_diff < TOLERANCE {
        return Complexity::ON;
    }
    if min_diff == diff_nlogn && min_diff < TOLERANCE {
        // N log N and N² ratios sit close together; claim N log N only when
        // it is clearly the better fit or N² is far off.
        if diff_nlogn < diff_n2 * 0.8 || diff_n2 > TOLERANCE * 1.5 {
            return Complexity::ONLogN;
        }
        if diff_n2 < TOLERANCE {
            return Complexity::ON2;
        }
        return Complexity::ONLogN;
    }
    if min_diff == diff_n2 && min_diff < TOLERANCE {
        return Complexity::ON2;
    }

    Complexity::Undetermined
}

/// Classify one generator's observation series.
///
/// Sizes ≤ 1 are excluded from the ratio test (degenerate log/ratio
/// behavior) but a constant count across the remaining points still
/// classifies as O(1). With two or more usable points the two largest sizes
/// drive the pair estimate.
pub fn estimate_for_series(rows: &[(i64, CounterSnapshot)], use_comparisons: bool) -> Complexity {
    let mut points: Vec<(f64, f64)> = rows
        .iter()
        .filter(|(size, _)| *size > 1)
        .map(|(size, snapshot)| {
            let ops = if use_comparisons {
                snapshot.total_comparisons()
            } else {
                snapshot.total_data_moves()
            };
            (*size as f64, ops as f64)
        })
        .collect();

    points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if points.len() < 2 {
        let constant = points
            .first()
            .map(|&(_, first)| points.iter().all(|&(_, ops)| ops == first))
            .unwrap_or(false);
        if constant {
            return Complexity::O1;
        }
        return Complexity::InsufficientData;
    }

    let (n1, ops1) = points[points.len() - 2];
    let (n2, ops2) = points[points.len() - 1];
    estimate_from_pair(n1, ops1, n2, ops2)
}
