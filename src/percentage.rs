/// Canonical training percentage for each target rep count.
///
/// Contiguous for 1 through 12 reps, then sparse anchors at 16, 20, 25
/// and 30 for high-rep work.
pub const REP_PERCENTAGES: [(u32, f64); 16] = [
    (1, 1.00),
    (2, 0.95),
    (3, 0.92),
    (4, 0.89),
    (5, 0.86),
    (6, 0.84),
    (7, 0.81),
    (8, 0.79),
    (9, 0.76),
    (10, 0.74),
    (11, 0.72),
    (12, 0.70),
    (16, 0.65),
    (20, 0.60),
    (25, 0.55),
    (30, 0.50),
];

/// Fallback when a rep count of 12 or fewer matches no table entry. Not
/// reachable while the table stays contiguous over 1..=12; kept as observed
/// behaviour rather than removed.
pub const FALLBACK_PERCENTAGE: f64 = 0.75;

/// Maps a target rep count to its canonical training percentage.
///
/// Rep counts above 12 that match no anchor fall back to the 12-rep
/// percentage; unmatched counts of 12 or fewer fall back to
/// [`FALLBACK_PERCENTAGE`].
#[must_use]
pub fn percentage_for_reps(reps: u32) -> f64 {
    if let Some(&(_, percentage)) = REP_PERCENTAGES.iter().find(|&&(r, _)| r == reps) {
        return percentage;
    }

    if reps > 12 {
        percentage_for_reps(12)
    } else {
        FALLBACK_PERCENTAGE
    }
}
