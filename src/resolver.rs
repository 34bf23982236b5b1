/// Smallest practical jump between barbell weights, in pounds.
pub const DEFAULT_INCREMENT_LBS: f64 = 2.5;

/// Computes the working weight for a set: `one_rep_max * percentage`,
/// rounded to the nearest 2.5 lbs (half rounds up).
///
/// A zero, negative or non-finite max resolves to 0 for every percentage
/// (bodyweight or unset-max exercises carry no loaded weight). Percentages
/// above 1.0 are computed literally; overload prescriptions are valid.
#[must_use]
pub fn resolve_weight(one_rep_max: f64, percentage: f64) -> f64 {
    resolve_weight_to(one_rep_max, percentage, DEFAULT_INCREMENT_LBS)
}

/// [`resolve_weight`] with an explicit rounding increment.
#[must_use]
pub fn resolve_weight_to(one_rep_max: f64, percentage: f64, increment: f64) -> f64 {
    if !one_rep_max.is_finite() || one_rep_max <= 0.0 {
        return 0.0;
    }

    (one_rep_max * percentage / increment).round() * increment
}
