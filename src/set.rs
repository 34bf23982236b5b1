use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{resolver::resolve_weight, scheme::RepScheme};

/// A concrete set: the prescription plus the working weight derived from a
/// one-rep max. The weight is never a source of truth; it always equals
/// `resolve_weight(one_rep_max, percentage)` for the max it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub scheme: RepScheme,
    pub weight: f64,
}

impl Set {
    #[must_use]
    pub fn resolve(scheme: RepScheme, one_rep_max: f64) -> Self {
        Set {
            scheme,
            weight: resolve_weight(one_rep_max, scheme.effective_percentage()),
        }
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} lbs", self.scheme.reps, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::Reps;

    #[test]
    fn weight_is_derived_from_the_scheme_percentage() {
        let set = Set::resolve(RepScheme::new(Reps::Fixed(5), 0.75), 200.0);
        assert_eq!(set.weight, 150.0);
    }

    #[test]
    fn reps_only_scheme_uses_the_table() {
        // 5 reps -> 0.86, 200 * 0.86 = 172 -> 172.5
        let set = Set::resolve(RepScheme::from_reps(Reps::Fixed(5)), 200.0);
        assert_eq!(set.weight, 172.5);
    }

    #[test]
    fn displays_amrap_marker() {
        let set = Set::resolve(RepScheme::new(Reps::Amrap(5), 0.85), 200.0);
        assert_eq!(set.to_string(), "5+ x 170 lbs");
    }
}
