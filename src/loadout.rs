use itertools::Itertools;

use crate::{loadout_error::LoadoutError, plate::Plate};

/// Slack absorbed when comparing accumulated plate weight against the
/// per-side requirement, so float error never rejects a fitting plate.
pub const EPSILON: f64 = 0.001;

/// How far the achieved total may sit from the target and still count as
/// hitting it exactly.
pub const EXACT_TOLERANCE: f64 = 0.1;

/// Plates assigned to one side of the bar, in the order the greedy pass
/// added them (heaviest first).
#[derive(Clone, Debug, PartialEq)]
pub struct PlateLoadout {
    pub per_side: Vec<f64>,
    pub achieved_weight: f64,
    pub exact: bool,
    target_weight: f64,
}

impl PlateLoadout {
    #[must_use]
    pub fn per_side_weight(&self) -> f64 {
        self.per_side.iter().sum()
    }

    /// Signed difference between the target and what the inventory could
    /// build: positive is a shortfall, negative an overage.
    #[must_use]
    pub fn shortfall(&self) -> f64 {
        self.target_weight - self.achieved_weight
    }

    /// Plate weights in rendering order, lightest first, so the heaviest
    /// plate sits nearest the collar when drawn outward from the bar.
    #[must_use]
    pub fn display_order(&self) -> Vec<f64> {
        self.per_side.iter().rev().copied().collect()
    }
}

/// Decomposes a target total weight into physical plates per side of the
/// bar, greedily, heaviest denomination first.
///
/// The inventory counts are totals over both sides; only `floor(count / 2)`
/// of each denomination is usable per side. Greedy largest-first is not
/// globally optimal for arbitrary denominations and finite inventory; when
/// the exact target is unreachable the result carries the closest achievable
/// weight with `exact == false` rather than a search for a better
/// combination.
///
/// # Errors
/// [`LoadoutError::InvalidInput`] for non-finite or out-of-range numeric
/// inputs, [`LoadoutError::InvalidTarget`] when the target is below the bar
/// alone. Neither is auto-corrected.
pub fn compute_plate_loadout(
    target_weight: f64,
    bar_weight: f64,
    inventory: &[Plate],
) -> Result<PlateLoadout, LoadoutError> {
    if !target_weight.is_finite() || target_weight <= 0.0 {
        return Err(LoadoutError::InvalidInput(
            "target weight must be a positive finite number",
        ));
    }
    if !bar_weight.is_finite() || bar_weight < 0.0 {
        return Err(LoadoutError::InvalidInput(
            "bar weight must be a non-negative finite number",
        ));
    }
    if target_weight < bar_weight {
        return Err(LoadoutError::InvalidTarget {
            target: target_weight,
            bar: bar_weight,
        });
    }

    let needed_per_side = (target_weight - bar_weight) / 2.0;
    if needed_per_side <= 0.0 {
        return Ok(PlateLoadout {
            per_side: Vec::new(),
            achieved_weight: bar_weight,
            exact: target_weight == bar_weight,
            target_weight,
        });
    }

    let pool = inventory
        .iter()
        .map(|plate| (plate.weight(), plate.usable_per_side()))
        .sorted_by(|(a, _), (b, _)| b.total_cmp(a))
        .collect::<Vec<_>>();

    let mut per_side = Vec::new();
    let mut side_weight = 0.0;

    for (weight, mut usable) in pool {
        while usable > 0 && side_weight + weight <= needed_per_side + EPSILON {
            per_side.push(weight);
            side_weight += weight;
            usable -= 1;
        }
    }

    let achieved_weight = bar_weight + 2.0 * side_weight;

    Ok(PlateLoadout {
        per_side,
        achieved_weight,
        exact: (target_weight - achieved_weight).abs() <= EXACT_TOLERANCE,
        target_weight,
    })
}
