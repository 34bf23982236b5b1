use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One plate denomination in a lifter's inventory.
///
/// `count` is the total number of physical plates owned of this weight, both
/// sides of the bar combined. Plates load symmetrically, so only
/// `floor(count / 2)` of them are usable per side. The storage shape names
/// this field `quantity`; in memory it is `count`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    weight: f64,
    #[serde(rename = "quantity")]
    count: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64, count: u32) -> Self {
        Plate { weight, count }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of plates of this weight that can go on one side of the bar.
    #[must_use]
    pub fn usable_per_side(&self) -> u32 {
        self.count / 2
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Vec<Plate> {
        pairs
            .iter()
            .map(|&(weight, count)| Plate::new(weight, count))
            .collect()
    }

    /// A common home-gym inventory: a pair each of 45/35/25/10/5/2.5.
    #[must_use]
    pub fn standard_pairs() -> Vec<Plate> {
        Plate::from_pairs(&[
            (45.0, 2),
            (35.0, 2),
            (25.0, 2),
            (10.0, 2),
            (5.0, 2),
            (2.5, 2),
        ])
    }
}

impl FromStr for Plate {
    type Err = String;

    /// Parses `WEIGHTxCOUNT`, e.g. `45x4` for four 45 lb plates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, count) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WEIGHTxCOUNT, got {s:?}"))?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid plate weight {weight:?}"))?;
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid plate count {count:?}"))?;
        Ok(Plate::new(weight, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_per_side_floors_odd_counts() {
        assert_eq!(Plate::new(45.0, 5).usable_per_side(), 2);
        assert_eq!(Plate::new(25.0, 1).usable_per_side(), 0);
        assert_eq!(Plate::new(10.0, 4).usable_per_side(), 2);
    }

    #[test]
    fn storage_shape_uses_quantity() {
        let json = r#"{"weight":45.0,"quantity":4}"#;
        let plate: Plate = serde_json::from_str(json).unwrap();
        assert_eq!(plate.weight(), 45.0);
        assert_eq!(plate.count(), 4);

        let back = serde_json::to_string(&plate).unwrap();
        assert!(back.contains("\"quantity\":4"));
        assert!(!back.contains("count"));
    }

    #[test]
    fn parses_weight_by_count_strings() {
        let plate: Plate = "2.5x4".parse().unwrap();
        assert_eq!(plate.weight(), 2.5);
        assert_eq!(plate.count(), 4);

        assert!("45".parse::<Plate>().is_err());
        assert!("heavy x2".parse::<Plate>().is_err());
    }
}
