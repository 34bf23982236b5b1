use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::percentage::percentage_for_reps;

/// A prescribed rep count. AMRAP sets ("as many reps as possible") are
/// written with a trailing `+`, e.g. `5+`. The marker is metadata for
/// display; it never affects weight computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reps {
    Fixed(u32),
    Amrap(u32),
}

impl Reps {
    #[must_use]
    pub fn count(&self) -> u32 {
        match self {
            Reps::Fixed(n) | Reps::Amrap(n) => *n,
        }
    }

    #[must_use]
    pub fn is_amrap(&self) -> bool {
        matches!(self, Reps::Amrap(_))
    }
}

impl Display for Reps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reps::Fixed(n) => write!(f, "{n}"),
            Reps::Amrap(n) => write!(f, "{n}+"),
        }
    }
}

impl FromStr for Reps {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (count, amrap) = match s.strip_suffix('+') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let count = count
            .parse::<u32>()
            .map_err(|_| format!("invalid rep count {s:?}"))?;
        Ok(if amrap {
            Reps::Amrap(count)
        } else {
            Reps::Fixed(count)
        })
    }
}

impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reps::Fixed(n) => serializer.serialize_u32(*n),
            Reps::Amrap(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Marked(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Reps::Fixed(n)),
            Raw::Marked(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// One prescribed set in a program: a rep count and a fraction of the
/// lifter's one-rep max. When the percentage is omitted it comes from the
/// rep table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepScheme {
    pub reps: Reps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl RepScheme {
    #[must_use]
    pub fn new(reps: Reps, percentage: f64) -> Self {
        RepScheme {
            reps,
            percentage: Some(percentage),
        }
    }

    #[must_use]
    pub fn from_reps(reps: Reps) -> Self {
        RepScheme {
            reps,
            percentage: None,
        }
    }

    #[must_use]
    pub fn effective_percentage(&self) -> f64 {
        self.percentage
            .unwrap_or_else(|| percentage_for_reps(self.reps.count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_and_amrap() {
        assert_eq!("5".parse::<Reps>().unwrap(), Reps::Fixed(5));
        assert_eq!("5+".parse::<Reps>().unwrap(), Reps::Amrap(5));
        assert!("+".parse::<Reps>().is_err());
        assert!("five".parse::<Reps>().is_err());
    }

    #[test]
    fn amrap_marker_round_trips_through_display() {
        assert_eq!(Reps::Amrap(5).to_string(), "5+");
        assert_eq!(Reps::Fixed(8).to_string(), "8");
    }

    #[test]
    fn serde_accepts_number_or_marked_string() {
        let fixed: Reps = serde_json::from_str("5").unwrap();
        assert_eq!(fixed, Reps::Fixed(5));

        let amrap: Reps = serde_json::from_str("\"3+\"").unwrap();
        assert_eq!(amrap, Reps::Amrap(3));

        assert_eq!(serde_json::to_string(&Reps::Fixed(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Reps::Amrap(3)).unwrap(), "\"3+\"");
    }

    #[test]
    fn omitted_percentage_comes_from_the_rep_table() {
        let scheme = RepScheme::from_reps(Reps::Fixed(5));
        assert_eq!(scheme.effective_percentage(), 0.86);

        let explicit = RepScheme::new(Reps::Amrap(5), 0.85);
        assert_eq!(explicit.effective_percentage(), 0.85);
    }

    #[test]
    fn amrap_marker_does_not_change_the_percentage() {
        let fixed = RepScheme::from_reps(Reps::Fixed(5));
        let amrap = RepScheme::from_reps(Reps::Amrap(5));
        assert_eq!(fixed.effective_percentage(), amrap.effective_percentage());
    }
}
