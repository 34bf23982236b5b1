use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Weight of a standard olympic barbell in pounds.
pub const STANDARD_BAR_LBS: f64 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    weight: f64,
}

impl Bar {
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Bar { weight }
    }

    #[must_use]
    pub fn standard() -> Self {
        Bar::new(STANDARD_BAR_LBS)
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar::standard()
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} lb bar", self.weight)
    }
}
