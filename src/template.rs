use serde::{Deserialize, Serialize};

use crate::{scheme::RepScheme, set::Set};

/// The built-in program catalog, embedded at compile time.
const CATALOG_JSON: &str = include_str!("../templates/catalog.json");

/// A named program: an ordered list of rep schemes applied to one lift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub schemes: Vec<RepScheme>,
}

impl Template {
    /// Resolves the template against a one-rep max into concrete sets.
    #[must_use]
    pub fn resolve(&self, one_rep_max: f64) -> Vec<Set> {
        self.schemes
            .iter()
            .map(|scheme| Set::resolve(*scheme, one_rep_max))
            .collect()
    }
}

/// Parses the embedded catalog.
///
/// # Errors
/// If the embedded JSON does not match the template shape.
pub fn builtin_catalog() -> Result<Vec<Template>, serde_json::Error> {
    serde_json::from_str(CATALOG_JSON)
}
