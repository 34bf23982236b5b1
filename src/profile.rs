use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    bar::Bar,
    loadout::{PlateLoadout, compute_plate_loadout},
    loadout_error::LoadoutError,
    plate::Plate,
};

/// One-rep max assumed for an exercise the lifter has never recorded.
pub const DEFAULT_ONE_REP_MAX: f64 = 100.0;

/// Pounds added or removed per piece of set feedback.
pub const FEEDBACK_STEP_LBS: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    TooEasy,
    JustRight,
    TooHard,
}

/// Snapshot of a lifter's stored state: per-exercise one-rep maxes and the
/// plate inventory. The caller owns fetch timing; nothing here does I/O.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    one_rep_maxes: HashMap<String, f64>,
    available_plates: Vec<Plate>,
    #[serde(default)]
    bar: Bar,
}

impl Profile {
    #[must_use]
    pub fn new(one_rep_maxes: HashMap<String, f64>, available_plates: Vec<Plate>, bar: Bar) -> Self {
        Profile {
            one_rep_maxes,
            available_plates,
            bar,
        }
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    /// The recorded max for an exercise, or [`DEFAULT_ONE_REP_MAX`] if none
    /// has been recorded yet.
    #[must_use]
    pub fn one_rep_max(&self, exercise: &str) -> f64 {
        self.one_rep_maxes
            .get(exercise)
            .copied()
            .unwrap_or(DEFAULT_ONE_REP_MAX)
    }

    pub fn set_one_rep_max(&mut self, exercise: &str, max: f64) {
        self.one_rep_maxes.insert(exercise.to_string(), max.max(0.0));
    }

    /// Nudges an exercise's max in response to how the last session felt.
    /// Returns the new max.
    pub fn record_feedback(&mut self, exercise: &str, feedback: Feedback) -> f64 {
        let current = self.one_rep_max(exercise);
        let adjusted = match feedback {
            Feedback::TooEasy => current + FEEDBACK_STEP_LBS,
            Feedback::JustRight => current,
            Feedback::TooHard => (current - FEEDBACK_STEP_LBS).max(0.0),
        };
        self.set_one_rep_max(exercise, adjusted);
        adjusted
    }

    #[must_use]
    pub fn available_plates(&self) -> &[Plate] {
        &self.available_plates
    }

    pub fn add_plates(&mut self, plate: Plate) {
        self.available_plates.push(plate);
    }

    pub fn remove_plates(&mut self, weight: f64) {
        self.available_plates.retain(|p| p.weight() != weight);
    }

    /// Loads a target weight from the profile's own bar and inventory.
    ///
    /// # Errors
    /// See [`compute_plate_loadout`].
    pub fn plate_loadout(&self, target: f64) -> Result<PlateLoadout, LoadoutError> {
        compute_plate_loadout(target, self.bar.weight(), &self.available_plates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_exercise_defaults_to_one_hundred() {
        let profile = Profile::default();
        assert_eq!(profile.one_rep_max("squat"), DEFAULT_ONE_REP_MAX);
    }

    #[test]
    fn default_bar_is_the_standard_forty_five() {
        assert_eq!(Profile::default().bar().weight(), 45.0);
    }

    #[test]
    fn feedback_nudges_the_max() {
        let mut profile = Profile::default();
        profile.set_one_rep_max("bench press", 200.0);

        assert_eq!(profile.record_feedback("bench press", Feedback::TooEasy), 205.0);
        assert_eq!(profile.record_feedback("bench press", Feedback::TooHard), 200.0);
        assert_eq!(
            profile.record_feedback("bench press", Feedback::JustRight),
            200.0
        );
    }

    #[test]
    fn too_hard_feedback_floors_at_zero() {
        let mut profile = Profile::default();
        profile.set_one_rep_max("curl", 2.5);
        assert_eq!(profile.record_feedback("curl", Feedback::TooHard), 0.0);
        assert_eq!(profile.record_feedback("curl", Feedback::TooHard), 0.0);
    }

    #[test]
    fn loads_targets_from_its_own_inventory() {
        let mut profile = Profile::default();
        profile.add_plates(Plate::new(45.0, 4));
        profile.add_plates(Plate::new(2.5, 2));

        let loadout = profile.plate_loadout(140.0).unwrap();
        assert_eq!(loadout.per_side, vec![45.0, 2.5]);
        assert!(loadout.exact);
    }

    #[test]
    fn plate_inventory_is_edited_explicitly() {
        let mut profile = Profile::default();
        profile.add_plates(Plate::new(45.0, 2));
        profile.add_plates(Plate::new(25.0, 4));
        assert_eq!(profile.available_plates().len(), 2);

        profile.remove_plates(45.0);
        assert_eq!(profile.available_plates(), &[Plate::new(25.0, 4)]);
    }
}
