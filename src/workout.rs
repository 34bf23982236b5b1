use serde::{Deserialize, Serialize};

use crate::{profile::Profile, scheme::RepScheme, set::Set};

/// One exercise in a workout: the name keying into the profile's maxes,
/// the prescription, and the sets last derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub schemes: Vec<RepScheme>,
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn new(name: &str, schemes: Vec<RepScheme>) -> Self {
        WorkoutExercise {
            name: name.to_string(),
            schemes,
            sets: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    exercises: Vec<WorkoutExercise>,
}

impl Workout {
    #[must_use]
    pub fn new(exercises: Vec<WorkoutExercise>) -> Self {
        Workout { exercises }
    }

    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    /// Re-derives every set's weight from the profile's current maxes.
    /// Called by the collaborator layer after any one-rep max changes; the
    /// change reaches every set referencing that exercise by name.
    pub fn recalculate(&mut self, profile: &Profile) {
        for exercise in &mut self.exercises {
            let max = profile.one_rep_max(&exercise.name);
            exercise.sets = exercise
                .schemes
                .iter()
                .map(|scheme| Set::resolve(*scheme, max))
                .collect();
        }
    }
}

impl IntoIterator for Workout {
    type Item = WorkoutExercise;
    type IntoIter = std::vec::IntoIter<WorkoutExercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.into_iter()
    }
}
