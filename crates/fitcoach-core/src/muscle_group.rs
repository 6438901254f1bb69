// Muscle group catalogue
//
// The canonical anatomical regions the coach knows about. Requests may carry
// any free-text label; labels outside this list are tracked as-is and never
// rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical muscle groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    Abs,
    Glutes,
    Calves,
}

impl MuscleGroup {
    /// All groups in catalogue order
    pub const ALL: [MuscleGroup; 10] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Legs,
        MuscleGroup::Core,
        MuscleGroup::Abs,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
        }
    }

    /// Whether a free-text label names a canonical group (case-insensitive)
    pub fn is_canonical(label: &str) -> bool {
        label.parse::<MuscleGroup>().is_ok()
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the canonical groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMuscleGroup(pub String);

impl fmt::Display for UnknownMuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown muscle group: {}", self.0)
    }
}

impl std::error::Error for UnknownMuscleGroup {}

impl FromStr for MuscleGroup {
    type Err = UnknownMuscleGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MuscleGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| UnknownMuscleGroup(s.to_string()))
    }
}
