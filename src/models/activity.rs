// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    Exercise,
    Meditation,
    Walk,
    Work,
    Sleep,
    EcoAction,
    Phone,
    Sedentary,
}

impl ActivityType {
    /// Wellness activities count toward the balance stat.
    pub fn is_wellness(self) -> bool {
        matches!(
            self,
            ActivityType::Exercise | ActivityType::Meditation | ActivityType::Walk
        )
    }

    /// Display label ("eco-action" renders as "Eco action" etc.).
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Exercise => "Exercise",
            ActivityType::Meditation => "Meditation",
            ActivityType::Walk => "Walk",
            ActivityType::Work => "Work",
            ActivityType::Sleep => "Sleep",
            ActivityType::EcoAction => "Eco action",
            ActivityType::Phone => "Phone",
            ActivityType::Sedentary => "Sedentary",
        }
    }
}

/// A single logged activity. Immutable once created; the store appends it
/// to the log in timestamp order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub activity_type: ActivityType,
    /// Free-text description shown in activity lists
    pub description: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Signed eco impact (positive = good for the forest)
    pub eco_impact: i32,
    /// When the activity happened
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        activity_type: ActivityType,
        description: impl Into<String>,
        duration_minutes: u32,
        eco_impact: i32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            activity_type,
            description: description.into(),
            duration_minutes,
            eco_impact,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_serde_kebab_case() {
        let json = serde_json::to_string(&ActivityType::EcoAction).unwrap();
        assert_eq!(json, "\"eco-action\"");

        let parsed: ActivityType = serde_json::from_str("\"exercise\"").unwrap();
        assert_eq!(parsed, ActivityType::Exercise);
    }

    #[test]
    fn test_wellness_classification() {
        assert!(ActivityType::Exercise.is_wellness());
        assert!(ActivityType::Meditation.is_wellness());
        assert!(ActivityType::Walk.is_wellness());
        assert!(!ActivityType::Work.is_wellness());
        assert!(!ActivityType::Phone.is_wellness());
    }
}
