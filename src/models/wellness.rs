// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Server-supplied wellness snapshot.
//!
//! The server owns the authoritative forest health score; the client only
//! reads these aggregates. Every field defaults so the client tolerates a
//! server that omits what it has not computed yet.

use serde::{Deserialize, Serialize};

/// Wellness aggregate for one user's forest, as returned by
/// `GET /wellness/forest` (and element-wise by `GET /wellness/forests`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessSnapshot {
    /// Owner, present in the admin list response
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,

    /// Authoritative health score, 0-100
    #[serde(default)]
    pub forest_health_score: f64,

    // ─── Tree Counts ─────────────────────────────────────────────
    #[serde(default)]
    pub total_trees: u32,
    #[serde(default)]
    pub healthy_trees: u32,
    #[serde(default)]
    pub growing_trees: u32,
    #[serde(default)]
    pub wilting_trees: u32,
    #[serde(default)]
    pub dead_trees: u32,

    // ─── Environmental Levels (percent) ──────────────────────────
    #[serde(default)]
    pub sunlight_level: u32,
    #[serde(default)]
    pub water_level: u32,
    #[serde(default)]
    pub soil_quality: u32,
    #[serde(default)]
    pub air_quality: u32,

    // ─── Feature Unlocks ─────────────────────────────────────────
    #[serde(default)]
    pub has_flowers: bool,
    #[serde(default)]
    pub has_birds: bool,
    #[serde(default)]
    pub has_butterflies: bool,
    #[serde(default)]
    pub has_stream: bool,
    #[serde(default)]
    pub has_bench: bool,
    #[serde(default)]
    pub has_rocks: bool,

    // ─── Atmosphere ──────────────────────────────────────────────
    /// Week-over-week growth percentage, may be negative
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
}

impl WellnessSnapshot {
    /// Health normalized to [0, 1] for the scene deriver.
    pub fn normalized_health(&self) -> f64 {
        (self.forest_health_score / 100.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_snapshot_deserializes_with_defaults() {
        let snapshot: WellnessSnapshot =
            serde_json::from_str(r#"{"forest_health_score": 72.5, "healthy_trees": 18}"#).unwrap();

        assert_eq!(snapshot.forest_health_score, 72.5);
        assert_eq!(snapshot.healthy_trees, 18);
        assert_eq!(snapshot.total_trees, 0);
        assert!(!snapshot.has_flowers);
        assert!(snapshot.season.is_none());
    }

    #[test]
    fn test_normalized_health_clamps() {
        let mut snapshot: WellnessSnapshot = serde_json::from_str("{}").unwrap();
        snapshot.forest_health_score = 130.0;
        assert_eq!(snapshot.normalized_health(), 1.0);

        snapshot.forest_health_score = -5.0;
        assert_eq!(snapshot.normalized_health(), 0.0);

        snapshot.forest_health_score = 50.0;
        assert_eq!(snapshot.normalized_health(), 0.5);
    }
}
