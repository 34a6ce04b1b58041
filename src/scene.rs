// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forest scene parameter derivation.
//!
//! The render layer owns the 3D scene graph; this module owns the mapping
//! from wellness state to rendering parameters. `derive_scene` is pure:
//! identical inputs always produce identical outputs, and nothing here
//! feeds back into the inputs within a frame.

use serde::Serialize;

/// Screen time above this many hours pulls digital fog into the scene.
pub const DIGITAL_FOG_SCREEN_HOURS: f64 = 4.0;

/// How much effective tree health drops under long work, and its floor.
const TIRED_TREE_PENALTY: f64 = 0.2;
const TIRED_TREE_FLOOR: f64 = 0.2;

/// Time of day selecting the base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
    Evening,
}

/// Recent-activity flags that modulate the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EcoActions {
    /// Energy saved (lights off): new leaves sprout
    pub lights_off: bool,
    /// Exercise or meditation: sunlight boost
    pub exercise: bool,
    /// Walking / eco-friendly travel: flowers bloom
    pub eco_travel: bool,
    /// A long uninterrupted work block: trees tire
    pub long_work: bool,
}

/// Deterministic rendering parameters consumed by the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneParams {
    pub ambient_color: &'static str,
    pub directional_color: &'static str,
    pub light_intensity: f64,
    pub fog_color: &'static str,
    pub fog_density: f64,
    /// Effective per-tree health in [0, 1], after the tired-tree penalty
    pub tree_health: f64,
    pub flowers_enabled: bool,
    pub new_leaves_enabled: bool,
    /// Firefly/sparkle particle count; 0 when the forest is unhealthy
    pub particle_count: u32,
}

/// Map wellness state to scene parameters.
///
/// Threshold table (higher-priority condition wins when combined):
/// - exercise boosts light intensity by 1.3x
/// - screen time over 4 h raises the fog density base from 0.02 to 0.12
/// - long work adds 0.05 fog and drops tree health by 0.2 (floored at 0.2)
/// - the per-time-of-day palette is fixed configuration data
pub fn derive_scene(
    health: f64,
    time_of_day: TimeOfDay,
    eco_actions: EcoActions,
    screen_time_hours: f64,
) -> SceneParams {
    let health = health.clamp(0.0, 1.0);
    let digital_fog = screen_time_hours > DIGITAL_FOG_SCREEN_HOURS;

    let base_intensity = if eco_actions.exercise { 1.3 } else { 1.0 };

    let mut fog_base = if digital_fog { 0.12 } else { 0.02 };
    if eco_actions.long_work {
        fog_base += 0.05;
    }

    let (ambient_color, directional_color, light_intensity, fog_color, fog_density) =
        match time_of_day {
            TimeOfDay::Night => (
                "#1a2744",
                "#4a5f8f",
                0.3 * base_intensity,
                if digital_fog { "#2a3a4a" } else { "#0B132B" },
                0.1 + if digital_fog { 0.05 } else { 0.0 },
            ),
            TimeOfDay::Evening => (
                "#ff9a56",
                "#ffa856",
                0.6 * base_intensity,
                if digital_fog { "#9a7a66" } else { "#ff9a56" },
                0.05 + fog_base,
            ),
            TimeOfDay::Day => (
                if eco_actions.exercise {
                    "#fffacd"
                } else {
                    "#ffffff"
                },
                if eco_actions.exercise {
                    "#FFD700"
                } else {
                    "#FFE156"
                },
                base_intensity,
                if digital_fog {
                    "#8a9ba8"
                } else if eco_actions.long_work {
                    "#b0b8b0"
                } else if health < 0.4 {
                    "#c0c8c0"
                } else {
                    "#A7E8BD"
                },
                fog_base + if health < 0.4 { 0.06 } else { 0.0 },
            ),
        };

    let tree_health = if eco_actions.long_work {
        (health - TIRED_TREE_PENALTY).max(TIRED_TREE_FLOOR)
    } else {
        health
    };

    let particle_count = if health > 0.5 {
        if eco_actions.exercise {
            50
        } else {
            30
        }
    } else {
        0
    };

    SceneParams {
        ambient_color,
        directional_color,
        light_intensity,
        fog_color,
        fog_density,
        tree_health,
        flowers_enabled: eco_actions.eco_travel,
        new_leaves_enabled: eco_actions.lights_off,
        particle_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> Vec<EcoActions> {
        let mut flags = Vec::new();
        for bits in 0u8..16 {
            flags.push(EcoActions {
                lights_off: bits & 1 != 0,
                exercise: bits & 2 != 0,
                eco_travel: bits & 4 != 0,
                long_work: bits & 8 != 0,
            });
        }
        flags
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for time in [TimeOfDay::Day, TimeOfDay::Night, TimeOfDay::Evening] {
            for eco in all_flags() {
                for health in [0.0, 0.15, 0.4, 0.55, 0.8, 1.0] {
                    for screen in [0.0, 4.0, 4.5, 9.0] {
                        let a = derive_scene(health, time, eco, screen);
                        let b = derive_scene(health, time, eco, screen);
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_exercise_boosts_intensity() {
        let base = derive_scene(0.7, TimeOfDay::Day, EcoActions::default(), 0.0);
        let boosted = derive_scene(
            0.7,
            TimeOfDay::Day,
            EcoActions {
                exercise: true,
                ..Default::default()
            },
            0.0,
        );
        assert_eq!(base.light_intensity, 1.0);
        assert_eq!(boosted.light_intensity, 1.3);
        assert_eq!(boosted.ambient_color, "#fffacd");
        assert_eq!(boosted.directional_color, "#FFD700");
    }

    #[test]
    fn test_digital_fog_threshold_is_exclusive() {
        let at = derive_scene(0.9, TimeOfDay::Day, EcoActions::default(), 4.0);
        let over = derive_scene(0.9, TimeOfDay::Day, EcoActions::default(), 4.1);
        assert_eq!(at.fog_density, 0.02);
        assert_eq!(over.fog_density, 0.12);
        assert_eq!(over.fog_color, "#8a9ba8");
    }

    #[test]
    fn test_long_work_adds_fog_and_tires_trees() {
        let eco = EcoActions {
            long_work: true,
            ..Default::default()
        };
        let params = derive_scene(0.9, TimeOfDay::Day, eco, 0.0);
        assert!((params.fog_density - 0.07).abs() < 1e-9);
        assert_eq!(params.fog_color, "#b0b8b0");
        assert!((params.tree_health - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_tree_health_floor() {
        let eco = EcoActions {
            long_work: true,
            ..Default::default()
        };
        for health in [0.0, 0.1, 0.2, 0.3, 0.35] {
            let params = derive_scene(health, TimeOfDay::Day, eco, 0.0);
            assert!(params.tree_health >= TIRED_TREE_FLOOR);
        }
        // Above the floor the full penalty applies
        let params = derive_scene(1.0, TimeOfDay::Day, eco, 0.0);
        assert!((params.tree_health - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_digital_fog_wins_over_long_work_fog_color() {
        let eco = EcoActions {
            long_work: true,
            ..Default::default()
        };
        let params = derive_scene(0.9, TimeOfDay::Day, eco, 6.0);
        assert_eq!(params.fog_color, "#8a9ba8");
        // Both contributions stack in the density
        assert!((params.fog_density - 0.17).abs() < 1e-9);
    }

    #[test]
    fn test_low_health_day_fog() {
        let params = derive_scene(0.3, TimeOfDay::Day, EcoActions::default(), 0.0);
        assert_eq!(params.fog_color, "#c0c8c0");
        assert!((params.fog_density - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_night_palette_ignores_health_fog() {
        let params = derive_scene(0.2, TimeOfDay::Night, EcoActions::default(), 0.0);
        assert_eq!(params.ambient_color, "#1a2744");
        assert_eq!(params.fog_color, "#0B132B");
        assert!((params.fog_density - 0.1).abs() < 1e-9);
        assert!((params.light_intensity - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_evening_fog_stacks_base() {
        let eco = EcoActions {
            long_work: true,
            ..Default::default()
        };
        let params = derive_scene(0.9, TimeOfDay::Evening, eco, 5.0);
        // 0.05 evening base + 0.12 digital + 0.05 long work
        assert!((params.fog_density - 0.22).abs() < 1e-9);
        assert_eq!(params.fog_color, "#9a7a66");
    }

    #[test]
    fn test_flora_flags_pass_through() {
        let eco = EcoActions {
            lights_off: true,
            eco_travel: true,
            ..Default::default()
        };
        let params = derive_scene(0.6, TimeOfDay::Day, eco, 0.0);
        assert!(params.flowers_enabled);
        assert!(params.new_leaves_enabled);
    }

    #[test]
    fn test_particles_require_healthy_forest() {
        assert_eq!(
            derive_scene(0.5, TimeOfDay::Day, EcoActions::default(), 0.0).particle_count,
            0
        );
        assert_eq!(
            derive_scene(0.6, TimeOfDay::Day, EcoActions::default(), 0.0).particle_count,
            30
        );
        let eco = EcoActions {
            exercise: true,
            ..Default::default()
        };
        assert_eq!(derive_scene(0.6, TimeOfDay::Day, eco, 0.0).particle_count, 50);
    }

    #[test]
    fn test_out_of_range_health_is_clamped() {
        let high = derive_scene(1.5, TimeOfDay::Day, EcoActions::default(), 0.0);
        assert_eq!(high.tree_health, 1.0);

        let low = derive_scene(-0.5, TimeOfDay::Day, EcoActions::default(), 0.0);
        assert_eq!(low.tree_health, 0.0);
    }
}
