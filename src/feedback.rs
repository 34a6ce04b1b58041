// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forest feedback notifications.
//!
//! Fires a toast when a wellness condition first becomes true (rising edge),
//! never while it stays true. Edges are computed against an explicit snapshot
//! of the previous evaluation, and the transition itself is a pure function;
//! the small [`Notifier`] state machine on top only tracks the 5-second
//! display window and manual dismissal.

use chrono::{DateTime, Duration, Utc};

use crate::scene::{EcoActions, DIGITAL_FOG_SCREEN_HOURS};

/// How long a notification stays on screen before auto-dismissal.
pub const DISPLAY_SECONDS: i64 = 5;

/// Health below this is an emergency.
const DANGER_HEALTH: f64 = 0.3;
/// Health above this (and rising) is worth celebrating.
const THRIVING_HEALTH: f64 = 0.8;

/// What triggered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    NewLeaves,
    FlowersBlooming,
    SunlightBoost,
    TiredTrees,
    DigitalFog,
    ForestDanger,
    ForestThriving,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Feedback {
    fn new(kind: FeedbackKind) -> Self {
        let (title, message) = match kind {
            FeedbackKind::NewLeaves => (
                "🌿 New Leaves Growing!",
                "You saved energy today — a new sapling appeared!",
            ),
            FeedbackKind::FlowersBlooming => (
                "🌼 Flowers Blooming!",
                "Eco-friendly travel detected! 🌻 Nature thanks you.",
            ),
            FeedbackKind::SunlightBoost => (
                "🌞 Sunlight Intensified!",
                "Your calm energy revived the forest.",
            ),
            FeedbackKind::TiredTrees => (
                "☁️ Trees Losing Color",
                "Your forest looks tired — take a walk!",
            ),
            FeedbackKind::DigitalFog => (
                "🌫️ Digital Fog Appearing",
                "Digital fatigue is spreading — time to rest?",
            ),
            FeedbackKind::ForestDanger => (
                "🚨 Forest in Danger",
                "Your forest needs urgent care. Log healthy activities!",
            ),
            FeedbackKind::ForestThriving => (
                "✨ Forest Thriving!",
                "Your healthy habits are creating a paradise!",
            ),
        };
        Self {
            kind,
            title,
            message,
        }
    }
}

/// Snapshot of the previous evaluation, used for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlagSnapshot {
    pub lights_off: bool,
    pub eco_travel: bool,
    pub exercise: bool,
    pub long_work: bool,
    pub high_screen_time: bool,
    pub last_health: f64,
}

/// Pure transition: compare current wellness state against the previous
/// snapshot and return the next snapshot plus at most one notification.
/// Priority follows the listing order; the first rising edge wins.
pub fn evaluate(
    prev: &FlagSnapshot,
    eco: &EcoActions,
    screen_time_hours: f64,
    health: f64,
) -> (FlagSnapshot, Option<Feedback>) {
    let high_screen_time = screen_time_hours > DIGITAL_FOG_SCREEN_HOURS;

    let kind = if eco.lights_off && !prev.lights_off {
        Some(FeedbackKind::NewLeaves)
    } else if eco.eco_travel && !prev.eco_travel {
        Some(FeedbackKind::FlowersBlooming)
    } else if eco.exercise && !prev.exercise {
        Some(FeedbackKind::SunlightBoost)
    } else if eco.long_work && !prev.long_work {
        Some(FeedbackKind::TiredTrees)
    } else if high_screen_time && !prev.high_screen_time {
        Some(FeedbackKind::DigitalFog)
    } else if health < DANGER_HEALTH && prev.last_health >= DANGER_HEALTH {
        Some(FeedbackKind::ForestDanger)
    } else if health > THRIVING_HEALTH && health > prev.last_health {
        Some(FeedbackKind::ForestThriving)
    } else {
        None
    };

    let next = FlagSnapshot {
        lights_off: eco.lights_off,
        eco_travel: eco.eco_travel,
        exercise: eco.exercise,
        long_work: eco.long_work,
        high_screen_time,
        last_health: health,
    };

    (next, kind.map(Feedback::new))
}

/// Notifier state: idle, or showing one notification.
#[derive(Debug, Clone, PartialEq)]
enum NotifierState {
    Idle,
    Showing {
        feedback: Feedback,
        shown_at: DateTime<Utc>,
    },
}

/// Tracks the previous-flags snapshot and the display window.
#[derive(Debug, Clone)]
pub struct Notifier {
    prev: FlagSnapshot,
    state: NotifierState,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            prev: FlagSnapshot::default(),
            state: NotifierState::Idle,
        }
    }

    /// Feed the current wellness state. A rising edge replaces whatever is
    /// currently showing.
    pub fn observe(
        &mut self,
        eco: &EcoActions,
        screen_time_hours: f64,
        health: f64,
        now: DateTime<Utc>,
    ) -> Option<&Feedback> {
        let (next, fired) = evaluate(&self.prev, eco, screen_time_hours, health);
        self.prev = next;

        if let Some(feedback) = fired {
            tracing::debug!(kind = ?feedback.kind, "Forest feedback fired");
            self.state = NotifierState::Showing {
                feedback,
                shown_at: now,
            };
        }

        self.current()
    }

    /// Auto-dismiss once the display window elapses.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let NotifierState::Showing { shown_at, .. } = &self.state {
            if now - *shown_at >= Duration::seconds(DISPLAY_SECONDS) {
                self.state = NotifierState::Idle;
            }
        }
    }

    /// Manual dismissal (the toast's close button).
    pub fn dismiss(&mut self) {
        self.state = NotifierState::Idle;
    }

    pub fn current(&self) -> Option<&Feedback> {
        match &self.state {
            NotifierState::Showing { feedback, .. } => Some(feedback),
            NotifierState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_rising_edge_fires_once() {
        let mut notifier = Notifier::new();
        let eco = EcoActions {
            lights_off: true,
            ..Default::default()
        };

        let first = notifier.observe(&eco, 0.0, 0.6, at(0));
        assert_eq!(first.map(|f| f.kind), Some(FeedbackKind::NewLeaves));

        // Held true across later evaluations: no new notification after dismiss
        notifier.dismiss();
        let second = notifier.observe(&eco, 0.0, 0.6, at(1));
        assert!(second.is_none());
    }

    #[test]
    fn test_priority_order() {
        // Everything rises at once; lights_off wins
        let (_, fired) = evaluate(
            &FlagSnapshot {
                last_health: 0.6,
                ..Default::default()
            },
            &EcoActions {
                lights_off: true,
                eco_travel: true,
                exercise: true,
                long_work: true,
            },
            9.0,
            0.6,
        );
        assert_eq!(fired.map(|f| f.kind), Some(FeedbackKind::NewLeaves));
    }

    #[test]
    fn test_screen_time_edge() {
        let mut prev = FlagSnapshot {
            last_health: 0.6,
            ..Default::default()
        };

        let (next, fired) = evaluate(&prev, &EcoActions::default(), 5.0, 0.6);
        assert_eq!(fired.map(|f| f.kind), Some(FeedbackKind::DigitalFog));
        prev = next;

        let (_, fired) = evaluate(&prev, &EcoActions::default(), 6.0, 0.6);
        assert!(fired.is_none());
    }

    #[test]
    fn test_danger_fires_on_crossing_only() {
        let healthy = FlagSnapshot {
            last_health: 0.5,
            ..Default::default()
        };
        let (next, fired) = evaluate(&healthy, &EcoActions::default(), 0.0, 0.2);
        assert_eq!(fired.map(|f| f.kind), Some(FeedbackKind::ForestDanger));

        let (_, fired) = evaluate(&next, &EcoActions::default(), 0.0, 0.15);
        assert!(fired.is_none());
    }

    #[test]
    fn test_thriving_requires_rise() {
        let prev = FlagSnapshot {
            last_health: 0.85,
            ..Default::default()
        };
        let (_, fired) = evaluate(&prev, &EcoActions::default(), 0.0, 0.82);
        assert!(fired.is_none());

        let (_, fired) = evaluate(&prev, &EcoActions::default(), 0.0, 0.9);
        assert_eq!(fired.map(|f| f.kind), Some(FeedbackKind::ForestThriving));
    }

    #[test]
    fn test_auto_dismiss_after_display_window() {
        let mut notifier = Notifier::new();
        let eco = EcoActions {
            exercise: true,
            ..Default::default()
        };

        notifier.observe(&eco, 0.0, 0.6, at(0));
        assert!(notifier.current().is_some());

        notifier.tick(at(4));
        assert!(notifier.current().is_some());

        notifier.tick(at(5));
        assert!(notifier.current().is_none());
    }
}
