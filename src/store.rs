// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client state container.
//!
//! Holds the activity log, eco score, score history, and badges, and exposes
//! reducer-style mutations. State mutation happens only on the UI thread, so
//! no interior locking is needed. The forest health computed here is only a
//! local approximation for the unauthenticated/offline view; the server's
//! wellness snapshot is authoritative when available.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::models::{Activity, ActivityType, Badge, ScoreHistoryEntry};
use crate::scene::EcoActions;

/// How many trailing activities feed the eco-action flags.
const RECENT_ACTIVITY_WINDOW: usize = 10;

/// A work block longer than this (minutes) counts as long work.
const LONG_WORK_MINUTES: u32 = 240;

/// Score at or above this earns the thriving badge.
const THRIVING_SCORE: u32 = 80;

/// Client-side state store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub eco_score: u32,
    pub max_eco_score: u32,
    pub activities: Vec<Activity>,
    pub score_history: Vec<ScoreHistoryEntry>,
    pub badges: Vec<Badge>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Store {
    pub fn new(max_eco_score: u32) -> Self {
        Self {
            eco_score: 0,
            max_eco_score,
            activities: Vec::new(),
            score_history: Vec::new(),
            badges: Vec::new(),
        }
    }

    /// Append an activity, keeping the log ordered by timestamp, then
    /// recompute the score, snapshot it, and award any new badges.
    pub fn add_activity(&mut self, activity: Activity) {
        let insert_at = self
            .activities
            .partition_point(|a| a.timestamp <= activity.timestamp);
        let snapshot_date = activity.timestamp.date_naive();
        self.activities.insert(insert_at, activity);

        self.recompute_score();
        self.score_history.push(ScoreHistoryEntry {
            date: snapshot_date,
            score: self.eco_score,
        });
        self.award_badges(snapshot_date);
    }

    /// Recompute the eco score from the log: sum of signed impacts, clamped
    /// to [0, max].
    pub fn recompute_score(&mut self) {
        let total: i64 = self.activities.iter().map(|a| a.eco_impact as i64).sum();
        self.eco_score = total.clamp(0, self.max_eco_score as i64) as u32;
    }

    /// Local forest-health approximation in [0, 1].
    pub fn forest_health(&self) -> f64 {
        if self.max_eco_score == 0 {
            return 0.0;
        }
        (self.eco_score as f64 / self.max_eco_score as f64).clamp(0.0, 1.0)
    }

    /// Award a badge unless one with the same id exists.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        if self.badges.iter().any(|b| b.id == badge.id) {
            return false;
        }
        tracing::info!(badge = %badge.id, "Badge earned");
        self.badges.push(badge);
        true
    }

    fn award_badges(&mut self, today: chrono::NaiveDate) {
        let earned = self
            .activities
            .last()
            .map(|a| a.timestamp)
            .unwrap_or_else(Utc::now);

        if !self.activities.is_empty() {
            self.award_badge(Badge::new(
                "first-activity",
                "Sprout 🌱",
                "Logged your first activity",
                earned,
            ));
        }

        let streak = analytics::current_streak(&self.activities, today);
        if streak >= 3 {
            self.award_badge(Badge::new(
                "streak-3",
                "Kindling 🔥",
                "Three days of activity in a row",
                earned,
            ));
        }
        if streak >= 7 {
            self.award_badge(Badge::new(
                "streak-7",
                "Evergreen 🏆",
                "A full week of daily activity",
                earned,
            ));
        }

        if self.eco_score >= THRIVING_SCORE {
            self.award_badge(Badge::new(
                "thriving",
                "Radiant 🌟",
                "Eco score reached 80",
                earned,
            ));
        }
    }

    /// Derive the eco-action flags from the last 10 activities.
    pub fn eco_actions(&self) -> EcoActions {
        let start = self.activities.len().saturating_sub(RECENT_ACTIVITY_WINDOW);
        let recent = &self.activities[start..];

        EcoActions {
            lights_off: recent.iter().any(|a| {
                a.activity_type == ActivityType::EcoAction
                    && a.description.to_lowercase().contains("light")
            }),
            exercise: recent.iter().any(|a| {
                matches!(
                    a.activity_type,
                    ActivityType::Exercise | ActivityType::Meditation
                )
            }),
            eco_travel: recent.iter().any(|a| {
                a.activity_type == ActivityType::Walk
                    || (a.activity_type == ActivityType::EcoAction
                        && a.description.to_lowercase().contains("travel"))
            }),
            long_work: recent.iter().any(|a| {
                a.activity_type == ActivityType::Work && a.duration_minutes > LONG_WORK_MINUTES
            }),
        }
    }

    /// Today's screen time in hours: phone minutes plus half of work and
    /// sedentary minutes.
    pub fn screen_time_hours(&self, now: DateTime<Utc>) -> f64 {
        let today = now.date_naive();
        let mut phone_minutes = 0u64;
        let mut desk_minutes = 0u64;

        for activity in &self.activities {
            if activity.timestamp.date_naive() != today {
                continue;
            }
            match activity.activity_type {
                ActivityType::Phone => phone_minutes += activity.duration_minutes as u64,
                ActivityType::Work | ActivityType::Sedentary => {
                    desk_minutes += activity.duration_minutes as u64
                }
                _ => {}
            }
        }

        (phone_minutes as f64 + desk_minutes as f64 * 0.5) / 60.0
    }
}

/// Convenience for tests and the offline view: an activity `hours_ago`.
pub fn activity_at(
    activity_type: ActivityType,
    description: &str,
    duration_minutes: u32,
    eco_impact: i32,
    now: DateTime<Utc>,
    hours_ago: i64,
) -> Activity {
    Activity::new(
        activity_type,
        description,
        duration_minutes,
        eco_impact,
        now - Duration::hours(hours_ago),
    )
}
