// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure aggregations over the activity log.
//!
//! Everything here is O(n) over the log; data volumes are client-local and
//! single-user, so no incremental maintenance is needed.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike, Utc};

use crate::models::{Activity, ActivityType, ScoreHistoryEntry};

/// Length of the trend comparison windows.
const TREND_WINDOW_DAYS: i64 = 7;

/// Percent change in activity count between the trailing 7-day window and
/// the 7 days before it. Returns 0 when the preceding window is empty.
pub fn weekly_trend(activities: &[Activity], now: DateTime<Utc>) -> i32 {
    let week_ago = now - Duration::days(TREND_WINDOW_DAYS);
    let two_weeks_ago = now - Duration::days(2 * TREND_WINDOW_DAYS);

    let current = activities
        .iter()
        .filter(|a| a.timestamp > week_ago && a.timestamp <= now)
        .count() as f64;
    let previous = activities
        .iter()
        .filter(|a| a.timestamp > two_weeks_ago && a.timestamp <= week_ago)
        .count() as f64;

    if previous == 0.0 {
        return 0;
    }

    (((current - previous) / previous) * 100.0).round() as i32
}

/// Count of activities in the trailing 7-day window.
pub fn weekly_count(activities: &[Activity], now: DateTime<Utc>) -> usize {
    let week_ago = now - Duration::days(TREND_WINDOW_DAYS);
    activities
        .iter()
        .filter(|a| a.timestamp > week_ago && a.timestamp <= now)
        .count()
}

/// Consecutive calendar days with at least one activity, counting back from
/// `today`. A streak that ended yesterday is still alive (today just has no
/// entry yet); a streak broken before yesterday reads 0.
pub fn current_streak(activities: &[Activity], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = activities
        .iter()
        .map(|a| a.timestamp.date_naive())
        .collect();

    let start = if days.contains(&today) {
        today
    } else if days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = start;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Activity counts bucketed by local hour of day.
pub fn hourly_histogram(activities: &[Activity], offset: FixedOffset) -> [u32; 24] {
    let mut hours = [0u32; 24];
    for activity in activities {
        let hour = activity.timestamp.with_timezone(&offset).hour() as usize;
        hours[hour] += 1;
    }
    hours
}

/// Activity counts bucketed by type.
pub fn type_breakdown(activities: &[Activity]) -> BTreeMap<ActivityType, u32> {
    let mut counts = BTreeMap::new();
    for activity in activities {
        *counts.entry(activity.activity_type).or_insert(0) += 1;
    }
    counts
}

/// Total hours logged, rounded to the nearest hour.
pub fn total_hours(activities: &[Activity]) -> u32 {
    let minutes: u64 = activities.iter().map(|a| a.duration_minutes as u64).sum();
    ((minutes as f64) / 60.0).round() as u32
}

/// Sum of positive eco impacts ("energy saved").
pub fn positive_impact(activities: &[Activity]) -> i64 {
    activities
        .iter()
        .filter(|a| a.eco_impact > 0)
        .map(|a| a.eco_impact as i64)
        .sum()
}

/// Number of wellness activities (exercise, meditation, walk).
pub fn wellness_count(activities: &[Activity]) -> usize {
    activities
        .iter()
        .filter(|a| a.activity_type.is_wellness())
        .count()
}

/// Chart-ready series: average score per day for the last 7 days, oldest
/// first. Days with no snapshots read 0.
pub fn score_series(history: &[ScoreHistoryEntry], today: NaiveDate) -> Vec<(NaiveDate, u32)> {
    (0..TREND_WINDOW_DAYS)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let snapshots: Vec<u32> = history
                .iter()
                .filter(|entry| entry.date == day)
                .map(|entry| entry.score)
                .collect();
            let avg = if snapshots.is_empty() {
                0
            } else {
                let sum: u64 = snapshots.iter().map(|&s| s as u64).sum();
                ((sum as f64) / (snapshots.len() as f64)).round() as u32
            };
            (day, avg)
        })
        .collect()
}

/// The most recent `n` activities, newest first.
pub fn recent<'a>(activities: &'a [Activity], n: usize) -> Vec<&'a Activity> {
    activities.iter().rev().take(n).collect()
}
