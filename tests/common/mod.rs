// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, TimeZone, Utc};
use wellness_forest::models::{Activity, ActivityType};

/// Fixed reference time so date math in tests is reproducible.
#[allow(dead_code)]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// A walk logged `days_ago` whole days before the reference time.
#[allow(dead_code)]
pub fn walk_days_ago(days_ago: i64, now: DateTime<Utc>) -> Activity {
    Activity::new(
        ActivityType::Walk,
        "evening walk",
        30,
        5,
        now - Duration::days(days_ago),
    )
}

/// An arbitrary activity `hours_ago` before the reference time.
#[allow(dead_code)]
pub fn logged(
    activity_type: ActivityType,
    description: &str,
    duration_minutes: u32,
    eco_impact: i32,
    hours_ago: i64,
    now: DateTime<Utc>,
) -> Activity {
    Activity::new(
        activity_type,
        description,
        duration_minutes,
        eco_impact,
        now - Duration::hours(hours_ago),
    )
}
