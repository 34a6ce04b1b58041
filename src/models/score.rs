// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco score history snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One score snapshot, recorded whenever the store recomputes the score.
/// The analytics layer averages snapshots per day for the 7-day chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    pub date: NaiveDate,
    pub score: u32,
}
