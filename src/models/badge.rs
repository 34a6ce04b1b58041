// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Achievement badge model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An earned achievement badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Stable identifier used for deduplication
    pub id: String,
    /// Display name, "Title <emoji>" format
    pub name: String,
    pub description: String,
    /// When the badge was earned
    pub earned: DateTime<Utc>,
}

impl Badge {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        earned: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            earned,
        }
    }
}
