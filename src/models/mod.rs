// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod badge;
pub mod gait;
pub mod score;
pub mod wellness;

pub use activity::{Activity, ActivityType};
pub use badge::Badge;
pub use gait::{GaitProfile, MessageResponse, ProfileState, ProfileStatus};
pub use score::ScoreHistoryEntry;
pub use wellness::WellnessSnapshot;
