// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wellness-Forest: Grow a virtual forest from daily wellness habits
//!
//! This crate derives the 3D forest scene, feedback notifications, and
//! activity analytics from logged wellness data, and talks to the wellness
//! and gait APIs.

pub mod analytics;
pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod scene;
pub mod services;
pub mod store;
pub mod view;

use config::Config;
use services::{GaitClient, WellnessClient};
use store::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub wellness: WellnessClient,
    pub gait: GaitClient,
    pub store: Store,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let wellness = WellnessClient::new(&config.api_base_url);
        let gait = GaitClient::new(&config.api_base_url);
        let store = Store::new(config.max_eco_score);
        Self {
            config,
            wellness,
            gait,
            store,
        }
    }
}
