// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wellness-Forest CLI
//!
//! Loads the local activity store, pulls the wellness snapshot when an auth
//! token is configured, and prints the derived forest scene parameters.

use chrono::{Timelike, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_forest::{
    config::Config,
    feedback::Notifier,
    scene::{self, TimeOfDay},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_base_url, "Starting Wellness-Forest");

    let state = AppState::new(config);
    let now = Utc::now();

    // Server snapshot is authoritative when a token is configured; otherwise
    // fall back to the local approximation from the activity log.
    let health = match state.config.auth_token.as_deref() {
        Some(token) => match state.wellness.get_forest(token).await {
            Ok(snapshot) => {
                tracing::info!(
                    score = snapshot.forest_health_score,
                    trees = snapshot.total_trees,
                    "Wellness snapshot fetched"
                );
                snapshot.normalized_health()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot fetch failed, using local score");
                state.store.forest_health()
            }
        },
        None => {
            tracing::info!("No auth token configured, using local score");
            state.store.forest_health()
        }
    };

    let eco = state.store.eco_actions();
    let screen_time = state.store.screen_time_hours(now);
    let time_of_day = time_of_day(now.hour());

    let params = scene::derive_scene(health, time_of_day, eco, screen_time);
    tracing::info!(
        ambient = params.ambient_color,
        intensity = params.light_intensity,
        fog = params.fog_color,
        fog_density = params.fog_density,
        tree_health = params.tree_health,
        particles = params.particle_count,
        "Scene derived"
    );

    let mut notifier = Notifier::new();
    if let Some(feedback) = notifier.observe(&eco, screen_time, health, now) {
        tracing::info!(title = feedback.title, message = feedback.message, "Forest feedback");
    }

    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

/// Map the hour of day onto a scene palette.
fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        6..=16 => TimeOfDay::Day,
        17..=19 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellness_forest=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
