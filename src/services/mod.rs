// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and the upload/poll flow.

pub mod gait;
mod http;
pub mod upload;
pub mod wellness;

pub use gait::GaitClient;
pub use upload::{cancel_pair, CancelHandle, CancelToken, PollOutcome, UploadCoordinator, UploadForm};
pub use wellness::WellnessClient;
