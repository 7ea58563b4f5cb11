// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Tick**: Countdown timer resolution
//! - **Lifetime**: Default auto-dismiss delays per alert kind
//! - **Animation**: Entry/exit tween targets and speeds

use std::time::Duration;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default interval between countdown ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Interval between spinner animation steps for loading alerts.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(16);

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// How long success and info alerts stay visible.
pub const SHORT_LIFETIME: Duration = Duration::from_secs(3);

/// How long warnings stay visible.
pub const LONG_LIFETIME: Duration = Duration::from_secs(5);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Fully visible opacity.
pub const OPACITY_VISIBLE: f32 = 1.0;

/// Opacity change per second.
pub const OPACITY_SPEED: f32 = 2.0;

/// Height of a fully expanded alert (logical pixels).
pub const HEIGHT_VISIBLE: f32 = 50.0;

/// Height change per second.
pub const HEIGHT_SPEED: f32 = 100.0;

/// Inner padding of a fully expanded alert (logical pixels).
pub const PADDING_VISIBLE: f32 = 15.0;

/// Padding change per second.
pub const PADDING_SPEED: f32 = 30.0;

/// Number of exit acknowledgements required before an alert is purged.
pub const EXIT_ACKS_REQUIRED: u8 = 2;
