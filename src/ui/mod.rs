// SPDX-License-Identifier: MPL-2.0
//! Rendering layer for alerts.
//!
//! - [`alert_view`] - Turns `AlertView` descriptors into Iced elements
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod alert_view;
pub mod design_tokens;
pub mod widgets;
