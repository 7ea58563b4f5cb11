// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` is an animated alert widget for applications built with Iced.
//!
//! It keeps a collection of info, success, warning, error and loading alerts,
//! fades and collapses them in and out, and dismisses them after a
//! configurable countdown.

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod alert;
pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod spinner;
pub mod ui;
