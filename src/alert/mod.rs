// SPDX-License-Identifier: MPL-2.0
//! Animated alert collection.
//!
//! This module keeps a list of transient or persistent alerts, animates them
//! in and out, and dismisses them once their countdown runs out.
//!
//! # Components
//!
//! - [`model`] - `Alert`, `AlertKind`, `AlertKey` and `Countdown`
//! - [`store`] - `AlertStore` holding alerts and their animation state
//! - [`controller`] - `Manager` applying lifecycle transitions
//! - [`projection`] - Pure mapping from the store to `AlertView`s
//!
//! # Usage
//!
//! ```
//! use iced_alerts::alert::{Alert, AlertMessage, Countdown, Manager};
//! use iced_alerts::config::TickInterval;
//!
//! let mut manager = Manager::new(false, TickInterval::default());
//! manager.handle_message(AlertMessage::AddAlert(
//!     Alert::error("Disk full").with_countdown(Countdown::Ticks(2)),
//! ));
//!
//! manager.handle_message(AlertMessage::Tick);
//! manager.handle_message(AlertMessage::Tick);
//! assert!(!manager.has_alerts());
//! ```
//!
//! With animations enabled, the host routes every [`Effect`] back through
//! its own message queue with [`Effect::into_message`], so the exit
//! acknowledgements reach the manager as separate steps.

pub mod controller;
pub mod model;
pub mod projection;
pub mod store;

pub use controller::{Effect, Manager, Message as AlertMessage, Phase};
pub use model::{Alert, AlertKey, AlertKind, Countdown};
pub use projection::{AlertView, AnimatedStyle};
pub use store::AlertStore;
