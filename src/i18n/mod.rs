// SPDX-License-Identifier: MPL-2.0
//! Localization of the demo application's texts.
//!
//! Translations are `.ftl` files embedded at build time and formatted with
//! Fluent. The locale comes from the command line, then the config file, then
//! the operating system, and falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
