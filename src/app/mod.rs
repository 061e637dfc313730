//! Core application modules for ContactDesk.
//!
//! # Module Organization
//!
//! - [`contacts`] - contact records, the controller trait and the in-memory book
//! - [`theme`] - light/dark palettes and the theme registry
//! - [`notifications`] - toast notifications and their fade animation
//! - [`config`] - `config.toml` loading
//! - [`dashui`] - the main window, its dialogs and custom-drawn controls
//!
//! # Architecture
//!
//! [`dashui::app::ContactApp`] owns one [`contacts::ContactController`] and
//! drives everything else. Styled controls receive the active
//! [`theme::Palette`] explicitly when rendered.

pub mod config;
pub mod contacts;
pub mod dashui;
pub mod notifications;
pub mod theme;

pub use dashui::app::ContactApp;
