//! ContactDesk - a small desktop contact book
//!
//! ContactDesk shows a list of contacts in a themed table and lets the user
//! add and delete entries. Feedback is given through short-lived toast
//! notifications, and the whole window can be switched between a light and a
//! dark palette.
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui-based window, dialogs and custom-drawn controls
//! - **Contacts** ([`app::contacts`]): the controller trait the window talks to
//! - **Theming** ([`app::theme`]): palettes threaded explicitly into every control
//! - **Notifications** ([`app::notifications`]): toasts driven by the frame loop
//!
//! The main entry point is [`ContactApp`].

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::ContactApp;
