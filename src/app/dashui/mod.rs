//! Desktop user interface for the contact book.
//!
//! # Components
//!
//! - [`app::ContactApp`] - main window and its state machine
//! - [`contact_table::ContactTable`] - zebra-striped, single-selection contact table
//! - [`add_contact_dialog::AddContactDialog`] and [`confirm_dialog::ConfirmDialog`] - modal dialogs
//! - [`rounded_button::RoundedButton`], [`shadow_panel::ShadowPanel`],
//!   [`rounded_border::RoundedBorder`] - custom-drawn controls
//! - [`icons::ButtonIcon`] - bitmap icons with a glyph fallback
//!
//! Every control takes the active [`crate::app::theme::Palette`] as an
//! argument instead of reading global style state.

pub mod add_contact_dialog;
pub mod app;
pub mod confirm_dialog;
pub mod contact_table;
pub mod icons;
pub mod rounded_border;
pub mod rounded_button;
pub mod shadow_panel;

pub use add_contact_dialog::{AddContactDialog, DialogOutcome};
pub use app::{ContactApp, WindowState};
pub use confirm_dialog::ConfirmDialog;
pub use contact_table::{row_colors, ContactRow, ContactTable, RowColors, TableEvent};
pub use icons::{ButtonIcon, IconSet};
pub use rounded_border::RoundedBorder;
pub use rounded_button::RoundedButton;
pub use shadow_panel::ShadowPanel;
