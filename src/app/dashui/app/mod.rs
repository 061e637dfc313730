//! Main window of the contact book
//!
//! `ContactApp` owns the window state machine and is split into:
//! - initialization: construction and the first contact fetch
//! - theme: theme toggling and context re-styling
//! - event_handling: add/delete/selection handlers that talk to the controller
//! - rendering: header, table panel, dialogs and toasts

use super::add_contact_dialog::AddContactDialog;
use super::contact_table::ContactTable;
use super::icons::IconSet;
use crate::app::config::AppConfig;
use crate::app::contacts::ContactController;
use crate::app::notifications::ToastManager;
use crate::app::theme::ThemeRegistry;
use eframe::egui;
use std::time::Instant;

mod event_handling;
mod initialization;
mod rendering;
mod theme;

/// Where the main window is in its interaction cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowState {
    /// Built, contacts not fetched yet
    Initializing,
    Idle,
    /// The add dialog is open and blocks the window
    AwaitingAddDialog,
    /// Waiting for a yes/no answer before deleting `contact_id`
    ConfirmingDelete { contact_id: String },
}

pub struct ContactApp {
    pub config: AppConfig,
    controller: Box<dyn ContactController>,
    theme: ThemeRegistry,
    table: ContactTable,
    toasts: ToastManager,
    state: WindowState,
    add_dialog: AddContactDialog,
    icons: Option<IconSet>,
    /// Bottom-right corner of the window as of the last frame
    toast_anchor: egui::Pos2,
    /// Problems found before the window existed, reported once it does
    startup_errors: Vec<String>,
}

impl ContactApp {
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ContactTable {
        &mut self.table
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn theme(&self) -> &ThemeRegistry {
        &self.theme
    }

    pub fn add_dialog(&self) -> &AddContactDialog {
        &self.add_dialog
    }

    pub fn add_dialog_mut(&mut self) -> &mut AddContactDialog {
        &mut self.add_dialog
    }
}

impl ContactApp {
    /// Run one frame of the window against `ctx`
    pub fn show(&mut self, ctx: &egui::Context) {
        let frame_start = Instant::now();

        self.toast_anchor = ctx.screen_rect().right_bottom();
        if self.state == WindowState::Initializing {
            self.initialize();
        }

        self.sync_theme(ctx);
        if self.icons.is_none() {
            self.icons = Some(IconSet::load(ctx));
        }

        self.toasts.tick(frame_start);

        self.render_build_info(ctx);
        self.render_central_panel(ctx);
        self.render_dialogs(ctx);
        self.render_toasts(ctx, frame_start);

        let frame_duration = frame_start.elapsed();
        if frame_duration.as_millis() > 16 {
            log::warn!("Slow frame: {:?} (target: 16ms for 60fps)", frame_duration);
        }
    }
}

impl eframe::App for ContactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
