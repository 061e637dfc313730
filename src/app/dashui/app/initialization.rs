//! App construction and the initial contact fetch

use super::{ContactApp, WindowState};
use crate::app::config::AppConfig;
use crate::app::contacts::{ContactBook, ContactController};
use crate::app::dashui::add_contact_dialog::AddContactDialog;
use crate::app::dashui::contact_table::ContactTable;
use crate::app::dashui::icons::IconSet;
use crate::app::notifications::ToastManager;
use crate::app::theme::ThemeRegistry;
use eframe::egui;
use tracing::{info, warn};

pub const WELCOME_MESSAGE: &str = "👋 Welcome: double-click a row to see details";

impl ContactApp {
    /// Create the window from eframe's creation context, seeding the contact
    /// book from the configured file if there is one.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut startup_errors = Vec::new();
        let book = match config.seed_file() {
            Some(path) => ContactBook::from_json_file(&path).unwrap_or_else(|err| {
                warn!("Starting with an empty contact book: {:#}", err);
                startup_errors.push(format!("Could not load contacts: {err}"));
                ContactBook::new()
            }),
            None => ContactBook::new(),
        };

        let mut app = Self::with_controller(Box::new(book), config);
        app.startup_errors = startup_errors;
        app.sync_theme(&cc.egui_ctx);
        app.icons = Some(IconSet::load(&cc.egui_ctx));
        app
    }

    /// Build the window around any controller. Nothing is fetched until the
    /// first frame (or an explicit [`ContactApp::initialize`]).
    pub fn with_controller(controller: Box<dyn ContactController>, config: AppConfig) -> Self {
        Self {
            theme: ThemeRegistry::new(config.theme),
            config,
            controller,
            table: ContactTable::new(),
            toasts: ToastManager::new(),
            state: WindowState::Initializing,
            add_dialog: AddContactDialog::new(),
            icons: None,
            toast_anchor: egui::Pos2::ZERO,
            startup_errors: Vec::new(),
        }
    }

    /// Initializing -> Idle: first fetch plus the welcome toast
    pub fn initialize(&mut self) {
        if self.state != WindowState::Initializing {
            return;
        }
        self.load_contacts();
        self.state = WindowState::Idle;
        info!("Contact window ready with {} contacts", self.table.len());

        for error in std::mem::take(&mut self.startup_errors) {
            self.notify_error(error);
        }
        self.notify_info(WELCOME_MESSAGE);
    }
}
