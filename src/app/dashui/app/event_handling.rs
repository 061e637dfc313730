//! Handlers for the window's actions. Each one calls into the contact
//! controller, refreshes the table from a fresh `list`, and reports the result
//! with a toast.

use super::{ContactApp, WindowState};
use crate::app::dashui::add_contact_dialog::DialogOutcome;
use crate::app::dashui::contact_table::TableEvent;
use std::time::Instant;
use tracing::{debug, info, warn};

impl ContactApp {
    pub(super) fn notify_info(&mut self, message: impl Into<String>) {
        self.toasts.info(message, self.toast_anchor, Instant::now());
    }

    pub(super) fn notify_success(&mut self, message: impl Into<String>) {
        self.toasts.success(message, self.toast_anchor, Instant::now());
    }

    pub(super) fn notify_error(&mut self, message: impl Into<String>) {
        self.toasts.error(message, self.toast_anchor, Instant::now());
    }

    /// Replace the table with whatever the controller lists now. On failure
    /// the previous rows stay and an error toast is shown.
    pub fn load_contacts(&mut self) -> bool {
        match self.controller.list() {
            Ok(contacts) => {
                self.table.refresh(&contacts);
                true
            }
            Err(err) => {
                warn!("Listing contacts failed: {:#}", err);
                self.notify_error(format!("Could not load contacts: {err}"));
                false
            }
        }
    }

    /// Idle -> AwaitingAddDialog
    pub fn request_add(&mut self) {
        if self.state != WindowState::Idle {
            debug!("Ignoring add request in state {:?}", self.state);
            return;
        }
        self.add_dialog.open();
        self.state = WindowState::AwaitingAddDialog;
        info!("Add contact dialog opened");
    }

    /// AwaitingAddDialog -> Idle once the dialog has an outcome
    pub fn finish_add(&mut self, outcome: DialogOutcome) {
        if self.state != WindowState::AwaitingAddDialog || outcome == DialogOutcome::Pending {
            return;
        }
        self.state = WindowState::Idle;

        match outcome {
            DialogOutcome::Saved(contact) => {
                info!("Contact {} added", contact.id);
                if self.load_contacts() {
                    self.notify_success("Contact added");
                }
            }
            DialogOutcome::Cancelled => debug!("Add contact dialog cancelled"),
            DialogOutcome::Pending => {}
        }
    }

    /// Idle -> ConfirmingDelete when a row is selected; otherwise an error
    /// toast and no state change.
    pub fn request_delete(&mut self) {
        if self.state != WindowState::Idle {
            debug!("Ignoring delete request in state {:?}", self.state);
            return;
        }
        match self.table.selected_id() {
            Some(id) => {
                let contact_id = id.to_string();
                info!("Confirming deletion of contact {}", contact_id);
                self.state = WindowState::ConfirmingDelete { contact_id };
            }
            None => self.notify_error("Select a contact to delete"),
        }
    }

    /// ConfirmingDelete -> Idle; deletes only when `confirmed`
    pub fn resolve_delete(&mut self, confirmed: bool) {
        let contact_id = match &self.state {
            WindowState::ConfirmingDelete { contact_id } => contact_id.clone(),
            _ => return,
        };
        self.state = WindowState::Idle;

        if !confirmed {
            debug!("Deletion of contact {} cancelled", contact_id);
            return;
        }

        match self.controller.delete(&contact_id) {
            Ok(()) => {
                info!("Contact {} deleted", contact_id);
                if self.load_contacts() {
                    self.notify_success("Contact deleted");
                }
            }
            Err(err) => {
                warn!("Deleting contact {} failed: {:#}", contact_id, err);
                self.notify_error(format!("Could not delete contact: {err}"));
            }
        }
    }

    pub fn handle_table_event(&mut self, event: TableEvent) {
        match event {
            TableEvent::Selected(index) => debug!("Row {} selected", index),
            TableEvent::Activated(index) => {
                debug!("Row {} activated", index);
                self.notify_info("Contact selected");
            }
        }
    }
}
