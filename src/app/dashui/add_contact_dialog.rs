use super::rounded_border::RoundedBorder;
use super::rounded_button::RoundedButton;
use crate::app::contacts::{Contact, ContactController, NewContact};
use crate::app::theme::Palette;
use eframe::egui;
use egui::{Color32, Context, RichText, Ui};

const ERROR_COLOR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Result of showing the add dialog for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open, waiting for the user
    Pending,
    Saved(Contact),
    Cancelled,
}

enum DialogAction {
    None,
    Save,
    Cancel,
}

/// Modal form that collects a new contact and hands it to the controller.
///
/// While open it blocks the rest of the window. A controller error keeps the
/// dialog open with the message shown inline.
#[derive(Debug, Default)]
pub struct AddContactDialog {
    open: bool,
    pub name: String,
    pub email: String,
    pub phone: String,
    error: Option<String>,
}

impl AddContactDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.error = None;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to add the entered contact
    pub fn submit(&mut self, controller: &mut dyn ContactController) -> DialogOutcome {
        let request = NewContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        };
        match controller.add(request) {
            Ok(contact) => {
                tracing::info!("Add dialog saved contact {}", contact.id);
                self.open = false;
                DialogOutcome::Saved(contact)
            }
            Err(err) => {
                tracing::warn!("Add dialog rejected: {:#}", err);
                self.error = Some(err.to_string());
                DialogOutcome::Pending
            }
        }
    }

    pub fn cancel(&mut self) -> DialogOutcome {
        self.open = false;
        DialogOutcome::Cancelled
    }

    pub fn show(
        &mut self,
        ctx: &Context,
        palette: &Palette,
        controller: &mut dyn ContactController,
    ) -> DialogOutcome {
        if !self.open {
            return DialogOutcome::Pending;
        }

        let mut action = DialogAction::None;
        let modal = egui::Modal::new(egui::Id::new("add_contact_dialog")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(
                RichText::new("New contact")
                    .strong()
                    .size(18.0)
                    .color(palette.text_primary),
            );
            ui.add_space(10.0);

            Self::field(ui, palette, "Name", &mut self.name);
            Self::field(ui, palette, "Email", &mut self.email);
            Self::field(ui, palette, "Phone", &mut self.phone);

            if let Some(error) = &self.error {
                ui.add_space(4.0);
                ui.colored_label(ERROR_COLOR, error);
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(RoundedButton::primary("Save", palette).font_size(14.0)).clicked() {
                    action = DialogAction::Save;
                }
                let cancel = RoundedButton::new("Cancel")
                    .background(palette.panel_background)
                    .foreground(palette.text_primary)
                    .hover_color(palette.panel_border)
                    .font_size(14.0);
                if ui.add(cancel).clicked() {
                    action = DialogAction::Cancel;
                }
            });
        });

        if modal.should_close() {
            action = DialogAction::Cancel;
        }

        match action {
            DialogAction::Save => self.submit(controller),
            DialogAction::Cancel => self.cancel(),
            DialogAction::None => DialogOutcome::Pending,
        }
    }

    fn field(ui: &mut Ui, palette: &Palette, label: &str, value: &mut String) {
        let label = ui.label(RichText::new(label).size(13.0).color(palette.text_secondary));
        RoundedBorder::new(7.0, palette.panel_border)
            .fill(palette.background)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(value)
                        .frame(false)
                        .desired_width(f32::INFINITY)
                        .text_color(palette.text_primary),
                )
                .labelled_by(label.id);
            });
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contacts::ContactBook;

    #[test]
    fn test_open_resets_fields() {
        let mut dialog = AddContactDialog::new();
        dialog.name = "stale".into();
        dialog.open();
        assert!(dialog.is_open());
        assert!(dialog.name.is_empty());
        assert!(dialog.error().is_none());
    }

    #[test]
    fn test_submit_success_closes() {
        let mut book = ContactBook::new();
        let mut dialog = AddContactDialog::new();
        dialog.open();
        dialog.name = "Ada".into();
        dialog.email = "ada@example.com".into();

        let outcome = dialog.submit(&mut book);
        match outcome {
            DialogOutcome::Saved(contact) => assert_eq!(contact.name, "Ada"),
            other => panic!("expected Saved, got {other:?}"),
        }
        assert!(!dialog.is_open());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_submit_failure_stays_open_with_error() {
        let mut book = ContactBook::new();
        let mut dialog = AddContactDialog::new();
        dialog.open();

        assert_eq!(dialog.submit(&mut book), DialogOutcome::Pending);
        assert!(dialog.is_open());
        assert!(dialog.error().is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_cancel_closes_without_adding() {
        let mut dialog = AddContactDialog::new();
        dialog.open();
        assert_eq!(dialog.cancel(), DialogOutcome::Cancelled);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_closed_dialog_is_pending() {
        let ctx = Context::default();
        let mut book = ContactBook::new();
        let mut dialog = AddContactDialog::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let outcome = dialog.show(ctx, crate::app::theme::Theme::Light.palette(), &mut book);
            assert_eq!(outcome, DialogOutcome::Pending);
        });
    }
}
