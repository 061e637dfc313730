use super::rounded_button::RoundedButton;
use crate::app::theme::Palette;
use eframe::egui;
use egui::{Context, RichText};

/// Blocking yes/no prompt. The caller owns the "is it open" state; this only
/// draws the prompt and reports the answer.
pub struct ConfirmDialog<'a> {
    id: &'a str,
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(id: &'a str, title: &'a str, message: &'a str) -> Self {
        Self { id, title, message }
    }

    /// `Some(true)` on Yes, `Some(false)` on No/Escape/backdrop click,
    /// `None` while still waiting.
    pub fn show(&self, ctx: &Context, palette: &Palette) -> Option<bool> {
        let mut answer = None;

        let modal = egui::Modal::new(egui::Id::new(self.id)).show(ctx, |ui| {
            ui.set_width(340.0);
            ui.label(
                RichText::new(self.title)
                    .strong()
                    .size(16.0)
                    .color(palette.text_primary),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(self.message).color(palette.text_secondary));
            ui.add_space(14.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(RoundedButton::danger("Yes").font_size(14.0)).clicked() {
                    answer = Some(true);
                }
                let no = RoundedButton::new("No")
                    .background(palette.panel_background)
                    .foreground(palette.text_primary)
                    .hover_color(palette.panel_border)
                    .font_size(14.0);
                if ui.add(no).clicked() {
                    answer = Some(false);
                }
            });
        });

        if answer.is_none() && modal.should_close() {
            answer = Some(false);
        }
        answer
    }
}
