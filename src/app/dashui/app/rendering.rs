//! UI rendering for the header, the contact panel, dialogs and toasts

use super::{ContactApp, WindowState};
use crate::app::dashui::confirm_dialog::ConfirmDialog;
use crate::app::dashui::icons::ButtonIcon;
use crate::app::dashui::rounded_border::RoundedBorder;
use crate::app::dashui::rounded_button::RoundedButton;
use crate::app::dashui::shadow_panel::ShadowPanel;
use crate::app::notifications::toast_overlay::ToastOverlay;
use crate::app::theme::Palette;
use eframe::egui;
use egui::{Align, Layout, Margin, RichText};
use std::time::Instant;

const CONTENT_MARGIN: i8 = 14;
const BUTTON_ROW_HEIGHT: f32 = 48.0;

enum PanelAction {
    None,
    ToggleTheme,
    Add,
    Delete,
}

impl ContactApp {
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        let mut action = PanelAction::None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(palette.background)
                    .inner_margin(Margin::same(CONTENT_MARGIN)),
            )
            .show(ctx, |ui| {
                if self.render_header(ui, palette) {
                    action = PanelAction::ToggleTheme;
                }
                ui.add_space(f32::from(CONTENT_MARGIN));

                ShadowPanel::new(palette).show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                        ui.allocate_ui_with_layout(
                            egui::vec2(ui.available_width(), BUTTON_ROW_HEIGHT),
                            Layout::right_to_left(Align::Center),
                            |ui| {
                                ui.spacing_mut().item_spacing.x = 12.0;
                                let delete_icon = self.icons.as_ref().map(|i| &i.delete);
                                if ui.add(action_button(RoundedButton::danger("Delete"), delete_icon)).clicked() {
                                    action = PanelAction::Delete;
                                }
                                let add_icon = self.icons.as_ref().map(|i| &i.add);
                                if ui
                                    .add(action_button(RoundedButton::primary("Add", palette), add_icon))
                                    .clicked()
                                {
                                    action = PanelAction::Add;
                                }
                            },
                        );
                        ui.add_space(10.0);
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            if let Some(event) = self.table.show(ui, palette) {
                                self.handle_table_event(event);
                            }
                        });
                    });
                });
            });

        match action {
            PanelAction::ToggleTheme => self.toggle_theme(),
            PanelAction::Add => self.request_add(),
            PanelAction::Delete => self.request_delete(),
            PanelAction::None => {}
        }
    }

    /// Title, subtitle and the theme toggle. Returns whether the toggle was clicked.
    fn render_header(&self, ui: &mut egui::Ui, palette: &Palette) -> bool {
        let mut toggled = false;

        ShadowPanel::new(palette)
            .inner_margin(Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.label(
                            RichText::new("Contact Book")
                                .strong()
                                .size(22.0)
                                .color(palette.text_primary),
                        );
                        ui.label(
                            RichText::new("Manage your contacts quickly and beautifully.")
                                .size(13.0)
                                .color(palette.text_secondary),
                        );
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let caption = self.theme.current().toggle_caption();
                        RoundedBorder::new(7.0, palette.panel_border)
                            .fill(palette.panel_background)
                            .show(ui, |ui| {
                                let button = egui::Button::new(
                                    RichText::new(caption).size(13.0).color(palette.text_primary),
                                )
                                .frame(false);
                                if ui.add(button).clicked() {
                                    toggled = true;
                                }
                            });
                    });
                });
            });

        toggled
    }

    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();

        if self.state == WindowState::AwaitingAddDialog {
            let outcome = self.add_dialog.show(ctx, palette, self.controller.as_mut());
            self.finish_add(outcome);
        } else if matches!(self.state, WindowState::ConfirmingDelete { .. }) {
            let dialog = ConfirmDialog::new(
                "confirm_delete_dialog",
                "Confirm deletion",
                "Are you sure you want to delete this contact?",
            );
            if let Some(confirmed) = dialog.show(ctx, palette) {
                self.resolve_delete(confirmed);
            }
        }
    }

    pub(super) fn render_toasts(&mut self, ctx: &egui::Context, now: Instant) {
        ToastOverlay::show(&self.toasts, ctx, now);
    }

    /// Bottom strip with git branch/commit in debug builds
    pub(super) fn render_build_info(&self, ctx: &egui::Context) {
        if !cfg!(debug_assertions) {
            return;
        }
        let palette = self.theme.palette();
        egui::TopBottomPanel::bottom("build_info")
            .show_separator_line(false)
            .resizable(false)
            .min_height(0.0)
            .frame(egui::Frame::NONE.fill(palette.background).inner_margin(Margin::symmetric(8, 2)))
            .show(ctx, |ui| {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "debug build {} ({})",
                            env!("GIT_BRANCH"),
                            env!("GIT_COMMIT")
                        ))
                        .size(10.0)
                        .color(palette.text_secondary),
                    );
                });
            });
    }
}

fn action_button<'a>(button: RoundedButton<'a>, icon: Option<&'a ButtonIcon>) -> RoundedButton<'a> {
    match icon {
        Some(icon) => button.icon(icon),
        None => button,
    }
}
