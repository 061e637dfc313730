use crate::app::theme::Palette;
use eframe::egui;
use egui::{Color32, CornerRadius, InnerResponse, Margin, Shadow, Stroke, Ui};

const PANEL_RADIUS: u8 = 8;

/// Soft shadow cast down and to the right of every panel
pub const PANEL_SHADOW: Shadow = Shadow {
    offset: [3, 5],
    blur: 14,
    spread: 0,
    color: Color32::from_black_alpha(28),
};

/// Rounded card with a drop shadow, filled and outlined from the palette it is
/// given.
pub struct ShadowPanel<'a> {
    palette: &'a Palette,
    inner_margin: Margin,
}

impl<'a> ShadowPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            inner_margin: Margin::same(12),
        }
    }

    pub fn inner_margin(mut self, margin: impl Into<Margin>) -> Self {
        self.inner_margin = margin.into();
        self
    }

    pub fn frame(&self) -> egui::Frame {
        egui::Frame::NONE
            .fill(self.palette.panel_background)
            .stroke(Stroke::new(1.0, self.palette.panel_border))
            .corner_radius(CornerRadius::same(PANEL_RADIUS))
            .shadow(PANEL_SHADOW)
            .inner_margin(self.inner_margin)
            // leave room so the shadow isn't clipped by the next sibling
            .outer_margin(Margin {
                right: 6,
                bottom: 8,
                ..Margin::ZERO
            })
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        self.frame().show(ui, add_contents)
    }
}
