use eframe::egui;
use egui::{Color32, CornerRadius, InnerResponse, Margin, Stroke, Ui};

/// Fixed content insets of a rounded border (top/bottom 8, left/right 10)
pub const BORDER_INSETS: Margin = Margin {
    left: 10,
    right: 10,
    top: 8,
    bottom: 8,
};

/// Draws a 1px rounded outline around arbitrary content.
#[derive(Debug, Clone, Copy)]
pub struct RoundedBorder {
    radius: f32,
    color: Color32,
    fill: Color32,
}

impl RoundedBorder {
    pub fn new(radius: f32, color: Color32) -> Self {
        Self {
            radius,
            color,
            fill: Color32::TRANSPARENT,
        }
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn frame(&self) -> egui::Frame {
        egui::Frame::NONE
            .fill(self.fill)
            .stroke(Stroke::new(1.0, self.color))
            .corner_radius(CornerRadius::same(self.radius.round().clamp(0.0, 255.0) as u8))
            .inner_margin(BORDER_INSETS)
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        self.frame().show(ui, add_contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_uses_fixed_insets_and_color() {
        let color = Color32::from_rgb(0xE6, 0xEB, 0xF1);
        let frame = RoundedBorder::new(7.0, color).frame();
        assert_eq!(frame.inner_margin, BORDER_INSETS);
        assert_eq!(frame.stroke, Stroke::new(1.0, color));
        assert_eq!(frame.corner_radius, CornerRadius::same(7));
        assert_eq!(frame.fill, Color32::TRANSPARENT);
    }

    #[test]
    fn test_fill_is_optional() {
        let frame = RoundedBorder::new(7.0, Color32::BLACK)
            .fill(Color32::WHITE)
            .frame();
        assert_eq!(frame.fill, Color32::WHITE);
    }
}
