use super::icons::ButtonIcon;
use crate::app::theme::Palette;
use eframe::egui;
use egui::{
    Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Response, Sense, Stroke, StrokeKind,
    Ui, Vec2, Widget, WidgetInfo, WidgetType,
};

const CORNER_RADIUS: u8 = 9;
const SHADOW_RADIUS: u8 = 11;
const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 4.0);
const SHADOW_SHRINK: Vec2 = Vec2::new(4.0, 6.0);
const SHADOW_ALPHA: u8 = 25;
/// Left padding before the icon (or text), mirrored on the right
pub const CONTENT_PADDING: f32 = 16.0;
pub const ICON_GAP: f32 = 8.0;
const VERTICAL_PADDING: f32 = 10.0;

pub const DANGER: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
pub const DANGER_HOVER: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

/// Where the icon and label go inside a button rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    pub icon_rect: Option<Rect>,
    pub text_pos: Pos2,
}

/// Lay out an optional icon followed by a label, left-padded and vertically
/// centered.
pub fn content_layout(rect: Rect, icon_size: Option<Vec2>, text_height: f32) -> ButtonLayout {
    let mut x = rect.left() + CONTENT_PADDING;
    let icon_rect = icon_size.map(|size| {
        let icon_rect = Rect::from_min_size(egui::pos2(x, rect.center().y - size.y / 2.0), size);
        x += size.x + ICON_GAP;
        icon_rect
    });
    ButtonLayout {
        icon_rect,
        text_pos: egui::pos2(x, rect.center().y - text_height / 2.0),
    }
}

/// Custom-painted button with rounded corners, hover tint, optional drop
/// shadow and an optional leading icon.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct RoundedButton<'a> {
    text: String,
    background: Color32,
    foreground: Color32,
    hover_color: Color32,
    shadow: bool,
    icon: Option<&'a ButtonIcon>,
    font_size: f32,
}

impl<'a> RoundedButton<'a> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background: Color32::TRANSPARENT,
            foreground: Color32::BLACK,
            hover_color: Color32::from_black_alpha(30),
            shadow: false,
            icon: None,
            font_size: 16.0,
        }
    }

    /// Brand-colored action button with white text
    pub fn primary(text: impl Into<String>, palette: &Palette) -> Self {
        Self::new(text)
            .background(palette.brand)
            .foreground(Color32::WHITE)
            .hover_color(palette.brand_hover)
            .shadow(true)
    }

    /// Red button for destructive actions
    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text)
            .background(DANGER)
            .foreground(Color32::WHITE)
            .hover_color(DANGER_HOVER)
            .shadow(true)
    }

    pub fn background(mut self, color: Color32) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color32) -> Self {
        self.foreground = color;
        self
    }

    pub fn hover_color(mut self, color: Color32) -> Self {
        self.hover_color = color;
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn icon(mut self, icon: &'a ButtonIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

impl Widget for RoundedButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let galley = ui.painter().layout_no_wrap(
            self.text.clone(),
            FontId::proportional(self.font_size),
            self.foreground,
        );

        let icon_size = self.icon.map(ButtonIcon::size);
        let icon_width = icon_size.map_or(0.0, |size| size.x + ICON_GAP);
        let content_height = galley.size().y.max(icon_size.map_or(0.0, |size| size.y));
        let desired_size = egui::vec2(
            CONTENT_PADDING * 2.0 + icon_width + galley.size().x,
            content_height + VERTICAL_PADDING * 2.0,
        );

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());
        let enabled = ui.is_enabled();
        let label = self.text.clone();
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, &label));

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            if self.shadow {
                let shadow_rect = Rect::from_min_size(rect.min + SHADOW_OFFSET, rect.size() - SHADOW_SHRINK);
                painter.rect_filled(
                    shadow_rect,
                    CornerRadius::same(SHADOW_RADIUS),
                    Color32::from_black_alpha(SHADOW_ALPHA),
                );
            }

            painter.rect_filled(rect, CornerRadius::same(CORNER_RADIUS), self.background);
            if response.hovered() {
                painter.rect_filled(rect, CornerRadius::same(CORNER_RADIUS), self.hover_color);
            }

            let layout = content_layout(rect, icon_size, galley.size().y);
            if let (Some(icon), Some(icon_rect)) = (self.icon, layout.icon_rect) {
                icon.paint(painter, icon_rect, self.foreground);
            }
            painter.galley(layout.text_pos, galley, self.foreground);

            if response.has_focus() {
                painter.rect_stroke(
                    rect.expand(2.0),
                    CornerRadius::same(CORNER_RADIUS + 2),
                    Stroke::new(1.5, self.hover_color),
                    StrokeKind::Outside,
                );
            }
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::theme::Theme;
    use egui_kittest::{kittest::Queryable, Harness};

    #[test]
    fn test_layout_with_icon() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(120.0, 40.0));
        let layout = content_layout(rect, Some(egui::vec2(18.0, 18.0)), 20.0);

        let icon_rect = layout.icon_rect.unwrap();
        assert_eq!(icon_rect.min, egui::pos2(16.0, 11.0));
        assert_eq!(icon_rect.size(), egui::vec2(18.0, 18.0));
        assert_eq!(layout.text_pos, egui::pos2(16.0 + 18.0 + 8.0, 10.0));
    }

    #[test]
    fn test_layout_without_icon() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(100.0, 30.0));
        let layout = content_layout(rect, None, 10.0);
        assert!(layout.icon_rect.is_none());
        assert_eq!(layout.text_pos, egui::pos2(26.0, 20.0));
    }

    #[test]
    fn test_primary_uses_palette_brand() {
        let palette = Theme::Dark.palette();
        let button = RoundedButton::primary("Add", palette);
        assert_eq!(button.background, palette.brand);
        assert_eq!(button.hover_color, palette.brand_hover);
        assert_eq!(button.foreground, Color32::WHITE);
        assert!(button.shadow);
    }

    #[test]
    fn test_button_click_reports_activation() {
        let icon = ButtonIcon::glyph("➕");
        let mut harness = Harness::new_ui_state(
            |ui, clicks: &mut i32| {
                let palette = Theme::Light.palette();
                if ui.add(RoundedButton::primary("Add", palette).icon(&icon)).clicked() {
                    *clicks += 1;
                }
            },
            0,
        );

        harness.get_by_label("Add").click();
        harness.run();
        assert_eq!(*harness.state(), 1);
    }

    #[test]
    fn test_enter_and_space_activate_focused_button() {
        let mut harness = Harness::new_ui_state(
            |ui, clicks: &mut i32| {
                if ui.add(RoundedButton::danger("Delete")).clicked() {
                    *clicks += 1;
                }
            },
            0,
        );
        harness.run();

        harness.get_by_label("Delete").focus();
        harness.run();
        assert!(harness.get_by_label("Delete").is_focused());
        assert_eq!(*harness.state(), 0);

        harness.key_press(egui::Key::Enter);
        harness.run();
        assert_eq!(*harness.state(), 1);

        harness.key_press(egui::Key::Space);
        harness.run();
        assert_eq!(*harness.state(), 2);
    }
}
