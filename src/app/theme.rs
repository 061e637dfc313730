//! Light and dark palettes and the registry that tracks which one is active.
//!
//! A [`Theme`] is a closed enumeration; each variant maps to an immutable
//! [`Palette`] of semantic colors. Styled controls never look the theme up on
//! their own: the active palette is handed to them when they are rendered.

use eframe::egui;
use egui::{Color32, CornerRadius, Stroke};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Semantic colors shared by every styled control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub brand: Color32,
    pub brand_hover: Color32,
    pub background: Color32,
    pub foreground: Color32,
    pub panel_background: Color32,
    pub panel_border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub table_stripe: Color32,
}

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub const LIGHT: Palette = Palette {
    brand: hex(0x0B6BFF),
    brand_hover: hex(0x2576FF),
    background: Color32::WHITE,
    foreground: hex(0x0E1217),
    panel_background: hex(0xF5F7FA),
    panel_border: hex(0xE6EBF1),
    text_primary: hex(0x1F2937),
    text_secondary: hex(0x6B7280),
    table_stripe: hex(0xE5E7EB),
};

pub const DARK: Palette = Palette {
    brand: hex(0x3B82F6),
    brand_hover: hex(0x60A5FA),
    background: hex(0x0B0F14),
    foreground: hex(0xF9FAFB),
    panel_background: hex(0x121720),
    panel_border: hex(0x1C2430),
    text_primary: hex(0xD1D5DB),
    text_secondary: hex(0x9CA3AF),
    table_stripe: hex(0x2A3442),
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Lowercase name used in notifications and config files
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Caption of the toggle button, which names the theme it switches to
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

impl Palette {
    /// Build the egui visuals for this palette.
    ///
    /// This is the whole-window re-style pass: window and panel fills, text
    /// color, grid/border strokes and selection colors all come from here.
    pub fn visuals(&self, dark: bool) -> egui::Visuals {
        let mut visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.override_text_color = Some(self.text_primary);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel_background;
        visuals.window_stroke = Stroke::new(1.0, self.panel_border);
        visuals.window_corner_radius = CornerRadius::same(12);
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.table_stripe;
        visuals.hyperlink_color = self.brand;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.panel_border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_fill = self.panel_background;

        visuals.widgets.inactive.bg_fill = self.panel_background;
        visuals.widgets.inactive.weak_bg_fill = self.panel_background;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.brand_hover);
        visuals.widgets.active.bg_fill = self.brand;

        visuals.selection.bg_fill = self.brand;
        visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.text_cursor.stroke = Stroke::new(2.0, self.text_primary);

        visuals
    }
}

/// Tracks the active theme and whether the egui context has caught up with it.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    current: Theme,
    applied: Option<Theme>,
}

impl ThemeRegistry {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            applied: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn palette(&self) -> &'static Palette {
        self.current.palette()
    }

    pub fn set(&mut self, theme: Theme) {
        if self.current != theme {
            tracing::info!("Theme switched: {} -> {}", self.current, theme);
        }
        self.current = theme;
    }

    /// True until [`ThemeRegistry::ensure_applied`] has styled the context
    /// with the current theme.
    pub fn needs_restyle(&self) -> bool {
        self.applied != Some(self.current)
    }

    /// Re-style the whole context if the active theme changed since the last
    /// call. Returns whether a re-style happened.
    pub fn ensure_applied(&mut self, ctx: &egui::Context) -> bool {
        if !self.needs_restyle() {
            return false;
        }
        let theme = self.current;
        // Pin egui's own light/dark preference so the OS theme can't swap styles underneath us
        ctx.set_theme(if theme.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_visuals(theme.palette().visuals(theme.is_dark()));
        self.applied = Some(theme);
        ctx.request_repaint();
        tracing::debug!("Applied {} palette to egui context", theme);
        true
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palettes_match_roles() {
        assert_eq!(Theme::Light.palette().brand, Color32::from_rgb(0x0B, 0x6B, 0xFF));
        assert_eq!(Theme::Light.palette().background, Color32::WHITE);
        assert_eq!(Theme::Dark.palette().background, Color32::from_rgb(0x0B, 0x0F, 0x14));
        assert_eq!(Theme::Dark.palette().table_stripe, Color32::from_rgb(0x2A, 0x34, 0x42));
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_visuals_carry_palette_colors() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            let visuals = palette.visuals(theme.is_dark());
            assert_eq!(visuals.panel_fill, palette.background);
            assert_eq!(visuals.window_fill, palette.panel_background);
            assert_eq!(visuals.override_text_color, Some(palette.text_primary));
            assert_eq!(visuals.widgets.noninteractive.bg_stroke.color, palette.panel_border);
            assert_eq!(visuals.selection.bg_fill, palette.brand);
            assert_eq!(visuals.dark_mode, theme.is_dark());
        }
    }

    #[test]
    fn test_applying_same_theme_twice_is_idempotent() {
        let ctx = egui::Context::default();
        let mut registry = ThemeRegistry::new(Theme::Dark);

        assert!(registry.ensure_applied(&ctx));
        let first = ctx.style().visuals.clone();

        registry.set(Theme::Dark);
        assert!(!registry.ensure_applied(&ctx));
        assert_eq!(ctx.style().visuals, first);
    }

    #[test]
    fn test_switch_marks_restyle() {
        let ctx = egui::Context::default();
        let mut registry = ThemeRegistry::default();
        registry.ensure_applied(&ctx);
        assert!(!registry.needs_restyle());

        registry.set(Theme::Dark);
        assert!(registry.needs_restyle());
        assert!(registry.ensure_applied(&ctx));
        assert_eq!(ctx.style().visuals.panel_fill, DARK.background);
    }

    #[test]
    fn test_theme_serde_lowercase() {
        let encoded = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(encoded, "\"dark\"");
        let decoded: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(decoded, Theme::Light);
    }
}
