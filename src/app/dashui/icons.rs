//! Button icons: embedded bitmaps with a text glyph fallback.

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Rect, TextureHandle, TextureOptions, Vec2};

/// Icons are always laid out in an 18x18 box
pub const ICON_SIZE: Vec2 = Vec2::splat(18.0);

const ADD_ICON_PNG: &[u8] = include_bytes!("../../../assets/icons/add.png");
const DELETE_ICON_PNG: &[u8] = include_bytes!("../../../assets/icons/delete.png");

#[derive(Clone)]
pub enum ButtonIcon {
    Image(TextureHandle),
    Glyph(String),
}

impl std::fmt::Debug for ButtonIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonIcon::Image(texture) => write!(f, "Image({})", texture.name()),
            ButtonIcon::Glyph(glyph) => write!(f, "Glyph({glyph})"),
        }
    }
}

impl ButtonIcon {
    pub fn glyph(glyph: impl Into<String>) -> Self {
        ButtonIcon::Glyph(glyph.into())
    }

    /// Decode `bytes` into a texture, or fall back to `fallback` as a glyph
    /// if the image can't be decoded.
    pub fn load(ctx: &egui::Context, name: &str, bytes: &[u8], fallback: &str) -> Self {
        match egui_extras::image::load_image_bytes(bytes) {
            Ok(image) => {
                tracing::debug!("Decoded {} icon, size {:?}", name, image.size);
                ButtonIcon::Image(ctx.load_texture(
                    format!("button_icon_{name}"),
                    image,
                    TextureOptions::LINEAR,
                ))
            }
            Err(err) => {
                tracing::debug!("Using glyph for {} icon: {}", name, err);
                ButtonIcon::glyph(fallback)
            }
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, ButtonIcon::Glyph(_))
    }

    pub fn size(&self) -> Vec2 {
        ICON_SIZE
    }

    /// Paint the icon into `rect`; glyphs use `color`, bitmaps keep their own colors
    pub fn paint(&self, painter: &Painter, rect: Rect, color: Color32) {
        match self {
            ButtonIcon::Image(texture) => {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            ButtonIcon::Glyph(glyph) => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(16.0),
                    color,
                );
            }
        }
    }
}

/// The icons used by the main window's action buttons
#[derive(Debug, Clone)]
pub struct IconSet {
    pub add: ButtonIcon,
    pub delete: ButtonIcon,
}

impl IconSet {
    pub fn load(ctx: &egui::Context) -> Self {
        Self {
            add: ButtonIcon::load(ctx, "add", ADD_ICON_PNG, "➕"),
            delete: ButtonIcon::load(ctx, "delete", DELETE_ICON_PNG, "🗑"),
        }
    }
}
