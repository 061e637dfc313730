use super::{Toast, ToastManager, TICK};
use crate::app::dashui::rounded_border::RoundedBorder;
use egui::{Color32, Context, RichText};
use std::time::Instant;

const EDGE_INSET: f32 = 24.0;
const STACK_GAP: f32 = 8.0;
const TEXT_COLOR: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

pub struct ToastOverlay;

impl ToastOverlay {
    /// Paint every live toast as a borderless foreground area.
    ///
    /// The newest toast sits closest to its anchor and older ones are pushed
    /// upward by the measured height of the toasts below them. Returns the
    /// painted rects, newest first.
    pub fn show(manager: &ToastManager, ctx: &Context, now: Instant) -> Vec<egui::Rect> {
        let mut stacked = 0.0;
        let mut painted = Vec::with_capacity(manager.len());

        for toast in manager.active().rev() {
            let Some(opacity) = toast.opacity(now) else {
                continue;
            };

            let pos = toast.anchor - egui::vec2(EDGE_INSET, EDGE_INSET + stacked);
            let area = egui::Area::new(egui::Id::new(("toast", toast.id)))
                .order(egui::Order::Foreground)
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .fixed_pos(pos)
                .interactable(false)
                .show(ctx, |ui| {
                    ui.set_opacity(opacity);
                    Self::toast_body(ui, toast);
                });

            stacked += area.response.rect.height() + STACK_GAP;
            painted.push(area.response.rect);
        }

        if !manager.is_empty() {
            ctx.request_repaint_after(TICK);
        }
        painted
    }

    fn toast_body(ui: &mut egui::Ui, toast: &Toast) {
        RoundedBorder::new(14.0, Color32::from_black_alpha(40))
            .fill(toast.kind.background())
            .show(ui, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 6.0;
                            ui.label(RichText::new("●").color(toast.kind.accent()));
                            ui.label(
                                RichText::new(&toast.message)
                                    .strong()
                                    .size(13.0)
                                    .color(TEXT_COLOR),
                            );
                        });
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notifications::ToastKind;
    use std::time::Duration;

    #[test]
    fn test_stacked_toasts_do_not_overlap() {
        let ctx = Context::default();
        let start = Instant::now();
        let anchor = egui::pos2(800.0, 600.0);
        let mut manager = ToastManager::new();
        manager.notify("first", ToastKind::Info, anchor, start);
        manager.notify("second", ToastKind::Error, anchor, start);
        manager.notify("a much longer third message", ToastKind::Success, anchor, start);

        // Areas measure themselves on the first pass
        let mut rects = Vec::new();
        for _ in 0..2 {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                rects = ToastOverlay::show(&manager, ctx, start + Duration::from_millis(300));
            });
        }

        assert_eq!(rects.len(), 3);
        for (i, a) in rects.iter().enumerate() {
            assert!(a.height() > 0.0);
            assert!((a.right() - (anchor.x - EDGE_INSET)).abs() < 1.0);
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b), "toasts overlap: {a:?} and {b:?}");
            }
        }
        // Newest sits at the anchor, older ones above it
        assert!((rects[0].bottom() - (anchor.y - EDGE_INSET)).abs() < 1.0);
        assert!(rects[1].bottom() <= rects[0].top() - STACK_GAP + 0.5);
        assert!(rects[2].bottom() <= rects[1].top() - STACK_GAP + 0.5);
    }

    #[test]
    fn test_expired_toasts_are_not_painted() {
        let ctx = Context::default();
        let start = Instant::now();
        let mut manager = ToastManager::new();
        manager.notify("gone", ToastKind::Info, egui::pos2(800.0, 600.0), start);

        let mut rects = vec![egui::Rect::NOTHING];
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rects = ToastOverlay::show(&manager, ctx, start + Duration::from_millis(2500));
        });
        assert!(rects.is_empty());
    }
}
