//! Theme switching

use super::ContactApp;
use eframe::egui;

impl ContactApp {
    /// Re-style the egui context if the theme changed since the last frame
    pub(super) fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.theme.ensure_applied(ctx) {
            ctx.request_repaint();
        }
    }

    /// Flip between light and dark; allowed in any state
    pub fn toggle_theme(&mut self) {
        let next = self.theme.current().toggled();
        self.theme.set(next);
        self.notify_info(format!("{} theme enabled", next));
    }
}
