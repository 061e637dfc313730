//! Toast notifications and their fade-in/expiry timeline

use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub mod toast_overlay;

/// Time for a toast to fade from transparent to full opacity
pub const FADE_IN: Duration = Duration::from_millis(250);
/// Total lifetime; the toast is dropped once this much time has passed
pub const LIFETIME: Duration = Duration::from_millis(2200);
pub const MAX_OPACITY: f32 = 0.95;
/// Repaint cadence while any toast is alive (~60 Hz)
pub const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn accent(self) -> Color32 {
        match self {
            ToastKind::Info => Color32::from_rgb(0x25, 0x63, 0xEB),
            ToastKind::Success => Color32::from_rgb(0x05, 0x96, 0x69),
            ToastKind::Error => Color32::from_rgb(0xDC, 0x26, 0x26),
        }
    }

    pub fn background(self) -> Color32 {
        match self {
            ToastKind::Info => Color32::from_rgb(0xDB, 0xEA, 0xFE),
            ToastKind::Success => Color32::from_rgb(0xD1, 0xFA, 0xE5),
            ToastKind::Error => Color32::from_rgb(0xFE, 0xE2, 0xE2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    /// Bottom-right corner of the window when the toast was spawned.
    /// Toasts are not re-anchored if the window moves or resizes.
    pub anchor: Pos2,
}

impl Toast {
    /// Opacity after `elapsed`, or `None` once the toast has expired.
    ///
    /// Rises linearly to [`MAX_OPACITY`] during [`FADE_IN`], then holds.
    pub fn opacity_at(elapsed: Duration) -> Option<f32> {
        if elapsed >= LIFETIME {
            return None;
        }
        let progress = (elapsed.as_secs_f32() / FADE_IN.as_secs_f32()).min(1.0);
        Some(progress.min(MAX_OPACITY))
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    pub fn opacity(&self, now: Instant) -> Option<f32> {
        Self::opacity_at(self.elapsed(now))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.opacity(now).is_none()
    }
}

/// Live toasts, oldest first.
///
/// Concurrent toasts stack upward from their anchor with the newest at the
/// bottom. Nothing is de-duplicated and nothing is cancelled: every toast
/// stays until its own lifetime has run out.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, anchor: Pos2, now: Instant) {
        let message = message.into();
        tracing::debug!("Toast {:?}: {}", kind, message);

        self.next_id += 1;
        self.toasts.push_back(Toast {
            id: self.next_id,
            message,
            kind,
            created_at: now,
            anchor,
        });
    }

    pub fn info(&mut self, message: impl Into<String>, anchor: Pos2, now: Instant) {
        self.notify(message, ToastKind::Info, anchor, now);
    }

    pub fn success(&mut self, message: impl Into<String>, anchor: Pos2, now: Instant) {
        self.notify(message, ToastKind::Success, anchor, now);
    }

    pub fn error(&mut self, message: impl Into<String>, anchor: Pos2, now: Instant) {
        self.notify(message, ToastKind::Error, anchor, now);
    }

    /// Drop every toast whose lifetime has run out
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Oldest first
    pub fn active(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn count_of(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_opacity_fades_in_then_holds() {
        assert_eq!(Toast::opacity_at(ms(0)), Some(0.0));
        let mid = Toast::opacity_at(ms(125)).unwrap();
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(Toast::opacity_at(ms(250)), Some(MAX_OPACITY));
        assert_eq!(Toast::opacity_at(ms(2199)), Some(MAX_OPACITY));
        assert_eq!(Toast::opacity_at(ms(2200)), None);
    }

    #[test]
    fn test_opacity_never_decreases_before_removal() {
        let mut last = 0.0;
        for t in (0..2200).step_by(16) {
            let opacity = Toast::opacity_at(ms(t)).expect("alive before lifetime");
            assert!(opacity >= last, "opacity dropped at {t}ms");
            last = opacity;
        }
    }

    #[test]
    fn test_tick_removes_expired() {
        let start = Instant::now();
        let mut manager = ToastManager::new();
        manager.info("hello", Pos2::ZERO, start);
        manager.error("later", Pos2::ZERO, start + ms(1000));

        manager.tick(start + ms(2100));
        assert_eq!(manager.len(), 2);

        manager.tick(start + ms(2200));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.count_of(ToastKind::Error), 1);

        manager.tick(start + ms(3200));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_burst_of_toasts_all_run_to_completion() {
        let start = Instant::now();
        let mut manager = ToastManager::new();
        manager.info("first", Pos2::ZERO, start);
        for i in 0..6 {
            manager.success(format!("toast {i}"), Pos2::ZERO, start + ms(10));
        }

        manager.tick(start + ms(100));
        assert_eq!(manager.len(), 7);
        assert_eq!(manager.active().next().unwrap().message, "first");

        manager.tick(start + ms(2199));
        assert_eq!(manager.len(), 7);
        manager.tick(start + ms(2200));
        assert_eq!(manager.count_of(ToastKind::Info), 0);
        assert_eq!(manager.count_of(ToastKind::Success), 6);
        manager.tick(start + ms(2210));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_kind_colors_are_distinct() {
        assert_ne!(ToastKind::Info.accent(), ToastKind::Error.accent());
        assert_eq!(ToastKind::Success.background(), Color32::from_rgb(0xD1, 0xFA, 0xE5));
    }
}
