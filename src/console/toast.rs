//! Short-lived "Copied" acknowledgement drawn near copied text.

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(1500);
pub const DEFAULT_TOAST_FADE_START: Duration = Duration::from_millis(1000);

/// A fading label that expires after a fixed lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyToast {
    pub text: String,
    pub x: f32,
    pub y: f32,
    age: Duration,
    duration: Duration,
    fade_start: Duration,
}

impl CopyToast {
    pub fn new(text: impl Into<String>, x: f32, y: f32, duration: Duration, fade_start: Duration) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            age: Duration::ZERO,
            duration,
            fade_start: fade_start.min(duration),
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.age = self.age.saturating_add(dt);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.duration
    }

    /// Opacity in `0.0..=1.0`: opaque until the fade starts, then linear.
    pub fn opacity(&self) -> f32 {
        if self.age <= self.fade_start {
            return 1.0;
        }
        let fade = self.duration.saturating_sub(self.fade_start).as_secs_f32();
        if fade <= 0.0 {
            return 0.0;
        }
        let into = (self.age - self.fade_start).as_secs_f32();
        (1.0 - into / fade).clamp(0.0, 1.0)
    }
}
