//! Passthrough domain: standing-platform tracking and timed collision suppression.

use std::time::Duration;

use bevy::prelude::*;

/// Default time a dropped-through platform stays non-solid.
pub const DEFAULT_DROP_THROUGH_SECS: f32 = 0.35;

#[derive(Debug, Clone)]
struct SuppressionWindow {
    platform: Entity,
    timer: Timer,
}

/// Lets an agent drop through the one-way platform it is standing on.
///
/// Only this component's own methods touch the standing-platform record. A
/// drop suppresses collision with that one platform instance and always
/// restores it after the drop duration, even if the agent lands on the same
/// platform again before the window closes.
#[derive(Component, Debug, Clone)]
pub struct PlatformPassthrough {
    standing_on: Option<Entity>,
    drop_duration: Duration,
    windows: Vec<SuppressionWindow>,
}

impl Default for PlatformPassthrough {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(DEFAULT_DROP_THROUGH_SECS))
    }
}

impl PlatformPassthrough {
    pub fn new(drop_duration: Duration) -> Self {
        Self {
            standing_on: None,
            drop_duration,
            windows: Vec::new(),
        }
    }

    pub fn standing_on(&self) -> Option<Entity> {
        self.standing_on
    }

    /// Contact with a one-way platform began.
    pub fn on_grounded_on(&mut self, platform: Entity) {
        self.standing_on = Some(platform);
    }

    /// Contact with a one-way platform ended.
    pub fn on_left_platform(&mut self, platform: Entity) {
        if self.standing_on == Some(platform) {
            self.standing_on = None;
        }
    }

    /// Start ignoring the current standing platform. Returns the platform, or
    /// `None` (and does nothing) when the agent is not on one.
    pub fn drop_through_current_platform(&mut self) -> Option<Entity> {
        let platform = self.standing_on?;
        self.windows.push(SuppressionWindow {
            platform,
            timer: Timer::new(self.drop_duration, TimerMode::Once),
        });
        Some(platform)
    }

    pub fn is_suppressed(&self, platform: Entity) -> bool {
        self.windows.iter().any(|w| w.platform == platform)
    }

    pub fn suppressed_platforms(&self) -> impl Iterator<Item = Entity> + '_ {
        self.windows.iter().map(|w| w.platform)
    }

    /// Advance open windows and return the platforms whose window closed on
    /// this call. Each drop is restored exactly once.
    pub fn tick(&mut self, delta: Duration) -> Vec<Entity> {
        let mut restored = Vec::new();
        self.windows.retain_mut(|window| {
            window.timer.tick(delta);
            if window.timer.remaining().is_zero() {
                restored.push(window.platform);
                false
            } else {
                true
            }
        });
        restored
    }
}
