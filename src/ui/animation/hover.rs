//! Hover and pulse animations using iced_anim
//!
//! Only one card can be hovered at a time, so `HoverAnimations` tracks the
//! hovered card and the one fading out, nothing else.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Card hover transition, matching a 300ms ease-in-out
const HOVER_DURATION: Duration = Duration::from_millis(300);

/// Fade of the now-playing pulse when playback starts or stops
const PULSE_FADE: Duration = Duration::from_millis(400);

/// One pulse cycle of the now-playing badge
const PULSE_PERIOD: Duration = Duration::from_secs(2);

fn hover_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(HOVER_DURATION)
}

/// Exclusive hover state for a set of keyed items
///
/// With animations disabled, progress jumps straight to its target.
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
    enabled: bool,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new(enabled: bool) -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
            enabled,
        }
    }

    /// Animation that starts at `from` and heads to `to`
    fn towards(&self, from: f32, to: f32) -> Animated<f32> {
        if !self.enabled {
            return Animated::transition(to, hover_easing());
        }
        let mut anim = Animated::transition(from, hover_easing());
        anim.update(to.into());
        anim
    }

    /// Mark `key` as hovered, or nothing when `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // The old item fades out from wherever it currently is
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_anim = self.towards(current, 0.0);
            self.fading_key = Some(old);
        }

        if let Some(new_key) = key {
            // Re-entering the fading item picks up from its current value
            let start = if self.fading_key.as_ref() == Some(&new_key) {
                self.fading_key = None;
                *self.fading_anim.value()
            } else {
                0.0
            };
            self.active_anim = self.towards(start, 1.0);
            self.active_key = Some(new_key);
        }
    }

    /// Clear the hover of `key` if it is the hovered item
    pub fn leave(&mut self, key: &K) {
        if self.active_key.as_ref() == Some(key) {
            self.set_hovered(None);
        }
    }

    /// Interpolated value for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Advance both animations; call on every animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        if self.fading_key.is_some() && !self.fading_anim.is_animating() {
            self.fading_key = None;
        }
    }
}

/// Gentle pulse shown while a track is playing
///
/// The pulse itself is a function of wall time; `intensity` fades it in
/// when playback starts and out when it stops.
#[derive(Debug)]
pub struct Pulse {
    intensity: Animated<f32>,
    active: bool,
    enabled: bool,
}

impl Pulse {
    pub fn new(enabled: bool) -> Self {
        Self {
            intensity: Animated::transition(0.0, Easing::EASE.with_duration(PULSE_FADE)),
            active: false,
            enabled,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        let target = if active && self.enabled { 1.0 } else { 0.0 };
        self.intensity.update(target.into());
    }

    pub fn is_animating(&self) -> bool {
        self.intensity.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.intensity.tick(now);
    }

    /// Pulse strength (0.0 to 1.0) at `elapsed` since startup
    pub fn value(&self, elapsed: Duration) -> f32 {
        let intensity = *self.intensity.value();
        if intensity <= 0.0 {
            return 0.0;
        }
        let phase = elapsed.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
        let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        intensity * wave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new(false);
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_hovered(Some(1));
        assert_eq!(anims.progress(&1), 1.0);

        anims.set_hovered(Some(2));
        assert_eq!(anims.progress(&2), 1.0);
        assert_eq!(anims.progress(&1), 0.0);
    }

    #[test]
    fn test_disabled_hover_does_not_animate() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new(false);
        anims.set_hovered(Some(3));
        assert!(!anims.is_animating());
        anims.set_hovered(None);
        assert!(!anims.is_animating());
        assert_eq!(anims.progress(&3), 0.0);
    }

    #[test]
    fn test_leave_only_affects_hovered_key() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new(false);
        anims.set_hovered(Some(1));
        anims.leave(&2);
        assert_eq!(anims.progress(&1), 1.0);
        anims.leave(&1);
        assert_eq!(anims.progress(&1), 0.0);
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new(true);
        anims.set_hovered(Some(1));
        anims.tick(Instant::now() + Duration::from_millis(100));
        let p = anims.progress(&1);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_idle_pulse_is_flat() {
        let pulse = Pulse::new(true);
        assert_eq!(pulse.value(Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn test_disabled_pulse_stays_flat() {
        let mut pulse = Pulse::new(false);
        pulse.set_active(true);
        pulse.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(pulse.value(Duration::from_secs(1)), 0.0);
    }
}
