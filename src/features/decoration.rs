//! Decorative particle generation
//!
//! Particles are generated once from a random source and never change.
//! Their on-screen pose is a pure function of elapsed time, so the canvas
//! layer only needs the list and a clock.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;

/// Number of particles generated at startup
pub const PARTICLE_COUNT: usize = 45;

/// Pixels per rem when converting glyph sizes
pub const REM_PX: f32 = 16.0;

pub const HEARTS: &[&str] = &["💖", "💕", "💞", "💓", "💗", "❤️", "🩷"];
pub const FLOWERS: &[&str] = &["🌸", "🌺", "🌷", "🌼", "🌹", "🌻"];
pub const SPARKLES: &[&str] = &["✨", "🌟"];

/// Glyph category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Heart,
    Flower,
    Sparkle,
}

/// Animation style assigned to a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Falls from the top while swaying and spinning
    FallSwayRotate,
    /// Drifts upward slowly with a gentle wobble
    GentleFloat,
    /// Faster fall with wider sway, hearts only
    DynamicFall,
}

/// One decorative glyph with its randomized parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    pub kind: GlyphKind,
    /// Horizontal position as a fraction of the width (0.0 - 1.0)
    pub x: f32,
    /// Size multiplier (0.6 - 1.2)
    pub scale: f32,
    /// Base glyph size in rem (0.9 - 1.7)
    pub font_size_rem: f32,
    /// Peak opacity (0.5 - 0.9)
    pub opacity: f32,
    /// Initial rotation in degrees (0 - 360)
    pub rotation_deg: f32,
    pub duration: Duration,
    /// Start offset, always below 80% of `duration`
    pub delay: Duration,
    pub motion: Motion,
}

/// Where and how a particle is drawn at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal position as a fraction of the width
    pub x: f32,
    /// Vertical position as a fraction of the height (may leave 0..1)
    pub y: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Rendered glyph size in pixels
    pub size: f32,
    pub opacity: f32,
}

fn glyph_table() -> impl Iterator<Item = (&'static str, GlyphKind)> {
    HEARTS
        .iter()
        .map(|g| (*g, GlyphKind::Heart))
        .chain(FLOWERS.iter().map(|g| (*g, GlyphKind::Flower)))
        .chain(SPARKLES.iter().map(|g| (*g, GlyphKind::Sparkle)))
}

/// Generate `count` particles from `rng`
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    let glyphs: Vec<(&'static str, GlyphKind)> = glyph_table().collect();

    (0..count)
        .map(|_| {
            let scale = rng.random_range(0.6..1.2);
            let font_size_rem = rng.random_range(0.9..1.7);
            let (glyph, kind) = glyphs[rng.random_range(0..glyphs.len())];

            let (motion, duration_secs) = match kind {
                GlyphKind::Flower if rng.random_bool(0.5) => {
                    (Motion::GentleFloat, rng.random_range(12.0..19.0))
                }
                GlyphKind::Heart => (Motion::DynamicFall, rng.random_range(9.0..15.0)),
                _ => (Motion::FallSwayRotate, rng.random_range(10.0..18.0)),
            };

            let delay_secs = rng.random_range(0.0..duration_secs * 0.8);

            Particle {
                glyph,
                kind,
                x: rng.random_range(0.0..1.0),
                scale,
                font_size_rem,
                opacity: rng.random_range(0.5..0.9),
                rotation_deg: rng.random_range(0.0..360.0),
                duration: Duration::from_secs_f32(duration_secs),
                delay: Duration::from_secs_f32(delay_secs),
                motion,
            }
        })
        .collect()
}

/// Fade in over the first and out over the last tenth of a cycle
fn edge_fade(phase: f32) -> f32 {
    (phase / 0.1).min((1.0 - phase) / 0.1).clamp(0.0, 1.0)
}

impl Particle {
    /// Pose at `elapsed` since the field was created
    ///
    /// Returns `None` while the particle is still waiting out its delay.
    pub fn pose(&self, elapsed: Duration) -> Option<Pose> {
        let local = elapsed.checked_sub(self.delay)?.as_secs_f32();
        let duration = self.duration.as_secs_f32().max(f32::EPSILON);
        let phase = (local % duration) / duration;
        let initial = self.rotation_deg.to_radians();
        let size = self.font_size_rem * REM_PX * self.scale;

        let pose = match self.motion {
            Motion::FallSwayRotate => Pose {
                x: self.x + (phase * TAU * 2.0).sin() * 0.02,
                y: -0.1 + 1.2 * phase,
                rotation: initial + phase * TAU,
                size,
                opacity: self.opacity * edge_fade(phase),
            },
            Motion::GentleFloat => Pose {
                x: self.x + (phase * TAU).sin() * 0.03,
                y: 1.1 - 1.2 * phase,
                rotation: initial + (phase * TAU).sin() * 15f32.to_radians(),
                size: size * (1.0 + 0.05 * (phase * TAU * 2.0).sin()),
                opacity: self.opacity * edge_fade(phase),
            },
            Motion::DynamicFall => Pose {
                x: self.x + (phase * TAU * 3.0).sin() * 0.035,
                y: -0.1 + 1.2 * phase.powf(1.3),
                rotation: initial + phase * TAU * 1.5,
                size,
                opacity: self.opacity * edge_fade(phase),
            },
        };

        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(seed: u64) -> Vec<Particle> {
        generate(&mut StdRng::seed_from_u64(seed), PARTICLE_COUNT)
    }

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(sample(1).len(), PARTICLE_COUNT);
        assert!(generate(&mut StdRng::seed_from_u64(1), 0).is_empty());
    }

    #[test]
    fn test_parameters_within_ranges() {
        for seed in 0..20 {
            for p in sample(seed) {
                assert!((0.0..1.0).contains(&p.x));
                assert!((0.6..1.2).contains(&p.scale));
                assert!((0.9..1.7).contains(&p.font_size_rem));
                assert!((0.5..0.9).contains(&p.opacity));
                assert!((0.0..360.0).contains(&p.rotation_deg));
                assert!(p.delay.as_secs_f32() < p.duration.as_secs_f32() * 0.8 + 1e-3);
            }
        }
    }

    #[test]
    fn test_motion_matches_glyph_kind() {
        for seed in 0..20 {
            for p in sample(seed) {
                let secs = p.duration.as_secs_f32();
                match p.motion {
                    Motion::GentleFloat => {
                        assert_eq!(p.kind, GlyphKind::Flower);
                        assert!((12.0..=19.0).contains(&secs));
                    }
                    Motion::DynamicFall => {
                        assert_eq!(p.kind, GlyphKind::Heart);
                        assert!((9.0..=15.0).contains(&secs));
                    }
                    Motion::FallSwayRotate => {
                        assert_ne!(p.kind, GlyphKind::Heart);
                        assert!((10.0..=18.0).contains(&secs));
                    }
                }
            }
        }
    }

    #[test]
    fn test_glyph_belongs_to_its_kind() {
        for p in sample(7) {
            let table = match p.kind {
                GlyphKind::Heart => HEARTS,
                GlyphKind::Flower => FLOWERS,
                GlyphKind::Sparkle => SPARKLES,
            };
            assert!(table.contains(&p.glyph));
        }
    }

    #[test]
    fn test_same_seed_same_particles() {
        assert_eq!(sample(42), sample(42));
        assert_ne!(sample(42), sample(43));
    }

    #[test]
    fn test_pose_hidden_until_delay() {
        let mut p = sample(3).remove(0);
        p.delay = Duration::from_secs(2);
        assert!(p.pose(Duration::from_secs(1)).is_none());
        assert!(p.pose(Duration::from_secs(3)).is_some());
    }

    #[test]
    fn test_fall_moves_down_and_float_moves_up() {
        let mut p = sample(5).remove(0);
        p.delay = Duration::ZERO;
        p.duration = Duration::from_secs(10);

        p.motion = Motion::FallSwayRotate;
        let early = p.pose(Duration::from_secs(2)).unwrap();
        let late = p.pose(Duration::from_secs(8)).unwrap();
        assert!(late.y > early.y);

        p.motion = Motion::GentleFloat;
        let early = p.pose(Duration::from_secs(2)).unwrap();
        let late = p.pose(Duration::from_secs(8)).unwrap();
        assert!(late.y < early.y);
    }

    #[test]
    fn test_pose_repeats_each_cycle() {
        let mut p = sample(9).remove(0);
        p.delay = Duration::from_secs(1);
        p.duration = Duration::from_secs(10);
        let a = p.pose(Duration::from_secs(4)).unwrap();
        let b = p.pose(Duration::from_secs(14)).unwrap();
        assert!((a.y - b.y).abs() < 1e-4);
        assert!(a.opacity <= p.opacity);
    }
}
