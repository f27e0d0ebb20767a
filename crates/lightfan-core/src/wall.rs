use rand::Rng;
use std::f32::consts::TAU;

use crate::config::SceneConfig;

/// Reflecting bounds for a wall's radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialBounds {
    pub min: f32,
    pub max: f32,
}

/// A short chord on a circle around the scene center, spinning and breathing.
#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub angle: f32,
    pub radius: f32,
    pub angular_velocity: f32,
    pub radial_velocity: f32,
}

impl Wall {
    pub fn new(angle: f32, radius: f32, angular_velocity: f32, radial_velocity: f32) -> Self {
        Self {
            angle,
            radius,
            angular_velocity,
            radial_velocity,
        }
    }

    /// Random angle, radius in `[initial_radius_min, max_radius]` and velocities
    /// from the configured ranges.
    pub fn random(rng: &mut impl Rng, config: &SceneConfig, max_radius: f32) -> Self {
        let angle = sample(rng, 0.0, TAU);
        let radius = sample(rng, config.initial_radius_min, max_radius);
        let (w_lo, w_hi) = config.angular_velocity_range;
        let (r_lo, r_hi) = config.radial_velocity_range;
        Self {
            angle,
            radius,
            angular_velocity: sample(rng, w_lo, w_hi),
            radial_velocity: sample(rng, r_lo, r_hi),
        }
    }

    /// Advance one frame. Leaving the bounds flips the radial direction; the
    /// radius itself is not clamped, so it may overshoot by one step.
    pub fn advance(&mut self, bounds: RadialBounds) {
        self.angle += self.angular_velocity;
        self.radius += self.radial_velocity;
        if self.radius > bounds.max || self.radius < bounds.min {
            self.radial_velocity = -self.radial_velocity;
        }
    }

    pub fn advance_frames(&mut self, bounds: RadialBounds, frames: u32) {
        for _ in 0..frames {
            self.advance(bounds);
        }
    }
}

// Uniform in [lo, hi). Inverted ranges are allowed: a small window puts the
// visible radius below the spawn minimum.
#[inline]
fn sample(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}
