//! Light source and its fixed fan of rays.

use glam::Vec2;

/// A ray direction. The origin is always the owning [`LightSource`]'s position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    direction: Vec2,
}

impl Ray {
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        Self {
            direction: Vec2::from_angle(radians),
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Aim at `target` as seen from `origin`. Aiming at the origin itself leaves a
    /// zero direction, which never intersects anything.
    #[inline]
    pub fn look_at(&mut self, origin: Vec2, target: Vec2) {
        self.direction = (target - origin).normalize_or_zero();
    }
}

/// `floor(360 / step_degrees)` rays, evenly spaced from 0°.
pub fn create_fan(step_degrees: f32) -> Vec<Ray> {
    let count = (360.0 / step_degrees).floor() as usize;
    (0..count)
        .map(|i| Ray::from_angle((i as f32 * step_degrees).to_radians()))
        .collect()
}

#[derive(Clone, Debug)]
pub struct LightSource {
    position: Vec2,
    rays: Vec<Ray>,
}

impl LightSource {
    pub fn new(position: Vec2, step_degrees: f32) -> Self {
        Self {
            position,
            rays: create_fan(step_degrees),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Moves the origin shared by every ray.
    #[inline]
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Re-aim ray `index` at `target`. Out-of-range indices are ignored.
    pub fn retarget(&mut self, index: usize, target: Vec2) {
        let origin = self.position;
        if let Some(ray) = self.rays.get_mut(index) {
            ray.look_at(origin, target);
        }
    }
}
