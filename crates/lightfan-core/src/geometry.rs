//! Wall segments and the ray/segment intersection kernel.

use glam::Vec2;

use crate::wall::Wall;

/// Finite line segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    /// Point at parameter `t` along `a -> b`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.a + (self.b - self.a) * t
    }
}

/// Chord of a wall: from `angle` to `angle + span` at the wall's radius around `center`.
#[inline]
pub fn segment_of(wall: &Wall, center: Vec2, span: f32) -> Segment {
    let a = center + Vec2::from_angle(wall.angle) * wall.radius;
    let b = center + Vec2::from_angle(wall.angle + span) * wall.radius;
    Segment { a, b }
}

/// Intersect the line through `origin` along `direction` with `segment`.
///
/// Returns the hit point when it lies strictly inside the segment (`0 < t < 1`,
/// endpoints excluded) and strictly ahead of the origin (`u > 0`). The ray has no
/// maximum length. Parallel or coincident lines (`den == 0`, compared exactly)
/// never hit, which also covers a zero `direction`.
pub fn intersect(segment: &Segment, origin: Vec2, direction: Vec2) -> Option<Vec2> {
    let (x1, y1) = (segment.a.x, segment.a.y);
    let (x2, y2) = (segment.b.x, segment.b.y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + direction.x, origin.y + direction.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
    (t > 0.0 && t < 1.0 && u > 0.0).then(|| segment.point_at(t))
}
