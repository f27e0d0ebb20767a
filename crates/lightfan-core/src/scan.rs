//! Nearest-hit search of every ray against every wall segment.
//!
//! Brute force, O(rays x walls) per call, with nothing carried between frames.

use glam::Vec2;

use crate::geometry::{intersect, Segment};
use crate::light::LightSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub point: Vec2,
    pub distance: f32,
    /// Index into the segment slice that produced this hit.
    pub wall: usize,
}

/// Closest hit along one ray. Ties keep the earliest segment.
pub fn nearest_hit(origin: Vec2, direction: Vec2, segments: &[Segment]) -> Option<Hit> {
    let mut closest: Option<Hit> = None;
    let mut record = f32::INFINITY;
    for (wall, segment) in segments.iter().enumerate() {
        if let Some(point) = intersect(segment, origin, direction) {
            let distance = origin.distance(point);
            if distance < record {
                record = distance;
                closest = Some(Hit {
                    point,
                    distance,
                    wall,
                });
            }
        }
    }
    closest
}

/// One entry per ray, in fan order.
pub fn scan(source: &LightSource, segments: &[Segment]) -> Vec<Option<Hit>> {
    let mut out = Vec::with_capacity(source.rays().len());
    scan_into(source, segments, &mut out);
    out
}

/// Same as [`scan`] but reuses `out`, which is cleared first.
pub fn scan_into(source: &LightSource, segments: &[Segment], out: &mut Vec<Option<Hit>>) {
    out.clear();
    let origin = source.position();
    out.extend(
        source
            .rays()
            .iter()
            .map(|ray| nearest_hit(origin, ray.direction(), segments)),
    );
}
