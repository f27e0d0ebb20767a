//! Walls plus the light source, advanced and drawn once per frame.

use rand::Rng;

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{FrameSize, Surface};
use crate::geometry::{segment_of, Segment};
use crate::light::LightSource;
use crate::scan::{scan_into, Hit};
use crate::wall::{RadialBounds, Wall};

pub struct Scene {
    pub walls: Vec<Wall>,
    pub light: LightSource,
    wall_span: f32,
    min_radius: f32,
    // per-frame scratch, reused to keep the steady-state loop allocation free
    segments: Vec<Segment>,
    hits: Vec<Option<Hit>>,
}

impl Scene {
    /// Random walls spawned for `frame`, with the source at its center.
    pub fn new(config: &SceneConfig, frame: FrameSize, rng: &mut impl Rng) -> Self {
        let max_radius = frame.max_visible_radius();
        let walls = (0..config.wall_count)
            .map(|_| Wall::random(rng, config, max_radius))
            .collect();
        Self::with_walls(config, frame, walls)
    }

    pub fn with_walls(config: &SceneConfig, frame: FrameSize, walls: Vec<Wall>) -> Self {
        let light = LightSource::new(frame.center(), config.ray_step_degrees);
        Self {
            segments: Vec::with_capacity(walls.len()),
            hits: Vec::with_capacity(light.rays().len()),
            walls,
            light,
            wall_span: config.wall_span,
            min_radius: config.min_radius,
        }
    }

    #[inline]
    pub fn bounds(&self, frame: FrameSize) -> RadialBounds {
        RadialBounds {
            min: self.min_radius,
            max: frame.max_visible_radius(),
        }
    }

    /// Advance every wall one frame and pin the source to the frame center.
    pub fn advance(&mut self, frame: FrameSize) {
        let bounds = self.bounds(frame);
        for wall in &mut self.walls {
            wall.advance(bounds);
        }
        self.light.move_to(frame.center());
    }

    /// Current wall segments around the source.
    pub fn segments(&mut self) -> &[Segment] {
        let center = self.light.position();
        let span = self.wall_span;
        self.segments.clear();
        self.segments
            .extend(self.walls.iter().map(|w| segment_of(w, center, span)));
        &self.segments
    }

    /// Nearest hit for every ray, in fan order.
    pub fn cast(&mut self) -> &[Option<Hit>] {
        self.segments();
        scan_into(&self.light, &self.segments, &mut self.hits);
        &self.hits
    }

    pub fn draw_walls(&mut self, surface: &mut impl Surface) {
        self.segments();
        for s in &self.segments {
            surface.draw_line(s.a, s.b, INK);
        }
    }

    /// The source dot plus a short stub along each ray direction.
    pub fn draw_source(&self, surface: &mut impl Surface) {
        let origin = self.light.position();
        surface.draw_circle(origin, SOURCE_DOT_DIAMETER / 2.0, INK);
        for ray in self.light.rays() {
            surface.draw_line(origin, origin + ray.direction() * RAY_STUB_LENGTH, INK);
        }
    }

    /// Lines from the source to each ray's latest hit (see [`Scene::cast`]).
    pub fn draw_hits(&self, surface: &mut impl Surface) {
        let origin = self.light.position();
        let color = INK.with_alpha(HIT_ALPHA);
        for hit in self.hits.iter().flatten() {
            surface.draw_line(origin, hit.point, color);
        }
    }
}
