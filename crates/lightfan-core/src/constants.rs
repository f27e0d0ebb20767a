use crate::draw::Color;

// Shared scene/audio tuning constants used by both web and native frontends.

// Scene population
pub const WALL_COUNT: usize = 25;
pub const RAY_STEP_DEGREES: f32 = 0.25; // 1440 rays around the source

// Wall geometry
pub const WALL_SPAN_RADIANS: f32 = 0.1; // chord from angle to angle + span
pub const MIN_RADIUS: f32 = 50.0; // lower reflecting bound
pub const INITIAL_RADIUS_MIN: f32 = 100.0; // walls spawn between this and the visible radius

// Per-frame motion ranges, sampled once per wall
pub const ANGULAR_VELOCITY_RANGE: (f32, f32) = (0.005, 0.015); // radians per frame
pub const RADIAL_VELOCITY_RANGE: (f32, f32) = (0.2, 0.5); // units per frame

// Light source drawing
pub const SOURCE_DOT_DIAMETER: f32 = 1.0;
pub const RAY_STUB_LENGTH: f32 = 2.0;

// Palette
pub const BACKGROUND: Color = Color::rgb(245, 245, 235); // very light beige
pub const INK: Color = Color::rgb(38, 38, 38);
pub const HIT_ALPHA: u8 = 100;

// Title text
pub const TITLE_FONT_FAMILY: &str = "Georgia";
pub const TITLE_FONT_PX: f32 = 32.0;
pub const TITLE_TOP_PX: f32 = 20.0;

// Tone plan
pub const NOTE_INTERVAL_SEC: f32 = 1.0; // offset between consecutive notes
pub const NOTE_LEVEL: f32 = 0.5;
pub const NOTE_ATTACK_SEC: f32 = 0.1;
pub const NOTE_RELEASE_SEC: f32 = 0.5;

// Pitch reference
pub const SCALE_OCTAVE: i32 = 4; // tonic octave for resolved scales

pub const SCALE_NAMES: &[&str] = &[
    "C major",
    "D minor",
    "E minor",
    "F major",
    "G major",
    "A minor",
    "B diminished",
];
