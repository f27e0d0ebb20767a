use crate::constants::*;
use crate::error::ConfigError;
use crate::music::{Scale, Waveform};
use crate::tone::TonePlan;

/// Everything a scene needs at construction time. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub wall_count: usize,
    pub ray_step_degrees: f32,
    pub wall_span: f32,
    pub min_radius: f32,
    pub initial_radius_min: f32,
    pub angular_velocity_range: (f32, f32),
    pub radial_velocity_range: (f32, f32),
    pub scale_names: Vec<&'static str>,
    pub voice_waveform: Waveform,
    pub tones: TonePlan,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wall_count: WALL_COUNT,
            ray_step_degrees: RAY_STEP_DEGREES,
            wall_span: WALL_SPAN_RADIANS,
            min_radius: MIN_RADIUS,
            initial_radius_min: INITIAL_RADIUS_MIN,
            angular_velocity_range: ANGULAR_VELOCITY_RANGE,
            radial_velocity_range: RADIAL_VELOCITY_RANGE,
            scale_names: SCALE_NAMES.to_vec(),
            voice_waveform: Waveform::Sine,
            tones: TonePlan::default(),
        }
    }
}

impl SceneConfig {
    /// Number of rays the fan will hold.
    #[inline]
    pub fn ray_count(&self) -> usize {
        (360.0 / self.ray_step_degrees).floor() as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison, so test for the valid range and negate.
        if !(self.ray_step_degrees > 0.0 && self.ray_step_degrees <= 360.0) {
            return Err(ConfigError::RayStep(self.ray_step_degrees));
        }
        if !(self.min_radius > 0.0) {
            return Err(ConfigError::MinRadius(self.min_radius));
        }
        if !(self.wall_span >= 0.0) {
            return Err(ConfigError::WallSpan(self.wall_span));
        }
        check_range("angular velocity", self.angular_velocity_range)?;
        check_range("radial velocity", self.radial_velocity_range)?;
        self.tones.validate()?;
        if self.scale_names.is_empty() {
            return Err(ConfigError::NoScales);
        }
        for name in &self.scale_names {
            Scale::parse(name).map_err(|source| ConfigError::Scale {
                name: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

fn check_range(name: &'static str, (lo, hi): (f32, f32)) -> Result<(), ConfigError> {
    if lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, lo, hi })
    }
}
