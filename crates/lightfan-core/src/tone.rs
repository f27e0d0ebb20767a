use std::time::Duration;

use crate::constants::{NOTE_ATTACK_SEC, NOTE_INTERVAL_SEC, NOTE_LEVEL, NOTE_RELEASE_SEC};
use crate::error::ConfigError;

/// Timing and levels for the scale arpeggio.
///
/// - `interval_sec`: offset between consecutive note onsets
/// - `level`: target amplitude of a sounding note
/// - `attack_sec`: ramp time up to `level`
/// - `release_sec`: ramp time back down to silence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonePlan {
    pub interval_sec: f32,
    pub level: f32,
    pub attack_sec: f32,
    pub release_sec: f32,
}

impl Default for TonePlan {
    fn default() -> Self {
        Self {
            interval_sec: NOTE_INTERVAL_SEC,
            level: NOTE_LEVEL,
            attack_sec: NOTE_ATTACK_SEC,
            release_sec: NOTE_RELEASE_SEC,
        }
    }
}

impl TonePlan {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.interval_sec > 0.0) {
            return Err(ConfigError::NoteInterval(self.interval_sec));
        }
        for (name, value) in [
            ("note level", self.level),
            ("attack", self.attack_sec),
            ("release", self.release_sec),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

/// Message for the audio side: ramp `voice` to `level` over `ramp_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmplitudeCommand {
    pub voice: usize,
    pub level: f32,
    pub ramp_sec: f32,
}

/// Cooperative timer queue that walks the scale voices one note at a time.
///
/// Step `k` is due at `k * interval_sec`. Each step fades the previous voice and
/// raises voice `k % voices`, so the notes sound in order at fixed offsets and
/// the sequence wraps around forever. Call `tick` once per frame.
pub struct ToneScheduler {
    voices: usize,
    plan: TonePlan,
    elapsed: f64,
    next_step: u64,
}

impl ToneScheduler {
    pub fn new(voices: usize, plan: TonePlan) -> Self {
        Self {
            voices,
            plan,
            elapsed: 0.0,
            next_step: 0,
        }
    }

    #[inline]
    pub fn plan(&self) -> &TonePlan {
        &self.plan
    }

    /// Voice raised by the most recent step, if any step has fired.
    pub fn current_voice(&self) -> Option<usize> {
        if self.voices == 0 || self.next_step == 0 {
            return None;
        }
        Some(((self.next_step - 1) % self.voices as u64) as usize)
    }

    /// Advance by `dt`, pushing the commands of every step that came due.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<AmplitudeCommand>) {
        if self.voices == 0 {
            return;
        }
        self.elapsed += dt.as_secs_f64();
        let interval = self.plan.interval_sec as f64;
        while self.elapsed >= self.next_step as f64 * interval {
            self.fire_step(out);
        }
    }

    fn fire_step(&mut self, out: &mut Vec<AmplitudeCommand>) {
        let n = self.voices as u64;
        if let Some(previous) = self.current_voice() {
            out.push(AmplitudeCommand {
                voice: previous,
                level: 0.0,
                ramp_sec: self.plan.release_sec,
            });
        }
        let voice = (self.next_step % n) as usize;
        log::debug!("[tone] step {} -> voice {}", self.next_step, voice);
        out.push(AmplitudeCommand {
            voice,
            level: self.plan.level,
            ramp_sec: self.plan.attack_sec,
        });
        self.next_step += 1;
    }
}
