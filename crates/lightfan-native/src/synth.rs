// Audio-thread synth: persistent oscillators whose gains ramp toward targets
// sent from the frame loop. Kept free of `crate::` paths so host tests can
// `include!` it directly.

use lightfan_core::Waveform;
use std::f32::consts::TAU;

/// Messages from the frame loop to the audio callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VoiceMessage {
    Create {
        id: usize,
        waveform: Waveform,
        frequency_hz: f32,
    },
    SetAmplitude {
        id: usize,
        level: f32,
        ramp_sec: f32,
    },
}

#[derive(Clone, Debug)]
pub struct SynthVoice {
    wave: Waveform,
    phase: f32,     // radians
    phase_inc: f32, // radians per sample
    gain: f32,
    target: f32,
    gain_step: f32,
    ramp_remaining: u32,
}

impl SynthVoice {
    fn new(wave: Waveform, frequency_hz: f32, sample_rate: f32) -> Self {
        Self {
            wave,
            phase: 0.0,
            phase_inc: TAU * frequency_hz / sample_rate,
            gain: 0.0,
            target: 0.0,
            gain_step: 0.0,
            ramp_remaining: 0,
        }
    }

    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    fn ramp_to(&mut self, level: f32, ramp_samples: u32) {
        self.target = level;
        if ramp_samples == 0 {
            self.gain = level;
            self.ramp_remaining = 0;
        } else {
            self.gain_step = (level - self.gain) / ramp_samples as f32;
            self.ramp_remaining = ramp_samples;
        }
    }

    fn next_sample(&mut self) -> f32 {
        if self.ramp_remaining > 0 {
            self.gain += self.gain_step;
            self.ramp_remaining -= 1;
            if self.ramp_remaining == 0 {
                self.gain = self.target;
            }
        }
        let out = render_wave_sample(self.phase, self.wave) * self.gain;
        self.phase += self.phase_inc;
        if self.phase > TAU {
            self.phase -= TAU;
        }
        out
    }
}

pub struct Synth {
    sample_rate: f32,
    voices: Vec<SynthVoice>,
}

impl Synth {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    #[inline]
    pub fn voices(&self) -> &[SynthVoice] {
        &self.voices
    }

    pub fn apply(&mut self, msg: VoiceMessage) {
        match msg {
            VoiceMessage::Create {
                id,
                waveform,
                frequency_hz,
            } => {
                let voice = SynthVoice::new(waveform, frequency_hz, self.sample_rate);
                if id < self.voices.len() {
                    self.voices[id] = voice;
                } else if id == self.voices.len() {
                    self.voices.push(voice);
                } else {
                    log::warn!("[synth] voice id {} out of sequence", id);
                }
            }
            VoiceMessage::SetAmplitude {
                id,
                level,
                ramp_sec,
            } => {
                let ramp_samples = (ramp_sec.max(0.0) * self.sample_rate).round() as u32;
                if let Some(v) = self.voices.get_mut(id) {
                    v.ramp_to(level, ramp_samples);
                }
            }
        }
    }

    /// Mono mix of all voices, soft-clipped into -1..1.
    pub fn next_sample(&mut self) -> f32 {
        let mut mix = 0.0f32;
        for v in &mut self.voices {
            mix += v.next_sample();
        }
        mix.tanh()
    }
}

pub fn render_wave_sample(phase: f32, wave: Waveform) -> f32 {
    // phase 0..TAU mapped to 0..1
    let t = phase / TAU;
    let frac = t - t.floor();
    match wave {
        Waveform::Sine => phase.sin(),
        Waveform::Square => {
            if frac < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Saw => 2.0 * frac - 1.0,
        Waveform::Triangle => 1.0 - 4.0 * (frac - 0.5).abs(),
    }
}
