use crate::error::AudioError;
use crate::music::Waveform;

/// Opaque voice id handed out by an [`AudioBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoiceHandle(pub usize);

/// Fixed-frequency tone generator driven only through amplitude ramps.
pub trait AudioBackend {
    /// Create a continuously running, initially silent voice.
    fn create_voice(&mut self, waveform: Waveform, frequency_hz: f32)
        -> Result<VoiceHandle, AudioError>;

    /// Linearly ramp `voice` to `level` over `ramp_sec`, starting now.
    fn set_amplitude(&mut self, voice: VoiceHandle, level: f32, ramp_sec: f32);
}
