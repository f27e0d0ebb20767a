use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use lightfan_core::{AudioBackend, AudioError, VoiceHandle, Waveform};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::synth::{Synth, VoiceMessage};

/// Frame-loop side of the native audio path.
///
/// Voice state lives entirely in the cpal callback; this end only sends
/// [`VoiceMessage`]s. Without an output device it keeps accepting calls and
/// plays nothing.
pub struct NativeAudio {
    tx: Sender<VoiceMessage>,
    next_id: usize,
    _stream: Option<cpal::Stream>,
}

impl NativeAudio {
    pub fn start() -> Self {
        let (tx, rx) = mpsc::channel();
        let stream = match open_stream(rx) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[audio] output disabled: {e:#}");
                None
            }
        };
        Self {
            tx,
            next_id: 0,
            _stream: stream,
        }
    }

    fn send(&self, msg: VoiceMessage) {
        // receiver is gone when no stream could be opened
        _ = self.tx.send(msg);
    }
}

impl AudioBackend for NativeAudio {
    fn create_voice(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
    ) -> Result<VoiceHandle, AudioError> {
        let id = self.next_id;
        self.next_id += 1;
        self.send(VoiceMessage::Create {
            id,
            waveform,
            frequency_hz,
        });
        Ok(VoiceHandle(id))
    }

    fn set_amplitude(&mut self, voice: VoiceHandle, level: f32, ramp_sec: f32) {
        self.send(VoiceMessage::SetAmplitude {
            id: voice.0,
            level,
            ramp_sec,
        });
    }
}

fn open_stream(rx: Receiver<VoiceMessage>) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no output device"))?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    log::info!(
        "[audio] {} Hz, {} channels, {:?}",
        sample_rate,
        channels,
        config.sample_format()
    );
    let synth = Synth::new(sample_rate);

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &config.into(), channels, rx, synth)?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &config.into(), channels, rx, synth)?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &config.into(), channels, rx, synth)?
        }
        other => anyhow::bail!("unsupported sample format {other:?}"),
    };
    stream.play()?;
    Ok(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    rx: Receiver<VoiceMessage>,
    mut synth: Synth,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let err_fn = |err| log::error!("audio stream error: {err}");
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            while let Ok(msg) = rx.try_recv() {
                synth.apply(msg);
            }
            for frame in data.chunks_mut(channels.max(1)) {
                let value = T::from_sample(synth.next_sample());
                for sample in frame.iter_mut() {
                    *sample = value;
                }
            }
        },
        err_fn,
        None,
    )
}
