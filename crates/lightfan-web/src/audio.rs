use lightfan_core::{AudioBackend, AudioError, VoiceHandle, Waveform};
use web_sys as web;

struct WebVoice {
    _osc: web::OscillatorNode,
    gain: web::GainNode,
}

/// One running oscillator per voice, each behind its own gain node.
pub struct WebAudio {
    ctx: web::AudioContext,
    master: web::GainNode,
    voices: Vec<WebVoice>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| AudioError(format!("{} GainNode error: {:?}", label, e)))?;
    g.gain().set_value(value);
    Ok(g)
}

impl WebAudio {
    pub fn new(ctx: web::AudioContext) -> Result<Self, AudioError> {
        let master = create_gain(&ctx, 1.0, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| AudioError(format!("master connect error: {:?}", e)))?;
        Ok(Self {
            ctx,
            master,
            voices: Vec::new(),
        })
    }

    #[inline]
    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }
}

impl AudioBackend for WebAudio {
    fn create_voice(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
    ) -> Result<VoiceHandle, AudioError> {
        let osc = web::OscillatorNode::new(&self.ctx)
            .map_err(|e| AudioError(format!("OscillatorNode error: {:?}", e)))?;
        match waveform {
            Waveform::Sine => osc.set_type(web::OscillatorType::Sine),
            Waveform::Square => osc.set_type(web::OscillatorType::Square),
            Waveform::Saw => osc.set_type(web::OscillatorType::Sawtooth),
            Waveform::Triangle => osc.set_type(web::OscillatorType::Triangle),
        }
        osc.frequency().set_value(frequency_hz);
        let gain = create_gain(&self.ctx, 0.0, "Voice gain")?;
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.master);
        osc.start_with_when(0.0)
            .map_err(|e| AudioError(format!("oscillator start error: {:?}", e)))?;
        self.voices.push(WebVoice { _osc: osc, gain });
        Ok(VoiceHandle(self.voices.len() - 1))
    }

    fn set_amplitude(&mut self, voice: VoiceHandle, level: f32, ramp_sec: f32) {
        let Some(v) = self.voices.get(voice.0) else {
            return;
        };
        let param = v.gain.gain();
        let now = self.ctx.current_time();
        // restart the ramp from the current value
        _ = param.cancel_scheduled_values(now);
        _ = param.set_value_at_time(param.value(), now);
        _ = param.linear_ramp_to_value_at_time(level, now + ramp_sec as f64);
    }
}
