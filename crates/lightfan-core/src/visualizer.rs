use rand::prelude::*;
use std::time::Duration;

use crate::audio::{AudioBackend, VoiceHandle};
use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{FrameSize, Surface, TextAlign, TextStyle};
use crate::error::Error;
use crate::music::{choose_scale, Scale};
use crate::scene::Scene;
use crate::tone::{AmplitudeCommand, ToneScheduler};

/// Single owner of the scene, the chosen scale and the tone schedule.
///
/// Typical usage:
/// - Construct with `Visualizer::new(config, frame, seed, &mut audio)`
/// - Call `frame(dt, &mut surface, &mut audio)` from the platform's animation loop
pub struct Visualizer {
    pub scene: Scene,
    pub scale: Scale,
    voices: Vec<VoiceHandle>,
    tones: ToneScheduler,
    commands: Vec<AmplitudeCommand>,
    title_style: TextStyle,
}

impl Visualizer {
    /// Validate `config`, pick a scale, spawn walls and create one voice per note.
    pub fn new(
        config: SceneConfig,
        frame: FrameSize,
        seed: u64,
        audio: &mut impl AudioBackend,
    ) -> Result<Self, Error> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let scale = choose_scale(&mut rng, &config.scale_names)?;
        log::info!("[scale] {} -> {}", scale.name, scale.note_names());

        let voices = scale
            .notes
            .iter()
            .map(|note| -> Result<VoiceHandle, Error> {
                let voice = audio.create_voice(config.voice_waveform, note.frequency_hz())?;
                audio.set_amplitude(voice, 0.0, 0.0);
                log::debug!("[voice] {:?} {} {:.2} Hz", voice, note, note.frequency_hz());
                Ok(voice)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let scene = Scene::new(&config, frame, &mut rng);
        log::info!(
            "[scene] seed={} walls={} rays={} frame={}x{}",
            seed,
            scene.walls.len(),
            scene.light.rays().len(),
            frame.width,
            frame.height
        );

        Ok(Self {
            scene,
            scale,
            tones: ToneScheduler::new(voices.len(), config.tones),
            voices,
            commands: Vec::new(),
            title_style: TextStyle {
                size_px: TITLE_FONT_PX,
                family: TITLE_FONT_FAMILY,
                align: TextAlign::CenterTop,
                color: INK,
            },
        })
    }

    #[inline]
    pub fn voices(&self) -> &[VoiceHandle] {
        &self.voices
    }

    /// One animation frame: move walls, draw them, cast rays, draw hits, then
    /// advance the tone schedule by `dt`.
    pub fn frame(
        &mut self,
        dt: Duration,
        surface: &mut impl Surface,
        audio: &mut impl AudioBackend,
    ) {
        let size = surface.size();
        surface.clear(BACKGROUND);
        surface.draw_text(
            &self.scale.name,
            glam::Vec2::new(size.width / 2.0, TITLE_TOP_PX),
            &self.title_style,
        );

        self.scene.advance(size);
        self.scene.draw_walls(surface);
        self.scene.draw_source(surface);
        self.scene.cast();
        self.scene.draw_hits(surface);

        self.commands.clear();
        self.tones.tick(dt, &mut self.commands);
        for cmd in &self.commands {
            if let Some(&voice) = self.voices.get(cmd.voice) {
                audio.set_amplitude(voice, cmd.level, cmd.ramp_sec);
            }
        }
    }
}
