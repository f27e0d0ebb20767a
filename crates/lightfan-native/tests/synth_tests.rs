// Host-side tests for the audio-thread synth and the GPU line batch.
// The front-end is a binary crate, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod synth {
    include!("../src/synth.rs");
}
mod surface {
    include!("../src/surface.rs");
}

use glam::Vec2;
use lightfan_core::{Color, FrameSize, Surface, TextAlign, TextStyle, Waveform};
use std::f32::consts::TAU;
use surface::LineBatch;
use synth::*;

const SR: f32 = 1000.0;

fn synth_with(voices: &[(Waveform, f32)]) -> Synth {
    let mut synth = Synth::new(SR);
    for (id, &(waveform, frequency_hz)) in voices.iter().enumerate() {
        synth.apply(VoiceMessage::Create {
            id,
            waveform,
            frequency_hz,
        });
    }
    synth
}

#[test]
fn new_voices_start_silent() {
    let mut synth = synth_with(&[(Waveform::Sine, 100.0), (Waveform::Saw, 150.0)]);
    assert_eq!(synth.voices().len(), 2);
    for _ in 0..100 {
        assert_eq!(synth.next_sample(), 0.0);
    }
}

#[test]
fn amplitude_ramps_linearly_then_holds() {
    let mut synth = synth_with(&[(Waveform::Sine, 100.0)]);
    synth.apply(VoiceMessage::SetAmplitude {
        id: 0,
        level: 0.5,
        ramp_sec: 0.01,
    });
    for _ in 0..5 {
        synth.next_sample();
    }
    assert!((synth.voices()[0].gain() - 0.25).abs() < 1e-5);
    for _ in 0..5 {
        synth.next_sample();
    }
    assert_eq!(synth.voices()[0].gain(), 0.5);
    for _ in 0..50 {
        synth.next_sample();
    }
    assert_eq!(synth.voices()[0].gain(), 0.5);
}

#[test]
fn zero_ramp_jumps_immediately() {
    let mut synth = synth_with(&[(Waveform::Square, 50.0)]);
    synth.apply(VoiceMessage::SetAmplitude {
        id: 0,
        level: 0.3,
        ramp_sec: 0.0,
    });
    assert_eq!(synth.voices()[0].gain(), 0.3);
}

#[test]
fn fade_starts_from_current_gain() {
    let mut synth = synth_with(&[(Waveform::Triangle, 80.0)]);
    synth.apply(VoiceMessage::SetAmplitude {
        id: 0,
        level: 0.5,
        ramp_sec: 0.0,
    });
    synth.apply(VoiceMessage::SetAmplitude {
        id: 0,
        level: 0.0,
        ramp_sec: 0.1,
    });
    for _ in 0..50 {
        synth.next_sample();
    }
    assert!((synth.voices()[0].gain() - 0.25).abs() < 1e-4);
    for _ in 0..50 {
        synth.next_sample();
    }
    assert_eq!(synth.voices()[0].gain(), 0.0);
}

#[test]
fn create_out_of_sequence_is_ignored() {
    let mut synth = Synth::new(SR);
    synth.apply(VoiceMessage::Create {
        id: 3,
        waveform: Waveform::Sine,
        frequency_hz: 440.0,
    });
    assert!(synth.voices().is_empty());
    // unknown ids are dropped too
    synth.apply(VoiceMessage::SetAmplitude {
        id: 9,
        level: 1.0,
        ramp_sec: 0.0,
    });
    assert_eq!(synth.next_sample(), 0.0);
}

#[test]
fn mix_is_soft_clipped() {
    let mut synth = synth_with(&[
        (Waveform::Square, 10.0),
        (Waveform::Square, 10.0),
        (Waveform::Square, 10.0),
    ]);
    for id in 0..3 {
        synth.apply(VoiceMessage::SetAmplitude {
            id,
            level: 1.0,
            ramp_sec: 0.0,
        });
    }
    for _ in 0..500 {
        let s = synth.next_sample();
        assert!(s.abs() < 1.0, "{s}");
        assert!(s.abs() > 0.99);
    }
}

#[test]
fn waveform_shapes() {
    let quarter = TAU / 4.0;
    assert!((render_wave_sample(quarter, Waveform::Sine) - 1.0).abs() < 1e-6);
    assert_eq!(render_wave_sample(quarter, Waveform::Square), 1.0);
    assert_eq!(render_wave_sample(3.0 * quarter, Waveform::Square), -1.0);
    assert!((render_wave_sample(0.0, Waveform::Saw) + 1.0).abs() < 1e-6);
    assert!((render_wave_sample(TAU / 2.0, Waveform::Saw)).abs() < 1e-6);
    assert!((render_wave_sample(TAU / 2.0, Waveform::Triangle) - 1.0).abs() < 1e-6);
    assert!((render_wave_sample(0.0, Waveform::Triangle) + 1.0).abs() < 1e-6);
    for wave in [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Saw,
        Waveform::Triangle,
    ] {
        for i in 0..64 {
            let v = render_wave_sample(i as f32 / 64.0 * TAU, wave);
            assert!((-1.0..=1.0).contains(&v), "{wave:?} out of range: {v}");
        }
    }
}

#[test]
fn line_batch_collects_line_pairs() {
    let mut batch = LineBatch::new(FrameSize::new(640.0, 480.0));
    batch.clear(Color::rgb(245, 245, 235));
    batch.draw_line(Vec2::ZERO, Vec2::new(10.0, 0.0), Color::rgb(255, 0, 0));
    assert_eq!(batch.vertices().len(), 2);
    assert_eq!(batch.vertices()[1].pos, [10.0, 0.0]);
    assert_eq!(batch.vertices()[0].color, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(batch.clear_color(), Color::rgb(245, 245, 235));

    batch.draw_circle(Vec2::new(5.0, 5.0), 0.5, Color::rgb(0, 0, 0));
    // small circles use the minimum polyline resolution
    assert_eq!(batch.vertices().len(), 2 + 16);

    batch.clear(Color::rgb(0, 0, 0));
    assert!(batch.vertices().is_empty());
}

#[test]
fn line_batch_reports_title_changes_once() {
    let mut batch = LineBatch::new(FrameSize::new(640.0, 480.0));
    let style = TextStyle {
        size_px: 32.0,
        family: "Georgia",
        align: TextAlign::CenterTop,
        color: Color::rgb(0, 0, 0),
    };
    batch.draw_text("D minor", Vec2::ZERO, &style);
    assert_eq!(batch.take_title(), Some("D minor"));
    batch.draw_text("D minor", Vec2::ZERO, &style);
    assert_eq!(batch.take_title(), None);
    batch.set_size(FrameSize::new(100.0, 50.0));
    assert_eq!(batch.size(), FrameSize::new(100.0, 50.0));
}
