// Host-side tests for the scale resolver and pitch helpers.

use lightfan_core::{choose_scale, midi_to_hz, PitchClass, Scale, ScaleError, ScaleKind, SCALE_NAMES};
use rand::prelude::*;

#[test]
fn midi_to_hz_matches_a4_and_octave() {
    let a4 = midi_to_hz(69.0);
    assert!((a4 - 440.0).abs() < 1e-4);
    let a5 = midi_to_hz(81.0);
    assert!((a5 - 880.0).abs() < 1e-3);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);
}

#[test]
fn midi_to_hz_is_monotonic_over_range() {
    let mut prev = midi_to_hz(20.0);
    for m in 21..=100 {
        let f = midi_to_hz(m as f32);
        assert!(f > prev, "frequency not increasing at midi {m}");
        prev = f;
    }
}

#[test]
fn d_minor_is_spelled_with_b_flat() {
    let scale = Scale::parse("D minor").expect("valid scale");
    assert_eq!(scale.kind, ScaleKind::Minor);
    assert_eq!(scale.note_names(), "D E F G A Bb C");
    assert_eq!(scale.notes[0].midi, 62);
    assert_eq!(scale.notes[5].to_string(), "Bb4");
}

#[test]
fn b_diminished_has_eight_notes() {
    let scale = Scale::parse("B diminished").expect("valid scale");
    assert_eq!(scale.notes.len(), 8);
    assert_eq!(scale.note_names(), "B C# D E F G G# A#");
    assert_eq!(scale.notes[0].to_string(), "B4");
    assert_eq!(scale.notes[7].to_string(), "A#5");
}

#[test]
fn major_scales_spell_naturally() {
    assert_eq!(
        Scale::parse("C major").unwrap().note_names(),
        "C D E F G A B"
    );
    assert_eq!(
        Scale::parse("F major").unwrap().note_names(),
        "F G A Bb C D E"
    );
    assert_eq!(
        Scale::parse("G major").unwrap().note_names(),
        "G A B C D E F#"
    );
}

#[test]
fn middle_c_is_octave_four() {
    let scale = Scale::parse("C major").unwrap();
    assert_eq!(scale.notes[0].midi, 60);
    assert!((scale.notes[0].frequency_hz() - 261.6256).abs() < 1e-2);
    let a = &scale.notes[5];
    assert_eq!(a.to_string(), "A4");
    assert!((a.frequency_hz() - 440.0).abs() < 1e-3);
}

#[test]
fn every_builtin_scale_resolves_ascending() {
    for name in SCALE_NAMES {
        let scale = Scale::parse(name).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(scale.notes.len() >= 7, "{name}");
        for pair in scale.notes.windows(2) {
            assert!(pair[0].midi < pair[1].midi, "{name} not ascending");
            assert!(pair[0].frequency_hz() < pair[1].frequency_hz());
        }
        // each note spans less than an octave from the tonic
        let span = scale.notes.last().unwrap().midi - scale.notes[0].midi;
        assert!(span < 12, "{name}");
    }
}

#[test]
fn parse_tolerates_case_and_spacing() {
    let scale = Scale::parse("  e   Minor ").expect("valid scale");
    assert_eq!(scale.name, "e   Minor");
    assert_eq!(scale.note_names(), "E F# G A B C D");
    assert_eq!(ScaleKind::from_name("Major  Pentatonic"), Some(ScaleKind::MajorPentatonic));
    assert_eq!(ScaleKind::from_name("aeolian"), Some(ScaleKind::Minor));
}

#[test]
fn pitch_class_parses_accidentals() {
    assert_eq!(PitchClass::parse("F#").unwrap().semitone(), 6);
    assert_eq!(PitchClass::parse("Bb").unwrap().semitone(), 10);
    assert_eq!(PitchClass::parse("Cb").unwrap().semitone(), 11);
    assert_eq!(PitchClass::parse("Ebb").unwrap().name(), "Ebb");
    assert!(PitchClass::parse("H").is_none());
    assert!(PitchClass::parse("C$").is_none());
    assert!(PitchClass::parse("").is_none());
}

#[test]
fn parse_reports_specific_errors() {
    assert_eq!(Scale::parse("   "), Err(ScaleError::Empty));
    assert_eq!(
        Scale::parse("D"),
        Err(ScaleError::MissingKind("D".to_string()))
    );
    assert_eq!(
        Scale::parse("X major"),
        Err(ScaleError::UnknownTonic("X".to_string()))
    );
    assert_eq!(
        Scale::parse("C bebop"),
        Err(ScaleError::UnknownKind("bebop".to_string()))
    );
}

#[test]
fn choose_scale_picks_from_list() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let scale = choose_scale(&mut rng, &SCALE_NAMES).expect("builtin names");
        assert!(SCALE_NAMES.contains(&scale.name.as_str()));
    }
    assert_eq!(choose_scale(&mut rng, &[]), Err(ScaleError::NoScales));
}

#[test]
fn choose_scale_is_deterministic_per_seed() {
    let a = choose_scale(&mut StdRng::seed_from_u64(9), &SCALE_NAMES).unwrap();
    let b = choose_scale(&mut StdRng::seed_from_u64(9), &SCALE_NAMES).unwrap();
    assert_eq!(a, b);
}
