use rand::prelude::*;
use std::fmt;

use crate::constants::SCALE_OCTAVE;
use crate::error::ScaleError;

/// Basic oscillator shape for scale voices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

/// Scale families, each an ordered list of `(letter step, semitones)` degrees
/// above the tonic. The letter step drives spelling, the semitones drive pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Minor,
    Locrian,
    /// Whole-half octatonic.
    Diminished,
    MajorPentatonic,
    MinorPentatonic,
}

/// Diatonic modes (letter step, semitone degree)
const IONIAN: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 4), (3, 5), (4, 7), (5, 9), (6, 11)];
const DORIAN: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 3), (3, 5), (4, 7), (5, 9), (6, 10)];
const PHRYGIAN: &[(u8, i32)] = &[(0, 0), (1, 1), (2, 3), (3, 5), (4, 7), (5, 8), (6, 10)];
const LYDIAN: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 4), (3, 6), (4, 7), (5, 9), (6, 11)];
const MIXOLYDIAN: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 4), (3, 5), (4, 7), (5, 9), (6, 10)];
const AEOLIAN: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 3), (3, 5), (4, 7), (5, 8), (6, 10)];
const LOCRIAN: &[(u8, i32)] = &[(0, 0), (1, 1), (2, 3), (3, 5), (4, 6), (5, 8), (6, 10)];
const DIMINISHED: &[(u8, i32)] = &[
    (0, 0),
    (1, 2),
    (2, 3),
    (3, 5),
    (4, 6),
    (5, 8),
    (5, 9),
    (6, 11),
];
const MAJOR_PENTATONIC: &[(u8, i32)] = &[(0, 0), (1, 2), (2, 4), (4, 7), (5, 9)];
const MINOR_PENTATONIC: &[(u8, i32)] = &[(0, 0), (2, 3), (3, 5), (4, 7), (6, 10)];

impl ScaleKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_lowercase().as_str() {
            "major" | "ionian" => Some(Self::Major),
            "dorian" => Some(Self::Dorian),
            "phrygian" => Some(Self::Phrygian),
            "lydian" => Some(Self::Lydian),
            "mixolydian" => Some(Self::Mixolydian),
            "minor" | "aeolian" => Some(Self::Minor),
            "locrian" => Some(Self::Locrian),
            "diminished" => Some(Self::Diminished),
            "major pentatonic" | "pentatonic" => Some(Self::MajorPentatonic),
            "minor pentatonic" => Some(Self::MinorPentatonic),
            _ => None,
        }
    }

    fn degrees(self) -> &'static [(u8, i32)] {
        match self {
            Self::Major => IONIAN,
            Self::Dorian => DORIAN,
            Self::Phrygian => PHRYGIAN,
            Self::Lydian => LYDIAN,
            Self::Mixolydian => MIXOLYDIAN,
            Self::Minor => AEOLIAN,
            Self::Locrian => LOCRIAN,
            Self::Diminished => DIMINISHED,
            Self::MajorPentatonic => MAJOR_PENTATONIC,
            Self::MinorPentatonic => MINOR_PENTATONIC,
        }
    }
}

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];
const NATURAL_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A spelled pitch class: letter index into C..B plus alteration in semitones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PitchClass {
    letter: usize,
    alteration: i32,
}

impl PitchClass {
    /// Parse `C`, `F#`, `Bb`, `Ebb` and similar.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let letter_char = chars.next()?.to_ascii_uppercase();
        let letter = LETTERS.iter().position(|&l| l == letter_char)?;
        let mut alteration = 0;
        for c in chars {
            match c {
                '#' => alteration += 1,
                'b' => alteration -= 1,
                _ => return None,
            }
        }
        Some(Self { letter, alteration })
    }

    /// Semitones above C, in 0..12.
    #[inline]
    pub fn semitone(&self) -> i32 {
        (NATURAL_SEMITONES[self.letter] + self.alteration).rem_euclid(12)
    }

    pub fn name(&self) -> String {
        let accidental = if self.alteration >= 0 { "#" } else { "b" };
        let mut s = String::with_capacity(3);
        s.push(LETTERS[self.letter]);
        s.push_str(&accidental.repeat(self.alteration.unsigned_abs() as usize));
        s
    }
}

/// One resolved scale degree.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub pitch_class: PitchClass,
    pub midi: i32,
}

impl Note {
    /// Pitch-class spelling without octave, e.g. `Bb`.
    pub fn name(&self) -> String {
        self.pitch_class.name()
    }

    #[inline]
    pub fn frequency_hz(&self) -> f32 {
        midi_to_hz(self.midi as f32)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.midi.div_euclid(12) - 1)
    }
}

/// A named scale resolved into ascending notes starting at the tonic.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    pub name: String,
    pub tonic: PitchClass,
    pub kind: ScaleKind,
    pub notes: Vec<Note>,
}

impl Scale {
    /// Parse names like `"D minor"` or `"B diminished"`.
    ///
    /// The tonic sits in octave 4 and every later degree is placed above it, so
    /// the notes form one strictly ascending run.
    pub fn parse(name: &str) -> Result<Self, ScaleError> {
        let trimmed = name.trim();
        let (tonic_text, kind_text) = match trimmed.split_once(char::is_whitespace) {
            Some((t, k)) => (t, k.trim()),
            None if trimmed.is_empty() => return Err(ScaleError::Empty),
            None => return Err(ScaleError::MissingKind(trimmed.to_string())),
        };
        let tonic = PitchClass::parse(tonic_text)
            .ok_or_else(|| ScaleError::UnknownTonic(tonic_text.to_string()))?;
        let kind = ScaleKind::from_name(kind_text)
            .ok_or_else(|| ScaleError::UnknownKind(kind_text.to_string()))?;

        let root_midi = (SCALE_OCTAVE + 1) * 12 + tonic.semitone();
        let notes = kind
            .degrees()
            .iter()
            .map(|&(step, semitones)| {
                let letter = (tonic.letter + step as usize) % 7;
                let target = (tonic.semitone() + semitones).rem_euclid(12);
                let alteration = (target - NATURAL_SEMITONES[letter] + 6).rem_euclid(12) - 6;
                Note {
                    pitch_class: PitchClass { letter, alteration },
                    midi: root_midi + semitones,
                }
            })
            .collect();

        Ok(Self {
            name: trimmed.to_string(),
            tonic,
            kind,
            notes,
        })
    }

    /// Space-separated pitch-class names, e.g. `"D E F G A Bb C"`.
    pub fn note_names(&self) -> String {
        self.notes
            .iter()
            .map(Note::name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Pick one of `names` uniformly and resolve it.
pub fn choose_scale(rng: &mut impl Rng, names: &[&str]) -> Result<Scale, ScaleError> {
    let name = names.choose(rng).ok_or(ScaleError::NoScales)?;
    Scale::parse(name)
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
///
/// Monotonic and exhibits octave symmetry: +12 semitones doubles the frequency.
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
