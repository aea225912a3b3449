// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The current note of a voice.
//!
//! A `CurrentPitch` holds a frequency, octave, generic name, semitone index and
//! absolute note number. Every mutation re-derives all five together from the
//! temperament.

use std::fmt;

use tracing::warn;

use crate::error::Recover;
use crate::music::KeySignature;
use crate::temperament::{StandardTemperament, Temperament};

/// Anything `CurrentPitch::set_pitch` accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchValue {
    /// A frequency in Hertz, or a whole number classified like [`PitchValue::Number`]
    Frequency(f64),
    /// A frequency, an absolute note number or a semitone index, by magnitude
    Number(i64),
    /// A pitch name in any notation the key signature understands
    Name(String),
}

impl From<f64> for PitchValue {
    fn from(value: f64) -> Self {
        PitchValue::Frequency(value)
    }
}

impl From<i64> for PitchValue {
    fn from(value: i64) -> Self {
        PitchValue::Number(value)
    }
}

impl From<i32> for PitchValue {
    fn from(value: i32) -> Self {
        PitchValue::Number(value as i64)
    }
}

impl From<&str> for PitchValue {
    fn from(value: &str) -> Self {
        PitchValue::Name(value.to_string())
    }
}

impl From<String> for PitchValue {
    fn from(value: String) -> Self {
        PitchValue::Name(value)
    }
}

/// A note bound to a key signature and a temperament.
#[derive(Debug, Clone)]
pub struct CurrentPitch<T: Temperament = StandardTemperament> {
    temperament: T,
    key_signature: KeySignature,
    freq: f64,
    octave: i32,
    generic_name: String,
    semitone_index: usize,
    number: i64,
}

impl<T: Temperament> CurrentPitch<T> {
    /// Creates a pitch at a semitone index and octave.
    pub fn new(key_signature: KeySignature, temperament: T, semitone_index: usize, octave: i32) -> Self {
        let mut pitch = Self {
            temperament,
            key_signature,
            freq: 0.0,
            octave,
            generic_name: String::new(),
            semitone_index,
            number: 0,
        };
        pitch.derive(semitone_index, octave);
        pitch
    }

    /// G4 in C major, sized to the temperament.
    pub fn with_temperament(temperament: T) -> Self {
        let key_signature =
            KeySignature::new("major", "c", temperament.number_of_semitones_in_octave());
        Self::new(key_signature, temperament, 7, 4)
    }

    fn derive(&mut self, semitone_index: usize, octave: i32) {
        let semitones = self.semitones();
        self.define_by_number(i64::from(octave) * semitones + semitone_index as i64);
    }

    /// Sets all five fields from an absolute note number, clamped to the temperament.
    fn define_by_number(&mut self, number: i64) {
        let semitones = self.semitones();
        let last = self.temperament.number_of_notes_in_temperament() as i64 - 1;
        let mut number = number;
        if last >= 0 && !(0..=last).contains(&number) {
            let clamped = number.clamp(0, last);
            warn!("Pitch number {} is outside the temperament; using {}", number, clamped);
            number = clamped;
        }
        let index = number.rem_euclid(semitones) as usize;
        self.semitone_index = index;
        self.octave = number
            .div_euclid(semitones)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.generic_name = self.temperament.note_name(index);
        self.freq = self.temperament.freq_by_index(number);
        self.number = number;
    }

    fn define_by_frequency(&mut self, freq: f64) {
        let number = self.temperament.nearest_freq_index(freq);
        self.define_by_number(number as i64);
    }

    fn semitones(&self) -> i64 {
        self.temperament.number_of_semitones_in_octave().max(1) as i64
    }

    fn modal_index(&self, generic_name: &str) -> usize {
        self.temperament.modal_index(generic_name).unwrap_or_else(|| {
            warn!("{} is not a note of the temperament; using index 0", generic_name);
            0
        })
    }

    /// Moves to a new pitch.
    ///
    /// Fractional numbers are frequencies. Whole numbers above the temperament's
    /// note count are frequencies too; those spanning an octave or more are
    /// absolute note numbers, and smaller ones are semitone indices in `octave`.
    /// Names resolve through the key signature in `octave`; accidentals that
    /// cross the octave boundary move the octave.
    pub fn set_pitch(&mut self, value: impl Into<PitchValue>, octave: i32) {
        match value.into() {
            PitchValue::Frequency(freq) if freq.fract() != 0.0 => self.define_by_frequency(freq),
            PitchValue::Frequency(freq) => self.set_number(freq as i64, octave),
            PitchValue::Number(number) => self.set_number(number, octave),
            PitchValue::Name(name) => {
                let (generic, carry) = self.key_signature.generic_with_carry(&name).recover();
                let index = self.modal_index(&generic);
                self.derive(index, octave.saturating_add(carry));
            }
        }
    }

    fn set_number(&mut self, number: i64, octave: i32) {
        let notes = self.temperament.number_of_notes_in_temperament() as i64;
        let semitones = self.temperament.number_of_semitones_in_octave() as i64;
        if number > notes {
            self.define_by_frequency(number as f64);
        } else if number >= semitones || number < 0 {
            self.define_by_number(number);
        } else {
            self.derive(number as usize, octave);
        }
    }

    /// Transposes by semitones.
    pub fn apply_semitone_transposition(&mut self, steps: i32) {
        let (generic, crossed) = self
            .key_signature
            .semitone_transform(&self.generic_name, steps)
            .recover();
        let index = self.modal_index(&generic);
        self.derive(index, self.octave.saturating_add(crossed));
    }

    /// Transposes by scale degrees of the key signature's mode.
    pub fn apply_scalar_transposition(&mut self, steps: i32) {
        let (generic, crossed) = self.key_signature.scalar_transform(&self.generic_name, steps);
        let index = self.modal_index(&generic);
        self.derive(index, self.octave.saturating_add(crossed));
    }

    /// Frequency `steps` semitones away, leaving the pitch unchanged.
    pub fn get_semitone_interval(&self, steps: i32) -> f64 {
        let (generic, crossed) = self
            .key_signature
            .semitone_transform(&self.generic_name, steps)
            .recover();
        let octave = self.octave.saturating_add(crossed);
        self.temperament
            .freq_by_modal_index_and_octave(self.modal_index(&generic), octave)
    }

    /// Frequency `steps` scale degrees away, leaving the pitch unchanged.
    pub fn get_scalar_interval(&self, steps: i32) -> f64 {
        let (generic, crossed) = self.key_signature.scalar_transform(&self.generic_name, steps);
        let octave = self.octave.saturating_add(crossed);
        self.temperament
            .freq_by_modal_index_and_octave(self.modal_index(&generic), octave)
    }

    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn generic_name(&self) -> &str {
        &self.generic_name
    }

    pub fn semitone_index(&self) -> usize {
        self.semitone_index
    }

    /// Absolute note number, `octave * semitones + semitone_index`.
    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn key_signature(&self) -> &KeySignature {
        &self.key_signature
    }

    /// Mutable access for the solfège and custom name settings.
    pub fn key_signature_mut(&mut self) -> &mut KeySignature {
        &mut self.key_signature
    }

    pub fn temperament(&self) -> &T {
        &self.temperament
    }
}

impl<T: Temperament + Default> Default for CurrentPitch<T> {
    fn default() -> Self {
        Self::with_temperament(T::default())
    }
}

impl<T: Temperament> fmt::Display for CurrentPitch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.generic_name, self.freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Mode;

    fn default_pitch() -> CurrentPitch {
        CurrentPitch::default()
    }

    #[test]
    fn test_default_is_g4() {
        let pitch = default_pitch();
        assert_eq!(pitch.generic_name(), "n7");
        assert_eq!(pitch.freq().round(), 392.0);
        assert_eq!(pitch.octave(), 4);
        assert_eq!(pitch.semitone_index(), 7);
        assert_eq!(pitch.number(), 55);
        assert_eq!(pitch.key_signature().to_string(), "C MAJOR [c d e f g a b c]");
    }

    #[test]
    fn test_transpositions() {
        let mut pitch = default_pitch();
        pitch.apply_scalar_transposition(1);
        assert_eq!(pitch.generic_name(), "n9");
        assert_eq!(pitch.freq().round(), 440.0);
        assert_eq!(pitch.number(), 57);

        pitch.apply_semitone_transposition(-2);
        assert_eq!(pitch.generic_name(), "n7");
        assert_eq!(pitch.freq().round(), 392.0);

        pitch.apply_semitone_transposition(5);
        assert_eq!(pitch.generic_name(), "n0");
        assert_eq!(pitch.octave(), 5);
        assert_eq!(pitch.number(), 60);
    }

    #[test]
    fn test_intervals_leave_state() {
        let pitch = default_pitch();
        assert_eq!(pitch.get_semitone_interval(12).round(), 784.0);
        assert_eq!(pitch.get_scalar_interval(1).round(), 440.0);
        assert_eq!(pitch.get_scalar_interval(-4).round(), 262.0);
        assert_eq!(pitch.generic_name(), "n7");
        assert_eq!(pitch.octave(), 4);
    }

    #[test]
    fn test_set_pitch_numbers() {
        let mut pitch = default_pitch();
        pitch.set_pitch(440.0, 0);
        assert_eq!(pitch.generic_name(), "n9");
        assert_eq!(pitch.octave(), 4);

        pitch.set_pitch(55, 2);
        assert_eq!(pitch.generic_name(), "n7");
        assert_eq!(pitch.freq().round(), 392.0);

        pitch.set_pitch(9, 5);
        assert_eq!(pitch.freq().round(), 880.0);
        assert_eq!(pitch.number(), 69);

        pitch.set_pitch(261.5, 0);
        assert_eq!(pitch.generic_name(), "n0");
        assert_eq!(pitch.octave(), 4);

        pitch.set_pitch(-3, 4);
        assert_eq!(pitch.number(), 0);
    }

    #[test]
    fn test_set_pitch_names() {
        let mut pitch = default_pitch();
        pitch.set_pitch("a", 4);
        assert_eq!(pitch.generic_name(), "n9");
        assert_eq!(pitch.freq().round(), 440.0);

        pitch.set_pitch("sol", 3);
        assert_eq!(pitch.freq().round(), 196.0);

        pitch.set_pitch("n0b", 4);
        assert_eq!(pitch.generic_name(), "n11");
        assert_eq!(pitch.octave(), 3);

        pitch.set_pitch("cb", 4);
        assert_eq!(pitch.generic_name(), "n11");
        assert_eq!(pitch.octave(), 3);
        assert_eq!(pitch.freq().round(), 247.0);

        pitch.set_pitch("b#", 3);
        assert_eq!(pitch.generic_name(), "n0");
        assert_eq!(pitch.octave(), 4);
        assert_eq!(pitch.freq().round(), 262.0);

        pitch.set_pitch("foobar", 4);
        assert_eq!(pitch.semitone_index(), 0);
    }

    #[test]
    fn test_out_of_range_pitch_is_normalized() {
        let pitch = CurrentPitch::new(KeySignature::default(), StandardTemperament::default(), 30, 4);
        assert_eq!(pitch.generic_name(), "n6");
        assert_eq!(pitch.semitone_index(), 6);
        assert_eq!(pitch.octave(), 6);
        assert_eq!(pitch.number(), 78);
        assert_eq!(pitch.freq(), pitch.temperament().freq_by_index(78));

        let mut pitch = default_pitch();
        let last = pitch.temperament().number_of_notes_in_temperament() as i64 - 1;
        pitch.apply_semitone_transposition(200);
        assert_eq!(pitch.number(), last);
        assert_eq!(pitch.number(), pitch.octave() as i64 * 12 + pitch.semitone_index() as i64);
        assert_eq!(pitch.generic_name(), format!("n{}", pitch.semitone_index()));
        assert_eq!(pitch.freq(), pitch.temperament().freq_by_index(last));

        pitch.apply_semitone_transposition(-1000);
        assert_eq!(pitch.number(), 0);
        assert_eq!(pitch.octave(), 0);
        assert_eq!(pitch.generic_name(), "n0");
    }

    #[test]
    fn test_fixed_solfege_through_cursor() {
        let key_signature = KeySignature::new("major", "g", 12);
        let mut pitch = CurrentPitch::new(key_signature, StandardTemperament::default(), 0, 4);
        pitch.key_signature_mut().set_fixed_solfege(true);
        pitch.set_pitch("do", 4);
        assert_eq!(pitch.generic_name(), "n7");
    }

    #[test]
    fn test_g_major_walk() {
        let key_signature = KeySignature::new("major", "g", 12);
        let mut pitch = CurrentPitch::new(key_signature, StandardTemperament::default(), 7, 4);
        let mut names = Vec::new();
        for _ in 0..7 {
            pitch.apply_scalar_transposition(1);
            names.push(pitch.generic_name().to_string());
        }
        assert_eq!(names, vec!["n9", "n11", "n0", "n2", "n4", "n6", "n7"]);
        assert_eq!(pitch.octave(), 5);
    }

    #[test]
    fn test_nineteen_tone_cursor() {
        let mut temperament = StandardTemperament::default();
        temperament.generate_equal_temperament(19);
        let key_signature = KeySignature::new(Mode::HalfSteps(vec![1; 19]), "n0", 19);
        let mut pitch = CurrentPitch::new(key_signature, temperament, 7, 4);
        assert_eq!(pitch.number(), 83);
        pitch.apply_semitone_transposition(12);
        assert_eq!(pitch.generic_name(), "n0");
        assert_eq!(pitch.octave(), 5);
    }

    #[test]
    fn test_display() {
        let pitch = default_pitch();
        assert_eq!(pitch.to_string(), format!("n7 {}", pitch.freq()));
    }
}
