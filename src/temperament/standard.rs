// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ratio-based and equal temperaments.
//!
//! Each octave is built from the octave's base frequency times one ratio per
//! interval, so every octave is an exact doubling of the one below. The
//! frequency list closes with the note one octave above the last octave's base.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::{Defaulted, PitchResult, Recover};
use crate::music::notation::{
    generic_name, normalize_pitch, CHROMATIC_NOTES_FLAT, CHROMATIC_NOTES_SHARP,
};
use crate::temperament::Temperament;

/// Frequency of C in octave 0, in Hertz.
pub const C0: f64 = 16.3516;

/// Default number of octaves.
pub const DEFAULT_OCTAVES: usize = 8;

const DEFAULT_INTERVALS: &[&str] = &[
    "perfect 1",
    "minor 2",
    "major 2",
    "minor 3",
    "major 3",
    "perfect 4",
    "diminished 5",
    "perfect 5",
    "minor 6",
    "major 6",
    "minor 7",
    "major 7",
    "perfect 8",
];

/// Equal temperament ratios, as twelfths of an octave.
const TWELVE_TONE_EQUAL_STEPS: &[(&str, f64)] = &[
    ("perfect 1", 0.0),
    ("minor 2", 1.0),
    ("augmented 1", 1.0),
    ("major 2", 2.0),
    ("augmented 2", 3.0),
    ("minor 3", 3.0),
    ("major 3", 4.0),
    ("augmented 3", 5.0),
    ("diminished 4", 4.0),
    ("perfect 4", 5.0),
    ("augmented 4", 6.0),
    ("diminished 5", 6.0),
    ("perfect 5", 7.0),
    ("augmented 5", 8.0),
    ("minor 6", 8.0),
    ("major 6", 9.0),
    ("augmented 6", 10.0),
    ("minor 7", 10.0),
    ("major 7", 11.0),
    ("augmented 7", 12.0),
    ("diminished 8", 11.0),
    ("perfect 8", 12.0),
];

const JUST_INTONATION_RATIOS: &[(&str, f64)] = &[
    ("perfect 1", 1.0),
    ("minor 2", 16.0 / 15.0),
    ("augmented 1", 16.0 / 15.0),
    ("major 2", 9.0 / 8.0),
    ("augmented 2", 6.0 / 5.0),
    ("minor 3", 6.0 / 5.0),
    ("major 3", 5.0 / 4.0),
    ("augmented 3", 4.0 / 3.0),
    ("diminished 4", 5.0 / 4.0),
    ("perfect 4", 4.0 / 3.0),
    ("augmented 4", 7.0 / 5.0),
    ("diminished 5", 7.0 / 5.0),
    ("perfect 5", 3.0 / 2.0),
    ("augmented 5", 8.0 / 5.0),
    ("minor 6", 8.0 / 5.0),
    ("major 6", 5.0 / 3.0),
    ("augmented 6", 16.0 / 9.0),
    ("minor 7", 16.0 / 9.0),
    ("major 7", 15.0 / 8.0),
    ("augmented 7", 2.0),
    ("diminished 8", 15.0 / 8.0),
    ("perfect 8", 2.0),
];

const PYTHAGOREAN_RATIOS: &[(&str, f64)] = &[
    ("perfect 1", 1.0),
    ("minor 2", 256.0 / 243.0),
    ("augmented 1", 256.0 / 243.0),
    ("major 2", 9.0 / 8.0),
    ("augmented 2", 32.0 / 27.0),
    ("minor 3", 32.0 / 27.0),
    ("major 3", 81.0 / 64.0),
    ("augmented 3", 4.0 / 3.0),
    ("diminished 4", 81.0 / 64.0),
    ("perfect 4", 4.0 / 3.0),
    ("augmented 4", 729.0 / 512.0),
    ("diminished 5", 729.0 / 512.0),
    ("perfect 5", 3.0 / 2.0),
    ("augmented 5", 128.0 / 81.0),
    ("minor 6", 128.0 / 81.0),
    ("major 6", 27.0 / 16.0),
    ("augmented 6", 16.0 / 9.0),
    ("minor 7", 16.0 / 9.0),
    ("major 7", 243.0 / 128.0),
    ("augmented 7", 2.0),
    ("diminished 8", 243.0 / 128.0),
    ("perfect 8", 2.0),
];

const THIRD_COMMA_MEANTONE_RATIOS: &[(&str, f64)] = &[
    ("perfect 1", 1.0),
    ("minor 2", 1.075693),
    ("augmented 1", 1.037156),
    ("major 2", 1.115656),
    ("augmented 2", 1.157109),
    ("minor 3", 1.200103),
    ("major 3", 1.244694),
    ("augmented 3", 1.290943),
    ("diminished 4", 1.290943),
    ("perfect 4", 1.338902),
    ("augmented 4", 1.38865),
    ("diminished 5", 1.440247),
    ("perfect 5", 1.493762),
    ("augmented 5", 1.549255),
    ("minor 6", 1.60682),
    ("major 6", 1.666524),
    ("augmented 6", 1.728445),
    ("minor 7", 1.792668),
    ("major 7", 1.859266),
    ("augmented 7", 1.92835),
    ("diminished 8", 1.92835),
    ("perfect 8", 2.0),
];

const THIRD_COMMA_MEANTONE_INTERVALS: &[&str] = &[
    "perfect 1",
    "augmented 1",
    "minor 2",
    "major 2",
    "augmented 2",
    "minor 3",
    "major 3",
    "diminished 4",
    "perfect 4",
    "augmented 4",
    "diminished 5",
    "perfect 5",
    "augmented 5",
    "minor 6",
    "major 6",
    "augmented 6",
    "minor 7",
    "major 7",
    "diminished 8",
    "perfect 8",
];

const QUARTER_COMMA_MEANTONE_RATIOS: &[(&str, f64)] = &[
    ("perfect 1", 1.0),
    ("minor 2", 16.0 / 15.0),
    ("augmented 1", 25.0 / 24.0),
    ("major 2", 9.0 / 8.0),
    ("augmented 2", 75.0 / 64.0),
    ("minor 3", 6.0 / 5.0),
    ("major 3", 5.0 / 4.0),
    ("diminished 4", 32.0 / 25.0),
    ("augmented 3", 125.0 / 96.0),
    ("perfect 4", 4.0 / 3.0),
    ("augmented 4", 25.0 / 18.0),
    ("diminished 5", 36.0 / 25.0),
    ("perfect 5", 3.0 / 2.0),
    ("augmented 5", 25.0 / 16.0),
    ("minor 6", 8.0 / 5.0),
    ("major 6", 5.0 / 3.0),
    ("augmented 6", 125.0 / 72.0),
    ("minor 7", 9.0 / 5.0),
    ("major 7", 15.0 / 8.0),
    ("diminished 8", 48.0 / 25.0),
    ("augmented 7", 125.0 / 64.0),
    ("perfect 8", 2.0),
];

const QUARTER_COMMA_MEANTONE_INTERVALS: &[&str] = &[
    "perfect 1",
    "augmented 1",
    "minor 2",
    "major 2",
    "augmented 2",
    "minor 3",
    "major 3",
    "diminished 4",
    "augmented 3",
    "perfect 4",
    "augmented 4",
    "diminished 5",
    "perfect 5",
    "augmented 5",
    "minor 6",
    "major 6",
    "augmented 6",
    "minor 7",
    "major 7",
    "diminished 8",
    "augmented 7",
    "perfect 8",
];

/// Names of the predefined temperaments.
pub const TEMPERAMENT_NAMES: [&str; 5] = [
    "equal",
    "just intonation",
    "pythagorean",
    "third comma meantone",
    "quarter comma meantone",
];

fn ratio_table(table: &[(&str, f64)]) -> HashMap<String, f64> {
    table.iter().map(|(name, ratio)| (name.to_string(), *ratio)).collect()
}

fn equal_ratios() -> HashMap<String, f64> {
    TWELVE_TONE_EQUAL_STEPS
        .iter()
        .map(|(name, steps)| (name.to_string(), 2f64.powf(steps / 12.0)))
        .collect()
}

/// A temperament defined by interval ratios or by equal division of the octave.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardTemperament {
    name: String,
    freqs: Vec<f64>,
    octave_length: usize,
    base_frequency: f64,
    number_of_octaves: usize,
    intervals: Vec<String>,
    ratios: HashMap<String, f64>,
    equal_steps: Option<usize>,
    note_names: Vec<String>,
}

impl StandardTemperament {
    /// Creates one of the predefined temperaments, based on C0.
    pub fn new(name: &str) -> Self {
        let mut temperament = Self {
            name: String::new(),
            freqs: Vec::new(),
            octave_length: 12,
            base_frequency: C0,
            number_of_octaves: DEFAULT_OCTAVES,
            intervals: Vec::new(),
            ratios: HashMap::new(),
            equal_steps: None,
            note_names: Vec::new(),
        };
        temperament.generate(name);
        temperament
    }

    /// Regenerates the frequencies for a predefined temperament.
    ///
    /// Unknown names fall back to 12-tone equal temperament.
    pub fn generate(&mut self, name: &str) {
        self.name = name.to_lowercase();
        let (intervals, ratios) = match self.name.as_str() {
            "third comma meantone" => (
                THIRD_COMMA_MEANTONE_INTERVALS,
                ratio_table(THIRD_COMMA_MEANTONE_RATIOS),
            ),
            "quarter comma meantone" => (
                QUARTER_COMMA_MEANTONE_INTERVALS,
                ratio_table(QUARTER_COMMA_MEANTONE_RATIOS),
            ),
            "just intonation" => (DEFAULT_INTERVALS, ratio_table(JUST_INTONATION_RATIOS)),
            "pythagorean" => (DEFAULT_INTERVALS, ratio_table(PYTHAGOREAN_RATIOS)),
            "equal" => (DEFAULT_INTERVALS, equal_ratios()),
            other => {
                debug!("Unknown temperament {:?}; using equal temperament", other);
                (DEFAULT_INTERVALS, equal_ratios())
            }
        };
        self.intervals = intervals.iter().map(|s| s.to_string()).collect();
        self.ratios = ratios;
        self.octave_length = intervals.len() - 1;
        self.equal_steps = None;
        self.regenerate();
    }

    /// Divides the octave into `steps` equal steps.
    pub fn generate_equal_temperament(&mut self, steps: usize) {
        let steps = steps.max(1);
        self.name = format!("equal_{}", steps);
        self.octave_length = steps;
        self.intervals.clear();
        self.ratios.clear();
        self.equal_steps = Some(steps);
        self.regenerate();
    }

    /// Builds a temperament from named intervals and their ratios.
    ///
    /// Every interval is one note of the octave, so the list should start with
    /// a 1:1 ratio and stop short of the octave.
    pub fn generate_custom(
        &mut self,
        intervals: &[String],
        ratios: &HashMap<String, f64>,
        name: &str,
    ) -> PitchResult<()> {
        if intervals.is_empty() {
            return Err(Defaulted::invalid("custom temperament needs intervals", ()));
        }
        if let Some(missing) = intervals.iter().find(|i| !ratios.contains_key(*i)) {
            return Err(Defaulted::invalid(
                format!("no ratio given for interval {:?}", missing),
                (),
            ));
        }
        self.name = name.to_string();
        self.intervals = intervals.to_vec();
        self.ratios = ratios.clone();
        self.octave_length = intervals.len();
        self.equal_steps = None;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        let octaves = self.number_of_octaves;
        self.freqs = match self.equal_steps {
            Some(steps) => {
                let root = 2f64.powf(1.0 / steps as f64);
                (0..=octaves * steps)
                    .map(|k| self.base_frequency * root.powi(k as i32))
                    .collect()
            }
            None => {
                let mut freqs = Vec::with_capacity(octaves * self.octave_length + 1);
                for octave in 0..octaves {
                    let c = self.base_frequency * 2f64.powi(octave as i32);
                    for interval in self.intervals.iter().take(self.octave_length) {
                        match self.ratios.get(interval) {
                            Some(ratio) => freqs.push(c * ratio),
                            None => warn!("No ratio for interval {:?}", interval),
                        }
                    }
                }
                freqs.push(self.base_frequency * 2f64.powi(octaves as i32));
                freqs
            }
        };
        self.note_names = (0..self.octave_length).map(generic_name).collect();
    }

    /// Retunes so that a letter pitch in an octave sounds at `frequency`.
    ///
    /// Returns the new base frequency. An unknown pitch leaves the tuning
    /// unchanged and the error carries the current base frequency.
    pub fn tune(&mut self, pitch_name: &str, octave: i32, frequency: f64) -> PitchResult<f64> {
        let pitch = normalize_pitch(pitch_name);
        let Some(i) = CHROMATIC_NOTES_SHARP
            .iter()
            .position(|n| *n == pitch)
            .or_else(|| CHROMATIC_NOTES_FLAT.iter().position(|n| *n == pitch))
        else {
            return Err(Defaulted::not_found(
                format!("Pitch '{}' not found.", pitch),
                self.base_frequency,
            ));
        };

        let ratio = match self.equal_steps {
            Some(_) => Some(2f64.powf(i as f64 / 12.0)),
            None => self.intervals.get(i).and_then(|name| self.ratios.get(name)).copied(),
        };
        let Some(ratio) = ratio else {
            return Err(Defaulted::invalid(
                format!("cannot tune {} in the {} temperament", pitch, self.name),
                self.base_frequency,
            ));
        };

        self.base_frequency = frequency / 2f64.powi(octave) / ratio;
        self.regenerate();
        Ok(self.base_frequency)
    }

    /// Nearest generic name, octave and cents above it for a frequency.
    ///
    /// Frequencies below the base frequency report `("n0", 0, 0)`.
    pub fn frequency_to_pitch_octave_cents(&self, frequency: f64) -> (String, i32, i32) {
        if frequency < self.base_frequency || self.freqs.is_empty() {
            return (generic_name(0), 0, 0);
        }
        let mut index = self.nearest_freq_index(frequency);
        if self.freqs[index] > frequency && index > 0 {
            index -= 1;
        }
        let low = self.freqs[index];
        let high = self
            .freqs
            .get(index + 1)
            .copied()
            .unwrap_or_else(|| low * 2f64.powf(1.0 / self.octave_length as f64));
        let mut cents = (100.0 * (frequency / low).log2() / (high / low).log2()).round() as i32;
        if cents >= 100 {
            index += 1;
            cents -= 100;
        }
        let (name, octave) = self.generic_note_name_and_octave_by_freq_index(index);
        (name, octave, cents)
    }

    /// Absolute index of a generic name in an octave, clamped to the range.
    pub fn freq_index_by_generic_note_name_and_octave(
        &self,
        note_name: &str,
        octave: i32,
    ) -> PitchResult<usize> {
        let Some(ni) = self.modal_index(note_name) else {
            return Err(Defaulted::not_found(
                format!("Note '{}' not found in generic note names.", note_name),
                0,
            ));
        };
        let i = octave as i64 * self.octave_length as i64 + ni as i64;
        let last = self.freqs.len().saturating_sub(1) as i64;
        Ok(i.clamp(0, last) as usize)
    }

    /// Frequency of a generic name in an octave; unknown names give the lowest note.
    pub fn freq_by_generic_note_name_and_octave(&self, note_name: &str, octave: i32) -> f64 {
        let i = self
            .freq_index_by_generic_note_name_and_octave(note_name, octave)
            .recover();
        self.freqs.get(i).copied().unwrap_or(0.0)
    }

    pub fn generic_note_name_and_octave_by_freq_index(&self, index: usize) -> (String, i32) {
        let (modal, octave) = self.modal_index_and_octave_from_freq_index(index);
        (self.note_name(modal), octave)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    pub fn note_names(&self) -> &[String] {
        &self.note_names
    }

    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Sets the frequency of the lowest note and regenerates.
    pub fn set_base_frequency(&mut self, frequency: f64) {
        self.base_frequency = frequency;
        self.regenerate();
    }

    pub fn number_of_octaves(&self) -> usize {
        self.number_of_octaves
    }

    /// Sets the octave count, at least one, and regenerates.
    pub fn set_number_of_octaves(&mut self, octaves: usize) {
        if octaves == 0 {
            warn!("Temperament needs at least one octave; using 1");
        }
        self.number_of_octaves = octaves.max(1);
        self.regenerate();
    }
}

impl Default for StandardTemperament {
    fn default() -> Self {
        Self::new("equal")
    }
}

impl Temperament for StandardTemperament {
    fn number_of_semitones_in_octave(&self) -> usize {
        self.octave_length
    }

    fn number_of_notes_in_temperament(&self) -> usize {
        self.freqs.len()
    }

    fn note_name(&self, semitone_index: usize) -> String {
        self.note_names
            .get(semitone_index)
            .cloned()
            .unwrap_or_else(|| generic_name(semitone_index))
    }

    fn modal_index(&self, generic_name: &str) -> Option<usize> {
        self.note_names.iter().position(|n| n == generic_name)
    }

    fn freq_by_modal_index_and_octave(&self, modal_index: usize, octave: i32) -> f64 {
        self.freq_by_index(octave as i64 * self.octave_length as i64 + modal_index as i64)
    }

    fn freq_by_index(&self, index: i64) -> f64 {
        if self.freqs.is_empty() {
            return 0.0;
        }
        let last = self.freqs.len() as i64 - 1;
        self.freqs[index.clamp(0, last) as usize]
    }

    fn nearest_freq_index(&self, freq: f64) -> usize {
        let mut best = 0;
        let mut min = f64::INFINITY;
        for (i, f) in self.freqs.iter().enumerate() {
            let diff = (f - freq).abs();
            if diff >= min {
                break;
            }
            min = diff;
            best = i;
        }
        best
    }

    fn modal_index_and_octave_from_freq_index(&self, index: usize) -> (usize, i32) {
        let length = self.octave_length.max(1);
        (index % length, (index / length) as i32)
    }
}

impl fmt::Display for StandardTemperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} temperament:", self.name)?;
        writeln!(f)?;
        for freq in &self.freqs {
            writeln!(f, "{:.2}", freq)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PitchError;

    fn round2(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn test_equal_temperament() {
        let t = StandardTemperament::default();
        assert_eq!(t.name(), "equal");
        assert_eq!(t.base_frequency(), C0);
        assert_eq!(t.number_of_octaves(), 8);
        assert_eq!(round2(t.freqs()[21]), 55.0);
        assert_eq!(t.note_names().len(), 12);
        assert_eq!(t.number_of_notes_in_temperament(), 97);
        assert_eq!(round2(t.freqs()[96]), 4186.01);
    }

    #[test]
    fn test_ratio_temperaments() {
        let t = StandardTemperament::new("third comma meantone");
        assert_eq!(round2(t.freqs()[21]), 35.18);
        assert_eq!(t.note_names().len(), 19);

        let t = StandardTemperament::new("pythagorean");
        assert_eq!(round2(t.freqs()[21]), 55.19);
        assert_eq!(t.note_names().len(), 12);

        let t = StandardTemperament::new("Just Intonation");
        assert_eq!(t.name(), "just intonation");
        assert_eq!(round2(t.freqs()[21]), 54.51);

        let t = StandardTemperament::new("quarter comma meantone");
        assert_eq!(round2(t.freqs()[36]), 54.51);
        assert_eq!(t.note_names().len(), 21);
    }

    #[test]
    fn test_octaves_double() {
        for name in TEMPERAMENT_NAMES {
            let t = StandardTemperament::new(name);
            let n = t.number_of_semitones_in_octave();
            for i in 0..n {
                let ratio = t.freqs()[i + n] / t.freqs()[i];
                assert!((ratio - 2.0).abs() < 1e-9, "{} {}", name, i);
            }
        }
    }

    #[test]
    fn test_equal_divisions() {
        let mut t = StandardTemperament::default();
        t.generate_equal_temperament(24);
        assert_eq!(t.name(), "equal_24");
        assert_eq!(round2(t.freqs()[42]), 55.0);
        assert_eq!(t.note_names().len(), 24);

        t.generate_equal_temperament(0);
        assert_eq!(t.number_of_semitones_in_octave(), 1);
        assert_eq!(t.number_of_notes_in_temperament(), 9);
    }

    #[test]
    fn test_unknown_name_is_equal() {
        let t = StandardTemperament::new("Invalid");
        assert_eq!(t.number_of_semitones_in_octave(), 12);
        assert_eq!(round2(t.freqs()[21]), 55.0);
    }

    #[test]
    fn test_custom_temperament() {
        let mut t = StandardTemperament::default();
        let intervals = vec!["perfect 1".to_string(), "perfect 5".to_string()];
        let mut ratios = HashMap::new();
        ratios.insert("perfect 1".to_string(), 1.0);
        ratios.insert("perfect 5".to_string(), 1.5);
        t.generate_custom(&intervals, &ratios, "fifths").unwrap();
        assert_eq!(t.name(), "fifths");
        assert_eq!(t.number_of_semitones_in_octave(), 2);
        assert_eq!(t.number_of_notes_in_temperament(), 17);
        assert_eq!(t.freqs()[3], C0 * 2.0 * 1.5);

        ratios.remove("perfect 5");
        let err = t.generate_custom(&intervals, &ratios, "broken").unwrap_err();
        assert!(matches!(err.error, PitchError::InvalidArgument(_)));
        assert_eq!(t.name(), "fifths");
    }

    #[test]
    fn test_tune() {
        let mut t = StandardTemperament::default();
        t.tune("a", 4, 440.0).unwrap();
        assert_eq!(round2(t.freqs()[57]), 440.0);
        assert_eq!(round2(t.base_frequency()), 16.35);

        t.tune("a", 4, 441.0).unwrap();
        assert_eq!(round2(t.base_frequency()), 16.39);
        assert_eq!(round2(t.freqs()[57]), 441.0);

        t.tune("gb", 4, 441.0).unwrap();
        assert_eq!(round2(t.base_frequency()), 19.49);
        assert_eq!(round2(t.freqs()[57]), 524.44);

        let base = t.base_frequency();
        let err = t.tune("z", 4, 441.0).unwrap_err();
        assert_eq!(err.error, PitchError::ItemNotFound("Pitch 'z' not found.".into()));
        assert_eq!(err.default, base);
    }

    #[test]
    fn test_tune_equal_division() {
        let mut t = StandardTemperament::default();
        t.generate_equal_temperament(24);
        t.tune("a", 4, 440.0).unwrap();
        assert_eq!(round2(t.freqs()[4 * 24 + 18]), 440.0);
    }

    #[test]
    fn test_nearest_and_cents() {
        let t = StandardTemperament::default();
        assert_eq!(t.nearest_freq_index(440.0), 57);
        assert_eq!(t.frequency_to_pitch_octave_cents(440.0), ("n9".to_string(), 4, 0));
        assert_eq!(t.frequency_to_pitch_octave_cents(441.0), ("n9".to_string(), 4, 4));
        assert_eq!(t.frequency_to_pitch_octave_cents(439.0), ("n8".to_string(), 4, 96));
        assert_eq!(t.frequency_to_pitch_octave_cents(10.0), ("n0".to_string(), 0, 0));
    }

    #[test]
    fn test_index_lookups() {
        let t = StandardTemperament::default();
        assert_eq!(t.modal_index("n4"), Some(4));
        assert_eq!(t.modal_index("a"), None);
        assert_eq!(t.note_name(2), "n2");
        assert_eq!(t.freq_by_index(0), C0);
        assert!((t.freq_by_index(20) - 51.91309408272643).abs() < 1e-6);
        assert_eq!(t.freq_by_index(-5), C0);
        assert_eq!(round2(t.freq_by_modal_index_and_octave(2, 2)), 73.42);
        assert_eq!(round2(t.freq_by_modal_index_and_octave(2, -1)), 16.35);
        assert_eq!(round2(t.freq_by_modal_index_and_octave(20, 100)), 4186.01);
        assert_eq!(t.modal_index_and_octave_from_freq_index(2), (2, 0));
        assert_eq!(t.modal_index_and_octave_from_freq_index(26), (2, 2));
    }

    #[test]
    fn test_generic_name_lookups() {
        let t = StandardTemperament::default();
        assert_eq!(
            t.generic_note_name_and_octave_by_freq_index(10),
            ("n10".to_string(), 0)
        );
        assert_eq!(t.freq_by_generic_note_name_and_octave("n0", 0), C0);
        assert_eq!(t.freq_by_generic_note_name_and_octave("a", 2), C0);
        assert_eq!(t.freq_index_by_generic_note_name_and_octave("n10", 1).unwrap(), 22);
        assert_eq!(t.freq_index_by_generic_note_name_and_octave("n10", -1).unwrap(), 0);
        assert_eq!(t.freq_index_by_generic_note_name_and_octave("n10", 100).unwrap(), 96);
        assert!(t.freq_index_by_generic_note_name_and_octave("a", 2).is_err());
    }

    #[test]
    fn test_octave_count() {
        let mut t = StandardTemperament::default();
        t.set_number_of_octaves(0);
        assert_eq!(t.number_of_octaves(), 1);
        assert_eq!(t.number_of_notes_in_temperament(), 13);
        t.set_number_of_octaves(2);
        assert_eq!(t.number_of_notes_in_temperament(), 25);
    }

    #[test]
    fn test_display() {
        let mut t = StandardTemperament::default();
        t.set_number_of_octaves(1);
        let text = t.to_string();
        assert!(text.starts_with("equal temperament:\n\n16.35\n"));
        assert!(text.ends_with("32.70\n"));
    }
}
