// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale generation over generic note names.
//!
//! A scale is produced from a half-step pattern and a starting index in a
//! temperament of N semitones. It has no notion of letters or solfège: every
//! entry is an `n<i>` name and the last entry repeats the first to close the
//! octave. Alongside each note the scale records whether the walk has wrapped
//! past the top of the temperament.

use std::fmt;

use tracing::warn;

use crate::error::{Defaulted, PitchResult};
use crate::music::notation::generic_name;

/// Sharp and flat 21-step equivalents of the twelve semitones.
const TWELVE_TO_TWENTY_ONE: [[usize; 2]; 12] = [
    [0, 0],
    [1, 2],
    [3, 3],
    [4, 5],
    [6, 6],
    [9, 9],
    [10, 11],
    [12, 12],
    [13, 14],
    [15, 15],
    [16, 17],
    [18, 18],
];

/// An octave-closing sequence of generic note names.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    number_of_semitones: usize,
    note_names: Vec<String>,
    notes: Vec<String>,
    octave_deltas: Vec<i32>,
}

impl Scale {
    /// Builds a scale.
    ///
    /// Without `half_steps` (or with an empty pattern) the scale is chromatic over
    /// `number_of_semitones`. With a pattern, the temperament size is the sum of
    /// its steps, except that a 12-step pattern requested in 21 semitones is
    /// remapped onto the 21-step names, leaning sharp or flat per `prefer_sharps`.
    pub fn new(
        half_steps: Option<&[usize]>,
        starting_index: usize,
        number_of_semitones: usize,
        prefer_sharps: bool,
    ) -> Self {
        let requested = if number_of_semitones == 0 {
            warn!("Scale requested with zero semitones; using 1");
            1
        } else {
            number_of_semitones
        };

        let steps: Vec<usize> = match half_steps {
            Some(steps) if !steps.is_empty() => steps.to_vec(),
            _ => vec![1; requested],
        };
        let semitones = steps.iter().sum::<usize>().max(1);
        let note_names: Vec<String> = (0..semitones).map(generic_name).collect();

        let mut indices = Vec::with_capacity(steps.len() + 1);
        let mut octave_deltas = Vec::with_capacity(steps.len() + 1);
        let mut index = starting_index % semitones;
        let mut octave = 0;
        for step in &steps {
            indices.push(index);
            octave_deltas.push(octave);
            index += step;
            while index >= semitones {
                index -= semitones;
                octave += 1;
            }
        }
        indices.push(index);
        octave_deltas.push(octave);

        if semitones == 12 && requested == 21 {
            let column = if prefer_sharps { 0 } else { 1 };
            let notes = indices
                .iter()
                .map(|&i| generic_name(TWELVE_TO_TWENTY_ONE[i][column]))
                .collect();
            return Self {
                number_of_semitones: 21,
                note_names: (0..21).map(generic_name).collect(),
                notes,
                octave_deltas,
            };
        }

        Self {
            number_of_semitones: semitones,
            notes: indices.iter().map(|&i| note_names[i].clone()).collect(),
            note_names,
            octave_deltas,
        }
    }

    /// A chromatic scale starting from index 0.
    pub fn chromatic(number_of_semitones: usize) -> Self {
        Self::new(None, 0, number_of_semitones, true)
    }

    /// Number of semitones in the temperament the scale lives in.
    pub fn number_of_semitones(&self) -> usize {
        self.number_of_semitones
    }

    /// The generic names of the whole temperament, `n0` upward.
    pub fn note_names(&self) -> &[String] {
        &self.note_names
    }

    /// The scale as generic names, closing note included.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Octave deltas aligned with [`Scale::notes`].
    pub fn octave_deltas(&self) -> &[i32] {
        &self.octave_deltas
    }

    /// The scale, optionally mapped through a per-semitone name table.
    ///
    /// The table must have one entry per semitone. On a length mismatch the
    /// error carries the unmapped generic scale.
    pub fn get_scale(&self, pitch_format: Option<&[&str]>) -> PitchResult<Vec<String>> {
        let Some(format) = pitch_format else {
            return Ok(self.notes.clone());
        };
        if format.len() != self.number_of_semitones {
            return Err(Defaulted::invalid(
                format!(
                    "pitch format has {} names but the scale has {} semitones",
                    format.len(),
                    self.number_of_semitones
                ),
                self.notes.clone(),
            ));
        }
        Ok(self
            .notes
            .iter()
            .map(|note| {
                self.note_names
                    .iter()
                    .position(|name| name == note)
                    .map_or_else(|| note.clone(), |i| format[i].to_string())
            })
            .collect())
    }

    /// The generic scale together with its octave deltas.
    pub fn get_scale_and_octave_deltas(&self) -> (Vec<String>, Vec<i32>) {
        (self.notes.clone(), self.octave_deltas.clone())
    }

    /// Octave delta of one scale position.
    pub fn get_octave_delta(&self, index: usize) -> PitchResult<i32> {
        self.octave_deltas.get(index).copied().ok_or_else(|| {
            Defaulted::invalid(
                format!(
                    "scale index {} out of range 0..{}",
                    index,
                    self.octave_deltas.len()
                ),
                0,
            )
        })
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::chromatic(12)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.notes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PitchError;
    use crate::music::notation::{CHROMATIC_NOTES_SHARP, SOLFEGE_NAMES};

    const MAJOR: [usize; 7] = [2, 2, 1, 2, 2, 2, 1];

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_major_scale_from_c() {
        let scale = Scale::new(Some(&MAJOR[..]), 0, 12, true);
        assert_eq!(
            scale.notes(),
            names(&["n0", "n2", "n4", "n5", "n7", "n9", "n11", "n0"])
        );
        assert_eq!(
            scale.get_scale(Some(&CHROMATIC_NOTES_SHARP[..])).unwrap(),
            names(&["c", "d", "e", "f", "g", "a", "b", "c"])
        );
        assert_eq!(scale.octave_deltas(), &[0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_format_length_mismatch() {
        let scale = Scale::new(Some(&MAJOR[..]), 0, 12, true);
        let err = scale.get_scale(Some(&SOLFEGE_NAMES[..])).unwrap_err();
        assert!(matches!(err.error, PitchError::InvalidArgument(_)));
        assert_eq!(err.default, scale.notes());
    }

    #[test]
    fn test_major_scale_from_g() {
        let scale = Scale::new(Some(&MAJOR[..]), 7, 12, true);
        assert_eq!(
            scale.notes(),
            names(&["n7", "n9", "n11", "n0", "n2", "n4", "n6", "n7"])
        );
        assert_eq!(scale.get_octave_delta(3).unwrap(), 1);
        assert_eq!(scale.get_octave_delta(2).unwrap(), 0);
        assert!(scale.get_octave_delta(8).is_err());
    }

    #[test]
    fn test_chromatic_default() {
        let scale = Scale::default();
        assert_eq!(scale.notes().len(), 13);
        assert_eq!(scale.notes()[11], "n11");
        assert_eq!(scale.notes()[12], "n0");
        assert_eq!(scale.note_names().len(), 12);
    }

    #[test]
    fn test_twelve_to_twenty_one_remap() {
        let scale = Scale::new(Some(&MAJOR[..]), 7, 21, true);
        assert_eq!(scale.number_of_semitones(), 21);
        assert_eq!(
            scale.notes(),
            names(&["n12", "n15", "n18", "n0", "n3", "n6", "n10", "n12"])
        );
        let flat = Scale::new(Some(&[2, 2, 2, 1, 2, 2, 1][..]), 10, 21, false);
        assert_eq!(flat.notes()[0], "n17");
        assert_eq!(flat.note_names().len(), 21);
    }

    #[test]
    fn test_pattern_sets_semitones() {
        let scale = Scale::new(Some(&[2, 2, 1, 2, 2, 2, 7, 1][..]), 0, 12, true);
        assert_eq!(scale.number_of_semitones(), 19);
        assert_eq!(scale.notes()[7], "n18");
        assert_eq!(scale.to_string(), "[n0 n2 n4 n5 n7 n9 n11 n18 n0]");
    }

    #[test]
    fn test_zero_semitones_is_clamped() {
        let scale = Scale::chromatic(0);
        assert_eq!(scale.number_of_semitones(), 1);
        assert_eq!(scale.notes(), names(&["n0", "n0"]));
    }
}
