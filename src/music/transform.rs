// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Transposition, distance and inversion within a key signature.
//!
//! Every operation resolves its input to a generic name, works on temperament
//! indices, and renders the result back in the notation it was given.

use std::fmt;
use std::str::FromStr;

use crate::error::{Defaulted, PitchResult, Recover};
use crate::music::key_signature::KeySignature;
use crate::music::notation::{
    find_flat_index, find_sharp_index, index_of, is_a_flat, is_a_sharp, normalize_pitch,
    strip_accidental, PitchNotation, ALL_NOTES, CHROMATIC_NOTES_FLAT, CHROMATIC_NOTES_SHARP,
};

/// How [`KeySignature::invert`] reflects a pitch around its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvertMode {
    /// Reflect around the axis pitch itself
    Even,
    /// Reflect around the point a half step below the axis
    Odd,
    /// Reflect by scale degrees
    Scalar,
}

impl FromStr for InvertMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "even" => Ok(InvertMode::Even),
            "odd" => Ok(InvertMode::Odd),
            "scalar" => Ok(InvertMode::Scalar),
            other => Err(format!("unknown invert mode: {}", other)),
        }
    }
}

impl fmt::Display for InvertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvertMode::Even => "even",
            InvertMode::Odd => "odd",
            InvertMode::Scalar => "scalar",
        };
        write!(f, "{}", name)
    }
}

/// Narrows to `i32`, pinning values outside its range to the nearest end.
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Wraps a raw index into `0..n`, returning the octaves crossed.
fn wrap(index: i64, n: i32) -> (usize, i32) {
    let n = i64::from(n);
    (index.rem_euclid(n) as usize, saturate(index.div_euclid(n)))
}

/// Step size of one semitone in the 21 note letter layout.
fn twenty_one_increment(delta: i32, step: i32) -> i32 {
    let r = step % 3;
    if (delta == 0 && r == 2) || (delta == 1 && r == 1) || (delta == -1 && r == 2) {
        2
    } else {
        1
    }
}

impl KeySignature {
    /// Letter name and octave offset of a scale degree, counted from the tonic.
    pub fn modal_pitch_to_letter(&self, modal_index: i32) -> (String, i32) {
        let mode_length = self.mode_length() as i32;
        if mode_length == 0 {
            return (self.key().to_string(), 0);
        }
        let (i, octave) = wrap(i64::from(modal_index), mode_length);
        (self.scale[i].clone(), octave)
    }

    /// Whether a pitch, in any notation, is one of the notes of the mode.
    pub fn note_in_scale(&self, target: &str) -> bool {
        matches!(self.closest_note(target), Ok((_, _, 0)))
    }

    /// Finds the scale note nearest to a pitch.
    ///
    /// Returns the note in the target's notation, its scale index and the
    /// signed distance from the target to it in semitones. Ties go to the
    /// lower scale index.
    pub fn closest_note(&self, target: &str) -> PitchResult<(String, usize, i32)> {
        let target = normalize_pitch(target);
        let notation = self.pitch_name_type(&target);
        let prefer_sharps = target.contains('#');
        let n = self.number_of_semitones as i32;

        let mut generic = self.convert_to_generic_note_name(&target).recover();
        if let Some((index, delta)) = self.split_generic(&generic) {
            generic = self.note_names[(index + delta).rem_euclid(n) as usize].clone();
        }

        let scale = &self.generic_scale()[..self.mode_length()];
        if let Some(i) = scale.iter().position(|note| *note == generic) {
            let name = self.generic_note_name_convert_to_type(&generic, notation, prefer_sharps);
            return Ok((name, i, 0));
        }

        let fallback = (target.clone(), 0, 0);
        let Some(target_index) = self.note_names.iter().position(|name| *name == generic) else {
            return Err(Defaulted::not_found(
                format!("cannot find closest note to {}", target),
                fallback,
            ));
        };

        let mut closest = None;
        let mut distance = n;
        for (i, note) in scale.iter().enumerate() {
            let Some(index) = self.note_names.iter().position(|name| name == note) else {
                continue;
            };
            let same_octave = index as i32 - target_index as i32;
            let next_octave = same_octave + n;
            if same_octave.abs() < distance.abs() {
                distance = same_octave;
                closest = Some(i);
            }
            if next_octave.abs() < distance.abs() {
                distance = next_octave;
                closest = Some(i);
            }
        }

        match closest {
            Some(i) => {
                let name = self.generic_note_name_convert_to_type(&scale[i], notation, prefer_sharps);
                Ok((name, i, distance))
            }
            None => Err(Defaulted::not_found(
                format!("cannot find closest note to {}", target),
                fallback,
            )),
        }
    }

    /// Moves a pitch by semitones, keeping its notation.
    ///
    /// Returns the new pitch and the number of octaves crossed. On failure the
    /// error carries the starting pitch and no octave change.
    pub fn semitone_transform(&self, starting_pitch: &str, steps: i32) -> PitchResult<(String, i32)> {
        let start = normalize_pitch(starting_pitch);
        let notation = self.pitch_name_type(&start);
        let n = self.number_of_semitones as i32;
        let not_found = || {
            Defaulted::not_found(
                format!("pitch name {} not found", start),
                (start.clone(), 0),
            )
        };

        if n == 12 {
            if notation == PitchNotation::Letter {
                return self.letter_semitone_transform(&start, steps).ok_or_else(not_found);
            }
            let generic = self.convert_to_generic_note_name(&start).recover();
            let Some((index, delta)) = self.split_generic(&generic) else {
                return Err(not_found());
            };
            let (i, octave) = wrap(i64::from(index + delta) + i64::from(steps), n);
            let name = self.generic_note_name_convert_to_type(
                &self.note_names[i],
                notation,
                start.contains('#'),
            );
            return Ok((name, octave));
        }

        let (base, delta) = strip_accidental(&start);
        if n == 21 {
            if let Some(index) = index_of(&ALL_NOTES, &start) {
                // the increments repeat every three steps
                let count = i64::from(steps).abs();
                let per_cycle: i64 = (0..3).map(|r| i64::from(twenty_one_increment(delta, r))).sum();
                let mut slots = per_cycle * (count / 3);
                for step in 0..(count % 3) as i32 {
                    slots += i64::from(twenty_one_increment(delta, step));
                }
                let (i, octave) = wrap(index as i64 + i64::from(steps.signum()) * slots, n);
                return Ok((ALL_NOTES[i].to_string(), octave));
            }
        }

        let Some(index) = self.note_names.iter().position(|name| *name == base) else {
            return Err(not_found());
        };
        let (i, octave) = wrap(index as i64 + i64::from(delta) + i64::from(steps), n);
        Ok((self.note_names[i].clone(), octave))
    }

    fn letter_semitone_transform(&self, start: &str, steps: i32) -> Option<(String, i32)> {
        let carry = self.letter_octave_carry(start);
        if is_a_sharp(start) {
            let index = find_sharp_index(start).ok()? as i64;
            let (i, octave) = wrap(index + i64::from(steps), 12);
            return Some((CHROMATIC_NOTES_SHARP[i].to_string(), octave.saturating_add(carry)));
        }
        if is_a_flat(start) {
            let index = find_flat_index(start).ok()? as i64;
            let (i, octave) = wrap(index + i64::from(steps), 12);
            return Some((CHROMATIC_NOTES_FLAT[i].to_string(), octave.saturating_add(carry)));
        }
        let (base, delta) = strip_accidental(start);
        let generic = self.convert_to_generic_note_name(&base).ok()?;
        let (index, _) = self.split_generic(&generic)?;
        let (i, octave) = wrap(i64::from(index + delta) + i64::from(steps), 12);
        let name = self.generic_to_letter_name(&self.note_names[i], delta > 0).recover();
        let octave = self.spelled_octave(&name, octave);
        Some((name, octave))
    }

    /// Octave to write next to a rendered name whose pitch sits in `octave`.
    /// A `"cb"` that sounds in octave 3 is written as octave 4.
    fn spelled_octave(&self, name: &str, octave: i32) -> i32 {
        octave.saturating_sub(self.letter_octave_carry(name))
    }

    /// Moves a pitch by scale degrees, keeping its notation.
    ///
    /// A pitch outside the mode moves with its nearest scale note and keeps its
    /// offset from it. Returns the new pitch and the octaves crossed, or the
    /// starting pitch unchanged when it cannot be resolved.
    pub fn scalar_transform(&self, starting_pitch: &str, steps: i32) -> (String, i32) {
        let start = normalize_pitch(starting_pitch);
        let notation = self.pitch_name_type(&start);
        let n = self.number_of_semitones as i32;
        let mode_length = self.mode_length() as i32;
        if mode_length == 0 {
            return (start, 0);
        }

        let generic = self.convert_to_generic_note_name(&start).recover();
        let Some((index, delta)) = self.split_generic(&generic) else {
            return (start, 0);
        };
        let Ok((_, from, _)) = self.closest_note(&generic) else {
            return (start, 0);
        };

        let degree = from as i64 + i64::from(steps);
        let to = degree.rem_euclid(i64::from(mode_length)) as usize;
        let laps = degree.div_euclid(i64::from(mode_length));
        let position = |i: usize| -> Option<i64> {
            let note = self.generic_scale().get(i)?;
            let index = self.note_names.iter().position(|name| name == note)? as i64;
            Some(index + i64::from(n) * i64::from(self.octave_deltas().get(i).copied().unwrap_or(0)))
        };
        let (Some(from_position), Some(to_position)) = (position(from), position(to)) else {
            return (start, 0);
        };

        let travelled = to_position - from_position + i64::from(n) * laps;
        let (i, octave) = wrap(i64::from(index + delta) + travelled, n);
        let name =
            self.generic_note_name_convert_to_type(&self.note_names[i], notation, start.contains('#'));
        let octave = self
            .spelled_octave(&name, octave)
            .saturating_add(self.letter_octave_carry(&start));
        (name, octave)
    }

    /// Absolute semitone number of a pitch in an octave.
    ///
    /// Accidentals that cross the octave line move the octave too, so `"cb"`
    /// in octave 4 is the `"b"` of octave 3.
    fn pitch_to_note_number(&self, pitch: &str, octave: i32) -> i64 {
        let n = self.number_of_semitones as i64;
        let (generic, carry) = self.generic_with_carry(pitch).recover();
        let index = self.split_generic(&generic).map_or(0, |(index, _)| index);
        (i64::from(octave) + i64::from(carry)) * n + i64::from(index)
    }

    /// Semitones from the first pitch up to the second.
    pub fn semitone_distance(
        &self,
        pitch_a: &str,
        octave_a: i32,
        pitch_b: &str,
        octave_b: i32,
    ) -> i32 {
        saturate(self.pitch_to_note_number(pitch_b, octave_b) - self.pitch_to_note_number(pitch_a, octave_a))
    }

    /// Scale degrees from the first pitch up to the second.
    ///
    /// Pitches outside the mode count as their nearest scale note; the second
    /// value is the sum of those semitone offsets.
    pub fn scalar_distance(
        &self,
        pitch_a: &str,
        octave_a: i32,
        pitch_b: &str,
        octave_b: i32,
    ) -> (i32, i32) {
        let (_, index_a, distance_a) = self.closest_note(pitch_a).recover();
        let (_, index_b, distance_b) = self.closest_note(pitch_b).recover();
        let mode_length = self.mode_length() as i64;
        let octave_delta = |i: usize| i64::from(self.octave_deltas().get(i).copied().unwrap_or(0));
        let a = index_a as i64 + mode_length * (i64::from(octave_a) - octave_delta(index_a));
        let b = index_b as i64 + mode_length * (i64::from(octave_b) - octave_delta(index_b));
        (saturate(b - a), distance_a + distance_b)
    }

    /// Reflects a pitch around an axis pitch.
    ///
    /// Returns the inverted pitch in the input's notation and its octave.
    pub fn invert(
        &self,
        pitch: &str,
        octave: i32,
        axis: &str,
        axis_octave: i32,
        mode: InvertMode,
    ) -> (String, i32) {
        match mode {
            InvertMode::Even | InvertMode::Odd => {
                let distance = i64::from(self.semitone_distance(axis, axis_octave, pitch, octave));
                let steps = match mode {
                    InvertMode::Even => 2 * distance,
                    _ => 2 * distance - 1,
                };
                let (inverted, crossed) = self.semitone_transform(pitch, saturate(-steps)).recover();
                (inverted, octave.saturating_add(crossed))
            }
            InvertMode::Scalar => {
                let (distance, _) = self.scalar_distance(axis, axis_octave, pitch, octave);
                let steps = saturate(-2 * i64::from(distance));
                let (inverted, crossed) = self.scalar_transform(pitch, steps);
                (inverted, octave.saturating_add(crossed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::key_signature::Mode;

    fn custom_c_major() -> KeySignature {
        let mut ks = KeySignature::default();
        ks.set_custom_note_names(
            ["charlie", "delta", "echo", "foxtrot", "golf", "alfa", "bravo"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        ks
    }

    fn pair(name: &str, octave: i32) -> (String, i32) {
        (name.to_string(), octave)
    }

    #[test]
    fn test_closest_note() {
        let ks = KeySignature::default();
        assert_eq!(ks.closest_note("c").unwrap(), ("c".to_string(), 0, 0));
        assert_eq!(ks.closest_note("f#").unwrap(), ("f".to_string(), 3, -1));
        assert_eq!(ks.closest_note("g#").unwrap(), ("g".to_string(), 4, -1));
        assert_eq!(ks.closest_note("cb").unwrap(), ("b".to_string(), 6, 0));
        assert_eq!(ks.closest_note("db").unwrap(), ("c".to_string(), 0, -1));
        assert_eq!(ks.closest_note("n10#").unwrap(), ("n11".to_string(), 6, 0));
        assert_eq!(ks.closest_note("n10x").unwrap(), ("n0".to_string(), 0, 0));
        assert_eq!(ks.closest_note("sol").unwrap(), ("sol".to_string(), 4, 0));
        assert!(ks.closest_note("foobar").is_err());
    }

    #[test]
    fn test_closest_note_wraps_octave() {
        let ks = KeySignature::new("major pentatonic", "c", 12);
        // b is one below c of the next octave
        assert_eq!(ks.closest_note("b").unwrap(), ("c".to_string(), 0, 1));
    }

    #[test]
    fn test_note_in_scale() {
        let ks = KeySignature::new("major", "g", 12);
        assert!(ks.note_in_scale("f#"));
        assert!(ks.note_in_scale("gb"));
        assert!(!ks.note_in_scale("f"));
        assert!(!ks.note_in_scale("foobar"));
    }

    #[test]
    fn test_semitone_transform_letters() {
        let ks = KeySignature::default();
        assert_eq!(ks.semitone_transform("c", 1).unwrap(), pair("c#", 0));
        assert_eq!(ks.semitone_transform("c", -1).unwrap(), pair("b", -1));
        assert_eq!(ks.semitone_transform("b", 1).unwrap(), pair("c", 1));
        assert_eq!(ks.semitone_transform("gb", -1).unwrap(), pair("f", 0));
        assert_eq!(ks.semitone_transform("a#", -1).unwrap(), pair("a", 0));
        assert_eq!(ks.semitone_transform("c#", 2).unwrap(), pair("d#", 0));
        assert_eq!(ks.semitone_transform("c", 24).unwrap(), pair("c", 2));
    }

    #[test]
    fn test_semitone_transform_other_notations() {
        let ks = custom_c_major();
        assert_eq!(ks.semitone_transform("n0b", -1).unwrap(), pair("n10", -1));
        assert_eq!(ks.semitone_transform("n11x", 1).unwrap(), pair("n2", 1));
        assert_eq!(ks.semitone_transform("sol", 3).unwrap(), pair("tib", 0));
        assert_eq!(ks.semitone_transform("5", 3).unwrap(), pair("7b", 0));
        assert_eq!(ks.semitone_transform("pa", 3).unwrap(), pair("nib", 0));
        assert_eq!(ks.semitone_transform("golf", 3).unwrap(), pair("alfa#", 0));
        assert_eq!(ks.semitone_transform("n7", 5).unwrap(), pair("n0", 1));
        let err = ks.semitone_transform("foobar", 1).unwrap_err();
        assert_eq!(err.default, pair("foobar", 0));
    }

    #[test]
    fn test_semitone_transform_twenty_one() {
        let ks = KeySignature::new(Mode::HalfSteps(Vec::new()), "c", 21);
        assert_eq!(ks.semitone_transform("gb", 1).unwrap(), pair("g", 0));
        assert_eq!(ks.semitone_transform("cb", 3).unwrap(), pair("d", 1));
        assert_eq!(ks.semitone_transform("c", -3).unwrap(), pair("bb", -1));

        let ks = KeySignature::new("lydian", "bb", 21);
        assert_eq!(ks.semitone_transform("n18", -1).unwrap(), pair("n17", 0));
    }

    #[test]
    fn test_letter_spellings_cross_octave() {
        let ks = KeySignature::default();
        assert_eq!(ks.semitone_distance("c", 4, "cb", 4), -1);
        assert_eq!(ks.semitone_distance("c", 4, "n0b", 4), -1);
        assert_eq!(ks.semitone_distance("b", 3, "cb", 4), 0);
        assert_eq!(ks.semitone_distance("c", 5, "b#", 4), 0);
        assert_eq!(ks.semitone_distance("c", 4, "cbb", 4), -2);
        assert_eq!(ks.semitone_distance("c", 4, "bx", 3), 1);
        assert_eq!(ks.semitone_distance("e", 4, "fb", 4), 0);

        assert_eq!(ks.semitone_transform("cb", 1).unwrap(), pair("c", 0));
        assert_eq!(ks.semitone_transform("b#", 1).unwrap(), pair("c#", 1));
        assert_eq!(ks.semitone_transform("cbb", 1).unwrap(), pair("b", -1));
        assert_eq!(ks.semitone_transform("bx", -1).unwrap(), pair("c", 1));
        assert_eq!(ks.scalar_transform("cb", 1), pair("c", 0));

        let ks = KeySignature::new("major", "gb", 12);
        assert_eq!(ks.scalar_transform("cb", 1), pair("db", 0));
        assert_eq!(ks.scalar_transform("bb", 1), pair("b", 0));
    }

    #[test]
    fn test_transform_extreme_steps() {
        let ks = KeySignature::default();
        assert_eq!(ks.semitone_transform("n7", i32::MAX).unwrap(), pair("n2", 178_956_971));
        assert_eq!(ks.semitone_transform("n7", i32::MIN).unwrap(), pair("n11", -178_956_971));
        assert_eq!(ks.semitone_transform("g", i32::MAX).unwrap(), pair("d", 178_956_971));
        assert_eq!(ks.scalar_transform("g", i32::MAX), pair("a", 306_783_378));
        assert_eq!(ks.scalar_transform("c", i32::MIN), pair("a", -306_783_379));
        assert_eq!(ks.semitone_distance("c", i32::MIN, "c", i32::MAX), i32::MAX);
        assert_eq!(ks.scalar_distance("c", i32::MAX, "c", i32::MIN).0, i32::MIN);

        let nineteen = KeySignature::new(Mode::HalfSteps(vec![3, 3, 2, 3, 3, 3, 2]), "n0", 19);
        assert_eq!(nineteen.semitone_transform("n0", i32::MAX).unwrap(), pair("n2", 113_025_455));
    }

    #[test]
    fn test_twenty_one_walk_matches_stepwise() {
        let ks = KeySignature::new(Mode::HalfSteps(Vec::new()), "c", 21);
        assert_eq!(ks.semitone_transform("c", 7).unwrap(), pair("f", 0));
        assert_eq!(ks.semitone_transform("c#", 5).unwrap(), pair("fb", 0));
        assert_eq!(ks.semitone_transform("c", i32::MAX).unwrap(), pair("c#", 136_348_168));
        assert_eq!(ks.semitone_transform("c", i32::MIN).unwrap(), pair("b#", -136_348_169));
    }

    #[test]
    fn test_scalar_transform() {
        let ks = KeySignature::default();
        assert_eq!(ks.scalar_transform("c", 1), pair("d", 0));
        assert_eq!(ks.scalar_transform("b", 1), pair("c", 1));
        assert_eq!(ks.scalar_transform("c", -1), pair("b", -1));
        assert_eq!(ks.scalar_transform("c", 7), pair("c", 1));
        assert_eq!(ks.scalar_transform("c#", 2), pair("f", 0));
        assert_eq!(ks.scalar_transform("sol", 2), pair("ti", 0));
        assert_eq!(ks.scalar_transform("n7", 3), pair("n0", 1));
        assert_eq!(ks.scalar_transform("foobar", 3), pair("foobar", 0));
    }

    #[test]
    fn test_scalar_transform_g_major() {
        let ks = KeySignature::new("major", "g", 12);
        assert_eq!(ks.scalar_transform("g", 1), pair("a", 0));
        assert_eq!(ks.scalar_transform("b", 1), pair("c", 1));
        assert_eq!(ks.scalar_transform("e", 2), pair("g", 0));
        assert_eq!(ks.scalar_transform("f#", -1), pair("e", 0));
        assert_eq!(ks.scalar_transform("a", -1), pair("g", 0));
        assert_eq!(ks.scalar_transform("c", -1), pair("b", -1));
    }

    #[test]
    fn test_modal_pitch_to_letter() {
        let ks = KeySignature::default();
        assert_eq!(ks.modal_pitch_to_letter(0), pair("c", 0));
        assert_eq!(ks.modal_pitch_to_letter(9), pair("e", 1));
        assert_eq!(ks.modal_pitch_to_letter(-2), pair("a", -1));
    }

    #[test]
    fn test_distances() {
        let ks = KeySignature::default();
        assert_eq!(ks.semitone_distance("c", 4, "g", 4), 7);
        assert_eq!(ks.semitone_distance("g", 4, "c", 4), -7);
        assert_eq!(ks.semitone_distance("c", 4, "c", 5), 12);
        assert_eq!(ks.semitone_distance("sol", 4, "g", 4), 0);
        assert_eq!(ks.scalar_distance("c", 4, "g", 4), (4, 0));
        assert_eq!(ks.scalar_distance("c", 4, "c", 5), (7, 0));
        assert_eq!(ks.scalar_distance("c", 4, "f#", 4), (3, -1));

        let ks = KeySignature::new("major", "g", 12);
        assert_eq!(ks.scalar_distance("g", 4, "c", 5), (3, 0));
    }

    #[test]
    fn test_invert() {
        let ks = KeySignature::default();
        assert_eq!(ks.invert("d", 4, "c", 4, InvertMode::Even), pair("a#", 3));
        assert_eq!(ks.invert("f", 4, "c", 4, InvertMode::Odd), pair("g#", 3));
        assert_eq!(ks.invert("e", 4, "c", 4, InvertMode::Scalar), pair("a", 3));
        assert_eq!(ks.invert("c", 4, "c", 4, InvertMode::Even), pair("c", 4));
    }

    #[test]
    fn test_invert_mode_from_str() {
        assert_eq!("Scalar".parse::<InvertMode>().unwrap(), InvertMode::Scalar);
        assert_eq!(InvertMode::Odd.to_string(), "odd");
        assert!("sideways".parse::<InvertMode>().is_err());
    }
}
