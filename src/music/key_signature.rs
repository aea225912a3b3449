// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key signatures: a key and mode bound to a temperament size.
//!
//! A [`KeySignature`] owns the generic [`Scale`] of its mode, the scale spelled
//! with letter names, and the per-mode solfège, East-Indian and scale degree
//! tables. It converts pitch names between every supported notation. The
//! transposition, distance and inversion arithmetic lives in `transform.rs`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Defaulted, PitchResult, Recover};
use crate::music::notation::{
    accidental_suffix, enharmonics, find_flat_index, find_sharp_index, generic_index,
    get_pitch_type, index_of, is_a_flat, is_a_sharp, letter_index, letter_semitone, lookup,
    mode_half_steps, normalize_pitch, prefers_sharps, strip_accidental, PitchNotation,
    ALL_NOTES, CHROMATIC_NOTES_FLAT, CHROMATIC_NOTES_SHARP, CONVERT_DOWN, CONVERT_UP,
    EAST_INDIAN_FLAT, EAST_INDIAN_NAMES, EAST_INDIAN_SHARP, EQUIVALENT_FLATS, EQUIVALENT_SHARPS,
    MAQAM_KEY_OVERRIDES, SCALAR_MODE_NUMBERS, SCALAR_NAMES_FLAT, SCALAR_NAMES_SHARP,
    SOLFEGE_FLAT, SOLFEGE_NAMES, SOLFEGE_SHARP,
};
use crate::music::scale::Scale;

/// A mode, given by name or by an explicit half-step pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mode {
    /// One of the built-in mode names, e.g. `"dorian"`
    Named(String),
    /// Half steps between successive scale notes
    HalfSteps(Vec<usize>),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Named("major".to_string())
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::Named(name.to_string())
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Mode::Named(name)
    }
}

impl From<Vec<usize>> for Mode {
    fn from(steps: Vec<usize>) -> Self {
        Mode::HalfSteps(steps)
    }
}

impl From<&[usize]> for Mode {
    fn from(steps: &[usize]) -> Self {
        Mode::HalfSteps(steps.to_vec())
    }
}

/// A key and mode in a temperament of a given number of semitones.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySignature {
    key: String,
    mode: String,
    half_steps: Vec<usize>,
    pub(crate) generic: Scale,
    pub(crate) scale: Vec<String>,
    pub(crate) note_names: Vec<String>,
    pub(crate) number_of_semitones: usize,
    solfege_notes: Vec<String>,
    east_indian_solfege_notes: Vec<String>,
    scalar_mode_numbers: Vec<String>,
    fixed_solfege: bool,
    custom_note_names: Vec<String>,
}

impl KeySignature {
    /// Creates a key signature.
    ///
    /// Mode names are case-insensitive; unknown names fall back to chromatic.
    /// Some maqam names imply their own key, which replaces `key`. Only
    /// 12-semitone key signatures get letter, solfège and degree tables.
    pub fn new(mode: impl Into<Mode>, key: &str, number_of_semitones: usize) -> Self {
        let mut key = normalize_pitch(key);
        let (mode, half_steps) = match mode.into() {
            Mode::Named(name) => {
                let mut name = name.to_lowercase();
                if let Some(forced) = lookup(MAQAM_KEY_OVERRIDES, &name) {
                    key = forced.to_string();
                    name = "maqam".to_string();
                }
                match mode_half_steps(&name) {
                    Some(steps) => (name, steps.to_vec()),
                    None => {
                        debug!("Mode {:?} not found; using chromatic", name);
                        ("chromatic".to_string(), vec![1; 12])
                    }
                }
            }
            Mode::HalfSteps(steps) => ("custom".to_string(), steps),
        };

        let prefer_sharps = prefers_sharps(&key, &mode) || key.contains('#');
        let spans_twenty_one =
            number_of_semitones == 21 && half_steps.iter().sum::<usize>() != 12;
        let start = match index_of(&ALL_NOTES, &key).filter(|_| spans_twenty_one) {
            Some(i) => i,
            None => Self::resolve_key(&mut key, prefer_sharps),
        };

        let generic = Scale::new(Some(half_steps.as_slice()), start, number_of_semitones, prefer_sharps);
        let semitones = generic.number_of_semitones();
        let note_names = generic.note_names().to_vec();

        let mut ks = Self {
            key,
            mode,
            half_steps,
            scale: Vec::new(),
            note_names,
            number_of_semitones: semitones,
            solfege_notes: Vec::new(),
            east_indian_solfege_notes: Vec::new(),
            scalar_mode_numbers: Vec::new(),
            fixed_solfege: false,
            custom_note_names: Vec::new(),
            generic,
        };

        if semitones == 12 {
            if let Some(i) = generic_index(&ks.key) {
                ks.key = CHROMATIC_NOTES_SHARP[i % 12].to_string();
            }
            let format = if prefers_sharps(&ks.key, &ks.mode) || ks.key.contains('#') {
                CHROMATIC_NOTES_SHARP
            } else {
                CHROMATIC_NOTES_FLAT
            };
            let mut scale = ks.generic.get_scale(Some(&format[..])).recover();
            if let Some(first) = scale.first_mut() {
                *first = ks.key.clone();
            }
            if let Some(last) = scale.last_mut() {
                *last = ks.key.clone();
            }
            ks.scale = normalize_with(&ks.key, &ks.mode, scale);
            ks.solfege_notes = mode_map_list(&ks.scale, &SOLFEGE_NAMES);
            ks.east_indian_solfege_notes = mode_map_list(&ks.scale, &EAST_INDIAN_NAMES);
            ks.scalar_mode_numbers = mode_map_list(&ks.scale, &SCALAR_MODE_NUMBERS);
        } else if semitones == 21 {
            ks.scale = ks.generic.get_scale(Some(&ALL_NOTES[..])).recover();
        } else {
            ks.scale = ks.generic.notes().to_vec();
        }
        ks
    }

    /// Starting semitone of the key, switching it to an equivalent spelling if needed.
    fn resolve_key(key: &mut String, prefer_sharps: bool) -> usize {
        if prefer_sharps {
            if !CHROMATIC_NOTES_SHARP.contains(&key.as_str()) {
                if let Some(sharp) = lookup(EQUIVALENT_SHARPS, key) {
                    *key = sharp.to_string();
                }
            }
            if let Ok(i) = find_sharp_index(key) {
                return i;
            }
        } else if CHROMATIC_NOTES_FLAT.contains(&key.as_str()) || key.contains('b') {
            if !CHROMATIC_NOTES_FLAT.contains(&key.as_str()) {
                if let Some(flat) = lookup(EQUIVALENT_FLATS, key) {
                    *key = flat.to_string();
                }
            }
            if let Ok(i) = find_flat_index(key) {
                return i;
            }
        } else if let Some(i) = generic_index(key) {
            return i;
        }
        debug!("Could not find key index for {:?}; using 0", key);
        0
    }

    /// The key, normalized to lowercase ASCII.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The resolved mode name, `"custom"` for explicit patterns.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Half-step pattern of the mode.
    pub fn half_steps(&self) -> &[usize] {
        &self.half_steps
    }

    /// Spelled scale without the closing note.
    pub fn scale(&self) -> &[String] {
        &self.scale[..self.mode_length()]
    }

    /// Spelled scale including the closing note.
    pub fn closed_scale(&self) -> &[String] {
        &self.scale
    }

    /// Generic scale including the closing note.
    pub fn generic_scale(&self) -> &[String] {
        self.generic.notes()
    }

    /// Octave deltas aligned with the generic scale.
    pub fn octave_deltas(&self) -> &[i32] {
        self.generic.octave_deltas()
    }

    /// Generic names of every semitone in the temperament.
    pub fn note_names(&self) -> &[String] {
        &self.note_names
    }

    pub fn number_of_semitones(&self) -> usize {
        self.number_of_semitones
    }

    /// Number of notes in the mode.
    pub fn mode_length(&self) -> usize {
        self.scale.len().saturating_sub(1)
    }

    pub fn solfege_notes(&self) -> &[String] {
        &self.solfege_notes
    }

    pub fn east_indian_solfege_notes(&self) -> &[String] {
        &self.east_indian_solfege_notes
    }

    pub fn scalar_mode_numbers(&self) -> &[String] {
        &self.scalar_mode_numbers
    }

    /// Whether solfège and degree names follow the mode rather than C.
    pub fn fixed_solfege(&self) -> bool {
        self.fixed_solfege
    }

    pub fn set_fixed_solfege(&mut self, fixed: bool) {
        self.fixed_solfege = fixed;
    }

    pub fn custom_note_names(&self) -> &[String] {
        &self.custom_note_names
    }

    /// Names each note of the mode.
    ///
    /// There must be exactly one unique name per mode note. A name may not
    /// already read as a note in another notation, and may not be another
    /// name plus an accidental. Otherwise the current names are kept.
    pub fn set_custom_note_names(&mut self, names: Vec<String>) -> PitchResult<()> {
        let names: Vec<String> = names.iter().map(|name| normalize_pitch(name)).collect();
        if names.len() != self.mode_length() {
            return Err(Defaulted::invalid(
                format!(
                    "{} custom names given for a mode of {} notes",
                    names.len(),
                    self.mode_length()
                ),
                (),
            ));
        }
        let unique: HashSet<&String> = names.iter().collect();
        if unique.len() != names.len() {
            return Err(Defaulted::invalid("custom note names must be unique", ()));
        }
        for name in &names {
            if get_pitch_type(name) != PitchNotation::Unknown {
                return Err(Defaulted::invalid(
                    format!("custom note name {} is already a {}", name, get_pitch_type(name)),
                    (),
                ));
            }
            let (base, delta) = strip_accidental(name);
            if delta != 0 && names.contains(&base) {
                return Err(Defaulted::invalid(
                    format!("custom note name {} is an accidental of {}", name, base),
                    (),
                ));
            }
        }
        self.custom_note_names = names;
        Ok(())
    }

    /// Removes double accidentals and repeated or skipped letters from a spelled scale.
    pub fn normalize_scale(&self, scale: &[String]) -> Vec<String> {
        normalize_with(&self.key, &self.mode, scale.to_vec())
    }

    /// Notation of a pitch name, including this key's custom names.
    pub fn pitch_name_type(&self, pitch: &str) -> PitchNotation {
        let pitch = normalize_pitch(pitch);
        if self.custom_note_names.contains(&pitch) {
            return PitchNotation::Custom;
        }
        match get_pitch_type(&pitch) {
            PitchNotation::Unknown => {
                let (base, _) = strip_accidental(&pitch);
                if self.custom_note_names.contains(&base) {
                    PitchNotation::Custom
                } else {
                    PitchNotation::Unknown
                }
            }
            kind => kind,
        }
    }

    /// Resolves a pitch in any notation to its generic name.
    ///
    /// Generic names are returned as given, accidental included. On failure the
    /// error carries the normalized input.
    pub fn convert_to_generic_note_name(&self, pitch: &str) -> PitchResult<String> {
        let pitch = normalize_pitch(pitch);
        let notation = self.pitch_name_type(&pitch);
        if notation == PitchNotation::Generic {
            return Ok(pitch);
        }
        if self.number_of_semitones == 21 {
            if let Some(name) = index_of(&ALL_NOTES, &pitch).and_then(|i| self.note_names.get(i)) {
                return Ok(name.clone());
            }
        }

        let resolved = match notation {
            PitchNotation::Letter => self.letter_to_generic(&pitch),
            PitchNotation::Solfege => {
                if self.fixed_solfege {
                    self.name_converter(&pitch, &self.solfege_notes)
                } else {
                    self.movable_to_generic(&pitch, &SOLFEGE_SHARP, &SOLFEGE_FLAT)
                }
            }
            PitchNotation::EastIndianSolfege => {
                if self.fixed_solfege {
                    self.name_converter(&pitch, &self.east_indian_solfege_notes)
                } else {
                    self.movable_to_generic(&pitch, &EAST_INDIAN_SHARP, &EAST_INDIAN_FLAT)
                }
            }
            PitchNotation::ScalarModeNumber => {
                if self.fixed_solfege {
                    self.name_converter(&pitch, &self.scalar_mode_numbers)
                } else {
                    self.movable_to_generic(&pitch, &SCALAR_NAMES_SHARP, &SCALAR_NAMES_FLAT)
                }
            }
            PitchNotation::Custom => self.name_converter(&pitch, &self.custom_note_names),
            PitchNotation::Generic | PitchNotation::Unknown => None,
        };

        resolved.ok_or_else(|| {
            Defaulted::not_found(format!("pitch name {} not found", pitch), pitch.clone())
        })
    }

    fn letter_to_generic(&self, pitch: &str) -> Option<String> {
        let sharp = if pitch.contains('#') && is_a_sharp(pitch) {
            find_sharp_index(pitch).ok()
        } else {
            None
        };
        let index = sharp
            .or_else(|| {
                if is_a_flat(pitch) {
                    find_flat_index(pitch).ok()
                } else {
                    None
                }
            })
            .or_else(|| {
                lookup(EQUIVALENT_SHARPS, pitch)
                    .and_then(|sharp| index_of(&CHROMATIC_NOTES_SHARP, sharp))
            })
            .or_else(|| lookup(EQUIVALENT_FLATS, pitch).and_then(|flat| find_flat_index(flat).ok()))
            .or_else(|| {
                let first = enharmonics(pitch)?.first()?;
                if first.contains('#') {
                    find_sharp_index(first).ok()
                } else {
                    find_flat_index(first).ok()
                }
            })
            .or_else(|| letter_semitone(pitch).map(|s| s.rem_euclid(12) as usize))?;
        self.note_names.get(index).cloned()
    }

    fn movable_to_generic(&self, pitch: &str, sharp: &[&str; 12], flat: &[&str; 12]) -> Option<String> {
        let from_sharp = if pitch.contains('#') {
            index_of(sharp, pitch)
        } else {
            None
        };
        let index = from_sharp.or_else(|| index_of(flat, pitch)).or_else(|| {
            let (base, delta) = strip_accidental(pitch);
            index_of(flat, &base).map(|i| (i as i32 + delta).rem_euclid(12) as usize)
        })?;
        self.note_names.get(index).cloned()
    }

    /// Resolves a name through a table aligned with the spelled scale.
    fn name_converter(&self, pitch: &str, names: &[String]) -> Option<String> {
        if let Some(i) = names.iter().position(|n| n == pitch) {
            let note = self.scale.get(i)?;
            return Some(self.convert_to_generic_note_name(note).recover());
        }
        let (base, delta) = strip_accidental(pitch);
        let i = names.iter().position(|n| *n == base)?;
        let note = self.convert_to_generic_note_name(self.scale.get(i)?).recover();
        let j = self.note_names.iter().position(|n| *n == note)?;
        let n = self.note_names.len() as i32;
        self.note_names
            .get((j as i32 + delta).rem_euclid(n) as usize)
            .cloned()
    }

    /// Index and accidental of a generic name, e.g. `"n3#"` is `(3, 1)`.
    pub(crate) fn split_generic(&self, name: &str) -> Option<(i32, i32)> {
        let (base, delta) = strip_accidental(name);
        let i = self.note_names.iter().position(|n| *n == base)?;
        Some((i as i32, delta))
    }

    /// Octaves a letter spelling sits away from its letter, e.g. `"cb"` is -1 and `"b#"` is 1.
    pub(crate) fn letter_octave_carry(&self, pitch: &str) -> i32 {
        if self.number_of_semitones != 12 || self.pitch_name_type(pitch) != PitchNotation::Letter {
            return 0;
        }
        letter_semitone(pitch).map_or(0, |s| s.div_euclid(12))
    }

    /// Plain generic name of a pitch and the octaves its spelling crosses.
    ///
    /// `"n0b"` and `"cb"` both resolve to `("n11", -1)`. On failure the error
    /// carries the normalized input and no octave change.
    pub(crate) fn generic_with_carry(&self, pitch: &str) -> PitchResult<(String, i32)> {
        let pitch = normalize_pitch(pitch);
        let generic = self
            .convert_to_generic_note_name(&pitch)
            .map_err(|err| err.map(|name| (name, 0)))?;
        let Some((index, delta)) = self.split_generic(&generic) else {
            return Err(Defaulted::not_found(
                format!("pitch name {} not found", pitch),
                (pitch.clone(), 0),
            ));
        };
        let n = self.number_of_semitones as i32;
        let name = self.note_names[(index + delta).rem_euclid(n) as usize].clone();
        let carry = (index + delta).div_euclid(n) + self.letter_octave_carry(&pitch);
        Ok((name, carry))
    }

    pub(crate) fn generic_to_letter_name(&self, note: &str, prefer_sharps: bool) -> PitchResult<String> {
        let note = normalize_pitch(note);
        let (base, _) = strip_accidental(&note);
        if generic_index(&base).is_none() && (is_a_sharp(&note) || is_a_flat(&note)) {
            return Ok(note);
        }
        let position = self.note_names.iter().position(|n| *n == note);
        if self.number_of_semitones == 21 {
            return position
                .map(|i| ALL_NOTES[i].to_string())
                .ok_or_else(|| Defaulted::not_found(format!("{} is not a generic name", note), note.clone()));
        }
        if self.number_of_semitones != 12 {
            return Err(Defaulted::invalid(
                format!("cannot spell {} in {} semitones", note, self.number_of_semitones),
                note,
            ));
        }
        match position {
            Some(i) if prefer_sharps => Ok(CHROMATIC_NOTES_SHARP[i].to_string()),
            Some(i) => Ok(CHROMATIC_NOTES_FLAT[i].to_string()),
            None => Err(Defaulted::not_found(format!("{} is not a generic name", note), note)),
        }
    }

    /// Renders a generic name through a table aligned with the spelled scale.
    fn convert_from_note_name(&self, note: &str, names: &[String]) -> PitchResult<String> {
        let note = normalize_pitch(note);
        if names.contains(&note) {
            return Ok(note);
        }
        if self.number_of_semitones != 12 {
            return Err(Defaulted::invalid(
                format!("mode tables need 12 semitones, not {}", self.number_of_semitones),
                note,
            ));
        }
        let Some(i) = self.note_names.iter().position(|n| *n == note) else {
            return Err(Defaulted::not_found(format!("{} is not a generic name", note), note));
        };
        let (_, index, distance) = self
            .closest_note(CHROMATIC_NOTES_SHARP[i])
            .map_err(|err| err.map(|_| note.clone()))?;
        let Some(name) = names.get(index) else {
            return Err(Defaulted::not_found(format!("no name for scale index {}", index), note));
        };
        if distance == 0 {
            return Ok(name.clone());
        }
        let (base, delta) = strip_accidental(name);
        match accidental_suffix(delta - distance) {
            Some(suffix) => Ok(format!("{}{}", base, suffix)),
            None => Err(Defaulted::not_found(format!("cannot respell {}", name), note)),
        }
    }

    fn find_moveable(
        &self,
        note: &str,
        sharp: &[&str; 12],
        flat: &[&str; 12],
        prefer_sharps: bool,
    ) -> PitchResult<String> {
        let note = normalize_pitch(note);
        if sharp.contains(&note.as_str()) || flat.contains(&note.as_str()) {
            return Ok(note);
        }
        if self.number_of_semitones != 12 {
            return Err(Defaulted::invalid(
                format!("movable names need 12 semitones, not {}", self.number_of_semitones),
                note,
            ));
        }
        match self.note_names.iter().position(|n| *n == note) {
            Some(i) if prefer_sharps => Ok(sharp[i].to_string()),
            Some(i) => Ok(flat[i].to_string()),
            None => Err(Defaulted::invalid(format!("{} is not a generic name", note), note)),
        }
    }

    fn generic_to_mode_name(
        &self,
        note: &str,
        fixed: &[String],
        sharp: &[&str; 12],
        flat: &[&str; 12],
        prefer_sharps: bool,
    ) -> String {
        if self.fixed_solfege {
            self.convert_from_note_name(note, fixed).recover()
        } else {
            self.find_moveable(note, sharp, flat, prefer_sharps).recover()
        }
    }

    /// Renders a generic name in the given notation.
    pub fn generic_note_name_convert_to_type(
        &self,
        note: &str,
        notation: PitchNotation,
        prefer_sharps: bool,
    ) -> String {
        match notation {
            PitchNotation::Generic | PitchNotation::Unknown => note.to_string(),
            PitchNotation::Letter => self.generic_to_letter_name(note, prefer_sharps).recover(),
            PitchNotation::Solfege => self.generic_to_mode_name(
                note,
                &self.solfege_notes,
                &SOLFEGE_SHARP,
                &SOLFEGE_FLAT,
                prefer_sharps,
            ),
            PitchNotation::EastIndianSolfege => self.generic_to_mode_name(
                note,
                &self.east_indian_solfege_notes,
                &EAST_INDIAN_SHARP,
                &EAST_INDIAN_FLAT,
                prefer_sharps,
            ),
            PitchNotation::ScalarModeNumber => self.generic_to_mode_name(
                note,
                &self.scalar_mode_numbers,
                &SCALAR_NAMES_SHARP,
                &SCALAR_NAMES_FLAT,
                prefer_sharps,
            ),
            PitchNotation::Custom => self
                .convert_from_note_name(note, &self.custom_note_names)
                .recover(),
        }
    }
}

impl Default for KeySignature {
    fn default() -> Self {
        Self::new("major", "c", 12)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.key.chars();
        let key: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        write!(
            f,
            "{} {} [{}]",
            key,
            self.mode.to_uppercase(),
            self.scale.join(" ")
        )
    }
}

fn first_letter(note: &str) -> Option<char> {
    note.chars().next()
}

fn sharpen_flats(scale: &mut [String]) {
    for note in scale.iter_mut() {
        if note.contains('b') {
            if let Some(sharp) = lookup(EQUIVALENT_SHARPS, note) {
                *note = sharp.to_string();
            }
        }
    }
}

/// Respells a letter scale so it uses single accidentals and each letter once.
fn normalize_with(key: &str, mode: &str, mut scale: Vec<String>) -> Vec<String> {
    let len = scale.len();
    if len < 9 {
        if !prefers_sharps(key, mode) && key.contains('#') {
            sharpen_flats(&mut scale);
        }

        // No skipped letters in a seven note mode.
        if len == 8 {
            for i in 0..len - 1 {
                let here = first_letter(&scale[i]).and_then(letter_index);
                let next = first_letter(&scale[i + 1]).and_then(letter_index);
                let (Some(here), Some(mut next)) = (here, next) else {
                    continue;
                };
                if next < here {
                    next += 7;
                }
                if next - here > 1 {
                    if let Some(down) = lookup(CONVERT_DOWN, &scale[i + 1]) {
                        scale[i + 1] = down.to_string();
                    }
                }
            }
        }

        // No repeated letters.
        for i in 0..len.saturating_sub(1) {
            if first_letter(&scale[i]) != first_letter(&scale[i + 1]) {
                continue;
            }
            if i > 0 {
                if let Some(down) = lookup(CONVERT_DOWN, &scale[i]) {
                    if first_letter(down) != first_letter(&scale[i - 1]) {
                        scale[i] = down.to_string();
                        continue;
                    }
                }
            }
            if let Some(up) = lookup(CONVERT_UP, &scale[i + 1]) {
                scale[i + 1] = up.to_string();
            }
        }
    } else if key.contains('#') {
        sharpen_flats(&mut scale);
    }

    let mut convert_up = false;
    let mut convert_down = false;
    for note in &scale {
        if note.contains('x') {
            convert_up = true;
            break;
        }
        if note.len() > 2 {
            convert_down = true;
        }
    }

    if convert_up {
        for note in scale.iter_mut() {
            if note.contains('x') {
                if let Some(up) = lookup(CONVERT_UP, note) {
                    *note = up.to_string();
                }
            }
            if let Some(flat) = lookup(EQUIVALENT_FLATS, note) {
                *note = flat.to_string();
            }
        }
    } else if convert_down {
        for note in scale.iter_mut() {
            let was_flat = lookup(EQUIVALENT_SHARPS, note).is_some();
            if note.len() > 2 {
                if let Some(down) = lookup(CONVERT_DOWN, note) {
                    *note = down.to_string();
                }
            }
            if was_flat {
                if let Some(sharp) = lookup(EQUIVALENT_SHARPS, note) {
                    *note = sharp.to_string();
                }
            }
        }
    }
    scale
}

/// Maps each scale note's letter offset from the tonic into a seven name table.
///
/// Modes longer than seven notes repeat letters, so those entries carry the
/// note's accidental.
fn mode_map_list(scale: &[String], names: &[&str]) -> Vec<String> {
    let mode_length = scale.len().saturating_sub(1);
    let offset = scale
        .first()
        .and_then(|n| first_letter(n))
        .and_then(letter_index)
        .unwrap_or(0);
    let mut mapped: Vec<String> = scale[..mode_length]
        .iter()
        .map(|note| {
            let letter = first_letter(note).and_then(letter_index).unwrap_or(offset);
            let name = names[(letter + names.len() - offset) % names.len()];
            if mode_length < 8 {
                name.to_string()
            } else {
                let (_, delta) = strip_accidental(note);
                format!("{}{}", name, accidental_suffix(delta).unwrap_or(""))
            }
        })
        .collect();
    if let Some(first) = mapped.first().cloned() {
        mapped.push(first);
    }
    mapped
}
