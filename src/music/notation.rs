// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch notation tables and string helpers.
//!
//! Every notation the crate understands is described here as static data:
//! letter names with accidentals, fixed and movable solfège, East-Indian
//! solfège, scalar mode numbers and the `n<i>` generic names. The helpers
//! normalize, classify and respell pitch strings without any key context.

use std::fmt;

use crate::error::{Defaulted, PitchError, PitchResult};

/// Unicode sharp glyph.
pub const SHARP: &str = "♯";
/// Unicode flat glyph.
pub const FLAT: &str = "♭";
/// Unicode natural glyph.
pub const NATURAL: &str = "♮";
/// Unicode double sharp glyph.
pub const DOUBLE_SHARP: &str = "𝄪";
/// Unicode double flat glyph.
pub const DOUBLE_FLAT: &str = "𝄫";

/// The seven pitch letters, starting from C.
pub const PITCH_LETTERS: [&str; 7] = ["c", "d", "e", "f", "g", "a", "b"];

/// Twelve chromatic letter names, spelled with sharps.
pub const CHROMATIC_NOTES_SHARP: [&str; 12] =
    ["c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b"];

/// Twelve chromatic letter names, spelled with flats.
pub const CHROMATIC_NOTES_FLAT: [&str; 12] =
    ["c", "db", "d", "eb", "e", "f", "gb", "g", "ab", "a", "bb", "b"];

/// Letter names of a 21-step octave.
pub const ALL_NOTES: [&str; 21] = [
    "c", "c#", "db", "d", "d#", "eb", "e", "e#", "fb", "f", "f#", "gb", "g", "g#", "ab", "a",
    "a#", "bb", "b", "b#", "cb",
];

/// Scale degree numbers of a seven note mode.
pub const SCALAR_MODE_NUMBERS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// Solfège syllables of a seven note mode.
pub const SOLFEGE_NAMES: [&str; 7] = ["do", "re", "me", "fa", "sol", "la", "ti"];

/// East-Indian solfège syllables of a seven note mode.
pub const EAST_INDIAN_NAMES: [&str; 7] = ["sa", "re", "ga", "ma", "pa", "dha", "ni"];

/// Movable solfège over twelve semitones, sharps.
pub const SOLFEGE_SHARP: [&str; 12] = [
    "do", "do#", "re", "re#", "me", "fa", "fa#", "sol", "sol#", "la", "la#", "ti",
];

/// Movable solfège over twelve semitones, flats.
pub const SOLFEGE_FLAT: [&str; 12] = [
    "do", "reb", "re", "meb", "me", "fa", "solb", "sol", "lab", "la", "tib", "ti",
];

/// East-Indian solfège over twelve semitones, sharps.
pub const EAST_INDIAN_SHARP: [&str; 12] = [
    "sa", "sa#", "re", "re#", "ga", "ma", "ma#", "pa", "pa#", "dha", "dha#", "ni",
];

/// East-Indian solfège over twelve semitones, flats.
pub const EAST_INDIAN_FLAT: [&str; 12] = [
    "sa", "reb", "re", "gab", "ga", "ma", "pab", "pa", "dhab", "dha", "nib", "ni",
];

/// Scalar mode numbers over twelve semitones, sharps.
pub const SCALAR_NAMES_SHARP: [&str; 12] =
    ["1", "1#", "2", "2#", "3", "4", "4#", "5", "5#", "6", "6#", "7"];

/// Scalar mode numbers over twelve semitones, flats.
pub const SCALAR_NAMES_FLAT: [&str; 12] =
    ["1", "2b", "2", "3b", "3", "4", "5b", "5", "6b", "6", "7b", "7"];

/// Sharp spelling to flat spelling.
pub const EQUIVALENT_FLATS: &[(&str, &str)] = &[
    ("c#", "db"),
    ("d#", "eb"),
    ("f#", "gb"),
    ("g#", "ab"),
    ("a#", "bb"),
    ("e#", "f"),
    ("b#", "c"),
    ("cb", "cb"),
    ("fb", "fb"),
];

/// Flat spelling to sharp spelling.
pub const EQUIVALENT_SHARPS: &[(&str, &str)] = &[
    ("db", "c#"),
    ("eb", "d#"),
    ("gb", "f#"),
    ("ab", "g#"),
    ("bb", "a#"),
    ("cb", "b"),
    ("fb", "e"),
    ("e#", "e#"),
    ("b#", "b#"),
];

/// Enharmonic spellings of every letter name, preferred spelling first.
pub const EQUIVALENTS: &[(&str, &[&str])] = &[
    ("ax", &["b", "cb"]),
    ("a#", &["bb"]),
    ("a", &["a", "bbb", "gx"]),
    ("ab", &["g#"]),
    ("abb", &["g", "fx"]),
    ("bx", &["c#"]),
    ("b#", &["c", "dbb"]),
    ("b", &["b", "cb", "ax"]),
    ("bb", &["a#"]),
    ("bbb", &["a", "gx"]),
    ("cx", &["d"]),
    ("c#", &["db"]),
    ("c", &["c", "dbb", "b#"]),
    ("cb", &["b"]),
    ("cbb", &["bb", "a#"]),
    ("dx", &["e", "fb"]),
    ("d#", &["eb", "fbb"]),
    ("d", &["d", "ebb", "cx"]),
    ("db", &["c#", "bx"]),
    ("dbb", &["c", "b#"]),
    ("ex", &["f#", "gb"]),
    ("e#", &["f", "gbb"]),
    ("e", &["e", "fb", "dx"]),
    ("eb", &["d#", "fbb"]),
    ("ebb", &["d", "cx"]),
    ("fx", &["g", "abb"]),
    ("f#", &["gb", "ex"]),
    ("f", &["f", "e#", "gbb"]),
    ("fb", &["e", "dx"]),
    ("fbb", &["eb", "d#"]),
    ("gx", &["a", "bbb"]),
    ("g#", &["ab"]),
    ("g", &["g", "abb", "fx"]),
    ("gb", &["f#", "ex"]),
    ("gbb", &["f", "e#"]),
];

/// Respell a note with the letter below.
pub const CONVERT_DOWN: &[(&str, &str)] = &[
    ("c", "b#"),
    ("cb", "b"),
    ("cbb", "a#"),
    ("d", "cx"),
    ("db", "c#"),
    ("dbb", "c"),
    ("e", "dx"),
    ("eb", "d#"),
    ("ebb", "d"),
    ("f", "e#"),
    ("fb", "e"),
    ("fbb", "d#"),
    ("g", "fx"),
    ("gb", "f#"),
    ("gbb", "f"),
    ("a", "gx"),
    ("ab", "g#"),
    ("abb", "g"),
    ("b", "ax"),
    ("bb", "a#"),
    ("bbb", "a"),
];

/// Respell a note with the letter above.
pub const CONVERT_UP: &[(&str, &str)] = &[
    ("cx", "d"),
    ("c#", "db"),
    ("c", "dbb"),
    ("dx", "e"),
    ("d#", "eb"),
    ("d", "ebb"),
    ("ex", "f#"),
    ("e#", "f"),
    ("e", "fb"),
    ("fx", "g"),
    ("f#", "gb"),
    ("f", "gbb"),
    ("gx", "a"),
    ("g#", "ab"),
    ("g", "abb"),
    ("ax", "b"),
    ("a#", "bb"),
    ("a", "bbb"),
    ("bx", "c#"),
    ("b#", "c"),
    ("b", "cb"),
];

/// Half-step patterns of the named modes.
pub const MUSICAL_MODES: &[(&str, &[usize])] = &[
    // 12 notes
    ("chromatic", &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    // 8 notes
    ("algerian", &[2, 1, 2, 1, 1, 1, 3, 1]),
    ("diminished", &[2, 1, 2, 1, 2, 1, 2, 1]),
    ("spanish", &[1, 2, 1, 1, 1, 2, 2, 2]),
    ("octatonic", &[1, 2, 1, 2, 1, 2, 1, 2]),
    ("bebop", &[1, 1, 1, 2, 2, 1, 2, 2]),
    // 7 notes
    ("major", &[2, 2, 1, 2, 2, 2, 1]),
    ("harmonic major", &[2, 2, 1, 2, 1, 3, 1]),
    ("minor", &[2, 1, 2, 2, 1, 2, 2]),
    ("natural minor", &[2, 1, 2, 2, 1, 2, 2]),
    ("harmonic minor", &[2, 1, 2, 2, 1, 3, 1]),
    ("melodic minor", &[2, 1, 2, 2, 2, 2, 1]),
    // Church modes
    ("ionian", &[2, 2, 1, 2, 2, 2, 1]),
    ("dorian", &[2, 1, 2, 2, 2, 1, 2]),
    ("phrygian", &[1, 2, 2, 2, 1, 2, 2]),
    ("lydian", &[2, 2, 2, 1, 2, 2, 1]),
    ("mixolydian", &[2, 2, 1, 2, 2, 1, 2]),
    ("aeolian", &[2, 1, 2, 2, 1, 2, 2]),
    ("locrian", &[1, 2, 2, 1, 2, 2, 2]),
    ("jazz minor", &[2, 1, 2, 2, 2, 2, 1]),
    ("arabic", &[2, 2, 1, 1, 2, 2, 2]),
    ("byzantine", &[1, 3, 1, 2, 1, 3, 1]),
    ("enigmatic", &[1, 3, 2, 2, 2, 1, 1]),
    ("ethiopian", &[2, 1, 2, 2, 1, 2, 2]),
    ("geez", &[2, 1, 2, 2, 1, 2, 2]),
    ("hindu", &[2, 2, 1, 2, 1, 2, 2]),
    ("hungarian", &[2, 1, 3, 1, 1, 3, 1]),
    ("maqam", &[1, 3, 1, 2, 1, 3, 1]),
    ("romanian minor", &[2, 1, 3, 1, 2, 1, 2]),
    ("spanish gypsy", &[1, 3, 1, 2, 1, 2, 2]),
    // 6 notes
    ("minor blues", &[3, 2, 1, 1, 3, 2]),
    ("major blues", &[2, 1, 1, 3, 2, 3]),
    ("whole tone", &[2, 2, 2, 2, 2, 2]),
    // 5 notes
    ("major pentatonic", &[2, 2, 3, 2, 3]),
    ("minor pentatonic", &[3, 2, 2, 3, 2]),
    ("chinese", &[4, 2, 1, 4, 1]),
    ("egyptian", &[2, 3, 2, 3, 2]),
    ("hirajoshi", &[1, 4, 1, 4, 2]),
    ("in", &[1, 4, 2, 1, 4]),
    ("minyo", &[3, 2, 2, 3, 2]),
    ("fibonacci", &[1, 1, 2, 3, 5]),
];

/// Maqam mode names that imply a specific key.
pub const MAQAM_KEY_OVERRIDES: &[(&str, &str)] = &[
    ("hijaz kar", "c"),
    ("hijaz kar maqam", "c"),
    ("shahnaz", "d"),
    ("maqam mustar", "eb"),
    ("maqam jiharkah", "f"),
    ("shadd araban", "g"),
    ("suzidil", "a"),
    ("ajam", "bb"),
    ("ajam maqam", "bb"),
];

/// `"<key> <mode>"` pairs that are spelled with sharps.
pub const PREFER_SHARPS: &[&str] = &[
    "c major",
    "c major pentatonic",
    "c major blues",
    "c whole tone",
    "d dorian",
    "e phrygian",
    "f lydian",
    "g mixolydian",
    "a minor",
    "a minor pentatonic",
    "b locrian",
    "g major",
    "g major pentatonic",
    "g major blues",
    "g whole tone",
    "a dorian",
    "b phrygian",
    "c lydian",
    "d mixolydian",
    "e minor",
    "e minor pentatonic",
    "f# locrian",
    "d major",
    "d major pentatonic",
    "d major blues",
    "d whole tone",
    "e dorian",
    "f# phrygian",
    "g lydian",
    "a mixolydian",
    "b minor",
    "b minor pentatonic",
    "c# locrian",
    "a major",
    "a major pentatonic",
    "a major blues",
    "a whole tone",
    "b dorian",
    "c# phrygian",
    "d lydian",
    "e mixolydian",
    "f# minor",
    "f# minor pentatonic",
    "e major",
    "e major pentatonic",
    "e major blues",
    "e whole tone",
    "f# dorian",
    "a lydian",
    "b mixolydian",
    "c# minor",
    "c# minor pentatonic",
    "b major",
    "b major pentatonic",
    "b major blues",
    "b whole tone",
    "c# dorian",
    "d# phrygian",
    "e lydian",
    "f# mixolydian",
    "g# minor",
    "g# minor pentatonic",
    "a# locrian",
];

/// Accidental suffixes indexed by `delta + 2`.
const ACCIDENTAL_SUFFIXES: [&str; 5] = ["bb", "b", "", "#", "x"];

/// The notation a pitch string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchNotation {
    /// Letter name with optional accidental, e.g. `"c#"`, `"ebb"`, `"gx"`
    Letter,
    /// Solfège syllable, e.g. `"sol"`, `"tib"`
    Solfege,
    /// East-Indian solfège syllable, e.g. `"pa"`
    EastIndianSolfege,
    /// Scale degree number, e.g. `"5"`, `"7b"`
    ScalarModeNumber,
    /// A user supplied name
    Custom,
    /// Temperament index name, e.g. `"n7"`
    Generic,
    /// Not recognized by any table
    Unknown,
}

impl fmt::Display for PitchNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PitchNotation::Letter => "letter name",
            PitchNotation::Solfege => "solfege name",
            PitchNotation::EastIndianSolfege => "east indian solfege name",
            PitchNotation::ScalarModeNumber => "scalar mode number",
            PitchNotation::Custom => "custom name",
            PitchNotation::Generic => "generic note name",
            PitchNotation::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Looks up `key` in a static pair table.
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Enharmonic spellings of a letter name.
pub fn enharmonics(pitch: &str) -> Option<&'static [&'static str]> {
    EQUIVALENTS
        .iter()
        .find(|(name, _)| *name == pitch)
        .map(|(_, names)| *names)
}

/// Position of `name` in a name table.
pub fn index_of(table: &[&str], name: &str) -> Option<usize> {
    table.iter().position(|n| *n == name)
}

/// Index of a pitch letter, `c` being 0.
pub fn letter_index(letter: char) -> Option<usize> {
    "cdefgab".find(letter)
}

/// Formats a generic note name.
pub fn generic_name(index: usize) -> String {
    format!("n{}", index)
}

/// Parses the index out of a plain `n<i>` name.
pub fn generic_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('n')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// ASCII suffix for an accidental delta in `-2..=2`.
pub fn accidental_suffix(delta: i32) -> Option<&'static str> {
    usize::try_from(delta + 2)
        .ok()
        .and_then(|i| ACCIDENTAL_SUFFIXES.get(i))
        .copied()
}

/// Splits a pitch into its base name and accidental delta.
///
/// Handles both the ASCII (`#`, `b`, `x`, `bb`) and the Unicode glyph forms.
/// A single character pitch never carries an accidental, so `"b"` is B natural.
pub fn strip_accidental(pitch: &str) -> (String, i32) {
    if pitch.chars().count() == 1 {
        return (pitch.to_string(), 0);
    }
    if pitch.chars().count() > 2 {
        if let Some(base) = pitch.strip_suffix("bb") {
            return (base.to_string(), -2);
        }
    }
    let suffixes: [(&str, i32); 8] = [
        ("b", -1),
        ("#", 1),
        ("x", 2),
        (DOUBLE_FLAT, -2),
        (FLAT, -1),
        (SHARP, 1),
        (DOUBLE_SHARP, 2),
        (NATURAL, 0),
    ];
    for (suffix, delta) in suffixes {
        if let Some(base) = pitch.strip_suffix(suffix) {
            return (base.to_string(), delta);
        }
    }
    (pitch.to_string(), 0)
}

/// Lowercases a pitch and replaces Unicode accidentals with their ASCII forms.
pub fn normalize_pitch(pitch: &str) -> String {
    pitch
        .to_lowercase()
        .replacen(SHARP, "#", 1)
        .replacen(DOUBLE_SHARP, "x", 1)
        .replacen(FLAT, "b", 1)
        .replacen(DOUBLE_FLAT, "bb", 1)
        .replacen(NATURAL, "", 1)
}

/// Renders a normalized letter name with an uppercase letter and Unicode accidentals.
pub fn display_pitch(pitch: &str) -> String {
    let mut chars = pitch.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let mut out: String = first.to_uppercase().collect();
    if rest.chars().count() >= 2 && rest.starts_with("bb") {
        out.push_str(DOUBLE_FLAT);
        out.push_str(&rest[2..]);
        return out;
    }
    match rest.chars().next() {
        Some('#') => {
            out.push_str(SHARP);
            out.push_str(&rest[1..]);
        }
        Some('x') => {
            out.push_str(DOUBLE_SHARP);
            out.push_str(&rest[1..]);
        }
        Some('b') => {
            out.push_str(FLAT);
            out.push_str(&rest[1..]);
        }
        _ => out.push_str(rest),
    }
    out
}

/// True for sharp spellings and plain letters.
pub fn is_a_sharp(pitch: &str) -> bool {
    pitch.ends_with('#') || PITCH_LETTERS.contains(&pitch)
}

/// True for flat spellings and plain letters.
pub fn is_a_flat(pitch: &str) -> bool {
    pitch.ends_with('b') || PITCH_LETTERS.contains(&pitch)
}

/// Chromatic index of a spelling found in either chromatic table.
fn chromatic_index(pitch: &str) -> Option<usize> {
    index_of(&CHROMATIC_NOTES_SHARP, pitch).or_else(|| index_of(&CHROMATIC_NOTES_FLAT, pitch))
}

/// Index of a pitch in the sharp chromatic table, respelling upward when needed.
///
/// `"gx"` resolves through `"a"`, `"e#"` through `"f"`.
pub fn find_sharp_index(pitch: &str) -> PitchResult<usize> {
    let pitch = normalize_pitch(pitch);
    index_of(&CHROMATIC_NOTES_SHARP, &pitch)
        .or_else(|| lookup(CONVERT_UP, &pitch).and_then(chromatic_index))
        .ok_or_else(|| Defaulted::not_found(format!("cannot find {} in sharp names", pitch), 0))
}

/// Index of a pitch in the flat chromatic table, respelling downward when needed.
///
/// `"cbb"` respells to `"a#"`, which is found among the sharps.
pub fn find_flat_index(pitch: &str) -> PitchResult<usize> {
    let pitch = normalize_pitch(pitch);
    index_of(&CHROMATIC_NOTES_FLAT, &pitch)
        .or_else(|| lookup(CONVERT_DOWN, &pitch).and_then(chromatic_index))
        .ok_or_else(|| Defaulted::not_found(format!("cannot find {} in flat names", pitch), 0))
}

/// Chromatic index of any letter spelling by letter offset plus accidental.
pub fn letter_semitone(pitch: &str) -> Option<i32> {
    const OFFSETS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
    let (base, delta) = strip_accidental(&normalize_pitch(pitch));
    let mut chars = base.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    letter_index(letter).map(|i| OFFSETS[i] + delta)
}

/// Checks that a string is a letter name with at most a single accidental.
pub fn validate_pitch(pitch: &str) -> Result<(), PitchError> {
    let pitch = normalize_pitch(pitch);
    let mut chars = pitch.chars();
    let letter = chars
        .next()
        .ok_or_else(|| PitchError::invalid("empty pitch name"))?;
    if letter_index(letter).is_none() {
        return Err(PitchError::invalid(format!(
            "The pitch letter '{}' is not one of {}",
            letter,
            PITCH_LETTERS.join(", ")
        )));
    }
    match chars.as_str() {
        "" | "#" | "b" => Ok(()),
        accidental => Err(PitchError::invalid(format!(
            "The accidental '{}' is not one of #, b",
            accidental
        ))),
    }
}

/// Classifies a pitch string by syntax alone.
///
/// Letter tables are consulted first, then generic names, then the solfège,
/// East-Indian and scalar tables on the accidental-free base. `"re"` belongs
/// to both solfège tables and is reported as solfège.
pub fn get_pitch_type(pitch: &str) -> PitchNotation {
    let pitch = normalize_pitch(pitch);
    if CHROMATIC_NOTES_SHARP.contains(&pitch.as_str())
        || CHROMATIC_NOTES_FLAT.contains(&pitch.as_str())
        || lookup(EQUIVALENT_SHARPS, &pitch).is_some()
        || lookup(EQUIVALENT_FLATS, &pitch).is_some()
    {
        return PitchNotation::Letter;
    }
    let (base, _) = strip_accidental(&pitch);
    if generic_index(&base).is_some() {
        PitchNotation::Generic
    } else if SOLFEGE_NAMES.contains(&base.as_str()) {
        PitchNotation::Solfege
    } else if EAST_INDIAN_NAMES.contains(&base.as_str()) {
        PitchNotation::EastIndianSolfege
    } else if SCALAR_MODE_NUMBERS.contains(&base.as_str()) {
        PitchNotation::ScalarModeNumber
    } else if PITCH_LETTERS.contains(&base.as_str()) {
        PitchNotation::Letter
    } else {
        PitchNotation::Unknown
    }
}

/// Half-step pattern of a named mode.
pub fn mode_half_steps(mode: &str) -> Option<&'static [usize]> {
    MUSICAL_MODES
        .iter()
        .find(|(name, _)| *name == mode)
        .map(|(_, steps)| *steps)
}

/// Names of all built-in modes.
pub fn mode_names() -> Vec<&'static str> {
    MUSICAL_MODES.iter().map(|(name, _)| *name).collect()
}

/// Whether `"<key> <mode>"` is conventionally spelled with sharps.
pub fn prefers_sharps(key: &str, mode: &str) -> bool {
    let pair = format!("{} {}", key, mode);
    PREFER_SHARPS.contains(&pair.as_str())
}
