// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tuning systems.
//!
//! A temperament maps absolute note indices to frequencies and back. The
//! [`Temperament`] trait is the contract the pitch cursor consumes;
//! [`StandardTemperament`] provides the ratio-based and equal temperaments.

pub mod standard;

pub use standard::{StandardTemperament, C0};

/// Index and frequency lookups over a tuning system.
///
/// An absolute index counts notes from the lowest note of the temperament.
/// A modal index counts notes within one octave.
pub trait Temperament {
    /// Notes per octave
    fn number_of_semitones_in_octave(&self) -> usize;

    /// Notes across every octave
    fn number_of_notes_in_temperament(&self) -> usize;

    /// Generic name of a note within the octave
    fn note_name(&self, semitone_index: usize) -> String;

    /// Position of a generic name within the octave
    fn modal_index(&self, generic_name: &str) -> Option<usize>;

    /// Frequency of a modal index in an octave, clamped to the temperament's range
    fn freq_by_modal_index_and_octave(&self, modal_index: usize, octave: i32) -> f64;

    /// Frequency of an absolute index, clamped to the temperament's range
    fn freq_by_index(&self, index: i64) -> f64;

    /// Absolute index of the note nearest to a frequency
    fn nearest_freq_index(&self, freq: f64) -> usize;

    /// Splits an absolute index into modal index and octave
    fn modal_index_and_octave_from_freq_index(&self, index: usize) -> (usize, i32);
}
