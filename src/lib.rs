// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch core: notation, scales, key signatures and a tuned pitch cursor.
//!
//! Every pitch spelling resolves to a generic temperament index (`n<i>`)
//! before any arithmetic, and is rendered back in the caller's notation.

pub mod config;
pub mod error;
pub mod music;
pub mod pitch;
pub mod temperament;

pub use config::PitchConfig;
pub use error::{Defaulted, PitchError, PitchResult, Recover};
pub use music::{InvertMode, KeySignature, Mode, PitchNotation, Scale};
pub use pitch::{CurrentPitch, PitchValue};
pub use temperament::{StandardTemperament, Temperament};
